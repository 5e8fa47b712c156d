//! Command line tool to try out packet number encoding and decoding.
//!
//! ```text
//! pn-tester length --pn 0xac5c02 --largest-acked 0xabe8b3
//! pn-tester encode --pn 0xac5c02 --largest-acked 0xabe8b3
//! pn-tester decode --len 2 --largest 0xa82f30ea --truncated 0x9b32
//! pn-tester generate --len 4 --count 3
//! ```

use std::convert::TryFrom;
use std::process::exit;

use clap::{Parser, Subcommand};
use log::{error, info};

use quic_packet_number::{
    decode_packet_number, generate_packet_number, packet_number_length_for_header,
    write_packet_number, Config, PacketNumber, PacketNumberLen, Result, INVALID_PACKET_NUMBER,
};

#[derive(Parser, Debug)]
#[command(name = "pn-tester", about = "QUIC packet number codec tester")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the packet number length a header would use.
    Length {
        #[arg(long, value_parser = parse_packet_number)]
        pn: PacketNumber,
        /// Largest acknowledged packet number, omit if nothing was acknowledged yet.
        #[arg(long, value_parser = parse_packet_number)]
        largest_acked: Option<PacketNumber>,
    },
    /// Prints the wire bytes of a packet number.
    Encode {
        #[arg(long, value_parser = parse_packet_number)]
        pn: PacketNumber,
        #[arg(long, value_parser = parse_packet_number)]
        largest_acked: Option<PacketNumber>,
    },
    /// Reconstructs a full packet number from a truncated one.
    Decode {
        #[arg(long, value_parser = parse_len)]
        len: PacketNumberLen,
        /// Largest processed packet number, omit if nothing was received yet.
        #[arg(long, value_parser = parse_packet_number)]
        largest: Option<PacketNumber>,
        #[arg(long, value_parser = parse_packet_number)]
        truncated: PacketNumber,
    },
    /// Generates random initial packet numbers and the packet numbers that follow them.
    Generate {
        #[arg(long, value_parser = parse_len)]
        len: Option<PacketNumberLen>,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
}

fn parse_packet_number(s: &str) -> std::result::Result<PacketNumber, String> {
    let parsed = match s.strip_prefix("0x") {
        Some(hex) => PacketNumber::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| e.to_string())
}

fn parse_len(s: &str) -> std::result::Result<PacketNumberLen, String> {
    let len: u8 = s.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
    PacketNumberLen::try_from(len).map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("{}", e);
        exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Length { pn, largest_acked } => {
            let largest_acked = largest_acked.unwrap_or(INVALID_PACKET_NUMBER);
            println!("{}", packet_number_length_for_header(pn, largest_acked));
        }
        Command::Encode { pn, largest_acked } => {
            let largest_acked = largest_acked.unwrap_or(INVALID_PACKET_NUMBER);
            let len = packet_number_length_for_header(pn, largest_acked);
            let mut buffer = Vec::new();
            write_packet_number(&mut buffer, pn, len)?;
            let hex: Vec<String> = buffer.iter().map(|b| format!("{:02x}", b)).collect();
            println!("{} ({})", hex.join(" "), len);
        }
        Command::Decode {
            len,
            largest,
            truncated,
        } => {
            let largest = largest.unwrap_or(INVALID_PACKET_NUMBER);
            let pn = decode_packet_number(len, largest, truncated);
            println!("{} (0x{:x})", pn, pn);
        }
        Command::Generate { len, count } => {
            let config = Config::default();
            let len = len.unwrap_or(config.initial_packet_number_len);
            let initial = generate_packet_number(len)?;
            info!("Initial packet number {} for {}", initial, len);

            let mut generator = config.packet_number_generator(initial)?;
            for _ in 0..count {
                let (skipped, pn) = generator.pop();
                if skipped {
                    println!("{} (skipped {})", pn, pn - 1);
                } else {
                    println!("{}", pn);
                }
            }
        }
    }
    Ok(())
}
