//! QUIC packet number codec.
//!
//! QUIC never puts a full 62-bit packet number on the wire. The sender picks the
//! smallest width (in bytes) that the receiver can still disambiguate, given the
//! largest packet number the peer acknowledged, and sends only the low-order bytes.
//! The receiver rebuilds the full value from those bytes and the largest packet
//! number it has processed so far (RFC 9000 Appendix A).
//!
//! # Sending
//!
//! ```
//! use quic_packet_number::{packet_number_length_for_header, write_packet_number};
//!
//! let len = packet_number_length_for_header(0xac5c02, 0xabe8b3);
//! let mut header = Vec::new();
//! write_packet_number(&mut header, 0xac5c02, len).unwrap();
//! assert_eq!(header, vec![0x5c, 0x02]);
//! ```
//!
//! # Receiving
//!
//! ```
//! use quic_packet_number::{decode_packet_number, PacketNumberLen};
//!
//! let pn = decode_packet_number(PacketNumberLen::Len2, 0xa82f30ea, 0x9b32);
//! assert_eq!(pn, 0xa82f9b32);
//! ```

#![warn(missing_docs)]

pub use self::config::Config;
pub use self::error::{DecodingErrorKind, ErrorKind, Result};
pub use self::generator::{
    generate_packet_number, generate_packet_number_with, PacketNumberGenerator,
    SequentialGenerator, SkippingGenerator,
};
pub use self::packet::{
    decode_packet_number, packet_number_length_for_header, read_packet_number,
    truncate_packet_number, write_packet_number, PacketNumber, PacketNumberLen,
    INVALID_PACKET_NUMBER, MAX_PACKET_NUMBER,
};

mod config;
mod error;
mod generator;
mod packet;

pub mod constants;
