use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Decides which datagrams get lost and how far they may be reordered.
#[derive(Debug, Clone, Copy)]
pub struct ChannelConditioner {
    /// Probability in `0.0..=1.0` that a datagram is dropped.
    pub drop_rate: f64,
    /// How many datagrams sent later may overtake a datagram.
    pub max_reorder: usize,
}

impl Default for ChannelConditioner {
    fn default() -> Self {
        ChannelConditioner {
            drop_rate: 0.0,
            max_reorder: 0,
        }
    }
}

/// A one-way datagram channel that loses and reorders datagrams, deterministically for a given seed.
#[derive(Debug)]
pub struct PacketNumberChannel {
    conditioner: ChannelConditioner,
    rng: Pcg64,
    in_flight: VecDeque<Vec<u8>>,
    cnt_sent: u64,
    cnt_dropped: u64,
}

impl PacketNumberChannel {
    /// Creates a channel with the given conditions.
    pub fn new(seed: u64, conditioner: ChannelConditioner) -> PacketNumberChannel {
        PacketNumberChannel {
            conditioner,
            rng: Pcg64::seed_from_u64(seed),
            in_flight: VecDeque::new(),
            cnt_sent: 0,
            cnt_dropped: 0,
        }
    }

    /// Sends a datagram, it might get dropped or overtake some of the datagrams in flight.
    pub fn send(&mut self, datagram: Vec<u8>) {
        self.cnt_sent += 1;
        if self.rng.gen_bool(self.conditioner.drop_rate) {
            self.cnt_dropped += 1;
            return;
        }

        let overtake = self
            .rng
            .gen_range(0..=self.conditioner.max_reorder)
            .min(self.in_flight.len());
        self.in_flight
            .insert(self.in_flight.len() - overtake, datagram);
    }

    /// Receives the next datagram, if any.
    pub fn receive(&mut self) -> Option<Vec<u8>> {
        self.in_flight.pop_front()
    }

    /// Returns the number of datagrams passed to `send`.
    pub fn sent(&self) -> u64 {
        self.cnt_sent
    }

    /// Returns the number of datagrams that were dropped.
    pub fn dropped(&self) -> u64 {
        self.cnt_dropped
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::generator::{PacketNumberGenerator, SkippingGenerator};
    use crate::packet::{
        decode_packet_number, packet_number_length_for_header, read_packet_number,
        write_packet_number, PacketNumber, PacketNumberLen,
    };
    use crate::{generate_packet_number, Config};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::{ChannelConditioner, PacketNumberChannel};

    // Reads the header bits, the truncated packet number and the full packet number appended
    // after it, then checks the decoded value against the full one.
    fn process(datagram: &[u8], largest_processed: &mut PacketNumber) {
        let len = PacketNumberLen::from_header_bits(datagram[0]);
        let mut cursor = Cursor::new(&datagram[1..]);
        let truncated = read_packet_number(&mut cursor, len).unwrap();
        let pn = decode_packet_number(len, *largest_processed, truncated);

        let mut sent = [0u8; 8];
        sent.copy_from_slice(&datagram[1 + len.bytes()..]);
        assert_eq!(pn, PacketNumber::from_be_bytes(sent));

        *largest_processed = (*largest_processed).max(pn);
    }

    /// Sends `count` packets through the channel and checks the receiver recovers every
    /// packet number. The receiver's acknowledgments reach the sender every `ack_every` packets.
    ///
    /// Both endpoints start out agreeing on `initial - 1` as the last packet number, the way
    /// a connection agrees on it during the handshake. For `initial == 0` that is
    /// `INVALID_PACKET_NUMBER`.
    fn run(
        seed: u64,
        conditioner: ChannelConditioner,
        initial: PacketNumber,
        count: usize,
        ack_every: usize,
    ) -> Vec<PacketNumberLen> {
        let config = Config {
            skip_packet_initial_period: 16,
            skip_packet_max_period: 512,
            ..Config::default()
        };
        let mut generator = SkippingGenerator::new(
            initial,
            config.skip_packet_initial_period,
            config.skip_packet_max_period,
            Pcg32::seed_from_u64(seed),
        );
        let mut channel = PacketNumberChannel::new(seed, conditioner);

        let mut largest_acked = initial - 1;
        let mut largest_processed = initial - 1;
        let mut lengths = Vec::with_capacity(count);

        for i in 0..count {
            let (_, pn) = generator.pop();
            let len = packet_number_length_for_header(pn, largest_acked);
            lengths.push(len);

            let mut datagram = vec![0x40 | len.header_bits()];
            write_packet_number(&mut datagram, pn, len).unwrap();
            datagram.extend_from_slice(&pn.to_be_bytes());
            channel.send(datagram);

            // at most `max_reorder` datagrams stay in flight
            while channel.in_flight.len() > conditioner.max_reorder {
                if let Some(datagram) = channel.receive() {
                    process(&datagram, &mut largest_processed);
                }
            }

            if (i + 1) % ack_every == 0 {
                largest_acked = largest_processed;
            }
        }
        while let Some(datagram) = channel.receive() {
            process(&datagram, &mut largest_processed);
        }

        assert_eq!(channel.sent() as usize, count);
        lengths
    }

    #[test]
    fn recovers_packet_numbers_over_a_perfect_channel() {
        let lengths = run(1, ChannelConditioner::default(), 0, 1_000, 1);
        assert!(lengths.iter().all(|l| *l == PacketNumberLen::Len2));
    }

    #[test]
    fn recovers_packet_numbers_with_loss_and_reordering() {
        let conditioner = ChannelConditioner {
            drop_rate: 0.2,
            max_reorder: 8,
        };
        run(2, conditioner, 0x3_ffff_fff0, 5_000, 10);
    }

    #[test]
    fn first_packets_start_from_the_sentinel() {
        let conditioner = ChannelConditioner {
            drop_rate: 0.2,
            max_reorder: 8,
        };
        let lengths = run(6, conditioner, 0, 5_000, 10);

        assert_eq!(lengths[0], PacketNumberLen::Len2);
    }

    #[test]
    fn packet_numbers_past_four_bytes() {
        // the first packets leave the 32 bit range soon after the start
        let lengths = run(7, ChannelConditioner::default(), (1 << 32) - 3, 100, 1);

        assert!(lengths.iter().all(|l| *l == PacketNumberLen::Len2));
    }

    #[test]
    fn recovers_packet_numbers_with_a_random_initial_packet_number() {
        let initial = generate_packet_number(PacketNumberLen::Len4).unwrap();
        let conditioner = ChannelConditioner {
            drop_rate: 0.05,
            max_reorder: 3,
        };
        run(3, conditioner, initial, 2_000, 7);
    }

    #[test]
    fn longer_encodings_when_acknowledgments_lag() {
        let lengths = run(4, ChannelConditioner::default(), 0, 40_000, 35_000);

        assert!(lengths.contains(&PacketNumberLen::Len2));
        assert!(lengths.contains(&PacketNumberLen::Len3));
    }

    #[test]
    fn drops_and_counts() {
        let conditioner = ChannelConditioner {
            drop_rate: 1.0,
            max_reorder: 0,
        };
        let mut channel = PacketNumberChannel::new(5, conditioner);
        for _ in 0..10 {
            channel.send(vec![1]);
        }

        assert_eq!(channel.sent(), 10);
        assert_eq!(channel.dropped(), 10);
        assert!(channel.receive().is_none());
    }

    #[quickcheck_macros::quickcheck]
    fn recovers_packet_numbers_for_any_seed(seed: u64, initial: u32) -> bool {
        let conditioner = ChannelConditioner {
            drop_rate: 0.1,
            max_reorder: 4,
        };
        run(seed, conditioner, initial as PacketNumber, 300, 5).len() == 300
    }
}
