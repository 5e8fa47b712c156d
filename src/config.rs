use std::default::Default;

use crate::{
    constants::{
        DEFAULT_INITIAL_PACKET_NUMBER_LEN, SKIP_PACKET_INITIAL_PERIOD, SKIP_PACKET_MAX_PERIOD,
    },
    error::Result,
    generator::{PacketNumberGenerator, SequentialGenerator, SkippingGenerator},
    packet::{PacketNumber, PacketNumberLen},
};

#[derive(Clone, Debug)]
/// Contains the configuration options for generating packet numbers on a packet number space.
pub struct Config {
    /// Width the initial packet number has to fit into.
    ///
    /// The randomized first packet number is drawn from `0..2^(8 * len)` so it can be sent
    /// without losing any bits. default: 2 bytes.
    pub initial_packet_number_len: PacketNumberLen,
    /// Whether outgoing packet numbers are occasionally skipped.
    ///
    /// A peer acknowledging a packet number that was never sent is trying to make us
    /// send faster than the path allows (RFC 9000 section 21.4). Skipping makes that detectable.
    pub skip_packet_numbers: bool,
    /// Average distance, in packets, between the first skipped packet numbers.
    pub skip_packet_initial_period: PacketNumber,
    /// The skip period doubles after every skip until it reaches this value.
    pub skip_packet_max_period: PacketNumber,
}

impl Config {
    /// Builds the configured packet number generator, starting at `initial`.
    pub fn packet_number_generator(
        &self,
        initial: PacketNumber,
    ) -> Result<Box<dyn PacketNumberGenerator + Send>> {
        if self.skip_packet_numbers {
            Ok(Box::new(SkippingGenerator::from_config(initial, self)?))
        } else {
            Ok(Box::new(SequentialGenerator::new(initial)))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_packet_number_len: DEFAULT_INITIAL_PACKET_NUMBER_LEN,
            skip_packet_numbers: true,
            skip_packet_initial_period: SKIP_PACKET_INITIAL_PERIOD,
            skip_packet_max_period: SKIP_PACKET_MAX_PERIOD,
        }
    }
}
