//! Generation of packet numbers on the sending side.
//!
//! A packet number space starts at a random initial packet number (RFC 9000 section 9.5 asks
//! for unpredictable values) and then counts up through a [`PacketNumberGenerator`].

pub use self::initial::{generate_packet_number, generate_packet_number_with};
pub use self::sequential::SequentialGenerator;
pub use self::skipping::SkippingGenerator;

use crate::packet::PacketNumber;

mod initial;
mod sequential;
mod skipping;

/// Hands out the packet numbers of outgoing packets in a single packet number space.
pub trait PacketNumberGenerator {
    /// Returns the packet number the next call to `pop` will return.
    fn peek(&self) -> PacketNumber;

    /// Returns the next packet number to send.
    ///
    /// The flag is true when a packet number was skipped right before the returned one.
    fn pop(&mut self) -> (bool, PacketNumber);
}
