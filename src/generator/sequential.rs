use crate::packet::PacketNumber;

use super::PacketNumberGenerator;

/// Hands out consecutive packet numbers without ever skipping one.
///
/// Used for packet number spaces that only carry a few packets, e.g. Initial and Handshake.
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    next: PacketNumber,
}

impl SequentialGenerator {
    /// Constructs a new generator starting at `initial`.
    pub fn new(initial: PacketNumber) -> SequentialGenerator {
        SequentialGenerator { next: initial }
    }
}

impl PacketNumberGenerator for SequentialGenerator {
    fn peek(&self) -> PacketNumber {
        self.next
    }

    fn pop(&mut self) -> (bool, PacketNumber) {
        let next = self.next;
        self.next += 1;
        (false, next)
    }
}
