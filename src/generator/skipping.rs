use log::trace;
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Config;
use crate::error::Result;
use crate::packet::PacketNumber;

use super::PacketNumberGenerator;

/// Hands out consecutive packet numbers, but skips one every now and then.
///
/// A peer acknowledging a skipped packet number is acknowledging a packet it never received,
/// so it is caught trying to inflate the sending rate (RFC 9000 section 21.4).
///
/// # Algorithm
///
/// The next skipped packet number is drawn from `next + 3 .. next + 3 + 2 * period`.
/// After each draw the period doubles, until it reaches `max_period`. The offset of at least 3
/// guarantees that two consecutive packet numbers are never both skipped.
#[derive(Debug, Clone)]
pub struct SkippingGenerator<R: RngCore = Pcg32> {
    period: PacketNumber,
    max_period: PacketNumber,
    next: PacketNumber,
    next_to_skip: PacketNumber,
    rng: R,
}

impl SkippingGenerator<Pcg32> {
    /// Constructs a generator with the skip periods of `config`, seeded from the OS CSPRNG.
    pub fn from_config(initial: PacketNumber, config: &Config) -> Result<Self> {
        let rng = Pcg32::from_rng(OsRng)?;
        Ok(SkippingGenerator::new(
            initial,
            config.skip_packet_initial_period,
            config.skip_packet_max_period,
            rng,
        ))
    }
}

impl<R: RngCore> SkippingGenerator<R> {
    /// Constructs a new generator starting at `initial`.
    ///
    /// Periods below 1 are raised to 1.
    pub fn new(
        initial: PacketNumber,
        initial_period: PacketNumber,
        max_period: PacketNumber,
        rng: R,
    ) -> SkippingGenerator<R> {
        let period = initial_period.max(1);
        let mut generator = SkippingGenerator {
            period,
            max_period: max_period.max(period),
            next: initial,
            next_to_skip: initial,
            rng,
        };
        generator.generate_new_skip();
        generator
    }

    fn generate_new_skip(&mut self) {
        let doubled = self.period.saturating_mul(2);
        self.next_to_skip = self.next + 3 + self.rng.gen_range(0..doubled);
        self.period = doubled.min(self.max_period);
    }
}

impl<R: RngCore> PacketNumberGenerator for SkippingGenerator<R> {
    fn peek(&self) -> PacketNumber {
        if self.next == self.next_to_skip {
            return self.next + 1;
        }
        self.next
    }

    fn pop(&mut self) -> (bool, PacketNumber) {
        let next = self.next;
        if next == self.next_to_skip {
            trace!("Skipping packet number {}", next);
            self.next += 2;
            self.generate_new_skip();
            return (true, next + 1);
        }
        self.next += 1;
        (false, next)
    }
}
