use log::{debug, error};
use rand::{rngs::OsRng, CryptoRng, RngCore};

use crate::error::Result;
use crate::packet::{PacketNumber, PacketNumberLen};

/// Generates a random initial packet number that fits into `len` bytes, using the OS CSPRNG.
///
/// Fails if the operating system cannot provide randomness. The failure is not retried.
pub fn generate_packet_number(len: PacketNumberLen) -> Result<PacketNumber> {
    generate_packet_number_with(&mut OsRng, len)
}

/// Generates a random initial packet number that fits into `len` bytes, drawing from `rng`.
pub fn generate_packet_number_with<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    len: PacketNumberLen,
) -> Result<PacketNumber> {
    let mut bytes = [0u8; 8];
    if let Err(e) = rng.try_fill_bytes(&mut bytes[8 - len.bytes()..]) {
        error!("Could not generate an initial packet number: {}", e);
        return Err(e.into());
    }

    let pn = PacketNumber::from_be_bytes(bytes);
    debug!("Generated initial packet number {} ({})", pn, len);
    Ok(pn)
}
