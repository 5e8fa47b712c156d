//! This module provides the packet number value types and the logic to choose, truncate, write, read and reconstruct them.

pub use self::decode::decode_packet_number;
pub use self::length::packet_number_length_for_header;
pub use self::packet_number_len::PacketNumberLen;
pub use self::wire::{read_packet_number, truncate_packet_number, write_packet_number};

mod decode;
mod length;
mod packet_number_len;
mod wire;

/// A QUIC packet number.
///
/// Valid packet numbers are in `0..=MAX_PACKET_NUMBER`. The type is signed so that
/// [`INVALID_PACKET_NUMBER`] can sit right below `0`.
pub type PacketNumber = i64;

/// Packet number used when no packet number is known yet, e.g. nothing was acknowledged.
///
/// Behaves as the predecessor of packet number `0`: `INVALID_PACKET_NUMBER + 1 == 0`.
pub const INVALID_PACKET_NUMBER: PacketNumber = -1;

/// The largest packet number QUIC allows (`2^62 - 1`).
pub const MAX_PACKET_NUMBER: PacketNumber = (1 << 62) - 1;
