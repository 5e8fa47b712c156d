//! Default values used by [`Config`](crate::Config) and header parsing.

use crate::packet::{PacketNumber, PacketNumberLen};

/// The packet number length used for the first packet if none was configured.
pub const DEFAULT_INITIAL_PACKET_NUMBER_LEN: PacketNumberLen = PacketNumberLen::Len2;
/// Initial period (in packets) between two skipped packet numbers.
pub const SKIP_PACKET_INITIAL_PERIOD: PacketNumber = 256;
/// Upper bound of the skip period, it doubles after each skip until it reaches this value.
pub const SKIP_PACKET_MAX_PERIOD: PacketNumber = 128 * 1024;
/// Mask of the packet number length bits in the first byte of a QUIC header.
pub const PACKET_NUMBER_LEN_HEADER_MASK: u8 = 0x03;
