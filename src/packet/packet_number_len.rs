use std::convert::TryFrom;
use std::fmt::{self, Display};

use crate::constants::PACKET_NUMBER_LEN_HEADER_MASK;
use crate::error::{DecodingErrorKind, ErrorKind};
use crate::packet::PacketNumber;

/// The number of bytes a truncated packet number occupies on the wire.
///
/// The discriminant is the byte count, so `len as u8 * 8` is the number of bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PacketNumberLen {
    /// One byte.
    Len1 = 1,
    /// Two bytes.
    Len2 = 2,
    /// Three bytes.
    Len3 = 3,
    /// Four bytes.
    Len4 = 4,
}

impl PacketNumberLen {
    /// All lengths, shortest first.
    pub const ALL: [PacketNumberLen; 4] = [
        PacketNumberLen::Len1,
        PacketNumberLen::Len2,
        PacketNumberLen::Len3,
        PacketNumberLen::Len4,
    ];

    /// Returns the number of bytes as it is written in a header field.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns the number of bytes.
    pub fn bytes(self) -> usize {
        self as usize
    }

    /// Returns the number of bits, `8 * bytes`.
    pub fn bits(self) -> u32 {
        self as u32 * 8
    }

    /// Returns the number of distinct values a field of this length can hold.
    pub fn window(self) -> PacketNumber {
        1 << self.bits()
    }

    /// Returns a mask selecting the bits a field of this length carries.
    pub fn mask(self) -> PacketNumber {
        self.window() - 1
    }

    /// Reads the length from the two low bits of the first byte of a long or short header.
    ///
    /// Those bits carry `len - 1`, every value of them is valid.
    pub fn from_header_bits(first_byte: u8) -> PacketNumberLen {
        match first_byte & PACKET_NUMBER_LEN_HEADER_MASK {
            0 => PacketNumberLen::Len1,
            1 => PacketNumberLen::Len2,
            2 => PacketNumberLen::Len3,
            _ => PacketNumberLen::Len4,
        }
    }

    /// Returns the two bits to OR into the first byte of a header.
    pub fn header_bits(self) -> u8 {
        self.to_u8() - 1
    }
}

impl TryFrom<u8> for PacketNumberLen {
    type Error = ErrorKind;

    fn try_from(len: u8) -> Result<Self, Self::Error> {
        match len {
            1 => Ok(PacketNumberLen::Len1),
            2 => Ok(PacketNumberLen::Len2),
            3 => Ok(PacketNumberLen::Len3),
            4 => Ok(PacketNumberLen::Len4),
            _ => Err(ErrorKind::DecodingError(
                DecodingErrorKind::PacketNumberLen(len),
            )),
        }
    }
}

impl Display for PacketNumberLen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} byte(s)", self.to_u8())
    }
}
