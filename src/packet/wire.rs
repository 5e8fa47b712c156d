use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{ErrorKind, Result};
use crate::packet::{PacketNumber, PacketNumberLen};

/// Returns the low-order `len` bytes of `pn`, the part that is sent on the wire.
pub fn truncate_packet_number(pn: PacketNumber, len: PacketNumberLen) -> PacketNumber {
    pn & len.mask()
}

/// Appends the truncated packet number to `buffer`, big-endian, using exactly `len` bytes.
pub fn write_packet_number(
    buffer: &mut Vec<u8>,
    pn: PacketNumber,
    len: PacketNumberLen,
) -> Result<()> {
    buffer.write_uint::<BigEndian>(truncate_packet_number(pn, len) as u64, len.bytes())?;
    Ok(())
}

/// Reads a truncated packet number of `len` bytes at the position of `rdr`.
///
/// # Remark
/// - The result still has to go through [`decode_packet_number`](crate::decode_packet_number).
pub fn read_packet_number(rdr: &mut Cursor<&[u8]>, len: PacketNumberLen) -> Result<PacketNumber> {
    let remaining = (rdr.get_ref().len() as u64).saturating_sub(rdr.position());
    if remaining < len.bytes() as u64 {
        return Err(ErrorKind::CouldNotReadHeader(format!(
            "packet number ({})",
            len
        )));
    }

    Ok(rdr.read_uint::<BigEndian>(len.bytes())? as PacketNumber)
}
