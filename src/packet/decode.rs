use crate::packet::{PacketNumber, PacketNumberLen};

// Adding a window above this would leave the valid packet number range.
const PACKET_NUMBER_LIMIT: PacketNumber = 1 << 62;

/// Reconstructs a full packet number from its truncated wire value (RFC 9000 section A.3).
///
/// * `len` - the packet number length carried in the header.
/// * `largest_processed` - the largest packet number successfully processed in this packet number
///   space, or [`INVALID_PACKET_NUMBER`](crate::INVALID_PACKET_NUMBER) before the first packet.
/// * `truncated` - the packet number as read from the wire. Bits above `8 * len` are ignored.
///
/// # Algorithm
///
/// The result is the packet number closest to `largest_processed + 1` whose low `8 * len` bits
/// equal `truncated`:
/// 1. take the bits of the expected packet number above the window and put `truncated` below them.
/// 2. if that candidate is half a window or more behind the expected packet number, the sender
///    already crossed into the next window: add a window.
/// 3. if it is more than half a window ahead, it belongs to the previous window: subtract one.
///
/// This never fails. A peer that lies about its packet numbers gets a wrong value back, which
/// packet protection will reject.
pub fn decode_packet_number(
    len: PacketNumberLen,
    largest_processed: PacketNumber,
    truncated: PacketNumber,
) -> PacketNumber {
    let expected = largest_processed.saturating_add(1);
    let win = len.window();
    let hwin = win / 2;
    let mask = win - 1;

    let candidate = (expected & !mask) | (truncated & mask);

    if candidate <= expected.saturating_sub(hwin) && candidate < PACKET_NUMBER_LIMIT - win {
        return candidate + win;
    }
    if candidate > expected.saturating_add(hwin) && candidate >= win {
        return candidate - win;
    }
    candidate
}
