use crate::packet::{PacketNumber, PacketNumberLen};

/// Returns the packet number length to use in a packet header.
///
/// `largest_acked` is the largest packet number the peer acknowledged, or
/// [`INVALID_PACKET_NUMBER`](crate::INVALID_PACKET_NUMBER) if nothing was acknowledged yet.
///
/// The chosen width covers twice the number of packets in flight, so the receiver's
/// half-window (see [`decode_packet_number`](crate::decode_packet_number)) contains the
/// packet number. Headers never use a single byte; the shortest result is two bytes.
pub fn packet_number_length_for_header(
    pn: PacketNumber,
    largest_acked: PacketNumber,
) -> PacketNumberLen {
    let num_unacked = pn.saturating_sub(largest_acked);
    if num_unacked < 1 << (16 - 1) {
        return PacketNumberLen::Len2;
    }
    if num_unacked < 1 << (24 - 1) {
        return PacketNumberLen::Len3;
    }
    PacketNumberLen::Len4
}
