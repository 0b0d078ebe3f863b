use super::checksum::internet_checksum;
use super::SequenceNumber;
use crate::ping_error::{PingError, PingResult};

const ECHO_REQUEST_TYPE: u8 = 8;
const ECHO_REQUEST_CODE: u8 = 0;

pub(crate) const HEADER_SIZE: usize = 8;
pub const PAYLOAD_SIZE: usize = 56;
pub(crate) const PACKET_SIZE: usize = HEADER_SIZE + PAYLOAD_SIZE;

// A raw ICMP socket delivers the whole IPv4 datagram; without options the
// echo header starts 20 bytes in.
pub(crate) const IP_HEADER_SIZE: usize = 20;

/// Serializes an echo request: 8-byte header followed by a zero-filled
/// payload, checksum computed over the full packet with the checksum field
/// zeroed and then written back.
pub(crate) fn new_echo_request(
    identifier: u16,
    sequence_number: SequenceNumber,
) -> [u8; PACKET_SIZE] {
    let mut packet = [0u8; PACKET_SIZE];
    packet[0] = ECHO_REQUEST_TYPE;
    packet[1] = ECHO_REQUEST_CODE;
    packet[4..6].copy_from_slice(&identifier.to_be_bytes());
    packet[6..8].copy_from_slice(&u16::from(sequence_number).to_be_bytes());

    let checksum = internet_checksum(&packet);
    packet[2..4].copy_from_slice(&checksum.to_be_bytes());
    packet
}

/// The 8 fixed header bytes of an echo message, unpacked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct EchoHeader {
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
    pub identifier: u16,
    pub sequence_number: u16,
}

impl EchoHeader {
    /// Unpacks the header starting at `offset` into `datagram`. The caller
    /// chooses the offset to skip any enclosing network-layer header.
    pub(crate) fn decode(datagram: &[u8], offset: usize) -> PingResult<EchoHeader> {
        let header = datagram
            .get(offset..offset + HEADER_SIZE)
            .ok_or(PingError::MalformedPacket { size: datagram.len() })?;
        Ok(EchoHeader {
            icmp_type: header[0],
            code: header[1],
            checksum: u16::from_be_bytes([header[2], header[3]]),
            identifier: u16::from_be_bytes([header[4], header[5]]),
            sequence_number: u16::from_be_bytes([header[6], header[7]]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnet_packet::icmp::IcmpPacket;

    #[test]
    fn encode_then_decode_round_trips() {
        for (identifier, sequence) in
            [(0u16, 0u16), (0xFFFF, 0xFFFF), (0xABCD, 1), (1, 0x8000), (54321, 777)]
        {
            let packet = new_echo_request(identifier, sequence.into());
            assert_eq!(PACKET_SIZE, packet.len());

            let header = EchoHeader::decode(&packet, 0).unwrap();
            assert_eq!(ECHO_REQUEST_TYPE, header.icmp_type);
            assert_eq!(ECHO_REQUEST_CODE, header.code);
            assert_eq!(identifier, header.identifier);
            assert_eq!(sequence, header.sequence_number);
        }
    }

    #[test]
    fn stored_checksum_matches_recomputation_over_zeroed_field() {
        let packet = new_echo_request(0xABCD, 7.into());
        let stored = u16::from_be_bytes([packet[2], packet[3]]);

        let mut zeroed = packet;
        zeroed[2] = 0;
        zeroed[3] = 0;
        assert_eq!(stored, internet_checksum(&zeroed));
        assert_eq!(stored, EchoHeader::decode(&packet, 0).unwrap().checksum);

        // Summing the packet including its own checksum folds to all ones.
        assert_eq!(0, internet_checksum(&packet));
    }

    #[test]
    fn stored_checksum_matches_pnet() {
        let packet = new_echo_request(0x1234, 3.into());
        let stored = u16::from_be_bytes([packet[2], packet[3]]);
        let pnet_checksum =
            pnet_packet::icmp::checksum(&IcmpPacket::new(&packet).expect("valid ICMP buffer"));
        assert_eq!(stored, pnet_checksum);
    }

    #[test]
    fn payload_is_zero_filled() {
        let packet = new_echo_request(9, 2.into());
        assert!(packet[HEADER_SIZE..].iter().all(|&b| b == 0));
    }

    #[test]
    fn decode_fails_on_short_buffer() {
        let packet = new_echo_request(1, 1.into());
        assert!(EchoHeader::decode(&packet[..HEADER_SIZE - 1], 0).is_err());
    }

    #[test]
    fn decode_fails_when_offset_leaves_less_than_a_header() {
        let datagram = [0u8; IP_HEADER_SIZE + HEADER_SIZE - 1];
        let result = EchoHeader::decode(&datagram, IP_HEADER_SIZE);
        assert!(matches!(
            result,
            Err(PingError::MalformedPacket { size }) if size == datagram.len()
        ));
    }

    #[test]
    fn decode_skips_an_enclosing_header() {
        let packet = new_echo_request(0xBEEF, 5.into());
        let mut datagram = vec![0u8; IP_HEADER_SIZE];
        datagram.extend_from_slice(&packet);

        let header = EchoHeader::decode(&datagram, IP_HEADER_SIZE).unwrap();
        assert_eq!(0xBEEF, header.identifier);
        assert_eq!(5, header.sequence_number);
    }
}
