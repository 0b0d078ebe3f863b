use crate::icmp::v4::{EchoHeader, Socket, SequenceNumber, Ttl, IP_HEADER_SIZE};
use crate::ping_error::{PingError, PingResult};
use crate::probe_outcome::{ProbeOutcome, ProbeReply};
use pnet_packet::ipv4::Ipv4Packet;
use std::time::{Duration, Instant};

const RECV_BUFFER_SIZE: usize = 256;

/// Waits for the echo reply carrying `identifier`, bounded by `timeout`.
///
/// Unrelated traffic on the shared protocol channel is discarded; it
/// consumes wall-clock time but never resets the remaining budget, so the
/// wait ends no later than `timeout` after it began.
pub(crate) fn await_matching_reply<S>(
    socket: &S,
    identifier: u16,
    sequence_number: SequenceNumber,
    send_time: Instant,
    timeout: Duration,
) -> PingResult<ProbeOutcome>
where
    S: Socket,
{
    let mut buf = [0u8; RECV_BUFFER_SIZE];
    let wait_started = Instant::now();
    let mut remaining = timeout;

    loop {
        let Some((size, ip_addr)) = socket.recv_within(&mut buf, remaining)? else {
            return Ok(ProbeOutcome::Timeout { sequence_number });
        };
        let arrival_time = Instant::now();

        match decode_reply(&buf[..size]) {
            Ok((header, ttl)) if header.identifier == identifier => {
                return Ok(ProbeOutcome::Reply(ProbeReply {
                    package_size: size - IP_HEADER_SIZE,
                    ip_addr,
                    ttl,
                    sequence_number: header.sequence_number.into(),
                    round_trip_time: arrival_time - send_time,
                }));
            }
            Ok((header, _)) => {
                tracing::trace!(identifier = header.identifier, "ignoring echo message of another session");
            }
            Err(error) => {
                tracing::warn!(%error, "discarding undecodable datagram");
            }
        }

        let elapsed = wait_started.elapsed();
        if elapsed >= timeout {
            return Ok(ProbeOutcome::Timeout { sequence_number });
        }
        remaining = timeout - elapsed;
    }
}

/// Splits a raw network-layer datagram into the echo header at the fixed
/// 20-byte offset and the TTL of the enclosing IPv4 header.
fn decode_reply(datagram: &[u8]) -> PingResult<(EchoHeader, Ttl)> {
    let ip_packet = Ipv4Packet::new(datagram)
        .ok_or(PingError::MalformedPacket { size: datagram.len() })?;
    let header = EchoHeader::decode(datagram, IP_HEADER_SIZE)?;
    Ok((header, ip_packet.get_ttl().into()))
}
