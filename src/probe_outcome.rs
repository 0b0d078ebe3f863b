use crate::icmp::v4::{SequenceNumber, Ttl};
use std::net::IpAddr;
use std::time::Duration;

/// What a single probe ended in. Exactly one outcome per probe; a timeout is
/// final for its sequence number.
#[derive(Debug)]
pub enum ProbeOutcome {
    Reply(ProbeReply),
    Timeout { sequence_number: SequenceNumber },
}

#[derive(Debug)]
pub struct ProbeReply {
    pub package_size: usize,
    pub ip_addr: IpAddr,
    pub ttl: Ttl,
    pub sequence_number: SequenceNumber,
    pub round_trip_time: Duration,
}
