mod checksum;
mod packet;
mod sequence_number;
mod socket;
mod ttl;

pub(crate) use packet::{new_echo_request, EchoHeader, IP_HEADER_SIZE};
pub use packet::PAYLOAD_SIZE;
pub use sequence_number::SequenceNumber;
pub use socket::{RawSocket, Socket};
pub use ttl::Ttl;

#[cfg(test)]
pub(crate) use socket::tests;
