use std::net::IpAddr;
use std::{io, time::Duration};

mod raw_socket;
pub use raw_socket::RawSocket;

/// The transport under a ping session: send one encoded packet, receive one
/// network-layer datagram within a bounded wait.
pub trait Socket: Send + Sync {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize>;

    /// Blocks for at most `timeout`. `Ok(None)` means nothing arrived in
    /// time. The buffer receives the raw network-layer datagram including
    /// its IP header.
    fn recv_within(
        &self,
        buf: &mut [u8],
        timeout: Duration,
    ) -> io::Result<Option<(usize, IpAddr)>>;
}
