use super::Socket;
use crate::ping_error::PingResult;
use socket2::{Domain, Protocol, Type};
use std::net::IpAddr;
use std::{io, time::Duration};

/// Raw ICMPv4 socket. Receives whole IP datagrams and requires elevated
/// privileges to open.
pub struct RawSocket {
    socket: socket2::Socket,
}

impl RawSocket {
    /// Fails with `PingError::PermissionDenied` when the process may not
    /// open raw sockets. The socket is released on drop.
    pub fn create() -> PingResult<RawSocket> {
        tracing::trace!("creating raw ICMPv4 socket");
        let socket = socket2::Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4))?;
        Ok(RawSocket { socket })
    }
}

impl Socket for RawSocket {
    fn send_to(&self, buf: &[u8], addr: &socket2::SockAddr) -> io::Result<usize> {
        self.socket.send_to(buf, addr)
    }

    fn recv_within(
        &self,
        buf: &mut [u8],
        timeout: Duration,
    ) -> io::Result<Option<(usize, IpAddr)>> {
        // A zero read-timeout would mean "block forever" to the OS.
        if timeout.is_zero() {
            return Ok(None);
        }
        self.socket.set_read_timeout(Some(timeout))?;

        // Socket2 gives a safety guaranty which allows us to do an unsafe
        // cast from `&mut [u8]` to `&mut [std::mem::MaybeUninit<u8>]`. In
        // fact, even if we use MaybeUninit here we have to use unsafe
        // somewhere to copy the data out of MaybeUninit.
        // https://docs.rs/socket2/0.4.7/socket2/struct.Socket.html#method.recv
        //
        // On a RAW socket we get a whole IP packet.
        let received = socket2::Socket::recv_from(&self.socket, unsafe {
            &mut *(buf as *mut [u8] as *mut [std::mem::MaybeUninit<u8>])
        });
        match received {
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {
                Ok(None)
            }
            Err(e) => Err(e),
            Ok((size, socket_addr)) => {
                let ip = *socket_addr.as_socket_ipv4().expect("logic error").ip();
                Ok(Some((size, IpAddr::V4(ip))))
            }
        }
    }
}
