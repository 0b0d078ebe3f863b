use crate::icmp::v4::{new_echo_request, RawSocket, SequenceNumber, Socket};
use crate::ping_error::PingResult;
use crate::ping_statistics::{PingReport, PingStatistics};
use crate::probe_outcome::ProbeOutcome;
use crate::reply_matcher::await_matching_reply;
use rand::Rng;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

/// Per-probe wait for the matching reply.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// One ping session against a single destination.
///
/// The session owns its socket for its whole lifetime and runs strictly
/// sequential probe cycles: encode, send, wait for the matching reply or the
/// timeout, record the outcome. Pacing between cycles is the caller's job.
pub struct PingSession<S = RawSocket> {
    socket: S,
    destination: Ipv4Addr,
    identifier: u16,
    next_sequence: SequenceNumber,
    timeout: Duration,
    statistics: PingStatistics,
}

impl PingSession<RawSocket> {
    /// Opens a raw-socket session. Fails with `PingError::PermissionDenied`
    /// when the process lacks the privilege raw sockets require; no partial
    /// session is created.
    pub fn open(destination: Ipv4Addr, timeout: Duration) -> PingResult<PingSession<RawSocket>> {
        let socket = RawSocket::create()?;
        Ok(PingSession::with_socket(socket, destination, timeout))
    }
}

impl<S> PingSession<S>
where
    S: Socket,
{
    pub(crate) fn with_socket(
        socket: S,
        destination: Ipv4Addr,
        timeout: Duration,
    ) -> PingSession<S> {
        PingSession {
            socket,
            destination,
            // Tags this session's traffic on the shared protocol channel;
            // drawn once, constant for the session's lifetime.
            identifier: rand::thread_rng().gen(),
            next_sequence: SequenceNumber::START,
            timeout,
            statistics: PingStatistics::new(),
        }
    }

    /// Runs one probe cycle and returns its outcome. Sequence numbers count
    /// up by one per call and are not reused within the session.
    pub fn probe(&mut self) -> PingResult<ProbeOutcome> {
        let sequence_number = self.next_sequence;
        let packet = new_echo_request(self.identifier, sequence_number);
        let addr: socket2::SockAddr = SocketAddr::new(IpAddr::V4(self.destination), 0).into();

        let send_time = Instant::now();
        self.socket.send_to(&packet, &addr)?;
        self.statistics.record_sent();
        self.next_sequence = sequence_number.next();
        tracing::trace!(sequence = u16::from(sequence_number), "echo request sent");

        let outcome = await_matching_reply(
            &self.socket,
            self.identifier,
            sequence_number,
            send_time,
            self.timeout,
        )?;
        self.statistics.record(&outcome);
        Ok(outcome)
    }

    /// Loss and latency aggregates over everything probed so far.
    #[must_use]
    pub fn report(&self) -> PingReport {
        self.statistics.report()
    }
}
