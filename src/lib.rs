#![warn(rust_2018_idioms)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub use icmp::v4::{RawSocket, SequenceNumber, Socket, Ttl, PAYLOAD_SIZE};
pub use ping_error::{PingError, PingResult};
pub use ping_session::{PingSession, DEFAULT_TIMEOUT};
pub use ping_statistics::{PingReport, PingStatistics, RoundTripSummary};
pub use probe_outcome::{ProbeOutcome, ProbeReply};
pub use stop_signal::StopSignal;
pub use utils::lookup_host_v4;

mod icmp;
mod ping_error;
mod ping_session;
mod ping_statistics;
mod probe_outcome;
mod reply_matcher;
mod stop_signal;
mod utils;
