use std::{error::Error, fmt, io};

pub type PingResult<T> = std::result::Result<T, PingError>;

/// Failures a session can surface. Setup failures (`ResolutionFailed`,
/// `PermissionDenied`) terminate before any probe is sent; `MalformedPacket`
/// is recovered inside the receive loop and only escapes through decoding
/// APIs used directly.
#[derive(Debug)]
pub enum PingError {
    /// The host name did not resolve to an IPv4 address.
    ResolutionFailed { hostname: String },
    /// Raw ICMP sockets require elevated privileges.
    PermissionDenied { source: io::Error },
    /// A datagram too short to carry an echo header at the expected offset.
    MalformedPacket { size: usize },
    /// Any other socket-level failure.
    Io(io::Error),
}

impl fmt::Display for PingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            PingError::ResolutionFailed { hostname } => {
                write!(f, "could not resolve hostname {hostname}")
            }
            PingError::PermissionDenied { .. } => {
                write!(f, "raw ICMP sockets can only be opened with elevated privileges")
            }
            PingError::MalformedPacket { size } => {
                write!(f, "datagram of {size} bytes is too short for an echo header")
            }
            PingError::Io(source) => write!(f, "socket error: {source}"),
        }
    }
}

impl Error for PingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PingError::PermissionDenied { source } | PingError::Io(source) => Some(source),
            PingError::ResolutionFailed { .. } | PingError::MalformedPacket { .. } => None,
        }
    }
}

impl From<io::Error> for PingError {
    fn from(error: io::Error) -> PingError {
        if error.kind() == io::ErrorKind::PermissionDenied {
            PingError::PermissionDenied { source: error }
        } else {
            PingError::Io(error)
        }
    }
}
