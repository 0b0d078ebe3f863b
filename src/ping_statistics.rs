use crate::probe_outcome::ProbeOutcome;
use std::time::Duration;

/// Accumulates sent/received counts and round-trip samples; loss and
/// latency aggregates are computed on demand.
#[derive(Debug, Default)]
pub struct PingStatistics {
    sent: u32,
    received: u32,
    rtt_samples: Vec<Duration>,
}

impl PingStatistics {
    #[must_use]
    pub fn new() -> PingStatistics {
        PingStatistics::default()
    }

    pub fn record_sent(&mut self) {
        self.sent += 1;
    }

    pub fn record(&mut self, outcome: &ProbeOutcome) {
        match outcome {
            ProbeOutcome::Reply(reply) => {
                self.received += 1;
                self.rtt_samples.push(reply.round_trip_time);
            }
            ProbeOutcome::Timeout { .. } => {}
        }
    }

    #[must_use]
    pub fn report(&self) -> PingReport {
        let lost = self.sent - self.received;
        let loss_pct = if self.sent > 0 {
            f64::from(lost) / f64::from(self.sent) * 100.0
        } else {
            0.0
        };
        PingReport {
            sent: self.sent,
            received: self.received,
            lost,
            loss_pct,
            round_trips: self.round_trip_summary(),
        }
    }

    fn round_trip_summary(&self) -> Option<RoundTripSummary> {
        let min = *self.rtt_samples.iter().min()?;
        let max = *self.rtt_samples.iter().max()?;
        let sum: Duration = self.rtt_samples.iter().sum();
        let avg = sum / self.rtt_samples.len() as u32;
        Some(RoundTripSummary { min, max, avg })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PingReport {
    pub sent: u32,
    pub received: u32,
    pub lost: u32,
    pub loss_pct: f64,
    /// `None` until at least one reply arrived; latency aggregates are not
    /// defined over an empty sample set.
    pub round_trips: Option<RoundTripSummary>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundTripSummary {
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}
