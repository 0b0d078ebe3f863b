use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// Cooperative stop flag shared between a probe loop and whoever cancels it.
///
/// `wait_timeout` doubles as the pacing sleep: it returns early, reporting
/// `true`, as soon as the signal is triggered. In-flight socket waits are
/// not preempted; loops observe the signal between probe cycles.
#[derive(Clone, Default)]
pub struct StopSignal {
    state: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    #[must_use]
    pub fn new() -> StopSignal {
        StopSignal::default()
    }

    pub fn trigger(&self) {
        let (lock, condvar) = &*self.state;
        let mut stopped = lock.lock().expect("poisoned stop-signal lock");
        *stopped = true;
        condvar.notify_all();
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        let (lock, _) = &*self.state;
        *lock.lock().expect("poisoned stop-signal lock")
    }

    /// Sleeps for up to `pacing` and returns whether the signal fired.
    pub fn wait_timeout(&self, pacing: Duration) -> bool {
        let (lock, condvar) = &*self.state;
        let guard = lock.lock().expect("poisoned stop-signal lock");
        let (stopped, _) = condvar
            .wait_timeout_while(guard, pacing, |stopped| !*stopped)
            .expect("poisoned stop-signal lock");
        *stopped
    }
}
