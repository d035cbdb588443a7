//! Debounced periodic timer.
//!
//! The next firing is always one full period after the most recent
//! `reset`, never measured from the original schedule. Only one deadline
//! exists at a time, so resetting replaces any pending firing.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct DebouncedTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl DebouncedTimer {
    /// A disarmed timer; it never fires until `reset` is called.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Cancel any pending firing and schedule the next one a full period from now.
    pub fn reset(&mut self) {
        self.deadline = Some(Instant::now() + self.period);
    }

    /// Cancel the pending firing without scheduling another.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Future resolving at the current deadline; pending forever when disarmed.
    ///
    /// The future owns a copy of the deadline, so the timer can be reset
    /// while it is being awaited inside `select!`.
    pub fn fired(&self) -> impl Future<Output = ()> + 'static {
        let deadline = self.deadline;
        async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        }
    }
}
