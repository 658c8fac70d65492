//! Time source and cancellable display timers.
//!
//! Timers are deadlines rather than sleeps. The host loop calls `tick(now)`
//! on the quest machine, which fires any timer whose deadline has passed.
//! Cancelling a timer just drops its deadline, so nothing can fire into a
//! discarded quest.

use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A manually advanced clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// A clock starting at the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(offset(self.now.get(), by));
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// `at + by`, saturating at the far future.
pub fn offset(at: DateTime<Utc>, by: Duration) -> DateTime<Utc> {
    chrono::Duration::from_std(by)
        .ok()
        .and_then(|delta| at.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// What a display timer unlocks when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Answer feedback has been shown long enough; "continue" opens.
    RevealContinue,
    /// The verdict has been shown long enough; rewards are handed off.
    ReturnToDashboard,
}

/// A pending timed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTimer {
    pub kind: TimerKind,
    pub due: DateTime<Utc>,
}

impl DisplayTimer {
    pub fn schedule(kind: TimerKind, now: DateTime<Utc>, delay: Duration) -> Self {
        Self {
            kind,
            due: offset(now, delay),
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.due
    }
}
