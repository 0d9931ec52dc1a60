//! Cancellable periodic ticks
//!
//! The [`Scheduler`] trait is the only source of unsolicited state changes.
//! A scheduler hands out [`TickHandle`]s for periodic timers and reports which
//! of them fired when polled. Everything is cooperative: nothing runs on its
//! own thread, the owner polls and applies ticks itself.
//!
//! Two implementations are provided:
//! - [`IntervalScheduler`] follows the wall clock and is used by the live session
//! - [`ManualScheduler`] follows virtual time and is used by script playback and tests

use std::time::{Duration, Instant};

/// Most ticks a single poll reports per timer
///
/// If the host stalls for longer, the remaining periods are dropped and the
/// timer is re-based on the poll time instead of bursting to catch up.
pub const MAX_CATCH_UP: u32 = 5;

/// Shortest period a timer runs at; shorter requests are raised to this
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Identifies one started periodic timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(u64);

impl TickHandle {
    /// Raw id, unique per scheduler
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Source of periodic ticks
pub trait Scheduler {
    /// Start a timer firing every `period` (at least [`MIN_PERIOD`])
    fn start(&mut self, period: Duration) -> TickHandle;

    /// Stop a timer; it is never reported by a later [`poll`](Scheduler::poll)
    fn cancel(&mut self, handle: TickHandle);

    /// Drain the ticks that fired since the last poll, oldest first
    fn poll(&mut self) -> Vec<TickHandle>;

    /// Whether `handle` refers to a running timer
    fn is_active(&self, handle: TickHandle) -> bool;
}

#[derive(Debug, Clone)]
struct Interval {
    handle: TickHandle,
    period: Duration,
    next_due: Instant,
}

/// Wall-clock scheduler for the live session
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    intervals: Vec<Interval>,
    next_id: u64,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a timer whose first tick is one period after `now`
    pub fn start_at(&mut self, period: Duration, now: Instant) -> TickHandle {
        let period = period.max(MIN_PERIOD);
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.intervals.push(Interval {
            handle,
            period,
            next_due: now + period,
        });
        handle
    }

    /// Collect ticks due at `now`
    pub fn poll_at(&mut self, now: Instant) -> Vec<TickHandle> {
        let mut fired = Vec::new();
        for interval in &mut self.intervals {
            let mut count = 0;
            while interval.next_due <= now && count < MAX_CATCH_UP {
                fired.push(interval.handle);
                interval.next_due += interval.period;
                count += 1;
            }
            if interval.next_due <= now {
                log::debug!(
                    "Timer {} fell behind, dropping missed ticks",
                    interval.handle.id()
                );
                interval.next_due = now + interval.period;
            }
        }
        fired
    }

    /// Earliest moment any running timer is due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.intervals.iter().map(|i| i.next_due).min()
    }

    /// Number of running timers
    pub fn active_count(&self) -> usize {
        self.intervals.len()
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, period: Duration) -> TickHandle {
        self.start_at(period, Instant::now())
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }

    fn poll(&mut self) -> Vec<TickHandle> {
        self.poll_at(Instant::now())
    }

    fn is_active(&self, handle: TickHandle) -> bool {
        self.intervals.iter().any(|i| i.handle == handle)
    }
}

#[derive(Debug, Clone)]
struct ManualTimer {
    handle: TickHandle,
    period: Duration,
    /// Virtual time since the last tick of this timer
    elapsed: Duration,
}

/// Virtual-time scheduler
///
/// Time only moves when [`advance`](ManualScheduler::advance) is called, which
/// makes tick sequences exactly reproducible.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    timers: Vec<ManualTimer>,
    pending: Vec<TickHandle>,
    next_id: u64,
    now: Duration,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move virtual time forward, queueing every tick that falls due
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
        for timer in &mut self.timers {
            timer.elapsed += by;
            while timer.elapsed >= timer.period {
                timer.elapsed -= timer.period;
                self.pending.push(timer.handle);
            }
        }
    }

    /// Total virtual time advanced so far
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of running timers
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, period: Duration) -> TickHandle {
        let period = period.max(MIN_PERIOD);
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.timers.push(ManualTimer {
            handle,
            period,
            elapsed: Duration::ZERO,
        });
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.timers.retain(|t| t.handle != handle);
        self.pending.retain(|h| *h != handle);
    }

    fn poll(&mut self) -> Vec<TickHandle> {
        std::mem::take(&mut self.pending)
    }

    fn is_active(&self, handle: TickHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }
}
