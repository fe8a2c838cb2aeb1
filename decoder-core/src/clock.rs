//! Tick counter shared between the periodic interrupt and the main loop

use portable_atomic::{AtomicU16, Ordering};

use crate::types::Tick;

/// Return true if `deadline` is at or before `now`.
///
/// The subtraction is wrapping and reinterpreted as signed, so the result
/// stays correct across counter rollover as long as the deadline is no more
/// than half the counter range (32 767 ticks, about 3.4 s) in the future.
pub const fn expired(now: Tick, deadline: Tick) -> bool {
    (now.wrapping_sub(deadline) as i16) >= 0
}

/// Free-running tick counter.
///
/// The interrupt handler is the only writer; the main loop only reads.
/// Atomic accesses make the full-width read consistent against a concurrent
/// increment.
pub struct TickClock {
    ticks: AtomicU16,
}

impl TickClock {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU16::new(0),
        }
    }

    /// Advance the clock by one tick.
    ///
    /// Called from the periodic interrupt. Single-writer, so a plain
    /// load/store pair is enough; no read-modify-write is needed.
    pub fn tick(&self) {
        let t = self.ticks.load(Ordering::Relaxed);
        self.ticks.store(t.wrapping_add(1), Ordering::Relaxed);
    }

    /// Current time in ticks.
    pub fn now(&self) -> Tick {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Block until `ticks` have elapsed.
    ///
    /// Startup sequencing only (the invitation flash); never called from
    /// the steady-state loop.
    pub fn busy_wait(&self, ticks: Tick) {
        let deadline = self.now().wrapping_add(ticks);
        while !expired(self.now(), deadline) {}
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
