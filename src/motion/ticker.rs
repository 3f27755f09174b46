//! Timer-driven typewriter component
//!
//! Owns a [`Typewriter`] plus the two timers that animate it (caret blink and
//! type/delete step). Dropping or unmounting the ticker cancels both timers.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::timer::{TimerId, TimerQueue};
use super::typewriter::{PhraseSet, Typewriter};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TickerEvent {
    Blink,
    Step,
}

/// A mounted typewriter with its own timers
#[derive(Debug)]
pub struct TypewriterTicker {
    typewriter: Typewriter,
    rng: Pcg32,
    timers: TimerQueue<TickerEvent>,
    blink: Option<TimerId>,
    step: Option<TimerId>,
}

impl TypewriterTicker {
    pub fn new(phrases: PhraseSet, pause_ms: f64, seed: u64) -> Self {
        Self {
            typewriter: Typewriter::with_pause(phrases, pause_ms),
            rng: Pcg32::seed_from_u64(seed),
            timers: TimerQueue::default(),
            blink: None,
            step: None,
        }
    }

    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    /// Current text including the caret
    pub fn display(&self) -> String {
        self.typewriter.display()
    }

    pub fn is_mounted(&self) -> bool {
        self.blink.is_some() || self.step.is_some()
    }

    /// Number of timers still pending
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Start both timers at time `now` (ms). Remounting restarts them.
    pub fn mount(&mut self, now: f64) {
        self.unmount();
        self.timers = TimerQueue::new(now);
        self.blink = Some(self.timers.schedule_once(CARET_BLINK_MS, TickerEvent::Blink));
        self.schedule_step();
        log::debug!(
            "Typewriter mounted with {} phrases",
            self.typewriter.phrases().len()
        );
    }

    /// Cancel all pending timers. State is left as it was.
    pub fn unmount(&mut self) {
        for id in [self.blink.take(), self.step.take()].into_iter().flatten() {
            self.timers.cancel(id);
        }
        self.timers.clear();
    }

    /// Run every timer due up to `now` (ms). Returns true if the display changed.
    ///
    /// A gap longer than [`TIMER_STALL_MS`] since the last call is treated as a
    /// pause: pending timers keep their remaining time instead of firing in a burst.
    pub fn advance(&mut self, now: f64) -> bool {
        let before = *self.typewriter.state();
        let gap = now - self.timers.now();
        if gap > TIMER_STALL_MS {
            log::debug!("Typewriter resumed after a {gap:.0} ms stall");
            self.timers.resume_at(now);
        }
        while let Some((id, event)) = self.timers.pop_due(now) {
            match event {
                TickerEvent::Blink if self.blink == Some(id) => {
                    self.typewriter.toggle_caret();
                    self.blink = Some(self.timers.schedule_once(CARET_BLINK_MS, TickerEvent::Blink));
                }
                TickerEvent::Step if self.step == Some(id) => {
                    self.typewriter.step();
                    // Mode switches happen in the same callback as the step that hit the boundary
                    while self.typewriter.at_boundary() {
                        self.typewriter.step();
                    }
                    self.schedule_step();
                }
                _ => {}
            }
        }
        *self.typewriter.state() != before
    }

    fn schedule_step(&mut self) {
        let jitter = self.rng.random_range(0..JITTER_MAX_MS);
        let delay = self.typewriter.next_delay(jitter);
        self.step = Some(self.timers.schedule_once(delay, TickerEvent::Step));
    }
}

impl Drop for TypewriterTicker {
    fn drop(&mut self) {
        self.unmount();
    }
}
