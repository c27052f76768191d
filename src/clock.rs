//! One fixed-timestep clock shared by every glyph.

use crate::float::Float;

/// Accumulates frame time and hands out whole simulation ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameClock<F: Float> {
    tick_duration: F,
    max_ticks_per_frame: usize,
    accumulated: F,
    ticks: u64,
}

impl<F: Float> FrameClock<F> {
    pub fn new(tick_duration: F, max_ticks_per_frame: usize) -> Self {
        FrameClock {
            tick_duration,
            max_ticks_per_frame: max_ticks_per_frame.max(1),
            accumulated: F::zero(),
            ticks: 0,
        }
    }

    /// Add `elapsed` seconds and return how many ticks are now due.
    ///
    /// Anything beyond `max_ticks_per_frame` is dropped, so a tab that was in
    /// the background for a minute resumes instead of replaying the minute.
    pub fn accumulate(&mut self, elapsed: F) -> usize {
        if !elapsed.is_finite() || elapsed <= F::zero() {
            return 0;
        }
        self.accumulated = self.accumulated + elapsed;

        let mut due = 0;
        while self.accumulated >= self.tick_duration && due < self.max_ticks_per_frame {
            self.accumulated = self.accumulated - self.tick_duration;
            due += 1;
        }
        if self.accumulated >= self.tick_duration {
            log::warn!(
                "frame clock behind by {} s, dropping backlog",
                self.accumulated
            );
            self.accumulated = F::zero();
        }
        self.ticks += due as u64;
        due
    }

    /// Fraction of a tick left in the accumulator, for interpolating renders.
    pub fn alpha(&self) -> F {
        self.accumulated / self.tick_duration
    }

    pub fn tick_duration(&self) -> F { self.tick_duration }

    /// Ticks handed out so far.
    pub fn ticks(&self) -> u64 { self.ticks }
}
