//! Hooks for watching the world step, e.g. to play sounds on contact.

use crate::obstacle::Axis;

/// Observer for world events. All methods default to no-ops.
pub trait StepObserver {
    /// A glyph bounced off the obstacle at `obstacle` (insertion order).
    fn on_obstacle_bounce(&mut self, _glyph: usize, _obstacle: usize, _axis: Axis) {}

    /// `glyph` was pushed away from `peer` this tick.
    fn on_glyph_contact(&mut self, _glyph: usize, _peer: usize) {}

    /// A returning glyph snapped onto its rest position.
    fn on_glyph_settled(&mut self, _glyph: usize) {}

    /// Called once per tick after all writes are applied.
    fn on_step_complete(&mut self, _tick: u64) {}
}

/// Observer that ignores everything.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
