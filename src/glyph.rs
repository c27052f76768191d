//! A single draggable letter and the motion phase it is in.

use alloc::format;
use alloc::string::String;

use crate::float::Float;
use crate::obstacle::Aabb;
use crate::vec::Vec2;

/// What is currently driving a glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Sitting exactly on its rest position.
    Resting,
    /// Held by the pointer; physics leaves it alone.
    Dragged,
    /// Released and coasting; no pull home until the return delay elapses.
    Flung { ticks_left: usize },
    /// Drifting back to rest.
    Returning,
}

impl Phase {
    pub fn is_dragged(&self) -> bool {
        matches!(self, Phase::Dragged)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph<F: Float> {
    index: usize,
    label: String,
    /// Centre of the glyph's box.
    pub position: Vec2<F>,
    /// Pixels per tick.
    pub velocity: Vec2<F>,
    /// Degrees, clockwise positive.
    pub rotation: F,
    pub phase: Phase,
    rest: Vec2<F>,
    size: Vec2<F>,
}

impl<F: Float> Glyph<F> {
    /// A glyph resting at `rest`.
    pub fn new(index: usize, label: impl Into<String>, rest: Vec2<F>, size: Vec2<F>) -> Self {
        Glyph {
            index,
            label: label.into(),
            position: rest,
            velocity: Vec2::zero(),
            rotation: F::zero(),
            phase: Phase::Resting,
            rest,
            size,
        }
    }

    pub fn index(&self) -> usize { self.index }
    pub fn label(&self) -> &str { &self.label }
    pub fn rest(&self) -> Vec2<F> { self.rest }
    pub fn size(&self) -> Vec2<F> { self.size }

    pub fn bounds(&self) -> Aabb<F> {
        Aabb::from_center(self.position, self.size)
    }

    /// Image the host page shows for this glyph.
    pub fn asset_path(&self) -> String {
        format!("/{}.svg", self.label)
    }

    /// Vector from the current position back to rest.
    pub fn offset_to_rest(&self) -> Vec2<F> {
        self.rest - self.position
    }

    pub fn is_at_rest(&self) -> bool {
        self.phase == Phase::Resting
    }

    /// Put the glyph back on its rest position with no motion.
    pub(crate) fn settle(&mut self) {
        self.position = self.rest;
        self.velocity = Vec2::zero();
        self.rotation = F::zero();
        self.phase = Phase::Resting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_path_uses_label() {
        let g: Glyph<f32> = Glyph::new(0, "N", Vec2::zero(), Vec2::new(150.0, 200.0));
        assert_eq!(g.asset_path(), "/N.svg");
    }

    #[test]
    fn settle_restores_rest() {
        let mut g: Glyph<f32> = Glyph::new(2, "W", Vec2::new(10.0, 0.0), Vec2::new(150.0, 200.0));
        g.position = Vec2::new(90.0, -40.0);
        g.velocity = Vec2::new(3.0, 1.0);
        g.rotation = 12.0;
        g.phase = Phase::Returning;
        g.settle();
        assert_eq!(g.position, g.rest());
        assert_eq!(g.velocity, Vec2::zero());
        assert_eq!(g.rotation, 0.0);
        assert!(g.is_at_rest());
    }
}
