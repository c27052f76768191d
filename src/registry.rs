//! Last published glyph positions, the snapshot every tick reads peers from.

use alloc::vec::Vec as AllocVec;

use crate::float::Float;
use crate::glyph::Glyph;
use crate::vec::Vec2;

/// Positions indexed by glyph index, replaced wholesale once per tick.
///
/// Nothing writes individual entries during a step, so every glyph sees the
/// same peer positions regardless of update order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionRegistry<F: Float> {
    positions: AllocVec<Vec2<F>>,
}

impl<F: Float> PositionRegistry<F> {
    pub fn new() -> Self {
        PositionRegistry { positions: AllocVec::new() }
    }

    /// Replace every entry with the glyphs' current positions.
    pub fn publish(&mut self, glyphs: &[Glyph<F>]) {
        self.positions.clear();
        self.positions.extend(glyphs.iter().map(|g| g.position));
    }

    pub fn get(&self, index: usize) -> Option<Vec2<F>> {
        self.positions.get(index).copied()
    }

    pub fn len(&self) -> usize { self.positions.len() }
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    pub fn as_slice(&self) -> &[Vec2<F>] { &self.positions }

    /// `(index, position)` for every glyph except `skip`.
    pub fn peers(&self, skip: usize) -> impl Iterator<Item = (usize, Vec2<F>)> + '_ {
        self.positions.iter().copied().enumerate().filter(move |(i, _)| *i != skip)
    }
}
