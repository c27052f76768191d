//! Rest positions for a row of glyphs spelling a word.

use alloc::vec::Vec as AllocVec;

use crate::float::Float;
use crate::vec::Vec2;

/// Lays glyphs out left to right, the row centred on `origin`.
#[derive(Clone, Debug, PartialEq)]
pub struct WordLayout<F: Float> {
    pub glyph_size: Vec2<F>,
    /// Gap between neighbouring boxes; negative values overlap them.
    pub spacing: F,
    pub origin: Vec2<F>,
    /// Per-glyph nudges applied after layout. Missing entries mean no nudge.
    pub offsets: AllocVec<Vec2<F>>,
}

impl<F: Float> WordLayout<F> {
    pub fn new(glyph_size: Vec2<F>, spacing: F, origin: Vec2<F>) -> Self {
        WordLayout { glyph_size, spacing, origin, offsets: AllocVec::new() }
    }

    /// The six-letter hero word: 150x200 boxes overlapping by 30px, each
    /// pulled slightly left.
    pub fn hero(origin: Vec2<F>) -> Self {
        let nudge = |x: f32| Vec2::new(F::from_f32(x), F::zero());
        WordLayout::new(Vec2::new(F::from_f32(150.0), F::from_f32(200.0)), F::from_f32(-30.0), origin)
            .with_offsets([-20.0, -30.0, -30.0, -10.0, -20.0, -20.0].into_iter().map(nudge).collect())
    }

    pub fn with_offsets(mut self, offsets: AllocVec<Vec2<F>>) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn row_width(&self, count: usize) -> F {
        if count == 0 {
            return F::zero();
        }
        self.glyph_size.x * F::from_usize(count) + self.spacing * F::from_usize(count - 1)
    }

    /// Rest position (box centre) of each of `count` glyphs.
    pub fn positions(&self, count: usize) -> AllocVec<Vec2<F>> {
        let pitch = self.glyph_size.x + self.spacing;
        let left = self.origin.x - self.row_width(count) * F::half() + self.glyph_size.x * F::half();
        (0..count)
            .map(|i| {
                let base = Vec2::new(left + pitch * F::from_usize(i), self.origin.y);
                base + self.offsets.get(i).copied().unwrap_or_default()
            })
            .collect()
    }
}
