//! Spring-smoothed transforms for drawing glyphs.

use alloc::vec::Vec as AllocVec;
use core::fmt;

use crate::float::Float;
use crate::glyph::Phase;
use crate::spring::{Spring1D, Spring2D, SpringConfig};
use crate::vec::{Scalar, Vec2};
use crate::world::World;

/// Visual transform of one glyph.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform<F: Float> {
    pub x: F,
    pub y: F,
    /// Degrees.
    pub rotation: F,
}

impl<F: Float> fmt::Display for Transform<F> {
    /// CSS `transform` value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate3d({}px, {}px, 0) rotate({}deg)", self.x, self.y, self.rotation)
    }
}

#[derive(Clone, Debug)]
struct GlyphSprings<F: Float> {
    position: Spring2D<F>,
    rotation: Spring1D<F>,
    snap: bool,
}

/// Springs chasing the simulated glyphs.
///
/// Held glyphs track the pointer exactly; released ones follow with the
/// fling spring, and glyphs on their way home use the gentler return spring.
#[derive(Clone, Debug)]
pub struct RenderLayer<F: Float> {
    springs: AllocVec<GlyphSprings<F>>,
    fling: SpringConfig<F>,
    gentle_return: SpringConfig<F>,
}

impl<F: Float> RenderLayer<F> {
    pub fn new() -> Self {
        Self::with_configs(SpringConfig::fling(), SpringConfig::gentle_return())
    }

    pub fn with_configs(fling: SpringConfig<F>, gentle_return: SpringConfig<F>) -> Self {
        RenderLayer { springs: AllocVec::new(), fling, gentle_return }
    }

    /// Retarget every spring at the world's current state.
    ///
    /// Glyphs added to the world since the last sync start at their position.
    pub fn sync(&mut self, world: &World<F>) {
        for glyph in world.glyphs().iter().skip(self.springs.len()) {
            self.springs.push(GlyphSprings {
                position: Spring2D::new(glyph.position, self.gentle_return),
                rotation: Spring1D::new(Scalar(glyph.rotation), self.gentle_return),
                snap: false,
            });
        }

        for (springs, glyph) in self.springs.iter_mut().zip(world.glyphs()) {
            let config = match glyph.phase {
                Phase::Flung { .. } => self.fling,
                _ => self.gentle_return,
            };
            springs.position.set_config(config);
            springs.rotation.set_config(config);
            springs.position.set_target(glyph.position);
            springs.rotation.set_target(Scalar(glyph.rotation));
            springs.snap = glyph.phase.is_dragged();
        }
    }

    /// Move every spring forward by `dt` seconds.
    pub fn advance(&mut self, dt: F) {
        for springs in &mut self.springs {
            if springs.snap {
                springs.position.snap_to_target();
                springs.rotation.snap_to_target();
            } else {
                springs.position.update(dt);
                springs.rotation.update(dt);
            }
        }
    }

    pub fn transform(&self, index: usize) -> Option<Transform<F>> {
        self.springs.get(index).map(|s| {
            let p: Vec2<F> = s.position.value();
            Transform { x: p.x, y: p.y, rotation: s.rotation.value().0 }
        })
    }

    pub fn transforms(&self) -> impl Iterator<Item = Transform<F>> + '_ {
        (0..self.springs.len()).filter_map(move |i| self.transform(i))
    }

    pub fn len(&self) -> usize { self.springs.len() }
    pub fn is_empty(&self) -> bool { self.springs.is_empty() }

    /// True when every spring sits on its target.
    pub fn is_settled(&self, epsilon: F) -> bool {
        self.springs
            .iter()
            .all(|s| s.position.is_settled(epsilon, epsilon) && s.rotation.is_settled(epsilon, epsilon))
    }
}

impl<F: Float> Default for RenderLayer<F> {
    fn default() -> Self {
        Self::new()
    }
}
