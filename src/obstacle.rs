//! Static page regions glyphs bounce off, and the boxes used to test them.

use alloc::string::String;

use crate::float::Float;
use crate::vec::Vec2;

/// Axis-aligned bounding box in screen space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Shortest way out of an overlap: axis, distance and sign.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration<F: Float> {
    pub axis: Axis,
    pub depth: F,
    /// +1 or -1: the direction along `axis` that separates the boxes.
    pub direction: F,
}

impl<F: Float> Aabb<F> {
    /// Box from two corners in any order.
    pub fn new(a: Vec2<F>, b: Vec2<F>) -> Self {
        Aabb {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn from_center(center: Vec2<F>, size: Vec2<F>) -> Self {
        let half = size.scale(F::half());
        Aabb { min: center - half, max: center + half }
    }

    pub fn center(&self) -> Vec2<F> {
        (self.min + self.max).scale(F::half())
    }

    pub fn size(&self) -> Vec2<F> {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2<F>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Strict overlap; boxes that only touch on an edge do not intersect.
    pub fn intersects(&self, other: &Aabb<F>) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x && self.min.y < other.max.y && self.max.y > other.min.y
    }

    /// Shortest move that takes `self` out of `other`.
    pub fn penetration(&self, other: &Aabb<F>) -> Option<Penetration<F>> {
        if !self.intersects(other) {
            return None;
        }
        let shortest = |to_low: F, to_high: F| {
            if to_low <= to_high {
                (to_low, -F::one())
            } else {
                (to_high, F::one())
            }
        };
        let (depth_x, dir_x) = shortest(self.max.x - other.min.x, other.max.x - self.min.x);
        let (depth_y, dir_y) = shortest(self.max.y - other.min.y, other.max.y - self.min.y);

        if depth_x < depth_y {
            Some(Penetration { axis: Axis::X, depth: depth_x, direction: dir_x })
        } else {
            Some(Penetration { axis: Axis::Y, depth: depth_y, direction: dir_y })
        }
    }
}

/// A named static region, e.g. the page footer.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle<F: Float> {
    pub name: String,
    pub bounds: Aabb<F>,
}

/// Response to a glyph box hitting an obstacle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounce<F: Float> {
    pub axis: Axis,
    /// Velocity after the hit component was negated and damped.
    pub velocity: Vec2<F>,
    /// Position shift that takes the glyph box out of the obstacle.
    pub correction: Vec2<F>,
}

impl<F: Float> Obstacle<F> {
    pub fn new(name: impl Into<String>, bounds: Aabb<F>) -> Self {
        Obstacle { name: name.into(), bounds }
    }

    /// Reflect `velocity` off this obstacle if `glyph` overlaps it.
    ///
    /// Only the component on the shortest escape axis changes, and only when
    /// it points into the obstacle. A glyph that overlaps but is already moving
    /// out gets `None`, so the flip applies to approaching motion only and a
    /// glyph cannot get trapped flipping back and forth inside. A hit also
    /// reports the shift that moves the glyph box back out.
    pub fn bounce(&self, glyph: &Aabb<F>, velocity: Vec2<F>, damping: F) -> Option<Bounce<F>> {
        let hit = glyph.penetration(&self.bounds)?;
        let mut v = velocity;
        let push = hit.direction * hit.depth;
        let (component, correction) = match hit.axis {
            Axis::X => (&mut v.x, Vec2::new(push, F::zero())),
            Axis::Y => (&mut v.y, Vec2::new(F::zero(), push)),
        };
        if *component * hit.direction < F::zero() {
            *component = -*component * damping;
            Some(Bounce { axis: hit.axis, velocity: v, correction })
        } else {
            None
        }
    }
}
