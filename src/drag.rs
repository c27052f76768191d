//! Pointer-drag gestures: follow the pointer while held, fling on release.

use alloc::vec::Vec as AllocVec;

use crate::config::DragConfig;
use crate::float::Float;
use crate::obstacle::Aabb;
use crate::vec::Vec2;

#[derive(Copy, Clone, Debug, PartialEq)]
struct Sample<F: Float> {
    position: Vec2<F>,
    time: F,
}

/// Tracks one drag gesture on one glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct DragTracker<F: Float> {
    origin: Vec2<F>,
    pointer_start: Vec2<F>,
    samples: AllocVec<Sample<F>>,
    max_samples: usize,
}

impl<F: Float> DragTracker<F> {
    /// Start a drag of a glyph currently at `glyph_position`.
    pub fn begin(glyph_position: Vec2<F>, pointer: Vec2<F>, time: F, config: &DragConfig<F>) -> Self {
        let mut samples = AllocVec::with_capacity(config.max_samples);
        samples.push(Sample { position: pointer, time });
        DragTracker {
            origin: glyph_position,
            pointer_start: pointer,
            samples,
            max_samples: config.max_samples.max(2),
        }
    }

    /// Where the glyph should be for this pointer position.
    pub fn update(&mut self, pointer: Vec2<F>, time: F) -> Vec2<F> {
        self.record(pointer, time);
        self.position_for(pointer)
    }

    pub fn position_for(&self, pointer: Vec2<F>) -> Vec2<F> {
        self.origin + (pointer - self.pointer_start)
    }

    /// Finish the gesture and return the glyph's launch velocity in px/tick.
    pub fn release(mut self, pointer: Vec2<F>, time: F, tick_duration: F, config: &DragConfig<F>) -> Vec2<F> {
        self.record(pointer, time);
        self.gesture_velocity(config.max_sample_gap)
            .scale(tick_duration * config.release_scale)
            .clamp_length(config.max_release_speed)
    }

    /// Recency-weighted pointer velocity in px/s over the kept samples.
    pub fn gesture_velocity(&self, max_gap: F) -> Vec2<F> {
        let n = self.samples.len();
        let mut total = Vec2::zero();
        let mut weight_sum = F::zero();

        for (i, pair) in self.samples.windows(2).enumerate() {
            let dt = pair[1].time - pair[0].time;
            if !(dt > F::zero() && dt <= max_gap) {
                continue;
            }
            let velocity = (pair[1].position - pair[0].position).scale(F::one() / dt);
            let age = F::from_usize(n - 2 - i);
            let weight = F::one() / (age + F::one());
            total += velocity.scale(weight);
            weight_sum = weight_sum + weight;
        }

        if weight_sum > F::zero() {
            total.scale(F::one() / weight_sum)
        } else {
            Vec2::zero()
        }
    }

    fn record(&mut self, pointer: Vec2<F>, time: F) {
        if self.samples.len() == self.max_samples {
            self.samples.remove(0);
        }
        self.samples.push(Sample { position: pointer, time });
    }
}

/// Rubber-band curve: how far past a limit to draw for `overshoot` pixels.
///
/// Approaches `dimension` asymptotically; small overshoots move almost 1:1
/// scaled by `constant`.
pub fn rubberband<F: Float>(overshoot: F, dimension: F, constant: F) -> F {
    if dimension <= F::zero() {
        return F::zero();
    }
    (F::one() - F::one() / (overshoot * constant / dimension + F::one())) * dimension
}

fn rubberband_axis<F: Float>(value: F, low: F, high: F, dimension: F, constant: F) -> F {
    if value < low {
        low - rubberband(low - value, dimension, constant)
    } else if value > high {
        high + rubberband(value - high, dimension, constant)
    } else {
        value
    }
}

/// Soften a dragged glyph centre that leaves `bounds`.
pub fn rubberband_into<F: Float>(center: Vec2<F>, size: Vec2<F>, bounds: &Aabb<F>, constant: F) -> Vec2<F> {
    let half = size.scale(F::half());
    let dims = bounds.size();
    Vec2::new(
        rubberband_axis(center.x, bounds.min.x + half.x, bounds.max.x - half.x, dims.x, constant),
        rubberband_axis(center.y, bounds.min.y + half.y, bounds.max.y - half.y, dims.y, constant),
    )
}
