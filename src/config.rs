//! Tunables for the world step and the drag adapter.

use crate::error::SimError;
use crate::float::Float;
use crate::obstacle::Aabb;

/// Configuration for the per-tick glyph update.
///
/// Velocities are in pixels per tick, so most constants are per-tick factors
/// and only change meaning together with `tick_duration`.
///
/// # Builder Pattern
/// ```
/// use drifty::config::WorldConfig;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_friction(0.9)
///     .with_collision_radius(120.0)
///     .with_return_delay(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig<F: Float> {
    /// Fixed tick length in seconds. Default: 1/60.
    pub tick_duration: F,
    /// Velocity multiplier applied every tick, in (0, 1). Default: 0.92.
    pub friction: F,
    /// Speed under which the return force kicks in. Default: 0.5.
    pub rest_threshold: F,
    /// Fraction of the offset to rest added to velocity per tick. Default: 0.04.
    pub return_force: F,
    /// Speed kept after an obstacle or bounds bounce, in [0, 1]. Default: 0.5.
    pub bounce_damping: F,
    /// Centre distance under which two glyphs push apart. Default: 100.
    pub collision_radius: F,
    /// Velocity gained per pixel of penetration. Default: 0.08.
    pub push_strength: F,
    /// Seconds after release before the glyph starts drifting home. Default: 1.0.
    pub return_delay: F,
    /// Position/speed tolerance for snapping to rest. Default: 0.05.
    pub settle_epsilon: F,
    /// Degrees of tilt per px/tick of horizontal speed. Default: 0.6.
    pub tilt_per_velocity: F,
    /// Tilt limit in degrees. Default: 25.
    pub max_tilt: F,
    /// Fraction of the remaining tilt closed per tick. Default: 0.2.
    pub tilt_easing: F,
    /// Ticks the frame clock may run per `advance`. Default: 5.
    pub max_ticks_per_frame: usize,
    /// Optional viewport glyph boxes are kept inside. Default: none.
    pub bounds: Option<Aabb<F>>,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            tick_duration: F::one() / F::from_f32(60.0),
            friction: F::from_f32(0.92),
            rest_threshold: F::from_f32(0.5),
            return_force: F::from_f32(0.04),
            bounce_damping: F::half(),
            collision_radius: F::from_f32(100.0),
            push_strength: F::from_f32(0.08),
            return_delay: F::one(),
            settle_epsilon: F::from_f32(0.05),
            tilt_per_velocity: F::from_f32(0.6),
            max_tilt: F::from_f32(25.0),
            tilt_easing: F::from_f32(0.2),
            max_ticks_per_frame: 5,
            bounds: None,
        }
    }

    /// Set the fixed tick length in seconds.
    pub fn with_tick_duration(mut self, seconds: F) -> Self {
        self.tick_duration = seconds;
        self
    }

    /// Set the per-tick velocity multiplier.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the speed under which the return force applies.
    pub fn with_rest_threshold(mut self, threshold: F) -> Self {
        self.rest_threshold = threshold;
        self
    }

    /// Set the return force factor.
    pub fn with_return_force(mut self, force: F) -> Self {
        self.return_force = force;
        self
    }

    /// Set the speed kept after a bounce.
    pub fn with_bounce_damping(mut self, damping: F) -> Self {
        self.bounce_damping = damping;
        self
    }

    /// Set the centre distance at which glyphs push apart.
    pub fn with_collision_radius(mut self, radius: F) -> Self {
        self.collision_radius = radius;
        self
    }

    /// Set the push per pixel of penetration.
    pub fn with_push_strength(mut self, strength: F) -> Self {
        self.push_strength = strength;
        self
    }

    /// Set the delay after release, in seconds.
    pub fn with_return_delay(mut self, seconds: F) -> Self {
        self.return_delay = seconds;
        self
    }

    /// Set the snap-to-rest tolerance.
    pub fn with_settle_epsilon(mut self, epsilon: F) -> Self {
        self.settle_epsilon = epsilon;
        self
    }

    /// Set the tilt gain and the tilt limit in degrees.
    pub fn with_tilt(mut self, per_velocity: F, max: F) -> Self {
        self.tilt_per_velocity = per_velocity;
        self.max_tilt = max;
        self
    }

    /// Set the tick cap per `advance`. At least one.
    pub fn with_max_ticks_per_frame(mut self, ticks: usize) -> Self {
        self.max_ticks_per_frame = ticks.max(1);
        self
    }

    /// Keep glyphs inside a viewport.
    pub fn with_bounds(mut self, bounds: Aabb<F>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Ticks a released glyph waits before returning, rounded. At least one.
    pub fn return_delay_ticks(&self) -> usize {
        (self.return_delay / self.tick_duration + F::half()).floor().to_usize().max(1)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let zero = F::zero();
        let one = F::one();
        if !(self.tick_duration.is_finite() && self.tick_duration > zero) {
            return Err(SimError::InvalidTimestep);
        }
        if !(self.friction > zero && self.friction < one) {
            return Err(SimError::InvalidFriction);
        }
        if !(self.return_force >= zero && self.return_force <= one) {
            return Err(SimError::InvalidReturnForce);
        }
        if !(self.bounce_damping >= zero && self.bounce_damping <= one) {
            return Err(SimError::InvalidBounceDamping);
        }
        if !(self.collision_radius.is_finite() && self.collision_radius > zero) {
            return Err(SimError::InvalidCollisionRadius);
        }
        Ok(())
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for turning pointer gestures into glyph motion.
#[derive(Clone, Debug, PartialEq)]
pub struct DragConfig<F: Float> {
    /// Multiplier on the gesture velocity handed to the physics step. Default: 1.0.
    pub release_scale: F,
    /// Cap on release speed in px/tick. Default: 60.
    pub max_release_speed: F,
    /// Pointer samples kept for the release estimate. Default: 8.
    pub max_samples: usize,
    /// Sample pairs further apart than this (seconds) are ignored. Default: 0.1.
    pub max_sample_gap: F,
    /// Rubber-band constant for drags past the bounds. Default: 0.2.
    pub rubberband: F,
}

impl<F: Float> DragConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        DragConfig {
            release_scale: F::one(),
            max_release_speed: F::from_f32(60.0),
            max_samples: 8,
            max_sample_gap: F::from_f32(0.1),
            rubberband: F::from_f32(0.2),
        }
    }

    /// Set the release velocity multiplier.
    pub fn with_release_scale(mut self, scale: F) -> Self {
        self.release_scale = scale;
        self
    }

    /// Set the release speed cap in px/tick.
    pub fn with_max_release_speed(mut self, speed: F) -> Self {
        self.max_release_speed = speed;
        self
    }

    /// Set the pointer history length. At least two.
    pub fn with_max_samples(mut self, samples: usize) -> Self {
        self.max_samples = samples.max(2);
        self
    }

    /// Set the largest sample gap, in seconds, used for the release estimate.
    pub fn with_max_sample_gap(mut self, seconds: F) -> Self {
        self.max_sample_gap = seconds;
        self
    }

    /// Set the rubber-band constant.
    pub fn with_rubberband(mut self, constant: F) -> Self {
        self.rubberband = constant;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let zero = F::zero();
        if !(self.release_scale.is_finite() && self.release_scale > zero) {
            return Err(SimError::InvalidReleaseScale);
        }
        if !(self.max_release_speed.is_finite() && self.max_release_speed > zero) {
            return Err(SimError::InvalidReleaseSpeed);
        }
        if !(self.max_sample_gap.is_finite() && self.max_sample_gap > zero) {
            return Err(SimError::InvalidSampleGap);
        }
        if !(self.rubberband.is_finite() && self.rubberband >= zero) {
            return Err(SimError::InvalidRubberband);
        }
        Ok(())
    }
}

impl<F: Float> Default for DragConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
