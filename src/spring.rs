//! Closed-form damped springs used by the render layer to smooth glyph motion.
//!
//! Springs are described the way animation libraries usually expose them, as
//! `tension` and `friction` acting on a unit mass. Internally that becomes an
//! angular frequency `ω = √tension` and a damping ratio `ζ = friction / 2ω`,
//! and each update evaluates the exact solution for `dt`, so large or uneven
//! frame times never blow up.

use crate::float::Float;
use crate::vec::{Scalar, Vec2, Vector};

/// Tension/friction pair for a unit-mass spring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConfig<F: Float> {
    pub tension: F,
    pub friction: F,
}

impl<F: Float> SpringConfig<F> {
    pub fn new(tension: F, friction: F) -> Self {
        SpringConfig { tension, friction }
    }

    /// Spring from a natural frequency in Hz and a damping ratio.
    pub fn from_frequency(frequency_hz: F, damping_ratio: F) -> Self {
        let w = F::two() * F::pi() * frequency_hz;
        SpringConfig::new(w * w, F::two() * damping_ratio * w)
    }

    /// No overshoot, fastest settle for the given frequency.
    pub fn critically_damped(frequency_hz: F) -> Self {
        SpringConfig::from_frequency(frequency_hz, F::one())
    }

    /// Snappy follow used right after a glyph is released.
    pub fn fling() -> Self {
        SpringConfig::new(F::from_f32(170.0), F::from_f32(26.0))
    }

    /// Slower, overdamped glide used while a glyph drifts home.
    pub fn gentle_return() -> Self {
        SpringConfig::new(F::from_f32(60.0), F::from_f32(18.0))
    }

    pub fn angular_freq(&self) -> F {
        self.tension.max(F::zero()).sqrt()
    }

    pub fn damping_ratio(&self) -> F {
        let w = self.angular_freq();
        if w.is_near_zero(F::from_f32(1e-10)) {
            return F::one();
        }
        self.friction / (F::two() * w)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DampingMode<F: Float> {
    CriticallyDamped,
    Underdamped { ratio: F },
    Overdamped { ratio: F },
}

impl<F: Float> DampingMode<F> {
    fn from_ratio(ratio: F) -> Self {
        let tolerance = F::from_f32(1e-4);
        if (ratio - F::one()).abs() < tolerance {
            DampingMode::CriticallyDamped
        } else if ratio < F::one() {
            DampingMode::Underdamped { ratio: ratio.max(tolerance) }
        } else {
            DampingMode::Overdamped { ratio }
        }
    }
}

/// Analytical spring-damper chasing a target value.
#[derive(Clone, Debug)]
pub struct Spring<V: Vector> {
    current: V,
    velocity: V,
    target: V,
    angular_freq: V::Scalar,
    mode: DampingMode<V::Scalar>,
}

impl<V: Vector> Spring<V> {
    /// A spring resting at `initial`.
    pub fn new(initial: V, config: SpringConfig<V::Scalar>) -> Self {
        Spring {
            current: initial,
            velocity: V::zero(),
            target: initial,
            angular_freq: config.angular_freq(),
            mode: DampingMode::from_ratio(config.damping_ratio()),
        }
    }

    /// Swap tension/friction, keeping position and velocity.
    pub fn set_config(&mut self, config: SpringConfig<V::Scalar>) {
        self.angular_freq = config.angular_freq();
        self.mode = DampingMode::from_ratio(config.damping_ratio());
    }

    pub fn update(&mut self, dt: V::Scalar) {
        let x0 = self.current - self.target;
        let v0 = self.velocity;
        let w = self.angular_freq;
        if w.is_near_zero(V::Scalar::from_f32(1e-10)) {
            return;
        }

        let (offset, velocity) = match self.mode {
            DampingMode::CriticallyDamped => {
                let decay = (-w * dt).exp();
                let c2 = v0 + x0.scale(w);
                let x = (x0 + c2.scale(dt)).scale(decay);
                let v = (v0 - c2.scale(w * dt)).scale(decay);
                (x, v)
            }
            DampingMode::Underdamped { ratio: zeta } => {
                let one = V::Scalar::one();
                let wd = w * (one - zeta * zeta).sqrt();
                let decay = (-zeta * w * dt).exp();
                let (sin, cos) = ((wd * dt).sin(), (wd * dt).cos());

                let a = x0;
                let b = (v0 + x0.scale(zeta * w)).scale(one / wd);
                let x = (a.scale(cos) + b.scale(sin)).scale(decay);

                let v_cos = b.scale(wd) - a.scale(zeta * w);
                let v_sin = a.scale(wd) + b.scale(zeta * w);
                let v = (v_cos.scale(cos) - v_sin.scale(sin)).scale(decay);
                (x, v)
            }
            DampingMode::Overdamped { ratio: zeta } => {
                let one = V::Scalar::one();
                let s = (zeta * zeta - one).sqrt();
                let r1 = -w * (zeta - s);
                let r2 = -w * (zeta + s);
                let denom = one / (r2 - r1);

                let c1 = (x0.scale(r2) - v0).scale(denom);
                let c2 = (v0 - x0.scale(r1)).scale(denom);
                let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());

                let x = c1.scale(e1) + c2.scale(e2);
                let v = c1.scale(r1 * e1) + c2.scale(r2 * e2);
                (x, v)
            }
        };

        self.current = self.target + offset;
        self.velocity = velocity;
    }

    pub fn set_target(&mut self, target: V) { self.target = target; }
    pub fn target(&self) -> V { self.target }
    pub fn value(&self) -> V { self.current }
    pub fn velocity(&self) -> V { self.velocity }
    pub fn mode(&self) -> &DampingMode<V::Scalar> { &self.mode }

    pub fn is_settled(&self, eps_pos: V::Scalar, eps_vel: V::Scalar) -> bool {
        (self.current - self.target).length_sq() < eps_pos * eps_pos
            && self.velocity.length_sq() < eps_vel * eps_vel
    }

    /// Jump to the target with no residual motion (drag follows the pointer 1:1).
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
        self.velocity = V::zero();
    }
}

pub type Spring1D<F> = Spring<Scalar<F>>;
pub type Spring2D<F> = Spring<Vec2<F>>;
