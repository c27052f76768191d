//! The glyph world: one owner, one clock, one update pass per tick.

use alloc::string::String;
use alloc::vec::Vec as AllocVec;

use crate::clock::FrameClock;
use crate::config::{DragConfig, WorldConfig};
use crate::drag::{rubberband_into, DragTracker};
use crate::error::SimError;
use crate::float::Float;
use crate::glyph::{Glyph, Phase};
use crate::layout::WordLayout;
use crate::obstacle::{Aabb, Obstacle};
use crate::observer::StepObserver;
use crate::registry::PositionRegistry;
use crate::vec::Vec2;

/// Next state for one glyph, computed from the tick's snapshot.
#[derive(Copy, Clone, Debug)]
struct Motion<F: Float> {
    position: Vec2<F>,
    velocity: Vec2<F>,
    rotation: F,
    phase: Phase,
}

/// Every glyph, obstacle and in-flight drag on the page.
///
/// `step` updates all glyphs from the positions published at the end of the
/// previous tick (or by the last drag event), then writes every result back
/// before republishing. Update order therefore has no effect on the outcome.
///
/// ```
/// use drifty::{World, WorldConfig, Vec2, NoOpStepObserver};
///
/// let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
/// let n = world.add_glyph("N", Vec2::new(0.0, 0.0), Vec2::new(150.0, 200.0)).unwrap();
/// world.begin_drag(n, Vec2::new(10.0, 10.0), 0.0).unwrap();
/// world.drag_to(n, Vec2::new(60.0, 10.0), 0.016).unwrap();
/// world.end_drag(n, Vec2::new(110.0, 10.0), 0.032).unwrap();
/// world.step(&mut NoOpStepObserver);
/// assert!(world.glyph(n).unwrap().position.x > 100.0);
/// ```
#[derive(Clone, Debug)]
pub struct World<F: Float> {
    glyphs: AllocVec<Glyph<F>>,
    drags: AllocVec<Option<DragTracker<F>>>,
    obstacles: AllocVec<Obstacle<F>>,
    registry: PositionRegistry<F>,
    config: WorldConfig<F>,
    drag_config: DragConfig<F>,
    clock: FrameClock<F>,
    tick: u64,
}

impl<F: Float> World<F> {
    pub fn new(config: WorldConfig<F>) -> Result<Self, SimError> {
        config.validate()?;
        let clock = FrameClock::new(config.tick_duration, config.max_ticks_per_frame);
        Ok(World {
            glyphs: AllocVec::new(),
            drags: AllocVec::new(),
            obstacles: AllocVec::new(),
            registry: PositionRegistry::new(),
            config,
            drag_config: DragConfig::new(),
            clock,
            tick: 0,
        })
    }

    /// One glyph per label, resting where `layout` puts it.
    pub fn from_word<I, S>(labels: I, layout: &WordLayout<F>, config: WorldConfig<F>) -> Result<Self, SimError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: AllocVec<String> = labels.into_iter().map(Into::into).collect();
        let rests = layout.positions(labels.len());
        let mut world = World::new(config)?;
        for (label, rest) in labels.into_iter().zip(rests) {
            world.add_glyph(label, rest, layout.glyph_size)?;
        }
        Ok(world)
    }

    pub fn with_drag_config(mut self, drag_config: DragConfig<F>) -> Result<Self, SimError> {
        drag_config.validate()?;
        self.drag_config = drag_config;
        Ok(self)
    }

    /// Add a glyph resting at `rest`; returns its index.
    pub fn add_glyph(&mut self, label: impl Into<String>, rest: Vec2<F>, size: Vec2<F>) -> Result<usize, SimError> {
        let label = label.into();
        if label.is_empty() {
            return Err(SimError::EmptyLabel);
        }
        let index = self.glyphs.len();
        self.glyphs.push(Glyph::new(index, label, rest, size));
        self.drags.push(None);
        self.registry.publish(&self.glyphs);
        Ok(index)
    }

    /// Add a static obstacle; returns its index.
    pub fn add_obstacle(&mut self, obstacle: Obstacle<F>) -> usize {
        self.obstacles.push(obstacle);
        self.obstacles.len() - 1
    }

    /// Obstacles after `index` shift down by one.
    pub fn remove_obstacle(&mut self, index: usize) -> Option<Obstacle<F>> {
        if index < self.obstacles.len() {
            Some(self.obstacles.remove(index))
        } else {
            None
        }
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    pub fn glyph(&self, index: usize) -> Result<&Glyph<F>, SimError> {
        self.glyphs.get(index).ok_or(SimError::GlyphOutOfBounds { index, count: self.glyphs.len() })
    }

    /// First glyph showing `label`; a word may repeat letters.
    pub fn glyph_by_label(&self, label: &str) -> Option<&Glyph<F>> {
        self.glyphs.iter().find(|g| g.label() == label)
    }

    pub fn glyphs(&self) -> &[Glyph<F>] { &self.glyphs }
    pub fn glyph_count(&self) -> usize { self.glyphs.len() }
    pub fn obstacles(&self) -> &[Obstacle<F>] { &self.obstacles }
    pub fn registry(&self) -> &PositionRegistry<F> { &self.registry }
    pub fn config(&self) -> &WorldConfig<F> { &self.config }
    pub fn clock(&self) -> &FrameClock<F> { &self.clock }

    /// Ticks stepped so far.
    pub fn tick(&self) -> u64 { self.tick }

    /// True when nothing is moving or held.
    pub fn is_settled(&self) -> bool {
        self.glyphs.iter().all(Glyph::is_at_rest)
    }

    /// Add `impulse` (px/tick) to a glyph that is not being dragged.
    pub fn nudge(&mut self, index: usize, impulse: Vec2<F>) -> Result<(), SimError> {
        self.check_index(index)?;
        let glyph = &mut self.glyphs[index];
        if glyph.phase.is_dragged() {
            return Ok(());
        }
        glyph.velocity += impulse;
        if glyph.phase == Phase::Resting {
            glyph.phase = Phase::Returning;
        }
        Ok(())
    }

    pub fn begin_drag(&mut self, index: usize, pointer: Vec2<F>, time: F) -> Result<(), SimError> {
        self.check_index(index)?;
        if self.drags[index].is_some() {
            return Err(SimError::AlreadyDragging { index });
        }
        let glyph = &mut self.glyphs[index];
        self.drags[index] = Some(DragTracker::begin(glyph.position, pointer, time, &self.drag_config));
        glyph.velocity = Vec2::zero();
        glyph.phase = Phase::Dragged;
        log::debug!("drag start: glyph {} ({}) at {:?}", index, glyph.label(), glyph.position);
        Ok(())
    }

    /// Move a held glyph with the pointer; returns its new position.
    pub fn drag_to(&mut self, index: usize, pointer: Vec2<F>, time: F) -> Result<Vec2<F>, SimError> {
        self.check_index(index)?;
        let drag = self.drags[index].as_mut().ok_or(SimError::NotDragging { index })?;
        let mut position = drag.update(pointer, time);
        let glyph = &mut self.glyphs[index];
        if let Some(bounds) = &self.config.bounds {
            position = rubberband_into(position, glyph.size(), bounds, self.drag_config.rubberband);
        }
        glyph.position = position;
        self.registry.publish(&self.glyphs);
        Ok(position)
    }

    /// Let go of a held glyph; returns the launch velocity in px/tick.
    pub fn end_drag(&mut self, index: usize, pointer: Vec2<F>, time: F) -> Result<Vec2<F>, SimError> {
        self.check_index(index)?;
        let drag = self.drags[index].take().ok_or(SimError::NotDragging { index })?;
        let glyph = &mut self.glyphs[index];
        let mut position = drag.position_for(pointer);
        if let Some(bounds) = &self.config.bounds {
            position = rubberband_into(position, glyph.size(), bounds, self.drag_config.rubberband);
        }
        let velocity = drag.release(pointer, time, self.config.tick_duration, &self.drag_config);
        glyph.position = position;
        glyph.velocity = velocity;
        glyph.phase = Phase::Flung { ticks_left: self.config.return_delay_ticks() };
        log::debug!("drag release: glyph {} ({}) velocity {:?}", index, glyph.label(), velocity);
        self.registry.publish(&self.glyphs);
        Ok(velocity)
    }

    /// Feed frame time to the shared clock and run every tick that is due.
    pub fn advance<O: StepObserver>(&mut self, elapsed: F, observer: &mut O) -> usize {
        let ticks = self.clock.accumulate(elapsed);
        for _ in 0..ticks {
            self.step(observer);
        }
        ticks
    }

    /// Run one fixed tick for every glyph.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        let motions: AllocVec<Motion<F>> = self
            .glyphs
            .iter()
            .map(|glyph| self.next_motion(glyph, &mut *observer))
            .collect();

        for (glyph, motion) in self.glyphs.iter_mut().zip(motions) {
            glyph.position = motion.position;
            glyph.velocity = motion.velocity;
            glyph.rotation = motion.rotation;
            glyph.phase = motion.phase;
            if self.config.settles(glyph) {
                glyph.settle();
                log::debug!("glyph {} ({}) back at rest", glyph.index(), glyph.label());
                observer.on_glyph_settled(glyph.index());
            }
        }
        self.registry.publish(&self.glyphs);

        self.tick += 1;
        log::trace!("tick {} done", self.tick);
        observer.on_step_complete(self.tick);
    }

    fn next_motion<O: StepObserver>(&self, glyph: &Glyph<F>, observer: &mut O) -> Motion<F> {
        let cfg = &self.config;
        let index = glyph.index();
        let mut phase = glyph.phase;
        if phase.is_dragged() {
            return Motion { position: glyph.position, velocity: Vec2::zero(), rotation: glyph.rotation, phase };
        }

        let mut velocity = glyph.velocity * cfg.friction;

        let held_off = matches!(phase, Phase::Flung { .. });
        if !held_off && velocity.length() < cfg.rest_threshold {
            velocity += glyph.offset_to_rest() * cfg.return_force;
        }

        // A returning glyph passes through obstacles that stand between it
        // and its rest position.
        let homeward = phase == Phase::Returning;
        let home = glyph.offset_to_rest();
        let here = glyph.bounds();
        let mut correction = Vec2::zero();
        for (k, obstacle) in self.obstacles.iter().enumerate() {
            let Some(hit) = obstacle.bounce(&here, velocity, cfg.bounce_damping) else {
                continue;
            };
            if homeward && hit.correction.dot(home) < F::zero() {
                continue;
            }
            velocity = hit.velocity;
            correction += hit.correction;
            observer.on_obstacle_bounce(index, k, hit.axis);
        }

        let radius = cfg.collision_radius;
        for (peer, peer_position) in self.registry.peers(index) {
            let delta = glyph.position - peer_position;
            let distance = delta.length();
            if distance >= radius {
                continue;
            }
            let normal = if distance.is_near_zero(F::from_f32(1e-6)) {
                let side = if index > peer { F::one() } else { -F::one() };
                Vec2::new(side, F::zero())
            } else {
                delta.scale(F::one() / distance)
            };
            velocity += normal * ((radius - distance) * cfg.push_strength);
            log::trace!("glyph {} pushed off {} (distance {})", index, peer, distance);
            observer.on_glyph_contact(index, peer);
        }

        let mut position = glyph.position + correction + velocity;
        if let Some(bounds) = &cfg.bounds {
            let (p, v) = keep_inside(position, velocity, glyph.size(), bounds, cfg.bounce_damping);
            position = p;
            velocity = v;
        }

        let tilt = (velocity.x * cfg.tilt_per_velocity).clamp(-cfg.max_tilt, cfg.max_tilt);
        let rotation = glyph.rotation.lerp(tilt, cfg.tilt_easing);

        phase = match phase {
            Phase::Flung { ticks_left } if ticks_left > 1 => Phase::Flung { ticks_left: ticks_left - 1 },
            Phase::Flung { .. } => Phase::Returning,
            Phase::Resting if velocity != Vec2::zero() || position != glyph.rest() => Phase::Returning,
            other => other,
        };

        Motion { position, velocity, rotation, phase }
    }

    fn check_index(&self, index: usize) -> Result<(), SimError> {
        if index < self.glyphs.len() {
            Ok(())
        } else {
            Err(SimError::GlyphOutOfBounds { index, count: self.glyphs.len() })
        }
    }
}

impl<F: Float> WorldConfig<F> {
    fn settles(&self, glyph: &Glyph<F>) -> bool {
        glyph.phase == Phase::Returning
            && glyph.offset_to_rest().length() < self.settle_epsilon
            && glyph.velocity.length() < self.settle_epsilon
    }
}

/// Clamp a glyph centre so its box stays in `bounds`, reflecting the velocity
/// component that hit the edge.
fn keep_inside<F: Float>(
    position: Vec2<F>,
    velocity: Vec2<F>,
    size: Vec2<F>,
    bounds: &Aabb<F>,
    damping: F,
) -> (Vec2<F>, Vec2<F>) {
    let half = size.scale(F::half());
    let centre = bounds.center();
    let axis = |p: F, v: F, lo: F, hi: F, mid: F| -> (F, F) {
        if lo > hi {
            (mid, F::zero())
        } else if p < lo {
            (lo, if v < F::zero() { -v * damping } else { v })
        } else if p > hi {
            (hi, if v > F::zero() { -v * damping } else { v })
        } else {
            (p, v)
        }
    };
    let (px, vx) = axis(position.x, velocity.x, bounds.min.x + half.x, bounds.max.x - half.x, centre.x);
    let (py, vy) = axis(position.y, velocity.y, bounds.min.y + half.y, bounds.max.y - half.y, centre.y);
    (Vec2::new(px, py), Vec2::new(vx, vy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;

    fn size() -> Vec2<f32> {
        Vec2::new(150.0, 200.0)
    }

    #[test]
    fn keep_inside_reflects_edge_hit() {
        let bounds = Aabb::new(Vec2::new(0.0f32, 0.0), Vec2::new(800.0, 600.0));
        let (p, v) = keep_inside(Vec2::new(20.0, 300.0), Vec2::new(-8.0, 1.0), size(), &bounds, 0.5);
        assert_eq!(p, Vec2::new(75.0, 300.0));
        assert_eq!(v, Vec2::new(4.0, 1.0));
    }

    #[test]
    fn keep_inside_centres_oversized_glyph() {
        let bounds = Aabb::new(Vec2::new(0.0f32, 0.0), Vec2::new(100.0, 600.0));
        let (p, v) = keep_inside(Vec2::new(20.0, 300.0), Vec2::new(-8.0, 0.0), size(), &bounds, 0.5);
        assert_eq!(p.x, 50.0);
        assert_eq!(v.x, 0.0);
    }

    #[test]
    fn flung_phase_counts_down() {
        let config = WorldConfig::new().with_return_delay(3.0 / 60.0);
        let mut world: World<f32> = World::new(config).unwrap();
        let i = world.add_glyph("N", Vec2::zero(), size()).unwrap();
        world.begin_drag(i, Vec2::zero(), 0.0).unwrap();
        world.end_drag(i, Vec2::new(5.0, 0.0), 0.01).unwrap();
        assert!(matches!(world.glyph(i).unwrap().phase, Phase::Flung { ticks_left: 3 }));
        for _ in 0..2 {
            world.step(&mut NoOpStepObserver);
        }
        assert!(matches!(world.glyph(i).unwrap().phase, Phase::Flung { ticks_left: 1 }));
        world.step(&mut NoOpStepObserver);
        assert_eq!(world.glyph(i).unwrap().phase, Phase::Returning);
    }

    #[test]
    fn dragged_glyph_ignores_physics() {
        let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
        let a = world.add_glyph("A", Vec2::zero(), size()).unwrap();
        world.add_glyph("B", Vec2::new(10.0, 0.0), size()).unwrap();
        world.begin_drag(a, Vec2::zero(), 0.0).unwrap();
        world.step(&mut NoOpStepObserver);
        assert_eq!(world.glyph(a).unwrap().position, Vec2::zero());
        assert!(world.glyph(1).unwrap().position.x > 10.0);
    }
}
