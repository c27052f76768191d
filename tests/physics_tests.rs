use drifty::{Aabb, Axis, NoOpStepObserver, Obstacle, Phase, StepObserver, Vec2, World, WorldConfig};

fn glyph_size() -> Vec2<f32> {
    Vec2::new(150.0, 200.0)
}

fn footer() -> Obstacle<f32> {
    Obstacle::new("footer", Aabb::new(Vec2::new(-400.0, 500.0), Vec2::new(400.0, 560.0)))
}

#[derive(Default)]
struct Counter {
    bounces: Vec<(usize, usize, Axis)>,
    contacts: Vec<(usize, usize)>,
    settled: Vec<usize>,
    ticks: u64,
}

impl StepObserver for Counter {
    fn on_obstacle_bounce(&mut self, glyph: usize, obstacle: usize, axis: Axis) {
        self.bounces.push((glyph, obstacle, axis));
    }
    fn on_glyph_contact(&mut self, glyph: usize, peer: usize) {
        self.contacts.push((glyph, peer));
    }
    fn on_glyph_settled(&mut self, glyph: usize) {
        self.settled.push(glyph);
    }
    fn on_step_complete(&mut self, tick: u64) {
        self.ticks = tick;
    }
}

#[test]
fn release_velocity_follows_gesture_direction() {
    let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
    let i = world.add_glyph("N", Vec2::zero(), glyph_size()).unwrap();

    world.begin_drag(i, Vec2::new(100.0, 100.0), 0.0).unwrap();
    for k in 1..=4 {
        let t = k as f32 * 0.016;
        world.drag_to(i, Vec2::new(100.0 + 6.0 * k as f32, 100.0 - 8.0 * k as f32), t).unwrap();
    }
    let v = world.end_drag(i, Vec2::new(130.0, 60.0), 0.08).unwrap();

    let gesture = Vec2::new(3.0f32, -4.0).normalize();
    let dir = v.normalize();
    assert!(v.length() > 0.0);
    assert!((dir.x - gesture.x).abs() < 1e-3, "{:?} vs {:?}", dir, gesture);
    assert!((dir.y - gesture.y).abs() < 1e-3);
    assert_eq!(world.glyph(i).unwrap().velocity, v);

    world.step(&mut NoOpStepObserver);
    let g = world.glyph(i).unwrap();
    assert!(g.velocity.x > 0.0 && g.velocity.y < 0.0);
}

#[test]
fn overlapping_glyphs_move_apart() {
    let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
    world.add_glyph("A", Vec2::new(0.0, 0.0), glyph_size()).unwrap();
    world.add_glyph("B", Vec2::new(60.0, 20.0), glyph_size()).unwrap();
    let before = world.glyph(0).unwrap().position.distance(world.glyph(1).unwrap().position);

    let mut counter = Counter::default();
    world.step(&mut counter);

    let after = world.glyph(0).unwrap().position.distance(world.glyph(1).unwrap().position);
    assert!(after > before, "{} -> {}", before, after);
    assert_eq!(counter.contacts, vec![(0, 1), (1, 0)]);
}

#[test]
fn coincident_glyphs_separate() {
    let mut world: World<f64> = World::new(WorldConfig::new()).unwrap();
    world.add_glyph("A", Vec2::new(5.0, 5.0), Vec2::new(150.0, 200.0)).unwrap();
    world.add_glyph("B", Vec2::new(5.0, 5.0), Vec2::new(150.0, 200.0)).unwrap();
    world.step(&mut NoOpStepObserver);
    let a = world.glyph(0).unwrap().position;
    let b = world.glyph(1).unwrap().position;
    assert!(a.x < 5.0);
    assert!(b.x > 5.0);
    assert_eq!(a.y, b.y);
}

#[test]
fn displaced_glyph_drifts_back_to_rest() {
    let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
    let rest = Vec2::new(-20.0, 0.0);
    let i = world.add_glyph("N", rest, glyph_size()).unwrap();

    world.begin_drag(i, Vec2::zero(), 0.0).unwrap();
    world.drag_to(i, Vec2::new(240.0, -130.0), 0.5).unwrap();
    world.end_drag(i, Vec2::new(240.0, -130.0), 1.0).unwrap();

    let mut counter = Counter::default();
    for _ in 0..3000 {
        world.step(&mut counter);
    }
    let g = world.glyph(i).unwrap();
    assert!(g.position.distance(rest) < 0.05, "ended at {:?}", g.position);
    assert_eq!(g.phase, Phase::Resting);
    assert_eq!(counter.settled, vec![i]);
    assert_eq!(counter.ticks, 3000);
    assert!(world.is_settled());
}

#[test]
fn flung_glyph_waits_before_returning() {
    let config = WorldConfig::new().with_return_delay(0.5);
    let mut world: World<f32> = World::new(config).unwrap();
    let i = world.add_glyph("E", Vec2::zero(), glyph_size()).unwrap();
    world.begin_drag(i, Vec2::zero(), 0.0).unwrap();
    world.drag_to(i, Vec2::new(300.0, 0.0), 0.4).unwrap();
    world.end_drag(i, Vec2::new(300.0, 0.0), 0.9).unwrap();

    for _ in 0..29 {
        world.step(&mut NoOpStepObserver);
    }
    assert_eq!(world.glyph(i).unwrap().position.x, 300.0);
    assert!(matches!(world.glyph(i).unwrap().phase, Phase::Flung { .. }));

    for _ in 0..10 {
        world.step(&mut NoOpStepObserver);
    }
    assert_eq!(world.glyph(i).unwrap().phase, Phase::Returning);
    assert!(world.glyph(i).unwrap().position.x < 300.0);
}

#[test]
fn obstacle_hit_flips_velocity_on_penetration_axis() {
    let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
    world.add_obstacle(footer());
    let i = world.add_glyph("O", Vec2::new(0.0, 450.0), glyph_size()).unwrap();
    world.nudge(i, Vec2::new(2.0, 5.0)).unwrap();

    let mut counter = Counter::default();
    world.step(&mut counter);

    let v = world.glyph(i).unwrap().velocity;
    assert!(v.y < 0.0, "vertical velocity should flip, got {:?}", v);
    assert!(v.x > 0.0, "horizontal velocity untouched, got {:?}", v);
    assert_eq!(counter.bounces, vec![(i, 0, Axis::Y)]);
}

#[test]
fn obstacle_side_hit_flips_horizontal() {
    let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
    world.add_obstacle(Obstacle::new("wall", Aabb::new(Vec2::new(100.0, -500.0), Vec2::new(140.0, 500.0))));
    let i = world.add_glyph("W", Vec2::new(40.0, 0.0), glyph_size()).unwrap();
    world.nudge(i, Vec2::new(6.0, 1.0)).unwrap();

    let mut counter = Counter::default();
    world.step(&mut counter);
    let v = world.glyph(i).unwrap().velocity;
    assert!(v.x < 0.0);
    assert!(v.y > 0.0);
    assert_eq!(counter.bounces, vec![(i, 0, Axis::X)]);
}

#[test]
fn removed_obstacle_no_longer_bounces() {
    let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
    let o = world.add_obstacle(footer());
    let i = world.add_glyph("O", Vec2::new(0.0, 450.0), glyph_size()).unwrap();
    assert_eq!(world.remove_obstacle(o).map(|o| o.name), Some("footer".to_string()));
    assert!(world.remove_obstacle(o).is_none());
    world.nudge(i, Vec2::new(0.0, 5.0)).unwrap();
    world.step(&mut NoOpStepObserver);
    assert!(world.glyph(i).unwrap().velocity.y > 0.0);
}

#[test]
fn bounds_keep_glyph_on_screen() {
    let bounds = Aabb::new(Vec2::new(-400.0, -300.0), Vec2::new(400.0, 300.0));
    let mut world: World<f32> = World::new(WorldConfig::new().with_bounds(bounds)).unwrap();
    let i = world.add_glyph("T", Vec2::zero(), glyph_size()).unwrap();
    world.nudge(i, Vec2::new(-60.0, 0.0)).unwrap();

    for _ in 0..30 {
        world.step(&mut NoOpStepObserver);
        let g = world.glyph(i).unwrap();
        assert!(g.position.x >= -325.0, "escaped to {:?}", g.position);
    }
}

#[test]
fn fast_glyph_tilts_and_straightens() {
    let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
    let i = world.add_glyph("T", Vec2::zero(), glyph_size()).unwrap();
    world.nudge(i, Vec2::new(30.0, 0.0)).unwrap();
    world.step(&mut NoOpStepObserver);
    assert!(world.glyph(i).unwrap().rotation > 0.0);
    for _ in 0..3000 {
        world.step(&mut NoOpStepObserver);
    }
    assert_eq!(world.glyph(i).unwrap().rotation, 0.0);
}

#[test]
fn hero_word_is_calm_at_rest() {
    let layout = drifty::WordLayout::hero(Vec2::new(0.0f32, 0.0));
    let mut world = World::from_word("NEWTON".chars().map(String::from), &layout, WorldConfig::new()).unwrap();
    let mut counter = Counter::default();
    for _ in 0..120 {
        world.step(&mut counter);
    }
    assert!(counter.contacts.is_empty());
    assert!(world.is_settled());
}

fn thin_bar() -> Obstacle<f32> {
    Obstacle::new("footer", Aabb::new(Vec2::new(-400.0, 110.0), Vec2::new(400.0, 130.0)))
}

#[test]
fn glyph_released_behind_obstacle_comes_home() {
    let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
    world.add_obstacle(thin_bar());
    let i = world.add_glyph("N", Vec2::zero(), glyph_size()).unwrap();

    world.begin_drag(i, Vec2::zero(), 0.0).unwrap();
    world.drag_to(i, Vec2::new(0.0, 400.0), 0.5).unwrap();
    world.end_drag(i, Vec2::new(0.0, 400.0), 1.0).unwrap();

    let mut counter = Counter::default();
    for _ in 0..5000 {
        world.step(&mut counter);
    }
    let g = world.glyph(i).unwrap();
    assert!(world.is_settled(), "stuck at {:?} in {:?}", g.position, g.phase);
    assert_eq!(g.position, Vec2::zero());
    assert!(counter.bounces.is_empty(), "{:?}", counter.bounces);
}

#[test]
fn flung_glyph_is_pushed_out_of_obstacle() {
    let mut world: World<f32> = World::new(WorldConfig::new()).unwrap();
    world.add_obstacle(thin_bar());
    let i = world.add_glyph("N", Vec2::zero(), glyph_size()).unwrap();

    world.begin_drag(i, Vec2::zero(), 0.0).unwrap();
    world.drag_to(i, Vec2::new(0.0, 10.0), 0.01).unwrap();
    let v = world.end_drag(i, Vec2::new(0.0, 20.0), 0.02).unwrap();
    assert!(v.y > 10.0);

    let mut counter = Counter::default();
    world.step(&mut counter);
    assert_eq!(counter.bounces, vec![(i, 0, Axis::Y)]);
    let g = world.glyph(i).unwrap();
    assert!(g.velocity.y < 0.0);
    assert!(!g.bounds().intersects(&world.obstacles()[0].bounds), "still inside at {:?}", g.position);

    for _ in 0..5000 {
        world.step(&mut counter);
        assert!(world.glyph(i).unwrap().position.y < 30.0);
    }
    assert!(world.is_settled());
}
