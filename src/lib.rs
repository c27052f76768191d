//! Draggable glyph physics for playful landing pages.
//!
//! `drifty` simulates a row of letter glyphs that can be grabbed and flung.
//! Released glyphs coast under friction, bounce off static page obstacles,
//! shove neighbouring glyphs out of the way and eventually drift back to
//! where they started. A spring-based render layer turns the simulated state
//! into smooth per-glyph transforms.
//!
//! # Features
//!
//! - **One world, one clock**: every glyph is updated by a single fixed-step
//!   pass in index order, reading peers from one snapshot
//! - **Pointer drags**: 1:1 follow while held, momentum from recent samples on
//!   release, rubber-banding at the viewport edge
//! - **Analytical springs**: tension/friction springs with closed-form updates
//! - **Observable**: contacts, bounces and settling via `StepObserver`
//! - **`no_std` compatible**: needs only `alloc`, runs in WASM
//!
//! ```
//! use drifty::{World, WorldConfig, WordLayout, RenderLayer, Vec2, NoOpStepObserver};
//!
//! let layout = WordLayout::hero(Vec2::new(400.0f32, 300.0));
//! let mut world = World::from_word(["N", "E", "W", "T", "O", "N"], &layout, WorldConfig::new()).unwrap();
//! let mut render = RenderLayer::new();
//!
//! world.nudge(0, Vec2::new(-12.0, 4.0)).unwrap();
//! for _ in 0..60 {
//!     world.advance(1.0 / 60.0, &mut NoOpStepObserver);
//!     render.sync(&world);
//!     render.advance(1.0 / 60.0);
//! }
//! assert_eq!(render.len(), 6);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod spring;
pub mod obstacle;
pub mod glyph;
pub mod registry;
pub mod drag;
pub mod clock;
pub mod layout;
pub mod world;
pub mod render;
pub mod observer;
pub mod config;
pub mod error;

pub use float::Float;
pub use vec::{Scalar, Vec2, Vector};
pub use spring::{DampingMode, Spring, Spring1D, Spring2D, SpringConfig};
pub use obstacle::{Aabb, Axis, Bounce, Obstacle, Penetration};
pub use glyph::{Glyph, Phase};
pub use registry::PositionRegistry;
pub use drag::{rubberband, DragTracker};
pub use clock::FrameClock;
pub use layout::WordLayout;
pub use world::World;
pub use render::{RenderLayer, Transform};
pub use config::{DragConfig, WorldConfig};
pub use observer::{NoOpStepObserver, StepObserver};
pub use error::SimError;
