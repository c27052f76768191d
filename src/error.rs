//! Error types for world construction and pointer input.

use core::fmt;

/// Errors returned by fallible world operations.
///
/// Purely cosmetic problems (degenerate geometry, coincident glyphs) are
/// resolved silently inside the step and never surface here.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Friction must be in (0, 1).
    InvalidFriction,
    /// Return force must be in [0, 1].
    InvalidReturnForce,
    /// Collision radius must be positive and finite.
    InvalidCollisionRadius,
    /// Bounce damping must be in [0, 1].
    InvalidBounceDamping,
    /// Tick duration must be positive and finite.
    InvalidTimestep,
    /// Release scale must be positive and finite.
    InvalidReleaseScale,
    /// Release speed cap must be positive and finite.
    InvalidReleaseSpeed,
    /// Sample gap must be positive and finite.
    InvalidSampleGap,
    /// Rubber-band constant must be finite and not negative.
    InvalidRubberband,
    /// Glyph labels cannot be empty.
    EmptyLabel,
    /// Glyph index is out of bounds.
    GlyphOutOfBounds { index: usize, count: usize },
    /// Drag move/release for a glyph with no drag in progress.
    NotDragging { index: usize },
    /// Drag start for a glyph that is already held.
    AlreadyDragging { index: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidFriction => write!(f, "friction must be in (0, 1)"),
            SimError::InvalidReturnForce => write!(f, "return force must be in [0, 1]"),
            SimError::InvalidCollisionRadius => write!(f, "collision radius must be positive and finite"),
            SimError::InvalidBounceDamping => write!(f, "bounce damping must be in [0, 1]"),
            SimError::InvalidTimestep => write!(f, "tick duration must be positive and finite"),
            SimError::InvalidReleaseScale => write!(f, "release scale must be positive and finite"),
            SimError::InvalidReleaseSpeed => write!(f, "release speed cap must be positive and finite"),
            SimError::InvalidSampleGap => write!(f, "sample gap must be positive and finite"),
            SimError::InvalidRubberband => write!(f, "rubber-band constant must be finite and not negative"),
            SimError::EmptyLabel => write!(f, "glyph label is empty"),
            SimError::GlyphOutOfBounds { index, count } => {
                write!(f, "glyph index {} out of bounds (count: {})", index, count)
            }
            SimError::NotDragging { index } => write!(f, "glyph {} is not being dragged", index),
            SimError::AlreadyDragging { index } => write!(f, "glyph {} is already being dragged", index),
        }
    }
}

impl core::error::Error for SimError {}
