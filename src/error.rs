use crate::collider::ShapeKind;
use crate::types::EntityId;

/// Failures of a move or of a single narrowphase check.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// No narrowphase exists for this pair of shapes.
    #[error("unimplemented collider combination: {moving:?} moving against {other:?}")]
    UnsupportedShapePair { moving: ShapeKind, other: ShapeKind },

    #[error("entity {0:?} is not part of the level")]
    UnknownEntity(EntityId),

    #[error("entity {0:?} has no collider")]
    MissingCollider(EntityId),

    #[error("elapsed time must be non-negative, got {0}")]
    NegativeTimeStep(f32),

    #[error("level has no free entity ids left")]
    LevelFull,
}

/// Configuration loading errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
