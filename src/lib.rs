//! tether2d: stepped-sweep motion and collision response for boxes and ramps

pub mod types;
pub mod api;
pub mod vector;
pub mod collider;
pub mod config;
pub mod error;
pub mod narrowphase;
pub mod engine;
pub mod world;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::collider::{BoxCollider, Collider, ColliderShape, ShapeKind, TriangleCollider};
pub use crate::config::PhysicsConfig;
pub use crate::error::{ConfigError, PhysicsError};
pub use crate::engine::{MoveOutcome, PhysicsEngine};
pub use crate::narrowphase::Narrowphase;
pub use crate::world::Level;
