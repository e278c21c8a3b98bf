//! Tunables for force integration, stepping and collision response.

use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::error::ConfigError;

/// Engine configuration. Missing keys in a loaded document keep their defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to velocity.y once per move (not scaled by elapsed time).
    pub gravity: f32,
    /// Horizontal drag applied against the direction of travel.
    pub drag: f32,
    /// Length of one sweep step in world units.
    pub step_distance: f32,
    /// Distance the step is pushed out along each contact normal.
    pub bounce_out: f32,
    /// Per-axis scale of the reflected velocity after landing on a floor.
    pub floor_damping: Vec2,
    /// Scale of the reflected velocity after hitting a wall, ceiling or ramp.
    pub surface_damping: f32,
    /// Below this speed a floor landing stops the entity outright.
    pub rest_speed: f32,
    /// Desired velocities at or below this length are treated as no motion.
    pub min_speed: f32,
    /// Hard cap on sweep steps per move.
    pub max_steps: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 10.0,
            drag: 2.0,
            step_distance: 0.09,
            bounce_out: 0.1,
            floor_damping: Vec2::new(0.9, 0.1),
            surface_damping: 0.3,
            rest_speed: 1.0,
            min_speed: 0.0001,
            max_steps: 10_000,
        }
    }
}

impl PhysicsConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PhysicsConfig::default();
        assert_eq!(cfg.gravity, 10.0);
        assert_eq!(cfg.drag, 2.0);
        assert_eq!(cfg.step_distance, 0.09);
        assert_eq!(cfg.bounce_out, 0.1);
        assert_eq!(cfg.floor_damping, Vec2::new(0.9, 0.1));
        assert_eq!(cfg.surface_damping, 0.3);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let cfg = PhysicsConfig::from_toml_str("gravity = 20.0\nmax_steps = 64\n").unwrap();
        assert_eq!(cfg.gravity, 20.0);
        assert_eq!(cfg.max_steps, 64);
        assert_eq!(cfg.drag, PhysicsConfig::default().drag);
    }

    #[test]
    fn test_vector_keys() {
        let cfg = PhysicsConfig::from_toml_str("floor_damping = [0.5, 0.25]\n").unwrap();
        assert_eq!(cfg.floor_damping, Vec2::new(0.5, 0.25));
    }

    #[test]
    fn test_bad_document_is_parse_error() {
        let err = PhysicsConfig::from_toml_str("gravity = \"heavy\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PhysicsConfig::load("/nonexistent/tether2d.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
