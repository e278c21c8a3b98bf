use glam::Vec2;

use crate::collider::Collider;

/// Arena index of an entity inside its level. Colliders carry it as a back-reference.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u32);

/// Interaction class of a collider.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layer {
    #[default]
    Default,
    /// Collides as an obstacle; never receives gravity, anchor pull or drag.
    Static,
    /// Moves straight through everything with no forces applied.
    Ghost,
    Player,
}

/// Rope-like constraint point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor {
    pub position: Vec2,
    pub active: bool,
    /// Furthest the owner may drift from `position` before being pulled back.
    pub max_distance: f32,
}

impl Anchor {
    /// Active anchor at `position`.
    pub fn new(position: Vec2, max_distance: f32) -> Self {
        Self {
            position,
            active: true,
            max_distance,
        }
    }
}

/// Simulated object as seen by the engine.
#[derive(Clone, Debug, Default)]
pub struct Entity {
    pub position: Vec2,
    pub collider: Option<Collider>,
    pub anchors: Vec<Anchor>,
}

impl Entity {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            collider: None,
            anchors: Vec::new(),
        }
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchors.push(anchor);
        self
    }
}

/// One side of a contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionInfo {
    /// Owner of the collider that was hit.
    pub collider: EntityId,
    /// Representative contact point in world space (face centre for boxes).
    pub point: Vec2,
    /// Outward unit normal of the referenced collider's surface.
    pub normal: Vec2,
}

/// Both perspectives of a single collision. Normals are opposite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Delivered to the moving entity; references the struck collider.
    pub to_moving: CollisionInfo,
    /// Delivered to the struck entity; references the moving collider.
    pub to_struck: CollisionInfo,
}

/// Collision notification produced by a sweep, delivered after the move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionEvent {
    pub recipient: EntityId,
    pub info: CollisionInfo,
}

/// A collider at a concrete world position for one narrowphase query.
#[derive(Copy, Clone, Debug)]
pub struct PlacedCollider {
    pub collider: Collider,
    pub position: Vec2,
}
