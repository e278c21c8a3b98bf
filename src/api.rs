use glam::Vec2;

use crate::collider::{BoxCollider, TriangleCollider};
use crate::error::PhysicsError;
use crate::types::*;

/// Source of the entities a move is checked against.
///
/// Implemented by [`crate::world::Level`]; games with their own entity storage can
/// implement it directly. No spatial filtering is expected: every entity of the
/// current physical level is a candidate.
///
/// The ids yielded here are the ones contacts and events are addressed with; the engine
/// does not rely on [`crate::collider::Collider::owner`] being filled in.
pub trait LevelQuery {
    /// All entities of the current physical level with their ids, including the one
    /// being moved.
    fn candidate_entities(&self) -> impl Iterator<Item = (EntityId, &Entity)>;

    fn entity(&self, id: EntityId) -> Option<&Entity>;

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity>;
}

/// Receiver of collision events once a move has finished.
pub trait CollisionListener {
    fn on_collision(&mut self, recipient: EntityId, info: &CollisionInfo);
}

impl<F> CollisionListener for F
where
    F: FnMut(EntityId, &CollisionInfo),
{
    fn on_collision(&mut self, recipient: EntityId, info: &CollisionInfo) {
        self(recipient, info)
    }
}

/// Narrowphase signatures for a moving box against the supported shapes.
pub trait NarrowphaseApi {
    /// Would `moving`, displaced by `movement`, hit `other`? Dispatches on the shape pair.
    fn check_would_collide(
        moving: &PlacedCollider,
        movement: Vec2,
        other: &PlacedCollider,
    ) -> Result<Option<Contact>, PhysicsError>;

    /// Box against box at the hypothetical centre `origin` of the moving box.
    fn aabb_collision(
        moving: &PlacedCollider,
        moving_box: &BoxCollider,
        origin: Vec2,
        other: &PlacedCollider,
        other_box: &BoxCollider,
    ) -> Option<Contact>;

    /// Box against ramp at the hypothetical centre `origin` of the moving box.
    fn diagonal_collision(
        moving: &PlacedCollider,
        moving_box: &BoxCollider,
        origin: Vec2,
        other: &PlacedCollider,
        ramp: &TriangleCollider,
    ) -> Option<Contact>;
}
