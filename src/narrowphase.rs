use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::collider::{BoxCollider, ColliderShape, TriangleCollider};
use crate::error::PhysicsError;
use crate::types::*;
use crate::vector::{project_onto_normal, project_perpendicular_to_normal};

const UP: Vec2 = Vec2::new(0.0, -1.0);
const RIGHT: Vec2 = Vec2::new(1.0, 0.0);

/// Narrowphase tests for a moving box.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn check_would_collide(
        moving: &PlacedCollider,
        movement: Vec2,
        other: &PlacedCollider,
    ) -> Result<Option<Contact>, PhysicsError> {
        let origin = moving.position + movement;
        match (&moving.collider.shape, &other.collider.shape) {
            (ColliderShape::Box(a), ColliderShape::Box(b)) => {
                Ok(Self::aabb_collision(moving, a, origin, other, b))
            }
            (ColliderShape::Box(a), ColliderShape::Triangle(t)) => {
                Ok(Self::diagonal_collision(moving, a, origin, other, t))
            }
            (a, b) => Err(PhysicsError::UnsupportedShapePair {
                moving: a.kind(),
                other: b.kind(),
            }),
        }
    }

    fn aabb_collision(
        moving: &PlacedCollider,
        moving_box: &BoxCollider,
        origin: Vec2,
        other: &PlacedCollider,
        other_box: &BoxCollider,
    ) -> Option<Contact> {
        let other_origin = other.position;
        let ha = moving_box.half_extents();
        let hb = other_box.half_extents();

        let overlaps = origin.x - ha.x < other_origin.x + hb.x
            && origin.x + ha.x > other_origin.x - hb.x
            && origin.y - ha.y < other_origin.y + hb.y
            && origin.y + ha.y > other_origin.y - hb.y;
        if !overlaps {
            return None;
        }

        let mut direction = origin - other_origin;
        if direction == Vec2::ZERO {
            direction = UP;
        }
        let direction = direction.normalize();

        // Only boxes here: the smaller X gap means the hit is on the top or bottom face.
        // Points are face centres, not penetration points.
        let a = moving.position;
        let b = other_origin;
        let (normal, point, struck_point) =
            if (origin.x - other_origin.x).abs() < (origin.y - other_origin.y).abs() {
                if UP.dot(direction) > 0.0 {
                    (UP, Vec2::new(b.x, b.y - hb.y), Vec2::new(a.x, a.y + ha.y))
                } else {
                    (-UP, Vec2::new(b.x, b.y + hb.y), Vec2::new(a.x, a.y - ha.y))
                }
            } else if RIGHT.dot(direction) > 0.0 {
                (RIGHT, Vec2::new(b.x + hb.x, b.y), Vec2::new(a.x - ha.x, a.y))
            } else {
                (-RIGHT, Vec2::new(b.x - hb.x, b.y), Vec2::new(a.x + ha.x, a.y))
            };

        Some(Contact {
            to_moving: CollisionInfo {
                collider: other.collider.owner,
                point,
                normal,
            },
            to_struck: CollisionInfo {
                collider: moving.collider.owner,
                point: struck_point,
                normal: -normal,
            },
        })
    }

    fn diagonal_collision(
        moving: &PlacedCollider,
        moving_box: &BoxCollider,
        origin: Vec2,
        other: &PlacedCollider,
        ramp: &TriangleCollider,
    ) -> Option<Contact> {
        if !ramp.is_point_in_wedge(origin, other.position) {
            return None;
        }

        let p = origin - other.position;
        let n = ramp.normal;
        let depth_limit = moving_box.height * ramp.scale;
        let span_limit = ramp.size * ramp.scale;
        let along_normal = project_onto_normal(p, n);
        let along_slope = project_perpendicular_to_normal(p, n);
        if along_normal.length() >= depth_limit || along_slope.length() >= span_limit {
            return None;
        }

        let point = origin - n * depth_limit;
        log::trace!("ramp contact normal=({:.3},{:.3}) point={point:?}", n.x, n.y);
        Some(Contact {
            to_moving: CollisionInfo {
                collider: other.collider.owner,
                point,
                normal: n,
            },
            to_struck: CollisionInfo {
                collider: moving.collider.owner,
                point,
                normal: -n,
            },
        })
    }
}
