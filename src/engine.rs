use glam::Vec2;

use crate::api::{CollisionListener, LevelQuery, NarrowphaseApi};
use crate::collider::Collider;
use crate::config::PhysicsConfig;
use crate::error::PhysicsError;
use crate::narrowphase::Narrowphase;
use crate::types::*;
use crate::vector::reflect;

/// Result of one [`PhysicsEngine::move_towards`] call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoveOutcome {
    /// Velocity to feed into the next frame.
    pub velocity: Vec2,
    /// Collision notifications in the order they were detected, two per contact.
    pub events: Vec<CollisionEvent>,
    /// Candidates whose shape pair has no narrowphase and were passed over.
    pub skipped: Vec<EntityId>,
    /// Sweep steps taken.
    pub steps: usize,
    /// Total length of the applied step vectors.
    pub distance: f32,
}

impl MoveOutcome {
    fn at_rest() -> Self {
        Self::default()
    }

    /// Hand every event to `listener`, in detection order.
    pub fn dispatch<C: CollisionListener + ?Sized>(&self, listener: &mut C) {
        for ev in &self.events {
            listener.on_collision(ev.recipient, &ev.info);
        }
    }
}

/// Force integration plus stepped-sweep collision response.
#[derive(Clone, Debug, Default)]
pub struct PhysicsEngine {
    pub cfg: PhysicsConfig,
}

impl PhysicsEngine {
    pub fn new(cfg: PhysicsConfig) -> Self {
        Self { cfg }
    }

    /// Move entity `id` by `velocity` over `elapsed` seconds, colliding with the rest of
    /// `level` except colliders on `ignored` layers.
    ///
    /// The entity's position is written back to the level after every step. The returned
    /// velocity is the reflected and damped velocity of the last contact, or the
    /// force-adjusted velocity when nothing was hit.
    pub fn move_towards<L: LevelQuery + ?Sized>(
        &self,
        level: &mut L,
        id: EntityId,
        velocity: Vec2,
        elapsed: f32,
        ignored: &[Layer],
    ) -> Result<MoveOutcome, PhysicsError> {
        if elapsed < 0.0 || elapsed.is_nan() {
            return Err(PhysicsError::NegativeTimeStep(elapsed));
        }
        let entity = level.entity(id).ok_or(PhysicsError::UnknownEntity(id))?;
        let mut collider = entity.collider.ok_or(PhysicsError::MissingCollider(id))?;
        collider.owner = id;
        let mut position = entity.position;

        if velocity.length() <= self.cfg.min_speed {
            return Ok(MoveOutcome::at_rest());
        }

        if collider.layer == Layer::Ghost {
            position += velocity * elapsed;
            Self::commit(level, id, position);
            return Ok(MoveOutcome {
                velocity,
                distance: (velocity * elapsed).length(),
                ..MoveOutcome::default()
            });
        }

        let velocity = if collider.layer == Layer::Static {
            velocity
        } else {
            self.integrate_forces(position, &entity.anchors, velocity, elapsed)
        };

        let direction = velocity.normalize_or_zero();
        let distance_full = (velocity * elapsed).length();
        let mut out = MoveOutcome {
            velocity,
            ..MoveOutcome::default()
        };

        while out.distance < distance_full {
            if out.steps >= self.cfg.max_steps {
                log::warn!(
                    "entity {:?}: sweep stopped after {} steps ({:.3}/{:.3} covered)",
                    id,
                    out.steps,
                    out.distance,
                    distance_full
                );
                break;
            }
            out.steps += 1;

            let mut next = if out.distance + self.cfg.step_distance > distance_full {
                direction * (distance_full - out.distance)
            } else {
                direction * self.cfg.step_distance
            };

            let contacts =
                self.step_contacts(level, &collider, position, next, ignored, &mut out.skipped);
            for c in &contacts {
                out.events.push(CollisionEvent {
                    recipient: id,
                    info: c.to_moving,
                });
                out.events.push(CollisionEvent {
                    recipient: c.to_moving.collider,
                    info: c.to_struck,
                });
            }

            for c in &contacts {
                let normal = c.to_moving.normal;
                next += normal * self.cfg.bounce_out;
                out.velocity = reflect(velocity, normal);
                if normal.y == -1.0 {
                    out.velocity *= self.cfg.floor_damping;
                    if out.velocity.length() < self.cfg.rest_speed {
                        log::debug!("entity {id:?} came to rest on {:?}", c.to_moving.collider);
                        out.velocity = Vec2::ZERO;
                        return Ok(out);
                    }
                } else {
                    out.velocity *= self.cfg.surface_damping;
                }
            }

            let step_len = next.length();
            if step_len <= 0.0 {
                break;
            }
            position += next;
            Self::commit(level, id, position);
            out.distance += step_len;
            log::trace!("entity {id:?} step {} -> {position:?}", out.steps);
        }

        Ok(out)
    }

    /// Apply gravity, anchor pull and horizontal drag to `velocity`.
    ///
    /// Gravity is a flat increment per call. A zero-length offset to an active anchor stops
    /// anchor processing for every anchor after it as well.
    pub fn integrate_forces(
        &self,
        position: Vec2,
        anchors: &[Anchor],
        velocity: Vec2,
        elapsed: f32,
    ) -> Vec2 {
        let mut velocity = velocity + Vec2::new(0.0, self.cfg.gravity);

        for anchor in anchors.iter().filter(|a| a.active) {
            let offset = anchor.position - position;
            if offset == Vec2::ZERO {
                break;
            }
            let anchor_direction = offset.normalize();
            let predicted = position + velocity * elapsed;
            if anchor.max_distance < (anchor.position - predicted).length() {
                velocity += anchor_direction * velocity.length();
            }
        }

        if velocity.x.abs() > 0.0 {
            let drag = (-velocity).normalize_or_zero();
            velocity.x += drag.x * self.cfg.drag;
        }
        velocity
    }

    /// Narrowphase contacts for one candidate step of `collider` at `position`.
    ///
    /// Identity comes from the ids the level hands out, not from the stored back-references,
    /// so the mover is recognised (and contacts are addressed) however the colliders were
    /// attached.
    fn step_contacts<L: LevelQuery + ?Sized>(
        &self,
        level: &L,
        collider: &Collider,
        position: Vec2,
        movement: Vec2,
        ignored: &[Layer],
        skipped: &mut Vec<EntityId>,
    ) -> Vec<Contact> {
        let me = collider.owner;
        let moving = PlacedCollider {
            collider: *collider,
            position,
        };
        let mut contacts = Vec::new();
        for (other_id, other) in level.candidate_entities() {
            if other_id == me {
                continue;
            }
            let Some(mut other_collider) = other.collider else { continue };
            if ignored.contains(&other_collider.layer) {
                continue;
            }
            other_collider.owner = other_id;
            let other = PlacedCollider {
                collider: other_collider,
                position: other.position,
            };
            match Narrowphase::check_would_collide(&moving, movement, &other) {
                Ok(Some(contact)) => {
                    log::debug!(
                        "{:?} hit {:?} at {:?} n={:?}",
                        me,
                        other_id,
                        contact.to_moving.point,
                        contact.to_moving.normal
                    );
                    contacts.push(contact);
                }
                Ok(None) => {}
                Err(err) => {
                    log::warn!("skipping {me:?} vs {other_id:?}: {err}");
                    if !skipped.contains(&other_id) {
                        skipped.push(other_id);
                    }
                }
            }
        }
        contacts
    }

    fn commit<L: LevelQuery + ?Sized>(level: &mut L, id: EntityId, position: Vec2) {
        if let Some(e) = level.entity_mut(id) {
            e.position = position;
        }
    }
}
