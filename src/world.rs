use crate::api::LevelQuery;
use crate::error::PhysicsError;
use crate::types::*;

/// Entity arena for one physical level. Ids are indices and stay valid for the level's lifetime.
#[derive(Clone, Debug, Default)]
pub struct Level {
    entities: Vec<Entity>,
}

impl Level {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Add an entity and point its collider's back-reference at the new id.
    ///
    /// Fails with [`PhysicsError::LevelFull`] once every `u32` id is taken.
    pub fn spawn(&mut self, mut entity: Entity) -> Result<EntityId, PhysicsError> {
        let id = Self::id_at(self.entities.len()).ok_or(PhysicsError::LevelFull)?;
        if let Some(collider) = entity.collider.as_mut() {
            collider.owner = id;
        }
        self.entities.push(entity);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities paired with their ids, in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .filter_map(|(i, e)| Some((Self::id_at(i)?, e)))
    }

    fn id_at(index: usize) -> Option<EntityId> {
        u32::try_from(index).ok().map(EntityId)
    }
}

impl LevelQuery for Level {
    fn candidate_entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.iter()
    }

    fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0 as usize)
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0 as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collider::Collider;
    use glam::Vec2;

    #[test]
    fn test_spawn_assigns_owner() {
        let mut level = Level::new();
        let a = level.spawn(Entity::new(Vec2::ZERO)).unwrap();
        let boxed = Collider::boxed(Layer::Static, 1.0, 1.0);
        let b = level.spawn(Entity::new(Vec2::ONE).with_collider(boxed)).unwrap();
        assert_eq!(a, EntityId(0));
        assert_eq!(b, EntityId(1));
        assert_eq!(level.entity(b).unwrap().collider.unwrap().owner, b);
        assert!(level.entity(a).unwrap().collider.is_none());
        assert_eq!(level.len(), 2);
    }

    #[test]
    fn test_candidates_cover_every_entity() {
        let mut level = Level::new();
        for i in 0..4 {
            level.spawn(Entity::new(Vec2::splat(i as f32))).unwrap();
        }
        let ids: Vec<_> = level.candidate_entities().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![EntityId(0), EntityId(1), EntityId(2), EntityId(3)]);
        assert_eq!(level.candidate_entities().nth(2).unwrap().1.position, Vec2::splat(2.0));
    }

    #[test]
    fn test_ids_stop_at_u32_range() {
        assert_eq!(Level::id_at(7), Some(EntityId(7)));
        assert_eq!(Level::id_at(u32::MAX as usize), Some(EntityId(u32::MAX)));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(Level::id_at(u32::MAX as usize + 1), None);
    }

    #[test]
    fn test_entity_mut_and_unknown_ids() {
        let mut level = Level::new();
        let id = level.spawn(Entity::new(Vec2::ZERO)).unwrap();
        level.entity_mut(id).unwrap().position = Vec2::new(2.0, 3.0);
        assert_eq!(level.entity(id).unwrap().position, Vec2::new(2.0, 3.0));
        assert!(level.entity(EntityId(7)).is_none());
        assert!(level.entity_mut(EntityId(7)).is_none());
    }
}
