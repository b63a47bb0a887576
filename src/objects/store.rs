//! Authoritative storage for every simulated entity.

use crate::behaviors::Commands;
use crate::error::StoreError;
use crate::objects::entity::Entity;
use crate::objects::influencer::InfluenceZone;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle for entities backed by a generational slot map.
    /// A removed entity's handle is never valid again.
    pub struct EntityId;
}

/// Generational arena owning all entities, children included.
///
/// Iteration follows registration order, which decides influencer
/// precedence and the order of collision pairs.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: SlotMap<EntityId, Entity>,
    order: Vec<EntityId>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity and returns its handle.
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = self.entities.insert_with_key(|key| {
            let mut entity = entity;
            entity.id = key;
            entity.update_bounds();
            entity
        });
        self.order.push(id);
        log::debug!("registered entity {:?}", id);
        id
    }

    /// Registers `child` as owned by `parent`.
    pub fn add_child(&mut self, parent: EntityId, mut child: Entity) -> Result<EntityId, StoreError> {
        if !self.entities.contains_key(parent) {
            return Err(StoreError::UnknownEntity(parent));
        }
        child.parent = Some(parent);
        let id = self.insert(child);
        if let Some(owner) = self.entities.get_mut(parent) {
            owner.children.push(id);
        }
        Ok(id)
    }

    /// Removes an entity together with all of its descendants.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let entity = self.entities.remove(id)?;
        self.order.retain(|other| *other != id);
        if let Some(owner) = entity.parent.and_then(|parent| self.entities.get_mut(parent)) {
            owner.children.retain(|child| *child != id);
        }
        for child in &entity.children {
            self.remove(*child);
        }
        log::debug!("removed entity {:?} ({})", id, entity.name);
        Some(entity)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Mutable access to two distinct entities at once.
    /// Returns `None` when the handles are equal or either one is stale.
    pub fn get_pair_mut(&mut self, a: EntityId, b: EntityId) -> Option<[&mut Entity; 2]> {
        self.entities.get_disjoint_mut([a, b])
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Handles in registration order. The returned list is a snapshot, so the
    /// store may change while a caller walks it.
    pub fn ids(&self) -> Vec<EntityId> {
        self.order.clone()
    }

    /// Entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.order.iter().filter_map(|id| self.entities.get(*id))
    }

    /// Handles of entities whose name contains `pattern`.
    pub fn find_by_name(&self, pattern: &str) -> Vec<EntityId> {
        self.iter()
            .filter(|entity| entity.name.contains(pattern))
            .map(|entity| entity.id)
            .collect()
    }

    /// Snapshot of every influencer, in registration order.
    pub fn influence_zones(&self) -> Vec<InfluenceZone> {
        self.iter().filter_map(InfluenceZone::from_entity).collect()
    }

    /// Sum of the material friction of everything `id` collided with on the
    /// previous detection pass.
    pub fn collider_friction(&self, id: EntityId) -> f64 {
        self.get(id).map_or(0.0, |entity| {
            entity
                .colliders
                .iter()
                .filter_map(|other| self.get(*other))
                .map(|other| other.material.friction)
                .sum()
        })
    }

    /// Applies the structural changes queued during a tick: spawns first,
    /// then removals.
    pub fn apply(&mut self, commands: &mut Commands) {
        for (parent, entity) in commands.spawns.drain(..) {
            match parent {
                Some(parent) => {
                    if let Err(err) = self.add_child(parent, entity) {
                        log::debug!("dropped queued child: {}", err);
                    }
                }
                None => {
                    self.insert(entity);
                }
            }
        }
        for id in commands.removals.drain(..) {
            self.remove(id);
        }
    }
}
