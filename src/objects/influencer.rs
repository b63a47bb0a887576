//! Zones that override gravity, force and material for entities inside them.

use crate::behaviors::{Behavior, Commands};
use crate::collision::AABB;
use crate::common::Material;
use crate::math::vec2::Vec2;
use crate::objects::entity::{Entity, PhysicType};
use crate::objects::store::EntityId;
use std::sync::Arc;

/// Data carried by an influencer entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Influencer {
    pub force: Vec2,
    /// Replaces the world gravity for entities inside the zone.
    pub gravity: Option<Vec2>,
}

/// Snapshot of one influencer taken at the start of an engine pass.
#[derive(Debug, Clone)]
pub struct InfluenceZone {
    pub id: EntityId,
    pub bounds: AABB,
    pub force: Vec2,
    pub gravity: Option<Vec2>,
    pub material: Arc<Material>,
}

impl InfluenceZone {
    pub fn from_entity(entity: &Entity) -> Option<Self> {
        entity.influencer_data().map(|data| InfluenceZone {
            id: entity.id,
            bounds: entity.collision_box,
            force: data.force,
            gravity: data.gravity,
            material: Arc::clone(&entity.material),
        })
    }
}

/// Finds the zone acting on `entity`. Zones are not blended: the last
/// overlapping zone in registration order wins.
pub fn active_zone<'a>(zones: &'a [InfluenceZone], entity: &Entity) -> Option<&'a InfluenceZone> {
    zones
        .iter()
        .rev()
        .find(|zone| zone.id != entity.id && zone.bounds.overlaps(&entity.collision_box))
}

/// Built-in collision reaction of every influencer: pushes overlapping
/// dynamic entities with the zone's force.
#[derive(Debug, Default)]
pub struct InfluencerBehavior;

impl Behavior for InfluencerBehavior {
    fn on_collision(&self, entity: &mut Entity, other: &mut Entity, _commands: &mut Commands) {
        if other.physic_type != PhysicType::Dynamic {
            return;
        }
        if let Some(data) = entity.influencer_data() {
            other.apply_force(data.force);
        }
    }
}
