use crate::behaviors::{BehaviorRef, Commands, EventKind};
use crate::config::PhysicConfig;
use crate::integration::{constrain_to_world, integrate, Environment};
use crate::objects::camera::Camera;
use crate::objects::entity::PhysicType;
use crate::objects::store::EntityStore;
use crate::world::PhysicsWorld;

/// Per-tick orchestration of integration, world bounds, lifetimes and
/// update behaviors.
pub struct PhysicEngine {
    config: PhysicConfig,
    scene_behaviors: Vec<BehaviorRef>,
    camera: Option<Camera>,
}

impl PhysicEngine {
    pub fn new(config: PhysicConfig) -> Self {
        Self {
            config,
            scene_behaviors: Vec::new(),
            camera: None,
        }
    }

    pub fn config(&self) -> &PhysicConfig {
        &self.config
    }

    /// Registers a behavior invoked once per tick after the entity loop.
    pub fn add_scene_behavior(&mut self, behavior: BehaviorRef) {
        self.scene_behaviors.push(behavior);
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Advances every registered entity by one tick of `elapsed` milliseconds.
    ///
    /// Influencers are snapshotted before the loop, so a zone moved by a
    /// behavior takes effect on the next tick.
    pub fn update(&mut self, store: &mut EntityStore, world: &PhysicsWorld, elapsed: f64, commands: &mut Commands) {
        let zones = store.influence_zones();
        let ids = store.ids();

        for id in &ids {
            let collider_friction = store.collider_friction(*id);
            let Some(entity) = store.get_mut(*id) else {
                continue;
            };

            if entity.physic_type == PhysicType::Dynamic {
                let env = Environment::resolve(world, &zones, entity);
                integrate(entity, &env, &self.config, elapsed, collider_friction);
                constrain_to_world(entity, world);
            }

            entity.tick_lifetime(elapsed);
            entity.update_bounds();
            for behavior in entity.behaviors.for_kind(EventKind::UpdateEntity) {
                behavior.update(entity, elapsed, commands);
            }
            entity.clear_collisions();
        }

        for behavior in &self.scene_behaviors {
            behavior.update_scene(store, world, elapsed);
        }

        if let Some(camera) = self.camera.as_mut() {
            if let Some(target) = camera.target.and_then(|id| store.get(id)) {
                camera.follow(target, elapsed);
            }
        }

        log::trace!("engine pass: {} entities, {} influencers", ids.len(), zones.len());
    }
}

impl std::fmt::Debug for PhysicEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhysicEngine")
            .field("config", &self.config)
            .field("scene_behaviors", &self.scene_behaviors.len())
            .field("camera", &self.camera)
            .finish()
    }
}
