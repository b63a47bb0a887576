use super::manifold::{Contact, ContactKind};
use crate::behaviors::{Commands, EventKind};
use crate::config::PhysicConfig;
use crate::math::vec2::{clamp_band, Vec2};
use crate::objects::entity::{Entity, PhysicType};
use crate::objects::store::{EntityId, EntityStore};

/// All-pairs overlap detector with impulse and positional resolution.
///
/// There is no broad phase: every registered entity is tested against every
/// live or persistent one.
#[derive(Debug, Clone)]
pub struct CollisionDetector {
    config: PhysicConfig,
    // Pairs resolved by the last pass
    contacts: Vec<Contact>,
}

impl CollisionDetector {
    pub fn new(config: PhysicConfig) -> Self {
        Self {
            config,
            contacts: Vec::new(),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn update(&mut self, store: &mut EntityStore, _elapsed: f64, commands: &mut Commands) {
        self.detect(store, commands);
    }

    /// Scans every ordered pair once.
    ///
    /// Every registered entity, dead ones included, is tested as the first
    /// member; only live or persistent entities are tested as the second.
    pub fn detect(&mut self, store: &mut EntityStore, commands: &mut Commands) {
        self.contacts.clear();
        let ids = store.ids();
        let targets: Vec<EntityId> = ids
            .iter()
            .copied()
            .filter(|id| store.get(*id).is_some_and(|e| e.is_alive() || e.is_persistent()))
            .collect();

        for &first in &ids {
            for &second in &targets {
                if first == second {
                    continue;
                }
                let Some([e1, e2]) = store.get_pair_mut(first, second) else {
                    continue;
                };
                if !e1.collision_box.overlaps(&e2.collision_box) {
                    continue;
                }

                let contact = self.resolve(e1, e2);
                self.contacts.push(contact);

                for behavior in e1.behaviors.for_kind(EventKind::OnCollision) {
                    behavior.on_collision(e1, e2, commands);
                }
            }
        }
        log::trace!("collision pass: {} entities, {} contacts", ids.len(), self.contacts.len());
    }

    /// Resolves one overlapping pair from the point of view of `e1`.
    pub fn resolve(&self, e1: &mut Entity, e2: &mut Entity) -> Contact {
        e1.collide = true;
        e2.collide = true;

        let vp = e2.position - e1.position;
        let distance = vp.magnitude();
        let normal = if distance > 0.0 { vp / distance } else { Vec2::ZERO };

        let kind = match (e1.physic_type, e2.physic_type) {
            (PhysicType::Dynamic, PhysicType::Dynamic) => {
                e1.add_collider(e2.id);
                e2.add_collider(e1.id);
                if distance > 0.0 {
                    self.exchange_impulse(e1, e2, normal);
                } else {
                    log::warn!(
                        "coincident positions for {:?} and {:?}, impulse skipped",
                        e1.id,
                        e2.id
                    );
                }
                ContactKind::DynamicDynamic
            }
            (PhysicType::Dynamic, PhysicType::Static) => {
                e1.add_collider(e2.id);
                if e2.material.elasticity > 0.0 {
                    self.land_on_static(e1, e2, vp);
                    ContactKind::DynamicStatic
                } else {
                    ContactKind::DynamicTrigger
                }
            }
            (PhysicType::Dynamic, PhysicType::None) => {
                e1.add_collider(e2.id);
                ContactKind::DynamicNone
            }
            _ => ContactKind::Passive,
        };

        // Later pairs in the same pass must see the corrected boxes
        e1.update_bounds();
        e2.update_bounds();

        Contact {
            first: e1.id,
            second: e2.id,
            normal,
            kind,
        }
    }

    /// One-dimensional impulse along `normal`, weighted by mass times density.
    fn exchange_impulse(&self, e1: &mut Entity, e2: &mut Entity, normal: Vec2) {
        let relative_velocity = e1.velocity - e2.velocity;
        let speed = relative_velocity.dot(normal);

        // Already moving apart: the mirrored pair of this scan lands here too
        if speed < 0.0 {
            return;
        }

        let weight1 = e1.mass * e1.material.density;
        let weight2 = e2.mass * e2.material.density;
        let total_weight = weight1 + weight2;
        if total_weight <= 0.0 {
            return;
        }
        let impulse = 2.0 * speed / total_weight;

        let (min, max) = (self.config.speed_min, self.config.collision_speed_max);
        e1.velocity = (e1.velocity - normal * (impulse * weight2)).clamp_band(min, max);
        e2.velocity = (e2.velocity + normal * (impulse * weight1)).clamp_band(min, max);
    }

    /// Puts `e1` back on top of (or under) the static `e2` and reflects its
    /// vertical motion by `e1.elasticity * e2.density`.
    fn land_on_static(&self, e1: &mut Entity, e2: &Entity, vp: Vec2) {
        let (box1, box2) = (e1.collision_box, e2.collision_box);
        let offset = e1.shape.offset;
        // Distance from `position.y` to the bottom edge of the collision box
        let bottom_extent = offset.y + e1.size.y + offset.height;

        if vp.y > 0.0 && box1.max.y > box2.min.y {
            e1.position.y = box2.min.y - bottom_extent;
        } else if vp.y < 0.0 && box1.min.y < box2.max.y {
            e1.position.y = box2.max.y - offset.y;
        }

        let rebound = e1.material.elasticity * e2.material.density;
        e1.acceleration.y = -e1.acceleration.y * rebound;
        e1.velocity.y = clamp_band(
            -e1.velocity.y * rebound,
            self.config.collision_speed_min,
            self.config.collision_speed_max,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::Behavior;
    use crate::common::Material;
    use crate::shapes::OffsetBox;
    use std::sync::{Arc, Mutex};
    const EPSILON: f64 = 1e-9;

    fn detector() -> CollisionDetector {
        CollisionDetector::new(PhysicConfig::default())
    }

    fn ball(name: &str, x: f64, y: f64) -> Entity {
        Entity::new(name).with_position(x, y).with_size(16.0, 16.0)
    }

    #[test]
    fn test_no_overlap_no_contact() {
        let mut store = EntityStore::new();
        store.insert(ball("a", 0.0, 0.0));
        store.insert(ball("b", 100.0, 0.0));
        let mut det = detector();
        det.detect(&mut store, &mut Commands::new());
        assert!(det.contacts().is_empty());
        assert!(store.iter().all(|e| !e.collide));
    }

    #[test]
    fn test_dynamic_pair_exchanges_equal_opposite_impulses() {
        let mut store = EntityStore::new();
        let a = store.insert(ball("a", 0.0, 0.0).with_velocity(1.0, 0.0));
        let b = store.insert(ball("b", 10.0, 0.0).with_velocity(-1.0, 0.0));
        let mut det = detector();
        det.detect(&mut store, &mut Commands::new());

        let (ea, eb) = (store.get(a).unwrap(), store.get(b).unwrap());
        assert!(ea.collide && eb.collide);
        // Equal masses swap velocities
        assert!((ea.velocity.x - -1.0).abs() < EPSILON);
        assert!((eb.velocity.x - 1.0).abs() < EPSILON);
        let change_a = ea.velocity.x - 1.0;
        let change_b = eb.velocity.x - -1.0;
        assert!((change_a + change_b).abs() < EPSILON);
        assert_eq!(ea.colliders, vec![b]);
        assert_eq!(eb.colliders, vec![a]);
        // Both orderings were seen, only the first exchanged an impulse
        assert_eq!(det.contacts().len(), 2);
        assert_eq!(det.contacts()[0].normal, Vec2::new(1.0, 0.0));
        assert_eq!(det.contacts()[0].kind, ContactKind::DynamicDynamic);
    }

    #[test]
    fn test_impulse_weighted_by_mass_and_density() {
        let det = detector();
        let mut heavy = ball("heavy", 0.0, 0.0).with_mass(3.0).with_velocity(1.0, 0.0);
        let mut light = ball("light", 10.0, 0.0).with_velocity(0.0, 0.0);
        det.resolve(&mut heavy, &mut light);
        // impulse = 2 * 1 / (3 + 1) = 0.5
        assert!((heavy.velocity.x - 0.5).abs() < EPSILON);
        assert!((light.velocity.x - 1.5).abs() < EPSILON);
        let momentum = 3.0 * heavy.velocity.x + light.velocity.x;
        assert!((momentum - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_impulse_clamped_to_collision_speed() {
        let config = PhysicConfig {
            collision_speed_max: 1.0,
            ..PhysicConfig::default()
        };
        let det = CollisionDetector::new(config);
        let mut a = ball("a", 0.0, 0.0).with_velocity(3.0, 0.0);
        let mut b = ball("b", 10.0, 0.0).with_velocity(-3.0, 0.0);
        det.resolve(&mut a, &mut b);
        assert_eq!(a.velocity.x, -1.0);
        assert_eq!(b.velocity.x, 1.0);
    }

    #[test]
    fn test_coincident_positions_are_guarded() {
        let det = detector();
        let mut a = ball("a", 5.0, 5.0).with_velocity(1.0, 0.0);
        let mut b = ball("b", 5.0, 5.0).with_velocity(-1.0, 0.0);
        let contact = det.resolve(&mut a, &mut b);
        assert_eq!(contact.normal, Vec2::ZERO);
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
        assert_eq!(a.velocity.x, 1.0);
        assert!(a.collide && b.collide);
    }

    #[test]
    fn test_landing_on_solid_static() {
        let det = detector();
        let mut floor = Entity::new("floor")
            .with_physic_type(PhysicType::Static)
            .with_position(0.0, 584.0)
            .with_size(960.0, 16.0);
        let mut faller = ball("faller", 480.0, 572.0)
            .with_velocity(0.0, 4.0)
            .with_material(Arc::new(Material::new("clay", 1.0, 0.0, 0.5)));
        faller.acceleration = Vec2::new(0.0, 0.32);

        let contact = det.resolve(&mut faller, &mut floor);
        assert_eq!(contact.kind, ContactKind::DynamicStatic);
        assert_eq!(faller.position.y, 568.0);
        assert_eq!(faller.velocity.y.abs(), 0.0);
        assert_eq!(faller.acceleration.y.abs(), 0.0);
        assert_eq!(faller.collision_box.max.y, 584.0);
        assert_eq!(faller.colliders, vec![floor.id]);
    }

    #[test]
    fn test_landing_rests_on_collision_boxes() {
        let det = detector();
        let mut floor = Entity::new("floor")
            .with_physic_type(PhysicType::Static)
            .with_position(0.0, 100.0)
            .with_size(200.0, 20.0)
            .with_collision_offset(OffsetBox::inset(2.0));
        let mut faller = ball("faller", 50.0, 90.0)
            .with_collision_offset(OffsetBox::inset(1.0))
            .with_velocity(0.0, 2.0);
        assert!(faller.collision_box.overlaps(&floor.collision_box));

        det.resolve(&mut faller, &mut floor);
        // Floor box top is 102, faller box bottom sits 15 below its position
        assert_eq!(faller.position.y, 87.0);
        assert_eq!(faller.collision_box.max.y, floor.collision_box.min.y);

        let mut ceiling = Entity::new("ceiling")
            .with_physic_type(PhysicType::Static)
            .with_position(0.0, 0.0)
            .with_size(200.0, 20.0)
            .with_collision_offset(OffsetBox::inset(2.0));
        let mut jumper = ball("jumper", 50.0, 10.0)
            .with_collision_offset(OffsetBox::inset(1.0))
            .with_velocity(0.0, -2.0);
        det.resolve(&mut jumper, &mut ceiling);
        assert_eq!(jumper.position.y, 17.0);
        assert_eq!(jumper.collision_box.min.y, ceiling.collision_box.max.y);
    }

    #[test]
    fn test_bounce_off_static_scaled_by_elasticity() {
        let det = detector();
        let mut floor = Entity::new("floor")
            .with_physic_type(PhysicType::Static)
            .with_position(0.0, 100.0)
            .with_size(200.0, 10.0);
        let mut rubber = ball("rubber", 50.0, 90.0)
            .with_velocity(0.0, 2.0)
            .with_material(Arc::new(Material::new("rubber", 1.0, 0.5, 0.5)));
        det.resolve(&mut rubber, &mut floor);
        assert_eq!(rubber.position.y, 84.0);
        assert!((rubber.velocity.y - -1.0).abs() < EPSILON);
    }

    #[test]
    fn test_hitting_static_underside() {
        let det = detector();
        let mut ceiling = Entity::new("ceiling")
            .with_physic_type(PhysicType::Static)
            .with_position(0.0, 0.0)
            .with_size(200.0, 20.0);
        let mut jumper = ball("jumper", 50.0, 15.0).with_velocity(0.0, -2.0);
        det.resolve(&mut jumper, &mut ceiling);
        assert_eq!(jumper.position.y, 20.0);
        assert!(jumper.velocity.y > 0.0);
    }

    #[test]
    fn test_static_without_elasticity_is_a_trigger() {
        let det = detector();
        let mut sensor = Entity::new("sensor")
            .with_physic_type(PhysicType::Static)
            .with_position(0.0, 0.0)
            .with_size(50.0, 50.0)
            .with_material(Arc::new(Material::new("ghost", 1.0, 0.0, 0.0)));
        let mut walker = ball("walker", 10.0, 10.0).with_velocity(0.0, 2.0);
        let contact = det.resolve(&mut walker, &mut sensor);
        assert_eq!(contact.kind, ContactKind::DynamicTrigger);
        assert_eq!(walker.position, Vec2::new(10.0, 10.0));
        assert_eq!(walker.velocity, Vec2::new(0.0, 2.0));
        assert_eq!(walker.colliders, vec![sensor.id]);
    }

    #[test]
    fn test_none_type_only_records_collider() {
        let det = detector();
        let mut zone = Entity::new("zone").with_physic_type(PhysicType::None).with_size(50.0, 50.0);
        let mut walker = ball("walker", 10.0, 10.0).with_velocity(1.0, 1.0);
        let contact = det.resolve(&mut walker, &mut zone);
        assert_eq!(contact.kind, ContactKind::DynamicNone);
        assert_eq!(walker.velocity, Vec2::new(1.0, 1.0));
        assert!(zone.collide);
        assert!(zone.colliders.is_empty());

        let contact = det.resolve(&mut zone, &mut walker);
        assert_eq!(contact.kind, ContactKind::Passive);
    }

    #[test]
    fn test_dead_entities_are_sources_but_not_targets() {
        let mut store = EntityStore::new();
        let corpse = store.insert(ball("corpse", 0.0, 0.0).with_duration(0));
        let live = store.insert(ball("live", 4.0, 4.0).with_duration(1000));
        let mut det = detector();
        det.detect(&mut store, &mut Commands::new());

        assert_eq!(det.contacts().len(), 1);
        assert_eq!(det.contacts()[0].first, corpse);
        assert_eq!(det.contacts()[0].second, live);
    }

    struct Recorder {
        label: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Behavior for Recorder {
        fn on_collision(&self, entity: &mut Entity, other: &mut Entity, _commands: &mut Commands) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}>{}", self.label, entity.name, other.name));
        }
    }

    #[test]
    fn test_collision_behaviors_dispatched_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::new(Recorder { label: "first", log: log.clone() });
        let second = Arc::new(Recorder { label: "second", log: log.clone() });
        let mut store = EntityStore::new();
        store.insert(
            ball("hero", 0.0, 0.0)
                .with_behavior(EventKind::OnCollision, first)
                .with_behavior(EventKind::OnCollision, second),
        );
        store.insert(ball("coin", 8.0, 0.0).with_physic_type(PhysicType::None));
        let mut det = detector();
        det.detect(&mut store, &mut Commands::new());

        assert_eq!(*log.lock().unwrap(), vec!["first:hero>coin", "second:hero>coin"]);
    }
}
