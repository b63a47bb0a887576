pub mod camera;
pub mod entity;
pub mod influencer;
pub mod store;

pub use camera::Camera;
pub use entity::{Entity, EntityKind, PhysicType, PERSISTENT};
pub use influencer::{active_zone, InfluenceZone, Influencer, InfluencerBehavior};
pub use store::{EntityId, EntityStore};
