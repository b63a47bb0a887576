pub mod aabb;
pub mod detection;
pub mod manifold;

pub use aabb::AABB;
pub use detection::CollisionDetector;
pub use manifold::{Contact, ContactKind};
