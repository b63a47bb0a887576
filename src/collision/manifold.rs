use crate::math::vec2::Vec2;
use crate::objects::store::EntityId;

/// Which resolution branch handled a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Impulse exchanged between two dynamic entities.
    DynamicDynamic,
    /// Dynamic entity stopped (or bounced) by a solid static entity.
    DynamicStatic,
    /// Dynamic entity touching a static entity that has no elasticity.
    DynamicTrigger,
    /// Dynamic entity inside a non-colliding entity, such as a zone.
    DynamicNone,
    /// The first entity is not dynamic; only the flags were set.
    Passive,
}

/// Stores information about one overlap resolved during a detection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub first: EntityId,
    pub second: EntityId,
    /// Unit vector from the first entity's position toward the second's.
    /// Zero when both positions coincide.
    pub normal: Vec2,
    pub kind: ContactKind,
}
