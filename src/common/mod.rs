pub mod attribute;
pub mod material;

pub use attribute::{AttributeValue, Attributes, ENERGY};
pub use material::Material;
