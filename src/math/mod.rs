pub mod vec2;

pub use vec2::{clamp_band, Vec2};
