pub mod integrator;

pub use integrator::{constrain_to_world, integrate, Environment};
