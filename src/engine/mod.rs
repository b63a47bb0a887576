pub mod physic_engine;

pub use physic_engine::PhysicEngine;
