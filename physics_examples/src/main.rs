use log::{info, warn};
use scene_physics::*;
use std::env;
use std::sync::Arc;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let example = if args.len() > 1 { &args[1] } else { "landing" };
    let config = match args.get(2) {
        Some(path) => match PhysicConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration {}: {}", path, e);
                return;
            }
        },
        None => PhysicConfig::default(),
    };

    info!("Running example: {}", example);

    let result = match example {
        "landing" => run_landing_example(config),
        "influencer" => run_influencer_example(config),
        "bounce" => run_bounce_example(config),
        "fountain" => run_fountain_example(config),
        _ => {
            println!(
                "Unknown example: {}. Available examples: landing, influencer, bounce, fountain",
                example
            );
            return;
        }
    };

    if let Err(e) = result {
        eprintln!("Error running example {}: {}", example, e);
    }
}

fn floor(width: f64, height: f64) -> Entity {
    Entity::new("floor")
        .with_physic_type(PhysicType::Static)
        .with_position(0.0, height - 16.0)
        .with_size(width, 16.0)
}

fn run_landing_example(config: PhysicConfig) -> Result<(), ConfigError> {
    let mut sim = Simulation::new(config)?;
    let (width, height) = (sim.world().area.width(), sim.world().area.height());
    sim.add_entity(floor(width, height));
    let crate_id = sim.add_entity(
        Entity::new("crate")
            .with_mass(40.0)
            .with_position(width / 2.0, height / 2.0)
            .with_size(16.0, 16.0)
            .with_material(Arc::new(Material::new("clay", 1.0, 0.0, 0.5))),
    );

    for frame in 0..300 {
        sim.update(16.0);
        if frame % 30 == 0 {
            if let Some(body) = sim.entity(crate_id) {
                info!(
                    "Frame {}: crate at ({:.2}, {:.2}), velocity {:.3}",
                    frame, body.position.x, body.position.y, body.velocity.y
                );
            }
        }
    }
    info!("Landing simulation finished.");
    Ok(())
}

fn run_influencer_example(config: PhysicConfig) -> Result<(), ConfigError> {
    let mut sim = Simulation::new(config)?;
    sim.world_mut().gravity = Vec2::ZERO;
    let (width, height) = (sim.world().area.width(), sim.world().area.height());

    // A current flowing right across the lower half
    sim.add_entity(
        Entity::influencer("current", Vec2::new(1.0, 0.0), None)
            .with_position(0.0, height / 2.0)
            .with_size(width, height / 2.0)
            .with_material(Arc::new(Material::new("water", 1.0, 0.0, 0.3))),
    );
    let swimmer = sim.add_entity(
        Entity::new("swimmer")
            .with_position(20.0, height * 0.75)
            .with_size(16.0, 16.0),
    );
    let drifter = sim.add_entity(
        Entity::new("drifter")
            .with_position(20.0, height * 0.25)
            .with_size(16.0, 16.0),
    );

    for frame in 0..60 {
        sim.update(16.0);
        if frame % 10 == 0 {
            for id in [swimmer, drifter] {
                if let Some(body) = sim.entity(id) {
                    info!("Frame {}: {} x = {:.2}", frame, body.name, body.position.x);
                }
            }
        }
    }
    info!("Influencer simulation finished.");
    Ok(())
}

fn run_bounce_example(config: PhysicConfig) -> Result<(), ConfigError> {
    let mut sim = Simulation::new(config)?;
    let (width, height) = (sim.world().area.width(), sim.world().area.height());
    sim.add_entity(floor(width, height));

    let materials = [Material::rubber(), Material::wood(), Material::steel(), Material::ice()];
    for (i, material) in materials.into_iter().enumerate() {
        sim.add_entity(
            Entity::new(format!("ball_{}", material.name))
                .with_shape(ShapeKind::Ellipse)
                .with_mass(10.0)
                .with_position(100.0 + i as f64 * 200.0, 50.0)
                .with_size(24.0, 24.0)
                .with_velocity(1.5, 0.0)
                .with_material(Arc::new(material)),
        );
    }
    info!("Simulating {} entities", sim.store().len());

    for frame in 0..600 {
        sim.update(16.0);
        if frame % 60 == 0 {
            for id in sim.find_by_name("ball_") {
                if let Some(body) = sim.entity(id) {
                    info!(
                        "Frame {}: {} at ({:.1}, {:.1})",
                        frame, body.name, body.position.x, body.position.y
                    );
                }
            }
            info!("Frame {}: {} contacts", frame, sim.contacts().len());
        }
    }
    info!("Bounce simulation finished.");
    Ok(())
}

/// Queues one short-lived spark per tick under its owner.
struct SparkEmitter;

impl Behavior for SparkEmitter {
    fn update(&self, entity: &mut Entity, _elapsed: f64, commands: &mut Commands) {
        let spark = Entity::new("spark")
            .with_kind(EntityKind::ParticleSystem)
            .with_position(entity.position.x, entity.position.y)
            .with_size(2.0, 2.0)
            .with_velocity(0.5, -3.0)
            .with_mass(0.5)
            .with_duration(800);
        commands.spawn_child(entity.id, spark);
    }
}

fn run_fountain_example(config: PhysicConfig) -> Result<(), ConfigError> {
    let mut sim = Simulation::new(config)?;
    let (width, height) = (sim.world().area.width(), sim.world().area.height());
    sim.add_entity(floor(width, height));
    let fountain = sim.add_entity(
        Entity::new("fountain")
            .with_physic_type(PhysicType::None)
            .with_position(width / 2.0, height - 40.0)
            .with_behavior(EventKind::UpdateEntity, Arc::new(SparkEmitter)),
    );

    for frame in 0..240 {
        sim.update(16.0);
        if frame % 40 == 0 {
            let live = sim.presentable().filter(|e| e.name == "spark").count();
            info!("Frame {}: {} live sparks", frame, live);
        }
    }

    match sim.remove_entity(fountain) {
        Some(removed) => info!("Removed {} with {} children", removed.name, removed.children.len()),
        None => warn!("fountain was already gone"),
    }
    info!("Fountain simulation finished, {} entities left.", sim.store().len());
    Ok(())
}
