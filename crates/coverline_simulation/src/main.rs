//! Headless симуляция COVERLINE
//!
//! Прогоняет scripted assault сценарий без host engine: locomotion
//! эмулируется здесь же — агент шагает к RunTo target с постоянной скоростью,
//! позиция возвращается в ECS через TransformEvent (как это делал бы host).

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use coverline_simulation::{
    create_headless_app, Actor, AgentPosition, AssaultCommand, AssaultConfig, AssaultState, Gun,
    GunCommand, MovementCommand, SimulationPlugin, TransformEvent,
};

const TICK_SECONDS: f64 = 1.0 / 60.0;
const RUN_SPEED: f32 = 4.0; // м/с

fn main() {
    let seed = 42;
    println!("Starting COVERLINE headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    // Ручное время: ровно один FixedUpdate на app.update()
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        TICK_SECONDS,
    )));
    app.update(); // Первый update — инициализация Time

    let agent = app
        .world_mut()
        .spawn((
            Actor,
            AssaultState::default(),
            AssaultConfig::default(),
            Gun::pistol(),
        ))
        .id();

    app.world_mut().send_event(AssaultCommand::Start {
        entity: agent,
        position: Vec3::new(0.0, 0.0, 40.0),
    });

    for tick in 0..1000 {
        app.update();

        let world = app.world_mut();
        let position = world.get::<AgentPosition>(agent).unwrap().position;
        let command = world.get::<MovementCommand>(agent).unwrap().clone();

        match command {
            MovementCommand::RunTo { target } => {
                // Host locomotion mock: шаг к цели с постоянной скоростью
                let step = (target - position).clamp_length_max(RUN_SPEED * TICK_SECONDS as f32);
                world.send_event(TransformEvent::PositionChanged {
                    entity: agent,
                    position: position + step,
                });
            }
            MovementCommand::Stop => {
                println!("Tick {}: assault finished at {:?}", tick, position);
                break;
            }
            MovementCommand::Idle => {}
        }
    }

    // Добежали — отстреливаем полмагазина и перезаряжаемся
    for _ in 0..5 {
        app.world_mut()
            .send_event(GunCommand::Consume { entity: agent });
    }
    app.world_mut()
        .send_event(GunCommand::LoadMagazine { entity: agent });
    app.update();

    let gun = app.world().get::<Gun>(agent).unwrap();
    println!(
        "Gun after reload: {}/{} loaded, {} in inventory",
        gun.loaded_bullets, gun.magazine_size, gun.bullet_inventory
    );

    println!("Simulation complete!");
}
