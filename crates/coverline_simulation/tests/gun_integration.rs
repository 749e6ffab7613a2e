//! Gun integration tests
//!
//! Проверяем event-семантику загрузки:
//! - BulletLoaded на каждый досланный патрон
//! - FullyLoaded ровно один раз, на переходе к полному магазину
//! - FullyLoaded при каждой состоявшейся bulk-перезарядке
//! - Disabled оружие игнорирует команды

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use coverline_simulation::*;

#[derive(Resource, Default)]
struct Captured {
    bullet_loaded: Vec<Entity>,
    fully_loaded: Vec<Entity>,
}

fn capture_events(mut captured: ResMut<Captured>, mut gun_events: EventReader<GunEvent>) {
    for event in gun_events.read() {
        match event {
            GunEvent::BulletLoaded { entity } => captured.bullet_loaded.push(*entity),
            GunEvent::FullyLoaded { entity } => captured.fully_loaded.push(*entity),
        }
    }
}

fn create_sim_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        1.0 / 60.0,
    )));
    app.init_resource::<Captured>();
    app.add_systems(
        FixedUpdate,
        capture_events.after(combat::process_gun_commands),
    );
    app.update(); // Первый update — инициализация Time

    app
}

fn gun(app: &App, entity: Entity) -> Gun {
    app.world().get::<Gun>(entity).unwrap().clone()
}

fn captured(app: &App) -> &Captured {
    app.world().resource::<Captured>()
}

// --- Tests ---

#[test]
fn test_load_bullet_events() {
    let mut app = create_sim_app(42);
    let weapon = app
        .world_mut()
        .spawn(Gun {
            magazine_size: 10,
            loaded_bullets: 8,
            bullet_inventory: 5,
        })
        .id();

    // Три команды в одном кадре: две дослают, третья — отказ (магазин полон)
    for _ in 0..3 {
        app.world_mut()
            .send_event(GunCommand::LoadBullet { entity: weapon });
    }
    app.update();

    let gun = gun(&app, weapon);
    assert_eq!(gun.loaded_bullets, 10);
    assert_eq!(gun.bullet_inventory, 3);
    assert_eq!(captured(&app).bullet_loaded.len(), 2);
    assert_eq!(captured(&app).fully_loaded.len(), 1);
}

#[test]
fn test_fully_loaded_only_on_transition() {
    let mut app = create_sim_app(42);
    let weapon = app
        .world_mut()
        .spawn(Gun {
            magazine_size: 3,
            loaded_bullets: 0,
            bullet_inventory: 10,
        })
        .id();

    for _ in 0..5 {
        app.world_mut()
            .send_event(GunCommand::LoadBullet { entity: weapon });
        app.update();
    }

    assert_eq!(gun(&app, weapon).loaded_bullets, 3);
    assert_eq!(captured(&app).bullet_loaded.len(), 3);
    assert_eq!(captured(&app).fully_loaded.len(), 1); // Только на третьем досылании
}

#[test]
fn test_load_magazine_resets_before_fill() {
    let mut app = create_sim_app(42);
    let weapon = app
        .world_mut()
        .spawn(Gun {
            magazine_size: 10,
            loaded_bullets: 3,
            bullet_inventory: 5,
        })
        .id();

    app.world_mut()
        .send_event(GunCommand::LoadMagazine { entity: weapon });
    app.update();

    let gun = gun(&app, weapon);
    assert_eq!(gun.loaded_bullets, 5); // Не 8: магазин сброшен перед заполнением
    assert_eq!(gun.bullet_inventory, 0);

    // Перезарядка состоялась → FullyLoaded, даже если магазин не полон
    assert_eq!(captured(&app).fully_loaded.len(), 1);
    assert!(captured(&app).bullet_loaded.is_empty());
}

#[test]
fn test_load_magazine_refused_emits_nothing() {
    let mut app = create_sim_app(42);
    let weapon = app.world_mut().spawn(Gun::pistol()).id(); // Полный магазин

    app.world_mut()
        .send_event(GunCommand::LoadMagazine { entity: weapon });
    app.update();

    assert_eq!(gun(&app, weapon).loaded_bullets, 10);
    assert!(captured(&app).fully_loaded.is_empty());
}

#[test]
fn test_consume_command() {
    let mut app = create_sim_app(42);
    let weapon = app.world_mut().spawn(Gun::pistol()).id();

    app.world_mut()
        .send_event(GunCommand::Consume { entity: weapon });
    app.world_mut()
        .send_event(GunCommand::Consume { entity: weapon });
    app.update();

    assert_eq!(gun(&app, weapon).loaded_bullets, 8);
    assert!(captured(&app).bullet_loaded.is_empty());
    assert!(captured(&app).fully_loaded.is_empty());
}

#[test]
fn test_disabled_gun_ignores_commands() {
    let mut app = create_sim_app(42);
    let weapon = app
        .world_mut()
        .spawn((
            Gun {
                magazine_size: 10,
                loaded_bullets: 2,
                bullet_inventory: 50,
            },
            Disabled,
        ))
        .id();

    app.world_mut()
        .send_event(GunCommand::LoadBullet { entity: weapon });
    app.world_mut()
        .send_event(GunCommand::LoadMagazine { entity: weapon });
    app.update();

    let gun = gun(&app, weapon);
    assert_eq!(gun.loaded_bullets, 2);
    assert_eq!(gun.bullet_inventory, 50);
    assert!(captured(&app).bullet_loaded.is_empty());
    assert!(captured(&app).fully_loaded.is_empty());
}
