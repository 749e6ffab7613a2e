//! COVERLINE Simulation Core
//!
//! ECS-симуляция third-person cover-shooter'а на Bevy 0.16 (strategic layer).
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (AI assault behavior, gun state, notifications)
//! - Host engine = tactical layer (physics, rendering, navigation, animation)
//!
//! Общение слоёв — только typed events (ai::events, combat::events) и
//! intent-компоненты (MovementCommand): никаких sibling lookups и
//! broadcast-messaging по строковым именам.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod logger;

// Re-export базовых типов для удобства
pub use ai::{
    AIPlugin, AssaultCheck, AssaultCommand, AssaultConfig, AssaultEvent, AssaultState,
    AssaultViable, KeepCloseTo, SeekCover, ThreatEvent, TransformEvent,
};
pub use combat::{CombatPlugin, Gun, GunCommand, GunEvent};
pub use components::*;

/// Seed по умолчанию (host обычно задаёт свой через create_headless_app/insert_resource)
pub const DEFAULT_SEED: u64 = 42;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
        app.insert_resource(Time::<Fixed>::from_hz(60.0));

        // Детерминистичный RNG — не перетираем seed, если host уже вставил свой
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(DEFAULT_SEED));
        }

        // Подсистемы (ECS strategic layer)
        app.add_plugins((AIPlugin, CombatPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Единственный источник случайности для simulation систем (take-cover rolls).
/// Заменяет ambient RNG движка ради воспроизводимых прогонов.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Собирает компоненты типа T в порядке Entity ID и сериализует через Debug.
/// Упрощённый формат: достаточно для "одинаковый seed → одинаковый мир".
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
