//! AI assault module — преследование threat position
//!
//! Агент бежит к последней известной позиции цели, останавливается на
//! stop_distance и с шансом take_cover_chance уходит в cover-seeking.
//! Все команды/уведомления — typed events (см. events.rs).

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::{AssaultConfig, AssaultState, KeepCloseTo};
pub use events::{
    AssaultCheck, AssaultCommand, AssaultEvent, AssaultViable, SeekCover, ThreatEvent,
    TransformEvent,
};
pub use systems::*;

/// AI Plugin
///
/// Регистрирует assault системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. sync_agent_positions — позиции от host locomotion
/// 2. process_assault_commands — Start/Stop/KeepCloseTo от brain'а
/// 3. process_threat_events — threat updates + unreachable
/// 4. assault_stop_distance_check — per-tick автостоп по дистанции
/// 5. answer_assault_checks — ответы на viability queries
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<AssaultCommand>()
            .add_event::<ThreatEvent>()
            .add_event::<AssaultCheck>()
            .add_event::<TransformEvent>()
            .add_event::<AssaultEvent>()
            .add_event::<SeekCover>()
            .add_event::<AssaultViable>();

        app.add_systems(
            FixedUpdate,
            (
                systems::sync_agent_positions,
                systems::process_assault_commands,
                systems::process_threat_events,
                systems::assault_stop_distance_check,
                systems::answer_assault_checks,
            )
                .chain(), // Последовательное выполнение для детерминизма
        );
    }
}
