//! Combat module — ammunition model
//!
//! ECS ответственность:
//! - Gun state: magazine / loaded / inventory, инварианты загрузки
//! - Events: GunCommand (inbound), GunEvent (outbound нотификации для UI/анимаций)
//!
//! Host ответственность:
//! - Анимации перезарядки (по одному патрону или магазином), muzzle VFX
//! - Тайминг выстрела; host шлёт GunCommand::Consume на каждый выстрел

use bevy::prelude::*;

pub mod events;
pub mod gun;
pub mod systems;

// Re-export основных типов
pub use events::{GunCommand, GunEvent};
pub use gun::Gun;
pub use systems::process_gun_commands;

/// Combat Plugin
///
/// Регистрирует gun системы в FixedUpdate.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<GunCommand>().add_event::<GunEvent>();

        // Регистрация систем в FixedUpdate
        app.add_systems(FixedUpdate, systems::process_gun_commands);
    }
}
