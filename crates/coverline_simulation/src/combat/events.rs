//! Gun events — typed замена broadcast-messaging

use bevy::prelude::*;

/// Команды для оружия (от reload-анимаций и fire path host'а)
#[derive(Event, Debug, Clone)]
pub enum GunCommand {
    /// Дослать один патрон из inventory в магазин
    LoadBullet { entity: Entity },

    /// Bulk-перезарядка: магазин сбрасывается и заполняется из inventory
    LoadMagazine { entity: Entity },

    /// Выстрел: списать один патрон.
    /// Контракт вызывающего: loaded_bullets > 0.
    Consume { entity: Entity },
}

/// Нотификации оружия (для ammo UI и анимаций)
#[derive(Event, Debug, Clone)]
pub enum GunEvent {
    /// Патрон дослан в магазин
    BulletLoaded { entity: Entity },

    /// Перезарядка завершена (см. семантику в systems::process_gun_commands)
    FullyLoaded { entity: Entity },
}
