//! Gun systems (load/consume команды → нотификации).

use bevy::prelude::*;

use crate::combat::{Gun, GunCommand, GunEvent};
use crate::components::Disabled;
use crate::logger;

/// Система: обработка GunCommand
///
/// Семантика нотификаций (сохранена из оригинальной модели):
/// - LoadBullet: BulletLoaded на каждый досланный патрон; FullyLoaded ровно
///   один раз — на досылании достигшем ёмкости магазина.
/// - LoadMagazine: FullyLoaded при каждой состоявшейся перезарядке, даже если
///   inventory не хватило заполнить магазин до конца.
/// - Consume: нотификаций нет.
///
/// Disabled оружие отфильтровано query — команды для него no-op.
pub fn process_gun_commands(
    mut command_events: EventReader<GunCommand>,
    mut guns: Query<&mut Gun, Without<Disabled>>,
    mut gun_events: EventWriter<GunEvent>,
) {
    for command in command_events.read() {
        match command {
            GunCommand::LoadBullet { entity } => {
                let Ok(mut gun) = guns.get_mut(*entity) else {
                    continue;
                };

                if gun.load_bullet() {
                    gun_events.write(GunEvent::BulletLoaded { entity: *entity });

                    if gun.is_fully_loaded() {
                        gun_events.write(GunEvent::FullyLoaded { entity: *entity });
                        logger::log(&format!(
                            "{:?} fully loaded ({} rounds)",
                            entity, gun.loaded_bullets
                        ));
                    }
                }
            }

            GunCommand::LoadMagazine { entity } => {
                let Ok(mut gun) = guns.get_mut(*entity) else {
                    continue;
                };

                if gun.load_magazine() {
                    gun_events.write(GunEvent::FullyLoaded { entity: *entity });
                    logger::log(&format!(
                        "{:?} magazine reloaded ({}/{}, inventory {})",
                        entity, gun.loaded_bullets, gun.magazine_size, gun.bullet_inventory
                    ));
                }
            }

            GunCommand::Consume { entity } => {
                let Ok(mut gun) = guns.get_mut(*entity) else {
                    continue;
                };

                gun.consume();
            }
        }
    }
}
