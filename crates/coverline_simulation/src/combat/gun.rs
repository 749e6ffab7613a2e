//! Gun component (magazine / loaded / inventory)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Состояние боезапаса одного оружия
///
/// Инварианты: 0 ≤ loaded_bullets ≤ magazine_size; bullet_inventory ≥ 0.
/// Firing (consume) уменьшает loaded_bullets только при loaded_bullets > 0 —
/// это контракт вызывающего, здесь не проверяется.
#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct Gun {
    /// Ёмкость магазина
    pub magazine_size: u32,

    /// Заряжено сейчас
    pub loaded_bullets: u32,

    /// Запас патронов, не считая заряженных
    pub bullet_inventory: u32,
}

impl Default for Gun {
    fn default() -> Self {
        Self::pistol()
    }
}

impl Gun {
    /// Спавн с полным магазином
    pub fn new(magazine_size: u32, bullet_inventory: u32) -> Self {
        Self {
            magazine_size,
            loaded_bullets: magazine_size,
            bullet_inventory,
        }
    }

    pub fn pistol() -> Self {
        Self::new(10, 120)
    }

    pub fn rifle() -> Self {
        Self::new(30, 240)
    }

    /// Можно ли дослать ещё патронов
    pub fn can_load(&self) -> bool {
        self.bullet_inventory > 0 && !self.is_fully_loaded()
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.loaded_bullets >= self.magazine_size
    }

    /// Заполненность магазина для ammo UI
    pub fn load_percentage(&self) -> f32 {
        self.loaded_bullets as f32 / self.magazine_size as f32
    }

    /// Дослать один патрон из inventory. Возвращает true если патрон дослан.
    pub fn load_bullet(&mut self) -> bool {
        if self.bullet_inventory > 0 && self.loaded_bullets < self.magazine_size {
            self.loaded_bullets += 1;
            self.bullet_inventory -= 1;
            true
        } else {
            false
        }
    }

    /// Bulk-перезарядка: сбросить магазин и одним шагом перенести
    /// min(inventory, magazine_size) из inventory.
    ///
    /// Уже заряженные патроны пропадают (reload-from-empty, не top-up).
    /// Возвращает true если перезарядка произошла.
    pub fn load_magazine(&mut self) -> bool {
        if self.bullet_inventory > 0 && self.loaded_bullets < self.magazine_size {
            self.loaded_bullets = 0;

            let addition = self.bullet_inventory.min(self.magazine_size);
            self.bullet_inventory -= addition;
            self.loaded_bullets += addition;

            true
        } else {
            false
        }
    }

    /// Списать один патрон (выстрел). Контракт вызывающего: loaded_bullets > 0.
    pub fn consume(&mut self) {
        self.loaded_bullets -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gun_presets() {
        let pistol = Gun::pistol();
        assert_eq!(pistol.magazine_size, 10);
        assert_eq!(pistol.loaded_bullets, 10);
        assert!(pistol.is_fully_loaded());

        let rifle = Gun::rifle();
        assert_eq!(rifle.magazine_size, 30);
        assert_eq!(rifle.bullet_inventory, 240);
    }

    #[test]
    fn test_can_load() {
        let mut gun = Gun::new(10, 5);
        assert!(!gun.can_load()); // Полный магазин

        gun.consume();
        assert!(gun.can_load());

        gun.bullet_inventory = 0;
        assert!(!gun.can_load()); // Пустой inventory
    }

    #[test]
    fn test_load_bullet() {
        let mut gun = Gun {
            magazine_size: 10,
            loaded_bullets: 8,
            bullet_inventory: 5,
        };

        assert!(gun.load_bullet());
        assert_eq!(gun.loaded_bullets, 9);
        assert_eq!(gun.bullet_inventory, 4);

        assert!(gun.load_bullet());
        assert!(gun.is_fully_loaded());

        // Магазин полон — отказ, inventory не тронут
        assert!(!gun.load_bullet());
        assert_eq!(gun.loaded_bullets, 10);
        assert_eq!(gun.bullet_inventory, 3);
    }

    #[test]
    fn test_load_magazine_resets_before_fill() {
        // reserve=5, capacity=10, loaded=3 → loaded=5, reserve=0 (не 8)
        let mut gun = Gun {
            magazine_size: 10,
            loaded_bullets: 3,
            bullet_inventory: 5,
        };

        assert!(gun.load_magazine());
        assert_eq!(gun.loaded_bullets, 5);
        assert_eq!(gun.bullet_inventory, 0);
        assert!(!gun.is_fully_loaded());
    }

    #[test]
    fn test_load_magazine_caps_at_magazine_size() {
        let mut gun = Gun {
            magazine_size: 10,
            loaded_bullets: 0,
            bullet_inventory: 50,
        };

        assert!(gun.load_magazine());
        assert_eq!(gun.loaded_bullets, 10);
        assert_eq!(gun.bullet_inventory, 40);
    }

    #[test]
    fn test_load_magazine_refused() {
        let mut full = Gun::new(10, 100);
        assert!(!full.load_magazine()); // Уже полный

        let mut empty_inventory = Gun {
            magazine_size: 10,
            loaded_bullets: 2,
            bullet_inventory: 0,
        };
        assert!(!empty_inventory.load_magazine());
        assert_eq!(empty_inventory.loaded_bullets, 2); // Не сброшен
    }

    #[test]
    fn test_consume() {
        let mut gun = Gun::new(10, 0);
        gun.consume();
        gun.consume();
        assert_eq!(gun.loaded_bullets, 8);
    }

    #[test]
    fn test_load_percentage() {
        let mut gun = Gun::new(10, 0);
        assert_eq!(gun.load_percentage(), 1.0);

        gun.consume();
        gun.consume();
        gun.consume();
        gun.consume();
        gun.consume();
        assert_eq!(gun.load_percentage(), 0.5);
    }
}
