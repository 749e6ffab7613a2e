//! Assault components (state machine, config, leash).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Assault state machine (event-driven)
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub enum AssaultState {
    /// Idle — агент не преследует цель
    Idle,

    /// Assaulting — бежим к последней известной threat position
    Assaulting {
        /// Обновляется Start командой и ThreatEvent::PositionUpdate
        threat_position: Vec3,
    },
}

impl Default for AssaultState {
    fn default() -> Self {
        Self::Idle
    }
}

impl AssaultState {
    pub fn is_assaulting(&self) -> bool {
        matches!(self, AssaultState::Assaulting { .. })
    }
}

/// Параметры assault controller'а
#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct AssaultConfig {
    /// Дистанция на которой штурм останавливается (метры).
    /// Равенство останавливает: продолжение требует строго больше.
    pub stop_distance: f32,

    /// Шанс уйти в cover-seeking после остановки штурма [0, 1]
    pub take_cover_chance: f32,
}

impl Default for AssaultConfig {
    fn default() -> Self {
        Self {
            stop_distance: 8.0,
            take_cover_chance: 0.5,
        }
    }
}

impl AssaultConfig {
    /// take_cover_chance клампится в [0, 1]
    pub fn new(stop_distance: f32, take_cover_chance: f32) -> Self {
        Self {
            stop_distance,
            take_cover_chance: take_cover_chance.clamp(0.0, 1.0),
        }
    }
}

/// Leash: цели движения не дальше max_distance от anchor
///
/// Пока компонент присутствует, каждый RunTo target который пишет assault
/// controller проходит через clamp_target. Ставится командой
/// AssaultCommand::KeepCloseTo, снимает host/brain.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct KeepCloseTo {
    pub anchor: Vec3,
    pub max_distance: f32,
}

impl Default for KeepCloseTo {
    fn default() -> Self {
        // Unbounded leash — clamp_target no-op
        Self {
            anchor: Vec3::ZERO,
            max_distance: f32::INFINITY,
        }
    }
}

impl KeepCloseTo {
    /// Ближайшая к target точка внутри радиуса, на луче anchor → target
    pub fn clamp_target(&self, target: Vec3) -> Vec3 {
        if target.distance(self.anchor) > self.max_distance {
            self.anchor + (target - self.anchor).normalize_or_zero() * self.max_distance
        } else {
            target
        }
    }
}
