//! Movement компоненты: команды перемещения для host navigation

use bevy::prelude::*;

/// Команда движения для агента (выполняется host NavigationAgent)
///
/// Архитектура:
/// - ECS система пишет MovementCommand (high-level intent)
/// - Host locomotion layer читает и конвертирует в NavigationAgent target
/// - Фактическое перемещение возвращается через TransformEvent::PositionChanged
#[derive(Component, Debug, Clone, PartialEq)]
pub enum MovementCommand {
    /// Стоять на месте (не обновлять NavigationAgent target)
    Idle,
    /// Бежать к позиции (world coordinates)
    RunTo { target: Vec3 },
    /// Остановиться немедленно (сбросить velocity)
    Stop,
}

impl Default for MovementCommand {
    fn default() -> Self {
        Self::Idle
    }
}
