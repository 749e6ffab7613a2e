//! Базовые компоненты агентов: Actor, AgentPosition, Disabled

use bevy::prelude::*;

/// Агент симуляции (NPC, игрок)
///
/// Автоматически добавляет AgentPosition и MovementCommand через Required Components.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(AgentPosition, crate::components::MovementCommand)]
pub struct Actor;

/// ECS-копия world position агента
///
/// Host engine authoritative для настоящего transform; сюда позиция попадает
/// через TransformEvent::PositionChanged (event-driven sync вместо polling).
/// AI decisions (distance checks) читают только этот компонент.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AgentPosition {
    pub position: Vec3,
}

impl AgentPosition {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Euclidean distance в 3-space до точки
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }
}

/// Компонент-маркер: агент выключен (host lifecycle)
///
/// Выключенный агент молча игнорирует все команды, queries и per-tick
/// поведение. Состояние (AssaultState, Gun) сохраняется и продолжает
/// действовать после снятия маркера.
#[derive(Component, Debug)]
pub struct Disabled;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_position_distance() {
        let pos = AgentPosition::new(Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(pos.distance_to(Vec3::new(0.0, 0.0, 20.0)), 20.0);
        assert_eq!(pos.distance_to(Vec3::new(3.0, 0.0, 4.0)), 5.0);
    }

    #[test]
    fn test_agent_position_default_is_origin() {
        let pos = AgentPosition::default();
        assert_eq!(pos.position, Vec3::ZERO);
    }
}
