//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: базовые компоненты агентов (Actor, AgentPosition, Disabled)
//! - movement: команды перемещения для host navigation (MovementCommand)

pub mod actor;
pub mod movement;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
