//! AI Events — typed замена broadcast-messaging по строковым именам
//!
//! Inbound: brain/planner и host locomotion пишут команды и нотификации.
//! Outbound: assault controller отвечает уведомлениями для brain'а,
//! cover-selection и UI collaborators. Доставка — synchronous, в порядке
//! систем внутри кадра.

use bevy::prelude::*;

/// Команды от brain'а для assault controller'а
#[derive(Event, Debug, Clone)]
pub enum AssaultCommand {
    /// Начать штурм к threat position
    Start { entity: Entity, position: Vec3 },

    /// Прекратить штурм (no-op если агент не штурмует)
    Stop { entity: Entity },

    /// Установить leash: цели движения не дальше max_distance от anchor
    KeepCloseTo {
        entity: Entity,
        anchor: Vec3,
        max_distance: f32,
    },
}

/// Нотификации о threat position (от brain'а / host navigation)
#[derive(Event, Debug, Clone)]
pub enum ThreatEvent {
    /// Новая позиция преследуемой цели
    PositionUpdate { entity: Entity, position: Vec3 },

    /// Host navigation сообщает что позиция недостижима
    PositionUnreachable { entity: Entity, position: Vec3 },
}

/// Enquiry от brain'а: имеет ли смысл штурм к candidate position
///
/// Ответ приходит как AssaultViable; отсутствие ответа = не viable.
#[derive(Event, Debug, Clone)]
pub struct AssaultCheck {
    pub entity: Entity,
    pub position: Vec3,
}

/// Transform события от host engine (PostSpawn коррекция + движение)
///
/// Host authoritative для Transform, ECS хранит копию в AgentPosition.
/// Event-driven sync вместо periodic polling.
#[derive(Event, Debug, Clone)]
pub enum TransformEvent {
    /// PostSpawn: агент заспавнился, host сообщает точную позицию
    /// (после NavMesh placement) для ECS коррекции
    PostSpawn { entity: Entity, position: Vec3 },

    /// Агент двигался и изменил позицию
    PositionChanged { entity: Entity, position: Vec3 },
}

/// Уведомления assault controller'а (0→1 / 1→0 переходы state machine)
#[derive(Event, Debug, Clone)]
pub enum AssaultEvent {
    /// Штурм начался (только на переходе Idle → Assaulting)
    Started { entity: Entity },

    /// Штурм прекращён (команда, автостоп по дистанции или unreachable)
    Stopped { entity: Entity },
}

/// Команда cover-selection collaborator'у: искать укрытие
///
/// Эмитится с вероятностью take_cover_chance при остановке штурма.
#[derive(Event, Debug, Clone)]
pub struct SeekCover {
    pub entity: Entity,
}

/// Ответ на AssaultCheck: штурм к candidate position имеет смысл
#[derive(Event, Debug, Clone)]
pub struct AssaultViable {
    pub entity: Entity,
    pub position: Vec3,
}
