//! Assault systems (commands, threat tracking, per-tick distance check).

use bevy::prelude::*;
use rand::Rng;

use crate::ai::{
    AssaultCheck, AssaultCommand, AssaultConfig, AssaultEvent, AssaultState, AssaultViable,
    KeepCloseTo, SeekCover, ThreatEvent, TransformEvent,
};
use crate::components::{AgentPosition, Disabled, MovementCommand};
use crate::{logger, DeterministicRng};

/// Минимальное смещение threat position, после которого перестраиваем путь (метры)
const REPATH_DISTANCE: f32 = 0.5;

/// Система: обновление AgentPosition из TransformEvent
///
/// Host locomotion двигает агента и сообщает новую позицию. Sync работает
/// и для Disabled агентов: тело двигал host, ECS обязан знать где оно.
pub fn sync_agent_positions(
    mut transform_events: EventReader<TransformEvent>,
    mut agents: Query<&mut AgentPosition>,
) {
    for event in transform_events.read() {
        let (entity, position) = match event {
            TransformEvent::PostSpawn { entity, position } => (entity, position),
            TransformEvent::PositionChanged { entity, position } => (entity, position),
        };

        if let Ok(mut agent_position) = agents.get_mut(*entity) {
            agent_position.position = *position;
        }
    }
}

/// Система: обработка AssaultCommand (Start/Stop/KeepCloseTo)
///
/// Disabled агенты отфильтрованы query — команды для них no-op.
pub fn process_assault_commands(
    mut commands: Commands,
    mut command_events: EventReader<AssaultCommand>,
    mut agents: Query<
        (
            &AgentPosition,
            &AssaultConfig,
            &mut AssaultState,
            &mut MovementCommand,
            Option<&KeepCloseTo>,
        ),
        Without<Disabled>,
    >,
    mut assault_events: EventWriter<AssaultEvent>,
    mut cover_events: EventWriter<SeekCover>,
    mut rng: ResMut<DeterministicRng>,
) {
    for command in command_events.read() {
        match command {
            AssaultCommand::Start { entity, position } => {
                let Ok((agent_position, config, mut state, mut movement, leash)) =
                    agents.get_mut(*entity)
                else {
                    continue;
                };

                let was_assaulting = state.is_assaulting();

                if agent_position.distance_to(*position) > config.stop_distance {
                    *state = AssaultState::Assaulting {
                        threat_position: *position,
                    };
                    run_to(*position, leash, &mut movement);

                    if !was_assaulting {
                        assault_events.write(AssaultEvent::Started { entity: *entity });
                        logger::log(&format!("⚔️ {:?} Idle → Assaulting at {:?}", entity, position));
                    }
                } else if let AssaultState::Assaulting { threat_position } = &mut *state {
                    // Цель уже ближе stop_distance: штурм не (пере)запускаем, но
                    // threat position запоминаем — автостоп на следующем тике
                    // сработает уже по новой точке
                    *threat_position = *position;
                }
            }

            AssaultCommand::Stop { entity } => {
                let Ok((_, config, mut state, mut movement, _)) = agents.get_mut(*entity) else {
                    continue;
                };

                stop_assault(
                    *entity,
                    &mut state,
                    &mut movement,
                    config,
                    &mut rng,
                    &mut assault_events,
                    &mut cover_events,
                );
            }

            AssaultCommand::KeepCloseTo {
                entity,
                anchor,
                max_distance,
            } => {
                if agents.get(*entity).is_ok() {
                    commands.entity(*entity).insert(KeepCloseTo {
                        anchor: *anchor,
                        max_distance: *max_distance,
                    });
                }
            }
        }
    }
}

/// Система: обработка ThreatEvent (position update / unreachable)
pub fn process_threat_events(
    mut threat_events: EventReader<ThreatEvent>,
    mut agents: Query<
        (
            &AssaultConfig,
            &mut AssaultState,
            &mut MovementCommand,
            Option<&KeepCloseTo>,
        ),
        Without<Disabled>,
    >,
    mut assault_events: EventWriter<AssaultEvent>,
    mut cover_events: EventWriter<SeekCover>,
    mut rng: ResMut<DeterministicRng>,
) {
    for event in threat_events.read() {
        match event {
            ThreatEvent::PositionUpdate { entity, position } => {
                let Ok((_, mut state, mut movement, leash)) = agents.get_mut(*entity) else {
                    continue;
                };

                // Интересует только во время штурма
                let AssaultState::Assaulting { threat_position } = &mut *state else {
                    continue;
                };

                if position.distance(*threat_position) > REPATH_DISTANCE {
                    *threat_position = *position;
                    run_to(*position, leash, &mut movement);
                    logger::log(&format!("🔄 {:?} re-pathing to threat at {:?}", entity, position));
                }
            }

            ThreatEvent::PositionUnreachable { entity, .. } => {
                let Ok((config, mut state, mut movement, _)) = agents.get_mut(*entity) else {
                    continue;
                };

                if state.is_assaulting() {
                    logger::log(&format!("❌ {:?} threat position unreachable", entity));
                }

                stop_assault(
                    *entity,
                    &mut state,
                    &mut movement,
                    config,
                    &mut rng,
                    &mut assault_events,
                    &mut cover_events,
                );
            }
        }
    }
}

/// Система: per-tick автостоп по дистанции
///
/// Единственный time-driven переход: пока Assaulting, каждый simulation tick
/// пересчитываем дистанцию до threat и останавливаемся внутри stop_distance.
/// Равенство останавливает (продолжение требует строго больше).
pub fn assault_stop_distance_check(
    mut agents: Query<
        (
            Entity,
            &AgentPosition,
            &AssaultConfig,
            &mut AssaultState,
            &mut MovementCommand,
        ),
        Without<Disabled>,
    >,
    mut assault_events: EventWriter<AssaultEvent>,
    mut cover_events: EventWriter<SeekCover>,
    mut rng: ResMut<DeterministicRng>,
) {
    for (entity, agent_position, config, mut state, mut movement) in agents.iter_mut() {
        let threat_position = match state.as_ref() {
            AssaultState::Assaulting { threat_position } => *threat_position,
            AssaultState::Idle => continue,
        };

        if agent_position.distance_to(threat_position) <= config.stop_distance {
            stop_assault(
                entity,
                &mut state,
                &mut movement,
                config,
                &mut rng,
                &mut assault_events,
                &mut cover_events,
            );
        }
    }
}

/// Система: ответы на AssaultCheck enquiries
///
/// Pure query — state не трогаем. Отвечаем только если assault controller
/// активен и candidate position строго дальше stop_distance.
pub fn answer_assault_checks(
    mut check_events: EventReader<AssaultCheck>,
    agents: Query<(&AgentPosition, &AssaultConfig), (With<AssaultState>, Without<Disabled>)>,
    mut viable_events: EventWriter<AssaultViable>,
) {
    for check in check_events.read() {
        let Ok((agent_position, config)) = agents.get(check.entity) else {
            continue;
        };

        if agent_position.distance_to(check.position) > config.stop_distance {
            viable_events.write(AssaultViable {
                entity: check.entity,
                position: check.position,
            });
        }
    }
}

/// Остановка штурма (общая для Stop команды, автостопа и unreachable)
///
/// Порядок side effects фиксирован: stop moving → (с шансом) seek cover →
/// stopped. Повторный вызов в Idle — no-op, уведомления не дублируются.
fn stop_assault(
    entity: Entity,
    state: &mut AssaultState,
    movement: &mut MovementCommand,
    config: &AssaultConfig,
    rng: &mut DeterministicRng,
    assault_events: &mut EventWriter<AssaultEvent>,
    cover_events: &mut EventWriter<SeekCover>,
) {
    if !state.is_assaulting() {
        return;
    }

    *state = AssaultState::Idle;
    *movement = MovementCommand::Stop;

    if rng.rng.gen::<f32>() <= config.take_cover_chance {
        cover_events.write(SeekCover { entity });
    }

    assault_events.write(AssaultEvent::Stopped { entity });
    logger::log(&format!("🚶 {:?} Assaulting → Idle", entity));
}

/// RunTo intent для host locomotion, с учётом leash'а
fn run_to(target: Vec3, leash: Option<&KeepCloseTo>, movement: &mut MovementCommand) {
    let destination = match leash {
        Some(leash) => leash.clamp_target(target),
        None => target,
    };

    *movement = MovementCommand::RunTo {
        target: destination,
    };
}
