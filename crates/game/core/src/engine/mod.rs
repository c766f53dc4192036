//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`Game`]. It drives
//! every [`Action`] through its transition phases and surfaces rich error
//! information to the orchestration layer. Players, the lobby and the clock
//! all mutate the game through the same `execute()` entry point.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::Action;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::event::GameEvent;
use crate::state::Game;

/// Game engine that validates and applies actions against one game.
///
/// All state mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
///
/// A failed execution leaves the game exactly as it was before the call.
pub struct GameEngine<'a> {
    game: &'a mut Game,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    /// Creates a new engine over `game` using the given tuning.
    pub fn new(game: &'a mut Game, config: &'a GameConfig) -> Self {
        Self { game, config }
    }

    pub fn game(&self) -> &Game {
        self.game
    }

    /// Executes an action and returns the events it produced, in order.
    pub fn execute(&mut self, action: &Action) -> Result<Vec<GameEvent>, ExecuteError> {
        let snapshot = self.game.clone();

        match transition::execute_transition(action, self.game, self.config) {
            Ok(events) => {
                tracing::debug!(
                    action = action.as_snake_case(),
                    player = ?action.player(),
                    tick = self.game.tick,
                    events = ?events.iter().map(GameEvent::as_snake_case).collect::<Vec<_>>(),
                    "action executed"
                );
                Ok(events)
            }
            Err(error) => {
                if error.phase() != TransitionPhase::PreValidate {
                    *self.game = snapshot;
                }
                let severity = error.severity();
                if severity.is_internal() {
                    tracing::warn!(
                        action = action.as_snake_case(),
                        player = ?action.player(),
                        phase = error.phase().as_str(),
                        severity = severity.as_str(),
                        code = error.error_code(),
                        %error,
                        "action rejected"
                    );
                } else {
                    tracing::debug!(
                        action = action.as_snake_case(),
                        player = ?action.player(),
                        phase = error.phase().as_str(),
                        severity = severity.as_str(),
                        %error,
                        "action rejected"
                    );
                }
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{
        ActionError, JoinAction, MoveAction, PlantBombAction, StartAction, TickAction,
    };
    use crate::rules::MoveError;
    use crate::state::{Board, Direction, GameStatus, PlayerSymbol, Position};

    fn lobby() -> Game {
        Game::new(Board::from_rows(&["▩▩▩▩▩", "▩...▩", "▩.□.▩", "▩...▩", "▩▩▩▩▩"]).unwrap())
    }

    #[test]
    fn lobby_then_play() {
        let mut game = lobby();
        let config = GameConfig::default();
        let mut engine = GameEngine::new(&mut game, &config);

        engine
            .execute(&JoinAction::new(PlayerSymbol::Cross, Position::new(1, 1)).into())
            .unwrap();
        engine
            .execute(&JoinAction::new(PlayerSymbol::Nought, Position::new(3, 3)).into())
            .unwrap();
        engine.execute(&StartAction.into()).unwrap();
        assert_eq!(engine.game().status(), GameStatus::Started);

        engine
            .execute(&MoveAction::new(PlayerSymbol::Cross, Direction::Right).into())
            .unwrap();
        assert_eq!(
            engine.game().player(PlayerSymbol::Cross).unwrap().position,
            Position::new(1, 2)
        );
    }

    #[test]
    fn rejected_actions_leave_the_game_untouched() {
        let mut game = lobby();
        let config = GameConfig::default().with_min_players(1);
        let mut engine = GameEngine::new(&mut game, &config);
        engine
            .execute(&JoinAction::new(PlayerSymbol::Cross, Position::new(1, 1)).into())
            .unwrap();
        engine.execute(&StartAction.into()).unwrap();
        let before = engine.game().clone();

        let error = engine
            .execute(&MoveAction::new(PlayerSymbol::Cross, Direction::Up).into())
            .unwrap_err();
        assert_eq!(
            error,
            ExecuteError::Move(TransitionPhaseError::new(
                TransitionPhase::PreValidate,
                ActionError::Move(MoveError::Blocked {
                    destination: Position::new(0, 1),
                    tile: crate::state::Tile::Wall,
                })
            ))
        );
        assert_eq!(engine.game(), &before);
    }

    #[test]
    fn ticks_require_a_started_game() {
        let mut game = lobby();
        let config = GameConfig::default();
        let mut engine = GameEngine::new(&mut game, &config);
        assert!(matches!(
            engine.execute(&TickAction.into()),
            Err(ExecuteError::Tick(TransitionPhaseError {
                phase: TransitionPhase::PreValidate,
                error: ActionError::WrongStatus { .. },
            }))
        ));
        assert!(matches!(
            engine.execute(&PlantBombAction::new(PlayerSymbol::Cross).into()),
            Err(ExecuteError::PlantBomb(_))
        ));
    }
}
