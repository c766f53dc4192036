//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition};
use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::state::Game;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Runs a transition through the three-phase pipeline.
///
/// 1. `pre_validate` - check preconditions before mutation
/// 2. `apply` - mutate the game and collect events
/// 3. `post_validate` - verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    game: &mut Game,
    config: &GameConfig,
) -> Result<Vec<GameEvent>, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(game, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let events = transition
        .apply(game, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(game, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(events)
}

/// Routes an action to its transition.
pub(super) fn execute_transition(
    action: &Action,
    game: &mut Game,
    config: &GameConfig,
) -> Result<Vec<GameEvent>, ExecuteError> {
    match action {
        Action::Join(transition) => {
            drive_transition(transition, game, config).map_err(ExecuteError::Join)
        }
        Action::Start(transition) => {
            drive_transition(transition, game, config).map_err(ExecuteError::Start)
        }
        Action::Move(transition) => {
            drive_transition(transition, game, config).map_err(ExecuteError::Move)
        }
        Action::Turn(transition) => {
            drive_transition(transition, game, config).map_err(ExecuteError::Turn)
        }
        Action::PlantBomb(transition) => {
            drive_transition(transition, game, config).map_err(ExecuteError::PlantBomb)
        }
        Action::Breathe(transition) => {
            drive_transition(transition, game, config).map_err(ExecuteError::Breathe)
        }
        Action::Tick(transition) => {
            drive_transition(transition, game, config).map_err(ExecuteError::Tick)
        }
    }
}
