//! Error types for the action execution pipeline.

use crate::action::{
    ActionTransition, BreatheAction, JoinAction, MoveAction, PlantBombAction, StartAction,
    TickAction, TurnAction,
};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

type PhaseError<T> = TransitionPhaseError<<T as ActionTransition>::Error>;

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("join action failed: {0}")]
    Join(PhaseError<JoinAction>),

    #[error("start action failed: {0}")]
    Start(PhaseError<StartAction>),

    #[error("move action failed: {0}")]
    Move(PhaseError<MoveAction>),

    #[error("turn action failed: {0}")]
    Turn(PhaseError<TurnAction>),

    #[error("plant bomb action failed: {0}")]
    PlantBomb(PhaseError<PlantBombAction>),

    #[error("breathe action failed: {0}")]
    Breathe(PhaseError<BreatheAction>),

    #[error("tick action failed: {0}")]
    Tick(PhaseError<TickAction>),
}

impl ExecuteError {
    /// Phase-tagged failure regardless of which action produced it.
    pub fn phase_error(&self) -> &TransitionPhaseError<crate::action::ActionError> {
        match self {
            ExecuteError::Join(error)
            | ExecuteError::Start(error)
            | ExecuteError::Move(error)
            | ExecuteError::Turn(error)
            | ExecuteError::PlantBomb(error)
            | ExecuteError::Breathe(error)
            | ExecuteError::Tick(error) => error,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase_error().phase
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        let inner = self.phase_error();
        match inner.phase {
            // A broken post-condition means apply left the game inconsistent.
            TransitionPhase::PostValidate => ErrorSeverity::Internal,
            _ => inner.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        self.phase_error().error.error_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionError;
    use crate::state::PlayerSymbol;

    #[test]
    fn display_names_action_and_phase() {
        let error = ExecuteError::Turn(TransitionPhaseError::new(
            TransitionPhase::PreValidate,
            ActionError::PlayerNotFound(PlayerSymbol::Ghost),
        ));
        let message = error.to_string();
        assert!(message.starts_with("turn action failed: pre_validate failed: "));
        assert_eq!(error.phase(), TransitionPhase::PreValidate);
    }

    #[test]
    fn post_validate_failures_are_internal() {
        let error = ExecuteError::Tick(TransitionPhaseError::new(
            TransitionPhase::PostValidate,
            ActionError::PlayerNotFound(PlayerSymbol::Ghost),
        ));
        assert_eq!(error.severity(), ErrorSeverity::Internal);
        assert_eq!(error.severity().as_str(), "internal");
        assert_eq!(
            error.error_code(),
            ActionError::PlayerNotFound(PlayerSymbol::Ghost).error_code()
        );
    }
}
