use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::rules::validate_move;
use crate::state::{Game, GameStatus, PlayerSymbol, Position};

use super::{ActionError, ActionTransition, require_status};

/// Adds a player to a pending game at a spawn cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JoinAction {
    pub player: PlayerSymbol,
    pub position: Position,
}

impl JoinAction {
    pub fn new(player: PlayerSymbol, position: Position) -> Self {
        Self { player, position }
    }
}

impl ActionTransition for JoinAction {
    type Error = ActionError;

    fn pre_validate(&self, game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        require_status(game, GameStatus::Pending)?;
        validate_move(self.position, game)?;
        Ok(())
    }

    fn apply(&self, game: &mut Game, config: &GameConfig) -> Result<Vec<GameEvent>, Self::Error> {
        game.add_player(self.player, self.position, config.starting_stats)?;
        Ok(vec![GameEvent::PlayerJoined {
            player: self.player,
            position: self.position,
        }])
    }
}

/// Moves a pending game to started once enough players joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartAction;

impl ActionTransition for StartAction {
    type Error = ActionError;

    fn pre_validate(&self, game: &Game, config: &GameConfig) -> Result<(), Self::Error> {
        require_status(game, GameStatus::Pending)?;
        let joined = game.players.len();
        if joined < config.min_players {
            return Err(ActionError::NotEnoughPlayers {
                required: config.min_players,
                joined,
            });
        }
        Ok(())
    }

    fn apply(&self, game: &mut Game, _config: &GameConfig) -> Result<Vec<GameEvent>, Self::Error> {
        game.start()?;
        Ok(vec![GameEvent::GameStarted])
    }

    fn post_validate(&self, game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        require_status(game, GameStatus::Started)
    }
}
