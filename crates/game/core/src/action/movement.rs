use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::rules::validate_move;
use crate::state::{Direction, Game, PlayerSymbol, Position};

use super::effects::resolve;
use super::{ActionError, ActionTransition, living_player, living_player_mut};

/// Walks a player one cell and turns them to face that way.
///
/// Walking into a burning cell is allowed and fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub player: PlayerSymbol,
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(player: PlayerSymbol, direction: Direction) -> Self {
        Self { player, direction }
    }

    fn destination(&self, game: &Game) -> Result<(Position, Position), ActionError> {
        let origin = living_player(game, self.player)?.position;
        Ok((origin, origin.step(self.direction)))
    }
}

impl ActionTransition for MoveAction {
    type Error = ActionError;

    fn pre_validate(&self, game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        let (_, destination) = self.destination(game)?;
        validate_move(destination, game)?;
        Ok(())
    }

    fn apply(&self, game: &mut Game, _config: &GameConfig) -> Result<Vec<GameEvent>, Self::Error> {
        let (from, to) = self.destination(game)?;
        let player = living_player_mut(game, self.player)?;
        player.position = to;
        player.facing = self.direction;

        let mut events = vec![GameEvent::PlayerMoved {
            player: self.player,
            from,
            to,
        }];
        events.extend(resolve(game)?);
        Ok(events)
    }
}

/// Changes a player's facing without moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnAction {
    pub player: PlayerSymbol,
    pub direction: Direction,
}

impl TurnAction {
    pub fn new(player: PlayerSymbol, direction: Direction) -> Self {
        Self { player, direction }
    }
}

impl ActionTransition for TurnAction {
    type Error = ActionError;

    fn pre_validate(&self, game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        living_player(game, self.player).map(|_| ())
    }

    fn apply(&self, game: &mut Game, _config: &GameConfig) -> Result<Vec<GameEvent>, Self::Error> {
        living_player_mut(game, self.player)?.facing = self.direction;
        Ok(vec![GameEvent::PlayerTurned {
            player: self.player,
            facing: self.direction,
        }])
    }
}
