use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::rules::{FlameHit, calculate_flame_pos, hit_by_flame};
use crate::state::{Flame, Game, PlayerSymbol, Position};

use super::effects::{detonate, resolve};
use super::{ActionError, ActionTransition, living_player};

/// Breathes fire into the cell the player faces.
///
/// A player in that cell dies; otherwise a bomb there detonates at once. The
/// flame stays lethal for `GameConfig::flame_lifetime` ticks. Facing an
/// obstacle or the board edge does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreatheAction {
    pub player: PlayerSymbol,
}

impl BreatheAction {
    pub fn new(player: PlayerSymbol) -> Self {
        Self { player }
    }

    fn target(&self, game: &Game) -> Result<Option<Position>, ActionError> {
        let player = living_player(game, self.player)?;
        Ok(calculate_flame_pos(player.position, game, player.facing)?)
    }
}

impl ActionTransition for BreatheAction {
    type Error = ActionError;

    fn pre_validate(&self, game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        self.target(game).map(|_| ())
    }

    fn apply(&self, game: &mut Game, config: &GameConfig) -> Result<Vec<GameEvent>, Self::Error> {
        let Some(position) = self.target(game)? else {
            tracing::debug!(player = %self.player, "flame blocked");
            return Ok(Vec::new());
        };

        let mut events = vec![GameEvent::FlameSpawned {
            by: self.player,
            position,
        }];
        game.flames.push(Flame::new(position, config.flame_lifetime));

        let hits_bomb = matches!(hit_by_flame(position, game), Some(FlameHit::Bomb(_)));
        if hits_bomb {
            if let Some(bomb) = game.take_bomb_at(position) {
                events.extend(detonate(game, bomb)?);
            }
        }

        events.extend(resolve(game)?);
        Ok(events)
    }
}
