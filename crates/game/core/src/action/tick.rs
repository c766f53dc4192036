use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::state::{Game, GameStatus, Position};

use super::effects::{detonate, resolve};
use super::{ActionError, ActionTransition, require_status};

/// Advances simulation time by one tick.
///
/// Last tick's explosions fade, flames age, and fuses burn down. Bombs whose
/// fuse reaches zero detonate in planting order before the resolution pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickAction;

impl ActionTransition for TickAction {
    type Error = ActionError;

    fn pre_validate(&self, game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        require_status(game, GameStatus::Started)
    }

    fn apply(&self, game: &mut Game, _config: &GameConfig) -> Result<Vec<GameEvent>, Self::Error> {
        game.tick += 1;
        game.explosions.clear();

        for flame in &mut game.flames {
            flame.remaining = flame.remaining.saturating_sub(1);
        }
        game.flames.retain(|flame| flame.remaining > 0);

        for bomb in &mut game.bombs {
            bomb.fuse = bomb.fuse.saturating_sub(1);
        }
        let due: Vec<Position> = game
            .bombs
            .iter()
            .filter(|bomb| bomb.fuse == 0)
            .map(|bomb| bomb.position)
            .collect();

        let mut events = Vec::new();
        for position in due {
            if let Some(bomb) = game.take_bomb_at(position) {
                events.extend(detonate(game, bomb)?);
            }
        }
        tracing::debug!(
            tick = game.tick,
            bombs = game.bombs.len(),
            flames = game.flames.len(),
            explosions = game.explosions.len(),
            "tick advanced"
        );

        events.extend(resolve(game)?);
        Ok(events)
    }

    fn post_validate(&self, game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        match game.bombs.iter().find(|bomb| bomb.fuse == 0) {
            Some(bomb) => Err(ActionError::UndetonatedBomb {
                position: bomb.position,
            }),
            None => Ok(()),
        }
    }
}
