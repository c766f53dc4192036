use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::state::{Bomb, Game, PlayerSymbol};

use super::{ActionError, ActionTransition, living_player, living_player_mut};

/// Plants a bomb under the player.
///
/// The bomb takes the player's blast power and one of their bomb slots; the
/// slot is freed when it detonates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlantBombAction {
    pub player: PlayerSymbol,
}

impl PlantBombAction {
    pub fn new(player: PlayerSymbol) -> Self {
        Self { player }
    }
}

impl ActionTransition for PlantBombAction {
    type Error = ActionError;

    fn pre_validate(&self, game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        let player = living_player(game, self.player)?;
        if !player.can_plant() {
            return Err(ActionError::BombLimitReached {
                player: self.player,
                limit: player.stats.bombs,
            });
        }
        if game.bomb_at(player.position).is_some() {
            return Err(ActionError::BombAlreadyPlanted {
                position: player.position,
            });
        }
        Ok(())
    }

    fn apply(&self, game: &mut Game, config: &GameConfig) -> Result<Vec<GameEvent>, Self::Error> {
        let player = living_player_mut(game, self.player)?;
        player.active_bombs += 1;
        let bomb = Bomb::new(
            player.position,
            player.stats.power.max(1),
            self.player,
            config.bomb_fuse,
        );
        let event = GameEvent::BombPlanted {
            owner: bomb.owner,
            position: bomb.position,
            power: bomb.power,
        };
        game.bombs.push(bomb);
        Ok(vec![event])
    }

    fn post_validate(&self, game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        let counted = game
            .player(self.player)
            .map_or(0, |player| player.active_bombs);
        let planted = game
            .bombs
            .iter()
            .filter(|bomb| bomb.owner == self.player)
            .count() as u32;
        if counted != planted {
            return Err(ActionError::BombBookkeeping {
                player: self.player,
                counted,
                planted,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Board, PlayerStats, Position};

    fn started(stats: PlayerStats) -> Game {
        let mut game = Game::new(Board::empty(5, 5));
        game.add_player(PlayerSymbol::Star, Position::new(2, 2), stats)
            .unwrap();
        game.add_player(PlayerSymbol::Ghost, Position::new(4, 4), stats)
            .unwrap();
        game.start().unwrap();
        game
    }

    #[test]
    fn planting_uses_player_power_and_config_fuse() {
        let mut game = started(PlayerStats::new(3, 1, 3));
        let config = GameConfig::default().with_bomb_fuse(5);
        let action = PlantBombAction::new(PlayerSymbol::Star);

        action.pre_validate(&game, &config).unwrap();
        let events = action.apply(&mut game, &config).unwrap();
        action.post_validate(&game, &config).unwrap();

        assert_eq!(
            game.bombs,
            vec![Bomb::new(Position::new(2, 2), 3, PlayerSymbol::Star, 5)]
        );
        assert_eq!(game.player(PlayerSymbol::Star).unwrap().active_bombs, 1);
        assert_eq!(
            events,
            vec![GameEvent::BombPlanted {
                owner: PlayerSymbol::Star,
                position: Position::new(2, 2),
                power: 3
            }]
        );
    }

    #[test]
    fn bomb_limit_is_enforced() {
        let mut game = started(PlayerStats::default());
        let config = GameConfig::default();
        let action = PlantBombAction::new(PlayerSymbol::Star);
        action.apply(&mut game, &config).unwrap();

        assert_eq!(
            action.pre_validate(&game, &config),
            Err(ActionError::BombLimitReached {
                player: PlayerSymbol::Star,
                limit: 1
            })
        );
    }

    #[test]
    fn one_bomb_per_cell() {
        let mut game = started(PlayerStats::new(1, 2, 3));
        let config = GameConfig::default();
        let action = PlantBombAction::new(PlayerSymbol::Star);
        action.apply(&mut game, &config).unwrap();

        assert_eq!(
            action.pre_validate(&game, &config),
            Err(ActionError::BombAlreadyPlanted {
                position: Position::new(2, 2)
            })
        );
    }

    #[test]
    fn zero_power_players_still_plant_a_one_cell_bomb() {
        let mut game = started(PlayerStats::new(0, 1, 3));
        PlantBombAction::new(PlayerSymbol::Ghost)
            .apply(&mut game, &GameConfig::default())
            .unwrap();
        assert_eq!(game.bombs[0].power, 1);
    }
}
