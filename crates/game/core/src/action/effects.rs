//! State changes shared by several actions: detonating a bomb and running
//! the resolution pass.

use crate::event::GameEvent;
use crate::rules::{calculate_explosion, calculate_winner, players_are_dead};
use crate::state::{Bomb, Explosion, Game};

use super::ActionError;

/// Detonates a bomb that has already been removed from `game.bombs`.
///
/// Frees the owner's bomb slot, destroys the crates the blast reached and
/// records the explosion for the current tick.
pub(crate) fn detonate(game: &mut Game, bomb: Bomb) -> Result<Vec<GameEvent>, ActionError> {
    if let Some(owner) = game.player_mut(bomb.owner) {
        owner.active_bombs = owner.active_bombs.saturating_sub(1);
    }

    let geometry = calculate_explosion(bomb.position, game, bomb.power)?;
    tracing::info!(
        owner = %bomb.owner,
        position = %bomb.position,
        power = bomb.power,
        cells = geometry.cells().count(),
        "bomb detonated"
    );

    let mut events = vec![GameEvent::BombDetonated {
        owner: bomb.owner,
        geometry: geometry.clone(),
    }];
    for &position in geometry.destroyed() {
        if game.board.clear(position)? {
            events.push(GameEvent::ObstacleDestroyed { position });
        }
    }
    game.explosions.push(Explosion::new(geometry));

    Ok(events)
}

/// Flags burning players as dead and finishes the game once it is decided.
///
/// Players who were already dead produce no event. Pending and finished games
/// only get the death flags.
pub(crate) fn resolve(game: &mut Game) -> Result<Vec<GameEvent>, ActionError> {
    let mut events = Vec::new();

    let burning: Vec<_> = players_are_dead(game)
        .into_iter()
        .map(|player| player.symbol)
        .collect();
    for symbol in burning {
        let Some(player) = game.player_mut(symbol) else {
            continue;
        };
        if player.kill() {
            tracing::info!(player = %symbol, position = %player.position, "player eliminated");
            events.push(GameEvent::PlayerEliminated {
                player: symbol,
                position: player.position,
            });
        }
    }

    if game.is_started() {
        let outcome = calculate_winner(game);
        if outcome.is_terminal() {
            game.finish(outcome.winner())?;
            tracing::info!(?outcome, tick = game.tick, "game finished");
            events.push(GameEvent::GameFinished { outcome });
        }
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Outcome;
    use crate::state::{Board, GameStatus, PlayerStats, PlayerSymbol, Position, Tile};

    fn started_game() -> Game {
        let board = Board::from_rows(&["▩▩▩▩▩▩▩", "▩.....▩", "▩.□.▣.▩", "▩.....▩", "▩▩▩▩▩▩▩"])
            .unwrap();
        let mut game = Game::new(board);
        game.add_player(PlayerSymbol::Cross, Position::new(1, 1), PlayerStats::default())
            .unwrap();
        game.add_player(PlayerSymbol::Nought, Position::new(3, 5), PlayerStats::default())
            .unwrap();
        game.start().unwrap();
        game
    }

    #[test]
    fn detonate_frees_slot_and_clears_crates() {
        let mut game = started_game();
        game.player_mut(PlayerSymbol::Cross).unwrap().active_bombs = 1;
        let bomb = Bomb::new(Position::new(3, 2), 2, PlayerSymbol::Cross, 0);

        let events = detonate(&mut game, bomb).unwrap();

        assert_eq!(game.player(PlayerSymbol::Cross).unwrap().active_bombs, 0);
        assert_eq!(game.board.get(Position::new(2, 2)), Some(Tile::Empty));
        assert_eq!(game.explosions.len(), 1);
        assert!(events.contains(&GameEvent::ObstacleDestroyed {
            position: Position::new(2, 2)
        }));
        assert!(matches!(events[0], GameEvent::BombDetonated { .. }));
    }

    #[test]
    fn resolve_kills_once_and_declares_winner() {
        let mut game = started_game();
        let bomb = Bomb::new(Position::new(1, 3), 2, PlayerSymbol::Nought, 0);
        detonate(&mut game, bomb).unwrap();

        let events = resolve(&mut game).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::PlayerEliminated {
                    player: PlayerSymbol::Cross,
                    position: Position::new(1, 1),
                },
                GameEvent::GameFinished {
                    outcome: Outcome::Winner(PlayerSymbol::Nought),
                },
            ]
        );
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.winner(), Some(PlayerSymbol::Nought));

        assert!(resolve(&mut game).unwrap().is_empty());
    }

    #[test]
    fn resolve_reports_draw_when_everybody_burns() {
        let mut game = started_game();
        game.flames.push(crate::state::Flame::new(Position::new(1, 1), 1));
        game.flames.push(crate::state::Flame::new(Position::new(3, 5), 1));

        let events = resolve(&mut game).unwrap();
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameFinished {
                outcome: Outcome::Draw
            })
        );
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::Finished);
    }
}
