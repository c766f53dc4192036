//! Rule invariants checked over generated boards.

use arena_core::{
    Board, Bomb, Direction, Game, MoveError, Outcome, PlayerStats, PlayerSymbol, Position, Tile,
    calculate_explosion, calculate_winner, explosion_line, validate_move,
};
use proptest::prelude::*;

const MAX_SIDE: usize = 8;

fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        3 => Just(Tile::Empty),
        1 => Just(Tile::Crate),
        1 => Just(Tile::Wall),
        1 => Just(Tile::Block),
    ]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// A board with a few bombs and an on-board origin cell.
fn arena() -> impl Strategy<Value = (Game, Position)> {
    (1..=MAX_SIDE, 1..=MAX_SIDE).prop_flat_map(|(rows, cols)| {
        let rows_i = rows as i32;
        let cols_i = cols as i32;
        (
            prop::collection::vec(prop::collection::vec(tile(), cols), rows),
            prop::collection::vec((0..rows_i, 0..cols_i), 0..4),
            (0..rows_i, 0..cols_i),
        )
            .prop_map(|(cells, bombs, origin)| {
                let mut game = Game::new(Board::new(cells).expect("generated board is rectangular"));
                let origin = Position::from(origin);
                for cell in bombs.into_iter().map(Position::from) {
                    if cell != origin && game.bomb_at(cell).is_none() {
                        game.bombs.push(Bomb::new(cell, 1, PlayerSymbol::Ghost, 3));
                    }
                }
                (game, origin)
            })
    })
}

proptest! {
    #[test]
    fn rays_stay_straight_short_and_clear(
        (game, origin) in arena(),
        direction in direction(),
        power in 0u32..10,
    ) {
        let line = explosion_line(origin, &game, direction, power).unwrap();
        prop_assert!(line.len() <= power as usize);

        for (index, &cell) in line.iter().enumerate() {
            prop_assert_eq!(cell, origin.offset(direction, index as i32 + 1));
            let tile = game.board.get(cell);
            prop_assert!(tile.is_some(), "{} is off the board", cell);
            prop_assert!(!tile.is_some_and(|tile| tile.is_sturdy()), "{} is sturdy", cell);
            prop_assert!(game.bomb_at(cell).is_none(), "{} holds a bomb", cell);
            if index + 1 < line.len() {
                prop_assert!(!tile.is_some_and(|tile| tile.is_destructible()));
            }
        }
    }

    #[test]
    fn short_rays_end_at_a_stopper(
        (game, origin) in arena(),
        direction in direction(),
        power in 1u32..10,
    ) {
        let line = explosion_line(origin, &game, direction, power).unwrap();
        if line.len() < power as usize {
            let tip_destroyed = line
                .last()
                .and_then(|&cell| game.board.get(cell))
                .is_some_and(|tile| tile.is_destructible());
            let next = origin.offset(direction, line.len() as i32 + 1);
            let stopped = game.bomb_at(next).is_some()
                || game.board.get(next).is_none_or(|tile| tile.is_sturdy());
            prop_assert!(tip_destroyed || stopped);
        }
    }

    #[test]
    fn geometry_matches_its_rays(
        (game, origin) in arena(),
        power in 0u32..10,
    ) {
        let geometry = calculate_explosion(origin, &game, power).unwrap();
        prop_assert_eq!(geometry.center(), origin);
        prop_assert!(geometry.contains(origin));

        for direction in Direction::ALL {
            let ray = explosion_line(origin, &game, direction, power).unwrap();
            prop_assert_eq!(geometry.ray(direction), ray.as_slice());
        }
        for &cell in geometry.destroyed() {
            prop_assert_eq!(game.board.get(cell), Some(Tile::Crate));
            prop_assert!(Direction::ALL.iter().any(|&direction| geometry.tip(direction) == Some(cell)));
        }
        prop_assert_eq!(geometry.cells().count(), 1 + Direction::ALL
            .iter()
            .map(|&direction| geometry.ray(direction).len())
            .sum::<usize>());
    }

    #[test]
    fn validator_accepts_exactly_free_cells(
        (mut game, origin) in arena(),
        row in -1i32..=MAX_SIDE as i32,
        col in -1i32..=MAX_SIDE as i32,
        dead in proptest::bool::ANY,
    ) {
        if game.board.get(origin).is_some_and(|tile| !tile.is_obstacle()) {
            game.add_player(PlayerSymbol::Star, origin, PlayerStats::default()).unwrap();
            if dead {
                game.player_mut(PlayerSymbol::Star).unwrap().kill();
            }
        }

        let target = Position::new(row, col);
        let free = game.board.get(target).is_some_and(|tile| !tile.is_obstacle())
            && game.bomb_at(target).is_none()
            && game.living_player_at(target).is_none();

        match validate_move(target, &game) {
            Ok(()) => prop_assert!(free),
            Err(MoveError::OutOfBounds { .. }) => prop_assert!(!game.board.contains(target)),
            Err(_) => prop_assert!(!free),
        }
    }

    #[test]
    fn winner_tracks_the_living(deaths in prop::collection::vec(proptest::bool::ANY, 0..=4)) {
        let mut game = Game::new(Board::empty(1, 4));
        for (index, &dead) in deaths.iter().enumerate() {
            let symbol = PlayerSymbol::ALL[index];
            game.add_player(symbol, Position::new(0, index as i32), PlayerStats::default()).unwrap();
            if dead {
                game.player_mut(symbol).unwrap().kill();
            }
        }

        let alive: Vec<_> = game.living_players().map(|player| player.symbol).collect();
        let expected = match alive.as_slice() {
            [] => Outcome::Draw,
            [only] => Outcome::Winner(*only),
            _ => Outcome::Ongoing,
        };
        prop_assert_eq!(calculate_winner(&game), expected);
    }
}

#[test]
fn off_board_origins_are_rejected() {
    let game = Game::new(Board::empty(3, 3));
    assert!(calculate_explosion(Position::new(3, 0), &game, 2).is_err());
    assert!(calculate_explosion(Position::new(0, -1), &game, 2).is_err());
    assert!(explosion_line(Position::new(-1, 1), &game, Direction::Down, 2).is_err());
}
