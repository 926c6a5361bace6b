//! Property tests for coordinates, move legality and random playouts.

use proptest::prelude::*;

use abalone_engine::core::{
    Coord2D, Coord3D, Direction, Game, GameRng, Move, Occupant, Player, WIN_SCORE,
};

fn valid_coord() -> impl Strategy<Value = Coord3D> {
    (-4i32..=4, -4i32..=4)
        .prop_map(|(x, z)| Coord3D::new(x, -x - z, z))
        .prop_filter("on the board", |c| c.is_valid())
}

fn board_cell() -> impl Strategy<Value = Coord2D> {
    prop::sample::select(Coord2D::board_cells().collect::<Vec<_>>())
}

fn direction() -> impl Strategy<Value = Direction> {
    (0usize..6).prop_map(|i| Direction::ALL[i])
}

fn occupant() -> impl Strategy<Value = Occupant> {
    prop_oneof![
        2 => Just(Occupant::Empty),
        1 => Just(Occupant::Marble(Player::One)),
        1 => Just(Occupant::Marble(Player::Two)),
    ]
}

/// Random board with player 1 to move.
fn random_game() -> impl Strategy<Value = Game> {
    prop::collection::vec(occupant(), 61).prop_map(|cells| {
        let mut game = Game::empty();
        for (coord, occ) in Coord2D::board_cells().map(Coord2D::to_3d).zip(cells) {
            game.set_grid(coord, occ);
        }
        game
    })
}

proptest! {
    #[test]
    fn prop_projection_round_trip(coord in valid_coord()) {
        prop_assert_eq!(coord.to_2d().to_3d(), coord);
    }

    #[test]
    fn prop_planar_round_trip(cell in board_cell()) {
        let coord = cell.to_3d();
        prop_assert!(coord.is_valid());
        prop_assert_eq!(coord.to_2d(), cell);
    }

    #[test]
    fn prop_direction_opposite_cancels(coord in valid_coord(), dir in direction()) {
        prop_assert_eq!(coord.add(dir).add(dir.opposite()), coord);
    }

    #[test]
    fn prop_rejected_push_changes_nothing(
        game in random_game(),
        from in valid_coord(),
        dir in direction(),
    ) {
        let mut trial = game.clone();
        let mv = Move::push_line(from, dir);
        match trial.apply_move(&mv) {
            Ok(_) => {
                prop_assert_eq!(trial.turn(), 1);
                prop_assert_eq!(trial.current_player(), Player::Two);
            }
            Err(err) => {
                prop_assert!(!err.is_fatal(), "fatal error {}", err);
                prop_assert_eq!(trial, game);
            }
        }
    }

    #[test]
    fn prop_valid_moves_agree_with_validation(game in random_game()) {
        let moves = game.valid_moves();
        for &from in &[Coord3D::ORIGIN, Coord3D::new(4, -4, 0), Coord3D::new(-2, 0, 2)] {
            for dir in Direction::ALL {
                let mv = Move::push_line(from, dir);
                prop_assert_eq!(moves.contains(&mv), game.is_legal(&mv));
            }
        }
    }

    #[test]
    fn prop_push_conserves_marbles(game in random_game(), seed in any::<u64>()) {
        let mut game = game;
        let mut rng = GameRng::new(seed);
        let before = game.grid().count(Player::One) + game.grid().count(Player::Two);

        if let Some(&mv) = rng.choose(&game.valid_moves()) {
            let captured = game.apply_move(&mv).unwrap();
            let after = game.grid().count(Player::One) + game.grid().count(Player::Two);
            prop_assert_eq!(after + usize::from(captured), before);
            prop_assert_eq!(game.score(Player::One), u8::from(captured));
        }
    }

    #[test]
    fn prop_random_playout_keeps_invariants(seed in any::<u64>()) {
        let mut game = Game::new();
        let mut rng = GameRng::new(seed);

        for turn in 0..200u32 {
            let moves = game.valid_moves();
            let Some(&mv) = rng.choose(&moves) else { break };
            let mover = game.current_player();

            game.apply_move(&mv).unwrap();

            prop_assert_eq!(game.turn(), turn + 1);
            prop_assert_eq!(game.current_player(), mover.opponent());
            for player in Player::ALL {
                let score = game.score(player);
                prop_assert!(score <= WIN_SCORE);
                prop_assert_eq!(
                    game.grid().count(player.opponent()) + usize::from(score),
                    14
                );
            }
            prop_assert_eq!(
                game.winner().is_some(),
                Player::ALL.iter().any(|&p| game.score(p) == WIN_SCORE)
            );
            if game.is_over() {
                break;
            }
        }
    }
}
