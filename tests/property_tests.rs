//! Property tests over randomly played games.
//!
//! Each case builds a board of random size, then plays moves picked by a
//! random index into the (sorted) legal destinations, checking the board
//! invariants after every step.

use proptest::prelude::*;

use dog_game::{
    Board, DogError, DogResult, DogRules, Game, GameBuilder, PlayerId, Point, RulesEngine,
};

/// Dog rules that keep the trait's default full-board scan for destinations.
struct FullScan(DogRules);

impl RulesEngine for FullScan {
    fn is_legal(&self, board: &Board, player: PlayerId, dest: Point) -> bool {
        self.0.is_legal(board, player, dest)
    }

    fn apply_move(&self, board: &mut Board, player: PlayerId, dest: Point) -> DogResult<Point> {
        self.0.apply_move(board, player, dest)
    }
}

fn sorted_destinations(game: &Game) -> Vec<Point> {
    let mut destinations: Vec<_> = game.legal_destinations().into_iter().collect();
    destinations.sort();
    destinations
}

fn new_game(size: usize, seed: u64) -> Game {
    GameBuilder::new().size(size).seed(seed).build().unwrap()
}

proptest! {
    #[test]
    fn prop_each_move_burns_exactly_one_cell(
        size in 2usize..8,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..64),
    ) {
        let mut game = new_game(size, seed);

        for pick in picks {
            if game.is_over() {
                break;
            }
            let destinations = sorted_destinations(&game);
            let dest = destinations[pick % destinations.len()];
            let before = game.board().living_count();

            let record = game.play(dest).unwrap();

            prop_assert_eq!(game.board().living_count(), before - 1);
            prop_assert_eq!(game.player(record.player).position(), dest);
            prop_assert!(game.board().contains(dest));
            prop_assert!(!game.board().contains(record.from));
        }
    }

    #[test]
    fn prop_destinations_are_in_bounds_living_and_empty(
        size in 2usize..8,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..64),
    ) {
        let mut game = new_game(size, seed);

        for pick in picks {
            for player in PlayerId::both() {
                for dest in game.legal_destinations_for(player) {
                    prop_assert!(dest.in_square(size));
                    prop_assert!(game.board().contains(dest));
                    prop_assert!(!game.board().is_occupied(dest));
                }
            }
            if game.is_over() {
                break;
            }
            let destinations = sorted_destinations(&game);
            game.play(destinations[pick % destinations.len()]).unwrap();
        }
    }

    #[test]
    fn prop_destinations_are_idempotent(
        size in 2usize..8,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..32),
    ) {
        let mut game = new_game(size, seed);

        for pick in picks {
            if game.is_over() {
                break;
            }
            let first = game.legal_destinations();
            let second = game.legal_destinations();
            prop_assert_eq!(&first, &second);

            let destinations = sorted_destinations(&game);
            game.play(destinations[pick % destinations.len()]).unwrap();
        }
    }

    #[test]
    fn prop_table_lookup_matches_full_scan(
        size in 2usize..8,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..32),
    ) {
        let mut game = new_game(size, seed);
        let scan = FullScan(DogRules::new());

        for pick in picks {
            for player in PlayerId::both() {
                prop_assert_eq!(
                    game.legal_destinations_for(player),
                    scan.legal_destinations(game.board(), player)
                );
            }
            if game.is_over() {
                break;
            }
            let destinations = sorted_destinations(&game);
            game.play(destinations[pick % destinations.len()]).unwrap();
        }
    }

    #[test]
    fn prop_games_terminate(
        size in 2usize..8,
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..16),
    ) {
        let mut game = new_game(size, seed);
        let max_moves = size * size - 1;
        let mut turn = 0;

        while !game.is_over() {
            prop_assert!(turn < max_moves, "game ran past {} moves", max_moves);
            let destinations = sorted_destinations(&game);
            let pick = picks[turn % picks.len()];
            game.play(destinations[pick % destinations.len()]).unwrap();
            turn += 1;
        }

        let outcome = game.outcome().unwrap();
        prop_assert!(game.legal_destinations_for(outcome.loser).is_empty());
        prop_assert_eq!(game.history().len(), turn);
    }

    #[test]
    fn prop_rejected_moves_change_nothing(
        size in 2usize..8,
        seed in any::<u64>(),
        x in -3i32..10,
        y in -3i32..10,
    ) {
        let mut game = new_game(size, seed);
        prop_assume!(!game.is_over());

        let player = game.current_player().unwrap();
        let dest = Point::new(x, y);
        prop_assume!(!game.is_legal(player, dest));

        let living = game.board().living_count();
        let position = game.player(player).position();

        let err = game.play(dest).unwrap_err();

        prop_assert!(matches!(err, DogError::IllegalMove { .. }), "unexpected {:?}", err);
        prop_assert_eq!(game.current_player(), Some(player));
        prop_assert_eq!(game.board().living_count(), living);
        prop_assert_eq!(game.player(player).position(), position);
        prop_assert!(game.history().is_empty());
    }
}
