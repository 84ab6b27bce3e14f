//! Behavioural tests for the simulation engine through its public API
//!
//! Test categories:
//! - Steering and reversal rejection
//! - Movement, growth and scoring
//! - Collisions and game end
//! - Initialisation
//! - Invariants over random play

use grid_snake::game::{
    Cell, Direction, EndReason, GameConfig, GameEngine, GameError, GameStatus, Scenario,
    TickOutcome, Velocity, VelocityChange,
};
use proptest::prelude::*;

fn config(rows: usize, columns: usize) -> GameConfig {
    GameConfig::new(rows, columns).with_seed(1234)
}

fn engine_at(rows: usize, columns: usize, scenario: Scenario) -> GameEngine {
    GameEngine::from_scenario(config(rows, columns), scenario).unwrap()
}

// ============================================================================
// Steering
// ============================================================================

mod steering {
    use super::*;

    #[test]
    fn reversal_is_ignored_turn_is_accepted() {
        let mut engine = engine_at(
            10,
            10,
            Scenario::new(vec![Cell::new(5, 5)], Velocity::new(0, 1)),
        );

        assert_eq!(engine.apply_direction(Direction::Left), VelocityChange::Ignored);
        assert_eq!(engine.velocity(), Velocity::new(0, 1));

        assert_eq!(
            engine.apply_direction(Direction::Up),
            VelocityChange::Accepted(Velocity::new(-1, 0))
        );
        assert_eq!(engine.velocity(), Velocity::new(-1, 0));
    }

    #[test]
    fn every_accepted_turn_is_signalled() {
        let mut engine = GameEngine::new(config(10, 10)).unwrap();

        assert!(engine.apply_direction(Direction::Down).is_accepted());
        assert!(engine.apply_direction(Direction::Left).is_accepted());
        assert!(engine.apply_direction(Direction::Up).is_accepted());
        assert!(!engine.apply_direction(Direction::Down).is_accepted());
    }
}

// ============================================================================
// Movement and growth
// ============================================================================

mod growth {
    use super::*;

    #[test]
    fn consuming_an_item_grows_and_scores() {
        let mut engine = engine_at(
            10,
            10,
            Scenario::new(vec![Cell::new(5, 5)], Velocity::new(0, 1)).with_item(Cell::new(5, 6)),
        );

        let outcome = engine.tick();

        assert!(outcome.ate_item);
        let chain: Vec<Cell> = engine.chain().segments().copied().collect();
        assert_eq!(chain, vec![Cell::new(5, 6), Cell::new(5, 5)]);
        assert_eq!(engine.items().len(), 1);
        assert!(!engine.chain().contains(engine.items()[0]));
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn score_adds_current_length() {
        let mut engine = engine_at(
            10,
            10,
            Scenario::new(
                vec![Cell::new(5, 5), Cell::new(5, 4), Cell::new(5, 3)],
                Velocity::new(0, 1),
            )
            .with_item(Cell::new(5, 6)),
        );

        engine.tick();

        assert_eq!(engine.score(), 3);
        assert_eq!(engine.chain().len(), 4);
    }

    #[test]
    fn consuming_with_growth_pending_scores_grown_length() {
        let mut engine = engine_at(
            10,
            10,
            Scenario::new(vec![Cell::new(5, 5)], Velocity::new(0, 1))
                .with_item(Cell::new(5, 6))
                .with_pending_growth(1),
        );

        let outcome = engine.tick();

        assert!(outcome.ate_item);
        assert_eq!(engine.chain().len(), 2);
        assert_eq!(engine.score(), 2);
        assert_eq!(engine.pending_growth(), 1);
    }

    #[test]
    fn entering_the_vacated_tail_is_legal() {
        // Loop: head (5,5) moving down onto the tail at (6,5)
        let chain = vec![
            Cell::new(5, 5),
            Cell::new(5, 6),
            Cell::new(6, 6),
            Cell::new(6, 5),
        ];
        let mut engine = engine_at(
            10,
            10,
            Scenario::new(chain, Velocity::new(1, 0)).with_item(Cell::new(1, 1)),
        );

        let outcome = engine.tick();

        assert_eq!(outcome.ended, None);
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.chain().head(), Cell::new(6, 5));
    }

    #[test]
    fn entering_a_kept_tail_is_fatal() {
        // Same loop, but pending growth keeps the tail in place
        let chain = vec![
            Cell::new(5, 5),
            Cell::new(5, 6),
            Cell::new(6, 6),
            Cell::new(6, 5),
        ];
        let mut engine = engine_at(
            10,
            10,
            Scenario::new(chain, Velocity::new(1, 0))
                .with_item(Cell::new(1, 1))
                .with_pending_growth(1),
        );

        let outcome = engine.tick();

        assert_eq!(outcome.ended, Some(EndReason::SelfCollision));
    }
}

// ============================================================================
// Collisions
// ============================================================================

mod collisions {
    use super::*;

    #[test]
    fn leaving_the_top_row_ends_the_game() {
        for column in 1..=3 {
            let mut engine = engine_at(
                3,
                3,
                Scenario::new(vec![Cell::new(1, column)], Velocity::new(-1, 0)),
            );

            let outcome = engine.tick();

            assert_eq!(outcome.ended, Some(EndReason::Wall));
            assert_eq!(engine.status(), GameStatus::Ended);
        }
    }

    #[test]
    fn ended_game_ignores_ticks_and_input() {
        let mut engine = engine_at(3, 3, Scenario::new(vec![Cell::new(3, 3)], Velocity::new(0, 1)));
        engine.tick();
        let frozen = engine.snapshot();

        assert_eq!(engine.tick(), TickOutcome::default());
        assert_eq!(engine.apply_direction(Direction::Up), VelocityChange::Ignored);
        assert_eq!(engine.snapshot(), frozen);
    }

    #[test]
    fn invalid_board_is_rejected() {
        assert!(matches!(
            GameEngine::new(GameConfig::new(0, 0)),
            Err(GameError::InvalidConfiguration(_))
        ));
    }
}

// ============================================================================
// Initialisation
// ============================================================================

mod init {
    use super::*;

    #[test]
    fn init_twice_gives_fresh_game() {
        let mut engine = engine_at(
            10,
            10,
            Scenario::new(vec![Cell::new(1, 1)], Velocity::new(0, -1)).with_pending_growth(3),
        );
        engine.tick();
        assert_eq!(engine.status(), GameStatus::Ended);

        engine.init_game();
        engine.init_game();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.chain, vec![Cell::new(5, 5)]);
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.velocity, Velocity::STILL);
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.pending_growth, 0);
    }

    #[test]
    fn same_seed_same_game() {
        let play = || {
            let mut engine = GameEngine::new(config(8, 8)).unwrap();
            let turns = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];
            for step in 0..60 {
                engine.apply_direction(turns[(step / 3) % 4]);
                engine.tick();
            }
            engine.snapshot()
        };

        assert_eq!(play(), play());
    }
}

// ============================================================================
// Invariants over random play
// ============================================================================

fn direction_strategy() -> impl Strategy<Value = Option<Direction>> {
    prop_oneof![
        Just(None),
        Just(Some(Direction::Up)),
        Just(Some(Direction::Down)),
        Just(Some(Direction::Left)),
        Just(Some(Direction::Right)),
    ]
}

proptest! {
    #[test]
    fn prop_length_grows_by_at_most_one(
        seed in any::<u64>(),
        rows in 2usize..=8,
        columns in 2usize..=8,
        fatal in any::<bool>(),
        inputs in prop::collection::vec(direction_strategy(), 1..120),
    ) {
        let config = GameConfig::new(rows, columns)
            .with_seed(seed)
            .with_self_collision(fatal);
        let mut engine = GameEngine::new(config).unwrap();

        for input in inputs {
            if let Some(direction) = input {
                engine.apply_direction(direction);
            }
            let before = engine.chain().len();
            let outcome = engine.tick();
            let after = engine.chain().len();

            prop_assert_eq!(after, before + usize::from(outcome.grew));
            prop_assert!(engine.chain().len() >= 1);
            if !outcome.advanced {
                prop_assert_eq!(engine.status(), GameStatus::Ended);
            }
        }
    }

    #[test]
    fn prop_items_never_on_chain(
        seed in any::<u64>(),
        rows in 1usize..=6,
        columns in 1usize..=6,
        inputs in prop::collection::vec(direction_strategy(), 1..150),
    ) {
        let config = GameConfig::new(rows, columns)
            .with_seed(seed)
            .with_self_collision(false);
        let mut engine = GameEngine::new(config).unwrap();
        let board = engine.board();

        for input in inputs {
            if let Some(direction) = input {
                engine.apply_direction(direction);
            }
            engine.tick();

            prop_assert!(engine.items().len() <= 1);
            for item in engine.items() {
                prop_assert!(board.in_bounds(*item));
                prop_assert!(!engine.occupancy().is_occupied_by_chain(*item));
            }
            if engine.is_playing() {
                prop_assert_eq!(engine.items().len(), 1);
            }
            let velocity = engine.velocity();
            prop_assert!(velocity.d_row == 0 || velocity.d_column == 0);
        }
    }
}
