//! Property tests: invariants that hold after every move of any game.

use proptest::prelude::*;

use tactical_tictactoe::{GameConfig, GameEngine, GameState, Mark};

/// Coordinates slightly past the board so rejections are exercised too.
fn moves() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..9, 0usize..9), 0..120)
}

fn hp_pair(state: &GameState) -> (u32, u32) {
    (state.hp(Mark::X), state.hp(Mark::O))
}

proptest! {
    #[test]
    fn prop_sequences_meet_minimum_length(moves in moves()) {
        let mut engine = GameEngine::new();
        for (row, col) in moves {
            let result = engine.place_mark(row, col);
            for sequence in result.sequences() {
                prop_assert!(sequence.len() >= 4);
                prop_assert!(sequence.cells().contains(&sequence.anchor()));
            }
            let summed: u32 = result.sequences().iter().map(|s| s.damage()).sum();
            prop_assert_eq!(result.total_damage(), summed);
        }
    }

    #[test]
    fn prop_hp_bounded_and_non_increasing(moves in moves()) {
        let mut engine = GameEngine::new();
        let (mut last_x, mut last_o) = hp_pair(engine.state());

        for (row, col) in moves {
            engine.place_mark(row, col);
            let (hp_x, hp_o) = hp_pair(engine.state());

            prop_assert!(hp_x <= 15 && hp_o <= 15);
            prop_assert!(hp_x <= last_x && hp_o <= last_o);
            (last_x, last_o) = (hp_x, hp_o);
        }
    }

    #[test]
    fn prop_turn_stays_with_mover_only_on_game_end(moves in moves()) {
        let mut engine = GameEngine::new();
        for (row, col) in moves {
            let Ok(report) = engine.try_place_mark(tactical_tictactoe::Position::new(row, col)) else {
                continue;
            };
            let current = engine.state().current_player();

            if report.ended_game() {
                prop_assert_eq!(current, report.mover);
            } else {
                prop_assert_eq!(current, report.mover.opponent());
            }
        }
    }

    #[test]
    fn prop_only_defender_takes_damage(moves in moves()) {
        let mut engine = GameEngine::new();
        for (row, col) in moves {
            let before = hp_pair(engine.state());
            let Ok(report) = engine.try_place_mark(tactical_tictactoe::Position::new(row, col)) else {
                continue;
            };
            let after = hp_pair(engine.state());

            match report.mover {
                Mark::X => prop_assert_eq!(before.0, after.0),
                Mark::O => prop_assert_eq!(before.1, after.1),
            }
            let defender_before = match report.mover { Mark::X => before.1, Mark::O => before.0 };
            prop_assert_eq!(
                report.hp[report.mover.opponent()],
                defender_before.saturating_sub(report.total_damage)
            );
        }
    }

    #[test]
    fn prop_damage_log_bounded_newest_first(moves in moves()) {
        let config = GameConfig::default().with_starting_hp(500);
        let mut engine = GameEngine::with_config(config);

        for (row, col) in moves {
            let result = engine.place_mark(row, col);
            let log = engine.state().damage_log();
            prop_assert!(log.len() <= 10);

            if result.total_damage() > 0 {
                let latest = log.latest().unwrap();
                prop_assert_eq!(latest.turn(), engine.state().move_count());
                prop_assert_eq!(latest.damage(), result.total_damage());
                prop_assert_eq!(latest.sequence_count(), result.sequences().len());
            }

            let turns: Vec<_> = log.iter().map(|e| e.turn()).collect();
            prop_assert!(turns.windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn prop_rejected_moves_change_nothing(moves in moves()) {
        let mut engine = GameEngine::new();
        for (row, col) in moves {
            let before = engine.snapshot();
            let result = engine.place_mark(row, col);
            if !result.applied() {
                prop_assert_eq!(engine.state(), &before);
            } else {
                prop_assert_eq!(
                    engine.state().board().get(tactical_tictactoe::Position::new(row, col)),
                    Some(before.current_player())
                );
            }
        }
    }

    #[test]
    fn prop_board_is_write_once(moves in moves()) {
        let mut engine = GameEngine::new();
        let mut game_over_seen = false;

        for (row, col) in moves {
            let before = engine.snapshot();
            engine.place_mark(row, col);
            let after = engine.state();

            prop_assert_eq!(after.board().occupied_count() as u32, after.move_count());
            for (old, new) in before.board().rows().flatten().zip(after.board().rows().flatten()) {
                if old.is_some() {
                    prop_assert_eq!(old, new);
                }
            }

            // Game over never reverts.
            if game_over_seen {
                prop_assert!(after.is_game_over());
            }
            game_over_seen = after.is_game_over();
        }
    }
}
