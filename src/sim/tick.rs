//! Fixed-step simulation tick
//!
//! Advances the game by one discrete step. Order matters: steer, move,
//! self-collision, then apple.

use glam::IVec2;

use super::state::{GamePhase, GameState, Snapshot};

/// Input gathered between two ticks
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest requested direction; earlier requests are overwritten
    pub direction: Option<IVec2>,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Snake ate the apple and grew to `length`
    AppleEaten { length: usize },
    /// Snake ran into itself
    GameOver { length: usize },
}

/// Result of one tick
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub snapshot: Snapshot,
    pub event: Option<GameEvent>,
}

/// Advance the game state by one tick.
///
/// After game over this changes nothing and only reports the final snapshot.
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    if state.phase == GamePhase::GameOver {
        return TickOutcome {
            snapshot: state.snapshot(),
            event: None,
        };
    }

    if let Some(direction) = input.direction {
        state.snake.set_direction(direction);
    }

    state.time_ticks += 1;
    state.snake.move_step(&state.board);

    let event = if state.snake.has_self_collision() {
        state.phase = GamePhase::GameOver;
        Some(GameEvent::GameOver {
            length: state.snake.len(),
        })
    } else if state.apple.is_eaten_by(&state.snake) {
        state.snake.grow();
        state.respawn_apple();
        Some(GameEvent::AppleEaten {
            length: state.snake.len(),
        })
    } else {
        None
    };

    TickOutcome {
        snapshot: state.snapshot(),
        event,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Apple, Board, Snake};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn steer(dx: i32, dy: i32) -> TickInput {
        TickInput {
            direction: Some(IVec2::new(dx, dy)),
        }
    }

    #[test]
    fn test_tick_moves_right_by_default() {
        let mut state = GameState::new(Board::default(), 12345);
        state.apple.position = IVec2::new(0, 0);
        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.snapshot.head(), IVec2::new(420, 300));
        assert_eq!(outcome.event, None);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_applies_direction_before_moving() {
        let mut state = GameState::new(Board::default(), 12345);
        state.apple.position = IVec2::new(0, 0);
        tick(&mut state, &steer(0, -1));
        assert_eq!(state.snake.head(), IVec2::new(400, 280));
        assert_eq!(state.snake.direction(), IVec2::new(0, -1));
    }

    #[test]
    fn test_eating_grows_and_respawns() {
        let mut state = GameState::new(Board::default(), 99);
        state.snake = Snake::new(IVec2::new(80, 100));
        state.apple.position = IVec2::new(100, 100);

        let outcome = tick(&mut state, &TickInput::default());
        assert_eq!(outcome.event, Some(GameEvent::AppleEaten { length: 2 }));
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.snake.head(), IVec2::new(100, 100));
        // Respawn draws the next cell from the game's RNG
        let mut rng = Pcg32::seed_from_u64(99);
        let mut expected = Apple::spawn(&state.board, &mut rng);
        expected.generate_new_apple(&state.board, &mut rng);
        assert_eq!(state.apple, expected);

        // The extra segment survives the next move
        state.apple.position = IVec2::new(0, 0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.snake.len(), 2);
        assert_eq!(
            state.snake.segments().iter().copied().collect::<Vec<_>>(),
            vec![IVec2::new(120, 100), IVec2::new(100, 100)]
        );
    }

    #[test]
    fn test_self_collision_ends_game() {
        let mut state = GameState::new(Board::default(), 7);
        state.apple.position = IVec2::new(0, 0);
        state.snake = Snake::from_segments(
            [IVec2::new(100, 100), IVec2::new(80, 100), IVec2::new(60, 100)],
            IVec2::X,
        );

        let outcome = tick(&mut state, &steer(-1, 0));
        assert_eq!(outcome.event, Some(GameEvent::GameOver { length: 3 }));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(outcome.snapshot.is_over());
    }

    #[test]
    fn test_collision_wins_over_apple() {
        let mut state = GameState::new(Board::default(), 7);
        state.snake = Snake::from_segments(
            [IVec2::new(100, 100), IVec2::new(80, 100), IVec2::new(60, 100)],
            IVec2::X,
        );
        state.apple.position = IVec2::new(80, 100);

        let outcome = tick(&mut state, &steer(-1, 0));
        assert!(matches!(outcome.event, Some(GameEvent::GameOver { .. })));
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.apple.position, IVec2::new(80, 100));
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = GameState::new(Board::default(), 7);
        state.apple.position = IVec2::new(0, 0);
        state.snake = Snake::from_segments(
            [IVec2::new(100, 100), IVec2::new(80, 100), IVec2::new(60, 100)],
            IVec2::X,
        );
        tick(&mut state, &steer(-1, 0));
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen = state.snapshot();
        for _ in 0..10 {
            let outcome = tick(&mut state, &steer(0, 1));
            assert_eq!(outcome.snapshot, frozen);
            assert_eq!(outcome.event, None);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed and inputs should produce identical results
        let mut state1 = GameState::new(Board::new(200, 200, 20), 99999);
        let mut state2 = GameState::new(Board::new(200, 200, 20), 99999);

        let inputs = [steer(0, 1), TickInput::default(), steer(-1, 0), steer(0, -1)];
        for i in 0..400 {
            let input = &inputs[i % inputs.len()];
            let a = tick(&mut state1, input);
            let b = tick(&mut state2, input);
            assert_eq!(a.snapshot, b.snapshot);
        }
    }

    proptest! {
        #[test]
        fn prop_length_grows_only_on_apple(
            seed in any::<u64>(),
            steps in prop::collection::vec(0..5u8, 1..200),
        ) {
            // Small board so apples actually get eaten
            let mut state = GameState::new(Board::new(100, 100, 20), seed);
            for step in steps {
                let input = match step {
                    0 => steer(1, 0),
                    1 => steer(-1, 0),
                    2 => steer(0, 1),
                    3 => steer(0, -1),
                    _ => TickInput::default(),
                };
                let before = state.snake.len();
                let was_running = state.phase == GamePhase::Running;
                let outcome = tick(&mut state, &input);
                let after = state.snake.len();

                match outcome.event {
                    Some(GameEvent::AppleEaten { length }) => {
                        prop_assert_eq!(after, before + 1);
                        prop_assert_eq!(length, after);
                    }
                    _ => prop_assert_eq!(after, before),
                }
                if was_running {
                    prop_assert!(state.board.contains(state.snake.head()));
                    prop_assert!(state.board.is_aligned(state.snake.head()));
                }
                prop_assert!(state.board.contains(state.apple.position));
            }
        }
    }
}
