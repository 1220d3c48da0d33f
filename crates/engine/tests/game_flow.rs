//! End-to-end scenarios across the session, history, and shift pass.

use twenty48_core::{Board, Direction, GameState};
use twenty48_engine::{shift, Game, GameConfig};

fn fresh_game(seed: u64) -> Game {
    let mut game = Game::from_seed(GameConfig::classic(), seed);
    game.new_game();
    game
}

mod merge_scenarios {
    use super::*;

    #[test]
    fn adjacent_equal_pair_merges_left() {
        let mut s = GameState::new();
        s.board.put(0, 0, 2).unwrap();
        s.board.put(0, 1, 2).unwrap();

        assert!(shift(&mut s, Direction::Left));

        let tiles: Vec<_> = s.board.tiles().collect();
        assert_eq!(tiles.len(), 1);
        assert_eq!((tiles[0].row, tiles[0].col, tiles[0].value), (0, 0, 4));
        assert_eq!(s.score, 4);
    }

    #[test]
    fn unequal_neighbor_blocks_with_zero_distance_slide() {
        let mut s = GameState::new();
        s.board.put(0, 0, 2).unwrap();
        s.board.put(0, 1, 4).unwrap();
        let before = s.clone();

        assert!(!shift(&mut s, Direction::Left));
        assert_eq!(s, before);
    }

    #[test]
    fn merge_adds_exactly_the_doubled_value() {
        let mut s = GameState::new();
        s.board.put(2, 0, 8).unwrap();
        s.board.put(2, 3, 8).unwrap();
        s.score = 100;

        assert!(shift(&mut s, Direction::Right));
        assert_eq!(s.score, 116);
        assert_eq!(s.board.get(2, 3), Some(16));
    }
}

mod history_protocol {
    use super::*;

    #[test]
    fn six_moves_keep_five_snapshots_and_undo_restores_pre_sixth_state() {
        let mut game = fresh_game(1);

        let mut states: Vec<(Board, u32)> = Vec::new();
        for i in 0..6 {
            states.push((game.board().clone(), game.score()));
            let dir = Direction::ALL[i % 4];
            game.shift(dir);
            game.spawn();
        }
        assert_eq!(game.undo_depth(), 5);

        assert!(game.undo());
        let (board, score) = &states[5];
        assert_eq!(game.board(), board);
        assert_eq!(game.score(), *score);
        assert_eq!(game.undo_depth(), 4);
        assert_eq!(game.redo_depth(), 1);
    }

    #[test]
    fn undo_then_redo_round_trips_for_every_depth_up_to_five() {
        let mut game = fresh_game(2);
        for i in 0..5 {
            game.shift(Direction::ALL[i % 4]);
            game.spawn();
        }

        for _ in 0..5 {
            let before = (game.board().clone(), game.score());
            assert!(game.undo());
            assert!(game.redo());
            assert_eq!(game.board(), &before.0);
            assert_eq!(game.score(), before.1);
            assert!(game.undo());
        }
    }

    #[test]
    fn new_move_invalidates_redo() {
        let mut game = fresh_game(3);
        game.move_left();
        game.spawn();
        game.move_right();

        assert!(game.undo());
        assert_eq!(game.redo_depth(), 1);

        game.move_up();
        assert_eq!(game.redo_depth(), 0);
        assert!(!game.redo());
    }

    #[test]
    fn undo_reverts_past_a_spawn() {
        let mut game = fresh_game(4);
        let opening = game.board().clone();

        game.move_down();
        game.spawn();
        assert!(game.undo());
        assert_eq!(game.board(), &opening);
    }
}

mod terminal_conditions {
    use super::*;
    use twenty48_engine::{has_won, is_game_over};

    #[test]
    fn win_iff_threshold_tile_exists() {
        let mut board = Board::new();
        assert!(!has_won(&board, 2048));
        board.put(3, 0, 2048).unwrap();
        assert!(has_won(&board, 2048));
    }

    #[test]
    fn full_board_without_adjacent_pairs_is_over() {
        let mut board = Board::new();
        let rows: [[u32; 4]; 4] = [
            [2, 4, 2, 4],
            [8, 16, 8, 16],
            [2, 4, 2, 4],
            [8, 16, 8, 16],
        ];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.put(row as u8, col as u8, value).unwrap();
            }
        }
        assert!(is_game_over(&board));

        board.remove(1, 1);
        assert!(!is_game_over(&board));
    }

    #[test]
    fn fresh_game_is_not_terminal() {
        let game = fresh_game(5);
        assert!(!game.has_won());
        assert!(!game.is_game_over());
    }
}
