//! Board engine behaviour over whole games.
//!
//! Covers the selection rules, the sowing walk, the end-of-game sweep,
//! and seed conservation over random legal move sequences.

use kalah::core::{Board, Player, PIT_COUNT};
use kalah::rules::{GamePhase, GameResult, Kalah};
use proptest::prelude::*;

/// Play `choices` against the engine, picking among legal moves, until
/// the game ends or the choices run out. Checks invariants after every move.
fn play_out(game: &mut Kalah, choices: &[usize]) {
    let initial_total = game.board().total();

    for &choice in choices {
        if game.check_game_over() {
            break;
        }
        let legal = game.legal_moves();
        assert!(!legal.is_empty(), "side with seeds must have a legal move");

        let pit = legal[choice % legal.len()];
        let mover = game.turn();
        let opponent_store = game.board().store(mover.opponent());
        let outcome = game.take_turn(pit).expect("legal move rejected");

        assert_eq!(outcome.player, mover);
        assert_ne!(outcome.last_pit, mover.opponent().store());
        assert_eq!(game.board().store(mover.opponent()), opponent_store);
        assert_eq!(outcome.extra_turn, outcome.last_pit == mover.store());
        if outcome.extra_turn {
            assert_eq!(game.turn(), mover);
        } else {
            assert_eq!(game.turn(), mover.opponent());
        }
        assert_eq!(game.board().total(), initial_total);
    }
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_out_of_range_and_store_selections() {
    let game = Kalah::new();
    assert!(!game.is_valid_selection(-1));
    assert!(!game.is_valid_selection(14));
    assert!(!game.is_valid_selection(6));
    assert!(!game.is_valid_selection(13));
}

#[test]
fn test_fresh_game_selections() {
    let game = Kalah::new();
    for index in 0..=5 {
        assert!(game.is_valid_selection(index), "pit {} should be playable", index);
    }
    for index in 7..=12 {
        assert!(!game.is_valid_selection(index), "pit {} belongs to Player 2", index);
    }
}

#[test]
fn test_emptied_pit_cannot_be_selected() {
    let mut game = Kalah::new();
    game.take_turn(0).unwrap();
    assert!(!game.is_valid_selection(0));
}

#[test]
fn test_empty_opponent_pit_after_exchange() {
    // Player 1 sows pit 2 (passing the turn), Player 2 sows pit 9
    let mut game = Kalah::new();
    game.take_turn(1).unwrap();
    game.take_turn(8).unwrap();

    assert_eq!(game.board().get(8), Some(0));
    assert!(!game.is_valid_selection(8));
}

// =============================================================================
// Sowing
// =============================================================================

#[test]
fn test_first_pit_ends_in_own_store() {
    let mut game = Kalah::new();
    let outcome = game.take_turn(0).unwrap();

    for index in 1..=6 {
        assert_eq!(game.board().get(index), Some(if index == 6 { 1 } else { 7 }));
    }
    assert_eq!(outcome.last_pit, 6);
    assert_eq!(game.turn(), Player::One);
}

#[test]
fn test_crossing_opponent_store_lands_one_further() {
    let mut pits = [0; PIT_COUNT];
    pits[3] = 11;
    pits[8] = 1;
    let mut game = Kalah::from_board(Board::from_pits(pits), Player::One);

    // (3 + 11) % 14 == 0 on a naive walk
    let outcome = game.take_turn(3).unwrap();
    assert_eq!(outcome.last_pit, 1);
    assert_eq!(game.board().store(Player::Two), 0);
    assert_eq!(game.board().store(Player::One), 1);
}

#[test]
fn test_extra_turn_chain() {
    let mut game = Kalah::new();

    // Pit index 0 lands in the store, then index 5 (now 7 seeds) passes the turn
    assert!(game.take_turn(0).unwrap().extra_turn);
    assert!(!game.take_turn(5).unwrap().extra_turn);
    assert_eq!(game.turn(), Player::Two);
    assert_eq!(game.board().store(Player::One), 2);
}

// =============================================================================
// End of game
// =============================================================================

#[test]
fn test_sweep_moves_remaining_side_into_its_store() {
    let board = Board::from_pits([0, 0, 0, 0, 0, 0, 25, 3, 0, 7, 2, 0, 9, 26]);
    let remaining: u32 = 3 + 7 + 2 + 9;
    let mut game = Kalah::from_board(board, Player::One);

    assert!(game.check_game_over());
    assert_eq!(game.board().store(Player::Two), 26 + remaining);
    assert_eq!(game.board().store(Player::One), 25);
    for index in Player::Two.pits() {
        assert_eq!(game.board().get(index), Some(0));
    }
    assert_eq!(game.phase(), GamePhase::Over);
}

#[test]
fn test_second_check_is_a_no_op() {
    let board = Board::from_pits([0, 0, 0, 0, 0, 0, 25, 3, 0, 7, 2, 0, 9, 26]);
    let mut game = Kalah::from_board(board, Player::One);
    assert!(game.check_game_over());
    let swept = *game.board();

    assert!(game.check_game_over());
    assert_eq!(game.board(), &swept);
}

#[test]
fn test_winner_after_sweep() {
    let board = Board::from_pits([0, 0, 0, 0, 0, 0, 25, 3, 0, 7, 2, 0, 9, 26]);
    let mut game = Kalah::from_board(board, Player::One);
    game.check_game_over();

    assert_eq!(game.calculate_winner(), GameResult::Winner(Player::Two));
}

#[test]
fn test_winner_by_store_comparison() {
    let mut pits = [0; PIT_COUNT];
    pits[6] = 10;
    pits[13] = 4;
    let game = Kalah::from_board(Board::from_pits(pits), Player::One);
    assert_eq!(game.calculate_winner(), GameResult::Winner(Player::One));

    pits[13] = 10;
    let game = Kalah::from_board(Board::from_pits(pits), Player::Two);
    assert_eq!(game.calculate_winner(), GameResult::Draw);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_seeds_are_conserved(choices in prop::collection::vec(0usize..6, 0..200)) {
        let mut game = Kalah::new();
        play_out(&mut game, &choices);
        prop_assert_eq!(game.board().total(), 72);

        game.check_game_over();
        prop_assert_eq!(game.board().total(), 72);
    }

    #[test]
    fn prop_finished_game_has_empty_pits(choices in prop::collection::vec(0usize..6, 0..400)) {
        let mut game = Kalah::new();
        play_out(&mut game, &choices);

        if game.check_game_over() {
            prop_assert!(game.is_over());
            prop_assert_eq!(game.board().side_total(Player::One), 0);
            prop_assert_eq!(game.board().side_total(Player::Two), 0);
            prop_assert_eq!(
                game.board().store(Player::One) + game.board().store(Player::Two),
                72
            );
            prop_assert!(game.legal_moves().is_empty());
        } else {
            prop_assert!(!game.legal_moves().is_empty());
        }
    }

    #[test]
    fn prop_rejected_selection_changes_nothing(
        choices in prop::collection::vec(0usize..6, 0..40),
        selection in -3isize..20,
    ) {
        let mut game = Kalah::new();
        play_out(&mut game, &choices);

        let before = game.clone();
        if !game.is_valid_selection(selection) {
            if let Ok(index) = usize::try_from(selection) {
                prop_assert!(game.take_turn(index).is_err());
            }
            prop_assert_eq!(&game, &before);
        }
    }
}
