//! Static evaluation of a position from one side's point of view.

use crate::game::{Board, Player, Window, CENTER_COL};

const FOUR_SCORE: i64 = 100;
const THREE_SCORE: i64 = 5;
const TWO_SCORE: i64 = 2;
const OPPONENT_THREE_PENALTY: i64 = -4;
const CENTER_SCORE: i64 = 3;

/// Score one window for `player`. At most one pattern can match.
pub fn score_window(window: &Window, player: Player) -> i64 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();

    let mut own = 0;
    let mut opp = 0;
    let mut empty = 0;
    for &cell in window {
        match cell {
            c if c == own_cell => own += 1,
            c if c == opp_cell => opp += 1,
            _ => empty += 1,
        }
    }

    match (own, opp, empty) {
        (4, _, _) => FOUR_SCORE,
        (3, _, 1) => THREE_SCORE,
        (2, _, 2) => TWO_SCORE,
        (_, 3, 1) => OPPONENT_THREE_PENALTY,
        _ => 0,
    }
}

/// Sum of every window's score plus a bonus per own piece in the center
/// column.
pub fn score_position(board: &Board, player: Player) -> i64 {
    let own_cell = player.to_cell();
    let center = board.column(CENTER_COL).filter(|&c| c == own_cell).count() as i64;

    let windows: i64 = board
        .windows()
        .map(|window| score_window(&window, player))
        .sum();

    center * CENTER_SCORE + windows
}
