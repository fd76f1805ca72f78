use super::board::{BOARD_SIZE, Board};
use super::types::{LineKind, Player, Position, WinningLine};

const WIN_SUM: i32 = BOARD_SIZE as i32;

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// Scans the main diagonal, the anti-diagonal, every row and every column,
/// in that order, and reports the first line whose sum is +3 or -3.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    lines(board).into_iter().find_map(|(kind, cells)| {
        let sum = line_sum(board, &cells);
        match sum {
            WIN_SUM => Some(WinningLine::new(Player::One, kind)),
            s if s == -WIN_SUM => Some(WinningLine::new(Player::Two, kind)),
            _ => None,
        }
    })
}

fn line_sum(board: &Board, cells: &[Position]) -> i32 {
    cells.iter().map(|&pos| board.at(pos).value()).sum()
}

fn lines(board: &Board) -> Vec<(LineKind, Vec<Position>)> {
    let width = board.width();
    let height = board.height();
    let mut lines = Vec::with_capacity(2 + width + height);

    lines.push((
        LineKind::MainDiagonal,
        (0..width.min(height)).map(|i| Position::new(i, i)).collect(),
    ));
    lines.push((
        LineKind::AntiDiagonal,
        (0..width.min(height))
            .map(|i| Position::new(i, height - i - 1))
            .collect(),
    ));

    for y in 0..height {
        lines.push((LineKind::Row(y), (0..width).map(|x| Position::new(x, y)).collect()));
    }
    for x in 0..width {
        lines.push((LineKind::Column(x), (0..height).map(|y| Position::new(x, y)).collect()));
    }

    lines
}
