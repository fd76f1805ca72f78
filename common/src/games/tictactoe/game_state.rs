use super::board::Board;
use super::error::MoveError;
use super::types::{Cell, GameStatus, Player, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: Player,
    pub turn: usize,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            current_player: Player::One,
            turn: 0,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Places the current player's mark. A rejected move leaves the turn with
    /// the same player.
    pub fn place_mark(&mut self, x: isize, y: isize) -> Result<GameStatus, MoveError> {
        if self.status.is_finished() {
            return Err(MoveError::GameOver);
        }

        if self.board.get(x, y)? != Cell::Empty {
            return Err(MoveError::CellOccupied { x, y });
        }

        self.board.set(x, y, self.current_player.to_cell())?;
        self.turn += 1;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.other();
        }

        Ok(self.status)
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = match line.player {
                Player::One => GameStatus::PlayerOneWon,
                Player::Two => GameStatus::PlayerTwoWon,
            };
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns to a fresh game on the same board instance.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.turn = 0;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
    }
}
