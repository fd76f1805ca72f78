mod board;
mod error;
mod game_state;
mod input;
mod render;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board};
pub use error::{BoardError, MoveError, SessionError};
pub use game_state::TicTacToeGameState;
pub use input::TokenReader;
pub use render::render_board;
pub use session::{TicTacToeSession, run_game};
pub use settings::TicTacToeSessionSettings;
pub use types::{Cell, GameStatus, LineKind, Player, Position, RenderStyle, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
