mod board;
mod error;
mod game_state;
mod score;
mod types;
mod win_detector;

pub use board::{Board, BOARD_CELLS, BOARD_SIDE};
pub use error::MoveError;
pub use game_state::{MoveResult, TicTacToeGameState, Transition};
pub use score::ScoreTally;
pub use types::{GameStatus, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate, WIN_LINES};
