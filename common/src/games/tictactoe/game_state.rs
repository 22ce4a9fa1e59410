use super::board::{Board, BOARD_CELLS};
use super::error::MoveError;
use super::score::ScoreTally;
use super::types::{GameStatus, Mark, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Placed,
    Won(Mark),
    Drawn,
    CellOccupied,
    GameOver,
}

impl MoveResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Placed | MoveResult::Won(_) | MoveResult::Drawn)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: TicTacToeGameState,
    pub result: MoveResult,
}

/// Immutable snapshot of one session: the current board plus the score that
/// survives between games. Every operation returns a new snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    winning_line: Option<WinningLine>,
    score: ScoreTally,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            winning_line: None,
            score: ScoreTally::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn score(&self) -> ScoreTally {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    pub fn attempt_move(&self, index: usize) -> Result<Transition, MoveError> {
        if !self.board.get(index)?.is_empty() {
            return Ok(self.unchanged(MoveResult::CellOccupied));
        }

        if self.status().is_over() {
            return Ok(self.unchanged(MoveResult::GameOver));
        }

        let board = self.board.with_mark(index, self.current_mark)?;
        let status = evaluate(&board);
        let mut next = Self {
            board,
            score: self.score.record(status),
            ..*self
        };

        let result = match status {
            GameStatus::XWon | GameStatus::OWon => {
                next.winning_line = check_win_with_line(&board);
                MoveResult::Won(self.current_mark)
            }
            GameStatus::Draw => MoveResult::Drawn,
            GameStatus::InProgress => {
                next.current_mark = next_turn(self.current_mark);
                MoveResult::Placed
            }
        };

        Ok(Transition {
            state: next,
            result,
        })
    }

    /// Clears the board for a new game, keeping the score.
    pub fn reset_game(&self) -> Self {
        Self {
            score: self.score,
            ..Self::new()
        }
    }

    pub fn reset_score(&self) -> Self {
        Self {
            score: ScoreTally::new(),
            ..*self
        }
        .reset_game()
    }

    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::XWon | GameStatus::OWon => {
                format!("Winner: {}!", self.current_mark)
            }
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::InProgress if self.moves_played() == 0 => {
                format!("Player {}", self.current_mark)
            }
            GameStatus::InProgress => format!("Turn: {}", self.current_mark),
        }
    }

    /// The mark to show in the turn indicator; gone once the game is over.
    pub fn turn_indicator(&self) -> Option<Mark> {
        if self.status().is_over() {
            None
        } else {
            Some(self.current_mark)
        }
    }

    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(index))
    }

    pub fn is_cell_playable(&self, index: usize) -> bool {
        self.board.get(index).is_ok_and(|cell| cell.is_empty()) && !self.status().is_over()
    }

    pub fn moves_played(&self) -> usize {
        BOARD_CELLS - self.board.empty_cells().len()
    }

    fn unchanged(&self, result: MoveResult) -> Transition {
        Transition {
            state: *self,
            result,
        }
    }
}

fn next_turn(mark: Mark) -> Mark {
    mark.opponent().unwrap_or(Mark::X)
}
