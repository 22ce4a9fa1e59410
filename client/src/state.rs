use common::games::tictactoe::{MoveError, MoveResult, TicTacToeGameState};
use common::log;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    PlaceMark { index: usize },
    ResetGame,
    ResetScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Move(MoveResult),
    GameReset,
    ScoreReset,
}

pub fn apply_command(
    state: &TicTacToeGameState,
    command: GameCommand,
) -> Result<(TicTacToeGameState, CommandOutcome), MoveError> {
    match command {
        GameCommand::PlaceMark { index } => {
            let transition = state.attempt_move(index)?;
            Ok((transition.state, CommandOutcome::Move(transition.result)))
        }
        GameCommand::ResetGame => Ok((state.reset_game(), CommandOutcome::GameReset)),
        GameCommand::ResetScore => Ok((state.reset_score(), CommandOutcome::ScoreReset)),
    }
}

/// Owns the current snapshot. Widgets only get a sender; commands are applied
/// in arrival order when the frame calls [`GameSession::process_pending`].
pub struct GameSession {
    state: TicTacToeGameState,
    command_tx: mpsc::UnboundedSender<GameCommand>,
    command_rx: mpsc::UnboundedReceiver<GameCommand>,
}

impl GameSession {
    pub fn new() -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        Self {
            state: TicTacToeGameState::new(),
            command_tx,
            command_rx,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn command_sender(&self) -> mpsc::UnboundedSender<GameCommand> {
        self.command_tx.clone()
    }

    /// Applies every queued command and returns how many changed the snapshot.
    pub fn process_pending(&mut self) -> usize {
        let mut changed = 0;

        while let Ok(command) = self.command_rx.try_recv() {
            match apply_command(&self.state, command) {
                Ok((next, outcome)) => {
                    if next != self.state {
                        changed += 1;
                    }
                    log_outcome(command, outcome, &next);
                    self.state = next;
                }
                Err(e) => {
                    log!("Dropped {:?}: {}", command, e);
                }
            }
        }

        changed
    }
}

fn log_outcome(command: GameCommand, outcome: CommandOutcome, state: &TicTacToeGameState) {
    match outcome {
        CommandOutcome::Move(MoveResult::Won(mark)) => {
            let score = state.score();
            log!(
                "{} wins game {}, score X {} / O {} / draws {}",
                mark,
                score.games_played(),
                score.x_wins,
                score.o_wins,
                score.draws
            );
        }
        CommandOutcome::Move(MoveResult::Drawn) => {
            log!("Draw, total draws {}", state.score().draws);
        }
        CommandOutcome::Move(result) if !result.is_accepted() => {
            log!("Ignored {:?}: {:?}", command, result);
        }
        CommandOutcome::Move(_) => {}
        CommandOutcome::GameReset => log!("Board cleared"),
        CommandOutcome::ScoreReset => log!("Score and board cleared"),
    }
}
