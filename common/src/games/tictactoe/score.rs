use super::types::{GameStatus, Mark};

/// Running totals for one session. Only a score reset zeroes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
            Mark::Empty => 0,
        }
    }

    /// Returns the tally with the counter for `status` bumped. Non-terminal
    /// statuses leave it unchanged.
    pub fn record(&self, status: GameStatus) -> ScoreTally {
        let mut next = *self;
        match status {
            GameStatus::XWon => next.x_wins = next.x_wins.saturating_add(1),
            GameStatus::OWon => next.o_wins = next.o_wins.saturating_add(1),
            GameStatus::Draw => next.draws = next.draws.saturating_add(1),
            GameStatus::InProgress => {}
        }
        next
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_bumps_matching_counter() {
        let score = ScoreTally::new()
            .record(GameStatus::XWon)
            .record(GameStatus::XWon)
            .record(GameStatus::OWon)
            .record(GameStatus::Draw);
        assert_eq!(
            score,
            ScoreTally {
                x_wins: 2,
                o_wins: 1,
                draws: 1
            }
        );
        assert_eq!(score.wins_for(Mark::X), 2);
        assert_eq!(score.games_played(), 4);
    }

    #[test]
    fn test_record_in_progress_is_noop() {
        let score = ScoreTally::new().record(GameStatus::InProgress);
        assert_eq!(score, ScoreTally::new());
    }
}
