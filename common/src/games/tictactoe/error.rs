use derive_more::{Display, Error};

/// Rejections that indicate a caller bug rather than a player action.
///
/// Clicking an occupied cell or playing after the game ended are not errors;
/// they are reported through [`super::MoveResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("Cell index {index} is out of range 0..9")]
    InvalidIndex { index: usize },
}
