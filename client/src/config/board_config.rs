use common::config::{check_range, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub cell_size: f32,
    #[serde(default = "default_show_turn_indicator")]
    pub show_turn_indicator: bool,
}

fn default_show_turn_indicator() -> bool {
    true
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        check_range("board.cell_size", self.cell_size, 40.0, 200.0)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_size: 96.0,
            show_turn_indicator: default_show_turn_indicator(),
        }
    }
}
