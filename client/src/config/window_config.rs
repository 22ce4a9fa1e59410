use common::config::{check_range, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        check_range("window.width", self.width, 200.0, 4000.0)?;
        check_range("window.height", self.height, 200.0, 4000.0)?;
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 620.0,
        }
    }
}
