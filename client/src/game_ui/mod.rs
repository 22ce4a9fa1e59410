mod board;
mod score_panel;

pub use board::BoardUi;
pub use score_panel::render_score_panel;
