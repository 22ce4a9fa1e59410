use common::games::tictactoe::Mark;
use eframe::egui;

pub const BOARD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(250, 250, 250);
pub const GRID_LINE: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);
pub const WINNING_CELL: egui::Color32 = egui::Color32::from_rgb(187, 247, 208);
pub const HOVER_CELL: egui::Color32 = egui::Color32::from_rgba_premultiplied(60, 90, 150, 40);
pub const DRAW_TEXT: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);

pub fn mark_color(mark: Mark) -> egui::Color32 {
    match mark {
        Mark::X => egui::Color32::from_rgb(37, 99, 235),
        Mark::O => egui::Color32::from_rgb(239, 68, 68),
        Mark::Empty => DRAW_TEXT,
    }
}

/// Pale background used behind each mark's score box.
pub fn mark_background(mark: Mark) -> egui::Color32 {
    match mark {
        Mark::X => egui::Color32::from_rgb(219, 234, 254),
        Mark::O => egui::Color32::from_rgb(254, 226, 226),
        Mark::Empty => egui::Color32::from_rgb(243, 244, 246),
    }
}
