use common::games::tictactoe::{Mark, ScoreTally};
use eframe::egui;

use crate::colors::{mark_background, mark_color};

pub fn render_score_panel(ui: &mut egui::Ui, score: &ScoreTally) {
    ui.columns(3, |columns| {
        render_score_box(&mut columns[0], "X", score.wins_for(Mark::X), Mark::X);
        render_score_box(&mut columns[1], "Draw", score.draws, Mark::Empty);
        render_score_box(&mut columns[2], "O", score.wins_for(Mark::O), Mark::O);
    });
}

fn render_score_box(ui: &mut egui::Ui, title: &str, value: u32, mark: Mark) {
    egui::Frame::group(ui.style())
        .fill(mark_background(mark))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(title).strong().color(mark_color(mark)));
                ui.label(egui::RichText::new(value.to_string()).size(24.0).strong());
            });
        });
}
