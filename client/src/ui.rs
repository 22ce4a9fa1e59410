use common::games::tictactoe::{GameStatus, TicTacToeGameState};
use eframe::egui;

use crate::colors::{self, mark_color};
use crate::config::Config;
use crate::game_ui::{render_score_panel, BoardUi};
use crate::state::{GameCommand, GameSession};

pub struct TicTacToeApp {
    session: GameSession,
    board_ui: BoardUi,
    show_turn_indicator: bool,
}

impl TicTacToeApp {
    pub fn new(config: &Config) -> Self {
        Self {
            session: GameSession::new(),
            board_ui: BoardUi::new(config.board.cell_size),
            show_turn_indicator: config.board.show_turn_indicator,
        }
    }

    fn render_status(&self, ui: &mut egui::Ui, state: &TicTacToeGameState) {
        let status = state.status();
        let color = match status.winner() {
            Some(mark) => mark_color(mark),
            None if status == GameStatus::Draw => colors::DRAW_TEXT,
            None => mark_color(state.current_mark()),
        };
        ui.label(
            egui::RichText::new(state.status_text())
                .size(20.0)
                .strong()
                .color(color),
        );
    }

    fn render_controls(&self, ui: &mut egui::Ui) {
        let command_tx = self.session.command_sender();
        ui.horizontal(|ui| {
            if ui.button("Play again").clicked() {
                let _ = command_tx.send(GameCommand::ResetGame);
            }
            if ui.button("Reset score").clicked() {
                let _ = command_tx.send(GameCommand::ResetScore);
            }
        });
    }

    fn render_turn_indicator(&self, ui: &mut egui::Ui, state: &TicTacToeGameState) {
        if !self.show_turn_indicator {
            return;
        }
        if let Some(mark) = state.turn_indicator() {
            ui.horizontal(|ui| {
                ui.label("Turn:");
                ui.label(egui::RichText::new(mark.symbol()).strong().color(mark_color(mark)));
            });
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = *self.session.state();
        let command_tx = self.session.command_sender();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Tic Tac Toe");
                self.render_status(ui, &state);
                ui.add_space(12.0);

                render_score_panel(ui, &state.score());
                ui.add_space(12.0);

                self.board_ui.render(ui, &state, &command_tx);
                ui.add_space(12.0);

                self.render_controls(ui);
                ui.add_space(8.0);

                self.render_turn_indicator(ui, &state);
            });
        });

        if self.session.process_pending() > 0 {
            ctx.request_repaint();
        }
    }
}
