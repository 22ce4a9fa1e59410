use common::games::tictactoe::{Board, Mark, TicTacToeGameState, BOARD_CELLS, BOARD_SIDE};
use eframe::egui;
use tokio::sync::mpsc;

use crate::colors::{self, mark_color};
use crate::state::GameCommand;

/// Maps a pointer position to a row-major cell index.
pub fn cell_index_at(board_rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<usize> {
    if !board_rect.contains(pos) || cell_size <= 0.0 {
        return None;
    }
    let col = ((pos.x - board_rect.left()) / cell_size) as usize;
    let row = ((pos.y - board_rect.top()) / cell_size) as usize;
    if col >= BOARD_SIDE || row >= BOARD_SIDE {
        return None;
    }
    Some(row * BOARD_SIDE + col)
}

pub struct BoardUi {
    cell_size: f32,
}

impl BoardUi {
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 6.0;

    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    fn cell_rect(&self, board_rect: egui::Rect, index: usize) -> egui::Rect {
        let (col, row) = Board::position_of(index);
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * self.cell_size,
                board_rect.top() + row as f32 * self.cell_size,
            ),
            egui::vec2(self.cell_size, self.cell_size),
        )
    }

    pub fn render(
        &self,
        ui: &mut egui::Ui,
        state: &TicTacToeGameState,
        command_tx: &mpsc::UnboundedSender<GameCommand>,
    ) {
        let side = self.cell_size * BOARD_SIDE as f32;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, colors::BOARD_BACKGROUND);

        for index in 0..BOARD_CELLS {
            if state.is_winning_cell(index) {
                painter.rect_filled(self.cell_rect(rect, index), 0.0, colors::WINNING_CELL);
            }
        }

        let hovered = response
            .hover_pos()
            .and_then(|pos| cell_index_at(rect, self.cell_size, pos))
            .filter(|&index| state.is_cell_playable(index));

        if let Some(index) = hovered {
            painter.rect_filled(self.cell_rect(rect, index), 0.0, colors::HOVER_CELL);
        }

        let stroke = egui::Stroke::new(Self::LINE_WIDTH, colors::GRID_LINE);
        for i in 1..BOARD_SIDE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
        }

        for (index, &mark) in state.board().cells().iter().enumerate() {
            let cell_rect = self.cell_rect(rect, index);
            match mark {
                Mark::X => self.draw_x(painter, cell_rect),
                Mark::O => self.draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if response.clicked()
            && let Some(index) = hovered
        {
            let _ = command_tx.send(GameCommand::PlaceMark { index });
        }
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.25;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, mark_color(Mark::X));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let radius = rect.width() / 2.0 - rect.width() * 0.25;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, mark_color(Mark::O));
        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_cell_index_at_corners() {
        let rect = board_rect();
        assert_eq!(cell_index_at(rect, 100.0, egui::pos2(11.0, 21.0)), Some(0));
        assert_eq!(cell_index_at(rect, 100.0, egui::pos2(305.0, 21.0)), Some(2));
        assert_eq!(cell_index_at(rect, 100.0, egui::pos2(160.0, 170.0)), Some(4));
        assert_eq!(cell_index_at(rect, 100.0, egui::pos2(309.0, 319.0)), Some(8));
    }

    #[test]
    fn test_cell_index_at_outside_board() {
        let rect = board_rect();
        assert_eq!(cell_index_at(rect, 100.0, egui::pos2(5.0, 50.0)), None);
        assert_eq!(cell_index_at(rect, 100.0, egui::pos2(50.0, 400.0)), None);
    }

    #[test]
    fn test_cell_index_at_far_edge_stays_in_range() {
        let rect = board_rect();
        assert_eq!(cell_index_at(rect, 100.0, egui::pos2(310.0, 320.0)), None);
    }
}
