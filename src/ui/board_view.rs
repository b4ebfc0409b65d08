//! Board rendering and click mapping

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Cell, Point, BOARD_SIZE};
use crate::rules::WIN_LINES;
use crate::session::GameSession;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Distance between neighbouring points
    spacing: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            spacing: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked point, if any
    pub fn show(&mut self, ui: &mut egui::Ui, session: &GameSession) -> Option<Point> {
        let available = ui.available_size();
        let side = available.x.min(available.y);
        self.spacing = (side - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_pieces(&painter, session);

        if let Some(line) = session.winning_line() {
            self.draw_winning_line(&painter, &line);
        }

        if session.is_over() || !response.clicked() {
            return None;
        }
        response
            .interact_pointer_pos()
            .and_then(|pos| nearest_point(pos - self.board_rect.min, self.spacing))
    }

    /// Rows and columns; these are also the only lines pieces move along
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        for line in WIN_LINES {
            painter.line_segment(
                [self.point_to_screen(line[0]), self.point_to_screen(line[2])],
                stroke,
            );
        }
        for point in Point::ALL {
            painter.circle_filled(self.point_to_screen(point), POINT_RADIUS, GRID_LINE);
        }
    }

    fn draw_pieces(&self, painter: &Painter, session: &GameSession) {
        let board = session.board();
        for point in Point::ALL {
            let color = match board.get(point) {
                Cell::Empty => continue,
                Cell::Human => HUMAN_PIECE,
                Cell::Computer => COMPUTER_PIECE,
            };
            let center = self.point_to_screen(point);
            painter.circle_filled(center, PIECE_RADIUS, color);

            if session.selected() == Some(point) {
                painter.circle_stroke(
                    center,
                    PIECE_RADIUS + SELECTION_WIDTH,
                    Stroke::new(SELECTION_WIDTH, SELECTION),
                );
            }
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Point; 3]) {
        painter.line_segment(
            [self.point_to_screen(line[0]), self.point_to_screen(line[2])],
            Stroke::new(GRID_LINE_WIDTH * 2.0, WIN_HIGHLIGHT),
        );
    }

    fn point_to_screen(&self, point: Point) -> Pos2 {
        self.board_rect.min + point_offset(point, self.spacing)
    }
}

/// Offset of a point from the board's top-left corner
fn point_offset(point: Point, spacing: f32) -> Vec2 {
    Vec2::new(
        BOARD_MARGIN + point.col() as f32 * spacing,
        BOARD_MARGIN + point.row() as f32 * spacing,
    )
}

/// Map an offset inside the board to the closest point, if it lies within
/// [`PICK_RADIUS`] of it
pub fn nearest_point(offset: Vec2, spacing: f32) -> Option<Point> {
    Point::ALL
        .into_iter()
        .map(|p| (p, (point_offset(p, spacing) - offset).length_sq()))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .filter(|&(_, d2)| d2 <= PICK_RADIUS * PICK_RADIUS)
        .map(|(p, _)| p)
}
