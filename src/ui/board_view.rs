//! Board rendering and pointer mapping for the Gomoku GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{GameSnapshot, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// Nearest intersection to a point given relative to the board's top-left
/// corner, or `None` when it rounds to a cell off the grid.
pub fn pixel_to_grid(offset: Vec2, margin: f32, cell_size: f32) -> Option<Pos> {
    if cell_size <= 0.0 {
        return None;
    }
    let col = ((offset.x - margin) / cell_size).round();
    let row = ((offset.y - margin) / cell_size).round();
    if !row.is_finite() || !col.is_finite() {
        return None;
    }
    Pos::try_new(row as i32, col as i32)
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the snapshot and return the clicked intersection, if any.
    ///
    /// Clicks on occupied cells are still reported; the game decides.
    pub fn show(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, snapshot);

        if let Some(pos) = snapshot.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = &snapshot.winning_line {
            self.draw_winning_line(&painter, line);
        }

        if snapshot.is_over {
            return None;
        }

        let hovered = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        if snapshot.board.is_empty(hovered) {
            self.draw_hover_preview(&painter, hovered, snapshot.current_player);
        }

        if response.clicked() {
            Some(hovered)
        } else {
            None
        }
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters along the top, row numbers down the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for i in 0..BOARD_SIZE {
            let letter = (b'A' + i as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + i as f32 * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.4);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);

            let y = self.board_rect.min.y + BOARD_MARGIN + i as f32 * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.4, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, i + 1, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, snapshot: &GameSnapshot) {
        for (r, row) in snapshot.board.rows().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(stone) = cell {
                    self.draw_stone(painter, Pos::new(r as u8, c as u8), *stone);
                }
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, stone_shadow());

        match stone {
            Stone::Black => {
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius, Stroke::new(1.0, WHITE_STONE_SHADOW));
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Connect the run end to end and ring every stone in it
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, hover_preview(turn));
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        pixel_to_grid(screen_pos - self.board_rect.min, BOARD_MARGIN, self.cell_size)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARGIN: f32 = 30.0;
    const CELL: f32 = 40.0;

    #[test]
    fn test_exact_intersections() {
        assert_eq!(pixel_to_grid(Vec2::new(30.0, 30.0), MARGIN, CELL), Some(Pos::new(0, 0)));
        // x is the column, y is the row
        assert_eq!(pixel_to_grid(Vec2::new(70.0, 150.0), MARGIN, CELL), Some(Pos::new(3, 1)));
        assert_eq!(pixel_to_grid(Vec2::new(590.0, 590.0), MARGIN, CELL), Some(Pos::new(14, 14)));
    }

    #[test]
    fn test_snaps_to_nearest() {
        assert_eq!(pixel_to_grid(Vec2::new(49.0, 30.0), MARGIN, CELL), Some(Pos::new(0, 0)));
        assert_eq!(pixel_to_grid(Vec2::new(51.0, 30.0), MARGIN, CELL), Some(Pos::new(0, 1)));
        assert_eq!(pixel_to_grid(Vec2::new(12.0, 15.0), MARGIN, CELL), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_outside_board() {
        assert_eq!(pixel_to_grid(Vec2::new(5.0, 30.0), MARGIN, CELL), None);
        assert_eq!(pixel_to_grid(Vec2::new(30.0, 615.0), MARGIN, CELL), None);
        assert_eq!(pixel_to_grid(Vec2::new(-100.0, -100.0), MARGIN, CELL), None);
    }

    #[test]
    fn test_degenerate_cell_size() {
        assert_eq!(pixel_to_grid(Vec2::new(30.0, 30.0), MARGIN, 0.0), None);
        assert_eq!(pixel_to_grid(Vec2::new(f32::NAN, 30.0), MARGIN, CELL), None);
    }

    #[test]
    fn test_board_to_screen_round_trips_through_mapper() {
        let view = BoardView {
            cell_size: CELL,
            board_rect: Rect::from_min_size(Pos2::new(100.0, 50.0), Vec2::splat(620.0)),
        };
        let pos = Pos::new(11, 3);
        assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
    }
}
