//! Board rendering for the Pente GUI

use crate::{Board, Cell, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

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
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        accepts_input: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_checkers(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = !board.is_occupied(board_pos);
                    let hover_color = if is_valid { hover_valid() } else { hover_invalid() };
                    let center = self.board_to_screen(board_pos);
                    painter.circle_filled(center, self.cell_size * CHECKER_RADIUS_RATIO, hover_color);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 8x8 grid lines
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
        for (x, y) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels: x along the top, y down the left side
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let top = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + 14.0);
            painter.text(top, egui::Align2::CENTER_CENTER, i, font.clone(), GRID_LINE);

            let left = Pos2::new(self.board_rect.min.x + 14.0, self.board_rect.min.y + offset);
            painter.text(left, egui::Align2::CENTER_CENTER, i, font.clone(), GRID_LINE);
        }
    }

    fn draw_checkers(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            let cell = board.get(pos);
            if cell != Cell::Empty {
                self.draw_checker(painter, pos, cell);
            }
        }
    }

    /// Draw a single checker with visual polish
    fn draw_checker(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * CHECKER_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match cell {
            Cell::Computer => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, COMPUTER_CHECKER);

                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, COMPUTER_CHECKER_HIGHLIGHT);
            }
            Cell::Player => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, PLAYER_CHECKER);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, PLAYER_CHECKER_SHADOW));
            }
            Cell::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        for pos in line {
            let center = self.board_to_screen(*pos);
            let radius = self.cell_size * CHECKER_RADIUS_RATIO + 3.0;
            painter.circle_stroke(center, radius, stroke);
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        Pos::checked(x.floor() as i32, y.floor() as i32)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
