//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(240, 230, 210);
pub const GRID_LINE: Color32 = Color32::from_rgb(92, 64, 51);
pub const STAR_POINT: Color32 = Color32::from_rgb(92, 64, 51);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(26, 26, 26);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(74, 74, 74);
pub const WHITE_STONE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(204, 204, 204);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_BLACK: Color32 = Color32::from_rgb(60, 60, 65);
pub const STATUS_WHITE: Color32 = Color32::from_rgb(220, 220, 225);
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARN: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 30.0;
pub const STONE_RADIUS_RATIO: f32 = 0.4;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

// Star point positions (0-indexed): four corner stars and the center
pub const STAR_POINTS: [(u8, u8); 5] = [(3, 3), (3, 11), (11, 3), (11, 11), (7, 7)];

pub fn hover_preview(turn: crate::Stone) -> Color32 {
    match turn {
        crate::Stone::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
        crate::Stone::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
    }
}

pub fn stone_shadow() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 50)
}
