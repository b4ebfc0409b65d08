//! Theme constants for the Üç Taş GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 245, 245);
pub const GRID_LINE: Color32 = Color32::from_rgb(40, 40, 40);

// Piece colors
pub const HUMAN_PIECE: Color32 = Color32::from_rgb(22, 155, 98);
pub const COMPUTER_PIECE: Color32 = Color32::from_rgb(180, 35, 35);

// Markers
pub const SELECTION: Color32 = Color32::from_rgb(30, 120, 200);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(240, 190, 40);

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(20, 20, 20);
pub const TEXT_ERROR: Color32 = Color32::from_rgb(200, 60, 40);

// Sizes
pub const BOARD_MARGIN: f32 = 60.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const POINT_RADIUS: f32 = 8.0;
pub const PIECE_RADIUS: f32 = 28.0;
pub const SELECTION_WIDTH: f32 = 4.0;
/// Clicks farther than this from every point are ignored
pub const PICK_RADIUS: f32 = 40.0;
