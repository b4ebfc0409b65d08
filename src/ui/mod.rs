//! GUI module for the Üç Taş game
//!
//! Thin egui/eframe front end over [`crate::session::GameSession`].

mod app;
mod board_view;
mod theme;

pub use app::UcTasApp;
pub use board_view::nearest_point;
