//! GUI module for the Gomoku game
//!
//! A thin egui/eframe front end: it renders [`crate::GameSnapshot`]s, maps
//! pointer positions to intersections and forwards them to [`crate::Game`].

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
pub use board_view::pixel_to_grid;
