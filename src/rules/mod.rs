//! Game rules for free-style Gomoku
//!
//! The only rule beyond occupancy is the win condition: five or more stones
//! of one color in a row, horizontally, vertically or diagonally.

pub mod win;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

// Re-exports for convenient access
pub use win::{has_five_at_pos, run_length, winning_line, DIRECTIONS};
