//! Free-style Gomoku rule engine
//!
//! Rules implemented:
//! - 15x15 board, Black moves first
//! - Players alternate placing one stone on an empty intersection
//! - Five or more in a row (horizontal, vertical, diagonal) wins; overlines count
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection for the stone just played
//! - [`game`]: Session state machine owning board, turn and result
//! - [`cli`]: Command-line options for the GUI binary
//! - [`ui`]: egui front end consuming [`GameSnapshot`]s
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, MoveOutcome, Stone};
//!
//! let mut game = Game::new();
//! for col in 0..4 {
//!     game.apply_move(7, col).unwrap(); // Black
//!     game.apply_move(8, col).unwrap(); // White
//! }
//! let outcome = game.apply_move(7, 4).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Win { winner: Stone::Black, .. }));
//!
//! let snapshot = game.snapshot();
//! assert!(snapshot.is_over);
//! assert_eq!(snapshot.winner, Some(Stone::Black));
//! ```

pub mod board;
pub mod cli;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use game::{Game, GameSnapshot, GameStatus, MoveError, MoveOutcome, Outcome};
pub use rules::WIN_LENGTH;
