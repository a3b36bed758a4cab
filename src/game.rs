//! Game session: authoritative board, turn order and terminal state
//!
//! A [`Game`] owns everything about one game. The only mutation is
//! [`Game::apply_move`] (plus a full [`Game::reset`]); callers read state
//! through shared borrows or an owned [`GameSnapshot`].
//!
//! ```
//! use gomoku::{Game, MoveError, Stone};
//!
//! let mut game = Game::new();
//! assert!(game.apply_move(7, 7).is_ok());
//! assert_eq!(game.current_player(), Stone::White);
//!
//! // Occupied, off-board and post-game moves are rejected without effect
//! assert!(matches!(game.apply_move(7, 7), Err(MoveError::Occupied { .. })));
//! assert!(!game.try_move(15, 0));
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Board, Pos, Stone};
use crate::rules::winning_line;

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Five or more in a row; `line` is the full run through the last stone
    Win { winner: Stone, line: Vec<Pos> },
    /// Board filled with no five
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Stone> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }
}

/// Session state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Ended(Outcome),
}

/// Result of an accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on; `next` is now to move
    Continue { next: Stone },
    /// The mover completed five in a row
    Win { winner: Stone, line: Vec<Pos> },
    /// The last empty cell was filled without a five
    Draw,
}

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("Game is already over")]
    GameOver,

    #[display("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[display("{pos} is already occupied")]
    Occupied { pos: Pos },
}

/// Owned, independent copy of a game's observable state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub current_player: Stone,
    pub is_over: bool,
    /// `None` while in progress and after a draw
    pub winner: Option<Stone>,
    pub board: Board,
    pub last_move: Option<Pos>,
    pub winning_line: Option<Vec<Pos>>,
    pub move_count: u32,
}

/// One game of free-style Gomoku
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    first_player: Stone,
    current: Stone,
    status: GameStatus,
    last_move: Option<Pos>,
}

impl Game {
    /// New game, Black to move
    pub fn new() -> Self {
        Self::with_first_player(Stone::Black)
    }

    /// New game with `first` to move. Later resets keep this choice.
    pub fn with_first_player(first: Stone) -> Self {
        Self {
            board: Board::new(),
            first_player: first,
            current: first,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Replace the session with a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_first_player(self.first_player);
        info!(first = %self.first_player, "Game reset");
    }

    /// Reset and change who moves first.
    pub fn reset_with(&mut self, first: Stone) {
        self.first_player = first;
        self.reset();
    }

    /// Validate and play a stone for the current player.
    ///
    /// Checks, in order: game not over, coordinates on the board, cell empty.
    /// On a win or draw the current player is left unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            debug!("Rejected: game over");
            return Err(MoveError::GameOver);
        }

        let pos = Pos::try_new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;

        let color = self.current;
        if !self.board.place_stone(pos, color) {
            debug!(%pos, "Rejected: occupied");
            return Err(MoveError::Occupied { pos });
        }
        self.last_move = Some(pos);

        if let Some(line) = winning_line(&self.board, pos) {
            info!(winner = %color, %pos, run = line.len(), "Five in a row");
            self.status = GameStatus::Ended(Outcome::Win {
                winner: color,
                line: line.clone(),
            });
            return Ok(MoveOutcome::Win {
                winner: color,
                line,
            });
        }

        if self.board.is_full() {
            info!("Board full, game drawn");
            self.status = GameStatus::Ended(Outcome::Draw);
            return Ok(MoveOutcome::Draw);
        }

        self.current = color.opponent();
        debug!(%pos, stone = %color, next = %self.current, "Move accepted");
        Ok(MoveOutcome::Continue { next: self.current })
    }

    /// `apply_move` reduced to accepted / rejected.
    pub fn try_move(&mut self, row: i32, col: i32) -> bool {
        self.apply_move(row, col).is_ok()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            current_player: self.current,
            is_over: self.is_over(),
            winner: self.winner(),
            board: self.board,
            last_move: self.last_move,
            winning_line: self.winning_line().map(<[Pos]>::to_vec),
            move_count: self.move_count(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current
    }

    #[inline]
    pub fn first_player(&self) -> Stone {
        self.first_player
    }

    #[inline]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Ended(_))
    }

    pub fn winner(&self) -> Option<Stone> {
        match &self.status {
            GameStatus::Ended(outcome) => outcome.winner(),
            GameStatus::InProgress => None,
        }
    }

    pub fn winning_line(&self) -> Option<&[Pos]> {
        match &self.status {
            GameStatus::Ended(Outcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn move_count(&self) -> u32 {
        self.board.stone_count()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Play `moves` in order, asserting each is accepted.
    fn play(game: &mut Game, moves: &[(i32, i32)]) {
        for &(r, c) in moves {
            game.apply_move(r, c)
                .unwrap_or_else(|e| panic!("move ({}, {}) rejected: {}", r, c, e));
        }
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new();
        assert_eq!(game.current_player(), Stone::Black);
        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert!(game.board().is_board_empty());
        assert_eq!(game.last_move(), None);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::new();
        let expected = [Stone::Black, Stone::White, Stone::Black, Stone::White, Stone::Black];
        for (i, stone) in expected.iter().enumerate() {
            assert_eq!(game.current_player(), *stone);
            let outcome = game.apply_move(0, i as i32 * 2).unwrap();
            assert_eq!(outcome, MoveOutcome::Continue { next: stone.opponent() });
            assert_eq!(game.board().get(Pos::new(0, i as u8 * 2)), Some(*stone));
        }
    }

    #[test]
    fn test_rejection_order() {
        let mut game = Game::new();
        play(&mut game, &[(7, 7)]);

        assert_eq!(
            game.apply_move(-1, 3),
            Err(MoveError::OutOfBounds { row: -1, col: 3 })
        );
        assert_eq!(
            game.apply_move(7, 7),
            Err(MoveError::Occupied { pos: Pos::new(7, 7) })
        );

        // Black wins; afterwards game-over outranks every other reason
        play(&mut game, &[(0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3), (7, 11)]);
        assert!(game.is_over());
        assert_eq!(game.apply_move(99, 99), Err(MoveError::GameOver));
        assert_eq!(game.apply_move(7, 7), Err(MoveError::GameOver));
        assert_eq!(game.apply_move(1, 1), Err(MoveError::GameOver));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new();
        play(&mut game, &[(3, 3)]);
        let before = game.snapshot();
        assert!(!game.try_move(3, 3));
        assert!(!game.try_move(3, 15));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    fn test_horizontal_win_keeps_winner_current() {
        let mut game = Game::new();
        play(
            &mut game,
            &[(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6), (0, 3)],
        );
        assert!(!game.is_over());

        let outcome = game.apply_move(7, 7).unwrap();
        let expected_line: Vec<Pos> = (3..8).map(|c| Pos::new(7, c)).collect();
        assert_eq!(
            outcome,
            MoveOutcome::Win {
                winner: Stone::Black,
                line: expected_line.clone()
            }
        );
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Stone::Black));
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.winning_line(), Some(expected_line.as_slice()));
    }

    #[test]
    fn test_white_can_win() {
        let mut game = Game::new();
        play(
            &mut game,
            &[(0, 0), (5, 5), (0, 2), (6, 6), (0, 4), (7, 7), (0, 6), (8, 8), (0, 8)],
        );
        let outcome = game.apply_move(9, 9).unwrap();
        assert!(matches!(outcome, MoveOutcome::Win { winner: Stone::White, .. }));
        assert_eq!(game.winner(), Some(Stone::White));
        assert_eq!(game.current_player(), Stone::White);
    }

    #[test]
    fn test_first_player_override_survives_reset() {
        let mut game = Game::with_first_player(Stone::White);
        assert_eq!(game.current_player(), Stone::White);
        play(&mut game, &[(1, 1)]);
        assert_eq!(game.board().get(Pos::new(1, 1)), Some(Stone::White));

        game.reset();
        assert_eq!(game.current_player(), Stone::White);
        assert!(game.board().is_board_empty());

        game.reset_with(Stone::Black);
        assert_eq!(game.first_player(), Stone::Black);
        assert_eq!(game.current_player(), Stone::Black);
    }

    #[test]
    fn test_reset_after_win() {
        let mut game = Game::new();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)]);
        assert!(game.is_over());

        game.reset();
        assert_eq!(game.snapshot(), Game::new().snapshot());
        assert!(game.try_move(0, 0));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut game = Game::new();
        play(&mut game, &[(4, 4)]);
        let mut snap = game.snapshot();
        assert!(snap.board.place_stone(Pos::new(9, 9), Stone::Black));
        assert!(game.board().is_empty(Pos::new(9, 9)));

        play(&mut game, &[(5, 5)]);
        assert!(snap.board.is_empty(Pos::new(5, 5)));
        assert_eq!(snap.move_count, 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
        assert_eq!(
            MoveError::OutOfBounds { row: 15, col: -2 }.to_string(),
            "(15, -2) is off the board"
        );
        assert_eq!(
            MoveError::Occupied { pos: Pos::new(3, 4) }.to_string(),
            "(3, 4) is already occupied"
        );
    }
}
