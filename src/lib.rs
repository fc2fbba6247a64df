//! Chess rules engine: board state, legal-move enumeration, move
//! execution (castling, en passant, promotion), and game-status
//! classification. Presentation is someone else's job - this crate ends
//! at "is this move legal", "perform this move", and "what is the game's
//! status now".
//!
//! # Example
//! ```
//! use chess_rules::{Game, GameStatus, Square};
//!
//! let mut game = Game::new();
//! let from: Square = "e2".parse().unwrap();
//! let to: Square = "e4".parse().unwrap();
//! let outcome = game.attempt_move(from, to);
//! assert!(outcome.applied);
//! assert_eq!(outcome.status, GameStatus::Normal);
//! ```

pub mod board;
pub mod game;

pub use board::{
    Board, BoardBuilder, Color, GameStatus, MoveOutcome, Piece, PieceKind, PromotionError, Square,
    SquareError,
};
pub use game::Game;
