//! Fluent builder for constructing chess positions.
//!
//! Positions are assembled piece by piece; there is no notation-based
//! import in this crate.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square(1, 0), Color::White, PieceKind::Pawn)
//!     .build();
//! ```

use crate::game::Game;

use super::state::EnPassantTarget;
use super::types::{Color, PieceKind, Square};
use super::Board;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, PieceKind, bool)>,
    side_to_move: Color,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// Create a builder holding the standard initial arrangement.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            builder
                .pieces
                .push((Square(0, file), Color::White, kind, false));
            builder
                .pieces
                .push((Square(7, file), Color::Black, kind, false));
        }
        for file in 0..8 {
            builder
                .pieces
                .push((Square(1, file), Color::White, PieceKind::Pawn, false));
            builder
                .pieces
                .push((Square(6, file), Color::Black, PieceKind::Pawn, false));
        }

        builder
    }

    /// Place a piece on the board, replacing any previous occupant of
    /// the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _, _, _)| *sq != square);
        self.pieces.push((square, color, kind, false));
        self
    }

    /// Mark the piece placed on `square` as having already moved (for
    /// castling set-ups).
    #[must_use]
    pub fn moved(mut self, square: Square) -> Self {
        for entry in &mut self.pieces {
            if entry.0 == square {
                entry.3 = true;
            }
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en passant target square. The double-stepped pawn is
    /// inferred: it is the opposing pawn standing directly past the
    /// target in its own direction of travel.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the board. Both colors' legal-move caches are computed.
    ///
    /// # Panics
    /// Panics if either king is missing; a board without both kings is
    /// not a chess position.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, color, kind, has_moved) in &self.pieces {
            let id = board.place(*square, *color, *kind);
            board.piece_mut(id).has_moved = *has_moved;
        }
        board.kings = board.locate_kings();

        if let Some(target) = self.en_passant_target {
            let owner = self.side_to_move.opponent();
            let pawn_sq = target.offset(owner.pawn_direction(), 0);
            if let Some(pawn) = pawn_sq.and_then(|sq| board.occupant_id(sq)) {
                board.piece_mut(pawn).has_moved = true;
                board.en_passant = Some(EnPassantTarget { target, pawn });
            }
        }

        board.recompute_legal_moves(Color::White);
        board.recompute_legal_moves(Color::Black);
        board
    }

    /// Build the board and wrap it in a [`Game`] session with the
    /// configured side to move.
    #[must_use]
    pub fn build_game(self) -> Game {
        let side = self.side_to_move;
        Game::from_board(self.build(), side)
    }
}
