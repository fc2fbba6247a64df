//! Game status and move outcome types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Classification of the position for the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// King safe, legal moves available
    Normal,
    /// King attacked, legal moves available
    Check,
    /// King attacked, no legal moves
    Checkmate,
    /// King safe, no legal moves
    Stalemate,
}

impl GameStatus {
    /// Returns true if no further moves can be played
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// What an attempted move did.
///
/// Illegal requests come back with `applied: false` and the board
/// untouched; there is no error case.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    /// Whether the move was performed
    pub applied: bool,
    /// Whether a piece was captured
    pub captured: bool,
    /// Whether the move castled
    pub is_castle: bool,
    /// Whether the move captured en passant
    pub is_en_passant: bool,
    /// Square of a pawn awaiting promotion; play is suspended while set
    pub promotion_pending: Option<Square>,
    /// Status for the side now to move
    pub status: GameStatus,
}
