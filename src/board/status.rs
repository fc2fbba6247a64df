//! Attack detection and game-status classification.

use super::geometry;
use super::types::{Color, GameStatus, PieceId, Square};
use super::Board;

impl Board {
    /// The first piece of `by` attacking `square`: its shape reaches the
    /// square and, for sliding pieces, the path is clear. Knights jump;
    /// pawn and king attack shapes have no intermediate squares.
    pub(crate) fn attacker_of(&self, square: Square, by: Color) -> Option<PieceId> {
        self.rosters[by.index()].iter().copied().find(|&id| {
            let piece = self.piece(id);
            geometry::shape_matches(piece.kind, piece.color, piece.square, square)
                && (!piece.kind.is_slider() || self.path_clear(piece.square, square))
        })
    }

    /// Whether any piece of `by` attacks `square`.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        self.attacker_of(square, by).is_some()
    }

    /// Classify the position for `color`, the side to move. Only valid
    /// once `color`'s legal-move cache is fresh.
    pub(crate) fn status_for(&self, color: Color) -> GameStatus {
        let king_sq = self.piece(self.kings[color.index()]).square;
        let in_check = self.is_attacked(king_sq, color.opponent());
        match (in_check, self.has_any_legal_move(color)) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Normal,
        }
    }

    /// The piece currently giving check to `color`'s king, if any.
    pub(crate) fn checker_of(&self, color: Color) -> Option<PieceId> {
        let king_sq = self.piece(self.kings[color.index()]).square;
        self.attacker_of(king_sq, color.opponent())
    }
}
