//! Castling validation and promotion.

use super::types::{Piece, PieceId, PieceKind, Square};
use super::Board;

impl Board {
    /// Full castling legality for the king stepping two files to `to`:
    /// neither king nor rook has moved, the target row is the king's
    /// row, the path between rook and king is clear, and every square
    /// the king passes through - start and end included - is unattacked.
    pub(crate) fn castle_legal(&self, king: PieceId, to: Square) -> bool {
        let (color, from) = {
            let piece = self.piece(king);
            (piece.color, piece.square)
        };
        if self.piece(king).has_moved || to.rank() != from.rank() {
            return false;
        }
        let by = color.opponent();
        if self.attacker_of(from, by).is_some() {
            return false;
        }

        let kingside = to.file() > from.file();
        let rook_sq = Square(from.rank(), if kingside { 7 } else { 0 });
        let Some(rook_id) = self.occupant_id(rook_sq) else {
            return false;
        };
        let rook = self.piece(rook_id);
        if rook.kind != PieceKind::Rook || rook.color != color || rook.has_moved {
            return false;
        }
        if !self.path_clear(rook_sq, from) {
            return false;
        }

        let lo = from.file().min(to.file());
        let hi = from.file().max(to.file());
        (lo..=hi).all(|file| self.attacker_of(Square(from.rank(), file), by).is_none())
    }

    /// Replace a promoted pawn with a fresh piece of `kind` on the same
    /// square, then rebuild both colors' caches.
    ///
    /// The replacement counts as having moved, so a promoted rook can
    /// never enable castling.
    pub(crate) fn promote(&mut self, id: PieceId, kind: PieceKind) {
        debug_assert!(
            PieceKind::PROMOTION_CHOICES.contains(&kind),
            "promotion choice must be validated by the caller"
        );
        let (color, square) = {
            let piece = self.piece(id);
            (piece.color, piece.square)
        };
        self.arena[id.0] = Piece {
            kind,
            color,
            square,
            has_moved: true,
            can_move: true,
        };
        self.recompute_legal_moves(color);
        self.recompute_legal_moves(color.opponent());
    }
}
