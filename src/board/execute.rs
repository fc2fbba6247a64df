//! The single mutation primitive and its undo token.
//!
//! `relocate`/`restore` are exact inverses and are shared between real
//! moves and the simulate-test-undo sequence in check-safety testing, so
//! the two can never diverge. `execute_move` layers the real-move side
//! effects on top: the castle rook hop, the en passant target's one-ply
//! lifetime, promotion detection, and the opponent's cache refresh.

use super::state::{Captured, EnPassantTarget, MoveEffects, Undo};
use super::types::{PieceId, PieceKind, Square};
use super::Board;

impl Board {
    /// True iff moving `id` to `to` would capture en passant: the mover
    /// is a pawn, `to` is the active target square, and the cached pawn
    /// belongs to the other side.
    pub(crate) fn is_en_passant_capture(&self, id: PieceId, to: Square) -> bool {
        let piece = self.piece(id);
        piece.kind == PieceKind::Pawn
            && self.en_passant.map_or(false, |ep| {
                ep.target == to && self.piece(ep.pawn).color != piece.color
            })
    }

    /// Move `id` to `to`, unlinking any captured piece from the grid and
    /// its roster. The en passant target is left untouched so a
    /// simulated move can be unwound without losing it.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) -> Undo {
        let from = self.piece(id).square;
        let had_moved = self.piece(id).has_moved;

        let victim = if let Some(victim) = self.occupant_id(to) {
            Some((victim, to))
        } else if self.is_en_passant_capture(id, to) {
            let ep = self.en_passant.expect("en passant capture without target");
            Some((ep.pawn, self.piece(ep.pawn).square))
        } else {
            None
        };

        let captured = victim.map(|(victim, square)| {
            self.grid[square.rank()][square.file()] = None;
            let color_idx = self.arena[victim.0].color.index();
            let roster = &mut self.rosters[color_idx];
            let roster_slot = roster
                .iter()
                .position(|&p| p == victim)
                .expect("captured piece missing from its roster");
            roster.remove(roster_slot);
            Captured {
                id: victim,
                square,
                roster_slot,
            }
        });

        self.grid[from.rank()][from.file()] = None;
        self.grid[to.rank()][to.file()] = Some(id);
        let piece = self.piece_mut(id);
        piece.square = to;
        piece.has_moved = true;

        Undo {
            mover: id,
            from,
            had_moved,
            captured,
        }
    }

    /// Exact inverse of `relocate`.
    pub(crate) fn restore(&mut self, undo: Undo) {
        let to = self.piece(undo.mover).square;
        self.grid[to.rank()][to.file()] = None;
        self.grid[undo.from.rank()][undo.from.file()] = Some(undo.mover);
        let piece = self.piece_mut(undo.mover);
        piece.square = undo.from;
        piece.has_moved = undo.had_moved;

        if let Some(cap) = undo.captured {
            self.grid[cap.square.rank()][cap.square.file()] = Some(cap.id);
            let color = self.piece(cap.id).color;
            self.rosters[color.index()].insert(cap.roster_slot, cap.id);
        }
    }

    /// Perform an already-validated move for real.
    ///
    /// Castling relocates the rook in the same logical move. The en
    /// passant target is cleared when the mover's color differs from the
    /// cached pawn's color and this move is not the capture itself, set
    /// on a double pawn step, and consumed by the capture. Finishes by
    /// rebuilding the opponent's legal-move cache.
    pub(crate) fn execute_move(&mut self, id: PieceId, to: Square) -> MoveEffects {
        let (kind, color, from) = {
            let piece = self.piece(id);
            (piece.kind, piece.color, piece.square)
        };

        let mut effects = MoveEffects::default();

        if kind == PieceKind::King && to.file().abs_diff(from.file()) == 2 {
            let kingside = to.file() > from.file();
            let rook_from = Square(from.rank(), if kingside { 7 } else { 0 });
            let rook_to = Square(from.rank(), if kingside { to.file() - 1 } else { to.file() + 1 });
            let rook = self
                .occupant_id(rook_from)
                .expect("castling validated without a rook");
            self.relocate(rook, rook_to);
            effects.is_castle = true;
        }

        effects.is_en_passant = self.is_en_passant_capture(id, to);
        let undo = self.relocate(id, to);
        effects.captured = undo.captured.is_some();

        if effects.is_en_passant {
            self.en_passant = None;
        } else if let Some(ep) = self.en_passant {
            if self.piece(ep.pawn).color != color {
                self.en_passant = None;
            }
        }
        if kind == PieceKind::Pawn && to.rank().abs_diff(from.rank()) == 2 {
            let skipped = Square(usize::midpoint(from.rank(), to.rank()), from.file());
            self.en_passant = Some(EnPassantTarget {
                target: skipped,
                pawn: id,
            });
        }

        if kind == PieceKind::Pawn && to.rank() == color.pawn_promotion_rank() {
            effects.promotion_due = Some(id);
        }

        self.recompute_legal_moves(color.opponent());

        effects
    }
}
