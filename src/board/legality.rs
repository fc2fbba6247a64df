//! Move legality: shape, occupancy, path, and check-safety combined.

use std::collections::HashMap;

use super::geometry;
use super::types::{Color, PieceId, PieceKind, Square};
use super::Board;

impl Board {
    /// Full legality of moving `id` to `to`, including check-safety.
    pub(crate) fn is_legal(&mut self, id: PieceId, to: Square) -> bool {
        let (kind, color, from) = {
            let piece = self.piece(id);
            (piece.kind, piece.color, piece.square)
        };
        if from == to {
            return false;
        }

        match kind {
            PieceKind::Pawn => self.pawn_legal(id, to),
            PieceKind::Knight => {
                geometry::shape_matches(kind, color, from, to)
                    && (self.is_empty(to) || self.is_opponent(id, to))
                    && self.clears_check(id, to)
            }
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                geometry::shape_matches(kind, color, from, to)
                    && self.can_occupy(id, to)
                    && self.clears_check(id, to)
            }
            PieceKind::King => {
                (geometry::shape_matches(kind, color, from, to)
                    && self.can_occupy(id, to)
                    && self.clears_check(id, to))
                    || (to.file().abs_diff(from.file()) == 2 && self.castle_legal(id, to))
            }
        }
    }

    /// Pawn legality. Straight advances require empty squares (two of
    /// them for the double step of an unmoved pawn); diagonal steps
    /// require a capture, over the board or en passant.
    fn pawn_legal(&mut self, id: PieceId, to: Square) -> bool {
        let (color, from) = {
            let piece = self.piece(id);
            (piece.color, piece.square)
        };
        let dir = color.pawn_direction();
        let dr = to.rank() as isize - from.rank() as isize;

        if to.file() == from.file() {
            let single = dr == dir && self.is_empty(to);
            let double = dr == 2 * dir
                && !self.piece(id).has_moved
                && self.is_empty(to)
                && self.is_empty(Square((from.rank() as isize + dir) as usize, from.file()));
            (single || double) && self.clears_check(id, to)
        } else {
            geometry::shape_matches(PieceKind::Pawn, color, from, to)
                && (self.is_opponent(id, to) || self.is_en_passant_capture(id, to))
                && self.clears_check(id, to)
        }
    }

    /// Check-safety: would the mover's own king be attacked after this
    /// move? Simulated with `relocate`/`restore`.
    ///
    /// When neither the king nor the mover is currently attacked the
    /// move cannot expose the king and the simulation is skipped. En
    /// passant captures always simulate: vacating the victim's square
    /// can open a line the mover itself never blocked.
    pub(crate) fn clears_check(&mut self, id: PieceId, to: Square) -> bool {
        let color = self.piece(id).color;
        let by = color.opponent();
        let king_sq = self.piece(self.kings[color.index()]).square;

        if !self.is_en_passant_capture(id, to)
            && self.attacker_of(king_sq, by).is_none()
            && self.attacker_of(self.piece(id).square, by).is_none()
        {
            return true;
        }

        let undo = self.relocate(id, to);
        let king_sq = self.piece(self.kings[color.index()]).square;
        let safe = self.attacker_of(king_sq, by).is_none();
        self.restore(undo);
        safe
    }

    /// Every legal destination for `id`, scanning the whole board.
    pub(crate) fn legal_destinations_of(&mut self, id: PieceId) -> Vec<Square> {
        let mut destinations = Vec::new();
        for rank in 0..8 {
            for file in 0..8 {
                let to = Square(rank, file);
                if self.is_legal(id, to) {
                    destinations.push(to);
                }
            }
        }
        destinations
    }

    /// Rebuild the legal-move cache for `color` from scratch, refreshing
    /// each piece's cached movable flag along the way.
    pub(crate) fn recompute_legal_moves(&mut self, color: Color) {
        let ids: Vec<PieceId> = self.rosters[color.index()].clone();
        let mut cache = HashMap::with_capacity(ids.len());
        for id in ids {
            let destinations = self.legal_destinations_of(id);
            self.piece_mut(id).can_move = !destinations.is_empty();
            cache.insert(id, destinations);
        }
        self.legal_moves[color.index()] = cache;
    }

    /// True iff `color` has at least one cached legal move.
    pub(crate) fn has_any_legal_move(&self, color: Color) -> bool {
        self.rosters[color.index()]
            .iter()
            .any(|&id| self.piece(id).can_move)
    }

    /// Cached destinations for `id`; empty if the cache has no entry.
    pub(crate) fn cached_destinations(&self, id: PieceId) -> &[Square] {
        match self.legal_moves[self.piece(id).color.index()].get(&id) {
            Some(destinations) => destinations.as_slice(),
            None => &[],
        }
    }
}
