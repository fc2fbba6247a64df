//! Board state: the 8x8 grid, piece arena, rosters, and occupancy queries.

use std::collections::HashMap;

use super::geometry::unit_step;
use super::types::{Color, Piece, PieceId, PieceKind, Square};

/// The one-ply en passant opportunity left behind by a double pawn step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EnPassantTarget {
    /// Square the capturing pawn moves into
    pub(crate) target: Square,
    /// The pawn that double-stepped
    pub(crate) pawn: PieceId,
}

/// A captured piece and where it was unlinked from, for undo.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Captured {
    pub(crate) id: PieceId,
    /// The square the piece stood on (for en passant this differs from
    /// the capturer's destination)
    pub(crate) square: Square,
    pub(crate) roster_slot: usize,
}

/// Everything needed to reverse one `relocate` call.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Undo {
    pub(crate) mover: PieceId,
    pub(crate) from: Square,
    pub(crate) had_moved: bool,
    pub(crate) captured: Option<Captured>,
}

/// What a finalized move did, for outcome reporting.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MoveEffects {
    pub(crate) captured: bool,
    pub(crate) is_castle: bool,
    pub(crate) is_en_passant: bool,
    pub(crate) promotion_due: Option<PieceId>,
}

/// Chess board: a grid of occupants backed by an arena of owned pieces,
/// per-color rosters kept in sync with the grid, the transient en
/// passant target, and the cached legal-move table.
///
/// The grid is the source of truth; the legal-move cache is derived and
/// rebuilt wholesale after every finalized move.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pub(crate) grid: [[Option<PieceId>; 8]; 8], // [rank][file]
    pub(crate) arena: Vec<Piece>,
    pub(crate) rosters: [Vec<PieceId>; 2],
    pub(crate) kings: [PieceId; 2],
    pub(crate) en_passant: Option<EnPassantTarget>,
    pub(crate) legal_moves: [HashMap<PieceId, Vec<Square>>; 2],
}

impl Board {
    /// The standard initial arrangement, with legal moves computed for
    /// both colors.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
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
            board.place(Square(0, file), Color::White, kind);
            board.place(Square(7, file), Color::Black, kind);
        }
        for file in 0..8 {
            board.place(Square(1, file), Color::White, PieceKind::Pawn);
            board.place(Square(6, file), Color::Black, PieceKind::Pawn);
        }

        board.kings = board.locate_kings();
        board.recompute_legal_moves(Color::White);
        board.recompute_legal_moves(Color::Black);
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            arena: Vec::new(),
            rosters: [Vec::new(), Vec::new()],
            kings: [PieceId(0), PieceId(0)],
            en_passant: None,
            legal_moves: [HashMap::new(), HashMap::new()],
        }
    }

    /// Add a fresh piece to the arena, grid, and roster.
    pub(crate) fn place(&mut self, square: Square, color: Color, kind: PieceKind) -> PieceId {
        let id = PieceId(self.arena.len());
        self.arena.push(Piece::new(kind, color, square));
        self.grid[square.rank()][square.file()] = Some(id);
        self.rosters[color.index()].push(id);
        id
    }

    /// Find each color's king in its roster. Panics if one is missing:
    /// a board without both kings is not a chess position.
    pub(crate) fn locate_kings(&self) -> [PieceId; 2] {
        let king_of = |color: Color| {
            self.rosters[color.index()]
                .iter()
                .copied()
                .find(|&id| self.arena[id.0].kind == PieceKind::King)
                .expect("board must hold a king of each color")
        };
        [king_of(Color::White), king_of(Color::Black)]
    }

    /// The piece occupying `square`, if any.
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.grid[square.rank()][square.file()].map(|id| &self.arena[id.0])
    }

    #[inline]
    pub(crate) fn occupant_id(&self, square: Square) -> Option<PieceId> {
        self.grid[square.rank()][square.file()]
    }

    /// Whether `square` has no occupant.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.grid[square.rank()][square.file()].is_none()
    }

    #[inline]
    pub(crate) fn piece(&self, id: PieceId) -> &Piece {
        &self.arena[id.0]
    }

    #[inline]
    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.arena[id.0]
    }

    /// The current en passant target square, if a double pawn step just
    /// happened.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant.map(|ep| ep.target)
    }

    /// True iff `square` holds a piece of the other color than `id`.
    pub(crate) fn is_opponent(&self, id: PieceId, square: Square) -> bool {
        match self.occupant(square) {
            Some(other) => other.color != self.piece(id).color,
            None => false,
        }
    }

    /// Walks the line between `from` and `to`, exclusive of both
    /// endpoints, and reports whether every intermediate square is
    /// empty. Returns false for square pairs that share no rank, file,
    /// or diagonal.
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        let Some((dr, df)) = unit_step(from, to) else {
            return false;
        };
        let mut cur = from.offset(dr, df);
        while let Some(sq) = cur {
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            cur = sq.offset(dr, df);
        }
        false
    }

    /// Composite landing test ignoring check-safety: the destination
    /// must be empty or hold an opponent; sliding pieces also need a
    /// clear path; the king additionally may not land on an attacked
    /// square.
    pub(crate) fn can_occupy(&self, id: PieceId, to: Square) -> bool {
        let piece = self.piece(id);
        let landable = self.is_empty(to) || self.is_opponent(id, to);
        match piece.kind {
            PieceKind::Knight => landable,
            PieceKind::King => {
                landable && self.attacker_of(to, piece.color.opponent()).is_none()
            }
            _ => landable && self.path_clear(piece.square, to),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
