//! Game session facade for the presentation layer.
//!
//! A [`Game`] owns one [`Board`], tracks whose turn it is, suspends play
//! while a promotion awaits resolution, and refuses everything once the
//! game is over. The caller drives it with squares only; pieces never
//! leave the engine.

#[cfg(feature = "logging")]
use log::debug;

use crate::board::{
    Board, Color, GameStatus, MoveEffects, MoveOutcome, PieceId, PieceKind, PromotionError, Square,
};

/// One game session: board, turn, and pending-promotion state.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Color,
    pending_promotion: Option<PieceId>,
    status: GameStatus,
}

impl Game {
    /// Start a fresh game from the standard arrangement, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Wrap an already-built board. Both of the board's caches must be
    /// fresh, which `Board::new` and `BoardBuilder::build` guarantee.
    pub(crate) fn from_board(board: Board, to_move: Color) -> Self {
        let status = board.status_for(to_move);
        Game {
            board,
            to_move,
            pending_promotion: None,
            status,
        }
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Status of the position for the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Read access to the underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Square of the pawn awaiting promotion, if play is suspended.
    #[must_use]
    pub fn promotion_pending(&self) -> Option<Square> {
        self.pending_promotion
            .map(|id| self.board.piece(id).square)
    }

    /// The square of a piece currently giving check to the side to
    /// move, for highlighting.
    #[must_use]
    pub fn checking_piece(&self) -> Option<Square> {
        self.board
            .checker_of(self.to_move)
            .map(|id| self.board.piece(id).square)
    }

    /// Cached legal destinations of the piece on `square`, for
    /// highlighting. Empty unless the square holds a piece of the side
    /// to move and play is neither suspended nor finished.
    #[must_use]
    pub fn legal_destinations(&self, square: Square) -> &[Square] {
        if self.pending_promotion.is_some() || self.status.is_over() {
            return &[];
        }
        match self.board.occupant_id(square) {
            Some(id) if self.board.piece(id).color == self.to_move => {
                self.board.cached_destinations(id)
            }
            _ => &[],
        }
    }

    /// Attempt to move the piece on `from` to `to`.
    ///
    /// Requests that are not legal right now - wrong side, empty origin,
    /// unreachable destination, play suspended or finished - come back
    /// with `applied: false` and leave the board untouched.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.pending_promotion.is_some() || self.status.is_over() {
            return self.refusal();
        }
        let Some(id) = self.board.occupant_id(from) else {
            return self.refusal();
        };
        if self.board.piece(id).color != self.to_move || !self.board.is_legal(id, to) {
            return self.refusal();
        }

        let effects = self.board.execute_move(id, to);
        self.to_move = self.to_move.opponent();
        self.status = self.board.status_for(self.to_move);
        self.pending_promotion = effects.promotion_due;

        #[cfg(feature = "logging")]
        debug!(
            "{} plays {from}{to}, {} to move ({:?})",
            self.to_move.opponent(),
            self.to_move,
            self.status
        );

        self.outcome(effects)
    }

    /// Resolve a pending promotion with the chosen piece kind.
    ///
    /// King and Pawn are refused and leave the promotion unresolved, as
    /// does calling this with no promotion outstanding.
    pub fn resolve_promotion(&mut self, choice: PieceKind) -> Result<MoveOutcome, PromotionError> {
        let Some(pawn) = self.pending_promotion else {
            return Err(PromotionError::NothingPending);
        };
        if !PieceKind::PROMOTION_CHOICES.contains(&choice) {
            return Err(PromotionError::InvalidChoice { kind: choice });
        }

        self.board.promote(pawn, choice);
        self.pending_promotion = None;
        self.status = self.board.status_for(self.to_move);

        #[cfg(feature = "logging")]
        debug!(
            "promotion resolved to {choice:?}, {} to move ({:?})",
            self.to_move, self.status
        );

        Ok(self.outcome(MoveEffects::default()))
    }

    fn outcome(&self, effects: MoveEffects) -> MoveOutcome {
        MoveOutcome {
            applied: true,
            captured: effects.captured,
            is_castle: effects.is_castle,
            is_en_passant: effects.is_en_passant,
            promotion_pending: self.promotion_pending(),
            status: self.status,
        }
    }

    fn refusal(&self) -> MoveOutcome {
        MoveOutcome {
            applied: false,
            captured: false,
            is_castle: false,
            is_en_passant: false,
            promotion_pending: self.promotion_pending(),
            status: self.status,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
