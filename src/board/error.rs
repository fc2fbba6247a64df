//! Error types for board operations.

use std::fmt;

use super::types::PieceKind;

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for promotion resolution failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionError {
    /// Chosen kind is not a legal promotion (King and Pawn are refused)
    InvalidChoice { kind: PieceKind },
    /// No promotion is awaiting resolution
    NothingPending,
}

impl fmt::Display for PromotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionError::InvalidChoice { kind } => {
                write!(f, "Cannot promote to {kind:?}")
            }
            PromotionError::NothingPending => {
                write!(f, "No promotion is pending")
            }
        }
    }
}

impl std::error::Error for PromotionError {}
