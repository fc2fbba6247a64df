//! Serde round-trips for the public value types (`--features serde`).

#![cfg(feature = "serde")]

use chess_rules::{Color, GameStatus, MoveOutcome, PieceKind, Square};

#[test]
fn square_round_trips_through_json() {
    let sq = Square(3, 4);
    let json = serde_json::to_string(&sq).unwrap();
    assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), sq);
}

#[test]
fn status_and_color_round_trip() {
    for status in [
        GameStatus::Normal,
        GameStatus::Check,
        GameStatus::Checkmate,
        GameStatus::Stalemate,
    ] {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(serde_json::from_str::<GameStatus>(&json).unwrap(), status);
    }
    for color in Color::BOTH {
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), color);
    }
}

#[test]
fn outcome_round_trips_through_json() {
    let outcome = MoveOutcome {
        applied: true,
        captured: true,
        is_castle: false,
        is_en_passant: false,
        promotion_pending: Some(Square(7, 0)),
        status: GameStatus::Check,
    };
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(serde_json::from_str::<MoveOutcome>(&json).unwrap(), outcome);

    // the promotion choice a UI would send back also serializes
    let kind = PieceKind::Queen;
    let json = serde_json::to_string(&kind).unwrap();
    assert_eq!(serde_json::from_str::<PieceKind>(&json).unwrap(), kind);
}
