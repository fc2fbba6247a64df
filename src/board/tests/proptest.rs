//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

use crate::board::{Board, GameStatus, PieceId, PieceKind, Square};
use crate::game::Game;

/// Every (from, to) pair the engine currently advertises for the side
/// to move.
fn all_moves(game: &Game) -> Vec<(Square, Square)> {
    let mut moves = Vec::new();
    for rank in 0..8 {
        for file in 0..8 {
            let from = Square(rank, file);
            for &to in game.legal_destinations(from) {
                moves.push((from, to));
            }
        }
    }
    moves
}

/// Play one random advertised move, resolving any promotion with a
/// random valid choice. Returns false once the game is over.
fn play_random_move(game: &mut Game, rng: &mut StdRng) -> bool {
    let moves = all_moves(game);
    if moves.is_empty() {
        return false;
    }
    let (from, to) = moves[rng.gen_range(0..moves.len())];
    let outcome = game.attempt_move(from, to);
    assert!(outcome.applied, "advertised move {from}{to} was refused");
    if outcome.promotion_pending.is_some() {
        let choice = PieceKind::PROMOTION_CHOICES[rng.gen_range(0..4)];
        game.resolve_promotion(choice)
            .expect("valid promotion choice was refused");
    }
    !game.status().is_over()
}

/// Shape/occupancy/path legality without the check-safety gate - the
/// exact set of candidates `is_legal` hands to `clears_check` - for
/// comparing the two check-safety paths against each other. Castling is
/// excluded; it never consults `clears_check`.
fn pseudo_legal(board: &Board, id: PieceId, to: Square) -> bool {
    let piece = board.piece(id);
    let from = piece.square;
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => {
            let dir = piece.color.pawn_direction();
            let dr = to.rank() as isize - from.rank() as isize;
            if to.file() == from.file() {
                let mid = Square((from.rank() as isize + dir) as usize, from.file());
                (dr == dir && board.is_empty(to))
                    || (dr == 2 * dir
                        && !piece.has_moved
                        && board.is_empty(to)
                        && board.is_empty(mid))
            } else {
                crate::board::geometry::shape_matches(piece.kind, piece.color, from, to)
                    && (board.is_opponent(id, to) || board.is_en_passant_capture(id, to))
            }
        }
        _ => {
            crate::board::geometry::shape_matches(piece.kind, piece.color, from, to)
                && board.can_occupy(id, to)
        }
    }
}

proptest! {
    /// Property: no advertised destination ever leaves the mover's own
    /// king attacked.
    #[test]
    fn prop_destinations_never_expose_king(seed in any::<u64>(), num_moves in 1..40usize) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            for &(from, to) in &all_moves(&game) {
                let mut board = game.board().clone();
                let id = board.occupant_id(from).unwrap();
                let color = board.piece(id).color;
                board.relocate(id, to);
                let king_sq = board.piece(board.kings[color.index()]).square;
                prop_assert!(
                    !board.is_attacked(king_sq, color.opponent()),
                    "advertised move {}{} leaves the king attacked", from, to
                );
            }
            if !play_random_move(&mut game, &mut rng) {
                break;
            }
        }
    }

    /// Property: relocate followed by restore returns the board to an
    /// identical state.
    #[test]
    fn prop_relocate_restore_round_trip(seed in any::<u64>(), num_moves in 1..60usize) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = all_moves(&game);
            if moves.is_empty() {
                break;
            }
            let (from, to) = moves[rng.gen_range(0..moves.len())];

            let mut board = game.board().clone();
            let snapshot = board.clone();
            let id = board.occupant_id(from).unwrap();
            let undo = board.relocate(id, to);
            board.restore(undo);
            prop_assert_eq!(&board, &snapshot);

            if !play_random_move(&mut game, &mut rng) {
                break;
            }
        }
    }

    /// Property: the check-safety short-circuit and the full simulation
    /// agree on every pseudo-legal move.
    #[test]
    fn prop_short_circuit_matches_simulation(seed in any::<u64>(), num_moves in 1..40usize) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let mut board = game.board().clone();
            let color = game.to_move();
            let ids = board.rosters[color.index()].clone();
            for id in ids {
                for rank in 0..8 {
                    for file in 0..8 {
                        let to = Square(rank, file);
                        if !pseudo_legal(&board, id, to) {
                            continue;
                        }
                        let fast = board.clears_check(id, to);

                        let undo = board.relocate(id, to);
                        let king_sq = board.piece(board.kings[color.index()]).square;
                        let slow = !board.is_attacked(king_sq, color.opponent());
                        board.restore(undo);

                        prop_assert_eq!(
                            fast, slow,
                            "paths disagree on {}{}", board.piece(id).square, to
                        );
                    }
                }
            }
            if !play_random_move(&mut game, &mut rng) {
                break;
            }
        }
    }

    /// Property: the reported status always matches the recomputed
    /// facts - king attacked and any-legal-move - for the side to move.
    #[test]
    fn prop_status_matches_position(seed in any::<u64>(), num_moves in 1..60usize) {
        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let board = game.board();
            let color = game.to_move();
            let king_sq = board.piece(board.kings[color.index()]).square;
            let checked = board.is_attacked(king_sq, color.opponent());
            let any = board.has_any_legal_move(color);

            let expected = match (checked, any) {
                (true, false) => GameStatus::Checkmate,
                (false, false) => GameStatus::Stalemate,
                (true, true) => GameStatus::Check,
                (false, true) => GameStatus::Normal,
            };
            prop_assert_eq!(game.status(), expected);

            if !play_random_move(&mut game, &mut rng) {
                break;
            }
        }
    }
}
