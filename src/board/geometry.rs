//! Piece movement shapes, independent of board contents.
//!
//! Each predicate answers whether a displacement is geometrically
//! possible for a piece kind. Occupancy, blocking, and check-safety are
//! layered on top by the legality evaluator.

use once_cell::sync::Lazy;

use super::types::{Color, PieceKind, Square};

/// Unit step from every square toward every other square that shares a
/// rank, file, or diagonal with it.
static UNIT_STEPS: Lazy<[[Option<(isize, isize)>; 64]; 64]> = Lazy::new(|| {
    let mut steps = [[None; 64]; 64];
    for (from, row) in steps.iter_mut().enumerate() {
        for (to, step) in row.iter_mut().enumerate() {
            if from == to {
                continue;
            }
            let dr = (to / 8) as isize - (from / 8) as isize;
            let df = (to % 8) as isize - (from % 8) as isize;
            if dr == 0 || df == 0 || dr.abs() == df.abs() {
                *step = Some((dr.signum(), df.signum()));
            }
        }
    }
    steps
});

/// Unit step from `from` toward `to`, if the two squares lie on a shared
/// rank, file, or diagonal. `None` for any other pair.
#[inline]
pub(crate) fn unit_step(from: Square, to: Square) -> Option<(isize, isize)> {
    UNIT_STEPS[from.rank() * 8 + from.file()][to.rank() * 8 + to.file()]
}

/// Whether the displacement `from` -> `to` matches the movement shape of
/// the given kind, ignoring board contents.
///
/// For pawns this is the attack shape only (one forward diagonal step);
/// straight advances depend on occupancy rather than geometry and are
/// handled by the legality evaluator.
#[must_use]
pub(crate) fn shape_matches(kind: PieceKind, color: Color, from: Square, to: Square) -> bool {
    let dr = to.rank() as isize - from.rank() as isize;
    let df = to.file() as isize - from.file() as isize;
    match kind {
        PieceKind::Pawn => df.abs() == 1 && dr == color.pawn_direction(),
        PieceKind::Knight => {
            (df.abs() == 1 && dr.abs() == 2) || (df.abs() == 2 && dr.abs() == 1)
        }
        PieceKind::Bishop => df.abs() == dr.abs() && dr != 0,
        PieceKind::Rook => (df == 0) ^ (dr == 0),
        PieceKind::Queen => {
            (df.abs() == dr.abs() && dr != 0) || ((df == 0) ^ (dr == 0))
        }
        PieceKind::King => df.abs() <= 1 && dr.abs() <= 1 && (df != 0 || dr != 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(kind: PieceKind, from: &str, to: &str) -> bool {
        shape_matches(
            kind,
            Color::White,
            from.parse().unwrap(),
            to.parse().unwrap(),
        )
    }

    #[test]
    fn test_knight_shape() {
        assert!(matches(PieceKind::Knight, "b1", "c3"));
        assert!(matches(PieceKind::Knight, "b1", "a3"));
        assert!(matches(PieceKind::Knight, "b1", "d2"));
        assert!(!matches(PieceKind::Knight, "b1", "b3"));
        assert!(!matches(PieceKind::Knight, "b1", "d3"));
    }

    #[test]
    fn test_bishop_shape() {
        assert!(matches(PieceKind::Bishop, "c1", "a3"));
        assert!(matches(PieceKind::Bishop, "c1", "h6"));
        assert!(!matches(PieceKind::Bishop, "c1", "c4"));
        assert!(!matches(PieceKind::Bishop, "c1", "d3"));
    }

    #[test]
    fn test_rook_shape_is_exclusive_or() {
        assert!(matches(PieceKind::Rook, "a1", "a8"));
        assert!(matches(PieceKind::Rook, "a1", "h1"));
        assert!(!matches(PieceKind::Rook, "a1", "b2"));
        // zero displacement fails both axes
        assert!(!matches(PieceKind::Rook, "a1", "a1"));
    }

    #[test]
    fn test_queen_is_union_of_rook_and_bishop() {
        for from in ["d4"] {
            for rank in 0..8 {
                for file in 0..8 {
                    let to = Square(rank, file);
                    let from: Square = from.parse().unwrap();
                    let expect = shape_matches(PieceKind::Rook, Color::White, from, to)
                        || shape_matches(PieceKind::Bishop, Color::White, from, to);
                    assert_eq!(
                        shape_matches(PieceKind::Queen, Color::White, from, to),
                        expect
                    );
                }
            }
        }
    }

    #[test]
    fn test_king_excludes_zero_displacement() {
        assert!(matches(PieceKind::King, "e1", "e2"));
        assert!(matches(PieceKind::King, "e1", "d2"));
        assert!(!matches(PieceKind::King, "e1", "e1"));
        assert!(!matches(PieceKind::King, "e1", "e3"));
    }

    #[test]
    fn test_pawn_shape_is_attack_only() {
        assert!(matches(PieceKind::Pawn, "e2", "d3"));
        assert!(matches(PieceKind::Pawn, "e2", "f3"));
        // straight advances are not a pawn "shape"
        assert!(!matches(PieceKind::Pawn, "e2", "e3"));
        // black moves the other way
        assert!(shape_matches(
            PieceKind::Pawn,
            Color::Black,
            "e7".parse().unwrap(),
            "d6".parse().unwrap()
        ));
        assert!(!shape_matches(
            PieceKind::Pawn,
            Color::Black,
            "e7".parse().unwrap(),
            "d8".parse().unwrap()
        ));
    }

    #[test]
    fn test_unit_step_on_and_off_lines() {
        let d4: Square = "d4".parse().unwrap();
        let d8: Square = "d8".parse().unwrap();
        let a1: Square = "a1".parse().unwrap();
        let c6: Square = "c6".parse().unwrap();
        assert_eq!(unit_step(d4, d8), Some((1, 0)));
        assert_eq!(unit_step(d4, a1), Some((-1, -1)));
        assert_eq!(unit_step(d4, c6), None);
        assert_eq!(unit_step(d4, d4), None);
    }
}
