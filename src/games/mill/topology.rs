//! Static board topology: adjacency, forbidden pairs, and winning lines.
//!
//! The tables are compile-time constants, so every game and every search
//! thread shares the same read-only data.

use super::position::Position;
use Position::*;

/// Move targets reachable from each position, indexed by `Position::to_index`.
///
/// List order is the enumeration order used by move generation.
const ADJACENCY: [&[Position]; 9] = [
    &[TopCenter, MiddleLeft, Center],
    &[TopLeft, TopRight, Center],
    &[TopCenter, Center, MiddleRight],
    &[TopLeft, Center, BottomLeft],
    &[
        TopLeft,
        TopCenter,
        TopRight,
        MiddleLeft,
        MiddleRight,
        BottomLeft,
        BottomCenter,
        BottomRight,
    ],
    &[TopRight, Center, BottomRight],
    &[MiddleLeft, Center, BottomCenter],
    &[Center, BottomLeft, BottomRight],
    &[Center, MiddleRight, BottomCenter],
];

/// Pairs excluded from play in both directions.
pub const FORBIDDEN_PAIRS: [(Position, Position); 4] = [
    (TopCenter, MiddleLeft),
    (MiddleLeft, BottomCenter),
    (BottomCenter, MiddleRight),
    (MiddleRight, TopCenter),
];

/// Winning lines. Every line passes through the center.
pub const WINNING_LINES: [[Position; 3]; 4] = [
    [TopLeft, Center, BottomRight],
    [TopRight, Center, BottomLeft],
    [TopCenter, Center, BottomCenter],
    [MiddleLeft, Center, MiddleRight],
];

/// Returns the positions a piece on `pos` may structurally move to.
pub fn neighbors(pos: Position) -> &'static [Position] {
    ADJACENCY[pos.to_index()]
}

/// Checks whether `to` is in the adjacency list of `from`.
pub fn is_adjacent(from: Position, to: Position) -> bool {
    neighbors(from).contains(&to)
}

/// Checks whether the ordered pair is excluded from play.
pub fn is_forbidden(from: Position, to: Position) -> bool {
    FORBIDDEN_PAIRS
        .iter()
        .any(|&(a, b)| (a, b) == (from, to) || (b, a) == (from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_are_three_or_eight() {
        for pos in Position::ALL {
            let expected = if pos == Center { 8 } else { 3 };
            assert_eq!(neighbors(pos).len(), expected, "degree of {}", pos);
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for from in Position::ALL {
            for &to in neighbors(from) {
                assert!(is_adjacent(to, from), "{} -> {} has no way back", from, to);
            }
        }
    }

    #[test]
    fn test_no_self_loops() {
        for pos in Position::ALL {
            assert!(!is_adjacent(pos, pos));
        }
    }

    #[test]
    fn test_forbidden_pairs_both_directions() {
        assert!(is_forbidden(TopCenter, MiddleLeft));
        assert!(is_forbidden(MiddleLeft, TopCenter));
        assert!(is_forbidden(TopCenter, MiddleRight));
        assert!(is_forbidden(MiddleRight, TopCenter));
        assert!(!is_forbidden(TopCenter, Center));
    }

    #[test]
    fn test_every_winning_line_contains_center() {
        assert_eq!(WINNING_LINES.len(), 4);
        for line in WINNING_LINES {
            assert!(line.contains(&Center));
        }
    }
}
