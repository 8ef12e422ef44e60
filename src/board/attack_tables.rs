//! Precomputed target tables for the mailbox board.
//!
//! Every table is indexed by the row-major square index (`Square::index`).

use once_cell::sync::Lazy;

use super::{Color, Square};

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const DIR_N: usize = 0;
pub(crate) const DIR_S: usize = 1;
pub(crate) const DIR_E: usize = 2;
pub(crate) const DIR_W: usize = 3;
pub(crate) const DIR_NE: usize = 4;
pub(crate) const DIR_NW: usize = 5;
pub(crate) const DIR_SE: usize = 6;
pub(crate) const DIR_SW: usize = 7;

/// Row/col step for each ray direction. North is toward row 0.
const RAY_DELTAS: [(isize, isize); 8] = [
    (-1, 0),  // N
    (1, 0),   // S
    (0, 1),   // E
    (0, -1),  // W
    (-1, 1),  // NE
    (-1, -1), // NW
    (1, 1),   // SE
    (1, -1),  // SW
];

pub(crate) const ROOK_DIRS: [usize; 4] = [DIR_N, DIR_S, DIR_E, DIR_W];
pub(crate) const BISHOP_DIRS: [usize; 4] = [DIR_NE, DIR_NW, DIR_SE, DIR_SW];
pub(crate) const QUEEN_DIRS: [usize; 8] = [
    DIR_N, DIR_S, DIR_E, DIR_W, DIR_NE, DIR_NW, DIR_SE, DIR_SW,
];

fn step_table(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .filter_map(|&(dr, dc)| sq.offset(dr, dc))
                .collect()
        })
        .collect()
}

pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| step_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| step_table(&KING_DELTAS));

/// `PAWN_SOURCES[color][sq]`: squares from which a pawn of `color` attacks `sq`.
pub(crate) static PAWN_SOURCES: Lazy<[Vec<Vec<Square>>; 2]> = Lazy::new(|| {
    let sources_for = |color: Color| {
        // A pawn attacks one row ahead, so its source is one row behind the target.
        let back = -color.pawn_direction();
        step_table(&[(back, -1), (back, 1)])
    };
    [sources_for(Color::White), sources_for(Color::Black)]
});

/// `RAYS[sq][dir]`: squares along `dir` from `sq`, nearest first.
pub(crate) static RAYS: Lazy<Vec<[Vec<Square>; 8]>> = Lazy::new(|| {
    Square::all()
        .map(|sq| {
            std::array::from_fn(|dir| {
                let (dr, dc) = RAY_DELTAS[dir];
                let mut ray = Vec::with_capacity(7);
                let mut cur = sq;
                while let Some(next) = cur.offset(dr, dc) {
                    ray.push(next);
                    cur = next;
                }
                ray
            })
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_targets_corner_and_center() {
        assert_eq!(KNIGHT_TARGETS[Square(0, 0).index()].len(), 2);
        assert_eq!(KNIGHT_TARGETS[Square(4, 4).index()].len(), 8);
    }

    #[test]
    fn test_king_targets_edge() {
        assert_eq!(KING_TARGETS[Square(7, 4).index()].len(), 5);
        assert_eq!(KING_TARGETS[Square(0, 0).index()].len(), 3);
    }

    #[test]
    fn test_pawn_sources() {
        // e3 is attacked by white pawns on d2 and f2
        let e3 = Square(5, 4);
        let white = &PAWN_SOURCES[Color::White.index()][e3.index()];
        assert!(white.contains(&Square(6, 3)));
        assert!(white.contains(&Square(6, 5)));
        // and by black pawns on d4 and f4
        let black = &PAWN_SOURCES[Color::Black.index()][e3.index()];
        assert!(black.contains(&Square(4, 3)));
        assert!(black.contains(&Square(4, 5)));
    }

    #[test]
    fn test_rays_nearest_first() {
        let ray = &RAYS[Square(7, 0).index()][DIR_N];
        assert_eq!(ray.len(), 7);
        assert_eq!(ray[0], Square(6, 0));
        assert_eq!(ray[6], Square(0, 0));
        assert!(RAYS[Square(7, 0).index()][DIR_SW].is_empty());
    }
}
