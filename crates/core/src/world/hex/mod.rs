//! This module holds the basic types for navigating a hexagon grid.
//!
//! ## Coordinate System
//!
//! Hexen uses **offset coordinates** with flat-topped tiles. Each tile is
//! addressed by an integer column `x` and row `y`. Every odd column is shifted
//! up by half a tile relative to the even columns, so that neighboring columns
//! interlock without gaps:
//!
//! ```text
//!          /-----\         /-----\
//!         /       \{ 1, 1}/       \
//!        /         \_____/         \
//!        \         /     \         /
//!         \{ 0, 1}/       \{ 2, 1}/
//!          \-----/         \-----/
//!          /     \         /     \
//!         /       \{ 1, 0}/       \
//!        /         \_____/         \
//!        \         /     \         /
//!         \{ 0, 0}/       \{ 2, 0}/
//!          \-----/         \-----/
//! ```
//!
//! Because of the shift, the coordinate offset to reach a given neighbor
//! depends on the [Parity] of the column you start from. [HexDirection::offset]
//! encodes that as two small lookup tables, one per parity class.
//!
//! The parity used everywhere is the parity of the **global** column, i.e.
//! the column index in the padded tile matrix owned by [Grid](crate::Grid).
//! The continuous-space placement in [mapper] uses the same global
//! coordinates, so the tables always agree with the geometry.

pub mod mapper;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// The two classes of columns in an offset grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    /// Even columns sit at the base row height
    Even,
    /// Odd columns are shifted up by half a tile
    Odd,
}

impl Parity {
    /// Get the parity of a global column index
    pub fn of(column: usize) -> Self {
        if column % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

/// The 6 directions in which two tiles can share a side. Each one is a line
/// from the center of a tile to the center of one of its sides. Iteration
/// order is clockwise, starting with `Up`.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize,
)]
pub enum HexDirection {
    Up,
    UpRight,
    DownRight,
    Down,
    DownLeft,
    UpLeft,
}

/// Neighbor offsets for even columns, in [HexDirection] order
const EVEN_OFFSETS: [(isize, isize); 6] =
    [(0, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0)];

/// Neighbor offsets for odd columns, in [HexDirection] order
const ODD_OFFSETS: [(isize, isize); 6] =
    [(0, 1), (1, 1), (1, 0), (0, -1), (-1, 0), (-1, 1)];

/// For each perimeter vertex of a tile (same order as
/// [Tile::vertices](crate::Tile::vertices)), the two directions whose
/// neighbors also touch that vertex.
pub(crate) const VERTEX_NEIGHBORS: [(HexDirection, HexDirection); 6] = [
    // 0 - left
    (HexDirection::UpLeft, HexDirection::DownLeft),
    // 1 - top left
    (HexDirection::UpLeft, HexDirection::Up),
    // 2 - top right
    (HexDirection::Up, HexDirection::UpRight),
    // 3 - right
    (HexDirection::UpRight, HexDirection::DownRight),
    // 4 - bottom right
    (HexDirection::DownRight, HexDirection::Down),
    // 5 - bottom left
    (HexDirection::Down, HexDirection::DownLeft),
];

impl HexDirection {
    /// Get the `(dx, dy)` offset that moves one tile in this direction, from a
    /// column of the given parity.
    pub fn offset(self, parity: Parity) -> (isize, isize) {
        let table = match parity {
            Parity::Even => &EVEN_OFFSETS,
            Parity::Odd => &ODD_OFFSETS,
        };
        table[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parity_of() {
        assert_eq!(Parity::of(0), Parity::Even);
        assert_eq!(Parity::of(1), Parity::Odd);
        assert_eq!(Parity::of(2), Parity::Even);
        assert_eq!(Parity::of(7), Parity::Odd);
    }

    /// Stepping in any direction and then back in the opposite direction
    /// should land on the starting tile, regardless of which column parity
    /// we start from
    #[test]
    fn test_offset_round_trip() {
        for start_x in [2isize, 3] {
            for dir in HexDirection::iter() {
                let (dx, dy) = dir.offset(Parity::of(start_x as usize));
                let mid_x = start_x + dx;
                // Directions are clockwise, so the opposite is 3 places away
                let back = HexDirection::iter().nth((dir as usize + 3) % 6);
                let (bx, by) =
                    back.unwrap().offset(Parity::of(mid_x as usize));
                assert_eq!(
                    (dx + bx, dy + by),
                    (0, 0),
                    "{:?} from column {}",
                    dir,
                    start_x
                );
            }
        }
    }

    /// The two neighbors that share a vertex must also be adjacent to each
    /// other
    #[test]
    fn test_vertex_neighbors_are_adjacent() {
        for start_x in [2isize, 3] {
            let parity = Parity::of(start_x as usize);
            for (a, b) in VERTEX_NEIGHBORS.iter() {
                let (ax, ay) = a.offset(parity);
                let (bx, by) = b.offset(parity);
                let a_parity = Parity::of((start_x + ax) as usize);
                let adjacent = HexDirection::iter()
                    .map(|dir| dir.offset(a_parity))
                    .any(|(dx, dy)| (ax + dx, ay + dy) == (bx, by));
                assert!(adjacent, "{:?} and {:?} from column {}", a, b, start_x);
            }
        }
    }
}
