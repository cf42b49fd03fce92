//! Conversions from offset coordinates into continuous space, plus the
//! movement cost model. Everything in here is a pure function of its inputs.
//!
//! ```text
//!      /-----\       =
//!     /r\     \      |
//!    /___\     \     | h (height)
//!    \         /     |
//!     \       /      |
//!    o \-----/       =
//!
//!    |=======|
//!     s (short diagonal)
//!
//!    |=========|
//!     w (width)
//! ```
//!
//! `o` is the origin of the tile, the bottom left corner of its bounding box.

use crate::{util::unit::Point3, world::tile::Tile};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Distance between the center of a tile and each of its 6 vertices. This is
/// also the length of one side of the tile.
pub const TILE_RADIUS: f64 = 1.0;
/// Distance between two opposite vertices of a tile
pub const TILE_WIDTH: f64 = 2.0 * TILE_RADIUS;
/// Distance along the x axis between a tile's leftmost vertex and the far end
/// of its top side
pub const TILE_SHORT_DIAGONAL: f64 = 1.5 * TILE_RADIUS;
/// Distance between two opposite sides of a tile
pub const TILE_HEIGHT: f64 = SQRT_3 * TILE_RADIUS;

/// Get the origin of the tile at global offset coordinate `(x, y)`. Even
/// columns sit at `y·H`, odd columns are shifted up by half a tile. Each
/// column is `1.5R` to the right of the previous one.
pub fn origin(x: usize, y: usize) -> Point3 {
    let row = y as f64 * TILE_HEIGHT;
    if x % 2 == 0 {
        let half = (x / 2) as f64;
        Point3::new(half * TILE_WIDTH + half * TILE_RADIUS, row, 0.0)
    } else {
        let half = ((x - 1) / 2) as f64;
        Point3::new(
            half * TILE_WIDTH + half * TILE_RADIUS + TILE_SHORT_DIAGONAL,
            row + 0.5 * TILE_HEIGHT,
            0.0,
        )
    }
}

/// The offsets from a tile's origin to each of its 7 vertices. The first 6 are
/// the perimeter, clockwise starting from the leftmost vertex. The last is
/// the center. This template is the same for every tile.
///
/// ```text
///   1. /-----\ 2.
///     /       \
/// 0. /    6    \ 3.
///    \         /
///     \       /
///   5. \-----/ 4.
/// ```
pub fn local_vertex_shifts() -> [Point3; 7] {
    [
        Point3::new(0.0, 0.5 * TILE_HEIGHT, 0.0),
        Point3::new(0.5 * TILE_RADIUS, TILE_HEIGHT, 0.0),
        Point3::new(1.5 * TILE_RADIUS, TILE_HEIGHT, 0.0),
        Point3::new(2.0 * TILE_RADIUS, 0.5 * TILE_HEIGHT, 0.0),
        Point3::new(1.5 * TILE_RADIUS, 0.0, 0.0),
        Point3::new(0.5 * TILE_RADIUS, 0.0, 0.0),
        Point3::new(TILE_RADIUS, 0.5 * TILE_HEIGHT, 0.0),
    ]
}

/// Get the positions of all 7 vertices of the tile at global offset
/// coordinate `(x, y)`. Every vertex is at height 0.
pub fn global_vertices(x: usize, y: usize) -> [Point3; 7] {
    let origin = origin(x, y);
    let mut vertices = local_vertex_shifts();
    for vertex in vertices.iter_mut() {
        *vertex += origin;
    }
    vertices
}

/// Cost of moving from tile `a` onto the adjacent tile `b`. The sum of both
/// tiles' terrain coefficients is scaled by a slope factor based on
/// `drop = a.elevation - b.elevation`:
///
/// - `drop >= 0`: the factor is `1 + drop`, growing without bound
/// - `drop < 0`: the factor is `1 / (1 + |drop|)`, approaching (but never
///   reaching) zero
///
/// The result is always strictly positive.
pub fn move_cost(a: &Tile, b: &Tile) -> f64 {
    let base_cost = a.terrain().coefficient() + b.terrain().coefficient();
    let drop = a.elevation() - b.elevation();
    let slope_coef = if drop >= 0.0 {
        1.0 + drop
    } else {
        1.0 / (1.0 + drop.abs())
    };
    slope_coef * base_cost
}
