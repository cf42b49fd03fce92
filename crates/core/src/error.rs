use thiserror::Error;

/// Caller errors raised by grid and tile operations. These are always the
/// result of bad input (an index out of bounds, a malformed vertex list, an
/// unknown terrain name), never of a transient condition, so there is nothing
/// to retry. Fallible operations return an [anyhow::Error] with one of these
/// as the root cause; use `downcast_ref::<HexError>()` to inspect it.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum HexError {
    /// A logical grid coordinate outside `[0, xsize) × [0, ysize)`
    #[error("tile ({x}, {y}) is outside of the {xsize}x{ysize} grid")]
    TileOutOfRange {
        x: usize,
        y: usize,
        xsize: usize,
        ysize: usize,
    },

    /// A vertex index outside `[0, 6]`
    #[error("vertex index {0} is outside of [0, 6]")]
    VertexOutOfRange(usize),

    /// A vertex (or vertex height) list with the wrong length
    #[error("expected {expected} vertices, but got {actual}")]
    VertexCount { expected: usize, actual: usize },

    /// A terrain name outside the fixed vocabulary
    #[error("unknown terrain type {0:?}")]
    UnknownTerrain(String),
}
