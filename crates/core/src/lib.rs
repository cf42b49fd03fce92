//! Hexen models a hexagonal terrain grid and walks movement paths across it.
//! This crate holds all the core logic: placing tiles in continuous space,
//! smoothing elevation across shared tile corners, and the greedy
//! cost-weighted path walker. Presentation layers live elsewhere.
//!
//! ```
//! use hexen::{Grid, GridPoint, Path};
//!
//! let mut grid = Grid::with_elevation(4, 4, 1.0);
//! grid.set_elevation_at(1, 1, 3.0).unwrap();
//! grid.compute_elevation_corners();
//! grid.disable_sides();
//!
//! let path =
//!     Path::new(&grid, GridPoint::new(0, 0), GridPoint::new(3, 3)).unwrap();
//! assert!(path.is_finished());
//! println!("{}", path);
//! ```
//!
//! See [GridConfig] for building a grid declaratively.

mod config;
mod error;
mod util;
mod world;

pub use crate::{
    config::{ElevationOverride, GridConfig, PathConfig, TerrainOverride},
    error::HexError,
    util::unit::Point3,
    world::{
        hex::{mapper, HexDirection, Parity},
        path::{Path, PathStep},
        tile::{TerrainType, Tile},
        Grid, GridPoint,
    },
};
