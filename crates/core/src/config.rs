use crate::world::tile::TerrainType;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines how a grid is built. Two grids built from the
/// same config will always be identical. See
/// [Grid::from_config](crate::Grid::from_config).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Number of logical columns
    #[validate(range(min = 1, max = 10000))]
    pub xsize: usize,

    /// Number of logical rows
    #[validate(range(min = 1, max = 10000))]
    pub ysize: usize,

    /// Starting elevation for every tile, including the padding ring
    pub elevation: f64,

    /// Elevation overrides for individual tiles, applied in order. If two
    /// overrides hit the same tile, the last one wins.
    pub elevations: Vec<ElevationOverride>,

    /// Terrain overrides for individual tiles, applied in order. Tiles
    /// without one stay `UNDEFINED`.
    pub terrain: Vec<TerrainOverride>,

    /// Run the corner smoothing pass after applying overrides. Without it,
    /// every tile is a flat plateau at its own elevation.
    pub smooth_corners: bool,

    /// Mark the padding ring inactive once the grid is built
    pub disable_sides: bool,
}

/// Sets the elevation of the tile at logical coordinate `(x, y)`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElevationOverride {
    pub x: usize,
    pub y: usize,
    pub elevation: f64,
}

/// Sets the terrain of the tile at logical coordinate `(x, y)`. Terrain
/// names are given in `SCREAMING_SNAKE_CASE`, e.g. `THICK_FOREST`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainOverride {
    pub x: usize,
    pub y: usize,
    pub terrain: TerrainType,
}

/// Configuration for a single path walk. See
/// [Path::with_config](crate::Path::with_config).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PathConfig {
    /// Maximum number of tiles the path can hold, **including** the origin.
    /// A budget of 1 means the walk can't take any steps at all.
    #[validate(range(min = 1))]
    pub max_steps: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            xsize: 10,
            ysize: 10,
            elevation: 0.0,
            elevations: Vec::new(),
            terrain: Vec::new(),
            smooth_corners: true,
            disable_sides: true,
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self { max_steps: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GridConfig::default().validate().is_ok());
        assert!(PathConfig::default().validate().is_ok());
        assert_eq!(PathConfig::default().max_steps, 100);
    }

    #[test]
    fn test_grid_size_range() {
        for (xsize, ysize) in [(0, 5), (5, 0), (10001, 1)] {
            let config = GridConfig {
                xsize,
                ysize,
                ..Default::default()
            };
            let errors = config.validate().unwrap_err();
            assert_eq!(errors.field_errors().len(), 1, "{}x{}", xsize, ysize);
        }
    }

    #[test]
    fn test_zero_budget() {
        let errors = PathConfig { max_steps: 0 }.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("max_steps"));
    }
}
