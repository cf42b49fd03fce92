pub mod hex;
pub mod path;
pub mod tile;

use crate::{
    config::GridConfig,
    error::HexError,
    timed,
    util::unit::Point3,
    world::{
        hex::{HexDirection, Parity, VERTEX_NEIGHBORS},
        tile::{TerrainType, Tile},
    },
};
use anyhow::Context;
use derive_more::Display;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// An `(x, y)` pair of grid indices. Depending on context this is either a
/// logical coordinate (what callers of [Grid] use, starting at `(0, 0)` for the
/// first real tile) or a global coordinate (the position in the grid's padded
/// tile matrix, see [Tile::global_coord]).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct GridPoint {
    pub x: usize,
    pub y: usize,
}

impl GridPoint {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A rectangular grid of hexagon tiles. See [hex] for a description of the
/// offset coordinate system.
///
/// Internally the grid is padded with one ring of extra tiles on every side.
/// This lets [Grid::compute_elevation_corners] read the neighbors of edge tiles
/// without special cases. The padding is never exposed through the public
/// API: every method that takes `x`/`y` uses logical coordinates, where
/// `0 <= x < xsize` and `0 <= y < ysize`. The padding tiles do show up in
/// [Grid::tiles], and are marked inactive by [Grid::disable_sides].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    xsize: usize,
    ysize: usize,
    /// The padded tile matrix, `(xsize + 2) * (ysize + 2)` tiles stored column
    /// by column
    tiles: Vec<Tile>,
}

impl Grid {
    /// Width of the padding ring around the grid, in tiles
    const BORDER: usize = 1;

    /// Create a grid of flat tiles at elevation 0
    pub fn new(xsize: usize, ysize: usize) -> Self {
        Self::with_elevation(xsize, ysize, 0.0)
    }

    /// Create a grid where every tile (padding included) starts at the given
    /// elevation
    pub fn with_elevation(xsize: usize, ysize: usize, elevation: f64) -> Self {
        let width = xsize + 2 * Self::BORDER;
        let height = ysize + 2 * Self::BORDER;
        let mut tiles = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                let mut tile = Tile::with_elevation(elevation);
                tile.set_global_coord(GridPoint::new(x, y));
                tiles.push(tile);
            }
        }
        debug!(
            "Initialized {}x{} grid with {} tiles (including padding)",
            xsize,
            ysize,
            tiles.len()
        );

        Self {
            xsize,
            ysize,
            tiles,
        }
    }

    /// Build a grid from a config. This validates the config, applies all
    /// elevation and terrain overrides, then runs the smoothing pass and
    /// disables the padding if the config asks for it. Returns an error if
    /// the config is invalid or an override points outside the grid.
    pub fn from_config(config: &GridConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid grid config")?;

        let mut grid =
            Self::with_elevation(config.xsize, config.ysize, config.elevation);
        for ov in &config.elevations {
            grid.set_elevation_at(ov.x, ov.y, ov.elevation)
                .context("invalid elevation override")?;
        }
        for ov in &config.terrain {
            grid.set_terrain_at(ov.x, ov.y, ov.terrain)
                .context("invalid terrain override")?;
        }
        if config.smooth_corners {
            grid.compute_elevation_corners();
        }
        if config.disable_sides {
            grid.disable_sides();
        }

        info!(
            "Built {}x{} grid from config ({} elevation overrides, \
            {} terrain overrides)",
            grid.xsize,
            grid.ysize,
            config.elevations.len(),
            config.terrain.len()
        );
        Ok(grid)
    }

    /// Number of logical columns
    pub fn xsize(&self) -> usize {
        self.xsize
    }

    /// Number of logical rows
    pub fn ysize(&self) -> usize {
        self.ysize
    }

    /// Parity of the column that a logical coordinate falls in. This is the
    /// parity of the **global** column, which is what determines the
    /// coordinate offsets to each neighbor.
    pub fn parity_at(point: GridPoint) -> Parity {
        Parity::of(point.x + Self::BORDER)
    }

    /// Does the logical coordinate fall inside the grid?
    pub fn contains(&self, point: GridPoint) -> bool {
        point.x < self.xsize && point.y < self.ysize
    }

    /// Get the tile at a logical coordinate
    pub fn hex_at(&self, x: usize, y: usize) -> anyhow::Result<&Tile> {
        let index = self.checked_index(x, y)?;
        Ok(&self.tiles[index])
    }

    /// Get a mutable reference to the tile at a logical coordinate
    pub fn hex_at_mut(
        &mut self,
        x: usize,
        y: usize,
    ) -> anyhow::Result<&mut Tile> {
        let index = self.checked_index(x, y)?;
        Ok(&mut self.tiles[index])
    }

    /// Set the elevation of the tile at a logical coordinate. Corner heights
    /// aren't updated until the next [Grid::compute_elevation_corners].
    pub fn set_elevation_at(
        &mut self,
        x: usize,
        y: usize,
        elevation: f64,
    ) -> anyhow::Result<()> {
        self.hex_at_mut(x, y)?.set_elevation(elevation);
        Ok(())
    }

    /// Set the terrain type of the tile at a logical coordinate
    pub fn set_terrain_at(
        &mut self,
        x: usize,
        y: usize,
        terrain: TerrainType,
    ) -> anyhow::Result<()> {
        self.hex_at_mut(x, y)?.set_terrain(terrain);
        Ok(())
    }

    /// Get the vertices of the tile at a logical coordinate, positioned in
    /// continuous space.
    ///
    /// Placement uses the tile's **global** coordinate, i.e. the frame of the
    /// padded tile matrix, so the padding ring sits around the continuous
    /// space origin and logical `(0, 0)` lands at global `(1, 1)`. That's an
    /// odd column, so its center is at `(2.5, 2H)` rather than `(1, 0.5H)`.
    /// This is the only frame in which the vertices agree with
    /// [Grid::neighbor], since neighbor offsets depend on the global column
    /// parity. Use [mapper::origin](hex::mapper::origin) with `x + 1, y + 1` to
    /// convert.
    pub fn global_vertices_at(
        &self,
        x: usize,
        y: usize,
    ) -> anyhow::Result<&[Point3; 7]> {
        Ok(self.hex_at(x, y)?.vertices())
    }

    /// Iterate over every tile in the padded matrix, padding included. Use
    /// [Tile::global_coord] to tell where each one sits.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Iterate over the real (non-padding) tiles, with their logical
    /// coordinates
    pub fn interior(&self) -> impl Iterator<Item = (GridPoint, &Tile)> {
        let (xsize, ysize) = (self.xsize, self.ysize);
        (0..xsize).flat_map(move |x| {
            (0..ysize).map(move |y| {
                let point = GridPoint::new(x, y);
                (point, &self.tiles[self.index(x + 1, y + 1)])
            })
        })
    }

    /// Is the given **global** coordinate part of the padding ring?
    pub fn is_border(&self, global: GridPoint) -> bool {
        global.x == 0
            || global.y == 0
            || global.x == self.xsize + 1
            || global.y == self.ysize + 1
    }

    /// Get the logical coordinate of the neighbor of a tile in a direction.
    /// Returns `None` if the neighbor falls outside the grid (including into
    /// the padding).
    pub fn neighbor(
        &self,
        point: GridPoint,
        direction: HexDirection,
    ) -> Option<GridPoint> {
        let (dx, dy) = direction.offset(Self::parity_at(point));
        let neighbor = GridPoint::new(
            point.x.checked_add_signed(dx)?,
            point.y.checked_add_signed(dy)?,
        );
        if self.contains(neighbor) {
            Some(neighbor)
        } else {
            None
        }
    }

    /// Recompute the height of every corner of every real tile, so that
    /// neighboring tiles meet seamlessly. Each corner of a hex grid is shared
    /// by exactly 3 tiles, and its height becomes the mean of those 3 tiles'
    /// elevations. Since all three tiles resolve the shared corner to the same
    /// three elevations, they all end up with the same height for it.
    ///
    /// Only elevations are read, so the result doesn't depend on the order
    /// that tiles are visited in. Padding tiles are read as neighbors, but
    /// their own corners are left alone.
    pub fn compute_elevation_corners(&mut self) {
        timed!("Elevation corner smoothing", {
            for x in Self::BORDER..=self.xsize {
                let parity = Parity::of(x);
                for y in Self::BORDER..=self.ysize {
                    let own = self.tiles[self.index(x, y)].elevation();
                    let mut heights = [0.0; 6];
                    for (height, (a, b)) in
                        heights.iter_mut().zip(VERTEX_NEIGHBORS.iter())
                    {
                        let elev_a = self.elevation_offset(x, y, *a, parity);
                        let elev_b = self.elevation_offset(x, y, *b, parity);
                        *height = (own + elev_a + elev_b) / 3.0;
                    }

                    let index = self.index(x, y);
                    self.tiles[index].set_corner_heights(heights);
                }
            }
        });
    }

    /// Mark every tile in the padding ring as inactive. Real tiles are left
    /// alone. Run this after [Grid::compute_elevation_corners] if the padding
    /// shouldn't be used for anything else, since the smoothing pass still
    /// reads padding elevations.
    pub fn disable_sides(&mut self) {
        let mut disabled = 0;
        for index in 0..self.tiles.len() {
            let global = self.global_point(index);
            if self.is_border(global) {
                self.tiles[index].set_active(false);
                disabled += 1;
            }
        }
        debug!("Disabled {} padding tiles", disabled);
    }

    /// Convert a logical coordinate to an index in the tile vec, or fail if
    /// the coordinate is outside the grid
    fn checked_index(&self, x: usize, y: usize) -> anyhow::Result<usize> {
        if self.contains(GridPoint::new(x, y)) {
            Ok(self.index(x + Self::BORDER, y + Self::BORDER))
        } else {
            Err(HexError::TileOutOfRange {
                x,
                y,
                xsize: self.xsize,
                ysize: self.ysize,
            }
            .into())
        }
    }

    /// Convert a global coordinate to an index in the tile vec
    fn index(&self, x: usize, y: usize) -> usize {
        x * (self.ysize + 2 * Self::BORDER) + y
    }

    /// Convert an index in the tile vec to a global coordinate
    fn global_point(&self, index: usize) -> GridPoint {
        let height = self.ysize + 2 * Self::BORDER;
        GridPoint::new(index / height, index % height)
    }

    /// Elevation of the neighbor of the global tile `(x, y)`. The tile must
    /// not be in the padding, so that the neighbor always exists.
    fn elevation_offset(
        &self,
        x: usize,
        y: usize,
        direction: HexDirection,
        parity: Parity,
    ) -> f64 {
        let (dx, dy) = direction.offset(parity);
        let nx = (x as isize + dx) as usize;
        let ny = (y as isize + dy) as usize;
        self.tiles[self.index(nx, ny)].elevation()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", self.xsize, self.ysize)?;
        for tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
