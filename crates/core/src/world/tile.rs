use crate::{
    error::HexError,
    util::unit::Point3,
    world::{hex::mapper, GridPoint},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::{Display, EnumIter, EnumString};

/// Movement coefficient for each terrain type, indexed by the enum ordinal
const TERRAIN_COEFFICIENTS: [f64; 6] = [1.0, 1.5, 2.0, 1.2, 2.5, 5.0];

/// The kind of ground that covers a tile. Each terrain type has a fixed
/// movement coefficient (see [TerrainType::coefficient]) that scales the
/// cost of moving onto or off of a tile.
///
/// Names are parsed and displayed in `SCREAMING_SNAKE_CASE`, e.g.
/// `LIGHT_FOREST`. Parsing is the only place where an unknown terrain name
/// can show up, so that's where it gets rejected.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerrainType {
    Undefined,
    LightForest,
    ThickForest,
    Plains,
    River,
    Water,
}

impl TerrainType {
    /// Scalar applied to movement cost for this terrain. Higher is slower.
    pub fn coefficient(self) -> f64 {
        TERRAIN_COEFFICIENTS[self as usize]
    }

    /// Parse a terrain name, e.g. `THICK_FOREST`. Returns an error with
    /// [HexError::UnknownTerrain] as the root cause for anything outside the
    /// fixed vocabulary.
    pub fn parse(name: &str) -> anyhow::Result<Self> {
        Self::from_str(name)
            .map_err(|_| HexError::UnknownTerrain(name.to_owned()).into())
    }
}

impl Default for TerrainType {
    fn default() -> Self {
        Self::Undefined
    }
}

/// A single hexagonal cell of terrain. A tile's shape is defined by 7
/// vertices: the 6 corners of the hexagon, plus its center.
///
/// ```text
///   1. /-----\ 2.
///     /       \
/// 0. /    6    \ 3.
///    \         /
///     \       /
///   5. \-----/ 4.
/// ```
///
/// The center vertex always sits at the tile's elevation. The corners start
/// out there as well, but [Grid::compute_elevation_corners] moves them so
/// that neighboring tiles meet seamlessly.
///
/// Tiles are normally created by a [Grid](crate::Grid), which also assigns
/// their global coordinate. They live as long as the grid does.
///
/// [Grid::compute_elevation_corners]: crate::Grid::compute_elevation_corners
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Corners in clockwise order starting from the left, then the center
    vertices: [Point3; 7],

    /// Height of the tile. The center vertex's `z` always matches this.
    elevation: f64,

    /// Inactive tiles exist only as padding around the edge of a grid
    active: bool,

    /// Position of this tile in the padded tile matrix of its grid. `None`
    /// until the tile is placed.
    global_coord: Option<GridPoint>,

    terrain: TerrainType,
}

impl Tile {
    /// Number of vertices in every tile: 6 corners plus the center
    pub const VERTEX_COUNT: usize = 7;
    /// Index of the center vertex
    pub const CENTER: usize = 6;

    /// Create a flat, unplaced tile at elevation 0
    pub fn new() -> Self {
        Self::with_elevation(0.0)
    }

    /// Create a flat, unplaced tile at the given elevation. All 7 vertices
    /// start at that height.
    pub fn with_elevation(elevation: f64) -> Self {
        Self {
            vertices: [Point3::ORIGIN.with_z(elevation); Self::VERTEX_COUNT],
            elevation,
            active: true,
            global_coord: None,
            terrain: TerrainType::default(),
        }
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Set the tile's elevation. This moves the center vertex along with it,
    /// but leaves the corners where they are.
    pub fn set_elevation(&mut self, elevation: f64) {
        self.elevation = elevation;
        self.vertices[Self::CENTER].z = elevation;
    }

    /// All 7 vertices. See the struct-level docs for the ordering.
    pub fn vertices(&self) -> &[Point3; 7] {
        &self.vertices
    }

    /// The center vertex
    pub fn center(&self) -> Point3 {
        self.vertices[Self::CENTER]
    }

    /// Get a single vertex. Fails if the index is outside `[0, 6]`.
    pub fn vertex_at(&self, index: usize) -> anyhow::Result<Point3> {
        self.vertices
            .get(index)
            .copied()
            .ok_or_else(|| HexError::VertexOutOfRange(index).into())
    }

    /// Replace a single vertex. Fails if the index is outside `[0, 6]`.
    /// Replacing the center also changes the tile's elevation.
    pub fn set_vertex_at(
        &mut self,
        index: usize,
        vertex: Point3,
    ) -> anyhow::Result<()> {
        Self::check_vertex_index(index)?;
        self.vertices[index] = vertex;
        if index == Self::CENTER {
            self.elevation = vertex.z;
        }
        Ok(())
    }

    /// Set the height of a single vertex. Fails if the index is outside
    /// `[0, 6]`. Setting the center's height also changes the tile's
    /// elevation.
    pub fn set_vertex_z_at(
        &mut self,
        index: usize,
        z: f64,
    ) -> anyhow::Result<()> {
        Self::check_vertex_index(index)?;
        if index == Self::CENTER {
            self.set_elevation(z);
        } else {
            self.vertices[index].z = z;
        }
        Ok(())
    }

    /// Replace all 7 vertices at once. The tile's elevation becomes the
    /// center's height. Fails without modifying the tile if the slice isn't
    /// exactly 7 long.
    pub fn set_vertices(
        &mut self,
        vertices: &[Point3],
    ) -> anyhow::Result<()> {
        let vertices: [Point3; 7] =
            vertices.try_into().map_err(|_| HexError::VertexCount {
                expected: Self::VERTEX_COUNT,
                actual: vertices.len(),
            })?;
        self.vertices = vertices;
        self.elevation = vertices[Self::CENTER].z;
        Ok(())
    }

    /// Set the height of all 7 vertices at once, without moving them in the
    /// plane. The tile's elevation becomes the center's height. Fails without
    /// modifying the tile if the slice isn't exactly 7 long.
    pub fn set_vertex_heights(
        &mut self,
        heights: &[f64],
    ) -> anyhow::Result<()> {
        if heights.len() != Self::VERTEX_COUNT {
            return Err(HexError::VertexCount {
                expected: Self::VERTEX_COUNT,
                actual: heights.len(),
            }
            .into());
        }
        for (vertex, &z) in self.vertices.iter_mut().zip(heights) {
            vertex.z = z;
        }
        self.elevation = heights[Self::CENTER];
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Position of this tile in its grid's padded tile matrix, or `None` if
    /// the tile hasn't been placed yet
    pub fn global_coord(&self) -> Option<GridPoint> {
        self.global_coord
    }

    /// Place this tile at a global coordinate. This moves every vertex in the
    /// plane to where the tile sits in continuous space (see
    /// [mapper::global_vertices]). Vertex heights are left alone.
    pub fn set_global_coord(&mut self, coord: GridPoint) {
        let placed = mapper::global_vertices(coord.x, coord.y);
        for (vertex, position) in self.vertices.iter_mut().zip(placed.iter()) {
            *vertex = position.with_z(vertex.z);
        }
        self.global_coord = Some(coord);
    }

    pub fn terrain(&self) -> TerrainType {
        self.terrain
    }

    pub fn set_terrain(&mut self, terrain: TerrainType) {
        self.terrain = terrain;
    }

    /// Set the terrain type by name, e.g. `RIVER`. Unknown names are rejected
    /// and leave the tile unchanged.
    pub fn set_terrain_name(&mut self, name: &str) -> anyhow::Result<()> {
        self.terrain = TerrainType::parse(name)?;
        Ok(())
    }

    /// Set the heights of the 6 corners, leaving the center alone
    pub(crate) fn set_corner_heights(&mut self, heights: [f64; 6]) {
        for (vertex, z) in self.vertices.iter_mut().zip(heights.iter()) {
            vertex.z = *z;
        }
    }

    fn check_vertex_index(index: usize) -> anyhow::Result<()> {
        if index < Self::VERTEX_COUNT {
            Ok(())
        } else {
            Err(HexError::VertexOutOfRange(index).into())
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.global_coord {
            Some(coord) => write!(f, "Tile at {}", coord)?,
            None => write!(f, "Unplaced tile")?,
        }
        writeln!(
            f,
            " ({}, elevation {}{})",
            self.terrain,
            self.elevation,
            if self.active { "" } else { ", inactive" }
        )?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            writeln!(f, "  Vertex {}: {}", i, vertex)?;
        }
        Ok(())
    }
}
