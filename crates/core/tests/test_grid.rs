use assert_approx_eq::assert_approx_eq;
use hexen::{
    ElevationOverride, Grid, GridConfig, GridPoint, HexDirection, HexError,
    TerrainOverride, TerrainType,
};
use strum::IntoEnumIterator;

/// A 4x4 grid with a ridge along the left edge
fn ridge_config() -> GridConfig {
    let elevations = [
        (0, 0, 2.0),
        (1, 0, 4.0),
        (0, 1, 2.0),
        (1, 1, 3.0),
        (0, 2, 3.0),
        (0, 3, 4.5),
    ];
    GridConfig {
        xsize: 4,
        ysize: 4,
        elevation: 1.0,
        elevations: elevations
            .iter()
            .map(|&(x, y, elevation)| ElevationOverride { x, y, elevation })
            .collect(),
        terrain: Vec::new(),
        smooth_corners: true,
        disable_sides: true,
    }
}

#[test]
fn test_from_config() {
    let grid = Grid::from_config(&ridge_config()).unwrap();
    assert_eq!(grid.xsize(), 4);
    assert_eq!(grid.ysize(), 4);
    assert_eq!(grid.tiles().count(), 6 * 6);
    assert_eq!(grid.interior().count(), 16);

    assert_approx_eq!(grid.hex_at(1, 0).unwrap().elevation(), 4.0);
    assert_approx_eq!(grid.hex_at(0, 3).unwrap().elevation(), 4.5);
    assert_approx_eq!(grid.hex_at(3, 3).unwrap().elevation(), 1.0);
    for (_, tile) in grid.interior() {
        assert!(tile.is_active());
        assert_eq!(tile.terrain(), TerrainType::Undefined);
        // Centers stay at the tile's own elevation
        assert_approx_eq!(tile.center().z, tile.elevation());
    }
}

/// Any two interior tiles that touch must agree on the height of every
/// vertex they share
#[test]
fn test_shared_vertices_match() {
    let grid = Grid::from_config(&ridge_config()).unwrap();
    let mut shared = 0;
    for (point, tile) in grid.interior() {
        for direction in HexDirection::iter() {
            let neighbor_point = match grid.neighbor(point, direction) {
                Some(neighbor_point) => neighbor_point,
                None => continue,
            };
            let neighbor = grid
                .hex_at(neighbor_point.x, neighbor_point.y)
                .unwrap();

            let mut matches = 0;
            for vertex in &tile.vertices()[..6] {
                for other in &neighbor.vertices()[..6] {
                    if (vertex.x - other.x).abs() < 1e-9
                        && (vertex.y - other.y).abs() < 1e-9
                    {
                        assert_approx_eq!(vertex.z, other.z);
                        matches += 1;
                    }
                }
            }
            assert_eq!(
                matches, 2,
                "{} and its {:?} neighbor {}",
                point, direction, neighbor_point
            );
            shared += matches;
        }
    }
    assert!(shared > 0);
}

#[test]
fn test_smoothed_corner_heights() {
    let grid = Grid::from_config(&ridge_config()).unwrap();
    // The top right corner of (0, 0) is shared with (0, 1) and (1, 1)
    let tile = grid.hex_at(0, 0).unwrap();
    assert_approx_eq!(tile.vertices()[2].z, (2.0 + 2.0 + 3.0) / 3.0);
}

#[test]
fn test_terrain_overrides() {
    let config = GridConfig {
        terrain: vec![
            TerrainOverride {
                x: 2,
                y: 1,
                terrain: TerrainType::River,
            },
            TerrainOverride {
                x: 2,
                y: 1,
                terrain: TerrainType::Water,
            },
        ],
        ..ridge_config()
    };
    let grid = Grid::from_config(&config).unwrap();
    assert_eq!(grid.hex_at(2, 1).unwrap().terrain(), TerrainType::Water);
    assert_eq!(grid.hex_at(1, 2).unwrap().terrain(), TerrainType::Undefined);
}

#[test]
fn test_override_out_of_range() {
    let config = GridConfig {
        elevations: vec![ElevationOverride {
            x: 4,
            y: 0,
            elevation: 1.0,
        }],
        ..ridge_config()
    };
    let err = Grid::from_config(&config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<HexError>(),
        Some(&HexError::TileOutOfRange {
            x: 4,
            y: 0,
            xsize: 4,
            ysize: 4
        })
    );
}

#[test]
fn test_without_smoothing_or_disable() {
    let config = GridConfig {
        smooth_corners: false,
        disable_sides: false,
        ..ridge_config()
    };
    let grid = Grid::from_config(&config).unwrap();
    // Every tile is a flat plateau
    let tile = grid.hex_at(1, 0).unwrap();
    for vertex in tile.vertices() {
        assert_approx_eq!(vertex.z, 4.0);
    }
    assert!(grid.tiles().all(|tile| tile.is_active()));
}

#[test]
fn test_global_vertices_placement() {
    let grid = Grid::from_config(&ridge_config()).unwrap();
    // Logical (0, 0) is global (1, 1), an odd column
    let vertices = grid.global_vertices_at(0, 0).unwrap();
    let center = vertices[6];
    assert_approx_eq!(center.x, 2.5);
    assert_approx_eq!(center.y, 3.0_f64.sqrt() * 2.0);
    assert_eq!(
        grid.hex_at(0, 0).unwrap().global_coord(),
        Some(GridPoint::new(1, 1))
    );
}
