use crate::{
    config::PathConfig,
    timed,
    world::{
        hex::{mapper, HexDirection, Parity},
        tile::Tile,
        Grid, GridPoint,
    },
};
use anyhow::{anyhow, Context};
use log::{info, trace};
use std::{cmp::Ordering, fmt};
use validator::Validate;

type StepTable = [[Option<HexDirection>; 3]; 3];

/// Which way to step from an even column, indexed by
/// `[destination x vs current x][destination y vs current y]` with
/// `Less = 0, Equal = 1, Greater = 2`. `None` means we've arrived.
///
/// From an even column, neither neighbor on the right or left side moves up
/// a row **and** over a column at once, so heading up-and-sideways only
/// closes the column gap.
const EVEN_STEPS: StepTable = [
    // Destination is to the left
    [
        Some(HexDirection::DownLeft),
        Some(HexDirection::UpLeft),
        Some(HexDirection::UpLeft),
    ],
    // Same column
    [Some(HexDirection::Down), None, Some(HexDirection::Up)],
    // Destination is to the right
    [
        Some(HexDirection::DownRight),
        Some(HexDirection::UpRight),
        Some(HexDirection::UpRight),
    ],
];

/// Same as [EVEN_STEPS], for odd columns. Here it's the down-and-sideways
/// quadrants that only close the column gap.
const ODD_STEPS: StepTable = [
    // Destination is to the left
    [
        Some(HexDirection::DownLeft),
        Some(HexDirection::DownLeft),
        Some(HexDirection::UpLeft),
    ],
    // Same column
    [Some(HexDirection::Down), None, Some(HexDirection::Up)],
    // Destination is to the right
    [
        Some(HexDirection::DownRight),
        Some(HexDirection::DownRight),
        Some(HexDirection::UpRight),
    ],
];

/// A single tile along a path, with its logical position in the grid
#[derive(Copy, Clone, Debug)]
pub struct PathStep<'a> {
    pub position: GridPoint,
    pub tile: &'a Tile,
}

/// A walk across a grid from an origin tile to a destination tile.
///
/// The walk is greedy: from each tile it takes the single step toward the
/// destination given by a fixed per-parity table, without any lookahead.
/// Every step closes the gap along at least one axis, so the walk always
/// reaches the destination eventually, but there is **no guarantee** that
/// the path is the shortest or cheapest one. Each step costs
/// [mapper::move_cost] from the previous tile to the next one.
///
/// The walk is capped at [PathConfig::max_steps] tiles (origin included). If
/// the destination isn't reached within that budget, the walk stops early.
/// That's a normal outcome rather than an error: check [Path::is_finished]
/// and [Path::is_budget_exhausted].
///
/// The path borrows the grid it was computed on, so the grid can't be
/// modified while the path is alive.
#[derive(Clone, Debug)]
pub struct Path<'a> {
    origin: GridPoint,
    destination: GridPoint,
    max_steps: usize,
    /// Every tile visited, in order. Always starts with the origin.
    steps: Vec<PathStep<'a>>,
    total_cost: f64,
    finished: bool,
    budget_exhausted: bool,
}

impl<'a> Path<'a> {
    /// Walk from `origin` to `destination` (both logical coordinates) with
    /// the default step budget. Fails if either point is outside the grid.
    pub fn new(
        grid: &'a Grid,
        origin: GridPoint,
        destination: GridPoint,
    ) -> anyhow::Result<Self> {
        Self::with_config(grid, origin, destination, &PathConfig::default())
    }

    /// Walk from `origin` to `destination` (both logical coordinates) with
    /// a custom config. Fails if the config is invalid or either point is
    /// outside the grid.
    pub fn with_config(
        grid: &'a Grid,
        origin: GridPoint,
        destination: GridPoint,
        config: &PathConfig,
    ) -> anyhow::Result<Self> {
        config.validate().context("invalid path config")?;
        let origin_tile = grid
            .hex_at(origin.x, origin.y)
            .context("invalid path origin")?;
        grid.hex_at(destination.x, destination.y)
            .context("invalid path destination")?;

        // A walk never visits more than xsize + ysize - 1 tiles, so there's no
        // point reserving room for a bigger budget than that
        let capacity = config.max_steps.min(grid.xsize() + grid.ysize());
        let mut steps = Vec::with_capacity(capacity);
        steps.push(PathStep {
            position: origin,
            tile: origin_tile,
        });
        let mut path = Self {
            origin,
            destination,
            max_steps: config.max_steps,
            steps,
            total_cost: 0.0,
            finished: false,
            budget_exhausted: false,
        };

        timed!(
            format!("Path walk from {} to {}", origin, destination),
            path.walk(grid)
        )?;
        info!(
            "Path from {} to {}: {} steps, total cost {} ({})",
            origin,
            destination,
            path.step_count(),
            path.total_cost,
            path.status()
        );
        Ok(path)
    }

    /// Pick the direction to step in from `current` to get closer to
    /// `destination`. Returns `None` if we're already there.
    pub fn next_direction(
        current: GridPoint,
        destination: GridPoint,
    ) -> Option<HexDirection> {
        let table = match Grid::parity_at(current) {
            Parity::Even => &EVEN_STEPS,
            Parity::Odd => &ODD_STEPS,
        };
        let x_index = ordering_index(destination.x.cmp(&current.x));
        let y_index = ordering_index(destination.y.cmp(&current.y));
        table[x_index][y_index]
    }

    /// Take steps until we either arrive or run out of budget
    fn walk(&mut self, grid: &'a Grid) -> anyhow::Result<()> {
        loop {
            let current = self.last_step();
            let direction =
                match Self::next_direction(current.position, self.destination)
                {
                    Some(direction) => direction,
                    None => {
                        self.finished = true;
                        return Ok(());
                    }
                };
            if self.steps.len() >= self.max_steps {
                self.budget_exhausted = true;
                return Ok(());
            }

            // The tables only ever step toward the destination, so we can't
            // leave the box spanned by the origin and destination
            let position =
                grid.neighbor(current.position, direction).ok_or_else(|| {
                    anyhow!(
                        "step {:?} from {} left the grid",
                        direction,
                        current.position
                    )
                })?;
            let tile = grid.hex_at(position.x, position.y)?;
            let cost = mapper::move_cost(current.tile, tile);
            trace!(
                "Step {}: {} -> {} ({:?}), cost {}",
                self.steps.len(),
                current.position,
                position,
                direction,
                cost
            );

            self.total_cost += cost;
            self.steps.push(PathStep { position, tile });
        }
    }

    fn last_step(&self) -> PathStep<'a> {
        // The origin is always in the list, so it's never empty
        self.steps[self.steps.len() - 1]
    }

    fn status(&self) -> &'static str {
        if self.finished {
            "finished"
        } else if self.budget_exhausted {
            "budget exhausted"
        } else {
            "incomplete"
        }
    }

    pub fn origin(&self) -> GridPoint {
        self.origin
    }

    pub fn destination(&self) -> GridPoint {
        self.destination
    }

    /// Maximum number of tiles this path could hold, origin included
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Every tile visited, in order, starting with the origin
    pub fn steps(&self) -> &[PathStep<'a>] {
        &self.steps
    }

    /// Every tile visited, in order, starting with the origin
    pub fn tiles(&self) -> impl Iterator<Item = &'a Tile> + '_ {
        self.steps.iter().map(|step| step.tile)
    }

    /// Logical position of every tile visited, in order, starting with the
    /// origin
    pub fn positions(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.steps.iter().map(|step| step.position)
    }

    /// Sum of the movement cost of every step
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of steps taken, which is one less than the number of tiles
    pub fn step_count(&self) -> usize {
        self.steps.len() - 1
    }

    /// Did the walk reach the destination?
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Did the walk stop because it ran out of budget before reaching the
    /// destination?
    pub fn is_budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Path from {} to {} ({}): {} of max {} steps, total cost {:.3}",
            self.origin,
            self.destination,
            self.status(),
            self.step_count(),
            self.max_steps - 1,
            self.total_cost
        )?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(
                f,
                "  step {}: {} {} at elevation {}",
                i,
                step.position,
                step.tile.terrain(),
                step.tile.elevation()
            )?;
        }
        Ok(())
    }
}

fn ordering_index(ordering: Ordering) -> usize {
    match ordering {
        Ordering::Less => 0,
        Ordering::Equal => 1,
        Ordering::Greater => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    /// Every entry in both step tables must move to a real neighbor that
    /// closes the gap on at least one axis, without overshooting either
    #[test]
    fn test_step_tables_close_gap() {
        let grid = Grid::new(5, 5);
        let center = GridPoint::new(2, 2);
        for start in [center, GridPoint::new(1, 2)] {
            for dest_x in start.x - 1..=start.x + 1 {
                for dest_y in start.y - 1..=start.y + 1 {
                    let dest = GridPoint::new(dest_x, dest_y);
                    let direction = match Path::next_direction(start, dest) {
                        Some(direction) => direction,
                        None => {
                            assert_eq!(start, dest);
                            continue;
                        }
                    };
                    let next = grid.neighbor(start, direction).unwrap();
                    let gap = |p: GridPoint| {
                        (p.x as isize - dest.x as isize).abs()
                            + (p.y as isize - dest.y as isize).abs()
                    };
                    assert!(
                        gap(next) < gap(start),
                        "{:?} from {} toward {}",
                        direction,
                        start,
                        dest
                    );
                    assert!(
                        (next.y as isize - dest.y as isize).abs()
                            <= (start.y as isize - dest.y as isize).abs(),
                        "{:?} from {} overshot {}",
                        direction,
                        start,
                        dest
                    );
                }
            }
        }
    }

    #[test]
    fn test_same_origin_and_destination() {
        let grid = Grid::with_elevation(2, 2, 5.0);
        let point = GridPoint::new(1, 0);
        let path = Path::new(&grid, point, point).unwrap();
        assert!(path.is_finished());
        assert!(!path.is_budget_exhausted());
        assert_eq!(path.step_count(), 0);
        assert_eq!(path.positions().collect::<Vec<_>>(), vec![point]);
        assert_approx_eq!(path.total_cost(), 0.0);
    }

    #[test]
    fn test_straight_line() {
        let grid = Grid::with_elevation(1, 6, 1.0);
        let path =
            Path::new(&grid, GridPoint::new(0, 5), GridPoint::new(0, 0))
                .unwrap();
        assert!(path.is_finished());
        assert_eq!(path.step_count(), 5);
        // Flat, undefined terrain costs 2 per step
        assert_approx_eq!(path.total_cost(), 10.0);
        let ys: Vec<usize> = path.positions().map(|p| p.y).collect();
        assert_eq!(ys, vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_display() {
        let grid = Grid::with_elevation(2, 1, 1.0);
        let path =
            Path::new(&grid, GridPoint::new(0, 0), GridPoint::new(1, 0))
                .unwrap();
        assert_eq!(
            path.to_string(),
            "Path from (0, 0) to (1, 0) (finished): 1 of max 99 steps, \
            total cost 2.000\n  \
            step 0: (0, 0) UNDEFINED at elevation 1\n  \
            step 1: (1, 0) UNDEFINED at elevation 1\n"
        );
    }
}
