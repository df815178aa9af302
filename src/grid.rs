use crate::astar::astar;
use crate::error::PathError;
use crate::heuristic::manhattan_distance;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::{debug, info};
use petgraph::unionfind::UnionFind;

/// Orthogonal step offsets, in the order neighbors are expanded. The order is
/// fixed so equal-cost searches stay reproducible.
const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// [OccupancyGrid] wraps a [BoolGrid] of cell occupancy ([true] meaning blocked)
/// and maintains connected components of the free cells in a [UnionFind]
/// structure. The components answer reachability queries up front, so a search
/// between disconnected cells fails without flood-filling the grid.
/// Implements [Grid] by building on [BoolGrid].
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for OccupancyGrid {
    fn default() -> OccupancyGrid {
        OccupancyGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl OccupancyGrid {
    /// Checks whether a cell lies within grid bounds and is not blocked.
    pub fn is_passable(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }
    /// The passable orthogonal neighbors of a cell, each with unit step cost.
    pub fn neighborhood(&self, pos: &Point) -> Vec<(Point, i32)> {
        ORTHOGONAL_STEPS
            .iter()
            .map(|(dx, dy)| Point::new(pos.x + dx, pos.y + dy))
            .filter(|p| self.is_passable(*p))
            .map(|p| (p, 1))
            .collect::<Vec<_>>()
    }
    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }
    /// Computes a shortest 4-connected path from start to goal using A* with the
    /// Manhattan distance heuristic. Both endpoints must be in bounds and
    /// passable; components must be up to date (see [update](Self::update)).
    ///
    /// On success the returned path runs from start to goal inclusive and is a
    /// true shortest path. Start equal to goal yields the single-cell path.
    pub fn shortest_path(&self, start: Point, goal: Point) -> Result<Vec<Point>, PathError> {
        if !self.is_passable(start) {
            return Err(PathError::InvalidCoordinate(start));
        }
        if !self.is_passable(goal) {
            return Err(PathError::InvalidCoordinate(goal));
        }
        if self.unreachable(&start, &goal) {
            debug!("{} and {} are on different components", start, goal);
            return Err(PathError::NoPathFound { start, goal });
        }
        astar(
            &start,
            |node| self.neighborhood(node),
            |point| manhattan_distance(point, &goal),
            |point| *point == goal,
        )
        .map(|(path, _cost)| path)
        .ok_or(PathError::NoPathFound { start, goal })
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.grid.get(x, y) {
                    let parent_ix = self.grid.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    // Linking right and up neighbours covers every free edge once.
                    let neighbours = [
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                    ]
                    .into_iter()
                    .filter(|p| self.is_passable(*p))
                    .map(|p| self.grid.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<bool> for OccupancyGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        OccupancyGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let p = Point::new(x as i32, y as i32);
        if self.grid.get(x, y) != blocked && blocked {
            self.components_dirty = true;
        } else {
            let p_ix = self.grid.get_ix(x, y);
            for (n, _) in self.neighborhood(&p) {
                self.components
                    .union(p_ix, self.grid.get_ix(n.x as usize, n.y as usize));
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}
