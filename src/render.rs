//! Overlays a computed route onto a grid for display. The search itself never
//! mutates cell state; the overlay is derived afresh from the grid and a path.
use crate::grid::OccupancyGrid;
use fxhash::FxHashSet;
use grid_util::grid::Grid;
use grid_util::point::Point;

/// Display classification of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Free,
    Obstacle,
    OnPath,
}

impl CellState {
    pub fn glyph(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Obstacle => '#',
            CellState::OnPath => '*',
        }
    }
}

/// Classifies every cell row-major, marking path cells as [CellState::OnPath].
pub fn cell_states(grid: &OccupancyGrid, path: &[Point]) -> Vec<CellState> {
    let on_path: FxHashSet<Point> = path.iter().copied().collect();
    let mut states = Vec::with_capacity(grid.width() * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x as i32, y as i32);
            let state = if on_path.contains(&p) {
                CellState::OnPath
            } else if grid.get(x, y) {
                CellState::Obstacle
            } else {
                CellState::Free
            };
            states.push(state);
        }
    }
    states
}

/// Formats the grid with the path overlaid, one row per line.
pub fn render_path(grid: &OccupancyGrid, path: &[Point]) -> String {
    let states = cell_states(grid, path);
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in states.chunks(grid.width()) {
        out.extend(row.iter().map(|s| s.glyph()));
        out.push('\n');
    }
    out
}
