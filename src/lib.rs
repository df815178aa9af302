//! # grid_astar
//!
//! Shortest paths on 2D occupancy grids. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over 4-connected
//! uniform-cost grids with the Manhattan distance heuristic, which is admissible
//! and consistent for orthogonal unit steps, so returned paths are optimal.
//! Pre-computes [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_astar::OccupancyGrid;
//! use grid_util::grid::Grid;
//! use grid_util::point::Point;
//!
//! let mut grid = OccupancyGrid::new(3, 3, false);
//! grid.set(1, 1, true);
//! grid.generate_components();
//! let path = grid.shortest_path(Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
mod astar;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod loader;
pub mod render;

pub use error::{GridLoadError, PathError};
pub use grid::OccupancyGrid;
pub use loader::{load_grid, parse_grid, GridFormat};
pub use render::{cell_states, render_path, CellState};
