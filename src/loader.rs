//! Reads occupancy grids from the whitespace-separated integer format: one
//! value per cell, row-major, where a designated sentinel value marks an
//! obstacle and every other value marks a free cell.
use crate::error::GridLoadError;
use crate::grid::OccupancyGrid;
use grid_util::grid::Grid;
use log::info;
use std::fs;
use std::path::Path;

/// Shape and encoding of a grid file. The reference configuration is a
/// 20x20 grid with `5` as the obstacle sentinel.
#[derive(Clone, Debug)]
pub struct GridFormat {
    pub width: usize,
    pub height: usize,
    pub obstacle_code: i32,
}

impl Default for GridFormat {
    fn default() -> GridFormat {
        GridFormat {
            width: 20,
            height: 20,
            obstacle_code: 5,
        }
    }
}

/// Parses `width * height` cell values from `input`. Values beyond the expected
/// count are ignored; too few values is an error. The returned grid has its
/// connected components generated and is ready for path queries.
pub fn parse_grid(input: &str, format: &GridFormat) -> Result<OccupancyGrid, GridLoadError> {
    let expected = format.width * format.height;
    let mut grid = OccupancyGrid::new(format.width, format.height, false);
    let mut found = 0;
    for (i, token) in input.split_whitespace().take(expected).enumerate() {
        let x = i % format.width;
        let y = i / format.width;
        let value: i32 = token.parse().map_err(|_| GridLoadError::InvalidToken {
            row: y,
            col: x,
            token: token.to_string(),
        })?;
        if value == format.obstacle_code {
            grid.grid.set(x, y, true);
        }
        found += 1;
    }
    if found < expected {
        return Err(GridLoadError::Truncated { expected, found });
    }
    grid.generate_components();
    Ok(grid)
}

/// Loads and parses a grid file.
pub fn load_grid(path: &Path, format: &GridFormat) -> Result<OccupancyGrid, GridLoadError> {
    let input = fs::read_to_string(path)?;
    let grid = parse_grid(&input, format)?;
    info!(
        "Loaded {}x{} grid from {}",
        format.width,
        format.height,
        path.display()
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::point::Point;

    fn small_format() -> GridFormat {
        GridFormat {
            width: 3,
            height: 2,
            obstacle_code: 5,
        }
    }

    #[test]
    fn parses_obstacles_row_major() {
        let grid = parse_grid("0 5 0\n0 0 5\n", &small_format()).unwrap();
        assert!(!grid.is_passable(Point::new(1, 0)));
        assert!(!grid.is_passable(Point::new(2, 1)));
        assert!(grid.is_passable(Point::new(0, 0)));
        assert!(grid.is_passable(Point::new(1, 1)));
    }

    #[test]
    fn parsed_grid_answers_reachability() {
        let grid = parse_grid("0 5 0 0 5 0", &small_format()).unwrap();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(0, 1)));
    }

    #[test]
    fn rejects_short_input() {
        let err = parse_grid("0 0 0 0", &small_format()).unwrap_err();
        match err {
            GridLoadError::Truncated { expected, found } => {
                assert_eq!(expected, 6);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_integer_token() {
        let err = parse_grid("0 0 0 0 x 0", &small_format()).unwrap_err();
        match err {
            GridLoadError::InvalidToken { row, col, token } => {
                assert_eq!((row, col), (1, 1));
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ignores_trailing_values() {
        let grid = parse_grid("0 0 0 0 0 0 5 5 5", &small_format()).unwrap();
        assert!(grid.is_passable(Point::new(0, 0)));
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 1)));
    }
}
