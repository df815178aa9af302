//! Fuzzes the pathfinding system by checking for many random grids that the A*
//! result agrees with a plain breadth-first search over the same passability
//! predicate: a path is found exactly when BFS reaches the goal, and its length
//! equals the BFS distance.
use grid_astar::{OccupancyGrid, PathError};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(n: usize, rng: &mut StdRng) -> OccupancyGrid {
    let mut grid: OccupancyGrid = OccupancyGrid::new(n, n, false);
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            grid.set(x, y, rng.gen_bool(0.4));
        }
    }
    // Keep the corners free so start and goal are always valid cells.
    grid.set(0, 0, false);
    grid.set(n - 1, n - 1, false);
    grid.generate_components();
    grid
}

/// Unweighted BFS distance in steps, the oracle for A* optimality.
fn bfs_distance(grid: &OccupancyGrid, start: Point, goal: Point) -> Option<usize> {
    let mut distance = vec![usize::MAX; grid.width() * grid.height()];
    let ix = |p: &Point| p.y as usize * grid.width() + p.x as usize;
    let mut queue = VecDeque::new();
    distance[ix(&start)] = 0;
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(distance[ix(&current)]);
        }
        for (neighbor, _) in grid.neighborhood(&current) {
            if distance[ix(&neighbor)] == usize::MAX {
                distance[ix(&neighbor)] = distance[ix(&current)] + 1;
                queue.push_back(neighbor);
            }
        }
    }
    None
}

fn visualize_grid(grid: &OccupancyGrid, start: &Point, end: &Point) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x as i32, y as i32);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.get(x, y) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn assert_valid_path(grid: &OccupancyGrid, path: &[Point], start: Point, goal: Point) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for p in path {
        assert!(grid.is_passable(*p), "path crosses blocked cell {p}");
    }
    for pair in path.windows(2) {
        let (dx, dy) = (pair[1].x - pair[0].x, pair[1].y - pair[0].y);
        assert_eq!(
            dx.abs() + dy.abs(),
            1,
            "{} -> {} is not an orthogonal unit step",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn fuzz_optimality_against_bfs() {
    const N: usize = 10;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng);
        let oracle = bfs_distance(&grid, start, end);
        match grid.shortest_path(start, end) {
            Ok(path) => {
                let expected = oracle.unwrap_or_else(|| {
                    visualize_grid(&grid, &start, &end);
                    panic!("A* found a path where BFS found none");
                });
                assert_valid_path(&grid, &path, start, end);
                if path.len() - 1 != expected {
                    visualize_grid(&grid, &start, &end);
                    panic!(
                        "A* path has {} steps, BFS distance is {}",
                        path.len() - 1,
                        expected
                    );
                }
            }
            Err(PathError::NoPathFound { .. }) => {
                if oracle.is_some() {
                    visualize_grid(&grid, &start, &end);
                    panic!("A* reported no path where BFS found one");
                }
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}

#[test]
fn fuzz_determinism() {
    const N: usize = 10;
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(1);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng);
        let first = grid.shortest_path(start, end);
        let second = grid.shortest_path(start, end);
        assert_eq!(first, second);
    }
}

#[test]
fn fuzz_arbitrary_endpoints() {
    const N: usize = 8;
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng);
        let start = Point::new(rng.gen_range(0..N) as i32, rng.gen_range(0..N) as i32);
        let goal = Point::new(rng.gen_range(0..N) as i32, rng.gen_range(0..N) as i32);
        match grid.shortest_path(start, goal) {
            Ok(path) => {
                assert_valid_path(&grid, &path, start, goal);
                assert_eq!(path.len() - 1, bfs_distance(&grid, start, goal).unwrap());
            }
            Err(PathError::InvalidCoordinate(p)) => {
                assert!(!grid.is_passable(p));
            }
            Err(PathError::NoPathFound { .. }) => {
                assert!(bfs_distance(&grid, start, goal).is_none());
            }
        }
    }
}
