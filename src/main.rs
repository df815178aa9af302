use clap::Parser;
use grid_astar::{load_grid, render_path, GridFormat};
use grid_util::point::Point;
use std::path::PathBuf;
use std::process;

/// Finds a shortest path between two cells of a grid file and prints the grid
/// with the route overlaid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid file: whitespace-separated cell values, row-major
    #[arg(default_value = "grid.txt")]
    grid: PathBuf,

    /// Grid width in cells
    #[arg(long, default_value_t = 20)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Cell value that marks an obstacle
    #[arg(long, default_value_t = 5)]
    obstacle_code: i32,

    /// Start cell as x,y (defaults to the top-left corner)
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,

    /// Goal cell as x,y (defaults to the bottom-right corner)
    #[arg(long, value_parser = parse_point)]
    goal: Option<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x in {s:?}"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y in {s:?}"))?;
    Ok(Point::new(x, y))
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let format = GridFormat {
        width: args.width,
        height: args.height,
        obstacle_code: args.obstacle_code,
    };
    let grid = match load_grid(&args.grid, &format) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };
    let start = args.start.unwrap_or_else(|| Point::new(0, 0));
    let goal = args
        .goal
        .unwrap_or_else(|| Point::new(format.width as i32 - 1, format.height as i32 - 1));
    match grid.shortest_path(start, goal) {
        Ok(path) => {
            print!("{}", render_path(&grid, &path));
            println!("Path of {} steps:", path.len() - 1);
            for p in &path {
                println!("{p}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    }
}
