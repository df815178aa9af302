use grid_util::point::Point;

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between
/// two cells. For 4-connected movement with unit step cost this matches the true
/// distance on an empty grid exactly, so it is both admissible and consistent
/// and A* stays optimal. A truncated Euclidean distance would overestimate the
/// remaining orthogonal-step cost in some configurations and is not usable here.
pub fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
