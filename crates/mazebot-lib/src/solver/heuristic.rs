use crate::maze::Point;

/// Manhattan distance: `|dx| + |dy|`.
///
/// Admissible and consistent on a 4-connected unit-cost grid, so searches
/// guided by it return true shortest paths. Any other
/// `Fn(Point, Point) -> u32` plugs into the engine the same way; a
/// constant zero degrades the search to plain Dijkstra.
pub fn manhattan(from: Point, goal: Point) -> u32 {
    from.x.abs_diff(goal.x) + from.y.abs_diff(goal.y)
}
