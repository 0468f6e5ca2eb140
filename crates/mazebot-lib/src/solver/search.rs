use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::frontier::Frontier;
use crate::maze::{Cell, Maze, Point};

use super::vertex::{Terminal, VertexArena};
use super::Direction;

/// Neighbour probe order. Among several equal-length shortest paths this
/// decides which one is returned; fixed to south, east, west, north.
const PROBE_ORDER: [Direction; 4] = [
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::North,
];

/// Best-first search from the maze's start to its exit.
///
/// Returns the terminal vertex when the exit is reached, `Ok(None)` when
/// the frontier empties first, and an error when the maze violates the
/// caller contract (see [`Maze::validate`]).
///
/// The engine deliberately does not de-duplicate against the open set: a
/// coordinate already queued at another cost is pushed again, and the
/// visited check on pop resolves the duplicates. With unit edge costs and
/// a consistent heuristic the first expansion of a coordinate is already
/// the cheapest, so this costs memory, not correctness.
pub fn solve<F>(maze: &Maze, heuristic: F) -> Result<Option<Terminal>>
where
    F: Fn(Point, Point) -> u32,
{
    maze.validate()?;

    let mut arena = VertexArena::new();
    let mut frontier = Frontier::new();
    let mut visited: HashSet<Point> = HashSet::new();

    let start = arena.alloc(maze.start, 0, heuristic(maze.start, maze.exit), None);
    frontier.push(&mut arena, start);

    while let Some(id) = frontier.pop_min(&mut arena) {
        let point = arena[id].point;
        if !visited.insert(point) {
            // A cheaper duplicate of this coordinate was already expanded.
            continue;
        }

        if point == maze.exit {
            let mileage = arena[id].mileage;
            debug!(
                maze = %maze.id,
                expanded = visited.len(),
                mileage,
                "exit reached"
            );
            return Ok(Some(Terminal { arena, vertex: id }));
        }

        let mileage = arena[id].mileage + 1;
        for direction in PROBE_ORDER {
            let next = direction.step(point);
            if visited.contains(&next) {
                continue;
            }
            if !maze.cell(next).is_some_and(Cell::is_walkable) {
                continue;
            }
            let neighbour = arena.alloc(next, mileage, heuristic(next, maze.exit), Some(id));
            frontier.push(&mut arena, neighbour);
        }
    }

    debug!(maze = %maze.id, expanded = visited.len(), "frontier exhausted");
    Ok(None)
}
