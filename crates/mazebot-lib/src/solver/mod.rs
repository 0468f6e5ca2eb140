//! Maze solver: an informed best-first search over the grid model.
//!
//! This module provides:
//! - [`solve`] - the raw search engine, returning a [`Terminal`] vertex
//! - [`reconstruct_path`] - predecessor walk turning a terminal into moves
//! - [`find_path`] - the high-level entry point combining the two
//! - [`manhattan`] - the default heuristic
//!
//! The heuristic is an ordinary `Fn(Point, Point) -> u32`, so callers can
//! swap in alternatives without touching the engine. Optimality of the
//! returned path is guaranteed only for admissible, consistent estimates;
//! Manhattan distance qualifies on this 4-connected unit-cost grid.

mod heuristic;
mod search;
mod vertex;

pub use heuristic::manhattan;
pub use search::solve;
pub use vertex::{Terminal, Vertex, VertexArena, VertexId};

use crate::error::{Error, Result};
use crate::maze::{Maze, Point};

/// A single cardinal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Coordinate delta of one step in this direction (y grows south).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The point one step away from `p` in this direction.
    pub const fn step(self, p: Point) -> Point {
        let (dx, dy) = self.delta();
        p.shift(dx, dy)
    }

    /// Single-letter encoding understood by the maze service.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// The direction implied by a unit coordinate delta, or `None` when
    /// the delta is not a single cardinal step.
    fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }
}

/// A solved maze: the moves from start to exit and the coordinates the
/// path passes through (start first, exit last).
#[derive(Debug, Clone)]
pub struct Solution {
    pub actions: Vec<Direction>,
    pub points: Vec<Point>,
}

impl Solution {
    /// Number of moves in the solution.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Compact "NESW" letter string for submission.
    pub fn directions_string(&self) -> String {
        self.actions.iter().map(|d| d.letter()).collect()
    }
}

/// Walk predecessor links from the terminal vertex back to the start and
/// convert the coordinate chain into ordered moves.
///
/// Chain-adjacent points must differ by exactly one cardinal step;
/// anything else means the search tree is corrupt and fails loudly
/// instead of guessing a direction.
pub fn reconstruct_path(terminal: &Terminal) -> Result<Solution> {
    let arena = &terminal.arena;
    let mut id = terminal.vertex;
    let mut points = vec![arena[id].point];
    let mut actions = Vec::new();

    while let Some(prev) = arena[id].prev {
        let curr = arena[id].point;
        let before = arena[prev].point;
        let direction = Direction::from_delta(curr.x - before.x, curr.y - before.y).ok_or(
            Error::CorruptPathChain {
                from: before,
                to: curr,
            },
        )?;
        actions.push(direction);
        points.push(before);
        id = prev;
    }

    actions.reverse();
    points.reverse();
    Ok(Solution { actions, points })
}

/// Solve the maze and reconstruct the move sequence in one call.
///
/// An exhausted frontier surfaces as [`Error::NoPathFound`] so callers
/// can match on it; it is an expected outcome for sealed mazes, not a
/// fault.
pub fn find_path<F>(maze: &Maze, heuristic: F) -> Result<Solution>
where
    F: Fn(Point, Point) -> u32,
{
    let terminal = solve(maze, heuristic)?.ok_or(Error::NoPathFound {
        start: maze.start,
        exit: maze.exit,
    })?;
    reconstruct_path(&terminal)
}
