//! Mazebot library entry points.
//!
//! This crate exposes helpers to fetch mazes from the mazebot challenge
//! service, model them as grids, run the informed search over them, and
//! render the result as text. Higher-level consumers (the CLI) should only
//! depend on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod client;
pub mod error;
pub mod frontier;
pub mod maze;
pub mod render;
pub mod solver;

pub use client::{BotResponse, Certificate, MazeBot};
pub use error::{Error, Result};
pub use frontier::{Frontier, Queued};
pub use maze::{Cell, Maze, Point};
pub use render::{render, render_with, Glyphs, RenderOptions};
pub use solver::{
    find_path, manhattan, reconstruct_path, solve, Direction, Solution, Terminal, Vertex,
    VertexArena, VertexId,
};
