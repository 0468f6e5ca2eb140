//! ASCII rendering of mazes for terminal display.

use crate::maze::{Cell, Maze, Point};

/// Glyphs used for each cell state.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub empty: char,
    pub wall: char,
    pub start: char,
    pub exit: char,
    pub visited: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            empty: ' ',
            wall: '#',
            start: '@',
            exit: 'G',
            visited: '.',
        }
    }
}

impl Glyphs {
    fn for_cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Wall => self.wall,
            Cell::Start => self.start,
            Cell::Exit => self.exit,
            Cell::Visited => self.visited,
        }
    }
}

/// Rendering options; by default the boundary is drawn and column numbers
/// are not.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub hide_boundary: bool,
    pub show_numbers: bool,
    pub glyphs: Glyphs,
}

/// Render a maze with default options.
pub fn render(maze: &Maze) -> String {
    render_with(maze, &RenderOptions::default())
}

/// Render a maze to a string, one glyph per cell, top row first.
pub fn render_with(maze: &Maze, options: &RenderOptions) -> String {
    if maze.width() == 0 || maze.height() == 0 {
        return "Maze is empty!\n".to_string();
    }

    let width = maze.width() as usize;
    let mut out = format!(
        "Maze ID={} ({}x{})\n",
        maze.id,
        maze.width(),
        maze.height()
    );

    if !options.hide_boundary {
        if options.show_numbers {
            out.push(' ');
            for x in 0..width {
                out.push_str(&(x % 10).to_string());
            }
            out.push('\n');
        }
        out.push_str(&format!("+{}+\n", "-".repeat(width)));
    }

    for y in 0..maze.height() {
        if !options.hide_boundary {
            out.push('|');
        }
        for x in 0..maze.width() {
            let cell = maze.cell(Point::new(x, y)).unwrap_or(Cell::Empty);
            out.push(options.glyphs.for_cell(cell));
        }
        if !options.hide_boundary {
            out.push('|');
        }
        out.push('\n');
    }

    if !options.hide_boundary {
        out.push_str(&format!("+{}+\n", "-".repeat(width)));
    }

    out
}
