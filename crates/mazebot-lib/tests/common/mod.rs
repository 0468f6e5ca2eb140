use mazebot_lib::{Cell, Maze, Point, Solution};

/// Build a maze from rows of glyphs: `#` wall, `@` start, `G` exit,
/// anything else empty. Rows are top-first, so glyph (x, y) lands on
/// `Point::new(x, y)`.
pub fn maze_from_rows(rows: &[&str]) -> Maze {
    let height = rows.len();
    let width = rows.first().map(|row| row.len()).unwrap_or(0);
    let mut cells = vec![vec![Cell::Empty; height]; width];
    let mut start = Point::new(0, 0);
    let mut exit = Point::new(0, 0);

    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "fixture rows must be equally wide");
        for (x, glyph) in row.chars().enumerate() {
            let cell = match glyph {
                '#' => Cell::Wall,
                '@' => Cell::Start,
                'G' => Cell::Exit,
                _ => Cell::Empty,
            };
            if cell == Cell::Start {
                start = Point::new(x as i32, y as i32);
            }
            if cell == Cell::Exit {
                exit = Point::new(x as i32, y as i32);
            }
            cells[x][y] = cell;
        }
    }

    Maze::new("fixture", start, exit, cells)
}

/// Replay the solution's moves from the maze's start, asserting every step
/// stays in bounds on a walkable cell and that the walk ends on the exit.
pub fn assert_walkable_path(maze: &Maze, solution: &Solution) {
    let mut position = maze.start;
    for &direction in &solution.actions {
        position = direction.step(position);
        let cell = maze.cell(position).expect("path stays inside the maze");
        assert!(cell.is_walkable(), "path crosses {cell:?} at {position}");
    }
    assert_eq!(position, maze.exit, "path must end on the exit");
}
