mod common;

use common::{assert_walkable_path, maze_from_rows};
use mazebot_lib::{find_path, manhattan, solve, Cell, Error, Maze, Point};

#[test]
fn routes_through_the_single_gap() {
    // Wall row across y=1 with a one-cell gap at (1, 1).
    let maze = maze_from_rows(&[
        "@  ", //
        "# #", //
        "  G",
    ]);

    let solution = find_path(&maze, manhattan).expect("gap is passable");
    assert_eq!(solution.len(), 4);
    assert!(solution.points.contains(&Point::new(1, 1)));
    assert_walkable_path(&maze, &solution);
}

#[test]
fn start_equal_to_exit_yields_empty_solution() {
    let mut cells = vec![vec![Cell::Empty; 2]; 2];
    cells[0][0] = Cell::Start;
    let point = Point::new(0, 0);
    let maze = Maze::new("trivial", point, point, cells);

    let solution = find_path(&maze, manhattan).expect("already there");
    assert!(solution.is_empty());
    assert_eq!(solution.points, vec![point]);
}

#[test]
fn sealed_exit_reports_no_path() {
    let maze = maze_from_rows(&[
        "@    ", //
        "  ###", //
        "  #G#", //
        "  ###",
    ]);

    let error = find_path(&maze, manhattan).expect_err("exit is sealed");
    assert!(matches!(error, Error::NoPathFound { .. }));
}

#[test]
fn sealed_exit_leaves_solve_empty_handed() {
    let maze = maze_from_rows(&[
        "@#G", //
        " # ", //
        " # ",
    ]);
    assert!(solve(&maze, manhattan)
        .expect("maze is well formed")
        .is_none());
}

#[test]
fn open_grid_path_length_matches_manhattan_distance() {
    let maze = maze_from_rows(&[
        "@    ", //
        "     ", //
        "     ", //
        "     ", //
        "    G",
    ]);

    let solution = find_path(&maze, manhattan).expect("open grid");
    assert_eq!(solution.len(), 8);
    assert_eq!(solution.points.len(), 9);
    assert_walkable_path(&maze, &solution);
}

#[test]
fn detour_around_a_wall_is_shortest_possible() {
    // Wall column at x=2 spanning y=0..=2 forces the path through (2, 3).
    let maze = maze_from_rows(&[
        "@ # G", //
        "  #  ", //
        "  #  ", //
        "     ",
    ]);

    let solution = find_path(&maze, manhattan).expect("detour exists");
    assert_eq!(solution.len(), 10);
    assert_walkable_path(&maze, &solution);
}

#[test]
fn zero_heuristic_finds_a_path_of_equal_length() {
    let maze = maze_from_rows(&[
        "@ # G", //
        "  #  ", //
        "  #  ", //
        "     ",
    ]);

    let informed = find_path(&maze, manhattan).expect("route exists");
    let uninformed = find_path(&maze, |_, _| 0).expect("route exists");
    assert_eq!(informed.len(), uninformed.len());
    assert_walkable_path(&maze, &uninformed);
}

#[test]
fn repeated_solves_return_identical_lengths() {
    let maze = maze_from_rows(&[
        "@  #  ", //
        " # #  ", //
        " #   #", //
        " ### #", //
        "    G ",
    ]);

    let first = find_path(&maze, manhattan).expect("route exists");
    let second = find_path(&maze, manhattan).expect("route exists");
    assert_eq!(first.len(), second.len());
    assert_eq!(first.points, second.points);
}

#[test]
fn terminal_reports_exit_point_and_path_cost() {
    let maze = maze_from_rows(&[
        "@  ", //
        "# #", //
        "  G",
    ]);

    let terminal = solve(&maze, manhattan)
        .expect("maze is well formed")
        .expect("route exists");
    assert_eq!(terminal.point(), maze.exit);
    assert_eq!(terminal.mileage(), 4);
}

#[test]
fn out_of_bounds_start_fails_fast() {
    let mut maze = maze_from_rows(&[
        "@ ", //
        " G",
    ]);
    maze.start = Point::new(9, 9);

    let error = find_path(&maze, manhattan).expect_err("contract violation");
    assert!(matches!(error, Error::StartOutOfBounds(_)));
}

#[test]
fn marked_solution_shows_up_in_rendering() {
    let mut maze = maze_from_rows(&[
        "@  ", //
        "# #", //
        "  G",
    ]);

    let solution = find_path(&maze, manhattan).expect("route exists");
    maze.mark_visited(&solution.points);

    let rendered = mazebot_lib::render(&maze);
    assert!(rendered.contains('.'), "path cells should be annotated");
    assert!(rendered.contains('@'), "start glyph must survive marking");
    assert!(rendered.contains('G'), "exit glyph must survive marking");
}
