//! The `solve` subcommand: a three-stage pipeline that fetches random
//! mazes, solves them under a deadline, and submits the solutions.
//!
//! Stages run on their own threads and hand work over through bounded
//! channels, so fetching, solving, and submitting overlap. The engine has
//! no cancellation hook; a solve that overruns its deadline is abandoned
//! (the worker thread finishes on its own and its result is discarded).

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, warn};

use mazebot_lib::{find_path, manhattan, render, BotResponse, Maze, MazeBot, Solution};

/// Capacity of the hand-off channels between pipeline stages.
const STAGE_CAPACITY: usize = 4;

/// How long the solver stage waits for upstream work before shutting down.
const IDLE_TIMEOUT: Duration = Duration::from_secs(10);

struct Solved {
    maze: Maze,
    solution: Solution,
    solve_time: Duration,
}

struct Submitted {
    maze: Maze,
    directions: String,
    solve_time: Duration,
    response: BotResponse,
}

pub fn run(sizes: &[u32], deadline: Duration, no_render: bool) -> Result<()> {
    let fetch_client = MazeBot::new().context("failed to build the mazebot client")?;
    let submit_client = MazeBot::new().context("failed to build the mazebot client")?;

    let (maze_tx, maze_rx) = mpsc::sync_channel::<Maze>(STAGE_CAPACITY);
    let (solved_tx, solved_rx) = mpsc::sync_channel::<Solved>(STAGE_CAPACITY);
    let (result_tx, result_rx) = mpsc::sync_channel::<Submitted>(STAGE_CAPACITY);

    let sizes = sizes.to_vec();
    let fetcher = thread::spawn(move || fetch_stage(fetch_client, sizes, maze_tx));
    let solver = thread::spawn(move || solve_stage(maze_rx, solved_tx, deadline));
    let submitter = thread::spawn(move || submit_stage(submit_client, solved_rx, result_tx));

    for submitted in result_rx {
        report(&submitted, no_render);
    }

    for handle in [fetcher, solver, submitter] {
        if handle.join().is_err() {
            warn!("a pipeline stage panicked");
        }
    }

    Ok(())
}

fn fetch_stage(client: MazeBot, sizes: Vec<u32>, mazes: SyncSender<Maze>) {
    for size in sizes {
        match client.random_maze_with_size(size) {
            Ok(maze) => {
                info!(maze = %maze.id, size, "fetched maze");
                if mazes.send(maze).is_err() {
                    return;
                }
            }
            Err(error) => warn!(size, %error, "failed to fetch maze"),
        }
    }
}

fn solve_stage(mazes: Receiver<Maze>, solved: SyncSender<Solved>, deadline: Duration) {
    loop {
        let maze = match mazes.recv_timeout(IDLE_TIMEOUT) {
            Ok(maze) => maze,
            Err(RecvTimeoutError::Disconnected) => return,
            Err(RecvTimeoutError::Timeout) => {
                warn!("no maze arrived in time, stopping the solver stage");
                return;
            }
        };
        if let Some(item) = solve_with_deadline(maze, deadline) {
            if solved.send(item).is_err() {
                return;
            }
        }
    }
}

fn solve_with_deadline(mut maze: Maze, deadline: Duration) -> Option<Solved> {
    let (tx, rx) = mpsc::channel();
    let worker_maze = maze.clone();
    thread::spawn(move || {
        let started = Instant::now();
        let outcome = find_path(&worker_maze, manhattan);
        let _ = tx.send((outcome, started.elapsed()));
    });

    match rx.recv_timeout(deadline) {
        Ok((Ok(solution), solve_time)) => {
            maze.mark_visited(&solution.points);
            Some(Solved {
                maze,
                solution,
                solve_time,
            })
        }
        Ok((Err(error), _)) => {
            warn!(maze = %maze.id, %error, "solve failed");
            None
        }
        Err(_) => {
            warn!(maze = %maze.id, ?deadline, "solve deadline exceeded, abandoning maze");
            None
        }
    }
}

fn submit_stage(client: MazeBot, solved: Receiver<Solved>, results: SyncSender<Submitted>) {
    for item in solved {
        let directions = item.solution.directions_string();
        match client.submit_solution(&item.maze.id, &directions) {
            Ok(response) => {
                let submitted = Submitted {
                    maze: item.maze,
                    directions,
                    solve_time: item.solve_time,
                    response,
                };
                if results.send(submitted).is_err() {
                    return;
                }
            }
            Err(error) => warn!(maze = %item.maze.id, %error, "submission failed"),
        }
    }
}

fn report(submitted: &Submitted, no_render: bool) {
    let response = &submitted.response;
    if response.is_success() {
        println!("Maze {} solution accepted:", submitted.maze.id);
        println!(" - submitted path length: {}", response.your_solution_length);
        println!(
            " - best possible length:  {}",
            response.shortest_solution_length
        );
        println!(
            " - is shortest?           {}",
            response.your_solution_length == response.shortest_solution_length
        );
        println!(" - search time:           {:?}", submitted.solve_time);
        println!(" - turnaround time:       {}ms", response.elapsed);
    } else {
        warn!(
            maze = %submitted.maze.id,
            message = %response.message,
            "solution rejected"
        );
        println!("Maze {} rejected: {}", submitted.maze.id, response.message);
        println!("Proposed directions were: {}", submitted.directions);
    }

    if !no_render {
        print!("{}", render(&submitted.maze));
    }
}
