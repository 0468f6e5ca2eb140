//! The `race` subcommand: solve the service's race mazes back to back
//! until it hands out a certificate.

use std::fs;

use anyhow::{bail, Context, Result};
use tracing::info;

use mazebot_lib::{find_path, manhattan, MazeBot};

const CERTIFICATE_FILE: &str = "cert.json";

pub fn run(username: &str) -> Result<()> {
    let client = MazeBot::new().context("failed to build the mazebot client")?;

    let mut response = client
        .start_race(username)
        .context("failed to start the race")?;
    if response.next_maze.is_empty() {
        bail!("cannot start race: make sure the username is valid: {username}");
    }
    println!("The race has started!");

    let mut lap = 0u32;
    loop {
        lap += 1;
        println!("Running lap {lap}...");

        let maze_path = response.next_maze.clone();
        let maze = client
            .next_maze(&maze_path)
            .context("failed to fetch the next race maze")?;
        let solution = find_path(&maze, manhattan)
            .with_context(|| format!("failed to solve race maze {}", maze.id))?;
        response = client
            .submit_race_solution(&maze_path, &solution.directions_string())
            .context("failed to submit the race solution")?;

        if response.is_finished() {
            println!("{}", response.message);
            let certificate = client
                .fetch_certificate(&response.certificate)
                .context("failed to fetch the race certificate")?;
            let payload = serde_json::to_string_pretty(&certificate)
                .context("failed to serialize the certificate")?;
            fs::write(CERTIFICATE_FILE, payload)
                .with_context(|| format!("failed to write {CERTIFICATE_FILE}"))?;
            info!(file = CERTIFICATE_FILE, "certificate saved");
            println!("Lap {lap} finished; certificate saved to {CERTIFICATE_FILE}");
            return Ok(());
        }

        if !response.is_success() {
            println!("{}", response.message);
            bail!("failed to finish the race");
        }
        println!("Lap {lap} finished!");
    }
}
