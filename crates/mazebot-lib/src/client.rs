//! HTTP client for the mazebot challenge service.
//!
//! Thin glue around the public API: fetch random mazes, submit direction
//! strings, and drive race mode. The search core never touches this
//! module; it only consumes the [`Maze`] values produced here.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::maze::{Cell, Maze, Point};

const DEFAULT_BASE_URL: &str = "https://api.noopschallenge.com";

/// Client for the mazebot service.
pub struct MazeBot {
    client: Client,
    base_url: String,
}

impl MazeBot {
    /// Client against the public challenge API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternative base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(user_agent())
            .build()
            .map_err(Error::Http)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch a random maze of unspecified size.
    pub fn random_maze(&self) -> Result<Maze> {
        self.request_maze(&format!("{}/mazebot/random", self.base_url))
    }

    /// Fetch a random maze with the given side length.
    pub fn random_maze_with_size(&self, size: u32) -> Result<Maze> {
        self.request_maze(&format!(
            "{}/mazebot/random?minSize={size}&maxSize={size}",
            self.base_url
        ))
    }

    /// Submit a direction string for a random-endpoint maze.
    pub fn submit_solution(&self, maze_id: &str, directions: &str) -> Result<BotResponse> {
        self.post_directions(
            &format!("{}/mazebot/mazes/{maze_id}", self.base_url),
            directions,
        )
    }

    /// Enter the race under the given GitHub login.
    pub fn start_race(&self, login: &str) -> Result<BotResponse> {
        let response = self
            .client
            .post(format!("{}/mazebot/race/start", self.base_url))
            .json(&LoginBody { login })
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    /// Fetch the maze behind a service-relative path (race mode).
    pub fn next_maze(&self, maze_path: &str) -> Result<Maze> {
        self.request_maze(&format!("{}{maze_path}", self.base_url))
    }

    /// Submit a direction string to a race maze's path.
    pub fn submit_race_solution(&self, maze_path: &str, directions: &str) -> Result<BotResponse> {
        self.post_directions(&format!("{}{maze_path}", self.base_url), directions)
    }

    /// Fetch the certificate awarded for a finished race.
    pub fn fetch_certificate(&self, certificate_path: &str) -> Result<Certificate> {
        let url = format!("{}{certificate_path}", self.base_url);
        debug!(%url, "fetching certificate");
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.json()?)
    }

    fn request_maze(&self, url: &str) -> Result<Maze> {
        debug!(%url, "requesting maze");
        let payload: MazePayload = self.client.get(url).send()?.error_for_status()?.json()?;
        debug!(name = %payload.name, "received maze payload");
        payload.into_maze()
    }

    fn post_directions(&self, url: &str, directions: &str) -> Result<BotResponse> {
        let response = self
            .client
            .post(url)
            .json(&DirectionsBody { directions })
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}

fn user_agent() -> String {
    format!(
        "mazebot-lib/{version} ({repo})",
        version = env!("CARGO_PKG_VERSION"),
        repo = "https://github.com/scetrov/mazebot-rs"
    )
}

#[derive(Serialize)]
struct DirectionsBody<'a> {
    directions: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    login: &'a str,
}

/// Verdict returned by the service for submissions and race calls.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BotResponse {
    pub result: String,
    pub message: String,
    pub shortest_solution_length: u32,
    pub your_solution_length: u32,
    pub elapsed: u32,
    pub next_maze: String,
    pub certificate: String,
}

impl BotResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }

    pub fn is_finished(&self) -> bool {
        self.result == "finished"
    }
}

/// Certificate awarded for finishing the race.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certificate {
    pub message: String,
    pub elapsed: f32,
    /// Completion timestamp, kept as the raw string the service returns.
    pub completed: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MazePayload {
    name: String,
    maze_path: String,
    starting_position: [i32; 2],
    ending_position: [i32; 2],
    map: Vec<Vec<String>>,
}

impl MazePayload {
    /// Convert the wire payload into a [`Maze`].
    ///
    /// The wire map is row-major (`map[y][x]`) strings; the grid model is
    /// column-major, so the array is transposed here. Unknown glyphs are
    /// logged and treated as empty, matching the service's own leniency.
    fn into_maze(self) -> Result<Maze> {
        let height = self.map.len();
        let width = self.map.first().map(Vec::len).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(Error::MalformedResponse {
                reason: format!("maze {} has an empty map", self.name),
            });
        }
        if self.map.iter().any(|row| row.len() != width) {
            return Err(Error::MalformedResponse {
                reason: format!("maze {} has ragged map rows", self.name),
            });
        }

        let mut cells = vec![vec![Cell::Empty; height]; width];
        for (y, row) in self.map.iter().enumerate() {
            for (x, glyph) in row.iter().enumerate() {
                cells[x][y] = parse_cell(glyph, x, y);
            }
        }

        let id = self
            .maze_path
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        let start = Point::new(self.starting_position[0], self.starting_position[1]);
        let exit = Point::new(self.ending_position[0], self.ending_position[1]);

        let maze = Maze::new(id, start, exit, cells);
        maze.validate()?;
        Ok(maze)
    }
}

fn parse_cell(glyph: &str, x: usize, y: usize) -> Cell {
    match glyph {
        "X" => Cell::Wall,
        " " => Cell::Empty,
        "A" => Cell::Start,
        "B" => Cell::Exit,
        other => {
            warn!(glyph = other, x, y, "unexpected map glyph, treating as empty");
            Cell::Empty
        }
    }
}
