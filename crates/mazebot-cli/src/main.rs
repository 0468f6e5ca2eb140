use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Mazebot challenge utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, solve, and submit random mazes of the given sizes.
    Solve {
        /// Maze side lengths to request, comma separated.
        #[arg(
            long,
            value_delimiter = ',',
            default_values_t = vec![10u32, 20, 40, 60, 100, 120, 150, 200]
        )]
        sizes: Vec<u32>,

        /// Per-maze solve deadline in seconds.
        #[arg(long, default_value_t = 2)]
        deadline: u64,

        /// Skip rendering solved mazes to stdout.
        #[arg(long)]
        no_render: bool,
    },
    /// Run the mazebot race.
    Race {
        /// GitHub username to authenticate in the race.
        #[arg(long)]
        username: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            sizes,
            deadline,
            no_render,
        } => commands::solve::run(&sizes, Duration::from_secs(deadline), no_render),
        Command::Race { username } => commands::race::run(&username),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
