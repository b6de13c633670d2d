//! CLI definitions for browsepilot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// browsepilot CLI.
#[derive(Parser)]
#[command(name = "browsepilot")]
#[command(about = "Drive a browser with a planner through validated tool calls")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to ~/.browsepilot/config.toml)
    #[arg(short, long, env = "BROWSEPILOT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run a task to completion and print the run report as JSON
    Run {
        /// Task for the planner
        #[arg(short, long, env = "BROWSEPILOT_TASK")]
        task: String,

        /// Maximum planner decisions
        #[arg(long)]
        max_turns: Option<u32>,

        /// Launch Chrome without a window
        #[arg(long)]
        headless: bool,

        /// Planner model (overrides config and $MODEL)
        #[arg(long)]
        model: Option<String>,

        /// Replay planner decisions from a JSON file instead of calling a model
        #[arg(long)]
        plan: Option<PathBuf>,
    },

    /// Print the tool catalog in OpenAI function format
    Tools,
}
