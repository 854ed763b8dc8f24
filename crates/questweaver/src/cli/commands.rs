//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// QuestWeaver - turn your task list into an anime-style story
#[derive(Parser, Debug)]
#[command(name = "questweaver")]
#[command(about = "Turn your task list into an anime-style story", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the prompt that would be sent to the model
    Prompt {
        /// JSON array of tasks
        #[arg(long)]
        tasks: PathBuf,

        /// JSON story settings
        #[arg(long)]
        settings: PathBuf,
    },

    /// Parse a saved model response and assemble it against tasks
    Parse {
        /// File holding the raw model text
        #[arg(long)]
        response: PathBuf,

        /// JSON array of tasks
        #[arg(long)]
        tasks: PathBuf,

        /// Drop bullet lines from chapter narratives
        #[arg(long)]
        exclude_bullets: bool,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Generate a story with the configured model
    Generate {
        /// JSON array of tasks
        #[arg(long)]
        tasks: PathBuf,

        /// JSON story settings
        #[arg(long)]
        settings: PathBuf,

        /// Model key from the catalog
        #[arg(long)]
        model: Option<String>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// List the model catalog
    Models,

    /// Start the HTTP API
    Serve {
        /// Address to bind, overriding `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
