//! QuestWeaver CLI binary.
//!
//! This binary provides command-line access to QuestWeaver:
//! - Preview the prompt built from a task list
//! - Parse saved model responses offline
//! - Generate stories with a configured model
//! - Serve the HTTP API

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() {
    use cli::{Cli, Commands, generate, list_models, parse_response, print_prompt, serve_api};

    // API keys may live in a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(e) = questweaver::init_tracing(cli.verbose, cli.json_logs) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Prompt { tasks, settings } => print_prompt(&tasks, &settings),

        Commands::Parse {
            response,
            tasks,
            exclude_bullets,
            format,
        } => parse_response(&response, &tasks, exclude_bullets, format),

        Commands::Generate {
            tasks,
            settings,
            model,
            format,
        } => generate(&tasks, &settings, model, format).await,

        Commands::Models => list_models(),

        Commands::Serve { bind } => serve_api(bind).await,
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e.message());
        std::process::exit(1);
    }
}
