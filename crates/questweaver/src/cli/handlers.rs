//! Command handlers.

use super::OutputFormat;
use questweaver::{
    GeneratedStory, JsonError, ModelInvoker, ParseOptions, QuestweaverConfig, QuestweaverResult,
    StoryPipeline, StoryRequest, build_prompt, eligible_tasks, read_settings, read_tasks,
    read_text, render_story, story_from_text,
};
use std::path::Path;

fn print_story(story: &GeneratedStory, format: OutputFormat) -> QuestweaverResult<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(story)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => println!("{}", render_story(story)),
    }
    Ok(())
}

/// Handle the `prompt` command.
pub fn print_prompt(tasks: &Path, settings: &Path) -> QuestweaverResult<()> {
    let tasks = read_tasks(tasks)?;
    let settings = read_settings(settings)?.resolve()?;
    println!("{}", build_prompt(&tasks, &settings));
    Ok(())
}

/// Handle the `parse` command.
pub fn parse_response(
    response: &Path,
    tasks: &Path,
    exclude_bullets: bool,
    format: OutputFormat,
) -> QuestweaverResult<()> {
    let raw = read_text(response)?;
    let tasks = read_tasks(tasks)?;
    let story = story_from_text(
        &raw,
        &eligible_tasks(&tasks),
        ParseOptions { exclude_bullets },
    )?;
    print_story(&story, format)
}

/// Handle the `generate` command.
pub async fn generate(
    tasks: &Path,
    settings: &Path,
    model: Option<String>,
    format: OutputFormat,
) -> QuestweaverResult<()> {
    let mut request = StoryRequest::new(read_tasks(tasks)?, read_settings(settings)?);
    request.model = model;

    let pipeline = StoryPipeline::from_config(QuestweaverConfig::load()?);
    let story = pipeline.generate(&request).await?;
    print_story(&story, format)
}

/// Handle the `models` command.
pub fn list_models() -> QuestweaverResult<()> {
    let config = QuestweaverConfig::load()?;
    let invoker = ModelInvoker::from_config(config.clone());

    println!("{:<16} {:<10} {:<32} STATUS", "KEY", "PROVIDER", "MODEL");
    for spec in &config.models {
        let status = match invoker.resolve(Some(spec.key.as_str())) {
            Ok(_) => "ready".to_string(),
            Err(e) => e.kind.to_string(),
        };
        let marker = if spec.key == config.default_model {
            " (default)"
        } else {
            ""
        };
        println!(
            "{:<16} {:<10} {:<32} {}{}",
            spec.key, spec.provider, spec.model, status, marker
        );
    }
    Ok(())
}

/// Handle the `serve` command.
pub async fn serve_api(bind: Option<String>) -> QuestweaverResult<()> {
    let config = QuestweaverConfig::load()?;
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());

    tracing::info!(bind = %bind, "Starting QuestWeaver API. Press Ctrl+C to stop.");
    questweaver::serve(StoryPipeline::from_config(config), &bind).await?;
    Ok(())
}
