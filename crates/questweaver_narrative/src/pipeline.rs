//! The story pipeline: prompt, invoke, parse, assemble.

use crate::{ParseOptions, SYSTEM_PROMPT, assemble_story, build_prompt, eligible_tasks, parse_story_with};
use questweaver_core::{GeneratedStory, StoryRequest, Task};
use questweaver_error::{ConfigurationError, ConfigurationErrorKind, ParseError, QuestweaverResult};
use questweaver_models::{ModelInvoker, QuestweaverConfig};
use std::borrow::Borrow;
use tracing::{debug, error, info, instrument};

/// Parses raw model text and assembles it against `tasks`.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is empty.
pub fn story_from_text<T: Borrow<Task>>(
    raw: &str,
    tasks: &[T],
    options: ParseOptions,
) -> Result<GeneratedStory, ParseError> {
    let skeleton = parse_story_with(raw, options).inspect_err(|e| {
        error!(error = %e, raw = %raw, "Failed to parse story text");
    })?;
    Ok(assemble_story(&skeleton, tasks))
}

/// Runs one story generation end to end.
///
/// Holds no mutable state; one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct StoryPipeline {
    invoker: ModelInvoker,
    options: ParseOptions,
}

impl StoryPipeline {
    /// Creates a pipeline around an invoker.
    pub fn new(invoker: ModelInvoker) -> Self {
        Self {
            invoker,
            options: ParseOptions::default(),
        }
    }

    /// Production pipeline for a configuration.
    pub fn from_config(config: QuestweaverConfig) -> Self {
        Self::new(ModelInvoker::from_config(config))
    }

    /// Sets parser options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// The model invoker.
    pub fn invoker(&self) -> &ModelInvoker {
        &self.invoker
    }

    /// System instruction sent with every prompt.
    pub fn system_prompt(&self) -> &str {
        self.invoker
            .config()
            .generation
            .system_prompt
            .as_deref()
            .unwrap_or(SYSTEM_PROMPT)
    }

    /// Generates a story for the request's active tasks.
    ///
    /// Input problems (no active tasks, unconfigured settings, unknown model,
    /// missing credential) are reported before any network call.
    ///
    /// # Errors
    ///
    /// Returns a configuration, generation or parse error.
    #[instrument(skip_all, fields(tasks = request.tasks.len(), model = request.model.as_deref().unwrap_or("default")))]
    pub async fn generate(&self, request: &StoryRequest) -> QuestweaverResult<GeneratedStory> {
        let tasks = eligible_tasks(&request.tasks);
        if tasks.is_empty() {
            error!("No active tasks in request");
            return Err(ConfigurationError::new(ConfigurationErrorKind::EmptyTaskList).into());
        }

        let settings = request.settings.resolve()?;
        let model = self.invoker.resolve(request.model.as_deref())?;

        let prompt = build_prompt(&request.tasks, &settings);
        let params = self
            .invoker
            .config()
            .generation
            .params_for(*request.settings.narrative_style());
        debug!(
            active = tasks.len(),
            prompt_len = prompt.len(),
            temperature = params.temperature,
            "Prompt built"
        );

        let raw = self
            .invoker
            .invoke(&model, self.system_prompt(), &prompt, params)
            .await?;

        let story = story_from_text(&raw, &tasks, self.options)?;
        info!(
            title = %story.title,
            chapters = story.transformed_tasks.len(),
            "Story generated"
        );
        Ok(story)
    }
}
