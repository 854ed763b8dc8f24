//! Test utilities for QuestWeaver pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use questweaver_core::{
    Character, Difficulty, GenerateRequest, GenerateResponse, NarrativeStyle, StorySettings,
    Task, TaskType, Universe,
};
use questweaver_error::QuestweaverResult;
use questweaver_interface::StoryDriver;
use questweaver_models::{DriverFactory, ModelInvoker, QuestweaverConfig, ResolvedModel};
use questweaver_narrative::StoryPipeline;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Factory whose drivers always answer with the same text.
#[derive(Debug, Clone)]
pub struct ScriptedFactory {
    text: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl ScriptedFactory {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl DriverFactory for ScriptedFactory {
    fn create(&self, model: &ResolvedModel) -> QuestweaverResult<Box<dyn StoryDriver>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedDriver {
            text: self.text.clone(),
            model: model.model().to_string(),
            requests: Arc::clone(&self.requests),
        }))
    }
}

struct ScriptedDriver {
    text: String,
    model: String,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

#[async_trait]
impl StoryDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> QuestweaverResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        Ok(GenerateResponse::from_text(self.text.clone()))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Pipeline backed by a scripted factory with every credential present.
pub fn pipeline(factory: &ScriptedFactory) -> StoryPipeline {
    let credentials: HashMap<String, String> = [
        ("OPENAI_API_KEY", "sk-test"),
        ("GOOGLE_AI_API_KEY", "g-test"),
        ("ANTHROPIC_API_KEY", "a-test"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    StoryPipeline::new(ModelInvoker::new(
        QuestweaverConfig::default(),
        credentials,
        factory.clone(),
    ))
}

pub fn task(id: &str, title: &str) -> Task {
    Task::new(title, TaskType::MainQuest, Difficulty::Normal).with_id(id)
}

/// "Clean desk", "Write report", "Call client".
pub fn office_tasks() -> Vec<Task> {
    vec![
        task("t-1", "Clean desk"),
        task("t-2", "Write report"),
        task("t-3", "Call client"),
    ]
}

pub fn battle_settings() -> StorySettings {
    StorySettings::new(
        Universe::BattleAnime,
        Character::DeterminedUnderdog,
        NarrativeStyle::EpicShonen,
    )
}

/// A well-formed reply with `chapters` numbered chapters.
pub fn story_text(chapters: usize) -> String {
    let mut text = String::from("# The Desk Saga\n\n## Opening Scene\nThe office hums.\n\n");
    for n in 1..=chapters {
        text.push_str(&format!(
            "## Chapter {n}: Trial {n}\nNarrative {n}.\n### Victory Conditions\nVictory {n}.\n\n"
        ));
    }
    text.push_str("## Epilogue\nThe hero rests.");
    text
}
