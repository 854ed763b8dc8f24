//! Test utilities for QuestWeaver model tests.
//!
//! Mock drivers stand in for the HTTP clients; no test makes a network call.

#![allow(dead_code)]

use async_trait::async_trait;
use questweaver_core::{GenerateRequest, GenerateResponse, Output};
use questweaver_error::{GenerationError, GenerationErrorKind, QuestweaverResult};
use questweaver_interface::StoryDriver;
use questweaver_models::{DriverFactory, ResolvedModel};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What the mock driver answers with.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this text
    Text(String),
    /// Report blocked content
    Blocked(String),
    /// Return no outputs
    Empty,
    /// Fail as a transport error would
    Fail(String),
}

/// Factory that records every driver it builds and every request sent.
#[derive(Debug, Clone)]
pub struct MockFactory {
    behavior: MockBehavior,
    created: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockFactory {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            created: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(MockBehavior::Text(text.to_string()))
    }

    /// Number of drivers created, i.e. network calls that would have happened.
    pub fn calls(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl DriverFactory for MockFactory {
    fn create(&self, model: &ResolvedModel) -> QuestweaverResult<Box<dyn StoryDriver>> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockDriver {
            provider: model.provider().as_str(),
            model: model.model().to_string(),
            behavior: self.behavior.clone(),
            requests: Arc::clone(&self.requests),
        }))
    }
}

/// Driver returning canned responses.
pub struct MockDriver {
    provider: &'static str,
    model: String,
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

#[async_trait]
impl StoryDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> QuestweaverResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        match &self.behavior {
            MockBehavior::Text(text) => Ok(GenerateResponse::from_text(text.clone())),
            MockBehavior::Blocked(reason) => Ok(GenerateResponse {
                outputs: vec![Output::Blocked(reason.clone())],
            }),
            MockBehavior::Empty => Ok(GenerateResponse::default()),
            MockBehavior::Fail(message) => Err(GenerationError::new(
                GenerationErrorKind::Provider {
                    provider: self.provider.to_string(),
                    message: message.clone(),
                },
            )
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Credentials for every default provider.
pub fn all_credentials() -> HashMap<String, String> {
    [
        ("OPENAI_API_KEY", "sk-test"),
        ("GOOGLE_AI_API_KEY", "g-test"),
        ("ANTHROPIC_API_KEY", "a-test"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
