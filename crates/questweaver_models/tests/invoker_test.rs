mod test_utils;

use questweaver_core::{NarrativeStyle, Role};
use questweaver_error::{
    ConfigurationErrorKind, GenerationErrorKind, QuestweaverError, QuestweaverErrorKind,
};
use questweaver_interface::Provider;
use questweaver_models::{GenerationSettings, ModelInvoker, QuestweaverConfig};
use std::collections::HashMap;
use test_utils::{MockBehavior, MockFactory, all_credentials};

fn invoker(factory: &MockFactory) -> ModelInvoker {
    ModelInvoker::new(
        QuestweaverConfig::default(),
        all_credentials(),
        factory.clone(),
    )
}

fn params() -> questweaver_models::GenerationParams {
    GenerationSettings::default().params_for(NarrativeStyle::EpicShonen)
}

#[test]
fn unknown_model_fails_before_any_call() {
    let factory = MockFactory::text("# never");
    let err = invoker(&factory).resolve(Some("unknown-model")).unwrap_err();

    assert_eq!(
        err.kind,
        ConfigurationErrorKind::UnknownModel("unknown-model".to_string())
    );
    assert_eq!(factory.calls(), 0);
}

#[test]
fn default_model_is_used_when_none_given() -> anyhow::Result<()> {
    let factory = MockFactory::text("# ok");
    let resolved = invoker(&factory).resolve(None)?;

    assert_eq!(resolved.spec.key, "gpt-4");
    assert_eq!(resolved.provider(), Provider::OpenAi);
    assert_eq!(resolved.model(), "gpt-4-turbo-preview");
    assert_eq!(resolved.api_key, "sk-test");
    Ok(())
}

#[test]
fn missing_credential_names_the_variable() {
    let mut credentials = all_credentials();
    credentials.insert("GOOGLE_AI_API_KEY".to_string(), "   ".to_string());
    let factory = MockFactory::text("# never");
    let invoker = ModelInvoker::new(QuestweaverConfig::default(), credentials, factory.clone());

    let err = invoker.resolve(Some("gemini-pro")).unwrap_err();
    assert_eq!(
        err.kind,
        ConfigurationErrorKind::MissingCredential {
            provider: "gemini".to_string(),
            env_var: "GOOGLE_AI_API_KEY".to_string(),
        }
    );
    assert_eq!(factory.calls(), 0);
}

#[test]
fn credentials_are_checked_per_provider() -> anyhow::Result<()> {
    let credentials: HashMap<String, String> =
        [("ANTHROPIC_API_KEY".to_string(), "a-test".to_string())].into();
    let invoker = ModelInvoker::new(
        QuestweaverConfig::default(),
        credentials,
        MockFactory::text("# ok"),
    );

    assert_eq!(invoker.resolve(Some("claude-sonnet"))?.provider(), Provider::Anthropic);
    assert!(invoker.resolve(Some("gpt-3.5")).is_err());
    Ok(())
}

#[tokio::test]
async fn invoke_sends_system_and_user_messages() -> anyhow::Result<()> {
    let factory = MockFactory::text("# The Saga");
    let invoker = invoker(&factory);
    let model = invoker.resolve(Some("gpt-3.5"))?;

    let text = invoker.invoke(&model, "be vivid", "Chapter 1: Clean desk", params()).await?;
    assert_eq!(text, "# The Saga");
    assert_eq!(factory.calls(), 1);

    let requests = factory.requests();
    let request = &requests[0];
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[1].content, "Chapter 1: Clean desk");
    assert_eq!(request.max_tokens, Some(4000));
    assert_eq!(request.temperature, Some(0.7));
    assert_eq!(request.presence_penalty, Some(0.3));
    assert_eq!(request.frequency_penalty, Some(0.4));
    assert_eq!(request.model.as_deref(), Some("gpt-3.5-turbo"));
    Ok(())
}

fn generation_kind(err: &QuestweaverError) -> Option<&GenerationErrorKind> {
    match err.kind() {
        QuestweaverErrorKind::Generation(e) => Some(&e.kind),
        _ => None,
    }
}

#[tokio::test]
async fn empty_response_is_a_generation_error() -> anyhow::Result<()> {
    let factory = MockFactory::new(MockBehavior::Empty);
    let invoker = invoker(&factory);
    let model = invoker.resolve(None)?;

    let err = invoker.invoke(&model, "s", "p", params()).await.unwrap_err();
    assert_eq!(
        generation_kind(&err),
        Some(&GenerationErrorKind::EmptyResponse {
            provider: "openai".to_string()
        })
    );
    assert_eq!(err.message(), "No story generated by openai");
    Ok(())
}

#[tokio::test]
async fn whitespace_only_text_counts_as_empty() -> anyhow::Result<()> {
    let factory = MockFactory::text("  \n ");
    let invoker = invoker(&factory);
    let model = invoker.resolve(None)?;

    let err = invoker.invoke(&model, "s", "p", params()).await.unwrap_err();
    assert!(matches!(
        generation_kind(&err),
        Some(GenerationErrorKind::EmptyResponse { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn blocked_content_is_reported() -> anyhow::Result<()> {
    let factory = MockFactory::new(MockBehavior::Blocked("SAFETY".to_string()));
    let invoker = invoker(&factory);
    let model = invoker.resolve(Some("gemini-pro"))?;

    let err = invoker.invoke(&model, "s", "p", params()).await.unwrap_err();
    assert_eq!(
        generation_kind(&err),
        Some(&GenerationErrorKind::ContentBlocked {
            provider: "gemini".to_string(),
            reason: "SAFETY".to_string(),
        })
    );
    Ok(())
}

#[tokio::test]
async fn provider_failure_is_not_retried() -> anyhow::Result<()> {
    let factory = MockFactory::new(MockBehavior::Fail("connection reset".to_string()));
    let invoker = invoker(&factory);
    let model = invoker.resolve(Some("claude-sonnet"))?;

    let err = invoker.invoke(&model, "s", "p", params()).await.unwrap_err();
    assert_eq!(
        err.message(),
        "Failed to generate story with anthropic: connection reset"
    );
    assert_eq!(factory.calls(), 1);
    assert_eq!(factory.requests().len(), 1);
    Ok(())
}
