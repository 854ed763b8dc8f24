use questweaver_core::NarrativeStyle;
use questweaver_interface::Provider;
use questweaver_models::QuestweaverConfig;
use std::io::Write;

fn write_config(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn bundled_catalog_has_four_models() -> anyhow::Result<()> {
    let config = QuestweaverConfig::bundled()?;

    let keys: Vec<&str> = config.model_keys().collect();
    assert_eq!(keys, vec!["gpt-4", "gpt-3.5", "gemini-pro", "claude-sonnet"]);
    assert_eq!(config.default_model, "gpt-4");
    assert_eq!(config.server.bind, "127.0.0.1:3000");
    Ok(())
}

#[test]
fn partial_file_keeps_defaults() -> anyhow::Result<()> {
    let file = write_config(
        r#"
default_model = "gemini-pro"

[generation]
mysterious_temperature = 0.95
"#,
    )?;

    let config = QuestweaverConfig::from_file(file.path())?;
    assert_eq!(config.default_model, "gemini-pro");
    assert_eq!(config.generation.temperature, 0.7);
    assert_eq!(
        config
            .generation
            .params_for(NarrativeStyle::MysteriousSupernatural)
            .temperature,
        0.95
    );
    assert_eq!(config.models.len(), 4);
    Ok(())
}

#[test]
fn custom_catalog_replaces_defaults() -> anyhow::Result<()> {
    let file = write_config(
        r#"
default_model = "haiku"

[[models]]
key = "haiku"
provider = "anthropic"
model = "claude-3-5-haiku-20241022"
max_tokens = 2000
"#,
    )?;

    let config = QuestweaverConfig::from_file(file.path())?;
    let model = config.model("haiku").unwrap();
    assert_eq!(model.provider, Provider::Anthropic);
    assert_eq!(model.max_tokens, 2000);
    assert!(config.model("gpt-4").is_none());
    Ok(())
}

#[test]
fn default_model_outside_catalog_is_rejected() -> anyhow::Result<()> {
    let file = write_config(r#"default_model = "gpt-5""#)?;

    let err = QuestweaverConfig::from_file(file.path()).unwrap_err();
    assert!(err.message().contains("gpt-5"));
    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    assert!(QuestweaverConfig::from_file("/nonexistent/questweaver.toml").is_err());
}
