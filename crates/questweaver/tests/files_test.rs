use questweaver::{
    Character, QuestweaverErrorKind, TaskStatus, Universe, read_settings, read_tasks, read_text,
    render_story, story_from_text, eligible_tasks, ParseOptions,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

const TASKS: &str = r#"[
  {"id": "t-1", "title": "Clean desk", "type": "DAILY", "difficulty": "NORMAL"},
  {"id": "t-2", "title": "File taxes", "type": "MAIN_QUEST", "difficulty": "LEGENDARY",
   "status": "completed", "completedAt": "2026-01-02T10:00:00Z"},
  {"id": "t-3", "title": "Call client", "type": "SIDE_QUEST", "difficulty": "HARD",
   "estimatedTime": "30 minutes"}
]"#;

#[test]
fn tasks_file_is_loaded_in_order() -> anyhow::Result<()> {
    let file = write_temp(TASKS)?;
    let tasks = read_tasks(file.path())?;

    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].title(), "Clean desk");
    assert_eq!(*tasks[1].status(), TaskStatus::Completed);
    assert_eq!(tasks[2].estimated_time().as_deref(), Some("30 minutes"));
    Ok(())
}

#[test]
fn settings_file_with_custom_universe() -> anyhow::Result<()> {
    let file = write_temp(
        r#"{"universe": "custom", "customUniverse": "A floating library",
            "character": "CHAOTIC_ANTIHERO", "narrativeStyle": "COMEDY_ACTION"}"#,
    )?;
    let settings = read_settings(file.path())?;

    assert_eq!(*settings.universe(), Universe::Custom);
    assert_eq!(*settings.character(), Character::ChaoticAntihero);
    assert_eq!(settings.resolve()?.universe(), "A floating library");
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_text(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err.kind(), QuestweaverErrorKind::Io(_)));
    assert!(err.message().contains("/definitely/not/here.json"));
}

#[test]
fn malformed_tasks_are_a_json_error() -> anyhow::Result<()> {
    let file = write_temp("{\"not\": \"a list\"}")?;
    let err = read_tasks(file.path()).unwrap_err();

    let expected = file.path().display().to_string();
    assert!(matches!(
        err.kind(),
        QuestweaverErrorKind::Json(e) if e.path.as_deref() == Some(expected.as_str())
    ));
    assert!(err.message().starts_with("Invalid JSON in"));
    Ok(())
}

#[test]
fn offline_parse_skips_completed_tasks() -> anyhow::Result<()> {
    let tasks = read_tasks(write_temp(TASKS)?.path())?;
    let reply = "# Two Trials\n## Opening Scene\nDawn.\n## Chapter 1: Paper Storm\nPapers fly.\n### Victory Conditions\nA clear desk.\n## Chapter 2: The Call\nThe phone rings.\n### Victory Conditions\nA deal struck.\n## Epilogue\nNight.";

    let story = story_from_text(reply, &eligible_tasks(&tasks), ParseOptions::default())?;
    let ids: Vec<&str> = story.transformed_tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t-1", "t-3"]);

    let text = render_story(&story);
    assert!(text.contains("Quest 2: The Call (Call client)"));
    assert!(text.ends_with("Night."));
    Ok(())
}
