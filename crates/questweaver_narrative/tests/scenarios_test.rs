mod test_utils;

use questweaver_core::StoryRequest;
use questweaver_error::{ConfigurationErrorKind, QuestweaverErrorKind};
use questweaver_narrative::{assemble_story, build_prompt, parse_story};
use test_utils::{ScriptedFactory, battle_settings, office_tasks, pipeline, story_text};

#[test]
fn prompt_lists_three_chapters_in_order() -> anyhow::Result<()> {
    let settings = battle_settings().resolve()?;
    let prompt = build_prompt(&office_tasks(), &settings);

    let first = prompt.find("Chapter 1: Clean desk").unwrap();
    let second = prompt.find("Chapter 2: Write report").unwrap();
    let third = prompt.find("Chapter 3: Call client").unwrap();
    assert!(first < second && second < third);
    assert!(!prompt.contains("Chapter 4"));
    assert!(prompt.contains("Battle Anime World"));
    assert!(prompt.contains("Determined Underdog"));
    assert!(prompt.contains("Epic Shonen Style"));
    Ok(())
}

#[test]
fn missing_epilogue_uses_final_section() -> anyhow::Result<()> {
    let text = "# Quiet Victory\n## Opening Scene\nMorning.\n## Chapter 1: Desk\nPaper everywhere.\n### Victory Conditions\nA clean desk.\n## Chapter 2: Report\nWords flow.\nThe report is sent.";

    let story = parse_story(text)?;
    assert_eq!(story.epilogue, "Words flow.\nThe report is sent.");
    assert_eq!(story.chapters.len(), 2);
    Ok(())
}

#[test]
fn fewer_chapters_than_tasks_fills_with_titles() -> anyhow::Result<()> {
    let skeleton = parse_story(&story_text(2))?;
    let story = assemble_story(&skeleton, &office_tasks());

    assert_eq!(story.transformed_tasks.len(), 3);
    let third = &story.transformed_tasks[2];
    assert_eq!(third.id, "t-3");
    assert_eq!(third.quest_name, "Call client");
    assert_eq!(third.narrative, "");
    assert_eq!(third.completion, "");
    Ok(())
}

#[tokio::test]
async fn unknown_model_is_rejected_without_network() {
    let factory = ScriptedFactory::new(&story_text(3));
    let request = StoryRequest::new(office_tasks(), battle_settings()).with_model("unknown-model");

    let err = pipeline(&factory).generate(&request).await.unwrap_err();

    assert!(matches!(
        err.kind(),
        QuestweaverErrorKind::Configuration(e)
            if e.kind == ConfigurationErrorKind::UnknownModel("unknown-model".to_string())
    ));
    assert_eq!(err.message(), "Invalid model selected: unknown-model");
    assert_eq!(factory.calls(), 0);
}

#[test]
fn long_title_is_cut_to_one_hundred_chars() -> anyhow::Result<()> {
    let title = "A".repeat(150);
    let story = parse_story(&format!("# {}\n## Epilogue\nEnd.", title))?;

    assert_eq!(story.title.chars().count(), 100);
    assert_eq!(story.title, "A".repeat(100));
    Ok(())
}
