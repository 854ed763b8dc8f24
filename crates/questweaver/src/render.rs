//! Plain-text rendering of a story.

use questweaver_core::GeneratedStory;

/// Renders a story for reading in a terminal.
///
/// Chapters without prose show only their heading.
///
/// # Examples
///
/// ```
/// use questweaver::{GeneratedStory, TransformedTask, render_story};
///
/// let story = GeneratedStory {
///     title: "The Desk Saga".to_string(),
///     opening_scene: "Dust settles.".to_string(),
///     transformed_tasks: vec![TransformedTask {
///         id: "t-1".to_string(),
///         original_task: "Clean desk".to_string(),
///         quest_name: "Paper Mountain".to_string(),
///         narrative: "Stacks everywhere.".to_string(),
///         completion: "A clear desk.".to_string(),
///     }],
///     epilogue: "Rest.".to_string(),
/// };
///
/// let text = render_story(&story);
/// assert!(text.starts_with("The Desk Saga\n"));
/// assert!(text.contains("Quest 1: Paper Mountain (Clean desk)"));
/// assert!(text.contains("Victory: A clear desk."));
/// ```
pub fn render_story(story: &GeneratedStory) -> String {
    let rule = "-".repeat(80);
    let mut lines = vec![
        story.title.clone(),
        "=".repeat(80),
        story.opening_scene.clone(),
        String::new(),
    ];

    for (index, task) in story.transformed_tasks.iter().enumerate() {
        lines.push(format!(
            "Quest {}: {} ({})",
            index + 1,
            task.quest_name,
            task.original_task
        ));
        lines.push(rule.clone());
        if !task.narrative.is_empty() {
            lines.push(task.narrative.clone());
        }
        if !task.completion.is_empty() {
            lines.push(format!("Victory: {}", task.completion));
        }
        lines.push(String::new());
    }

    lines.push("Epilogue".to_string());
    lines.push(rule);
    lines.push(story.epilogue.clone());
    lines.join("\n")
}
