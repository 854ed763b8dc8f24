//! Prompt Builder: renders tasks and settings into one instruction string.

use questweaver_core::{ResolvedSettings, Task};

/// System instruction sent to chat-style providers.
pub const SYSTEM_PROMPT: &str = "You are a skilled writer who creates engaging, natural \
narratives that transform tasks into meaningful stories. Focus on quality, coherence, and \
relatability.";

/// Tasks that become chapters: the active ones, in input order.
pub fn eligible_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|task| task.is_active()).collect()
}

fn render_task(position: usize, task: &Task) -> String {
    let context = task
        .description()
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or("None provided");
    let time_frame = task
        .estimated_time()
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or("Unspecified");
    let deadline = task
        .deadline()
        .as_ref()
        .map(|deadline| deadline.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "None".to_string());

    format!(
        "Chapter {}: {}\n\
         - Type: {}\n\
         - Challenge Level: {}\n\
         - Context: {}\n\
         - Time Frame: {}\n\
         - Deadline: {}\n",
        position,
        task.title(),
        task.task_type(),
        task.difficulty(),
        context,
        time_frame,
        deadline
    )
}

fn render_tasks(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return "No quests are active. Tell a short interlude of rest between adventures.\n"
            .to_string();
    }

    tasks
        .iter()
        .enumerate()
        .map(|(index, task)| render_task(index + 1, task))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the story prompt.
///
/// Only active tasks are included, each introduced by a `Chapter N: <title>`
/// line numbered by its position among active tasks. The output is a pure
/// function of the inputs.
///
/// # Examples
///
/// ```
/// use questweaver_core::{Difficulty, StorySettings, Task, TaskType};
/// use questweaver_narrative::build_prompt;
///
/// let tasks = vec![
///     Task::new("Clean desk", TaskType::Daily, Difficulty::Normal),
///     Task::new("Write report", TaskType::MainQuest, Difficulty::Hard),
/// ];
/// let settings = StorySettings::default().resolve().unwrap();
///
/// let prompt = build_prompt(&tasks, &settings);
/// assert!(prompt.contains("Chapter 1: Clean desk"));
/// assert!(prompt.contains("Chapter 2: Write report"));
/// assert!(prompt.contains("- Type: Daily Quest"));
/// ```
pub fn build_prompt(tasks: &[Task], settings: &ResolvedSettings) -> String {
    let eligible = eligible_tasks(tasks);

    format!(
        "You are crafting a COHERENT, ENGAGING story that weaves everyday tasks into a \
meaningful narrative.

STORY ELEMENTS:
Character: {character}
- How they approach challenges
- Their unique perspective
- Their growth through these tasks

Setting: {universe}
- How the environment affects the tasks
- Unique aspects of this world
- How the setting transforms ordinary moments

Style: {style}
- Keep the tone consistent
- Use specific details and sensory elements
- Make the narrative flow naturally

TASKS TO TRANSFORM:

{tasks}
REQUIRED STRUCTURE:

# [Title that Captures the Core Theme]

## Opening Scene
[A focused scene that establishes character and setting - max 2 paragraphs]

## Chapter <number>: <quest name>
[How the character approaches this specific challenge - include concrete details]
### Victory Conditions
[Clear, specific outcomes that show character growth]

[Write one such section for every task above, numbered and ordered as listed, maintaining narrative flow]

## Epilogue
[Brief conclusion showing overall growth - max 1 paragraph]

IMPORTANT:
1. NO generic descriptions, filler or cliches
2. Each task should feel like a natural part of the story
3. Maintain consistent character voice and motivation
4. Carry events and consequences from each section into the next
5. Include specific details from the setting
6. Keep the narrative focused and purposeful

Remember: This is a character-driven story where everyday tasks reveal growth and purpose.",
        character = settings.character(),
        universe = settings.universe(),
        style = settings.narrative_style(),
        tasks = render_tasks(&eligible),
    )
}
