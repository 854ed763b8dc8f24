//! Result Assembler: joins parsed chapters with task identities by position.

use crate::StorySkeleton;
use questweaver_core::{GeneratedStory, Task, TransformedTask};
use std::borrow::Borrow;

/// Builds the final story, one entry per task in task order.
///
/// Chapter `i` belongs to task `i`. Tasks without a chapter keep their title
/// as quest name with empty narrative and completion; surplus chapters are
/// dropped.
///
/// # Examples
///
/// ```
/// use questweaver_core::{Difficulty, Task, TaskType};
/// use questweaver_narrative::{StorySkeleton, assemble_story};
///
/// let skeleton = StorySkeleton {
///     title: "T".to_string(),
///     opening_scene: "O".to_string(),
///     chapters: Vec::new(),
///     epilogue: "E".to_string(),
/// };
/// let tasks = vec![Task::new("Call client", TaskType::SideQuest, Difficulty::Normal)];
///
/// let story = assemble_story(&skeleton, &tasks);
/// assert_eq!(story.transformed_tasks.len(), 1);
/// assert_eq!(story.transformed_tasks[0].quest_name, "Call client");
/// assert_eq!(story.transformed_tasks[0].narrative, "");
/// ```
pub fn assemble_story<T: Borrow<Task>>(skeleton: &StorySkeleton, tasks: &[T]) -> GeneratedStory {
    let transformed_tasks = tasks
        .iter()
        .map(<T as Borrow<Task>>::borrow)
        .enumerate()
        .map(|(index, task)| {
            let chapter = skeleton.chapters.get(index);
            let quest_name = chapter
                .map(|c| c.quest_name.trim())
                .filter(|name| !name.is_empty())
                .unwrap_or(task.title().as_str())
                .to_string();

            TransformedTask {
                id: task.id().clone(),
                original_task: task.title().clone(),
                quest_name,
                narrative: chapter.map(|c| c.narrative.clone()).unwrap_or_default(),
                completion: chapter.map(|c| c.completion.clone()).unwrap_or_default(),
            }
        })
        .collect();

    GeneratedStory {
        title: skeleton.title.clone(),
        opening_scene: skeleton.opening_scene.clone(),
        transformed_tasks,
        epilogue: skeleton.epilogue.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParsedChapter;
    use questweaver_core::{Difficulty, TaskType};

    fn chapter(name: &str) -> ParsedChapter {
        ParsedChapter {
            quest_name: name.to_string(),
            narrative: format!("{} narrative", name),
            completion: format!("{} completion", name),
        }
    }

    fn skeleton(chapters: Vec<ParsedChapter>) -> StorySkeleton {
        StorySkeleton {
            title: "Title".to_string(),
            opening_scene: "Opening".to_string(),
            chapters,
            epilogue: "Epilogue".to_string(),
        }
    }

    fn tasks(n: usize) -> Vec<Task> {
        (0..n)
            .map(|i| {
                Task::new(format!("Task {}", i), TaskType::Daily, Difficulty::Normal)
                    .with_id(format!("t-{}", i))
            })
            .collect()
    }

    #[test]
    fn output_length_matches_task_count() {
        for chapters in 0..5 {
            let parsed = skeleton((0..chapters).map(|i| chapter(&format!("C{}", i))).collect());
            let story = assemble_story(&parsed, &tasks(3));
            assert_eq!(story.transformed_tasks.len(), 3);
        }
    }

    #[test]
    fn ids_and_titles_follow_task_order() {
        let story = assemble_story(&skeleton(vec![chapter("A"), chapter("B")]), &tasks(2));

        assert_eq!(story.transformed_tasks[0].id, "t-0");
        assert_eq!(story.transformed_tasks[0].original_task, "Task 0");
        assert_eq!(story.transformed_tasks[0].quest_name, "A");
        assert_eq!(story.transformed_tasks[1].id, "t-1");
        assert_eq!(story.transformed_tasks[1].completion, "B completion");
    }

    #[test]
    fn blank_quest_name_falls_back_to_title() {
        let story = assemble_story(&skeleton(vec![chapter("  ")]), &tasks(1));
        assert_eq!(story.transformed_tasks[0].quest_name, "Task 0");
    }

    #[test]
    fn accepts_borrowed_tasks() {
        let owned = tasks(2);
        let borrowed: Vec<&Task> = owned.iter().collect();
        let story = assemble_story(&skeleton(vec![chapter("A")]), &borrowed);
        assert_eq!(story.transformed_tasks[1].quest_name, "Task 1");
    }
}
