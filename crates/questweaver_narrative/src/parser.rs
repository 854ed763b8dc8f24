//! Response Parser: recovers a structured story from loosely formatted model text.
//!
//! The text is cut into blocks at heading lines, then each part of the story is
//! located with an ordered list of strategies. Missing parts degrade to fixed
//! fallback strings; only text with nothing in it is an error.

use questweaver_error::{ParseError, ParseErrorKind};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, instrument};

const TITLE_LIMIT: usize = 100;
const SECTION_LIMIT: usize = 500;

const FALLBACK_TITLE: &str = "Your Epic Tale";
const FALLBACK_OPENING: &str = "The journey begins...";
const FALLBACK_EPILOGUE: &str = "The story continues...";
const FALLBACK_QUEST_NAME: &str = "Unnamed Quest";
const FALLBACK_NARRATIVE: &str = "A new challenge appears...";
const FALLBACK_COMPLETION: &str = "Victory awaits...";

const ARTIFACTS: [&str; 2] = ["The quest unfolds...", "Victory awaits..."];

struct Patterns {
    chapter: Regex,
    section: Regex,
    title_prefix: Regex,
    subheading: Regex,
    label: Regex,
    opening: Regex,
    epilogue: Regex,
    loose: Regex,
    chapter_prefix: Regex,
    placeholder: Regex,
    bullet: Regex,
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    chapter: Regex::new(r"(?i)^(?:chapter|quest)\s+\d+").expect("Valid chapter regex"),
    section: Regex::new(
        r"(?i)^(?:title|opening scene|prologue|epilogue|conclusion|the end)\s*(?:[.!]|:\s*(.*))?$",
    )
    .expect("Valid section regex"),
    title_prefix: Regex::new(r"(?i)^title\s*:?\s*").expect("Valid title regex"),
    subheading: Regex::new(r"(?i)^#+\s*(?:completion|victory|success|outcome)\b")
        .expect("Valid subheading regex"),
    label: Regex::new(r"(?i)^(?:completion|victory|success|outcome)(?:\s+\w+)?\s*(?::\s*(.*))?$")
        .expect("Valid label regex"),
    opening: Regex::new(r"(?i)\b(?:opening|prologue|beginning|the awakening)\b")
        .expect("Valid opening regex"),
    epilogue: Regex::new(r"(?i)\b(?:epilogue|conclusion|the end|evolution)\b")
        .expect("Valid epilogue regex"),
    loose: Regex::new(r"(?i)\b(?:quest|journey|task|challenge|chapter)")
        .expect("Valid keyword regex"),
    chapter_prefix: Regex::new(
        r"(?i)^(?:(?:chapter|quest|task|challenge)\s*\d+\s*[:.)\-]?|(?:chapter|quest|task|challenge)\s+(?:[ivxlc]+|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve)\s*:|\d+\s*[:.)\-]?)\s*",
    )
    .expect("Valid prefix regex"),
    placeholder: Regex::new(r"^\[[^\]]*\]$").expect("Valid placeholder regex"),
    bullet: Regex::new(r"^(?:[-*•]\s+|\d+[.)]\s+)").expect("Valid bullet regex"),
});

/// Parser switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Drop bullet lines from chapter narratives
    pub exclude_bullets: bool,
}

/// One chapter recovered from the text, not yet tied to a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedChapter {
    /// Chapter name
    pub quest_name: String,
    /// Chapter prose
    pub narrative: String,
    /// Victory text
    pub completion: String,
}

/// Everything the parser recovered, chapters in text order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorySkeleton {
    /// Title, at most 100 characters
    pub title: String,
    /// Opening scene, at most 500 characters
    pub opening_scene: String,
    /// Chapters in the order they appear
    pub chapters: Vec<ParsedChapter>,
    /// Epilogue, at most 500 characters
    pub epilogue: String,
}

#[derive(Debug)]
struct Block {
    head: String,
    is_heading: bool,
    body: Vec<String>,
}

impl Block {
    fn name(&self) -> &str {
        heading_text(&self.head)
    }

    fn is_markdown(&self) -> bool {
        self.is_heading && self.head.starts_with('#')
    }

    /// Text after the colon of a plain `Keyword: text` section line.
    fn inline_text(&self) -> Option<&str> {
        if !self.is_heading || self.is_markdown() {
            return None;
        }
        inline_section_text(&self.head)
    }

    /// Section keyword without any inline text.
    fn label(&self) -> &str {
        match self.inline_text() {
            Some(_) => self.name().split(':').next().unwrap_or_default().trim(),
            None => self.name(),
        }
    }

    fn body_text(&self) -> String {
        self.body.join("\n").trim().to_string()
    }

    /// Body of an opening or epilogue section, inline text first.
    fn section_body(&self) -> String {
        let body = self.body_text();
        match self
            .inline_text()
            .filter(|_| self.is_opening() || self.is_epilogue())
        {
            Some(inline) if body.is_empty() => inline.to_string(),
            Some(inline) => format!("{}\n{}", inline, body),
            None => body,
        }
    }

    fn has_body(&self) -> bool {
        self.body.iter().any(|line| !line.trim().is_empty())
    }

    fn is_chapter(&self) -> bool {
        self.is_heading && PATTERNS.chapter.is_match(self.name())
    }

    fn is_opening(&self) -> bool {
        self.is_heading && !self.is_chapter() && PATTERNS.opening.is_match(self.label())
    }

    fn is_epilogue(&self) -> bool {
        self.is_heading && !self.is_chapter() && PATTERNS.epilogue.is_match(self.label())
    }

    /// Whether this block, when first, names the story.
    fn is_title(&self) -> bool {
        if self.is_chapter() {
            return false;
        }
        if !self.is_heading || heading_level(&self.head) == 1 {
            return true;
        }
        if PATTERNS.title_prefix.is_match(self.name()) {
            return true;
        }
        !(self.is_opening() || self.is_epilogue())
    }
}

fn heading_text(line: &str) -> &str {
    line.trim().trim_start_matches('#').trim()
}

fn heading_level(line: &str) -> usize {
    line.trim().chars().take_while(|c| *c == '#').count()
}

fn is_heading(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.starts_with('#') {
        return !PATTERNS.subheading.is_match(trimmed);
    }
    PATTERNS.chapter.is_match(trimmed) || PATTERNS.section.is_match(trimmed)
}

fn inline_section_text(line: &str) -> Option<&str> {
    PATTERNS
        .section
        .captures(line.trim())
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Line endings normalized, bold markers and code fences removed, trimmed.
fn clean(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace("**", "")
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn segment(text: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();

    for line in text.lines() {
        // Inside a chapter, a `Conclusion: ...` sentence is prose, not a section.
        let in_chapter_prose = !line.trim_start().starts_with('#')
            && line.trim_start().to_lowercase().starts_with("conclusion")
            && inline_section_text(line).is_some()
            && blocks.last().is_some_and(Block::is_chapter);

        if is_heading(line) && !in_chapter_prose {
            blocks.push(Block {
                head: line.trim().to_string(),
                is_heading: true,
                body: Vec::new(),
            });
            continue;
        }

        match blocks.last_mut() {
            Some(block) => block.body.push(line.trim_end().to_string()),
            None if !line.trim().is_empty() => blocks.push(Block {
                head: line.trim().to_string(),
                is_heading: false,
                body: Vec::new(),
            }),
            None => {}
        }
    }

    blocks
}

fn extract_title(block: &Block) -> String {
    let name = PATTERNS.title_prefix.replace(block.name(), "");
    let candidate = if name.trim().is_empty() {
        block
            .body
            .iter()
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string()
    } else {
        name.into_owned()
    };

    let first_line = candidate.lines().next().unwrap_or_default().trim();
    if first_line.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        truncate_chars(first_line, TITLE_LIMIT)
    }
}

fn section_text(block: Option<&Block>, fallback: &str) -> String {
    let text = block.map(Block::section_body).unwrap_or_default();
    if text.is_empty() {
        fallback.to_string()
    } else {
        truncate_chars(&text, SECTION_LIMIT)
    }
}

fn strip_artifacts(lines: &[&str], exclude_bullets: bool) -> String {
    lines
        .iter()
        .filter(|line| !PATTERNS.placeholder.is_match(line))
        .filter(|line| !(exclude_bullets && PATTERNS.bullet.is_match(line)))
        .map(|line| {
            ARTIFACTS
                .iter()
                .fold(line.to_string(), |acc, artifact| acc.replace(artifact, ""))
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn quest_name(block: &Block) -> String {
    let name = PATTERNS
        .chapter_prefix
        .replace(block.name(), "")
        .replace(['[', ']'], "");
    let name = name.trim();
    if name.is_empty() {
        FALLBACK_QUEST_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Position of the completion sub-heading and any text on the same line.
fn completion_marker<'a>(lines: &[&'a str]) -> Option<(usize, Option<&'a str>)> {
    lines.iter().copied().enumerate().find_map(|(index, line)| {
        if PATTERNS.subheading.is_match(line) {
            return Some((index, None));
        }
        PATTERNS.label.captures(line).map(|captures| {
            let inline = captures
                .get(1)
                .map(|m| m.as_str().trim())
                .filter(|text| !text.is_empty());
            (index, inline)
        })
    })
}

fn chapter_from(block: &Block, options: ParseOptions) -> ParsedChapter {
    let lines: Vec<&str> = block
        .body
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    let (narrative_lines, completion_lines): (Vec<&str>, Vec<&str>) =
        match completion_marker(&lines) {
            Some((index, inline)) => (
                lines[..index].to_vec(),
                inline
                    .into_iter()
                    .chain(lines[index + 1..].iter().copied())
                    .collect(),
            ),
            None => {
                let split = (lines.len() * 4 / 5).max(1).min(lines.len());
                (lines[..split].to_vec(), lines[split..].to_vec())
            }
        };

    let narrative = strip_artifacts(&narrative_lines, options.exclude_bullets);
    let completion = strip_artifacts(&completion_lines, false);

    ParsedChapter {
        quest_name: quest_name(block),
        narrative: if narrative.is_empty() {
            FALLBACK_NARRATIVE.to_string()
        } else {
            narrative
        },
        completion: if completion.is_empty() {
            FALLBACK_COMPLETION.to_string()
        } else {
            completion
        },
    }
}

/// First block after `start` satisfying `wanted`, preferring markdown headings
/// over plain keyword lines.
fn find_section(
    blocks: &[Block],
    start: usize,
    skip: Option<usize>,
    wanted: impl Fn(&Block) -> bool,
) -> Option<(usize, &Block)> {
    let mut matches = blocks
        .iter()
        .enumerate()
        .skip(start)
        .filter(|(index, block)| Some(*index) != skip && wanted(block));

    let first = matches.next()?;
    if first.1.is_markdown() {
        return Some(first);
    }
    matches.find(|(_, block)| block.is_markdown()).or(Some(first))
}

/// Parses model output with default options.
///
/// # Errors
///
/// Returns [`ParseErrorKind::NoTitleBlock`] when the text is empty after
/// cleaning.
///
/// # Examples
///
/// ```
/// use questweaver_narrative::parse_story;
///
/// let text = [
///     "# The Tidy Desk",
///     "## Opening Scene",
///     "Dust hangs in the lamplight.",
///     "## Chapter 1: The Paper Mountain",
///     "Sheets slide like scree.",
///     "### Victory Conditions",
///     "The desk gleams.",
///     "## Epilogue",
///     "Rest, at last.",
/// ]
/// .join("\n");
///
/// let story = parse_story(&text).unwrap();
/// assert_eq!(story.title, "The Tidy Desk");
/// assert_eq!(story.opening_scene, "Dust hangs in the lamplight.");
/// assert_eq!(story.chapters[0].quest_name, "The Paper Mountain");
/// assert_eq!(story.chapters[0].completion, "The desk gleams.");
/// assert_eq!(story.epilogue, "Rest, at last.");
/// ```
pub fn parse_story(raw: &str) -> Result<StorySkeleton, ParseError> {
    parse_story_with(raw, ParseOptions::default())
}

/// Parses model output.
///
/// # Errors
///
/// Returns [`ParseErrorKind::NoTitleBlock`] when the text is empty after
/// cleaning.
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_story_with(raw: &str, options: ParseOptions) -> Result<StorySkeleton, ParseError> {
    let text = clean(raw);
    let blocks = segment(&text);

    let Some(first) = blocks.first() else {
        return Err(ParseError::new(ParseErrorKind::NoTitleBlock(raw.len())));
    };

    let (title, start) = if first.is_title() {
        (extract_title(first), 1)
    } else {
        (FALLBACK_TITLE.to_string(), 0)
    };

    let opening = find_section(&blocks, start, None, Block::is_opening);
    let epilogue = find_section(
        &blocks,
        start,
        opening.map(|(index, _)| index),
        Block::is_epilogue,
    );

    let opening_index = opening.map(|(index, _)| index);
    let epilogue_index = epilogue.map(|(index, _)| index);

    let candidates: Vec<&Block> = blocks
        .iter()
        .enumerate()
        .skip(start)
        .filter(|(index, _)| Some(*index) != opening_index && Some(*index) != epilogue_index)
        .map(|(_, block)| block)
        .collect();

    let exact: Vec<&Block> = candidates.iter().copied().filter(|b| b.is_chapter()).collect();
    let chosen = if !exact.is_empty() {
        debug!(count = exact.len(), "Chapters found by number");
        exact
    } else {
        let loose: Vec<&Block> = candidates
            .iter()
            .copied()
            .filter(|b| b.is_heading && b.has_body() && PATTERNS.loose.is_match(b.name()))
            .collect();
        if !loose.is_empty() {
            debug!(count = loose.len(), "Chapters found by keyword");
            loose
        } else {
            let positional: Vec<&Block> =
                candidates.iter().copied().filter(|b| b.has_body()).collect();
            debug!(count = positional.len(), "Chapters found by position");
            positional
        }
    };

    let chapters = chosen
        .into_iter()
        .map(|block| chapter_from(block, options))
        .collect();

    let epilogue_block = epilogue.map(|(_, block)| block).or_else(|| blocks.last());

    Ok(StorySkeleton {
        title,
        opening_scene: section_text(opening.map(|(_, block)| block), FALLBACK_OPENING),
        chapters,
        epilogue: section_text(epilogue_block, FALLBACK_EPILOGUE),
    })
}
