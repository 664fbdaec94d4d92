//! Story extraction from compiled Twine 2 HTML archives.
//!
//! All Twine 2 story formats (Harlowe, SugarCube, Snowman, Chapbook) compile
//! to a single HTML file with embedded `<tw-storydata>` and `<tw-passagedata>`
//! elements. This module walks that container and produces a normalized
//! [`Story`]: the archive attributes, two leading synthetic passages
//! (`StoryTitle`, `StoryMetadata`), every source passage in document order,
//! and trailing `UserStylesheet` / `UserScript` passages when the archive
//! carries custom CSS or JS.
//!
//! Passage names and tags pass through [`escape_metacharacters`] so they are
//! safe for the downstream line-oriented story source format, where `{`, `}`,
//! `[`, `]` are structurally significant.

use crate::dom::{Document, Element};
use crate::error::{ExtractError, Result};
use crate::story::{Metadata, Passage, PassageAttributes, Story};

const STORY_DATA: &str = "tw-storydata";
const PASSAGE_DATA: &str = "tw-passagedata";
const USER_STYLESHEET: &str = "#twine-user-stylesheet";
const USER_SCRIPT: &str = "#twine-user-script";

/// The two-character `""` a Twine archive writes for a passage with no tags.
const EMPTY_TAGS: &str = "\"\"";

/// Extract a [`Story`] from a parsed Twine 2 archive.
///
/// Fails only when the document has no `<tw-storydata>` element. Everything
/// else degrades: missing attributes become empty strings, a missing
/// `startnode` leaves `metadata.start` absent, and empty stylesheet/script
/// blocks produce no synthetic passage.
pub fn extract_story<D: Document>(dom: &D) -> Result<Story> {
    let story_data = dom.select_first(STORY_DATA).ok_or(ExtractError::NotTwine2)?;

    let name = attr_or_empty(&story_data, "name");
    let creator = attr_or_empty(&story_data, "creator");
    let creator_version = attr_or_empty(&story_data, "creator-version");

    let mut metadata = Metadata {
        ifid: attr_or_empty(&story_data, "ifid"),
        format: attr_or_empty(&story_data, "format"),
        format_version: attr_or_empty(&story_data, "format-version"),
        zoom: attr_or_empty(&story_data, "zoom"),
        start: story_data.attribute("startnode").map(str::to_string),
    };

    // The StoryMetadata body is a snapshot taken here, before the passage
    // loop rewrites `start`. Downstream consumers rely on this ordering.
    let mut passages = vec![
        Passage::new("StoryTitle", "", PassageAttributes::default(), name.clone()),
        Passage::new(
            "StoryMetadata",
            "",
            PassageAttributes::default(),
            metadata.to_pretty_json()?,
        ),
    ];

    for passage in dom.select_all(PASSAGE_DATA) {
        let attributes = PassageAttributes {
            position: passage.attribute("position").map(str::to_string),
            size: passage.attribute("size").map(str::to_string),
        };
        let pid = passage.attribute("pid").unwrap_or_default();
        let name = escape_metacharacters(passage.attribute("name").unwrap_or_default());

        let raw_tags = passage.attribute("tags").unwrap_or_default();
        let tags = if !raw_tags.is_empty() && raw_tags != EMPTY_TAGS {
            escape_metacharacters(raw_tags)
        } else {
            String::new()
        };

        // Start-passage resolution: the passage with pid 1 names the start
        // unless it already carries the conventional name. Runs once per
        // passage in document order; a later passage overrides an earlier
        // one, and any non-pid-1 passage clears the field.
        if pid == "1" && name != "Start" {
            metadata.start = Some(name.clone());
        } else {
            metadata.start = None;
        }

        passages.push(Passage::new(name, tags, attributes, passage.raw_text()));
    }

    if let Some(style) = dom.select_first(USER_STYLESHEET) {
        let css = style.raw_text();
        if !css.is_empty() {
            passages.push(Passage::new(
                "UserStylesheet",
                "style",
                PassageAttributes::default(),
                css,
            ));
        }
    }

    if let Some(script) = dom.select_first(USER_SCRIPT) {
        let js = script.raw_text();
        if !js.is_empty() {
            passages.push(Passage::new(
                "UserScript",
                "script",
                PassageAttributes::default(),
                js,
            ));
        }
    }

    Ok(Story {
        name,
        creator,
        creator_version,
        metadata,
        passages,
    })
}

fn attr_or_empty<E: Element>(el: &E, name: &str) -> String {
    el.attribute(name).unwrap_or_default().to_string()
}

/// Escape structural metacharacters in a passage name or tags string.
///
/// Inserts a backslash before the *first* occurrence of each of `{`, `}`,
/// `[`, `]` present in the input. Only when none of the four appear is the
/// first backslash itself escaped, so an already-inserted escape is never
/// doubled. Later occurrences of the same metacharacter are left untouched;
/// this matches the behavior downstream consumers were written against, so
/// do not widen it to all occurrences.
pub fn escape_metacharacters(text: &str) -> String {
    let mut marks: Vec<usize> = ['{', '}', '[', ']']
        .into_iter()
        .filter_map(|meta| text.find(meta))
        .collect();

    if marks.is_empty() {
        if let Some(pos) = text.find('\\') {
            marks.push(pos);
        }
    }

    // Insert back-to-front so earlier positions stay valid. The marks are
    // byte offsets of ASCII characters, always char boundaries.
    marks.sort_unstable_by(|a, b| b.cmp(a));
    let mut result = text.to_string();
    for pos in marks {
        result.insert(pos, '\\');
    }
    result
}
