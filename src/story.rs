//! The normalized story model produced by extraction.
//!
//! A [`Story`] holds the top-level archive attributes plus every passage in
//! insertion order. The first two passages are always the synthetic
//! `StoryTitle` and `StoryMetadata` entries; `UserStylesheet` / `UserScript`
//! trail the real passages when the archive carries custom CSS or JS.

use serde::{Deserialize, Serialize};

/// A Twine story normalized from its HTML container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// The story title from the `name` attribute.
    pub name: String,
    /// The authoring tool (e.g. "Twine").
    pub creator: String,
    /// The authoring tool version.
    pub creator_version: String,
    /// Story-level metadata from the remaining `<tw-storydata>` attributes.
    pub metadata: Metadata,
    /// All passages, synthetic entries included, in insertion order.
    pub passages: Vec<Passage>,
}

/// Story metadata.
///
/// Serializes in camelCase with `start` omitted when absent; field order is
/// fixed so the `StoryMetadata` passage body is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// The IFID (Interactive Fiction IDentifier).
    pub ifid: String,
    /// The story format (e.g. "Harlowe", "SugarCube").
    pub format: String,
    /// The story format version (e.g. "3.0.2").
    pub format_version: String,
    /// The editor zoom level, kept as the raw attribute string.
    pub zoom: String,
    /// The starting passage, when it is not the conventional `Start`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl Metadata {
    /// Serialize as indented JSON with Twine's 4-space layout.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
    }
}

/// A single passage: one `<tw-passagedata>` element, or a synthetic entry
/// injected to carry story-level content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    /// The passage name, with structural metacharacters escaped.
    pub name: String,
    /// The raw tags string, escaped; empty when the source had no tags.
    pub tags: String,
    /// Editor layout attributes; absent for synthetic passages.
    pub attributes: PassageAttributes,
    /// The passage body text.
    pub text: String,
}

/// Editor layout attributes of a passage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassageAttributes {
    /// The `position` attribute ("x,y"), kept as the raw string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// The `size` attribute ("w,h"), kept as the raw string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl Passage {
    pub fn new(
        name: impl Into<String>,
        tags: impl Into<String>,
        attributes: PassageAttributes,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tags: tags.into(),
            attributes,
            text: text.into(),
        }
    }
}
