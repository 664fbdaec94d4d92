//! Extraction of Twine 2 stories from compiled HTML archives.
//!
//! A Twine 2 archive is an HTML file embedding the story as custom elements:
//! one `<tw-storydata>` root with `<tw-passagedata>` children, plus optional
//! user stylesheet and script blocks. This crate normalizes such an archive
//! into an in-memory [`Story`] suitable for export to a line-oriented story
//! source format:
//!
//! - `story` — the [`Story`] / [`Passage`] model and metadata serialization
//! - `dom` — the DOM access seam and its `scraper`-backed implementation
//! - `extract` — the extraction engine and metacharacter escaping
//! - `error` — the crate error type
//!
//! ```no_run
//! let story = twee_extract::extract_file(std::path::Path::new("story.html"))?;
//! assert_eq!(story.passages[0].name, "StoryTitle");
//! # Ok::<(), twee_extract::ExtractError>(())
//! ```

pub mod dom;
pub mod error;
pub mod extract;
pub mod story;

pub use dom::{Document, Element, HtmlDocument};
pub use error::{ExtractError, Result};
pub use extract::{escape_metacharacters, extract_story};
pub use story::{Metadata, Passage, PassageAttributes, Story};

use std::path::Path;

/// Read a Twine 2 HTML archive from disk and extract its story.
///
/// A missing file surfaces as [`ExtractError::FileNotFound`]; a document
/// without a `<tw-storydata>` element as [`ExtractError::NotTwine2`].
pub fn extract_file(path: &Path) -> Result<Story> {
    let html = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ExtractError::FileNotFound(path.to_path_buf()),
        _ => ExtractError::Io(e),
    })?;
    let dom = HtmlDocument::parse(&html);
    extract_story(&dom)
}
