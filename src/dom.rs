//! DOM access seam.
//!
//! The extraction engine never touches HTML syntax. It consumes an
//! already-parsed tree through four capabilities: select the first element
//! matching a selector, select all matching elements, look up an attribute,
//! and read raw text content. Any conforming tree implementation satisfies
//! the [`Document`] trait; [`HtmlDocument`] is the default one, backed by
//! the `scraper` crate.

use scraper::{ElementRef, Html, Selector};

/// Read access to one element of a parsed document.
pub trait Element {
    /// Look up an attribute value on this element.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// The concatenated descendant text, with HTML entities already decoded
    /// by the parser.
    fn raw_text(&self) -> String;
}

/// A parsed document tree, queryable by CSS selector.
pub trait Document {
    type Node<'a>: Element
    where
        Self: 'a;

    /// The first element matching `selector` in document order, if any.
    fn select_first(&self, selector: &str) -> Option<Self::Node<'_>>;

    /// All elements matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self::Node<'_>>;
}

/// A document parsed by `scraper` (html5ever underneath).
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse an HTML archive. html5ever is lenient, so this never fails;
    /// a non-story document simply yields no `<tw-storydata>` element.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }
}

impl Document for HtmlDocument {
    type Node<'a>
        = HtmlElement<'a>
    where
        Self: 'a;

    fn select_first(&self, selector: &str) -> Option<HtmlElement<'_>> {
        let selector = Selector::parse(selector).ok()?;
        self.html.select(&selector).next().map(HtmlElement)
    }

    fn select_all(&self, selector: &str) -> Vec<HtmlElement<'_>> {
        match Selector::parse(selector) {
            Ok(selector) => self.html.select(&selector).map(HtmlElement).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// An element of an [`HtmlDocument`].
pub struct HtmlElement<'a>(ElementRef<'a>);

impl Element for HtmlElement<'_> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.0.value().attr(name)
    }

    fn raw_text(&self) -> String {
        self.0.text().collect()
    }
}
