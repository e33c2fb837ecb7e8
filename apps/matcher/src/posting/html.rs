//! Splits a job page's description markup into categorized text blocks.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::posting::blocks::{PostingBlocks, DEFAULT_CATEGORY};

static DESCRIPTION: Lazy<Selector> = Lazy::new(|| selector("div.show-more-less-html__markup"));
static LIST_ITEM: Lazy<Selector> = Lazy::new(|| selector("li"));

pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// Collapses an element's text nodes into one trimmed, single-spaced string.
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

impl PostingBlocks {
    /// Parses a full posting page and sections its description.
    pub fn from_html(html: &str) -> Self {
        Self::from_document(&Html::parse_document(html))
    }

    /// Direct children of the description container drive the grouping:
    /// `h3`, `p` and `strong` start a new category named by their text, `ul`
    /// contributes each `li`, and any other element contributes its own text.
    pub fn from_document(document: &Html) -> Self {
        let Some(container) = document.select(&DESCRIPTION).next() else {
            return Self::placeholder();
        };

        let mut blocks = Self::new();
        let mut current = DEFAULT_CATEGORY.to_string();
        blocks.open_section(&current);

        for child in container.children().filter_map(ElementRef::wrap) {
            match child.value().name() {
                "h3" | "p" | "strong" => {
                    current = element_text(&child);
                    blocks.open_section(&current);
                }
                "ul" => {
                    for item in child.select(&LIST_ITEM) {
                        blocks.push_fragment(&current, element_text(&item));
                    }
                }
                "br" => {}
                _ => {
                    let text = element_text(&child);
                    if !text.is_empty() {
                        blocks.push_fragment(&current, text);
                    }
                }
            }
        }

        blocks
    }
}
