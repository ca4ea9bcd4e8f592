//! HTML parser for listing pages
//!
//! This module handles parsing raw markup to extract:
//! - State page hrefs from index pages
//! - List items (flattened text plus first hyperlink) from state pages
//!
//! Malformed markup is never an error here; it simply yields fewer items.

use crate::matcher::is_state_link;
use scraper::{ElementRef, Html, Selector};

/// One `<li>` entry of a state page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    /// Text nodes trimmed, empty ones dropped, joined by single spaces
    pub text: String,

    /// Trimmed href of the first `<a href>` inside the item
    pub href: Option<String>,
}

/// Extracts every href on an index page that names a state page
///
/// Hrefs are returned trimmed, in document order, duplicates included.
pub fn extract_state_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut hrefs = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                let href = href.trim();
                if is_state_link(href) {
                    hrefs.push(href.to_string());
                }
            }
        }
    }

    hrefs
}

/// Extracts every list item of a state page in document order
///
/// Nested lists produce an entry for the outer and the inner item alike.
pub fn extract_listing_items(html: &str) -> Vec<ListingItem> {
    let document = Html::parse_document(html);

    let (Ok(li_selector), Ok(a_selector)) = (Selector::parse("li"), Selector::parse("a[href]"))
    else {
        return Vec::new();
    };

    document
        .select(&li_selector)
        .map(|item| ListingItem {
            text: flatten_text(item),
            href: item
                .select(&a_selector)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|href| href.trim().to_string()),
        })
        .collect()
}

/// Joins an element's non-blank text nodes with single spaces
fn flatten_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
