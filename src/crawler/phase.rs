//! Phase definitions for one category pass
//!
//! Each category runs `DiscoverLinks → ScrapePage* → CategoryDone`. The links
//! of both categories are discovered before the first pass starts scraping.

use std::fmt;

/// Represents where a category pass currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlPhase {
    /// Fetching the index page and collecting state links
    DiscoverLinks,

    /// Working through the state links
    ScrapePage,

    /// All state links attempted
    CategoryDone,
}

impl CrawlPhase {
    /// Checks whether moving to `next` is allowed
    ///
    /// `ScrapePage → ScrapePage` is the per-link step. A category with no
    /// state links goes straight from discovery to done.
    pub fn can_transition_to(&self, next: CrawlPhase) -> bool {
        matches!(
            (self, next),
            (Self::DiscoverLinks, Self::ScrapePage)
                | (Self::DiscoverLinks, Self::CategoryDone)
                | (Self::ScrapePage, Self::ScrapePage)
                | (Self::ScrapePage, Self::CategoryDone)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DiscoverLinks => "discover_links",
            Self::ScrapePage => "scrape_page",
            Self::CategoryDone => "category_done",
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
