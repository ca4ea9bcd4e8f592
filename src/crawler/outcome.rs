//! Per-page outcomes and run reports
//!
//! A state page scrape either yields records or a failure. The coordinator
//! keeps both: records feed the `CrawlResult`, failures are kept on the side
//! for logging and the end-of-run statistics.

use crate::model::{CandidateRecord, Category, CrawlResult};
use crate::ScrapeError;
use chrono::{DateTime, Utc};
use url::Url;

/// Result of scraping one state page
#[derive(Debug)]
pub enum PageOutcome {
    /// Page fetched and parsed; may hold zero records
    Scraped {
        url: Url,
        records: Vec<CandidateRecord>,
    },

    /// Page could not be scraped; contributes no records
    Failed { url: Url, error: ScrapeError },
}

/// A state page that failed, kept for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub url: String,
    pub message: String,
}

/// Summary of one category pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReport {
    pub category: Category,

    /// State links found on the index page
    pub pages_discovered: usize,

    /// State pages scraped without error
    pub pages_scraped: usize,

    /// Records collected for the category
    pub candidates: usize,

    /// State pages that failed, in crawl order
    pub failures: Vec<PageFailure>,
}

impl CategoryReport {
    pub fn new(category: Category, pages_discovered: usize) -> Self {
        Self {
            category,
            pages_discovered,
            pages_scraped: 0,
            candidates: 0,
            failures: Vec::new(),
        }
    }

    /// Folds one page outcome into the counts, returning its records
    pub fn absorb(&mut self, outcome: PageOutcome) -> Vec<CandidateRecord> {
        match outcome {
            PageOutcome::Scraped { records, .. } => {
                self.pages_scraped += 1;
                self.candidates += records.len();
                records
            }
            PageOutcome::Failed { url, error } => {
                self.failures.push(PageFailure {
                    url: url.to_string(),
                    message: error.to_string(),
                });
                Vec::new()
            }
        }
    }

    pub fn pages_failed(&self) -> usize {
        self.failures.len()
    }
}

/// Everything a completed run produced
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// The document to persist
    pub result: CrawlResult,

    /// One report per category, in crawl order
    pub categories: Vec<CategoryReport>,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Failed pages across all categories
    pub fn total_failures(&self) -> usize {
        self.categories.iter().map(CategoryReport::pages_failed).sum()
    }

    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}
