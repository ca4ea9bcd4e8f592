//! Crawl coordinator - main crawl orchestration logic
//!
//! This module first discovers the state links on both index pages, house
//! then senate, and then runs the two category passes in the same order.
//! Each pass:
//! - Scrapes every state link in order, paced by the `Pacer`
//! - Collects records and per-page failures
//!
//! An index page failure aborts the whole run before any state page is
//! fetched. A state page failure is logged
//! and costs only that page's records.

use crate::config::Config;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::index::discover_state_links;
use crate::crawler::outcome::{CategoryReport, CrawlReport, PageOutcome};
use crate::crawler::phase::CrawlPhase;
use crate::crawler::scheduler::Pacer;
use crate::crawler::state_page::scrape_state_page;
use crate::matcher::AffiliationFilter;
use crate::model::{CandidateRecord, Category, CrawlResult};
use crate::{ConfigError, ScrapeError};
use chrono::Utc;
use url::Url;

/// Main crawl coordinator structure
pub struct Coordinator<F> {
    fetcher: F,
    base_url: Url,
    house_index: String,
    senate_index: String,
    filter: AffiliationFilter,
    pacer: Pacer,
    phase: CrawlPhase,
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration
    /// * `fetcher` - Where page markup comes from
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScrapeError)` - Base URL or party code is unusable
    pub fn new(config: &Config, fetcher: F) -> Result<Self, ScrapeError> {
        let base_url = Url::parse(&config.site.base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

        let party = config.crawler.party.chars().next().ok_or_else(|| {
            ConfigError::Validation("party must be a single letter".to_string())
        })?;

        Ok(Self {
            fetcher,
            base_url,
            house_index: config.site.house_index.clone(),
            senate_index: config.site.senate_index.clone(),
            filter: AffiliationFilter::new(party),
            pacer: Pacer::from_config(&config.crawler),
            phase: CrawlPhase::DiscoverLinks,
        })
    }

    /// Index page of a category
    pub fn index_page(&self, category: Category) -> &str {
        match category {
            Category::House => &self.house_index,
            Category::Senate => &self.senate_index,
        }
    }

    /// Current phase of the active category pass
    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    /// Discovers both categories' state links, then runs both scrape passes
    ///
    /// Both index pages are fetched before any state page, so an index
    /// failure aborts the run before any scraping. Returns the aggregated
    /// result together with per-category counts. No partial result is
    /// returned when an index page fails.
    pub async fn run(&mut self) -> Result<CrawlReport, ScrapeError> {
        let started_at = Utc::now();
        let mut result = CrawlResult::new();
        let mut categories = Vec::new();

        let mut discovered = Vec::new();
        for category in Category::ALL {
            let links = self.discover(category).await?;
            discovered.push((category, links));
        }

        for (category, links) in discovered {
            let (report, records) = self.run_category(category, links).await?;
            result.extend(category, records);
            categories.push(report);
        }

        for report in &categories {
            tracing::info!(
                "{}: {} state pages discovered, {} scraped, {} failed, {} candidates",
                report.category,
                report.pages_discovered,
                report.pages_scraped,
                report.pages_failed(),
                report.candidates
            );
        }

        Ok(CrawlReport {
            result,
            categories,
            started_at,
            finished_at: Utc::now(),
        })
    }

    async fn discover(&mut self, category: Category) -> Result<Vec<Url>, ScrapeError> {
        self.phase = CrawlPhase::DiscoverLinks;

        let index_page = self.index_page(category);
        tracing::info!("Discovering {} state pages from {}", category, index_page);

        let links = discover_state_links(&self.fetcher, &self.base_url, index_page).await?;
        tracing::info!("{} state pages: {}", category, links.len());

        Ok(links)
    }

    /// Runs one category pass over already discovered state links
    async fn run_category(
        &mut self,
        category: Category,
        links: Vec<Url>,
    ) -> Result<(CategoryReport, Vec<CandidateRecord>), ScrapeError> {
        self.phase = CrawlPhase::DiscoverLinks;

        let mut report = CategoryReport::new(category, links.len());
        let mut records = Vec::new();
        self.pacer.reset();

        for url in links {
            self.transition(CrawlPhase::ScrapePage)?;
            tracing::info!("Scraping {} -> {}", category, url);

            let outcome = self.scrape_page(url).await;
            if let PageOutcome::Failed { url, error } = &outcome {
                tracing::warn!("Error scraping {}: {}", url, error);
            }
            records.extend(report.absorb(outcome));
        }

        self.transition(CrawlPhase::CategoryDone)?;

        Ok((report, records))
    }

    /// Scrapes a single state page, paced against the end of the previous one
    async fn scrape_page(&mut self, url: Url) -> PageOutcome {
        self.pacer.ready().await;
        let scraped = scrape_state_page(&self.fetcher, &url, &self.filter).await;
        self.pacer.record_request();

        match scraped {
            Ok(records) => PageOutcome::Scraped { url, records },
            Err(error) => PageOutcome::Failed { url, error },
        }
    }

    fn transition(&mut self, next: CrawlPhase) -> Result<(), ScrapeError> {
        if !self.phase.can_transition_to(next) {
            return Err(ScrapeError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        Ok(())
    }
}
