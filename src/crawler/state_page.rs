//! Candidate extraction from state listing pages

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::extract_listing_items;
use crate::matcher::{extract_candidate_name, state_code, AffiliationFilter};
use crate::model::CandidateRecord;
use crate::{RecordError, ScrapeError};
use url::Url;

/// Scrapes the party-tagged candidates from one state page
///
/// Every `<li>` is considered in document order. An item is kept when its
/// flattened text passes `filter` and it contains a hyperlink; the record's
/// website is the first link's href, trimmed and unresolved, so a blank href
/// gives an empty website.
///
/// A page without matching items yields an empty vector.
///
/// # Errors
///
/// * `ScrapeError::Record` - `state_url` is not a `xx.htm` page (checked before fetching)
/// * `ScrapeError::Fetch` - the page could not be fetched
pub async fn scrape_state_page<F: PageFetcher>(
    fetcher: &F,
    state_url: &Url,
    filter: &AffiliationFilter,
) -> Result<Vec<CandidateRecord>, ScrapeError> {
    if state_code(state_url).is_none() {
        return Err(RecordError::InvalidStatePage(state_url.to_string()).into());
    }

    let html = fetcher.fetch(state_url).await?;
    let mut records = Vec::new();

    for item in extract_listing_items(&html) {
        if !filter.matches(&item.text) {
            continue;
        }

        let Some(website) = item.href else {
            tracing::trace!("No website link for '{}' on {}", item.text, state_url);
            continue;
        };

        let candidate = extract_candidate_name(&item.text).unwrap_or_default();
        records.push(CandidateRecord::new(state_url, candidate, &website)?);
    }

    tracing::debug!("{} candidates on {}", records.len(), state_url);

    Ok(records)
}
