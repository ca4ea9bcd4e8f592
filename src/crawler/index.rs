//! State link discovery from chamber index pages

use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::extract_state_hrefs;
use crate::ScrapeError;
use std::collections::BTreeSet;
use url::Url;

/// Enumerates the state pages linked from an index page
///
/// Resolves `index_page` against `base`, fetches it, keeps hrefs shaped like
/// `xx.htm`, resolves them against `base` and returns them deduplicated and
/// sorted by URL string.
///
/// Deduplication is exact: `ca.htm` and `CA.htm` resolve to different URLs and
/// are both kept.
///
/// # Errors
///
/// Any fetch failure is returned as-is; the caller treats it as fatal.
pub async fn discover_state_links<F: PageFetcher>(
    fetcher: &F,
    base: &Url,
    index_page: &str,
) -> Result<Vec<Url>, ScrapeError> {
    let index_url = base.join(index_page)?;
    let html = fetcher.fetch(&index_url).await?;

    // Url orders by its serialization, so the set iterates in URL string order
    let links: BTreeSet<Url> = extract_state_hrefs(&html)
        .iter()
        .filter_map(|href| match base.join(href) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::debug!("Skipping unresolvable href {}: {}", href, e);
                None
            }
        })
        .collect();

    tracing::debug!("{} state links on {}", links.len(), index_url);

    Ok(links.into_iter().collect())
}
