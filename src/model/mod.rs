//! Record types produced by a crawl
//!
//! - `CandidateRecord`: one candidate with a campaign website link
//! - `Category`: house or senate
//! - `CrawlResult`: the two-category document written at the end of a run

mod record;
mod result;

pub use record::{name_key, CandidateRecord};
pub use result::{Category, CrawlResult};
