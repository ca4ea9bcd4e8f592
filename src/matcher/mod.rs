//! Text matching for listing pages
//!
//! Pure predicates and transforms used while walking the source site:
//! recognizing state page links, deriving state codes, and picking out
//! party-tagged candidate entries.

mod affiliation;
mod link;

pub use affiliation::{extract_candidate_name, AffiliationFilter};
pub use link::{is_state_link, state_code};
