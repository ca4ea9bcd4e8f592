use crate::matcher::state_code;
use crate::RecordError;
use serde::Serialize;
use url::Url;

/// One party-tagged candidate entry found on a state page
///
/// Built only through [`CandidateRecord::new`], which derives `state` from
/// `state_page`, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    state_page: String,
    candidate: String,
    website: String,
    state: String,
}

impl CandidateRecord {
    /// Creates a record for an entry on `state_page`
    ///
    /// `website` is stored trimmed and left unresolved; a blank link gives an
    /// empty website.
    ///
    /// # Errors
    ///
    /// * `RecordError::InvalidStatePage` - the URL does not end in a `xx.htm` page
    pub fn new(
        state_page: &Url,
        candidate: impl Into<String>,
        website: &str,
    ) -> Result<Self, RecordError> {
        let state = state_code(state_page)
            .ok_or_else(|| RecordError::InvalidStatePage(state_page.to_string()))?;

        Ok(Self {
            state_page: state_page.to_string(),
            candidate: candidate.into(),
            website: website.trim().to_string(),
            state,
        })
    }

    pub fn state_page(&self) -> &str {
        &self.state_page
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn website(&self) -> &str {
        &self.website
    }

    /// Two-letter uppercase state code
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Join key used when merging with other candidate tables
    pub fn name_key(&self) -> String {
        name_key(&self.candidate)
    }
}

/// Normalizes a candidate name into a join key
///
/// Uppercases the trimmed name; a `LAST, FIRST` name is reordered to
/// `FIRST LAST` first.
///
/// # Examples
///
/// ```
/// use campaign_sites::model::name_key;
///
/// assert_eq!(name_key("Doe, Jane"), "JANE DOE");
/// assert_eq!(name_key(" Jane Doe "), "JANE DOE");
/// ```
pub fn name_key(name: &str) -> String {
    let name = name.trim().to_uppercase();
    match name.split_once(',') {
        Some((last, first)) => format!("{} {}", first.trim(), last.trim()),
        None => name,
    }
}
