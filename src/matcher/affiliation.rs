/// Party marker filter for listing entries
///
/// Matches the parenthesized party code, e.g. `(D)`, anywhere in the text,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationFilter {
    marker: String,
}

impl AffiliationFilter {
    /// Creates a filter for the given single-letter party code
    pub fn new(party: char) -> Self {
        Self {
            marker: format!("({})", party.to_ascii_lowercase()),
        }
    }

    /// Returns the marker this filter looks for, lowercased
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Checks whether listing text carries the party marker
    ///
    /// # Examples
    ///
    /// ```
    /// use campaign_sites::matcher::AffiliationFilter;
    ///
    /// let filter = AffiliationFilter::default();
    /// assert!(filter.matches("Jane Doe (D) - Incumbent"));
    /// assert!(!filter.matches("John Roe (R)"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.marker)
    }
}

impl Default for AffiliationFilter {
    fn default() -> Self {
        Self::new('D')
    }
}

/// Extracts the candidate name from listing text
///
/// The name is everything before the first `(`, trimmed. Returns `None` when
/// the text has no `(`; such entries never pass an [`AffiliationFilter`]
/// anyway.
///
/// # Examples
///
/// ```
/// use campaign_sites::matcher::extract_candidate_name;
///
/// assert_eq!(extract_candidate_name("Jane Doe (D) - Incumbent"), Some("Jane Doe"));
/// assert_eq!(extract_candidate_name("No marker here"), None);
/// ```
pub fn extract_candidate_name(text: &str) -> Option<&str> {
    text.split_once('(').map(|(name, _)| name.trim())
}
