use url::Url;

/// Suffix every state listing page carries
const STATE_PAGE_SUFFIX: &str = ".htm";

/// Checks if an href points at a state listing page
///
/// A state link is exactly two ASCII letters followed by `.htm`, compared
/// case-insensitively after trimming surrounding whitespace. Paths, query
/// strings, fragments and longer codes are all rejected.
///
/// # Examples
///
/// ```
/// use campaign_sites::matcher::is_state_link;
///
/// assert!(is_state_link("ny.htm"));
/// assert!(is_state_link("CA.HTM"));
/// assert!(!is_state_link("nys.htm"));
/// assert!(!is_state_link("ny.html"));
/// assert!(!is_state_link("index.htm"));
/// ```
pub fn is_state_link(href: &str) -> bool {
    let href = href.trim();

    match href.get(2..) {
        Some(suffix) => {
            suffix.eq_ignore_ascii_case(STATE_PAGE_SUFFIX)
                && href.bytes().take(2).all(|b| b.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// Derives the two-letter state code from a state page URL
///
/// Takes the last path segment, drops a trailing `.htm` in any case and
/// uppercases the rest. Returns `None` when that does not leave exactly two
/// ASCII letters.
///
/// # Examples
///
/// ```
/// use campaign_sites::matcher::state_code;
/// use url::Url;
///
/// let url = Url::parse("https://politics1.com/ny.htm").unwrap();
/// assert_eq!(state_code(&url).as_deref(), Some("NY"));
/// ```
pub fn state_code(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.last()?;
    let stem = strip_suffix_ignore_case(segment, STATE_PAGE_SUFFIX).unwrap_or(segment);

    if stem.len() == 2 && stem.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(stem.to_ascii_uppercase())
    } else {
        None
    }
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let (head, tail) = (s.get(..split)?, s.get(split..)?);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
