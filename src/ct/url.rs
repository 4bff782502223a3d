//! Feed query URL construction

/// Appended from the fourth attempt onwards to drop expired certificates
pub const EXCLUDE_EXPIRED: &str = "&exclude=expired";

/// Appended from the fifth attempt onwards to ask the service to deduplicate
pub const DEDUPLICATE: &str = "&deduplicate=Y";

/// Build the Atom feed URL for a search term and match mode.
///
/// The term is percent-encoded; the match mode is passed through as given.
pub fn build_feed_url(base_url: &str, query: &str, match_mode: &str) -> String {
    format!(
        "{}/atom?q={}&match={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query),
        match_mode
    )
}

/// URL to request on a given zero-indexed attempt.
///
/// Later attempts narrow the query so a struggling upstream has less to
/// return. Modifiers are cumulative.
pub fn attempt_url(feed_url: &str, attempt: u32) -> String {
    let mut url = feed_url.to_string();
    if attempt > 2 {
        url.push_str(EXCLUDE_EXPIRED);
    }
    if attempt > 3 {
        url.push_str(DEDUPLICATE);
    }
    url
}
