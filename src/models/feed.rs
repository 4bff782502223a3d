//! Decoded CT search feed types

/// One raw result item from the search feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    /// Canonical URL of the certificate observation
    pub id: String,
    /// Free text that may embed a PEM certificate
    pub summary: String,
    pub title: String,
}

/// A decoded feed response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomFeed {
    pub entries: Vec<FeedEntry>,
}

impl AtomFeed {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
