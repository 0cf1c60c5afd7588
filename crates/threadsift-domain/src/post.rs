//! Post module - the canonical input record every stage consumes

/// Sentinel author value meaning "no attributable author".
///
/// Posts carrying this author still count toward volume but are excluded
/// from author rankings and from the co-occurrence network.
pub const DELETED_AUTHOR: &str = "[deleted]";

/// A normalized social-media record.
///
/// Created once during normalization and immutable afterward. Fields that
/// could not be derived from the raw record are empty strings, never
/// absent: an empty `date` means "unbucketable" and an empty `text` means
/// "no analyzable text".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Record identifier from the source, may be empty.
    pub id: String,
    /// Author name; [`DELETED_AUTHOR`] or empty when unattributable.
    pub author: String,
    /// Source channel (subreddit), may be empty.
    pub subreddit: String,
    /// Normalized `YYYY-MM-DD` date bucket, empty when underivable.
    pub date: String,
    /// Title, self-text and body joined by single spaces, trimmed.
    pub text: String,
}

impl Post {
    /// Whether this post can participate in date-keyed aggregates.
    pub fn has_date(&self) -> bool {
        !self.date.is_empty()
    }

    /// Whether this post has any analyzable text.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Whether this post has a real, attributable author.
    pub fn has_author(&self) -> bool {
        !self.author.is_empty() && self.author != DELETED_AUTHOR
    }
}
