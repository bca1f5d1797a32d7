//! Content Aggregation
//!
//! Pure helpers for filtering and ordering the fetched content list.
//! Recomputed on every filter change; no side effects.

use chrono::{DateTime, NaiveDateTime};

use crate::models::ContentItem;

/// View-level filter over the tweet collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFilter {
    #[default]
    All,
    /// Items with an empty or absent media list
    TextOnly,
    /// Items with at least one media URL
    MediaOnly,
}

impl ContentFilter {
    pub fn from_value(value: &str) -> Self {
        match value {
            "tweets" => Self::TextOnly,
            "media" => Self::MediaOnly,
            _ => Self::All,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::TextOnly => "tweets",
            Self::MediaOnly => "media",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Posts",
            Self::TextOnly => "Text Only",
            Self::MediaOnly => "With Media",
        }
    }
}

pub const CONTENT_FILTERS: &[ContentFilter] = &[
    ContentFilter::All,
    ContentFilter::TextOnly,
    ContentFilter::MediaOnly,
];

/// Derive the display sequence: apply the filter, then sort newest-first
/// by posted timestamp.
pub fn visible_content(items: &[ContentItem], filter: ContentFilter) -> Vec<ContentItem> {
    let mut content: Vec<ContentItem> = items
        .iter()
        .filter(|item| match filter {
            ContentFilter::All => true,
            ContentFilter::TextOnly => item.media_urls.is_empty(),
            ContentFilter::MediaOnly => !item.media_urls.is_empty(),
        })
        .cloned()
        .collect();
    content.sort_by_key(|item| std::cmp::Reverse(posted_at_key(&item.posted_at)));
    content
}

/// Number of items carrying media, for the analysis stats cards.
pub fn media_count(items: &[ContentItem]) -> usize {
    items
        .iter()
        .filter(|item| !item.media_urls.is_empty())
        .count()
}

/// Parse a backend timestamp into a sortable key. Accepts RFC 3339 and the
/// scraper's naive `YYYY-MM-DD HH:MM:SS` form; anything else sorts last.
fn posted_at_key(posted_at: &str) -> i64 {
    if let Ok(dt) = DateTime::parse_from_rfc3339(posted_at) {
        return dt.timestamp_millis();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(posted_at, "%Y-%m-%d %H:%M:%S") {
        return dt.and_utc().timestamp_millis();
    }
    i64::MIN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, posted_at: &str, media: &[&str]) -> ContentItem {
        ContentItem {
            tweet_id: id.to_string(),
            text: format!("tweet {}", id),
            media_urls: media.iter().map(|m| m.to_string()).collect(),
            posted_at: posted_at.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<ContentItem> {
        vec![
            make_item("1", "2024-03-01T12:00:00Z", &[]),
            make_item("2", "2024-03-03T12:00:00Z", &["https://img/a.jpg"]),
            make_item("3", "2024-03-02T12:00:00Z", &[]),
            make_item("4", "2024-03-04T12:00:00Z", &["https://img/b.jpg", "https://img/c.jpg"]),
        ]
    }

    #[test]
    fn all_filter_preserves_full_set_sorted_desc() {
        let out = visible_content(&sample(), ContentFilter::All);
        let ids: Vec<&str> = out.iter().map(|i| i.tweet_id.as_str()).collect();
        assert_eq!(ids, vec!["4", "2", "3", "1"]);
    }

    #[test]
    fn text_only_excludes_media_items() {
        let out = visible_content(&sample(), ContentFilter::TextOnly);
        assert!(out.iter().all(|i| i.media_urls.is_empty()));
        let ids: Vec<&str> = out.iter().map(|i| i.tweet_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn media_only_is_the_complement() {
        let out = visible_content(&sample(), ContentFilter::MediaOnly);
        assert!(out.iter().all(|i| !i.media_urls.is_empty()));
        let ids: Vec<&str> = out.iter().map(|i| i.tweet_id.as_str()).collect();
        assert_eq!(ids, vec!["4", "2"]);
    }

    #[test]
    fn naive_timestamps_sort_with_rfc3339() {
        let items = vec![
            make_item("a", "2024-03-01 08:00:00", &[]),
            make_item("b", "2024-03-01T09:00:00Z", &[]),
        ];
        let out = visible_content(&items, ContentFilter::All);
        assert_eq!(out[0].tweet_id, "b");
        assert_eq!(out[1].tweet_id, "a");
    }

    #[test]
    fn unparseable_timestamps_sort_last() {
        let items = vec![
            make_item("a", "garbage", &[]),
            make_item("b", "2024-03-01T09:00:00Z", &[]),
        ];
        let out = visible_content(&items, ContentFilter::All);
        assert_eq!(out[0].tweet_id, "b");
        assert_eq!(out[1].tweet_id, "a");
    }

    #[test]
    fn media_count_counts_items_with_urls() {
        assert_eq!(media_count(&sample()), 2);
        assert_eq!(media_count(&[]), 0);
    }

    #[test]
    fn filter_round_trips_select_values() {
        for filter in CONTENT_FILTERS {
            assert_eq!(ContentFilter::from_value(filter.value()), *filter);
        }
        assert_eq!(ContentFilter::from_value("unknown"), ContentFilter::All);
    }
}
