//! User Slice
//!
//! Current profile, fetched content, and search history.

use crate::models::{ContentItem, Profile, ProfileDetailResponse, UserInfoResponse};

/// Search history is bounded; the oldest entry is evicted at capacity.
pub const MAX_SEARCH_HISTORY: usize = 10;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserSlice {
    pub current_user: Option<Profile>,
    pub tweets: Vec<ContentItem>,
    pub posts: Vec<ContentItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_history: Vec<String>,
    /// Latest issued request sequence; resolutions carrying an older
    /// sequence are ignored.
    request_seq: u64,
}

impl UserSlice {
    /// Start a fetch: bump the sequence, raise the loading flag, clear any
    /// prior error. Returns the sequence the resolution must present.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    /// Commit a full user lookup: profile, tweets, and posts are replaced
    /// atomically and the username is recorded in search history. A failed
    /// lookup keeps prior data and stores the message.
    pub fn finish_user_info(&mut self, seq: u64, result: Result<UserInfoResponse, String>) {
        if !self.is_current(seq) {
            return;
        }
        self.loading = false;
        match result {
            Ok(payload) => {
                let username = payload.user.username.clone();
                self.current_user = Some(payload.user);
                self.tweets = payload.tweets;
                self.posts = payload.posts;
                self.error = None;
                self.record_search(&username);
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Commit a tweets-only fetch; profile and posts are untouched.
    pub fn finish_tweets(&mut self, seq: u64, result: Result<Vec<ContentItem>, String>) {
        if !self.is_current(seq) {
            return;
        }
        self.loading = false;
        match result {
            Ok(tweets) => {
                self.tweets = tweets;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Commit a posts-only fetch; profile and tweets are untouched.
    pub fn finish_posts(&mut self, seq: u64, result: Result<Vec<ContentItem>, String>) {
        if !self.is_current(seq) {
            return;
        }
        self.loading = false;
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Commit a stored-profile lookup (GET /profile/{username}); supplies
    /// profile, tweets, and posts in one call.
    pub fn finish_profile(&mut self, seq: u64, result: Result<ProfileDetailResponse, String>) {
        if !self.is_current(seq) {
            return;
        }
        self.loading = false;
        match result {
            Ok(payload) => {
                let username = payload.profile.username.clone();
                self.current_user = Some(payload.profile);
                self.tweets = payload.tweets;
                self.posts = payload.posts;
                self.error = None;
                self.record_search(&username);
            }
            Err(message) => self.error = Some(message),
        }
    }

    // Direct setters for data hydrated outside the async lifecycle (the
    // users-list click flow). Must not toggle loading/error.

    pub fn set_current_user(&mut self, profile: Profile) {
        self.current_user = Some(profile);
    }

    pub fn set_tweets(&mut self, tweets: Vec<ContentItem>) {
        self.tweets = tweets;
    }

    pub fn set_posts(&mut self, posts: Vec<ContentItem>) {
        self.posts = posts;
    }

    /// Reset profile, content, and error. Search history survives.
    pub fn clear_user_data(&mut self) {
        self.current_user = None;
        self.tweets = Vec::new();
        self.posts = Vec::new();
        self.error = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Prepend the username unless already present (membership check, not
    /// move-to-front), evicting the oldest entry at capacity.
    pub fn record_search(&mut self, username: &str) {
        if username.is_empty() || self.search_history.iter().any(|u| u == username) {
            return;
        }
        self.search_history.insert(0, username.to_string());
        if self.search_history.len() > MAX_SEARCH_HISTORY {
            self.search_history.pop();
        }
    }

    pub fn clear_search_history(&mut self) {
        self.search_history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(username: &str) -> Profile {
        Profile {
            username: username.to_string(),
            name: username.to_uppercase(),
            ..Default::default()
        }
    }

    fn tweet(id: &str) -> ContentItem {
        ContentItem {
            tweet_id: id.to_string(),
            text: format!("tweet {}", id),
            posted_at: "2024-01-01T00:00:00Z".to_string(),
            ..Default::default()
        }
    }

    fn user_info(username: &str, tweet_ids: &[&str]) -> UserInfoResponse {
        UserInfoResponse {
            user: profile(username),
            tweets: tweet_ids.iter().map(|id| tweet(id)).collect(),
            posts: Vec::new(),
        }
    }

    #[test]
    fn successful_fetch_replaces_everything_and_records_history() {
        let mut slice = UserSlice::default();
        let seq = slice.begin_request();
        assert!(slice.loading);

        slice.finish_user_info(seq, Ok(user_info("alice", &["1", "2"])));

        assert!(!slice.loading);
        assert!(slice.error.is_none());
        assert_eq!(slice.current_user.as_ref().unwrap().username, "alice");
        assert_eq!(slice.tweets.len(), 2);
        assert_eq!(slice.search_history, vec!["alice"]);
    }

    #[test]
    fn failed_fetch_keeps_prior_data() {
        let mut slice = UserSlice::default();
        let seq = slice.begin_request();
        slice.finish_user_info(seq, Ok(user_info("alice", &["1"])));

        let seq = slice.begin_request();
        slice.finish_user_info(seq, Err("user not found".to_string()));

        assert!(!slice.loading);
        assert_eq!(slice.error.as_deref(), Some("user not found"));
        assert_eq!(slice.current_user.as_ref().unwrap().username, "alice");
        assert_eq!(slice.tweets.len(), 1);
    }

    #[test]
    fn tweets_fetch_leaves_profile_and_posts_untouched() {
        let mut slice = UserSlice::default();
        let seq = slice.begin_request();
        slice.finish_user_info(seq, Ok(user_info("alice", &["1"])));
        slice.set_posts(vec![tweet("p1")]);

        let seq = slice.begin_request();
        slice.finish_tweets(seq, Ok(vec![tweet("9"), tweet("10")]));

        assert_eq!(slice.tweets.len(), 2);
        assert_eq!(slice.posts.len(), 1);
        assert_eq!(slice.current_user.as_ref().unwrap().username, "alice");
    }

    #[test]
    fn stale_resolution_is_ignored() {
        let mut slice = UserSlice::default();
        let first = slice.begin_request();
        let second = slice.begin_request();

        // Later-dispatched fetch resolves first and wins.
        slice.finish_user_info(second, Ok(user_info("bob", &["2"])));
        // The earlier fetch resolves afterwards; it must not overwrite.
        slice.finish_user_info(first, Ok(user_info("alice", &["1"])));

        assert_eq!(slice.current_user.as_ref().unwrap().username, "bob");
        assert_eq!(slice.search_history, vec!["bob"]);
    }

    #[test]
    fn stale_failure_does_not_clobber_flags() {
        let mut slice = UserSlice::default();
        let first = slice.begin_request();
        let second = slice.begin_request();

        slice.finish_user_info(second, Ok(user_info("bob", &[])));
        slice.finish_user_info(first, Err("timeout".to_string()));

        assert!(slice.error.is_none());
        assert!(!slice.loading);
    }

    #[test]
    fn history_deduplicates_without_promotion() {
        let mut slice = UserSlice::default();
        slice.record_search("alice");
        slice.record_search("bob");
        slice.record_search("alice");

        assert_eq!(slice.search_history, vec!["bob", "alice"]);
    }

    #[test]
    fn history_is_bounded_and_evicts_oldest() {
        let mut slice = UserSlice::default();
        for i in 0..12 {
            slice.record_search(&format!("user{}", i));
        }

        assert_eq!(slice.search_history.len(), MAX_SEARCH_HISTORY);
        // Newest first; user0 and user1 were evicted from the back.
        assert_eq!(slice.search_history[0], "user11");
        assert!(!slice.search_history.iter().any(|u| u == "user0"));
        assert!(!slice.search_history.iter().any(|u| u == "user1"));
    }

    #[test]
    fn clear_user_data_preserves_history() {
        let mut slice = UserSlice::default();
        let seq = slice.begin_request();
        slice.finish_user_info(seq, Ok(user_info("alice", &["1"])));

        slice.clear_user_data();

        assert!(slice.current_user.is_none());
        assert!(slice.tweets.is_empty());
        assert!(slice.posts.is_empty());
        assert!(slice.error.is_none());
        assert_eq!(slice.search_history, vec!["alice"]);
    }

    #[test]
    fn direct_setters_do_not_touch_flags() {
        let mut slice = UserSlice::default();
        slice.begin_request();
        assert!(slice.loading);

        slice.set_current_user(profile("carol"));
        slice.set_tweets(vec![tweet("1")]);

        assert!(slice.loading);
        assert!(slice.error.is_none());
        assert_eq!(slice.current_user.as_ref().unwrap().username, "carol");
    }
}
