//! Analysis Slice
//!
//! Classification results and the refresh operation. Analyze and refresh
//! carry separate flags so a refresh failure never clobbers a previously
//! successful analysis.

use crate::models::AnalysisResponse;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisSlice {
    pub current_analysis: Option<AnalysisResponse>,
    pub loading: bool,
    pub error: Option<String>,
    /// Insertion-ordered, keyed by username (replace if present).
    pub history: Vec<AnalysisResponse>,
    pub refreshing: bool,
    pub refresh_error: Option<String>,
    analyze_seq: u64,
    refresh_seq: u64,
}

impl AnalysisSlice {
    pub fn begin_analyze(&mut self) -> u64 {
        self.analyze_seq += 1;
        self.loading = true;
        self.error = None;
        self.analyze_seq
    }

    /// Commit an analyze resolution. Success stores the result as current
    /// and upserts it into history; failure stores the error and keeps the
    /// last good result in place.
    pub fn finish_analyze(&mut self, seq: u64, result: Result<AnalysisResponse, String>) {
        if seq != self.analyze_seq {
            return;
        }
        self.loading = false;
        match result {
            Ok(payload) => {
                self.upsert_history(payload.clone());
                self.current_analysis = Some(payload);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn begin_refresh(&mut self) -> u64 {
        self.refresh_seq += 1;
        self.refreshing = true;
        self.refresh_error = None;
        self.refresh_seq
    }

    /// Refresh only affects its own flags; a follow-up user fetch is not
    /// chained automatically.
    pub fn finish_refresh(&mut self, seq: u64, result: Result<(), String>) {
        if seq != self.refresh_seq {
            return;
        }
        self.refreshing = false;
        if let Err(message) = result {
            self.refresh_error = Some(message);
        }
    }

    pub fn clear_analysis(&mut self) {
        self.current_analysis = None;
        self.error = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.refresh_error = None;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn remove_from_history(&mut self, username: &str) {
        self.history.retain(|entry| entry.username != username);
    }

    fn upsert_history(&mut self, payload: AnalysisResponse) {
        match self
            .history
            .iter_mut()
            .find(|entry| entry.username == payload.username)
        {
            Some(entry) => *entry = payload,
            None => self.history.push(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisPayload;

    fn analysis(username: &str, radical: f64) -> AnalysisResponse {
        AnalysisResponse {
            success: true,
            username: username.to_string(),
            analysis: AnalysisPayload {
                radical_score: radical,
                political_score: 60.0,
                crime_score: 5.0,
                summary: "summary".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn successful_analyze_stores_current_and_history() {
        let mut slice = AnalysisSlice::default();
        let seq = slice.begin_analyze();
        assert!(slice.loading);

        slice.finish_analyze(seq, Ok(analysis("alice", 30.0)));

        assert!(!slice.loading);
        assert!(slice.error.is_none());
        let current = slice.current_analysis.as_ref().unwrap();
        assert_eq!(current.analysis.radical_score, 30.0);
        assert_eq!(slice.history.len(), 1);
    }

    #[test]
    fn history_upserts_by_username() {
        let mut slice = AnalysisSlice::default();
        let seq = slice.begin_analyze();
        slice.finish_analyze(seq, Ok(analysis("alice", 30.0)));
        let seq = slice.begin_analyze();
        slice.finish_analyze(seq, Ok(analysis("bob", 10.0)));
        let seq = slice.begin_analyze();
        slice.finish_analyze(seq, Ok(analysis("alice", 45.0)));

        assert_eq!(slice.history.len(), 2);
        assert_eq!(slice.history[0].username, "alice");
        assert_eq!(slice.history[0].analysis.radical_score, 45.0);
        assert_eq!(slice.history[1].username, "bob");
    }

    #[test]
    fn failed_analyze_keeps_last_good_result() {
        let mut slice = AnalysisSlice::default();
        let seq = slice.begin_analyze();
        slice.finish_analyze(seq, Ok(analysis("alice", 30.0)));

        let seq = slice.begin_analyze();
        slice.finish_analyze(seq, Err("model unavailable".to_string()));

        assert_eq!(slice.error.as_deref(), Some("model unavailable"));
        let current = slice.current_analysis.as_ref().unwrap();
        assert_eq!(current.username, "alice");
        assert_eq!(current.analysis.radical_score, 30.0);
    }

    #[test]
    fn refresh_failure_does_not_touch_analysis_state() {
        let mut slice = AnalysisSlice::default();
        let seq = slice.begin_analyze();
        slice.finish_analyze(seq, Ok(analysis("alice", 30.0)));

        let seq = slice.begin_refresh();
        assert!(slice.refreshing);
        slice.finish_refresh(seq, Err("scraper busy".to_string()));

        assert!(!slice.refreshing);
        assert_eq!(slice.refresh_error.as_deref(), Some("scraper busy"));
        assert!(slice.error.is_none());
        assert!(slice.current_analysis.is_some());
    }

    #[test]
    fn stale_analyze_resolution_is_ignored() {
        let mut slice = AnalysisSlice::default();
        let first = slice.begin_analyze();
        let second = slice.begin_analyze();

        slice.finish_analyze(second, Ok(analysis("bob", 10.0)));
        slice.finish_analyze(first, Ok(analysis("alice", 30.0)));

        assert_eq!(slice.current_analysis.as_ref().unwrap().username, "bob");
        assert_eq!(slice.history.len(), 1);
    }

    #[test]
    fn clear_operations() {
        let mut slice = AnalysisSlice::default();
        let seq = slice.begin_analyze();
        slice.finish_analyze(seq, Ok(analysis("alice", 30.0)));
        let seq = slice.begin_analyze();
        slice.finish_analyze(seq, Err("boom".to_string()));

        slice.clear_analysis();
        assert!(slice.current_analysis.is_none());
        assert!(slice.error.is_none());
        assert_eq!(slice.history.len(), 1);

        slice.remove_from_history("alice");
        assert!(slice.history.is_empty());
    }
}
