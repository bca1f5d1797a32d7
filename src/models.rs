//! Frontend Models
//!
//! Data structures matching backend JSON entities.

use serde::{Deserialize, Deserializer, Serialize};

/// Scraped account profile (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub banner_image_url: Option<String>,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub joined_date: Option<String>,
}

/// A single scraped tweet or media post.
///
/// Hashtags arrive from the backend either as a native JSON array or as a
/// legacy JSON-encoded string; both are normalized to a plain list at
/// deserialization so nothing downstream branches on shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentItem {
    pub tweet_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default, deserialize_with = "deserialize_hashtags")]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub posted_at: String,
}

fn deserialize_hashtags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(normalize_hashtags(&value))
}

/// Canonicalize the polymorphic hashtag field.
///
/// A native array passes through (non-string elements are dropped), a
/// string that looks like a JSON array is parsed defensively, and any
/// other shape yields an empty list rather than failing the render.
pub fn normalize_hashtags(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(|s| s.to_string()))
            .collect(),
        serde_json::Value::String(s) if s.trim_start().starts_with('[') => {
            serde_json::from_str(s).unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Response of POST /user/get-info
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfoResponse {
    pub user: Profile,
    #[serde(default)]
    pub tweets: Vec<ContentItem>,
    #[serde(default)]
    pub posts: Vec<ContentItem>,
}

/// Response of POST /user/get-tweets
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TweetsResponse {
    #[serde(default)]
    pub tweets: Vec<ContentItem>,
}

/// Response of POST /user/get-posts
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<ContentItem>,
}

/// Response of GET /profile/{username} — profile fields at the top level
/// plus the account's stored content in one call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileDetailResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub tweets: Vec<ContentItem>,
    #[serde(default)]
    pub posts: Vec<ContentItem>,
}

/// Pagination block of GET /profiles
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            total: 0,
            pages: 0,
            has_next: false,
            has_prev: false,
        }
    }
}

/// Response of GET /profiles
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfilesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub users: Vec<Profile>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Query parameters of GET /profiles
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for ProfileQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            search: String::new(),
            sort_by: "created_at".to_string(),
            sort_order: "desc".to_string(),
        }
    }
}

/// Response of POST /user/{username}/analyze
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub username: String,
    pub analysis: AnalysisPayload,
}

/// Classification payload attached to a username. The nested blocks are
/// optional because their presence varies by backend endpoint version.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default)]
    pub radical_score: f64,
    #[serde(default)]
    pub non_radical_score: f64,
    #[serde(default)]
    pub political_score: f64,
    #[serde(default)]
    pub crime_score: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub classification_summary: Option<ClassificationSummary>,
    #[serde(default)]
    pub content_stats: Option<ContentStats>,
    #[serde(default)]
    pub percentages: Option<Percentages>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ClassificationSummary {
    #[serde(default)]
    pub dominant_category: String,
    #[serde(default)]
    pub confidence_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ContentStats {
    #[serde(default)]
    pub total_tweets: u64,
    #[serde(default)]
    pub total_images: u64,
    #[serde(default)]
    pub total_content_analyzed: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Percentages {
    #[serde(default)]
    pub radical: f64,
    #[serde(default)]
    pub non_radical: f64,
    #[serde(default)]
    pub political: f64,
}

/// Response of GET /bias-detection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BiasReport {
    pub bias_metrics: BiasMetrics,
    pub fairness_metrics: FairnessMetrics,
    #[serde(default)]
    pub analysis_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BiasMetrics {
    #[serde(default)]
    pub gender_bias: BiasMetric,
    #[serde(default)]
    pub racial_bias: BiasMetric,
    #[serde(default)]
    pub age_bias: BiasMetric,
    #[serde(default)]
    pub socioeconomic_bias: BiasMetric,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BiasMetric {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FairnessMetrics {
    #[serde(default)]
    pub equalized_odds: f64,
    #[serde(default)]
    pub demographic_parity: f64,
    #[serde(default)]
    pub predictive_rate_parity: f64,
    #[serde(default)]
    pub overall_fairness: f64,
}

/// Response of GET /social-impact
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialImpactReport {
    pub impact_metrics: ImpactMetrics,
    #[serde(default)]
    pub marginalized_groups: Vec<MarginalizedGroup>,
    #[serde(default)]
    pub analysis_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ImpactMetrics {
    #[serde(default)]
    pub marginalized_groups: GroupStats,
    #[serde(default)]
    pub social_justice_score: JusticeScore,
    #[serde(default)]
    pub community_impact: CommunityImpact,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct GroupStats {
    #[serde(default)]
    pub total_analyzed: u64,
    #[serde(default)]
    pub protected_users: u64,
    #[serde(default)]
    pub bias_detected: u64,
    #[serde(default)]
    pub interventions_applied: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct JusticeScore {
    #[serde(default)]
    pub overall: f64,
    #[serde(default)]
    pub representation: f64,
    #[serde(default)]
    pub fairness: f64,
    #[serde(default)]
    pub inclusivity: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CommunityImpact {
    #[serde(default)]
    pub positive_interventions: u64,
    #[serde(default)]
    pub bias_reduction: f64,
    #[serde(default)]
    pub protected_groups_supported: u64,
    #[serde(default)]
    pub social_justice_initiatives: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MarginalizedGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub bias_score: f64,
    #[serde(default)]
    pub status: String,
}

/// Response of GET /community-outreach
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutreachReport {
    #[serde(default)]
    pub educational_programs: Vec<OutreachProgram>,
    #[serde(default)]
    pub community_initiatives: Vec<OutreachProgram>,
    #[serde(default)]
    pub impact_metrics: Option<OutreachMetrics>,
    #[serde(default)]
    pub additional_resources: Vec<OutreachResource>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OutreachProgram {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OutreachMetrics {
    #[serde(default)]
    pub people_reached: u64,
    #[serde(default)]
    pub programs_active: u64,
    #[serde(default)]
    pub partner_organizations: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct OutreachResource {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hashtags_native_list_passes_through() {
        let value = json!(["rust", "wasm"]);
        assert_eq!(normalize_hashtags(&value), vec!["rust", "wasm"]);
    }

    #[test]
    fn hashtags_json_encoded_string_parses() {
        let value = json!("[\"a\",\"b\"]");
        assert_eq!(normalize_hashtags(&value), vec!["a", "b"]);
    }

    #[test]
    fn hashtags_plain_string_yields_empty() {
        let value = json!("nohashtags");
        assert!(normalize_hashtags(&value).is_empty());
    }

    #[test]
    fn hashtags_malformed_array_string_yields_empty() {
        let value = json!("[not json");
        assert!(normalize_hashtags(&value).is_empty());
    }

    #[test]
    fn content_item_tolerates_both_hashtag_shapes() {
        let as_list: ContentItem = serde_json::from_value(json!({
            "tweet_id": "1",
            "text": "hello",
            "hashtags": ["a", "b"],
            "posted_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(as_list.hashtags, vec!["a", "b"]);

        let as_string: ContentItem = serde_json::from_value(json!({
            "tweet_id": "2",
            "text": "hello",
            "hashtags": "[\"a\",\"b\"]",
            "posted_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(as_string.hashtags, vec!["a", "b"]);
    }

    #[test]
    fn content_item_missing_hashtags_defaults_empty() {
        let item: ContentItem = serde_json::from_value(json!({
            "tweet_id": "3",
            "text": "bare"
        }))
        .unwrap();
        assert!(item.hashtags.is_empty());
        assert!(item.media_urls.is_empty());
    }

    #[test]
    fn analysis_response_reads_scores() {
        let resp: AnalysisResponse = serde_json::from_value(json!({
            "success": true,
            "username": "alice",
            "analysis": {
                "radical_score": 30,
                "political_score": 60,
                "crime_score": 5,
                "summary": "mostly political content"
            }
        }))
        .unwrap();
        assert!(resp.success);
        assert_eq!(resp.analysis.radical_score, 30.0);
        assert_eq!(resp.analysis.political_score, 60.0);
        assert!(resp.analysis.classification_summary.is_none());
    }
}
