//! UI Components
//!
//! Leptos view components, pages included.

mod analysis_page;
mod analysis_results;
mod bias_detection;
mod community_outreach;
mod delete_confirm_button;
mod header;
mod home_page;
mod profile_card;
mod profile_page;
mod sentiment_chart;
mod social_impact;
mod toast;
mod tweet_list;
mod user_search;
mod users_page;

pub use analysis_page::AnalysisPage;
pub use analysis_results::AnalysisResults;
pub use bias_detection::BiasDetection;
pub use community_outreach::CommunityOutreach;
pub use delete_confirm_button::DeleteConfirmButton;
pub use header::Header;
pub use home_page::HomePage;
pub use profile_card::ProfileCard;
pub use profile_page::ProfilePage;
pub use sentiment_chart::SentimentChart;
pub use social_impact::SocialImpactTracker;
pub use toast::ToastHost;
pub use tweet_list::TweetList;
pub use user_search::UserSearch;
pub use users_page::UsersPage;
