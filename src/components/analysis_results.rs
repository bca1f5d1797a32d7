//! Analysis Results Component
//!
//! Classification summary, percentage breakdown, and category scores for
//! the current analysis.

use leptos::prelude::*;

use crate::components::SentimentChart;
use crate::models::AnalysisPayload;

#[component]
pub fn AnalysisResults(analysis: AnalysisPayload) -> impl IntoView {
    let summary = analysis.classification_summary.clone();
    let stats = analysis.content_stats.clone();
    let percentages = analysis.percentages.clone();

    view! {
        <div class="analysis-results">
            {summary.map(|s| view! {
                <div class="card classification-summary">
                    <div>
                        <h2>{s.dominant_category.clone()}</h2>
                        <p class="hint">
                            {format!("Confidence: {:.0}%", s.confidence_score)}
                        </p>
                    </div>
                    {stats.map(|st| view! {
                        <div class="content-stats">
                            <span>{format!("{} Tweets", st.total_tweets)}</span>
                            <span>{format!("{} Images", st.total_images)}</span>
                            <span>{format!("{} Items Analyzed", st.total_content_analyzed)}</span>
                        </div>
                    })}
                </div>
            })}

            {percentages.map(|p| {
                let categories = vec![
                    ("Radical", p.radical, "bar-radical"),
                    ("Non-Radical", p.non_radical, "bar-non-radical"),
                    ("Politician", p.political, "bar-political"),
                ];
                view! {
                    <div class="card classification-breakdown">
                        <h3>"Classification Results"</h3>
                        <div class="breakdown-grid">
                            {categories.into_iter().map(|(label, pct, class)| {
                                let width = format!("width: {}%", pct.clamp(0.0, 100.0));
                                view! {
                                    <div class="breakdown-cell">
                                        <h4>{label}</h4>
                                        <span class="breakdown-value">{format!("{:.0}%", pct)}</span>
                                        <div class="score-track">
                                            <div class=format!("score-fill {}", class) style=width></div>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }
            })}

            <SentimentChart analysis=analysis />
        </div>
    }
}
