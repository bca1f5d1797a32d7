//! Sentiment Chart Component
//!
//! Horizontal bar chart of category scores (0-100).

use leptos::prelude::*;

use crate::models::AnalysisPayload;

#[component]
pub fn SentimentChart(analysis: AnalysisPayload) -> impl IntoView {
    let bars = vec![
        ("Radical", analysis.radical_score, "bar-radical"),
        ("Non-Radical", analysis.non_radical_score, "bar-non-radical"),
        ("Political", analysis.political_score, "bar-political"),
        ("Crime", analysis.crime_score, "bar-crime"),
    ];

    view! {
        <div class="card sentiment-chart">
            <h3>"Category Scores"</h3>
            {bars.into_iter().map(|(label, score, class)| {
                let width = format!("width: {}%", score.clamp(0.0, 100.0));
                view! {
                    <div class="score-row">
                        <span class="score-label">{label}</span>
                        <div class="score-track">
                            <div class=format!("score-fill {}", class) style=width></div>
                        </div>
                        <span class="score-value">{format!("{:.0}%", score)}</span>
                    </div>
                }
            }).collect_view()}
            {(!analysis.summary.is_empty()).then(|| view! {
                <p class="analysis-summary">{analysis.summary.clone()}</p>
            })}
        </div>
    }
}
