//! Social Impact Tracker Component
//!
//! Impact metrics and marginalized-group coverage from the ethical-AI
//! service.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::SocialImpactReport;

#[component]
pub fn SocialImpactTracker(username: String) -> impl IntoView {
    let (report, set_report) = signal(Option::<SocialImpactReport>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (retry, set_retry) = signal(0u32);

    let owner = username.clone();
    Effect::new(move |_| {
        let _ = retry.get();
        let username = owner.clone();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_social_impact(&username).await {
                Ok(loaded) => set_report.set(Some(loaded)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="card social-impact">
            <div class="card-header">
                <div>
                    <h2>"Social Justice Impact"</h2>
                    <p class="hint">"Community impact and protected-group coverage"</p>
                </div>
            </div>

            <Show when=move || loading.get()>
                <div class="loading-panel">
                    <p>"Loading social impact..."</p>
                    <p class="hint">"Analyzing community impact..."</p>
                </div>
            </Show>

            {move || error.get().map(|message| view! {
                <div class="error-panel">
                    <p>{message}</p>
                    <button class="retry-btn" on:click=move |_| set_retry.update(|v| *v += 1)>
                        "Retry"
                    </button>
                </div>
            })}

            {move || report.get().map(|report| {
                let groups = report.impact_metrics.marginalized_groups.clone();
                let justice = report.impact_metrics.social_justice_score.clone();
                let community = report.impact_metrics.community_impact.clone();
                view! {
                    <div class="impact-stats">
                        <div class="stat-cell">
                            <strong>{groups.total_analyzed}</strong>
                            <span>"Accounts analyzed"</span>
                        </div>
                        <div class="stat-cell">
                            <strong>{groups.protected_users}</strong>
                            <span>"Users from marginalized groups supported"</span>
                        </div>
                        <div class="stat-cell">
                            <strong>{groups.bias_detected}</strong>
                            <span>"Bias findings"</span>
                        </div>
                        <div class="stat-cell">
                            <strong>{groups.interventions_applied}</strong>
                            <span>"Interventions applied"</span>
                        </div>
                    </div>

                    <h3>"Social Justice Score"</h3>
                    <div class="fairness-grid">
                        {vec![
                            ("Overall", justice.overall),
                            ("Representation", justice.representation),
                            ("Fairness", justice.fairness),
                            ("Inclusivity", justice.inclusivity),
                        ].into_iter().map(|(label, value)| {
                            let width = format!("width: {}%", (value * 100.0).clamp(0.0, 100.0));
                            view! {
                                <div class="score-row">
                                    <span class="score-label">{label}</span>
                                    <div class="score-track">
                                        <div class="score-fill bar-fairness" style=width></div>
                                    </div>
                                    <span class="score-value">{format!("{:.2}", value)}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>

                    <h3>"Monitored Groups"</h3>
                    <table class="groups-table">
                        <thead>
                            <tr>
                                <th>"Group"</th>
                                <th>"Count"</th>
                                <th>"Bias Score"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {report.marginalized_groups.iter().map(|group| view! {
                                <tr>
                                    <td>{group.name.clone()}</td>
                                    <td>{group.count}</td>
                                    <td>{format!("{:.2}", group.bias_score)}</td>
                                    <td>{group.status.clone()}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>

                    <p class="hint">
                        {format!(
                            "{} positive interventions, {:.0}% bias reduction",
                            community.positive_interventions,
                            community.bias_reduction * 100.0
                        )}
                    </p>
                }
            })}
        </div>
    }
}
