//! Bias Detection Component
//!
//! Bias and fairness metrics from the ethical-AI service, fetched per
//! view. A failed fetch renders an error panel with a manual retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{BiasMetric, BiasReport};

#[component]
pub fn BiasDetection(username: String) -> impl IntoView {
    let (report, set_report) = signal(Option::<BiasReport>::None);
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
            match api::get_bias_report(&username).await {
                Ok(loaded) => set_report.set(Some(loaded)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="card bias-detection">
            <div class="card-header">
                <div>
                    <h2>"Ethical AI Monitoring"</h2>
                    <p class="hint">"Bias detection and fairness metrics"</p>
                </div>
            </div>

            <Show when=move || loading.get()>
                <div class="loading-panel">
                    <p>"Loading bias detection..."</p>
                    <p class="hint">"Analyzing fairness metrics..."</p>
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
                let metrics: Vec<(&str, BiasMetric)> = vec![
                    ("Gender Bias", report.bias_metrics.gender_bias.clone()),
                    ("Racial Bias", report.bias_metrics.racial_bias.clone()),
                    ("Age Bias", report.bias_metrics.age_bias.clone()),
                    ("Socioeconomic Bias", report.bias_metrics.socioeconomic_bias.clone()),
                ];
                let fairness = vec![
                    ("Equalized Odds", report.fairness_metrics.equalized_odds),
                    ("Demographic Parity", report.fairness_metrics.demographic_parity),
                    ("Predictive Rate Parity", report.fairness_metrics.predictive_rate_parity),
                    ("Overall Fairness", report.fairness_metrics.overall_fairness),
                ];
                view! {
                    <div class="bias-grid">
                        {metrics.into_iter().map(|(label, metric)| {
                            let status_class = format!("bias-status status-{}", metric.status);
                            view! {
                                <div class="bias-cell">
                                    <h4>{label}</h4>
                                    <span class=status_class>{metric.status.clone()}</span>
                                    <span class="bias-score">{format!("{:.2}", metric.score)}</span>
                                    <p class="hint">{metric.description.clone()}</p>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                    <h3>"Fairness Metrics"</h3>
                    <div class="fairness-grid">
                        {fairness.into_iter().map(|(label, value)| {
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
                }
            })}
        </div>
    }
}
