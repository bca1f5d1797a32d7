//! Analysis Page
//!
//! Tabbed analysis dashboard: classification run configuration and
//! results, plus the ethical-AI report views.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::AnalyzeArgs;
use crate::components::{AnalysisResults, BiasDetection, CommunityOutreach, SocialImpactTracker};
use crate::content::media_count;
use crate::store::{use_app_store, AppStateStoreFields};

/// Model options (value, label)
const IMAGE_MODELS: &[(&str, &str)] = &[("clip", "CLIP"), ("vgg16", "VGG16")];
const TEXT_MODELS: &[(&str, &str)] = &[("xlnet", "XLNet"), ("bert", "BERT")];

/// Fusion techniques (value, label, blurb)
const FUSION_TECHNIQUES: &[(&str, &str, &str)] = &[
    (
        "weighted_average",
        "Weighted Average",
        "Uses a fixed weight to combine text and image predictions. Simple and interpretable.",
    ),
    (
        "attention",
        "Attention-Based Fusion",
        "Dynamically weighs modalities based on content reliability - adapts to each input.",
    ),
    (
        "feature_fusion",
        "Feature-Level Fusion",
        "Combines raw features from text and image models before classification for deeper interactions.",
    ),
    (
        "stacking",
        "Model Stacking",
        "Treats predictions from base models as features for a meta-classifier to learn complex relationships.",
    ),
    (
        "learned_weights",
        "Learned Weights",
        "Uses data-trained weights to optimally combine predictions from different modalities.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalysisTab {
    Sentiment,
    Bias,
    SocialImpact,
    Community,
}

const TABS: &[(AnalysisTab, &str)] = &[
    (AnalysisTab::Sentiment, "Sentiment Analysis"),
    (AnalysisTab::Bias, "Ethical AI Monitoring"),
    (AnalysisTab::SocialImpact, "Social Justice Impact"),
    (AnalysisTab::Community, "Community Outreach"),
];

fn toggle_model(selection: &mut Vec<String>, value: &str) {
    if let Some(pos) = selection.iter().position(|m| m == value) {
        selection.remove(pos);
    } else {
        selection.push(value.to_string());
    }
}

#[component]
fn ModelSelector(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    selection: ReadSignal<Vec<String>>,
    set_selection: WriteSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="model-selector">
            <label>{label}</label>
            <div class="type-selector-row">
                {options.iter().map(|(value, display)| {
                    let value = *value;
                    let is_selected = move || selection.get().iter().any(|m| m == value);
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if is_selected() { "type-btn small active" } else { "type-btn small" }
                            }
                            on:click=move |_| set_selection.update(|s| toggle_model(s, value))
                        >
                            {*display}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let store = use_app_store();

    let (active_tab, set_active_tab) = signal(AnalysisTab::Sentiment);
    let (image_models, set_image_models) = signal(vec![IMAGE_MODELS[0].0.to_string()]);
    let (text_models, set_text_models) = signal(vec![TEXT_MODELS[0].0.to_string()]);
    let (fusion, set_fusion) = signal(FUSION_TECHNIQUES[0].0.to_string());
    let (alpha, set_alpha) = signal(0.5f64);

    let current_user = move || store.user().read().current_user.clone();
    let tweet_count = move || store.user().read().tweets.len();
    let with_media = move || media_count(&store.user().read().tweets);

    let loading = move || store.analysis().read().loading;
    let refreshing = move || store.analysis().read().refreshing;
    let current_analysis = move || store.analysis().read().current_analysis.clone();
    let error = move || {
        let analysis = store.analysis().read();
        analysis.error.clone().or_else(|| analysis.refresh_error.clone())
    };

    // Leaving the analysis view drops the current result, matching the
    // fetch-fresh-on-return behavior of the dashboard.
    on_cleanup(move || {
        store.analysis().write().clear_analysis();
    });

    let on_analyze = move |_| {
        let Some(user) = current_user() else { return };
        let args = AnalyzeArgs {
            image_model: image_models.get(),
            text_model: text_models.get(),
            fusion_technique: fusion.get(),
            alpha: alpha.get(),
        };
        spawn_local(actions::analyze_user_profile(store, user.username, args));
    };

    let on_refresh = move |_| {
        let Some(user) = current_user() else { return };
        spawn_local(actions::refresh_user_data(store, user.username));
    };

    let on_dismiss_error = move |_| {
        store.analysis().write().clear_error();
    };

    view! {
        {move || match current_user() {
            None => view! {
                <div class="card empty-state">
                    <h2>"No Analysis Available"</h2>
                    <p>"Please fetch a user profile first to view results."</p>
                </div>
            }.into_any(),
            Some(user) => {
                let username = user.username.clone();
                view! {
                    <div class="analysis-page">
                        <div class="page-intro">
                            <h1>"PostPatrol Analysis Dashboard"</h1>
                            <p class="hint">
                                "Sentiment analysis with ethical AI monitoring and social impact tracking."
                            </p>
                        </div>

                        <div class="analysis-tabs">
                            {TABS.iter().map(|(tab, label)| {
                                let tab = *tab;
                                let tab_class = move || {
                                    if active_tab.get() == tab { "analysis-tab active" } else { "analysis-tab" }
                                };
                                view! {
                                    <button class=tab_class on:click=move |_| set_active_tab.set(tab)>
                                        {*label}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        {move || match active_tab.get() {
                            AnalysisTab::Sentiment => {
                                let username = username.clone();
                                view! {
                                    <div class="sentiment-tab">
                                        <div class="card">
                                            <div class="card-header">
                                                <h2>{format!("Analysis for @{}", username)}</h2>
                                                <button
                                                    class="secondary-btn"
                                                    prop:disabled=refreshing
                                                    on:click=on_refresh
                                                >
                                                    {move || if refreshing() { "Refreshing..." } else { "Refresh Data" }}
                                                </button>
                                            </div>
                                            <div class="impact-stats">
                                                <div class="stat-cell">
                                                    <strong>{move || tweet_count()}</strong>
                                                    <span>"Total Tweets"</span>
                                                </div>
                                                <div class="stat-cell">
                                                    <strong>{move || with_media()}</strong>
                                                    <span>"With Media"</span>
                                                </div>
                                                <div class="stat-cell">
                                                    <strong>
                                                        {move || if current_analysis().is_some() { "Analyzed" } else { "Ready to Analyze" }}
                                                    </strong>
                                                    <span>"Status"</span>
                                                </div>
                                            </div>
                                            <Show when=move || tweet_count() == 0>
                                                <div class="warning-panel">
                                                    <p>"No tweets available for analysis. Please fetch user data first."</p>
                                                </div>
                                            </Show>
                                        </div>

                                        <div class="card">
                                            <h2>"Analysis Configuration"</h2>
                                            <div class="model-grid">
                                                <ModelSelector
                                                    label="Text Models"
                                                    options=TEXT_MODELS
                                                    selection=text_models
                                                    set_selection=set_text_models
                                                />
                                                <ModelSelector
                                                    label="Image Models"
                                                    options=IMAGE_MODELS
                                                    selection=image_models
                                                    set_selection=set_image_models
                                                />
                                            </div>

                                            <label>"Fusion Technique"</label>
                                            <div class="fusion-grid">
                                                {FUSION_TECHNIQUES.iter().map(|(value, label, _)| {
                                                    let value = *value;
                                                    let cell_class = move || {
                                                        if fusion.get() == value { "fusion-cell active" } else { "fusion-cell" }
                                                    };
                                                    view! {
                                                        <button
                                                            type="button"
                                                            class=cell_class
                                                            on:click=move |_| set_fusion.set(value.to_string())
                                                        >
                                                            {*label}
                                                        </button>
                                                    }
                                                }).collect_view()}
                                            </div>
                                            <p class="hint">
                                                {move || {
                                                    let current = fusion.get();
                                                    FUSION_TECHNIQUES.iter()
                                                        .find(|(value, _, _)| *value == current)
                                                        .map(|(_, _, blurb)| *blurb)
                                                        .unwrap_or_default()
                                                }}
                                            </p>

                                            <Show when=move || fusion.get() == "weighted_average">
                                                <div class="alpha-slider">
                                                    <label>
                                                        {move || format!("Text-Image Weight (Alpha): {:.2}", alpha.get())}
                                                    </label>
                                                    <input
                                                        type="range"
                                                        min="0"
                                                        max="1"
                                                        step="0.05"
                                                        prop:value=move || alpha.get().to_string()
                                                        on:input=move |ev| {
                                                            if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                                                                set_alpha.set(v);
                                                            }
                                                        }
                                                    />
                                                    <p class="hint">
                                                        "Higher values give more weight to text analysis."
                                                    </p>
                                                </div>
                                            </Show>

                                            <button
                                                class="primary-btn"
                                                prop:disabled=move || {
                                                    loading()
                                                        || text_models.get().is_empty()
                                                        || image_models.get().is_empty()
                                                }
                                                on:click=on_analyze
                                            >
                                                {move || if loading() { "Analyzing..." } else { "Analyze Profile" }}
                                            </button>
                                        </div>

                                        {move || error().map(|message| view! {
                                            <div class="error-panel">
                                                <p>{message}</p>
                                                <button class="retry-btn" on:click=on_dismiss_error>
                                                    "Dismiss"
                                                </button>
                                            </div>
                                        })}

                                        <Show when=loading>
                                            <div class="card loading-panel">
                                                <p>"Analyzing Profile..."</p>
                                                <p class="hint">
                                                    {move || format!("Processing {} tweets and media content", tweet_count())}
                                                </p>
                                            </div>
                                        </Show>

                                        {move || current_analysis()
                                            .filter(|a| a.success)
                                            .map(|a| view! {
                                                <AnalysisResults analysis=a.analysis.clone() />
                                            })}
                                    </div>
                                }.into_any()
                            }
                            AnalysisTab::Bias => view! {
                                <BiasDetection username=username.clone() />
                            }.into_any(),
                            AnalysisTab::SocialImpact => view! {
                                <SocialImpactTracker username=username.clone() />
                            }.into_any(),
                            AnalysisTab::Community => view! {
                                <CommunityOutreach />
                            }.into_any(),
                        }}
                    </div>
                }.into_any()
            }
        }}
    }
}
