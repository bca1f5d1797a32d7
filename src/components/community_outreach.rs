//! Community Outreach Component
//!
//! Educational programs, initiatives, and resources from the analytics
//! service.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::{OutreachProgram, OutreachReport};

#[component]
fn ProgramList(title: &'static str, programs: Vec<OutreachProgram>) -> impl IntoView {
    view! {
        <h3>{title}</h3>
        <div class="program-list">
            {programs.into_iter().map(|program| view! {
                <div class="program-cell">
                    <h4>{program.title.clone()}</h4>
                    <p>{program.description.clone()}</p>
                    {program.status.clone().map(|status| view! {
                        <span class="program-status">{status}</span>
                    })}
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn CommunityOutreach() -> impl IntoView {
    let (report, set_report) = signal(Option::<OutreachReport>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (retry, set_retry) = signal(0u32);

    Effect::new(move |_| {
        let _ = retry.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_community_outreach().await {
                Ok(loaded) => set_report.set(Some(loaded)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="card community-outreach">
            <div class="card-header">
                <div>
                    <h2>"Community Outreach"</h2>
                    <p class="hint">"Programs and resources for responsible AI practices"</p>
                </div>
            </div>

            <Show when=move || loading.get()>
                <div class="loading-panel">
                    <p>"Loading outreach programs..."</p>
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

            {move || report.get().map(|report| view! {
                {report.impact_metrics.clone().map(|metrics| view! {
                    <div class="impact-stats">
                        <div class="stat-cell">
                            <strong>{metrics.people_reached}</strong>
                            <span>"People reached"</span>
                        </div>
                        <div class="stat-cell">
                            <strong>{metrics.programs_active}</strong>
                            <span>"Active programs"</span>
                        </div>
                        <div class="stat-cell">
                            <strong>{metrics.partner_organizations}</strong>
                            <span>"Partner organizations"</span>
                        </div>
                    </div>
                })}

                <ProgramList title="Educational Programs" programs=report.educational_programs.clone() />
                <ProgramList title="Community Initiatives" programs=report.community_initiatives.clone() />

                {(!report.additional_resources.is_empty()).then(|| view! {
                    <h3>"Additional Resources"</h3>
                    <ul class="resource-list">
                        {report.additional_resources.iter().map(|resource| view! {
                            <li>
                                <a href=resource.url.clone() target="_blank" rel="noopener noreferrer">
                                    {resource.title.clone()}
                                </a>
                            </li>
                        }).collect_view()}
                    </ul>
                })}
            })}
        </div>
    }
}
