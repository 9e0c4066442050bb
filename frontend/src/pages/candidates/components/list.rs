use crate::api::{Candidate, CandidateStatus};
use crate::components::{empty_state::EmptyState, layout::LoadingSpinner};
use crate::pages::candidates::utils::{display_url, status_badge_class};
use crate::utils::time::{app_time_zone, format_date};
use leptos::*;

#[component]
pub fn CandidateList(
    candidates: Signal<Vec<Candidate>>,
    loading: Signal<bool>,
    updating: Signal<Option<String>>,
    on_status_change: Callback<(Candidate, CandidateStatus)>,
) -> impl IntoView {
    let tz = app_time_zone();
    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
            <Show
                when=move || candidates.with(|list| !list.is_empty())
                fallback=|| view! { <EmptyState title="No candidates" icon="fas fa-user-tie" /> }
            >
                <div class="overflow-x-auto rounded-lg border border-border">
                    <table class="min-w-full">
                        <thead class="bg-surface-muted text-left text-xs uppercase text-fg-muted">
                            <tr>
                                <th class="px-4 py-2">"CV"</th>
                                <th class="px-4 py-2">"Submitted by"</th>
                                <th class="px-4 py-2">"Date"</th>
                                <th class="px-4 py-2">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || candidates
                                .get()
                                .into_iter()
                                .map(|candidate| {
                                    let id = candidate.id.clone();
                                    let busy = move || updating.with(|u| u.as_deref() == Some(id.as_str()));
                                    let submitted_by = candidate
                                        .staff_id
                                        .as_ref()
                                        .map(|s| s.display_name())
                                        .unwrap_or_else(|| "-".into());
                                    let date = candidate
                                        .created_at
                                        .map(|t| format_date(t, tz))
                                        .unwrap_or_default();
                                    let current = candidate.status;
                                    let link = candidate.cv_url.clone();
                                    let text = display_url(&candidate.cv_url);
                                    view! {
                                        <tr class="border-b border-border">
                                            <td class="px-4 py-3 text-sm">
                                                <a href=link target="_blank" rel="noopener noreferrer" class="text-action-primary-bg hover:underline">
                                                    {text}
                                                </a>
                                            </td>
                                            <td class="px-4 py-3 text-sm text-fg">{submitted_by}</td>
                                            <td class="px-4 py-3 text-sm font-mono text-fg">{date}</td>
                                            <td class="px-4 py-3">
                                                <select
                                                    aria-label="Candidate status"
                                                    class=format!("rounded-md px-2 py-1 text-xs font-semibold {}", status_badge_class(current))
                                                    disabled=busy
                                                    on:change=move |ev| {
                                                        if let Some(status) = CandidateStatus::parse(&event_target_value(&ev)) {
                                                            on_status_change.call((candidate.clone(), status));
                                                        }
                                                    }
                                                >
                                                    {CandidateStatus::ALL
                                                        .into_iter()
                                                        .map(|status| view! {
                                                            <option value=status.as_str() selected=status == current>
                                                                {status.label()}
                                                            </option>
                                                        })
                                                        .collect_view()}
                                                </select>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </Show>
    }
}
