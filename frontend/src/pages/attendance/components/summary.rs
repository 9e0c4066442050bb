use crate::api::AttendanceRecord;
use crate::components::common::{Button, ButtonVariant};
use crate::pages::attendance::utils::{worked_hours, MonthlySummary};
use crate::state::attendance::{AttendanceAction, AttendanceStatus};
use crate::utils::time::{app_time_zone, format_time};
use leptos::*;

fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::NotCheckedIn => "bg-status-attendance-not_started",
        AttendanceStatus::CheckedIn => "bg-status-attendance-clock_in animate-pulse",
        AttendanceStatus::CheckedOut => "bg-status-attendance-clock_out",
    }
}

#[component]
pub fn TodayCard(
    record: Signal<Option<AttendanceRecord>>,
    status: Signal<AttendanceStatus>,
    available: Signal<Option<AttendanceAction>>,
    busy: Signal<bool>,
    on_action: Callback<AttendanceAction>,
) -> impl IntoView {
    let tz = app_time_zone();
    let time_of = move |pick: fn(&AttendanceRecord) -> Option<chrono::DateTime<chrono::Utc>>| {
        record.with(|r| format_time(r.as_ref().and_then(pick), tz))
    };
    let flags = move || {
        record.with(|r| {
            let Some(r) = r.as_ref() else {
                return Vec::new();
            };
            let mut flags = Vec::new();
            if r.is_late.unwrap_or(false) {
                flags.push(format!("Late {} min", r.late_minutes.unwrap_or(0)));
            }
            if r.is_early_leave.unwrap_or(false) {
                flags.push(format!("Left early {} min", r.early_leave_minutes.unwrap_or(0)));
            }
            flags
        })
    };
    let hours = move || {
        record.with(|r| {
            r.as_ref()
                .filter(|r| r.check_out.is_some())
                .map(|r| format!("{:.2} h", worked_hours(r)))
                .unwrap_or_else(|| "-".into())
        })
    };

    view! {
        <section class="rounded-2xl border border-border bg-surface-elevated p-6 shadow-sm space-y-4">
            <div class="flex items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <span class=move || format!("inline-block h-3 w-3 rounded-full {}", status_badge_class(status.get()))></span>
                    <div>
                        <p class="text-xs font-bold uppercase tracking-wider text-fg-muted">"Today"</p>
                        <p class="text-lg font-semibold text-fg">{move || status.get().label()}</p>
                    </div>
                </div>
                <div class="flex gap-2">
                    {[AttendanceAction::CheckIn, AttendanceAction::CheckOut]
                        .into_iter()
                        .map(|action| {
                            let enabled = move || available.get() == Some(action) && !busy.get();
                            let variant = if action == AttendanceAction::CheckIn {
                                ButtonVariant::Primary
                            } else {
                                ButtonVariant::Secondary
                            };
                            view! {
                                <Button
                                    variant=variant
                                    disabled=Signal::derive(move || !enabled())
                                    loading=Signal::derive(move || busy.get() && available.get() == Some(action))
                                    on_click=Callback::new(move |_| on_action.call(action))
                                >
                                    {action.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <dl class="grid grid-cols-3 gap-4 text-sm">
                <div>
                    <dt class="text-fg-muted">"Check in"</dt>
                    <dd class="font-mono text-fg">{move || time_of(|r| r.check_in)}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"Check out"</dt>
                    <dd class="font-mono text-fg">{move || time_of(|r| r.check_out)}</dd>
                </div>
                <div>
                    <dt class="text-fg-muted">"Worked"</dt>
                    <dd class="font-mono text-fg">{hours}</dd>
                </div>
            </dl>
            <div class="flex flex-wrap gap-2">
                {move || flags()
                    .into_iter()
                    .map(|flag| view! { <span class="rounded-full bg-status-warning-bg px-2 py-0.5 text-xs text-status-warning-text">{flag}</span> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn MonthlySummaryCard(summary: Signal<MonthlySummary>) -> impl IntoView {
    let stat = |label: &'static str, value: Signal<String>| {
        view! {
            <div class="rounded-xl bg-surface-muted p-4">
                <p class="text-xs text-fg-muted">{label}</p>
                <p class="text-xl font-semibold text-fg">{move || value.get()}</p>
            </div>
        }
    };
    view! {
        <section class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            {stat("Days present", Signal::derive(move || summary.get().days_present.to_string()))}
            {stat("Late days", Signal::derive(move || summary.get().late_days.to_string()))}
            {stat("Early leaves", Signal::derive(move || summary.get().early_leaves.to_string()))}
            {stat("Hours worked", Signal::derive(move || format!("{:.1}", summary.get().total_hours)))}
        </section>
    }
}
