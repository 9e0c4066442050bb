use crate::api::AttendanceRecord;
use crate::components::layout::LoadingSpinner;
use crate::pages::attendance::utils::{month_grid, month_label, CalendarCell, PunctualityTag};
use crate::utils::time::app_time_zone;
use chrono::{Datelike, NaiveDate};
use leptos::*;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn tag_class(tag: PunctualityTag) -> &'static str {
    match tag {
        PunctualityTag::Late => "bg-status-warning-bg text-status-warning-text",
        PunctualityTag::OnTime => "bg-status-success-bg text-status-success-text",
    }
}

fn day_cell(cell: CalendarCell) -> impl IntoView {
    let tz = app_time_zone();
    let class = if cell.in_month {
        "min-h-[5rem] rounded-md border border-border p-2 bg-surface-elevated"
    } else {
        "min-h-[5rem] rounded-md border border-border p-2 bg-surface-muted opacity-50"
    };
    let day = cell.in_month.then(|| cell.date.day());
    let times = cell.times(tz);
    let tag = cell.tag();
    view! {
        <div class=class>
            <p class="text-xs font-semibold text-fg-muted">{day}</p>
            {times.map(|(check_in, check_out)| view! {
                <p class="mt-1 font-mono text-xs text-fg">{check_in}" - "{check_out}</p>
            })}
            {tag.map(|tag| view! {
                <span class=format!("mt-1 inline-block rounded px-1.5 text-[10px] font-semibold {}", tag_class(tag))>
                    {tag.label()}
                </span>
            })}
        </div>
    }
}

#[component]
pub fn MonthCalendar(
    month: Signal<NaiveDate>,
    records: Signal<Vec<AttendanceRecord>>,
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let weeks = create_memo(move |_| {
        let tz = app_time_zone();
        records.with(|records| month_grid(month.get(), records, tz))
    });

    view! {
        <section class="rounded-2xl border border-border bg-surface-elevated p-6 shadow-sm space-y-4">
            <div class="flex items-center justify-between">
                <button type="button" class="px-3 py-1 rounded-md text-fg-muted hover:bg-action-ghost-bg-hover" on:click=move |_| on_previous.call(())>
                    <i class="fas fa-chevron-left"></i>
                    <span class="sr-only">"Previous month"</span>
                </button>
                <h2 class="text-lg font-semibold text-fg">{move || month_label(month.get())}</h2>
                <button type="button" class="px-3 py-1 rounded-md text-fg-muted hover:bg-action-ghost-bg-hover" on:click=move |_| on_next.call(())>
                    <i class="fas fa-chevron-right"></i>
                    <span class="sr-only">"Next month"</span>
                </button>
            </div>
            <Show when=move || error.with(Option::is_some)>
                <p class="text-sm text-status-error-text">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <div class="grid grid-cols-7 gap-1 text-center text-xs font-semibold text-fg-muted">
                    {WEEKDAYS.iter().map(|day| view! { <div>{*day}</div> }).collect_view()}
                </div>
                <div class="grid grid-cols-7 gap-1">
                    {move || weeks.get().into_iter().flatten().map(day_cell).collect_view()}
                </div>
            </Show>
        </section>
    }
}
