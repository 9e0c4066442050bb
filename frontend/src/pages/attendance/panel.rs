use crate::components::{error::InlineErrorMessage, layout::Layout};
use crate::pages::attendance::{
    components::{
        calendar::MonthCalendar,
        check_dialog::CheckDialog,
        summary::{MonthlySummaryCard, TodayCard},
    },
    view_model::use_attendance_view_model,
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let machine = vm.machine.clone();
    let today = machine.today.clone();
    let history = machine.history.clone();

    let on_action = {
        let vm = vm.clone();
        Callback::new(move |action| vm.open_dialog(action))
    };
    let on_confirm = {
        let vm = vm.clone();
        Callback::new(move |_| vm.confirm())
    };
    let on_close = {
        let vm = vm.clone();
        Callback::new(move |_| vm.close_dialog())
    };
    let on_previous = {
        let vm = vm.clone();
        Callback::new(move |_| vm.previous_month())
    };
    let on_next = {
        let vm = vm.clone();
        Callback::new(move |_| vm.next_month())
    };
    let on_retry = {
        let today = today.clone();
        Callback::new(move |_| today.refetch())
    };

    let month = vm.month;
    let today_data = today.data;
    let history_data = history.data;
    let history_loading = history.loading;
    let history_error = history.error;
    let dialog = vm.dialog;
    let pending = machine.pending;

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Attendance"</h1>
                    <p class="text-sm text-fg-muted">"Check in when you arrive and check out when you leave."</p>
                </div>
                <InlineErrorMessage error=today.error.into() on_retry=on_retry />
                <TodayCard
                    record=today_data.into()
                    status=machine.status()
                    available=machine.available_action()
                    busy=vm.busy()
                    on_action=on_action
                />
                <MonthlySummaryCard summary=vm.summary() />
                <MonthCalendar
                    month=month.into()
                    records=history_data.into()
                    loading=history_loading.into()
                    error=history_error.into()
                    on_previous=on_previous
                    on_next=on_next
                />
            </div>
            <CheckDialog
                is_open=dialog.is_open.into()
                action=dialog.selected.into()
                location=vm.location
                submitting=pending.into()
                on_confirm=on_confirm
                on_close=on_close
            />
        </Layout>
    }
}
