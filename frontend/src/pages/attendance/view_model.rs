use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

use super::utils::{month_bounds, shift_month, MonthlySummary};
use crate::api::ApiClient;
use crate::state::{
    attendance::{prefill_location, use_attendance_machine, AttendanceAction, AttendanceMachine},
    modal::{use_modal, ModalHandle},
    toast::{use_notifier, Notifier},
};
use crate::utils::{geolocation::BrowserGeolocation, time::today_in_app_tz};

pub fn month_range(month_start: NaiveDate) -> (NaiveDate, NaiveDate) {
    month_bounds(month_start).unwrap_or((month_start, month_start))
}

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub machine: AttendanceMachine<ApiClient>,
    pub month: RwSignal<NaiveDate>,
    pub dialog: ModalHandle<AttendanceAction>,
    pub location: RwSignal<String>,
    pub locating: RwSignal<bool>,
    notifier: Rc<dyn Notifier>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let notifier = use_notifier();
        let month = create_rw_signal(shift_month(today_in_app_tz(), 0));
        let range = Signal::derive(move || month_range(month.get()));
        let machine = use_attendance_machine(api, range, notifier.clone());

        Self {
            machine,
            month,
            dialog: use_modal(false),
            location: create_rw_signal(String::new()),
            locating: create_rw_signal(false),
            notifier,
        }
    }

    pub fn summary(&self) -> Signal<MonthlySummary> {
        let history = self.machine.history.data;
        Signal::derive(move || history.with(|records| MonthlySummary::from_records(records)))
    }

    pub fn busy(&self) -> Signal<bool> {
        let pending = self.machine.pending;
        let locating = self.locating;
        Signal::derive(move || pending.get() || locating.get())
    }

    /// Reads the position first; the dialog opens whether or not that works.
    pub fn open_dialog(&self, action: AttendanceAction) {
        if self.locating.get_untracked() {
            return;
        }
        self.locating.set(true);
        let vm = self.clone();
        spawn_local(async move {
            prefill_location(&BrowserGeolocation, vm.location, vm.notifier.as_ref()).await;
            vm.locating.set(false);
            vm.dialog.open(Some(action));
        });
    }

    pub fn confirm(&self) {
        let Some(action) = self.dialog.selected_untracked() else {
            return;
        };
        let vm = self.clone();
        spawn_local(async move {
            let location = vm.location.get_untracked();
            if vm.machine.run(action, &location).await.is_ok() {
                vm.dialog.close();
                vm.location.set(String::new());
            }
        });
    }

    pub fn close_dialog(&self) {
        self.dialog.close();
    }

    pub fn previous_month(&self) {
        self.month.update(|month| *month = shift_month(*month, -1));
    }

    pub fn next_month(&self) {
        self.month.update(|month| *month = shift_month(*month, 1));
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    AttendanceViewModel::new()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn month_navigation_moves_the_history_range() {
        with_runtime(|| {
            let vm = use_attendance_view_model();
            vm.month.set(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

            vm.previous_month();
            assert_eq!(
                month_range(vm.month.get_untracked()),
                (
                    NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
                )
            );

            vm.next_month();
            vm.next_month();
            assert_eq!(
                vm.month.get_untracked(),
                NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
            );
        });
    }

    #[test]
    fn starts_idle_with_closed_dialog() {
        with_runtime(|| {
            let vm = use_attendance_view_model();
            assert!(!vm.busy().get_untracked());
            assert!(!vm.dialog.is_open.get_untracked());
            assert_eq!(vm.summary().get_untracked(), MonthlySummary::default());
        });
    }
}
