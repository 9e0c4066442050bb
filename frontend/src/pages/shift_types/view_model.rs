use leptos::*;
use std::rc::Rc;

use super::utils::{
    rolls_over_midnight, shift_duration_hours, shift_fields, shift_form_values, shift_payload,
};
use crate::api::{ApiClient, Reply, ShiftType};
use crate::state::{
    fetch::{use_fetch_data, FetchHandle, FetchOptions},
    form::{use_form, FormHandle, FormOptions, FormSubmitResult},
    modal::{use_modal, ModalHandle},
    mutation::report_outcome,
    toast::{use_notifier, Notifier},
};
use crate::utils::time::parse_hour;

pub const DELETE_SUCCESS_FALLBACK: &str = "Shift type deleted";
pub const DELETE_ERROR_FALLBACK: &str = "Failed to delete shift type";

#[derive(Clone)]
pub struct ShiftTypesViewModel {
    api: ApiClient,
    pub shifts: FetchHandle<Vec<ShiftType>>,
    pub editor: ModalHandle<ShiftType>,
    pub form: FormHandle<ShiftType>,
    pub delete_target: ModalHandle<ShiftType>,
    pub deleting: RwSignal<bool>,
    notifier: Rc<dyn Notifier>,
}

impl ShiftTypesViewModel {
    pub fn new(api: ApiClient, notifier: Rc<dyn Notifier>) -> Self {
        let shifts = {
            let api = api.clone();
            use_fetch_data(
                move || {
                    let api = api.clone();
                    async move { api.get_shift_types().await }
                },
                FetchOptions::new(notifier.clone()),
            )
        };
        let editor: ModalHandle<ShiftType> = use_modal(false);
        let form = use_form(
            shift_fields(),
            FormOptions::new(notifier.clone()).on_success(move |_: &Reply<ShiftType>| editor.close()),
        );

        Self {
            api,
            shifts,
            editor,
            form,
            delete_target: use_modal(false),
            deleting: create_rw_signal(false),
            notifier,
        }
    }

    pub fn open_create(&self) {
        self.form.reset();
        self.editor.open(None);
    }

    pub fn open_edit(&self, shift: ShiftType) {
        self.form.reset();
        self.form.state.fill(shift_form_values(&shift));
        self.editor.open(Some(shift));
    }

    pub fn close_editor(&self) {
        self.editor.close();
        self.form.reset();
    }

    /// Live duration for the editor, e.g. `"8 hours (ends next day)"`.
    pub fn duration_preview(&self) -> Signal<Option<String>> {
        let start = self.form.state.value("start_time");
        let end = self.form.state.value("end_time");
        Signal::derive(move || {
            let start = parse_hour(&start.get())?;
            let end = parse_hour(&end.get())?;
            let hours = shift_duration_hours(start, end)?;
            let unit = if hours == 1 { "hour" } else { "hours" };
            Some(if rolls_over_midnight(start, end) {
                format!("{} {} (ends next day)", hours, unit)
            } else {
                format!("{} {}", hours, unit)
            })
        })
    }

    pub async fn save(&self) -> FormSubmitResult<ShiftType> {
        let api = self.api.clone();
        let editing = self.editor.selected_untracked().map(|shift| shift.id);
        let result = self
            .form
            .handle_submit(
                move |payload| async move {
                    match editing {
                        Some(id) => api.update_shift_type(&id, payload).await,
                        None => api.create_shift_type(payload).await,
                    }
                },
                |values| shift_payload(&values),
            )
            .await;
        if result.is_ok() {
            self.shifts.fetch().await;
        }
        result
    }

    pub fn submit(&self) {
        let vm = self.clone();
        spawn_local(async move {
            let _ = vm.save().await;
        });
    }

    pub fn ask_delete(&self, shift: ShiftType) {
        self.delete_target.open(Some(shift));
    }

    pub async fn delete_selected(&self) -> bool {
        let Some(shift) = self.delete_target.selected_untracked() else {
            return false;
        };
        if self.deleting.get_untracked() {
            return false;
        }
        self.deleting.set(true);
        let result = self.api.delete_shift_type(&shift.id).await;
        self.deleting.set(false);
        self.delete_target.close();

        if report_outcome(
            self.notifier.as_ref(),
            result,
            DELETE_SUCCESS_FALLBACK,
            DELETE_ERROR_FALLBACK,
        )
        .is_none()
        {
            return false;
        }
        self.shifts.update_data(|list| list.retain(|s| s.id != shift.id));
        true
    }

    pub fn confirm_delete(&self) {
        let vm = self.clone();
        spawn_local(async move {
            vm.delete_selected().await;
        });
    }
}

pub fn use_shift_types_view_model() -> ShiftTypesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    ShiftTypesViewModel::new(api, use_notifier())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::pages::shift_types::utils::SAME_START_END;
    use crate::test_support::{helpers::RecordingNotifier, ssr::with_runtime};
    use futures::executor::block_on;
    use serde_json::json;

    fn night() -> ShiftType {
        ShiftType {
            id: "s-1".into(),
            name: "Night".into(),
            start_time: "22:00".into(),
            end_time: "06:00".into(),
            description: Some("Overnight".into()),
        }
    }

    fn vm_for(server: &MockServer, notifier: &RecordingNotifier) -> ShiftTypesViewModel {
        ShiftTypesViewModel::new(
            ApiClient::new_with_base_url(server.url("/api")),
            notifier.handle(),
        )
    }

    #[test]
    fn identical_hours_are_rejected_before_sending() {
        with_runtime(|| {
            let server = MockServer::start();
            let notifier = RecordingNotifier::new();
            let vm = vm_for(&server, &notifier);
            vm.open_create();
            vm.form.state.set("name", "Broken");
            vm.form.state.set("start_time", "09:00");
            vm.form.state.set("end_time", "09:00");

            assert!(block_on(vm.save()).is_err());
            assert!(server.received().is_empty());
            assert_eq!(
                vm.form.state.error("end_time").get_untracked().as_deref(),
                Some(SAME_START_END)
            );
            assert_eq!(vm.duration_preview().get_untracked(), None);
        });
    }

    #[test]
    fn editing_puts_to_the_selected_shift_and_reloads_the_list() {
        with_runtime(|| {
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(PUT).path("/api/shift-types/s-1");
                then.envelope(
                    "Updated",
                    json!({ "_id": "s-1", "name": "Late night", "startTime": "23:00", "endTime": "07:00" }),
                );
            });
            server.mock(|when, then| {
                when.method(GET).path("/api/shift-types");
                then.envelope(
                    "",
                    json!([
                        { "_id": "s-0", "name": "Day", "startTime": "08:00", "endTime": "17:00" },
                        { "_id": "s-1", "name": "Late night", "startTime": "23:00", "endTime": "07:00" }
                    ]),
                );
            });
            let notifier = RecordingNotifier::new();
            let vm = vm_for(&server, &notifier);
            vm.shifts.set_data(vec![night()]);
            vm.open_edit(night());
            assert_eq!(
                vm.duration_preview().get_untracked().as_deref(),
                Some("8 hours (ends next day)")
            );
            vm.form.state.set("name", "Late night");
            vm.form.state.set("start_time", "23:00");
            vm.form.state.set("end_time", "07:00");

            let saved = block_on(vm.save()).unwrap();
            assert_eq!(saved.name, "Late night");

            let received = server.received();
            assert_eq!(received.len(), 2);
            assert_eq!(
                received[0].body,
                Some(json!({
                    "name": "Late night",
                    "startTime": "23:00",
                    "endTime": "07:00",
                    "description": "Overnight"
                }))
            );
            assert_eq!(received[1].method, GET);
            assert!(!vm.editor.is_open.get_untracked());
            let shifts = vm.shifts.data.get_untracked();
            assert_eq!(shifts.len(), 2);
            assert_eq!(shifts[1].start_time, "23:00");
            assert_eq!(notifier.messages(), vec!["Updated".to_string()]);
        });
    }

    #[test]
    fn delete_drops_the_row() {
        with_runtime(|| {
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(DELETE).path("/api/shift-types/s-1");
                then.envelope("Deleted", serde_json::Value::Null);
            });
            let notifier = RecordingNotifier::new();
            let vm = vm_for(&server, &notifier);
            vm.shifts.set_data(vec![night()]);
            vm.ask_delete(night());

            assert!(block_on(vm.delete_selected()));
            assert!(vm.shifts.data.get_untracked().is_empty());
        });
    }
}
