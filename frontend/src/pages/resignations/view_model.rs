use leptos::*;
use log::info;
use std::rc::Rc;

use super::utils::{is_open, new_resignation, resignation_fields, DecisionDraft};
use crate::api::{ApiClient, Resignation, ResignationStatus};
use crate::state::{
    fetch::{use_fetch_data, FetchHandle, FetchOptions},
    form::{use_form, FormHandle, FormOptions, FormSubmitResult},
    modal::{use_modal, ModalHandle},
    mutation::report_outcome,
    toast::{use_notifier, Notifier},
};
use crate::utils::status::{count_for_tab, filter_by_status, StatusTab};

pub const WITHDRAW_SUCCESS_FALLBACK: &str = "Resignation withdrawn";
pub const WITHDRAW_ERROR_FALLBACK: &str = "Failed to withdraw resignation";
pub const DECISION_SUCCESS_FALLBACK: &str = "Resignation updated";
pub const DECISION_ERROR_FALLBACK: &str = "Failed to update resignation";
pub const NOT_PENDING: &str = "This request has already been decided";

#[derive(Clone)]
pub struct ResignationsViewModel {
    api: ApiClient,
    pub mine: FetchHandle<Vec<Resignation>>,
    pub inbox: FetchHandle<Vec<Resignation>>,
    pub inbox_tab: RwSignal<StatusTab<ResignationStatus>>,
    pub form: FormHandle<Resignation>,
    pub withdraw_target: ModalHandle<Resignation>,
    pub decision: ModalHandle<DecisionDraft>,
    pub decision_note: RwSignal<String>,
    pub busy: RwSignal<bool>,
    notifier: Rc<dyn Notifier>,
}

impl ResignationsViewModel {
    pub fn new(api: ApiClient, notifier: Rc<dyn Notifier>) -> Self {
        let mine = {
            let api = api.clone();
            use_fetch_data(
                move || {
                    let api = api.clone();
                    async move { api.get_my_resignations().await }
                },
                FetchOptions::new(notifier.clone()),
            )
        };
        let inbox = {
            let api = api.clone();
            use_fetch_data(
                move || {
                    let api = api.clone();
                    async move { api.get_resignations_by_approver().await }
                },
                FetchOptions::new(notifier.clone()),
            )
        };
        let form = use_form(
            resignation_fields(),
            FormOptions::new(notifier.clone()).success_message("Resignation submitted"),
        );

        Self {
            api,
            mine,
            inbox,
            inbox_tab: create_rw_signal(StatusTab::Only(ResignationStatus::Pending)),
            form,
            withdraw_target: use_modal(false),
            decision: use_modal(false),
            decision_note: create_rw_signal(String::new()),
            busy: create_rw_signal(false),
            notifier,
        }
    }

    pub fn visible_inbox(&self) -> Signal<Vec<Resignation>> {
        let data = self.inbox.data;
        let tab = self.inbox_tab;
        Signal::derive(move || data.with(|items| filter_by_status(items, tab.get())))
    }

    pub fn inbox_count(&self) -> Callback<StatusTab<ResignationStatus>, usize> {
        let data = self.inbox.data;
        Callback::new(move |tab| data.with(|items| count_for_tab(items, tab)))
    }

    /// Submits the form, then reloads "my resignations" so approver details come back populated.
    pub async fn submit(&self) -> FormSubmitResult<Resignation> {
        let api = self.api.clone();
        let result = self
            .form
            .handle_submit(
                move |payload| async move { api.submit_resignation(payload).await },
                |values| new_resignation(&values),
            )
            .await;
        if result.is_ok() {
            self.mine.fetch().await;
        }
        result
    }

    pub fn ask_withdraw(&self, resignation: Resignation) {
        if !is_open(&resignation) {
            self.notifier.error(NOT_PENDING);
            return;
        }
        self.withdraw_target.open(Some(resignation));
    }

    pub async fn withdraw_selected(&self) -> bool {
        let Some(resignation) = self.withdraw_target.selected_untracked() else {
            return false;
        };
        if self.busy.get_untracked() {
            return false;
        }
        self.busy.set(true);
        let result = self.api.delete_resignation(&resignation.id).await;
        self.busy.set(false);
        self.withdraw_target.close();

        if report_outcome(
            self.notifier.as_ref(),
            result,
            WITHDRAW_SUCCESS_FALLBACK,
            WITHDRAW_ERROR_FALLBACK,
        )
        .is_none()
        {
            return false;
        }
        info!("Withdrew resignation {}", resignation.id);
        self.mine
            .update_data(|list| list.retain(|r| r.id != resignation.id));
        true
    }

    pub fn ask_decision(&self, resignation: Resignation, status: ResignationStatus) {
        if !is_open(&resignation) {
            self.notifier.error(NOT_PENDING);
            return;
        }
        self.decision_note.set(String::new());
        self.decision.open(Some(DecisionDraft { resignation, status }));
    }

    pub async fn decide_selected(&self) -> bool {
        let Some(draft) = self.decision.selected_untracked() else {
            return false;
        };
        if self.busy.get_untracked() {
            return false;
        }
        self.busy.set(true);
        let note = self.decision_note.get_untracked().trim().to_string();
        let result = self
            .api
            .update_resignation_status(&draft.resignation.id, draft.status, &note)
            .await;
        self.busy.set(false);

        let Some(updated) = report_outcome(
            self.notifier.as_ref(),
            result,
            DECISION_SUCCESS_FALLBACK,
            DECISION_ERROR_FALLBACK,
        ) else {
            return false;
        };
        info!(
            "Resignation {} marked {}",
            updated.id,
            updated.status.as_str()
        );
        self.decision.close();
        self.decision_note.set(String::new());
        self.inbox.update_data(|list| {
            if let Some(slot) = list.iter_mut().find(|r| r.id == updated.id) {
                *slot = updated;
            }
        });
        true
    }
}

pub fn use_resignations_view_model() -> ResignationsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    ResignationsViewModel::new(api, use_notifier())
}
