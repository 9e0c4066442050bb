use leptos::*;
use log::info;
use std::rc::Rc;

use super::utils::{contract_fields, contract_form_values, contract_patch, new_contract};
use crate::api::{ApiClient, ApiError, Contract, ContractPatch, NewContract, Reply};
use crate::state::{
    fetch::{use_fetch_data, FetchHandle, FetchOptions},
    form::{use_form, FormHandle, FormOptions, FormSubmitResult},
    modal::{use_modal, ModalHandle},
    mutation::report_outcome,
    toast::{use_notifier, Notifier},
};
use crate::utils::time::app_time_zone;

pub const DELETE_SUCCESS_FALLBACK: &str = "Contract deleted";
pub const DELETE_ERROR_FALLBACK: &str = "Failed to delete contract";

#[derive(Clone)]
pub struct ContractsViewModel {
    api: ApiClient,
    pub mine: FetchHandle<Vec<Contract>>,
    /// Text in the lookup box; `staff_id` only changes on search.
    pub staff_query: RwSignal<String>,
    pub staff_id: RwSignal<String>,
    pub staff_contracts: FetchHandle<Vec<Contract>>,
    pub editor: ModalHandle<Contract>,
    pub form: FormHandle<Contract>,
    pub delete_target: ModalHandle<Contract>,
    pub deleting: RwSignal<bool>,
    notifier: Rc<dyn Notifier>,
}

impl ContractsViewModel {
    pub fn new(api: ApiClient, notifier: Rc<dyn Notifier>) -> Self {
        let mine = {
            let api = api.clone();
            use_fetch_data(
                move || {
                    let api = api.clone();
                    async move { api.get_my_contracts().await }
                },
                FetchOptions::new(notifier.clone()),
            )
        };

        let staff_id = create_rw_signal(String::new());
        let staff_key: Signal<String> = staff_id.into();
        let staff_contracts = {
            let api = api.clone();
            use_fetch_data(
                move || {
                    let api = api.clone();
                    let id = staff_id.get_untracked();
                    async move { api.get_contracts_by_staff(id.trim()).await }
                },
                FetchOptions::new(notifier.clone())
                    .dependencies(staff_key)
                    .enabled(Signal::derive(move || !staff_id.with(|id| id.trim().is_empty())))
                    .latest_only(true),
            )
        };

        let editor = use_modal(false);
        let form = use_form(
            contract_fields(),
            FormOptions::new(notifier.clone()).on_success(move |_: &Reply<Contract>| editor.close()),
        );

        Self {
            api,
            mine,
            staff_query: create_rw_signal(String::new()),
            staff_id,
            staff_contracts,
            editor,
            form,
            delete_target: use_modal(false),
            deleting: create_rw_signal(false),
            notifier,
        }
    }

    pub fn search_staff(&self) {
        let query = self.staff_query.get_untracked().trim().to_string();
        if query == self.staff_id.get_untracked() {
            if !query.is_empty() {
                self.staff_contracts.refetch();
            }
            return;
        }
        self.staff_id.set(query);
    }

    pub fn open_create(&self) {
        self.form.reset();
        let staff_id = self.staff_id.get_untracked();
        if !staff_id.is_empty() {
            self.form.state.set("staff_id", staff_id);
        }
        self.editor.open(None);
    }

    pub fn open_edit(&self, contract: Contract) {
        self.form.reset();
        self.form
            .state
            .fill(contract_form_values(&contract, app_time_zone()));
        self.editor.open(Some(contract));
    }

    pub fn is_editing(&self) -> Signal<bool> {
        let selected = self.editor.selected;
        Signal::derive(move || selected.with(Option::is_some))
    }

    /// Creates or updates, then reloads both lists from the server.
    pub async fn save(&self) -> FormSubmitResult<Contract> {
        let result = self.send_form().await;
        if result.is_ok() {
            self.mine.fetch().await;
            if !self.staff_id.with_untracked(|id| id.trim().is_empty()) {
                self.staff_contracts.fetch().await;
            }
        }
        result
    }

    async fn send_form(&self) -> FormSubmitResult<Contract> {
        let api = self.api.clone();
        let tz = app_time_zone();
        match self.editor.selected_untracked() {
            Some(contract) => {
                self.form
                    .handle_submit(
                        move |patch: Result<ContractPatch, ApiError>| async move {
                            api.update_contract(&contract.id, patch?).await
                        },
                        move |values| contract_patch(&values, tz),
                    )
                    .await
            }
            None => {
                self.form
                    .handle_submit(
                        move |payload: Result<NewContract, ApiError>| async move {
                            api.create_contract(payload?).await
                        },
                        move |values| new_contract(&values, tz),
                    )
                    .await
            }
        }
    }

    pub fn submit(&self) {
        let vm = self.clone();
        spawn_local(async move {
            let _ = vm.save().await;
        });
    }

    pub fn close_editor(&self) {
        self.editor.close();
        self.form.reset();
    }

    pub fn ask_delete(&self, contract: Contract) {
        self.delete_target.open(Some(contract));
    }

    pub async fn delete_selected(&self) -> bool {
        let Some(contract) = self.delete_target.selected_untracked() else {
            return false;
        };
        if self.deleting.get_untracked() {
            return false;
        }
        self.deleting.set(true);
        let result = self.api.delete_contract(&contract.id).await;
        self.deleting.set(false);
        self.delete_target.close();

        let deleted = report_outcome(
            self.notifier.as_ref(),
            result,
            DELETE_SUCCESS_FALLBACK,
            DELETE_ERROR_FALLBACK,
        );
        if deleted.is_none() {
            return false;
        }
        info!("Deleted contract {}", contract.id);
        let id = contract.id;
        self.mine.update_data(|list| list.retain(|c| c.id != id));
        self.staff_contracts
            .update_data(|list| list.retain(|c| c.id != id));
        true
    }

    pub fn confirm_delete(&self) {
        let vm = self.clone();
        spawn_local(async move {
            vm.delete_selected().await;
        });
    }
}

pub fn use_contracts_view_model() -> ContractsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    ContractsViewModel::new(api, use_notifier())
}
