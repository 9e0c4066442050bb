use leptos::*;
use log::debug;
use std::rc::Rc;

use super::utils::{apply_status_change, cv_fields};
use crate::api::{ApiClient, Candidate, CandidateStatus};
use crate::state::{
    fetch::{use_fetch_data, FetchHandle, FetchOptions},
    form::{use_form, FormHandle, FormOptions, FormSubmitResult},
    mutation::report_outcome,
    toast::{use_notifier, Notifier},
};
use crate::utils::status::StatusTab;

pub const CV_SUBMITTED: &str = "CV submitted";
pub const STATUS_UPDATED_FALLBACK: &str = "Candidate status updated";
pub const STATUS_UPDATE_FAILED: &str = "Failed to update candidate status";

#[derive(Clone)]
pub struct CandidatesViewModel {
    api: ApiClient,
    pub tab: RwSignal<StatusTab<CandidateStatus>>,
    pub candidates: FetchHandle<Vec<Candidate>>,
    pub form: FormHandle<Candidate>,
    /// Candidate whose status change is in flight.
    pub updating: RwSignal<Option<String>>,
    notifier: Rc<dyn Notifier>,
}

impl CandidatesViewModel {
    pub fn new(api: ApiClient, notifier: Rc<dyn Notifier>) -> Self {
        let tab = create_rw_signal(StatusTab::All);
        let tab_key: Signal<StatusTab<CandidateStatus>> = tab.into();
        let candidates = {
            let api = api.clone();
            use_fetch_data(
                move || {
                    let api = api.clone();
                    let filter = tab.get_untracked().as_filter();
                    async move { api.get_candidates(filter).await }
                },
                FetchOptions::new(notifier.clone())
                    .dependencies(tab_key)
                    .latest_only(true),
            )
        };
        let form = use_form(
            cv_fields(),
            FormOptions::new(notifier.clone()).success_message(CV_SUBMITTED),
        );

        Self {
            api,
            tab,
            candidates,
            form,
            updating: create_rw_signal(None),
            notifier,
        }
    }

    pub async fn submit(&self) -> FormSubmitResult<Candidate> {
        let api = self.api.clone();
        let result = self
            .form
            .handle_submit(
                move |url: String| async move { api.submit_cv(&url).await },
                |values| values.trimmed("cv_url"),
            )
            .await;
        if result.is_ok() {
            self.candidates.fetch().await;
        }
        result
    }

    pub async fn update_status(&self, candidate: &Candidate, status: CandidateStatus) -> bool {
        if candidate.status == status || self.updating.with_untracked(Option::is_some) {
            return false;
        }
        self.updating.set(Some(candidate.id.clone()));
        let result = self.api.update_candidate_status(&candidate.id, status).await;
        self.updating.set(None);

        let Some(updated) = report_outcome(
            self.notifier.as_ref(),
            result,
            STATUS_UPDATED_FALLBACK,
            STATUS_UPDATE_FAILED,
        ) else {
            return false;
        };
        debug!("Candidate {} is now {}", updated.id, updated.status.as_str());
        let tab = self.tab.get_untracked();
        self.candidates
            .update_data(|list| apply_status_change(list, updated, tab));
        true
    }
}

pub fn use_candidates_view_model() -> CandidatesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_default();
    CandidatesViewModel::new(api, use_notifier())
}
