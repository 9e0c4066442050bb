use crate::api::{Candidate, CandidateStatus};
use crate::components::{error::InlineErrorMessage, layout::Layout, status_tabs::StatusTabs};
use crate::pages::candidates::{
    components::{list::CandidateList, submit_form::CvSubmitForm},
    view_model::use_candidates_view_model,
};
use leptos::*;

#[component]
pub fn CandidatesPage() -> impl IntoView {
    let vm = use_candidates_view_model();

    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                let _ = vm.submit().await;
            });
        })
    };
    let on_status_change = {
        let vm = vm.clone();
        Callback::new(move |(candidate, status): (Candidate, CandidateStatus)| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.update_status(&candidate, status).await;
            });
        })
    };
    let on_retry = {
        let candidates = vm.candidates.clone();
        Callback::new(move |_| candidates.refetch())
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-fg">"Candidates"</h1>
                <CvSubmitForm
                    form=vm.form.state
                    submitting=vm.form.submitting.into()
                    on_submit=on_submit
                />
                <section class="space-y-4">
                    <StatusTabs
                        statuses=CandidateStatus::ALL.to_vec()
                        active=vm.tab
                        label=CandidateStatus::label
                    />
                    <InlineErrorMessage error=vm.candidates.error.into() on_retry=on_retry />
                    <CandidateList
                        candidates=vm.candidates.data.into()
                        loading=vm.candidates.loading.into()
                        updating=vm.updating.into()
                        on_status_change=on_status_change
                    />
                </section>
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_form_and_tabs() {
        let html = render_to_string(move || view! { <CandidatesPage /> });
        assert!(html.contains("Submit a CV"));
        assert!(html.contains("Interview"));
    }
}
