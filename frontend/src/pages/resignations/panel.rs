use crate::api::{Resignation, ResignationStatus};
use crate::components::{confirm_dialog::ConfirmDialog, error::InlineErrorMessage, layout::Layout};
use crate::pages::resignations::{
    components::{
        decision_dialog::DecisionDialog, inbox::ApproverInbox, list::MyResignations,
        submit_form::ResignationForm,
    },
    view_model::use_resignations_view_model,
};
use leptos::*;

#[component]
pub fn ResignationsPage() -> impl IntoView {
    let vm = use_resignations_view_model();

    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                let _ = vm.submit().await;
            });
        })
    };
    let on_withdraw = {
        let vm = vm.clone();
        Callback::new(move |resignation| vm.ask_withdraw(resignation))
    };
    let on_confirm_withdraw = {
        let vm = vm.clone();
        Callback::new(move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.withdraw_selected().await;
            });
        })
    };
    let on_decide = {
        let vm = vm.clone();
        Callback::new(move |(resignation, status): (Resignation, ResignationStatus)| {
            vm.ask_decision(resignation, status)
        })
    };
    let on_confirm_decision = {
        let vm = vm.clone();
        Callback::new(move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.decide_selected().await;
            });
        })
    };
    let on_retry_inbox = {
        let inbox = vm.inbox.clone();
        Callback::new(move |_| inbox.refetch())
    };

    let withdraw_target = vm.withdraw_target;
    let decision = vm.decision;

    view! {
        <Layout>
            <div class="grid gap-8 lg:grid-cols-2">
                <div class="space-y-6">
                    <h1 class="text-2xl font-bold text-fg">"Resignations"</h1>
                    <ResignationForm
                        form=vm.form.state
                        submitting=vm.form.submitting.into()
                        on_submit=on_submit
                    />
                    <section class="space-y-3">
                        <h2 class="text-lg font-semibold text-fg">"My requests"</h2>
                        <MyResignations
                            resignations=vm.mine.data.into()
                            loading=vm.mine.loading.into()
                            on_withdraw=on_withdraw
                        />
                    </section>
                </div>
                <section class="space-y-3">
                    <h2 class="text-lg font-semibold text-fg">"Waiting for my approval"</h2>
                    <InlineErrorMessage error=vm.inbox.error.into() on_retry=on_retry_inbox />
                    <ApproverInbox
                        resignations=vm.visible_inbox()
                        loading=vm.inbox.loading.into()
                        tab=vm.inbox_tab
                        count=vm.inbox_count()
                        on_decide=on_decide
                    />
                </section>
            </div>

            <ConfirmDialog
                is_open=withdraw_target.is_open.into()
                title="Withdraw resignation"
                message="Your request will be removed. This cannot be undone."
                confirm_label="Withdraw"
                confirm_disabled=vm.busy
                destructive=true
                on_confirm=on_confirm_withdraw
                on_cancel=Callback::new(move |_| withdraw_target.close())
            />
            <DecisionDialog
                is_open=decision.is_open.into()
                draft=decision.selected.into()
                note=vm.decision_note
                busy=vm.busy.into()
                on_confirm=on_confirm_decision
                on_close=Callback::new(move |_| decision.close())
            />
        </Layout>
    }
}
