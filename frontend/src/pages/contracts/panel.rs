use crate::components::{
    common::Button, confirm_dialog::ConfirmDialog, error::InlineErrorMessage, layout::Layout,
};
use crate::pages::contracts::{
    components::{editor::ContractEditor, list::ContractList, staff_lookup::StaffLookup},
    view_model::use_contracts_view_model,
};
use leptos::*;

#[component]
pub fn ContractsPage() -> impl IntoView {
    let vm = use_contracts_view_model();

    let on_create = {
        let vm = vm.clone();
        Callback::new(move |_| vm.open_create())
    };
    let on_edit = {
        let vm = vm.clone();
        Callback::new(move |contract| vm.open_edit(contract))
    };
    let on_delete = {
        let vm = vm.clone();
        Callback::new(move |contract| vm.ask_delete(contract))
    };
    let on_search = {
        let vm = vm.clone();
        Callback::new(move |_| vm.search_staff())
    };
    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |_| vm.submit())
    };
    let on_close = {
        let vm = vm.clone();
        Callback::new(move |_| vm.close_editor())
    };
    let on_confirm_delete = {
        let vm = vm.clone();
        Callback::new(move |_| vm.confirm_delete())
    };
    let on_retry_mine = {
        let mine = vm.mine.clone();
        Callback::new(move |_| mine.refetch())
    };

    let delete_target = vm.delete_target;
    let delete_message = Signal::derive(move || {
        delete_target
            .selected
            .with(|selected| {
                selected
                    .as_ref()
                    .map(|c| {
                        format!(
                            "Delete the contract for {}? This cannot be undone.",
                            c.staff_id.display_name()
                        )
                    })
            })
            .unwrap_or_default()
    });
    let staff_id = vm.staff_id;
    let has_staff = Signal::derive(move || !staff_id.with(|id| id.is_empty()));
    let staff_contracts = vm.staff_contracts.data;
    let staff_loading = vm.staff_contracts.loading;

    view! {
        <Layout>
            <div class="space-y-8">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-fg">"Contracts"</h1>
                    <Button on_click=on_create>"New contract"</Button>
                </div>

                <section class="space-y-3">
                    <h2 class="text-lg font-semibold text-fg">"My contracts"</h2>
                    <InlineErrorMessage error=vm.mine.error.into() on_retry=on_retry_mine />
                    <ContractList
                        contracts=vm.mine.data.into()
                        loading=vm.mine.loading.into()
                        empty_title="You have no contracts yet"
                    />
                </section>

                <section class="space-y-3">
                    <h2 class="text-lg font-semibold text-fg">"Contracts by staff member"</h2>
                    <StaffLookup query=vm.staff_query on_search=on_search />
                    <Show when=move || has_staff.get()>
                        <ContractList
                            contracts=staff_contracts.into()
                            loading=staff_loading.into()
                            empty_title="No contracts for this staff member"
                            show_staff=true
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    </Show>
                </section>
            </div>

            <ContractEditor
                form=vm.form.state
                is_open=vm.editor.is_open.into()
                editing=vm.is_editing()
                submitting=vm.form.submitting.into()
                on_submit=on_submit
                on_close=on_close
            />
            <ConfirmDialog
                is_open=delete_target.is_open.into()
                title="Delete contract"
                message=delete_message
                confirm_label="Delete"
                confirm_disabled=vm.deleting
                destructive=true
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |_| delete_target.close())
            />
        </Layout>
    }
}
