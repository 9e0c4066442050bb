use crate::components::{
    common::Button, confirm_dialog::ConfirmDialog, error::InlineErrorMessage, layout::Layout,
};
use crate::pages::shift_types::{
    components::{editor::ShiftTypeEditor, list::ShiftTypeList},
    view_model::use_shift_types_view_model,
};
use leptos::*;

#[component]
pub fn ShiftTypesPage() -> impl IntoView {
    let vm = use_shift_types_view_model();

    let on_create = {
        let vm = vm.clone();
        Callback::new(move |_| vm.open_create())
    };
    let on_edit = {
        let vm = vm.clone();
        Callback::new(move |shift| vm.open_edit(shift))
    };
    let on_delete = {
        let vm = vm.clone();
        Callback::new(move |shift| vm.ask_delete(shift))
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
    let on_retry = {
        let shifts = vm.shifts.clone();
        Callback::new(move |_| shifts.refetch())
    };

    let editor = vm.editor;
    let editing = Signal::derive(move || editor.selected.with(Option::is_some));
    let delete_target = vm.delete_target;
    let delete_message = Signal::derive(move || {
        delete_target
            .selected
            .with(|s| s.as_ref().map(|s| format!("Delete the \"{}\" shift type?", s.name)))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-fg">"Shift types"</h1>
                    <Button on_click=on_create>"New shift type"</Button>
                </div>
                <InlineErrorMessage error=vm.shifts.error.into() on_retry=on_retry />
                <ShiftTypeList
                    shifts=vm.shifts.data.into()
                    loading=vm.shifts.loading.into()
                    on_edit=on_edit
                    on_delete=on_delete
                />
            </div>
            <ShiftTypeEditor
                form=vm.form.state
                is_open=editor.is_open.into()
                editing=editing
                duration=vm.duration_preview()
                submitting=vm.form.submitting.into()
                on_submit=on_submit
                on_close=on_close
            />
            <ConfirmDialog
                is_open=delete_target.is_open.into()
                title="Delete shift type"
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_header_and_create_button() {
        let html = render_to_string(move || view! { <ShiftTypesPage /> });
        assert!(html.contains("Shift types"));
        assert!(html.contains("New shift type"));
    }
}
