use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    config,
    pages::{
        attendance::AttendancePage, candidates::CandidatesPage, contracts::ContractsPage,
        resignations::ResignationsPage, shift_types::ShiftTypesPage,
    },
    state::toast::ToastCenter,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/attendance",
    "/contracts",
    "/resignations",
    "/shift-types",
    "/candidates",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_context(ToastCenter::new(config::toast_duration_ms()));
    view! {
        <Router>
            <Routes>
                <Route path="/" view=AttendancePage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/contracts" view=ContractsPage/>
                <Route path="/resignations" view=ResignationsPage/>
                <Route path="/shift-types" view=ShiftTypesPage/>
                <Route path="/candidates" view=CandidatesPage/>
            </Routes>
        </Router>
    }
}
