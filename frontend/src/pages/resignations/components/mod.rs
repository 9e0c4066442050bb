pub mod decision_dialog;
pub mod inbox;
pub mod list;
pub mod submit_form;
