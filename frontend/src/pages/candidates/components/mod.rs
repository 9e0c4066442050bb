pub mod list;
pub mod submit_form;
