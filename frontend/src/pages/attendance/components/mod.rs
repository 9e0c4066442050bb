pub mod calendar;
pub mod check_dialog;
pub mod summary;
