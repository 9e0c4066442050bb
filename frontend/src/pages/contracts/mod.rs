pub mod components;
pub mod panel;
pub mod utils;
pub mod view_model;

pub use panel::ContractsPage;
