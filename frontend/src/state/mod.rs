pub mod attendance;
pub mod cancel;
pub mod fetch;
pub mod form;
pub mod modal;
pub mod mutation;
pub mod toast;
