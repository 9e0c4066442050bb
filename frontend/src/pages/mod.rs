pub mod attendance;
pub mod candidates;
pub mod contracts;
pub mod resignations;
pub mod shift_types;
