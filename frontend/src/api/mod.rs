mod attendance;
mod candidates;
pub mod client;
mod contracts;
mod resignations;
mod shift_types;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
