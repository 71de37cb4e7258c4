//! User-facing message catalogue and output macros.
//!
//! Every line printed to the console comes from a [`Message`] variant, so the
//! wording lives in one place ([`display`]) and call sites stay type-checked.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
