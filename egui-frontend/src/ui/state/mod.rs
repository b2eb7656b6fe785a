//! UI state modules, one per concern.

pub mod form_state;

pub use form_state::TransactionFormState;
