//! Domain models: the ledger and the transactions recorded in it.

pub mod ledger;
pub mod transaction;
