//! # Backend Module for egui Frontend
//!
//! This backend module provides direct access to the domain layer for the
//! egui frontend. There is no IO/REST layer and no storage behind it:
//! - Uses synchronous operations (no async/await)
//! - All state is in memory and lives exactly as long as the process
//! - The UI owns a single `Backend` and calls services directly

pub mod domain;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub transaction_service: domain::TransactionService,
}

impl Backend {
    /// Create a new backend with a fresh, empty ledger
    pub fn new() -> Self {
        Backend {
            transaction_service: domain::TransactionService::new(),
        }
    }
}
