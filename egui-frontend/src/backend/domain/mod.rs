//! # Domain Module
//!
//! Contains all business logic for the expense tracker application.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how transactions are validated, recorded, and reflected in
//! the running balance. It operates independently of any UI framework.
//!
//! ## Module Organization
//!
//! - **models**: The ledger, accepted transactions, and their categories
//! - **commands**: Input types the services accept from the UI layer
//! - **validation**: Submission validation and the `InvalidInput` error
//! - **transaction_service**: Owns the ledger and records submissions
//!
//! ## Business Rules
//!
//! - Descriptions must be non-empty after trimming (max 256 characters)
//! - Amounts must parse as finite, non-zero numbers
//! - Expenses carry a subcategory; income never does
//! - Income raises the balance by the amount, expenses lower it
//! - A submission either lands whole or leaves no trace at all
//! - The log keeps every accepted transaction, most recent first

pub mod commands;
pub mod models;
pub mod transaction_service;
pub mod validation;

pub use transaction_service::*;
