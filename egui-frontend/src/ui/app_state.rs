//! # App State Module
//!
//! This module defines the central application state structure and the
//! submission flow for the expense tracker app.
//!
//! ## Key Types:
//! - `ExpenseTrackerApp` - Main application state struct
//!
//! ## Key Functions:
//! - `new()` - Initialize new app instance with an empty ledger
//! - `submit_transaction()` - Run the current form through the backend
//! - `clear_messages()` - Clear success/error messages
//!
//! ## Purpose:
//! This module serves as the central state management for the entire
//! application, containing:
//! - Backend connection and data access
//! - The rendered view of the ledger (balance, log entries)
//! - UI state (messages and their expiry)
//! - Form input state
//!
//! ## State Management:
//! The ExpenseTrackerApp struct holds all application state in a single
//! location, making it easy to pass between UI components. The ledger view
//! is only refreshed from the backend after an accepted submission, so
//! balance and log always change together.

use std::time::Instant;

use log::info;
use shared::{format_currency, LogEntry};

use crate::backend::domain::models::transaction::TransactionCategory as DomainCategory;
use crate::backend::Backend;
use crate::ui::mappers::{to_command, TransactionMapper};
use crate::ui::state::TransactionFormState;

/// How long success and error banners stay up, in seconds
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

/// Main application struct for the egui expense tracker
pub struct ExpenseTrackerApp {
    pub backend: Backend,

    // Ledger view
    pub current_balance: f64,
    pub log_entries: Vec<LogEntry>,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub message_posted_at: Option<Instant>,

    // Form state
    pub transaction_form: TransactionFormState,
}

impl ExpenseTrackerApp {
    /// Create a new ExpenseTrackerApp with default values
    pub fn new() -> Self {
        info!("🚀 Initializing ExpenseTrackerApp");

        Self {
            backend: Backend::new(),

            // Ledger view
            current_balance: 0.0,
            log_entries: Vec::new(),

            // UI state
            error_message: None,
            success_message: None,
            message_posted_at: None,

            // Form state
            transaction_form: TransactionFormState::new(),
        }
    }

    /// Submit the current form as a transaction.
    ///
    /// On acceptance the ledger view refreshes, the form resets to defaults
    /// and a success banner goes up. On rejection only the error banner
    /// changes; balance, log, and the typed form values all stay put.
    pub fn submit_transaction(&mut self) {
        self.clear_messages();

        let request = self.transaction_form.to_request();
        match self
            .backend
            .transaction_service
            .create_transaction(to_command(request))
        {
            Ok(transaction) => {
                self.refresh_ledger_view();
                self.transaction_form.clear();

                let noun = match transaction.category {
                    DomainCategory::Income => "Income",
                    DomainCategory::Expense => "Expense",
                };
                self.set_success(format!(
                    "{} of {} recorded",
                    noun,
                    format_currency(transaction.amount)
                ));
            }
            Err(error) => {
                self.set_error(error.to_string());
            }
        }
    }

    /// Re-pull balance and log entries from the backend
    fn refresh_ledger_view(&mut self) {
        self.current_balance = self.backend.transaction_service.balance();
        self.log_entries = self
            .backend
            .transaction_service
            .log_entries()
            .iter()
            .map(TransactionMapper::to_dto)
            .collect();
        info!(
            "📊 Ledger view refreshed: {} entries, balance {}",
            self.log_entries.len(),
            format_currency(self.current_balance)
        );
    }

    /// Clear success/error messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.message_posted_at = None;
    }

    /// Drop messages that have been on screen long enough
    pub fn expire_stale_messages(&mut self) {
        if let Some(posted_at) = self.message_posted_at {
            if posted_at.elapsed().as_secs() >= MESSAGE_TIMEOUT_SECS {
                self.clear_messages();
            }
        }
    }

    fn set_success(&mut self, message: String) {
        self.success_message = Some(message);
        self.message_posted_at = Some(Instant::now());
    }

    fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.message_posted_at = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ExpenseCategory, TransactionCategory};
    use std::time::Duration;

    fn fill_form(app: &mut ExpenseTrackerApp, description: &str, amount: &str) {
        app.transaction_form.description = description.to_string();
        app.transaction_form.amount_text = amount.to_string();
        app.transaction_form.validate();
    }

    #[test]
    fn test_submitting_the_form_updates_view_and_resets_form() {
        let mut app = ExpenseTrackerApp::new();
        fill_form(&mut app, "Salary", "100");
        app.submit_transaction();

        assert_eq!(app.current_balance, 100.0);
        assert_eq!(app.log_entries.len(), 1);
        assert_eq!(app.log_entries[0].description, "Salary");
        assert!(app.success_message.is_some());
        assert!(app.error_message.is_none());

        // Form is back to its defaults
        assert_eq!(app.transaction_form.description, "");
        assert_eq!(app.transaction_form.amount_text, "");
        assert_eq!(app.transaction_form.category, TransactionCategory::Income);
        assert_eq!(app.transaction_form.expense_category, ExpenseCategory::Food);
        assert!(!app.transaction_form.shows_expense_categories());
    }

    #[test]
    fn test_coffee_then_salary_through_the_form() {
        let mut app = ExpenseTrackerApp::new();

        fill_form(&mut app, "Coffee", "5");
        app.transaction_form.category = TransactionCategory::Expense;
        app.transaction_form.expense_category = ExpenseCategory::Food;
        app.submit_transaction();

        fill_form(&mut app, "Salary", "100");
        app.submit_transaction();

        assert_eq!(app.current_balance, 95.0);
        assert_eq!(app.log_entries[0].description, "Salary");
        assert_eq!(app.log_entries[1].description, "Coffee");
        assert_eq!(app.log_entries[1].expense_category, Some(ExpenseCategory::Food));
        assert_eq!(app.log_entries[1].signed_amount(), -5.0);
    }

    #[test]
    fn test_rejected_submission_changes_nothing_but_the_error() {
        let mut app = ExpenseTrackerApp::new();
        fill_form(&mut app, "Salary", "100");
        app.submit_transaction();

        // An invalid amount typed straight into the form
        app.transaction_form.description = "Coffee".to_string();
        app.transaction_form.amount_text = "abc".to_string();
        app.submit_transaction();

        assert_eq!(app.current_balance, 100.0);
        assert_eq!(app.log_entries.len(), 1);
        assert_eq!(
            app.error_message.as_deref(),
            Some("Please enter a valid number")
        );
        assert!(app.success_message.is_none());

        // The typed values survive so the user can correct them
        assert_eq!(app.transaction_form.description, "Coffee");
        assert_eq!(app.transaction_form.amount_text, "abc");
    }

    #[test]
    fn test_success_message_mentions_the_amount() {
        let mut app = ExpenseTrackerApp::new();
        fill_form(&mut app, "Salary", "100");
        app.submit_transaction();

        assert_eq!(
            app.success_message.as_deref(),
            Some("Income of $100.00 recorded")
        );
    }

    #[test]
    fn test_clear_messages_drops_both_banners() {
        let mut app = ExpenseTrackerApp::new();
        fill_form(&mut app, "Salary", "100");
        app.submit_transaction();
        assert!(app.success_message.is_some());

        app.clear_messages();
        assert!(app.success_message.is_none());
        assert!(app.error_message.is_none());
        assert!(app.message_posted_at.is_none());
    }

    #[test]
    fn test_banners_expire_after_the_timeout() {
        let mut app = ExpenseTrackerApp::new();
        fill_form(&mut app, "Salary", "100");
        app.submit_transaction();

        // A fresh banner survives the expiry check
        app.expire_stale_messages();
        assert!(app.success_message.is_some());
        assert!(app.message_posted_at.is_some());

        // Backdate the banner past the timeout and check again
        app.message_posted_at =
            Some(Instant::now() - Duration::from_secs(MESSAGE_TIMEOUT_SECS + 1));
        app.expire_stale_messages();

        assert!(app.success_message.is_none());
        assert!(app.error_message.is_none());
        assert!(app.message_posted_at.is_none());
    }
}
