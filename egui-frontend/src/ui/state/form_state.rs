//! # Transaction Form State Module
//!
//! This module contains all state for the transaction entry form.
//!
//! ## Responsibilities:
//! - Raw field values exactly as the user typed them
//! - Per-field validation errors for inline display
//! - Submission gating (`can_submit`)
//! - Reset to defaults after an accepted submission
//!
//! ## Purpose:
//! Keeps everything the form widgets bind to in one place, so the renderer
//! stays a plain description of widgets and the whole form can be handed to
//! the backend in one piece.

use shared::{CreateTransactionRequest, ExpenseCategory, TransactionCategory};

/// State for the transaction entry form
#[derive(Debug)]
pub struct TransactionFormState {
    /// Description input
    pub description: String,

    /// Amount input (as string for validation)
    pub amount_text: String,

    /// Parsed amount
    pub amount: Option<f64>,

    /// Currently selected category
    pub category: TransactionCategory,

    /// Expense subcategory selector value; only submitted for expenses
    pub expense_category: ExpenseCategory,

    /// Form validation errors
    pub description_error: Option<String>,
    pub amount_error: Option<String>,
}

impl TransactionFormState {
    /// Create new form state with default values
    pub fn new() -> Self {
        Self {
            description: String::new(),
            amount_text: String::new(),
            amount: None,
            category: TransactionCategory::Income,
            expense_category: ExpenseCategory::Food,
            description_error: None,
            amount_error: None,
        }
    }

    /// Whether the expense subcategory selector should be visible.
    /// Purely a function of the selected category.
    pub fn shows_expense_categories(&self) -> bool {
        self.category == TransactionCategory::Expense
    }

    /// Validate the form and return true if valid
    pub fn validate(&mut self) -> bool {
        let mut is_valid = true;

        // Validate description
        let trimmed_description = self.description.trim();
        if trimmed_description.is_empty() {
            self.description_error = Some("Description cannot be empty".to_string());
            is_valid = false;
        } else if trimmed_description.chars().count() > 256 {
            self.description_error = Some("Description cannot exceed 256 characters".to_string());
            is_valid = false;
        } else {
            self.description_error = None;
        }

        // Validate amount. Zero is the one number that means nothing here;
        // negative amounts are allowed and act as corrections.
        match self.amount_text.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount != 0.0 => {
                self.amount = Some(amount);
                self.amount_error = None;
            }
            Ok(amount) if amount == 0.0 => {
                self.amount = None;
                self.amount_error = Some("Amount cannot be zero".to_string());
                is_valid = false;
            }
            _ => {
                self.amount = None;
                self.amount_error = Some("Please enter a valid number".to_string());
                is_valid = false;
            }
        }

        is_valid
    }

    /// Check if form can be submitted
    pub fn can_submit(&self) -> bool {
        !self.description.trim().is_empty()
            && !self.amount_text.trim().is_empty()
            && self.amount.is_some()
            && self.description_error.is_none()
            && self.amount_error.is_none()
    }

    /// Reset every field to its default: empty inputs, category back to
    /// Income, subcategory back to Food (hidden until Expense is picked).
    pub fn clear(&mut self) {
        self.description.clear();
        self.amount_text.clear();
        self.amount = None;
        self.category = TransactionCategory::Income;
        self.expense_category = ExpenseCategory::Food;
        self.description_error = None;
        self.amount_error = None;
    }

    /// Bundle the current values into a request for the backend. The
    /// subcategory rides along only while the selector is visible.
    pub fn to_request(&self) -> CreateTransactionRequest {
        CreateTransactionRequest {
            description: self.description.clone(),
            amount: self.amount_text.clone(),
            category: self.category,
            expense_category: if self.shows_expense_categories() {
                Some(self.expense_category)
            } else {
                None
            },
        }
    }
}
