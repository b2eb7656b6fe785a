//! Domain model for a transaction.
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionCategory {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Other,
}

/// An accepted transaction as recorded in the ledger.
///
/// Transactions carry no identity: the log is append-only and display-only,
/// so there is nothing that ever needs to address one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: DateTime<Local>,
    pub description: String,
    /// Amount as entered (never zero; sign preserved)
    pub amount: f64,
    /// Running balance after this transaction
    pub balance: f64,
    pub category: TransactionCategory,
    /// Present exactly when `category` is `Expense`
    pub expense_category: Option<ExpenseCategory>,
}

impl Transaction {
    /// Balance delta this transaction applied: `+amount` for income,
    /// `-amount` for expense.
    pub fn signed_amount(&self) -> f64 {
        match self.category {
            TransactionCategory::Income => self.amount,
            TransactionCategory::Expense => -self.amount,
        }
    }
}
