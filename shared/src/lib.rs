use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a transaction adds money to the balance or spends from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionCategory {
    /// Money added to the balance
    Income,
    /// Money spent from the balance
    Expense,
}

impl TransactionCategory {
    /// All selectable categories, in selector order
    pub const ALL: [TransactionCategory; 2] =
        [TransactionCategory::Income, TransactionCategory::Expense];

    /// Label used by the category selector and the log table
    pub fn label(&self) -> &'static str {
        match self {
            TransactionCategory::Income => "Income",
            TransactionCategory::Expense => "Expense",
        }
    }
}

impl Default for TransactionCategory {
    // Income is what the form resets to
    fn default() -> Self {
        TransactionCategory::Income
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Subcategory for expenses. Income transactions never carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Other,
}

impl ExpenseCategory {
    /// All selectable subcategories, in selector order
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl Default for ExpenseCategory {
    // Food is the selector's reset value
    fn default() -> Self {
        ExpenseCategory::Food
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rendered row of the transaction log.
///
/// Entries have no identity and are never edited or deleted; the log only
/// ever grows at the head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Human-readable timestamp with timezone (RFC 3339)
    pub date: String,
    /// Description of the transaction (max 256 characters)
    pub description: String,
    /// Transaction amount as entered (never zero)
    pub amount: f64,
    /// Whether this entry added or spent money
    pub category: TransactionCategory,
    /// Present exactly when `category` is `Expense`
    pub expense_category: Option<ExpenseCategory>,
    /// Account balance after this transaction
    pub balance: f64,
}

impl LogEntry {
    /// Balance delta this entry applied: `+amount` for income, `-amount`
    /// for expense
    pub fn signed_amount(&self) -> f64 {
        match self.category {
            TransactionCategory::Income => self.amount,
            TransactionCategory::Expense => -self.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.category == TransactionCategory::Income
    }
}

/// A transaction submission with the form values exactly as typed.
/// Parsing and validation happen behind this boundary, not in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    /// Description of the transaction (max 256 characters)
    pub description: String,
    /// Raw amount text; must parse as a finite, non-zero number
    pub amount: String,
    pub category: TransactionCategory,
    /// Required for expenses, ignored for income
    pub expense_category: Option<ExpenseCategory>,
}

/// Format a money amount for display: dollar sign, two decimal places
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_two_decimal_places() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(95.0), "$95.00");
        assert_eq!(format_currency(4.5), "$4.50");
        assert_eq!(format_currency(1234.567), "$1234.57");
    }

    #[test]
    fn test_format_currency_negative_balance() {
        assert_eq!(format_currency(-12.3), "$-12.30");
    }

    #[test]
    fn test_signed_amount_follows_category() {
        let mut entry = LogEntry {
            date: "2026-01-05T09:30:00+01:00".to_string(),
            description: "Coffee".to_string(),
            amount: 5.0,
            category: TransactionCategory::Expense,
            expense_category: Some(ExpenseCategory::Food),
            balance: -5.0,
        };
        assert_eq!(entry.signed_amount(), -5.0);
        assert!(!entry.is_income());

        entry.category = TransactionCategory::Income;
        entry.expense_category = None;
        assert_eq!(entry.signed_amount(), 5.0);
        assert!(entry.is_income());
    }

    #[test]
    fn test_selector_defaults() {
        assert_eq!(TransactionCategory::default(), TransactionCategory::Income);
        assert_eq!(ExpenseCategory::default(), ExpenseCategory::Food);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(TransactionCategory::Expense.label(), "Expense");
        assert_eq!(ExpenseCategory::Transport.to_string(), "Transport");
        assert_eq!(ExpenseCategory::ALL.len(), 5);
    }
}
