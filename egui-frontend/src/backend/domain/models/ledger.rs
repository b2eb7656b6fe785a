//! The ledger and its single state transition.
//!
//! [`apply_transaction`] is the only way state advances. It is a pure
//! function from (ledger, submission) to a successor ledger, so a rejected
//! submission cannot leave partial effects behind and the whole rule is
//! testable without any UI.

use chrono::Local;

use crate::backend::domain::commands::transactions::CreateTransactionCommand;
use crate::backend::domain::models::transaction::{Transaction, TransactionCategory};
use crate::backend::domain::validation::{self, InvalidInput};

/// The whole application state: one running balance plus every accepted
/// transaction, most recent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    balance: f64,
    entries: Vec<Transaction>,
}

impl Ledger {
    /// Fresh ledger: zero balance, no entries
    pub fn new() -> Self {
        Ledger {
            balance: 0.0,
            entries: Vec::new(),
        }
    }

    /// Running balance: accepted income minus accepted expenses
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Accepted transactions, most recent first
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently accepted transaction, if any
    pub fn latest(&self) -> Option<&Transaction> {
        self.entries.first()
    }
}

/// Validate a submission against `ledger` and produce the successor ledger
/// together with the transaction it accepted.
///
/// The input ledger is never modified. Balance and log move together in the
/// returned value, so callers cannot observe one updated without the other.
pub fn apply_transaction(
    ledger: &Ledger,
    command: &CreateTransactionCommand,
) -> Result<(Ledger, Transaction), InvalidInput> {
    let submission = validation::validate(command)?;

    let date = command.date.unwrap_or_else(Local::now);
    let delta = match submission.category {
        TransactionCategory::Income => submission.amount,
        TransactionCategory::Expense => -submission.amount,
    };
    let balance = ledger.balance + delta;

    let transaction = Transaction {
        date,
        description: submission.description,
        amount: submission.amount,
        balance,
        category: submission.category,
        expense_category: submission.expense_category,
    };

    // New entries go at the head: the log renders in arrival order, newest
    // on top, regardless of any backdated timestamp
    let mut entries = Vec::with_capacity(ledger.entries.len() + 1);
    entries.push(transaction.clone());
    entries.extend(ledger.entries.iter().cloned());

    Ok((Ledger { balance, entries }, transaction))
}
