//! Transaction service domain logic for the expense tracker.
use log::{info, warn};

use crate::backend::domain::commands::transactions::CreateTransactionCommand;
use crate::backend::domain::models::ledger::{self, Ledger};
use crate::backend::domain::models::transaction::Transaction;
use crate::backend::domain::validation::InvalidInput;

/// Owns the ledger and is its only writer.
///
/// Submissions go through the pure [`ledger::apply_transaction`] rule; the
/// owned state is swapped for the successor only when the rule accepts, so
/// balance and log can never drift apart.
pub struct TransactionService {
    ledger: Ledger,
}

impl TransactionService {
    pub fn new() -> Self {
        TransactionService {
            ledger: Ledger::new(),
        }
    }

    /// Validate and record a submission.
    ///
    /// Returns the accepted transaction; on rejection the ledger is left
    /// exactly as it was.
    pub fn create_transaction(
        &mut self,
        command: CreateTransactionCommand,
    ) -> Result<Transaction, InvalidInput> {
        match ledger::apply_transaction(&self.ledger, &command) {
            Ok((next, transaction)) => {
                info!(
                    "💰 Recorded {:?} of ${:.2}, new balance ${:.2}",
                    transaction.category,
                    transaction.amount,
                    next.balance()
                );
                self.ledger = next;
                Ok(transaction)
            }
            Err(error) => {
                warn!("Rejected transaction submission: {}", error);
                Err(error)
            }
        }
    }

    /// Current running balance
    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    /// Accepted transactions, most recent first
    pub fn log_entries(&self) -> &[Transaction] {
        self.ledger.entries()
    }
}
