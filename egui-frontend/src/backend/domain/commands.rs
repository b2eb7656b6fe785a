//! Domain-level command types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed to the UI directly. The mapper layer is responsible for converting
//! the public DTOs defined in the `shared` crate to these internal types.

pub mod transactions {
    use chrono::{DateTime, Local};

    use crate::backend::domain::models::transaction::{ExpenseCategory, TransactionCategory};

    /// Input for creating a new transaction, with the text fields exactly as
    /// the user typed them. Parsing happens during validation so a submission
    /// is either accepted whole or rejected whole.
    #[derive(Debug, Clone)]
    pub struct CreateTransactionCommand {
        pub description: String,
        /// Raw amount text; must parse as a finite, non-zero number
        pub amount: String,
        pub category: TransactionCategory,
        /// Required when `category` is `Expense`, ignored for income
        pub expense_category: Option<ExpenseCategory>,
        /// Optional date override - uses current time if not provided
        pub date: Option<DateTime<Local>>,
    }
}
