//! Submission validation for new transactions.
//!
//! A submission is either rejected whole with a single [`InvalidInput`] or
//! reduced to a [`ValidSubmission`] ready for the ledger. Nothing in here
//! touches state.

use thiserror::Error;

use crate::backend::domain::commands::transactions::CreateTransactionCommand;
use crate::backend::domain::models::transaction::{ExpenseCategory, TransactionCategory};

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 256;

/// The one kind of error a submission can produce. Every message is shown
/// to the user exactly as written here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Description cannot be empty")]
    EmptyDescription,
    #[error("Description cannot exceed 256 characters")]
    DescriptionTooLong,
    #[error("Please enter a valid number")]
    AmountNotNumeric,
    #[error("Amount cannot be zero")]
    AmountZero,
    #[error("Please pick a category for this expense")]
    MissingExpenseCategory,
}

/// A submission that passed validation: trimmed description, parsed amount,
/// normalized subcategory.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub description: String,
    pub amount: f64,
    pub category: TransactionCategory,
    pub expense_category: Option<ExpenseCategory>,
}

/// Parse a raw amount string. Accepts any finite, non-zero number,
/// negatives included.
pub fn parse_amount(raw: &str) -> Result<f64, InvalidInput> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| InvalidInput::AmountNotNumeric)?;
    if !amount.is_finite() {
        // "inf" and "NaN" parse successfully but are not money
        return Err(InvalidInput::AmountNotNumeric);
    }
    if amount == 0.0 {
        return Err(InvalidInput::AmountZero);
    }
    Ok(amount)
}

/// Validate a raw submission and reduce it to a [`ValidSubmission`].
///
/// Income submissions drop a stray subcategory rather than rejecting it: the
/// form keeps its hidden selector value around until the next reset, and
/// that leftover means nothing for income.
pub fn validate(command: &CreateTransactionCommand) -> Result<ValidSubmission, InvalidInput> {
    let description = command.description.trim();
    if description.is_empty() {
        return Err(InvalidInput::EmptyDescription);
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(InvalidInput::DescriptionTooLong);
    }

    let amount = parse_amount(&command.amount)?;

    let expense_category = match command.category {
        TransactionCategory::Expense => match command.expense_category {
            Some(category) => Some(category),
            None => return Err(InvalidInput::MissingExpenseCategory),
        },
        TransactionCategory::Income => None,
    };

    Ok(ValidSubmission {
        description: description.to_string(),
        amount,
        category: command.category,
        expense_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_command(
        description: &str,
        amount: &str,
        category: TransactionCategory,
        expense_category: Option<ExpenseCategory>,
    ) -> CreateTransactionCommand {
        CreateTransactionCommand {
            description: description.to_string(),
            amount: amount.to_string(),
            category,
            expense_category,
            date: None,
        }
    }

    #[test]
    fn test_accepts_a_plain_expense() {
        let command = create_test_command(
            "Coffee",
            "5",
            TransactionCategory::Expense,
            Some(ExpenseCategory::Food),
        );

        let submission = validate(&command).unwrap();
        assert_eq!(submission.description, "Coffee");
        assert_eq!(submission.amount, 5.0);
        assert_eq!(submission.category, TransactionCategory::Expense);
        assert_eq!(submission.expense_category, Some(ExpenseCategory::Food));
    }

    #[test]
    fn test_rejects_empty_description() {
        let command = create_test_command("", "5", TransactionCategory::Income, None);
        assert_eq!(validate(&command), Err(InvalidInput::EmptyDescription));
    }

    #[test]
    fn test_rejects_whitespace_only_description() {
        let command = create_test_command("   ", "5", TransactionCategory::Income, None);
        assert_eq!(validate(&command), Err(InvalidInput::EmptyDescription));
    }

    #[test]
    fn test_description_length_limit() {
        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        let command = create_test_command(&long, "5", TransactionCategory::Income, None);
        assert_eq!(validate(&command), Err(InvalidInput::DescriptionTooLong));

        // Exactly at the limit is still fine
        let at_limit = "x".repeat(MAX_DESCRIPTION_LEN);
        let command = create_test_command(&at_limit, "5", TransactionCategory::Income, None);
        assert!(validate(&command).is_ok());
    }

    #[test]
    fn test_description_limit_counts_characters_not_bytes() {
        // 256 two-byte characters: well past the limit in bytes, exactly at
        // it in characters
        let at_limit = "é".repeat(MAX_DESCRIPTION_LEN);
        let command = create_test_command(&at_limit, "5", TransactionCategory::Income, None);
        assert!(validate(&command).is_ok());

        let too_long = "é".repeat(MAX_DESCRIPTION_LEN + 1);
        let command = create_test_command(&too_long, "5", TransactionCategory::Income, None);
        assert_eq!(validate(&command), Err(InvalidInput::DescriptionTooLong));
    }

    #[test]
    fn test_rejects_non_numeric_amounts() {
        for raw in ["", "abc", "12.3.4", "$5"] {
            let command = create_test_command("Coffee", raw, TransactionCategory::Income, None);
            assert_eq!(
                validate(&command),
                Err(InvalidInput::AmountNotNumeric),
                "expected rejection for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_amounts() {
        for raw in ["inf", "-inf", "NaN"] {
            let command = create_test_command("Coffee", raw, TransactionCategory::Income, None);
            assert_eq!(
                validate(&command),
                Err(InvalidInput::AmountNotNumeric),
                "expected rejection for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_rejects_zero_amounts() {
        for raw in ["0", "0.00", "-0.0"] {
            let command = create_test_command("Coffee", raw, TransactionCategory::Income, None);
            assert_eq!(
                validate(&command),
                Err(InvalidInput::AmountZero),
                "expected rejection for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_accepts_negative_amounts() {
        let command = create_test_command(
            "Refund correction",
            "-5",
            TransactionCategory::Expense,
            Some(ExpenseCategory::Other),
        );
        let submission = validate(&command).unwrap();
        assert_eq!(submission.amount, -5.0);
    }

    #[test]
    fn test_trims_description_and_amount() {
        let command = create_test_command("  Coffee  ", " 4.50 ", TransactionCategory::Income, None);
        let submission = validate(&command).unwrap();
        assert_eq!(submission.description, "Coffee");
        assert_eq!(submission.amount, 4.5);
    }

    #[test]
    fn test_expense_requires_subcategory() {
        let command = create_test_command("Coffee", "5", TransactionCategory::Expense, None);
        assert_eq!(validate(&command), Err(InvalidInput::MissingExpenseCategory));
    }

    #[test]
    fn test_income_drops_stray_subcategory() {
        let command = create_test_command(
            "Salary",
            "100",
            TransactionCategory::Income,
            Some(ExpenseCategory::Food),
        );
        let submission = validate(&command).unwrap();
        assert_eq!(submission.expense_category, None);
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            InvalidInput::EmptyDescription.to_string(),
            "Description cannot be empty"
        );
        assert_eq!(
            InvalidInput::AmountNotNumeric.to_string(),
            "Please enter a valid number"
        );
        assert_eq!(InvalidInput::AmountZero.to_string(), "Amount cannot be zero");
    }
}
