use shared::*;

use crate::backend::domain::commands::transactions::CreateTransactionCommand;
use crate::backend::domain::models::transaction as domain;

/// Helper function to convert a raw form request into a domain command.
/// The subcategory only rides along for expenses; an income request drops it
/// here, before the domain ever sees it.
pub fn to_command(request: CreateTransactionRequest) -> CreateTransactionCommand {
    CreateTransactionCommand {
        description: request.description,
        amount: request.amount,
        category: match request.category {
            TransactionCategory::Income => domain::TransactionCategory::Income,
            TransactionCategory::Expense => domain::TransactionCategory::Expense,
        },
        expense_category: match request.category {
            TransactionCategory::Expense => {
                request.expense_category.map(to_domain_expense_category)
            }
            TransactionCategory::Income => None,
        },
        date: None,
    }
}

fn to_domain_expense_category(category: ExpenseCategory) -> domain::ExpenseCategory {
    match category {
        ExpenseCategory::Food => domain::ExpenseCategory::Food,
        ExpenseCategory::Transport => domain::ExpenseCategory::Transport,
        ExpenseCategory::Entertainment => domain::ExpenseCategory::Entertainment,
        ExpenseCategory::Utilities => domain::ExpenseCategory::Utilities,
        ExpenseCategory::Other => domain::ExpenseCategory::Other,
    }
}

/// Simple transaction mapper for converting domain transactions to log DTOs
pub struct TransactionMapper;

impl TransactionMapper {
    pub fn to_dto(domain_tx: &domain::Transaction) -> LogEntry {
        LogEntry {
            date: domain_tx.date.to_rfc3339(),
            description: domain_tx.description.clone(),
            amount: domain_tx.amount,
            category: match domain_tx.category {
                domain::TransactionCategory::Income => TransactionCategory::Income,
                domain::TransactionCategory::Expense => TransactionCategory::Expense,
            },
            expense_category: domain_tx.expense_category.map(to_shared_expense_category),
            balance: domain_tx.balance,
        }
    }
}

fn to_shared_expense_category(category: domain::ExpenseCategory) -> ExpenseCategory {
    match category {
        domain::ExpenseCategory::Food => ExpenseCategory::Food,
        domain::ExpenseCategory::Transport => ExpenseCategory::Transport,
        domain::ExpenseCategory::Entertainment => ExpenseCategory::Entertainment,
        domain::ExpenseCategory::Utilities => ExpenseCategory::Utilities,
        domain::ExpenseCategory::Other => ExpenseCategory::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_to_command_passes_raw_fields_through() {
        let request = CreateTransactionRequest {
            description: "  Coffee  ".to_string(),
            amount: " 5 ".to_string(),
            category: TransactionCategory::Expense,
            expense_category: Some(ExpenseCategory::Transport),
        };

        let command = to_command(request);
        assert_eq!(command.description, "  Coffee  ");
        assert_eq!(command.amount, " 5 ");
        assert_eq!(command.category, domain::TransactionCategory::Expense);
        assert_eq!(
            command.expense_category,
            Some(domain::ExpenseCategory::Transport)
        );
        assert!(command.date.is_none());
    }

    #[test]
    fn test_to_command_drops_subcategory_for_income() {
        // The form keeps its hidden selector value around; an income request
        // carrying one must not reach the domain with it
        let request = CreateTransactionRequest {
            description: "Salary".to_string(),
            amount: "100".to_string(),
            category: TransactionCategory::Income,
            expense_category: Some(ExpenseCategory::Food),
        };

        let command = to_command(request);
        assert_eq!(command.category, domain::TransactionCategory::Income);
        assert_eq!(command.expense_category, None);
    }

    #[test]
    fn test_to_dto_formats_date_as_rfc3339() {
        let date = Local.with_ymd_and_hms(2026, 1, 5, 9, 30, 0).unwrap();
        let transaction = domain::Transaction {
            date,
            description: "Salary".to_string(),
            amount: 100.0,
            balance: 95.0,
            category: domain::TransactionCategory::Income,
            expense_category: None,
        };

        let entry = TransactionMapper::to_dto(&transaction);
        assert_eq!(entry.date, date.to_rfc3339());
        assert_eq!(entry.description, "Salary");
        assert_eq!(entry.amount, 100.0);
        assert_eq!(entry.balance, 95.0);
        assert!(entry.is_income());
        assert_eq!(entry.expense_category, None);
    }
}
