use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Category, Cents, Transaction, TransactionKind};

/// One expense category's share of total spending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    /// Positive magnitude of spending in this category
    pub total_cents: Cents,
    /// Share of total expenses, 0.0 - 100.0
    pub percentage: f64,
}

/// Aggregate view of a session ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: Cents,
    /// Positive magnitude (expenses are stored negative)
    pub total_expense: Cents,
    /// total_income - total_expense
    pub net_balance: Cents,
    /// Expense transactions only; empty when there are none
    pub expense_breakdown: Vec<CategoryShare>,
}

/// Sum of signed amounts over income transactions. Zero when there are none.
pub fn total_income(transactions: &[Transaction]) -> Cents {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount_cents)
        .sum()
}

/// Total spending as a positive magnitude. Zero when there are no expenses.
pub fn total_expense(transactions: &[Transaction]) -> Cents {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.magnitude())
        .sum()
}

/// Net balance is the sum of all signed amounts across both kinds.
pub fn net_balance(transactions: &[Transaction]) -> Cents {
    transactions
        .iter()
        .fold(0, |balance, t| balance + t.amount_cents)
}

/// Per-category spending, expense transactions only, sorted by descending
/// total. Empty when the ledger holds no expenses.
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let mut by_category: HashMap<Category, Cents> = HashMap::new();
    for t in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
    {
        *by_category.entry(t.category).or_insert(0) += t.magnitude();
    }

    let total: Cents = by_category.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<CategoryShare> = by_category
        .into_iter()
        .map(|(category, total_cents)| CategoryShare {
            category,
            total_cents,
            percentage: (total_cents as f64 / total as f64) * 100.0,
        })
        .collect();

    // Name tie-break keeps equal totals in a stable order
    shares.sort_by(|a, b| {
        b.total_cents
            .cmp(&a.total_cents)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });
    shares
}

/// Aggregate the ledger. Returns None for an empty ledger: there is nothing
/// to aggregate and callers render a "no data" state instead.
pub fn summarize(transactions: &[Transaction]) -> Option<Summary> {
    if transactions.is_empty() {
        return None;
    }

    let total_income = total_income(transactions);
    let total_expense = total_expense(transactions);

    Some(Summary {
        total_income,
        total_expense,
        net_balance: total_income - total_expense,
        expense_breakdown: expense_breakdown(transactions),
    })
}
