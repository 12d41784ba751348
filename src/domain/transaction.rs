use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type TransactionId = Uuid;

/// Spending categories. Income entries carry a category too, but only
/// expense categories feed the breakdown report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Housing,
    Entertainment,
    Utilities,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Entertainment,
        Category::Utilities,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Housing => "housing",
            Category::Entertainment => "entertainment",
            Category::Utilities => "utilities",
            Category::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "food" => Some(Category::Food),
            "transport" => Some(Category::Transport),
            "housing" => Some(Category::Housing),
            "entertainment" => Some(Category::Entertainment),
            "utilities" => Some(Category::Utilities),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a transaction. Determines the sign of the stored amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }

    /// Apply this kind's sign convention to an unsigned amount:
    /// income stays positive, expense is stored negated.
    pub fn signed(&self, amount_cents: Cents) -> Cents {
        match self {
            TransactionKind::Income => amount_cents,
            TransactionKind::Expense => -amount_cents,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ledger entry. Transactions are immutable and append-only:
/// there is no edit or delete, and the ledger lives only for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    pub category: Category,
    /// Signed cents: positive for income, negative for expense
    pub amount_cents: Cents,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a transaction from an unsigned amount. The stored amount is
    /// signed according to the kind.
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount_cents: Cents,
        kind: TransactionKind,
    ) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self {
            id: Uuid::new_v4(),
            date,
            category,
            amount_cents: kind.signed(amount_cents),
            kind,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Positive magnitude of the stored signed amount.
    pub fn magnitude(&self) -> Cents {
        self.amount_cents.abs()
    }
}
