use chrono::NaiveDate;

use crate::domain::{
    self, Category, Cents, LoanParameters, PaymentResult, Summary, Transaction, TransactionKind,
    MAX_RATE_PERCENT, MAX_TERM_YEARS, MIN_PRINCIPAL, MIN_RATE_PERCENT, MIN_TERM_YEARS,
    compute_payment,
};

use super::AppError;

/// Session-scoped transaction ledger. One instance per session, owned by
/// the caller; dropping it ends the session and discards every entry.
/// This is the primary interface for any client (CLI, API, TUI, etc.).
pub struct BudgetSession {
    transactions: Vec<Transaction>,
}

impl BudgetSession {
    /// Start a session with an empty ledger.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// Validate and append a transaction. `amount_cents` is the unsigned
    /// input amount; the stored amount is signed by the kind. On a
    /// validation failure nothing is recorded.
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        category: Category,
        amount_cents: Cents,
        kind: TransactionKind,
    ) -> Result<Transaction, AppError> {
        if amount_cents <= 0 {
            return Err(AppError::InvalidAmount(
                "Amount must be positive".to_string(),
            ));
        }

        let transaction = Transaction::new(date, category, amount_cents, kind);
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Recompute the summary from the current ledger contents. None for an
    /// empty ledger.
    pub fn summarize(&self) -> Option<Summary> {
        domain::summarize(&self.transactions)
    }
}

impl Default for BudgetSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate loan parameters against the documented input bounds, then run
/// the pure payment computation.
pub fn calculate_loan(params: &LoanParameters) -> Result<PaymentResult, AppError> {
    if !(MIN_PRINCIPAL..).contains(&params.principal) {
        return Err(AppError::PrincipalOutOfRange(params.principal));
    }
    if !(MIN_RATE_PERCENT..=MAX_RATE_PERCENT).contains(&params.annual_rate_percent) {
        return Err(AppError::RateOutOfRange(params.annual_rate_percent));
    }
    if !(MIN_TERM_YEARS..=MAX_TERM_YEARS).contains(&params.term_years) {
        return Err(AppError::TermOutOfRange(params.term_years));
    }

    Ok(compute_payment(params))
}
