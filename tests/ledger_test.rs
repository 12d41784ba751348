mod common;

use common::{parse_date, sample_session};
use moneta::application::{AppError, BudgetSession};
use moneta::domain::{Category, TransactionKind};

#[test]
fn test_income_is_stored_positive() {
    let mut session = BudgetSession::new();

    let transaction = session
        .add_transaction(
            parse_date("2024-03-01"),
            Category::Other,
            250_000,
            TransactionKind::Income,
        )
        .unwrap();

    assert_eq!(transaction.amount_cents, 250_000);
    assert_eq!(transaction.kind, TransactionKind::Income);
}

#[test]
fn test_expense_is_stored_negated() {
    let mut session = BudgetSession::new();

    let transaction = session
        .add_transaction(
            parse_date("2024-03-05"),
            Category::Food,
            12_550,
            TransactionKind::Expense,
        )
        .unwrap();

    assert_eq!(transaction.amount_cents, -12_550);
    assert_eq!(transaction.kind, TransactionKind::Expense);
}

#[test]
fn test_non_positive_amount_is_rejected_and_not_recorded() {
    let mut session = BudgetSession::new();

    for bad_amount in [0, -1, -2550] {
        let result = session.add_transaction(
            parse_date("2024-03-01"),
            Category::Food,
            bad_amount,
            TransactionKind::Expense,
        );
        assert!(matches!(result, Err(AppError::InvalidAmount(_))));
    }

    // No partial transaction may survive a rejected submission
    assert!(session.is_empty());
    assert!(session.summarize().is_none());
}

#[test]
fn test_transactions_keep_insertion_order() {
    let session = sample_session();

    let dates: Vec<String> = session
        .transactions()
        .iter()
        .map(|t| t.date.format("%Y-%m-%d").to_string())
        .collect();

    assert_eq!(
        dates,
        vec![
            "2024-03-01",
            "2024-03-03",
            "2024-03-05",
            "2024-03-10",
            "2024-03-12",
            "2024-03-20",
        ]
    );
}

#[test]
fn test_summary_totals_and_net_balance() {
    let session = sample_session();
    let summary = session.summarize().unwrap();

    assert_eq!(summary.total_income, 280_000);
    assert_eq!(summary.total_expense, 115_250);
    assert_eq!(summary.net_balance, 164_750);
    assert_eq!(
        summary.net_balance,
        summary.total_income - summary.total_expense
    );
}

#[test]
fn test_breakdown_sums_to_total_expense_exactly() {
    let session = sample_session();
    let summary = session.summarize().unwrap();

    let breakdown_total: i64 = summary
        .expense_breakdown
        .iter()
        .map(|share| share.total_cents)
        .sum();

    assert_eq!(breakdown_total, summary.total_expense);
}

#[test]
fn test_breakdown_is_expense_only_and_sorted() {
    let session = sample_session();
    let summary = session.summarize().unwrap();

    // Housing 900.00 > Food 207.50 > Transport 45.00; income categories absent
    let categories: Vec<Category> = summary
        .expense_breakdown
        .iter()
        .map(|share| share.category)
        .collect();
    assert_eq!(
        categories,
        vec![Category::Housing, Category::Food, Category::Transport]
    );

    let housing = &summary.expense_breakdown[0];
    assert_eq!(housing.total_cents, 90_000);
    assert!((housing.percentage - 90_000.0 / 115_250.0 * 100.0).abs() < 1e-9);
}

#[test]
fn test_empty_session_summarize_is_none() {
    let session = BudgetSession::new();

    assert!(session.is_empty());
    assert_eq!(session.len(), 0);
    assert!(session.summarize().is_none());
}

#[test]
fn test_expense_only_session_defaults_income_to_zero() {
    let mut session = BudgetSession::new();
    session
        .add_transaction(
            parse_date("2024-03-05"),
            Category::Utilities,
            7_800,
            TransactionKind::Expense,
        )
        .unwrap();

    let summary = session.summarize().unwrap();
    assert_eq!(summary.total_income, 0);
    assert_eq!(summary.total_expense, 7_800);
    assert_eq!(summary.net_balance, -7_800);
}

#[test]
fn test_income_only_session_skips_breakdown() {
    let mut session = BudgetSession::new();
    session
        .add_transaction(
            parse_date("2024-03-01"),
            Category::Other,
            50_000,
            TransactionKind::Income,
        )
        .unwrap();

    let summary = session.summarize().unwrap();
    assert_eq!(summary.total_expense, 0);
    assert!(summary.expense_breakdown.is_empty());
}

#[test]
fn test_summarize_recomputes_after_each_addition() {
    let mut session = BudgetSession::new();

    session
        .add_transaction(
            parse_date("2024-03-01"),
            Category::Other,
            100_000,
            TransactionKind::Income,
        )
        .unwrap();
    assert_eq!(session.summarize().unwrap().net_balance, 100_000);

    session
        .add_transaction(
            parse_date("2024-03-02"),
            Category::Food,
            40_000,
            TransactionKind::Expense,
        )
        .unwrap();
    assert_eq!(session.summarize().unwrap().net_balance, 60_000);
}
