// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use moneta::application::BudgetSession;
use moneta::domain::{Category, TransactionKind};

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Session pre-loaded with a mixed month of activity:
/// income 2800.00, expenses 1152.50 across three categories.
pub fn sample_session() -> BudgetSession {
    let mut session = BudgetSession::new();

    session
        .add_transaction(
            parse_date("2024-03-01"),
            Category::Other,
            250_000,
            TransactionKind::Income,
        )
        .unwrap();
    session
        .add_transaction(
            parse_date("2024-03-03"),
            Category::Housing,
            90_000,
            TransactionKind::Expense,
        )
        .unwrap();
    session
        .add_transaction(
            parse_date("2024-03-05"),
            Category::Food,
            12_550,
            TransactionKind::Expense,
        )
        .unwrap();
    session
        .add_transaction(
            parse_date("2024-03-10"),
            Category::Food,
            8_200,
            TransactionKind::Expense,
        )
        .unwrap();
    session
        .add_transaction(
            parse_date("2024-03-12"),
            Category::Transport,
            4_500,
            TransactionKind::Expense,
        )
        .unwrap();
    session
        .add_transaction(
            parse_date("2024-03-20"),
            Category::Other,
            30_000,
            TransactionKind::Income,
        )
        .unwrap();

    session
}
