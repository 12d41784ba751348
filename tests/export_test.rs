mod common;

use std::fs;

use anyhow::Result;
use common::sample_session;
use moneta::application::BudgetSession;
use moneta::io::{Exporter, SessionSnapshot};

#[test]
fn test_csv_export_row_count_matches_ledger() -> Result<()> {
    let session = sample_session();
    let exporter = Exporter::new(&session);

    let mut buffer = Vec::new();
    let count = exporter.export_transactions_csv(&mut buffer)?;

    assert_eq!(count, session.len());

    let output = String::from_utf8(buffer)?;
    let lines: Vec<&str> = output.lines().collect();
    // Header plus one row per transaction
    assert_eq!(lines.len(), session.len() + 1);
    assert_eq!(lines[0], "id,date,category,kind,amount_cents");

    // Signed amounts appear as stored: income positive, expense negative
    assert!(lines[1].ends_with(",2024-03-01,other,income,250000"));
    assert!(lines[2].ends_with(",2024-03-03,housing,expense,-90000"));
    Ok(())
}

#[test]
fn test_csv_export_of_empty_session_is_header_only() -> Result<()> {
    let session = BudgetSession::new();
    let exporter = Exporter::new(&session);

    let mut buffer = Vec::new();
    let count = exporter.export_transactions_csv(&mut buffer)?;

    assert_eq!(count, 0);
    let output = String::from_utf8(buffer)?;
    assert_eq!(output.lines().count(), 1);
    Ok(())
}

#[test]
fn test_json_snapshot_roundtrips() -> Result<()> {
    let session = sample_session();
    let exporter = Exporter::new(&session);

    let mut buffer = Vec::new();
    let written = exporter.export_session_json(&mut buffer)?;

    let parsed: SessionSnapshot = serde_json::from_slice(&buffer)?;

    assert_eq!(parsed.transactions.len(), session.len());
    assert_eq!(parsed.exported_at, written.exported_at);

    // The embedded summary matches a fresh recomputation
    let expected = session.summarize().unwrap();
    let summary = parsed.summary.expect("non-empty session has a summary");
    assert_eq!(summary.total_income, expected.total_income);
    assert_eq!(summary.total_expense, expected.total_expense);
    assert_eq!(summary.net_balance, expected.net_balance);
    assert_eq!(
        summary.expense_breakdown.len(),
        expected.expense_breakdown.len()
    );
    Ok(())
}

#[test]
fn test_json_snapshot_of_empty_session_has_no_summary() -> Result<()> {
    let session = BudgetSession::new();
    let exporter = Exporter::new(&session);

    let mut buffer = Vec::new();
    exporter.export_session_json(&mut buffer)?;

    let parsed: SessionSnapshot = serde_json::from_slice(&buffer)?;
    assert!(parsed.transactions.is_empty());
    assert!(parsed.summary.is_none());
    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let session = sample_session();
    let exporter = Exporter::new(&session);

    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("transactions.csv");

    let file = fs::File::create(&path)?;
    let count = exporter.export_transactions_csv(file)?;
    assert_eq!(count, session.len());

    let contents = fs::read_to_string(&path)?;
    assert_eq!(contents.lines().count(), session.len() + 1);
    Ok(())
}
