use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::BudgetSession;
use crate::domain::{Summary, Transaction};

/// Point-in-time snapshot of a budget session for JSON export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub exported_at: DateTime<Utc>,
    pub transactions: Vec<Transaction>,
    /// Absent when the session ledger is empty
    pub summary: Option<Summary>,
}

/// Write-only view over a session for turning ledger data into CSV or JSON.
/// Exporting is a report of the current session, not a persistence
/// mechanism: there is no matching import.
pub struct Exporter<'a> {
    session: &'a BudgetSession,
}

impl<'a> Exporter<'a> {
    pub fn new(session: &'a BudgetSession) -> Self {
        Self { session }
    }

    /// Export transactions to CSV, one row per ledger entry with the
    /// stored signed amount. Returns the number of rows written.
    pub fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "date", "category", "kind", "amount_cents"])?;

        let mut count = 0;
        for transaction in self.session.transactions() {
            csv_writer.write_record([
                transaction.id.to_string(),
                transaction.date.format("%Y-%m-%d").to_string(),
                transaction.category.to_string(),
                transaction.kind.to_string(),
                transaction.amount_cents.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the whole session (transactions plus the current summary) as
    /// pretty-printed JSON. Returns the snapshot that was written.
    pub fn export_session_json<W: Write>(&self, mut writer: W) -> Result<SessionSnapshot> {
        let snapshot = SessionSnapshot {
            exported_at: Utc::now(),
            transactions: self.session.transactions().to_vec(),
            summary: self.session.summarize(),
        };

        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
        writeln!(writer)?;
        Ok(snapshot)
    }
}
