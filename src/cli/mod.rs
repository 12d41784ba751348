use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::application::{BudgetSession, calculate_loan};
use crate::domain::{
    Category, Cents, LoanParameters, PaymentFrequency, TransactionKind, format_cents, parse_amount,
};

/// Moneta - Budget Tracker & Loan Calculator
#[derive(Parser)]
#[command(name = "moneta")]
#[command(about = "A session-based budget tracker and amortized-loan calculator")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open an interactive budget tracking session (in-memory, discarded on exit)
    Budget,

    /// Compute the payment schedule for a fixed-rate amortizing loan
    Loan {
        /// Loan principal in currency units (minimum 100)
        #[arg(short, long)]
        principal: f64,

        /// Annual interest rate in percent (1.0 - 20.0)
        #[arg(short, long)]
        rate: f64,

        /// Loan term in years (1 - 30)
        #[arg(short, long)]
        years: u32,

        /// Payment frequency: monthly, quarterly, yearly
        #[arg(short, long, default_value = "monthly")]
        frequency: String,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Budget => run_budget_session(self.verbose),

            Commands::Loan {
                principal,
                rate,
                years,
                frequency,
                format,
            } => run_loan_command(principal, rate, years, &frequency, &format, self.verbose),
        }
    }
}

// ========================
// Budget session
// ========================

const SESSION_HELP: &str = "\
Commands:
  add <date> <category> <amount> <income|expense>   Record a transaction
                                                    e.g. add 2024-03-15 food 25.50 expense
  list                                              Show all transactions
  summary                                           Totals and expense breakdown
  export <csv|json> [path]                          Export the session (stdout if no path)
  help                                              Show this help
  quit                                              End the session (discards everything)";

enum SessionControl {
    Continue,
    Quit,
}

fn run_budget_session(verbose: bool) -> Result<()> {
    let mut session = BudgetSession::new();
    let mut editor = DefaultEditor::new()?;

    println!("Budget session started. Transactions live in memory until you quit.");
    println!("Type 'help' for commands.");

    loop {
        match editor.readline("budget> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line).ok();

                match handle_session_line(&mut session, line, verbose) {
                    Ok(SessionControl::Continue) => {}
                    Ok(SessionControl::Quit) => break,
                    // Report and keep the session alive: a rejected command
                    // must not cost the user their ledger
                    Err(err) => eprintln!("Error: {err:#}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    println!("Session ended. {} transaction(s) discarded.", session.len());
    Ok(())
}

fn handle_session_line(
    session: &mut BudgetSession,
    line: &str,
    verbose: bool,
) -> Result<SessionControl> {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(SessionControl::Continue);
    };
    let args: Vec<&str> = tokens.collect();

    match command.to_lowercase().as_str() {
        "add" => run_session_add(session, &args, verbose)?,
        "list" => run_session_list(session),
        "summary" => run_session_summary(session),
        "export" => run_session_export(session, &args)?,
        "help" => println!("{SESSION_HELP}"),
        "quit" | "exit" => return Ok(SessionControl::Quit),
        other => println!("Unknown command '{other}'. Type 'help' for commands."),
    }

    Ok(SessionControl::Continue)
}

fn run_session_add(session: &mut BudgetSession, args: &[&str], verbose: bool) -> Result<()> {
    let [date_str, category_str, amount_str, kind_str] = args else {
        anyhow::bail!("Usage: add <date> <category> <amount> <income|expense>");
    };

    let date = parse_date(date_str)?;
    let category = Category::from_str(category_str).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid category '{}'. Valid categories: food, transport, housing, entertainment, utilities, other",
            category_str
        )
    })?;
    let amount_cents =
        parse_amount(amount_str).context("Invalid amount. Use a positive value like '25.50' or '25'")?;
    let kind = TransactionKind::from_str(kind_str).ok_or_else(|| {
        anyhow::anyhow!("Invalid transaction kind '{}'. Use 'income' or 'expense'", kind_str)
    })?;

    let transaction = session.add_transaction(date, category, amount_cents, kind)?;

    println!(
        "Recorded {}: {} on {} ({})",
        transaction.kind,
        colored_amount(transaction.amount_cents),
        transaction.date.format("%Y-%m-%d"),
        transaction.category
    );
    if verbose {
        eprintln!("[session] {} transaction(s) in ledger", session.len());
    }
    Ok(())
}

fn run_session_list(session: &BudgetSession) {
    if session.is_empty() {
        println!("No transactions yet.");
        return;
    }

    println!(
        "{:<12} {:<15} {:<8} {:>12}",
        "DATE", "CATEGORY", "KIND", "AMOUNT"
    );
    println!("{}", "-".repeat(50));

    for transaction in session.transactions() {
        // Pad before coloring: ANSI escapes would break width formatting
        let amount = format!("{:>12}", format_cents(transaction.amount_cents));
        let amount = if transaction.is_income() {
            amount.green()
        } else {
            amount.red()
        };

        println!(
            "{:<12} {:<15} {:<8} {}",
            transaction.date.format("%Y-%m-%d").to_string(),
            transaction.category.to_string(),
            transaction.kind.to_string(),
            amount
        );
    }
}

fn run_session_summary(session: &BudgetSession) {
    let Some(summary) = session.summarize() else {
        println!("No transactions yet. Add one before asking for a summary.");
        return;
    };

    println!("Financial Summary");
    println!();
    println!("Total Income:   {:>12}", format_cents(summary.total_income));
    println!(
        "Total Expenses: {:>12}",
        format_cents(summary.total_expense)
    );
    println!("{}", "-".repeat(28));

    let net = format!("{:>12}", format_cents(summary.net_balance));
    let net = if summary.net_balance < 0 {
        net.red()
    } else {
        net.green()
    };
    println!("Net Balance:    {net}");

    // No expenses, no breakdown: skip the section entirely
    if summary.expense_breakdown.is_empty() {
        return;
    }

    println!();
    println!("Expense Breakdown:");
    for share in &summary.expense_breakdown {
        println!(
            "  {:<15} {:>12} {:>6.1}%  {}",
            share.category.to_string(),
            format_cents(share.total_cents),
            share.percentage,
            proportion_bar(share.percentage)
        );
    }
}

/// 20-column bar so category shares read proportionally at a glance.
fn proportion_bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * 20.0).round() as usize;
    "#".repeat(filled.min(20))
}

fn run_session_export(session: &BudgetSession, args: &[&str]) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{Write, stdout};

    let (format, path) = match args {
        [format] => (*format, None),
        [format, path] => (*format, Some(*path)),
        _ => anyhow::bail!("Usage: export <csv|json> [path]"),
    };

    let writer: Box<dyn Write> = match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {path}"))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    let exporter = Exporter::new(session);

    match format {
        "csv" => {
            let count = exporter.export_transactions_csv(writer)?;
            if path.is_some() {
                eprintln!("Exported {count} transaction(s)");
            }
        }
        "json" => {
            exporter.export_session_json(writer)?;
            if path.is_some() {
                eprintln!("Exported session snapshot");
            }
        }
        other => {
            anyhow::bail!("Invalid export format '{}'. Valid formats: csv, json", other);
        }
    }

    Ok(())
}

// ========================
// Loan calculator
// ========================

fn run_loan_command(
    principal: f64,
    rate: f64,
    years: u32,
    frequency: &str,
    format: &str,
    verbose: bool,
) -> Result<()> {
    let frequency = PaymentFrequency::from_str(frequency).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid frequency '{}'. Valid frequencies: monthly, quarterly, yearly",
            frequency
        )
    })?;

    let params = LoanParameters {
        principal,
        annual_rate_percent: rate,
        term_years: years,
        frequency,
    };

    let result = calculate_loan(&params)?;

    if verbose {
        eprintln!(
            "[loan] periodic rate {:.6} over {} payment(s)",
            result.periodic_rate, result.total_payments
        );
    }

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "csv" => {
            println!("payment,total_paid,total_interest,total_payments");
            println!(
                "{:.2},{:.2},{:.2},{}",
                result.payment, result.total_paid, result.total_interest, result.total_payments
            );
        }
        _ => {
            println!("Loan Payment Details");
            println!(
                "Principal: {:.2} at {:.1}% over {} year(s), {} {} payment(s)",
                params.principal,
                params.annual_rate_percent,
                params.term_years,
                result.total_payments,
                params.frequency
            );
            println!();
            println!(
                "{:<18} {:>12.2}",
                format!("{} payment:", frequency_label(params.frequency)),
                result.payment
            );
            println!("{:<18} {:>12.2}", "Total paid:", result.total_paid);
            println!("{:<18} {:>12.2}", "Total interest:", result.total_interest);
        }
    }

    Ok(())
}

fn frequency_label(frequency: PaymentFrequency) -> &'static str {
    match frequency {
        PaymentFrequency::Monthly => "Monthly",
        PaymentFrequency::Quarterly => "Quarterly",
        PaymentFrequency::Yearly => "Yearly",
    }
}

// ========================
// Shared helpers
// ========================

/// Income renders green, expense red, matching the sign convention.
fn colored_amount(cents: Cents) -> ColoredString {
    let formatted = format_cents(cents);
    if cents < 0 {
        formatted.red()
    } else {
        formatted.green()
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").context("Date must be in YYYY-MM-DD format")
}
