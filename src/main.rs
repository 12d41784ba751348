use anyhow::Result;
use clap::Parser;
use moneta::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
