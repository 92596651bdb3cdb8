use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use log::warn;

use tally_core::IncomeFigures;
use tally_ingest::SourceKind;
use tally_ledger::{LedgerWriter, aggregate};

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Personal budget statement importer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a bank statement export into the monthly ledgers
    Import {
        /// Source bank (code, alias, or name; see `tally sources`)
        #[arg(short, long)]
        bank: String,

        /// Path to the statement export file
        #[arg(short, long)]
        file: PathBuf,

        /// Year for statements that do not carry one (default: current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Salary amount for this period
        #[arg(short, long)]
        salary: Option<f64>,

        /// Capital gains amount for this period
        #[arg(short = 'i', long)]
        capital_gains: Option<f64>,

        /// Other income amount for this period
        #[arg(short, long)]
        other_income: Option<f64>,

        /// Directory the ledgers are written to
        #[arg(long, default_value = "actual")]
        out_dir: PathBuf,
    },

    /// List the known statement sources
    Sources,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Import {
            bank,
            file,
            year,
            salary,
            capital_gains,
            other_income,
            out_dir,
        } => {
            let income = IncomeFigures {
                salary,
                capital_gains,
                other_income,
            };
            import(&bank, &file, year, income, &out_dir)?;
        }

        Command::Sources => {
            for source in SourceKind::ALL {
                let status = if source.extractor().is_ok() {
                    ""
                } else {
                    "  (not supported yet)"
                };
                println!(
                    "{:>2}  {:<5} {}{}",
                    source.code(),
                    source.alias(),
                    source.name(),
                    status
                );
            }
        }
    }

    Ok(())
}

fn import(
    bank: &str,
    file: &Path,
    year: Option<i32>,
    income: IncomeFigures,
    out_dir: &Path,
) -> Result<()> {
    if !file.exists() {
        bail!("statement not found: {}", file.display());
    }

    let source = SourceKind::resolve(bank)?;
    let extractor = source.extractor()?;

    // The only wall-clock read in the tool; everything downstream takes the
    // year as an argument.
    let year = year.unwrap_or_else(|| chrono::Local::now().year());

    let rows = extractor
        .extract(file, year)
        .with_context(|| format!("extracting {} statement {}", source, file.display()))?;

    let buckets = aggregate(&rows, year);
    if buckets.is_empty() {
        warn!("no qualifying transactions found in {}", file.display());
        return Ok(());
    }

    let writer = LedgerWriter::new(out_dir);
    let touched = writer.commit(&buckets, &income)?;

    println!(
        "Imported {} {} transaction(s) from {}",
        touched
            .iter()
            .map(|key| buckets[key].len())
            .sum::<usize>(),
        source,
        file.display()
    );
    for key in &touched {
        println!("  {} -> {}", key, writer.ledger_path(*key).display());
    }

    Ok(())
}
