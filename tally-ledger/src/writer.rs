//! Appends aggregated transaction batches to per-month ledger files.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use tally_core::{IncomeFigures, MonthYear, Transaction};
use thiserror::Error;

pub const LEDGER_HEADER: [&str; 4] = ["Date", "Description", "Category", "Amount"];

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to write ledger {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode ledger rows for {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Writes ledgers under one output directory, one CSV per (month, year).
///
/// Ledger files are append-only: the four-column header is emitted only when
/// a file is first created, and rows from earlier runs are never re-sorted
/// or rewritten.
pub struct LedgerWriter {
    out_dir: PathBuf,
}

impl LedgerWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> LedgerWriter {
        LedgerWriter {
            out_dir: out_dir.into(),
        }
    }

    /// Ledger file path for a period, e.g. `actual/Nov_2023.csv`.
    pub fn ledger_path(&self, key: MonthYear) -> PathBuf {
        self.out_dir.join(format!("{}.csv", key.file_stem()))
    }

    /// Append each bucket to its ledger, followed by the manual income rows.
    ///
    /// The batch is sorted ascending by date string before writing (stable:
    /// ties keep extraction order) and lands in the file as a single append,
    /// so a failure cannot leave a header without its rows. Income rows are
    /// written on every run that supplies them, with no de-duplication
    /// against earlier runs: re-importing the same month with the same
    /// figures repeats them.
    ///
    /// Returns the keys written, in chronological order, for the caller to
    /// drive downstream reporting.
    pub fn commit(
        &self,
        buckets: &BTreeMap<MonthYear, Vec<Transaction>>,
        income: &IncomeFigures,
    ) -> Result<Vec<MonthYear>, LedgerError> {
        let mut touched = Vec::with_capacity(buckets.len());

        for (key, batch) in buckets {
            let path = self.ledger_path(*key);
            self.append_batch(&path, batch, income)?;
            info!("appended {} transaction rows to {}", batch.len(), path.display());
            touched.push(*key);
        }

        Ok(touched)
    }

    fn append_batch(
        &self,
        path: &Path,
        batch: &[Transaction],
        income: &IncomeFigures,
    ) -> Result<(), LedgerError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| LedgerError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        let add_header = !path.exists();

        let mut sorted: Vec<&Transaction> = batch.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));

        // Encode the whole batch (header included) in memory first so the
        // file sees exactly one append.
        let mut buf = Vec::new();
        {
            let mut wtr = csv::Writer::from_writer(&mut buf);
            let encode_err = |source| LedgerError::Encode {
                path: path.to_path_buf(),
                source,
            };

            if add_header {
                wtr.write_record(LEDGER_HEADER).map_err(encode_err)?;
            }
            for txn in sorted {
                let amount = txn.amount.to_string();
                wtr.write_record([
                    txn.date.as_str(),
                    txn.description.as_str(),
                    txn.category.as_str(),
                    amount.as_str(),
                ])
                .map_err(encode_err)?;
            }
            for (description, category, amount) in income.rows() {
                let amount = amount.to_string();
                wtr.write_record(["", description, category, amount.as_str()])
                    .map_err(encode_err)?;
            }
            wtr.flush().map_err(|source| LedgerError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LedgerError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        file.write_all(&buf).map_err(|source| LedgerError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
