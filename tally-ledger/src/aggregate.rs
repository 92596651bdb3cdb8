//! Groups candidate statement rows into per-(month, year) transaction
//! buckets, applying the validation policy the parsers deliberately skip.

use std::collections::BTreeMap;

use log::debug;
use tally_core::{Month, MonthYear, Transaction};
use tally_ingest::RawRow;

/// Validate and bucket candidate rows.
///
/// A row qualifies when every sub-field is present, the month label is
/// recognizable, and the amount parses to a finite, non-negative number.
/// Negative amounts are refunds or pending credits under this pipeline's
/// convention and never reach a ledger. Disqualified rows are dropped
/// silently; only the count surfaces, at debug level.
///
/// `year` applies to rows whose statement did not carry one; a row-level
/// year (e.g. from Discover's fully dated rows) takes precedence. Bucket
/// contents keep first-seen order; the writer sorts at commit time.
pub fn aggregate(rows: &[RawRow], year: i32) -> BTreeMap<MonthYear, Vec<Transaction>> {
    let mut buckets: BTreeMap<MonthYear, Vec<Transaction>> = BTreeMap::new();
    let mut skipped = 0usize;

    for row in rows {
        match qualify(row, year) {
            Some((key, txn)) => buckets.entry(key).or_default().push(txn),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("skipped {} of {} candidate rows", skipped, rows.len());
    }

    buckets
}

fn qualify(row: &RawRow, default_year: i32) -> Option<(MonthYear, Transaction)> {
    let amount: f64 = row.amount.as_deref()?.trim().parse().ok()?;
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }

    let day = row.day.as_deref()?;
    let label = row.month.as_deref()?;
    let description = row.description.as_deref()?;
    let category = row.category.as_deref()?;

    let month = Month::from_label(label)?;
    let year = row.year.unwrap_or(default_year);

    Some((
        MonthYear::new(month, year),
        Transaction::dated(day, month, year, description, category, amount),
    ))
}
