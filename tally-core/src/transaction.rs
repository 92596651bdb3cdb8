//! Canonical transaction record and the manually supplied income figures.

use crate::month::{Month, MonthYear};
use serde::{Deserialize, Serialize};

/// A single validated statement transaction, as it appears in a ledger row.
///
/// Constructed transiently per import run; only the serialized CSV row
/// survives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Display date in the fixed "{day} {Mon} {year}" form, e.g. "5 Nov 2023".
    pub date: String,
    pub description: String,
    pub category: String,
    /// Spend amount. Always finite and non-negative once past the aggregator.
    pub amount: f64,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Transaction {
        Transaction {
            date: date.into(),
            description: description.into(),
            category: category.into(),
            amount,
        }
    }

    /// Build a transaction dated with the fixed display form.
    pub fn dated(
        day: &str,
        month: Month,
        year: i32,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Transaction {
        Transaction::new(
            format!("{} {} {}", day.trim(), month.abbrev(), year),
            description,
            category,
            amount,
        )
    }

    /// The (month, year) key this transaction files under, recovered from
    /// the date string.
    pub fn month_year(&self) -> Option<MonthYear> {
        let mut tokens = self.date.split_whitespace();
        let _day = tokens.next()?;
        let month = Month::from_label(tokens.next()?)?;
        let year = tokens.next()?.parse().ok()?;
        Some(MonthYear::new(month, year))
    }
}

/// Income figures supplied by the user per run; they never come from a
/// statement. `None` means "omit that ledger row", not zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IncomeFigures {
    pub salary: Option<f64>,
    pub capital_gains: Option<f64>,
    pub other_income: Option<f64>,
}

impl IncomeFigures {
    pub fn is_empty(&self) -> bool {
        self.salary.is_none() && self.capital_gains.is_none() && self.other_income.is_none()
    }

    /// (description, category, amount) ledger rows for the supplied figures,
    /// in the fixed order Salary, Investments, Other Income.
    pub fn rows(&self) -> Vec<(&'static str, &'static str, f64)> {
        let mut out = Vec::new();
        if let Some(v) = self.salary {
            out.push(("Salary Income", "Salary", v));
        }
        if let Some(v) = self.capital_gains {
            out.push(("Investments", "Investments", v));
        }
        if let Some(v) = self.other_income {
            out.push(("Other Income", "Other Income", v));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_display_form() {
        let t = Transaction::dated("5", Month::Nov, 2023, "Coffee Shop", "Dining", 4.5);
        assert_eq!(t.date, "5 Nov 2023");
        assert_eq!(t.month_year(), Some(MonthYear::new(Month::Nov, 2023)));
    }

    #[test]
    fn test_month_year_rejects_malformed_dates() {
        let t = Transaction::new("sometime in fall", "x", "y", 1.0);
        assert_eq!(t.month_year(), None);
    }

    #[test]
    fn test_income_rows_fixed_order() {
        let income = IncomeFigures {
            salary: Some(5000.0),
            capital_gains: Some(120.0),
            other_income: Some(400.0),
        };
        let rows = income.rows();
        assert_eq!(
            rows,
            vec![
                ("Salary Income", "Salary", 5000.0),
                ("Investments", "Investments", 120.0),
                ("Other Income", "Other Income", 400.0),
            ]
        );
    }

    #[test]
    fn test_income_rows_skip_missing_figures() {
        let income = IncomeFigures {
            salary: Some(5000.0),
            capital_gains: None,
            other_income: Some(400.0),
        };
        let rows = income.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "Salary Income");
        assert_eq!(rows[1].0, "Other Income");
        assert!(IncomeFigures::default().is_empty());
    }
}
