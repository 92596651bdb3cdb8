//! Calendar months and the (month, year) key ledgers are filed under.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Month of the year, 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Month number, 1..=12.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Three-letter abbreviation as it appears in statement dates and
    /// ledger file names (e.g. "Nov").
    pub fn abbrev(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Full month name (e.g. "November").
    pub fn name(self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }

    pub fn from_number(n: u32) -> Option<Month> {
        match n {
            1..=12 => Some(Month::ALL[(n - 1) as usize]),
            _ => None,
        }
    }

    /// Parse a statement month label. Banks are inconsistent about casing
    /// and abbreviation, so any label whose first three letters match an
    /// abbreviation is accepted ("Nov", "NOV", "November").
    pub fn from_label(label: &str) -> Option<Month> {
        let prefix = label.trim().get(..3)?;
        Month::ALL
            .into_iter()
            .find(|m| m.abbrev().eq_ignore_ascii_case(prefix))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Filing key for a ledger: one calendar month of one year.
///
/// Ordering is chronological (year first), so iterating a sorted map of
/// keys visits periods in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    pub year: i32,
    pub month: Month,
}

impl MonthYear {
    pub fn new(month: Month, year: i32) -> MonthYear {
        MonthYear { year, month }
    }

    /// File stem the ledger for this period is stored under, e.g. "Nov_2023".
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.month.abbrev(), self.year)
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.abbrev(), self.year)
    }
}
