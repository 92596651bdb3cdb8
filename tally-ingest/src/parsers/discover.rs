//! Discover statement parser (saved HTML transactions page)
//!
//! Expected markup, one `tr` per transaction:
//!   <table id="transactions-table"><tbody>
//!     <tr id="transaction-1">
//!       <td class="trans-date">11/05/23</td>
//!       <td class="desc"><a class="transaction-detail-toggler">COFFEE SHOP</a></td>
//!       <td class="ctg">Dining</td>
//!       <td class="amt">$4.50</td>
//!     </tr>
//!   </tbody></table>

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use scraper::{Html, Selector};

use super::{element_text, strip_currency};
use crate::source::Extractor;
use crate::types::RawRow;

fn row_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("table#transactions-table tbody tr").expect("invalid row selector")
    })
}

fn date_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("td.trans-date").expect("invalid date selector"))
}

fn desc_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("td.desc a.transaction-detail-toggler")
            .expect("invalid description selector")
    })
}

fn category_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("td.ctg").expect("invalid category selector"))
}

fn amount_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("td.amt").expect("invalid amount selector"))
}

/// Parse a saved Discover transactions page into candidate rows.
///
/// Only `tr` elements whose id matches `transaction-<n>` are transaction
/// rows; the table mixes in detail/summary rows that must be ignored.
pub fn parse_discover_html(html: &str) -> Result<Vec<RawRow>> {
    let row_id_re = Regex::new(r"^transaction-\d+$")?;
    let doc = Html::parse_document(html);
    let mut out = Vec::new();

    for row in doc.select(row_sel()) {
        let Some(id) = row.value().attr("id") else {
            continue;
        };
        if !row_id_re.is_match(id) {
            continue;
        }

        // Discover dates itself fully ("11/05/23"); the parsed date supplies
        // day, month label, and a per-row year override.
        let date = element_text(row, date_sel())
            .and_then(|s| NaiveDate::parse_from_str(&s, "%m/%d/%y").ok());
        let (day, month, year) = match date {
            Some(d) => (
                Some(d.day().to_string()),
                Some(d.format("%b").to_string()),
                Some(d.year()),
            ),
            None => (None, None, None),
        };

        out.push(RawRow {
            day,
            month,
            description: element_text(row, desc_sel()),
            category: element_text(row, category_sel()),
            amount: element_text(row, amount_sel()).map(strip_currency),
            year,
        });
    }

    Ok(out)
}

pub struct DiscoverHtml;

impl Extractor for DiscoverHtml {
    fn extract(&self, path: &Path, _year: i32) -> Result<Vec<RawRow>> {
        let html =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        parse_discover_html(&html)
    }
}
