//! Capital One statement parser (saved HTML transactions page)
//!
//! Expected markup, one fragment per transaction:
//!   <div class="c1-ease-table__body">
//!     <div>
//!       <span class="c1-ease-txns-date-and-status__month">Nov</span>
//!       <span class="c1-ease-txns-date-and-status__day">5</span>
//!       <div class="c1-ease-txns-description__description">Coffee Shop</div>
//!       <span class="c1-ease-card-transactions-view-table__rewards-category">Dining</span>
//!       <c1-ease-cell class="c1-ease-card-transactions-view-table__amount">
//!         <span>$4.50</span>
//!       </c1-ease-cell>
//!     </div>
//!   </div>

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};

use super::{element_text, strip_currency};
use crate::source::Extractor;
use crate::types::RawRow;

fn table_body_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("div.c1-ease-table__body").expect("invalid table selector"))
}

fn month_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("span.c1-ease-txns-date-and-status__month").expect("invalid month selector")
    })
}

fn day_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("span.c1-ease-txns-date-and-status__day").expect("invalid day selector")
    })
}

fn desc_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("div.c1-ease-txns-description__description")
            .expect("invalid description selector")
    })
}

fn category_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| {
        Selector::parse("span.c1-ease-card-transactions-view-table__rewards-category")
            .expect("invalid category selector")
    })
}

fn amount_sel() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    // The amount cell is a custom element wrapping the printed value in a span.
    SEL.get_or_init(|| {
        Selector::parse("c1-ease-cell.c1-ease-card-transactions-view-table__amount span")
            .expect("invalid amount selector")
    })
}

/// Parse a saved Capital One transactions page into candidate rows.
///
/// Each direct child of a table body that carries any text is treated as a
/// row; absent sub-fields come back as `None` rather than dropping the row.
pub fn parse_capital_one_html(html: &str) -> Vec<RawRow> {
    let doc = Html::parse_document(html);
    let mut out = Vec::new();

    for table in doc.select(table_body_sel()) {
        for row in table.children().filter_map(ElementRef::wrap) {
            // Spacer fragments carry no text at all.
            if row.text().all(|t| t.trim().is_empty()) {
                continue;
            }

            out.push(RawRow {
                day: element_text(row, day_sel()),
                month: element_text(row, month_sel()),
                description: element_text(row, desc_sel()),
                category: element_text(row, category_sel()),
                amount: element_text(row, amount_sel()).map(strip_currency),
                year: None,
            });
        }
    }

    out
}

/// Capital One pages carry no year anywhere in the markup, so rows rely on
/// the caller-supplied year downstream.
pub struct CapitalOneHtml;

impl Extractor for CapitalOneHtml {
    fn extract(&self, path: &Path, _year: i32) -> Result<Vec<RawRow>> {
        let html =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Ok(parse_capital_one_html(&html))
    }
}
