//! Bank-specific statement parsers.

pub mod capital_one;
pub mod discover;

use scraper::{ElementRef, Selector};

/// Text of the first element matching `sel` under `scope`, with whitespace
/// collapsed. `None` when the element is absent or empty.
pub(crate) fn element_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let el = scope.select(sel).next()?;
    let text = el
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    (!text.is_empty()).then_some(text)
}

/// Strip currency formatting ("$1,234.56" -> "1234.56"), leaving the sign.
pub(crate) fn strip_currency(s: String) -> String {
    s.replace('$', "").replace(',', "")
}
