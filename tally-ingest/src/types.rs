/// Unvalidated candidate row produced by a statement parser (bank-agnostic).
///
/// Every sub-field a statement page may or may not carry is an `Option`:
/// parsers report exactly what they found and leave the missing-field and
/// sign policy to the aggregator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// Day of month as printed, e.g. "5".
    pub day: Option<String>,
    /// Month label as printed, e.g. "Nov".
    pub month: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Amount with currency formatting stripped but sign intact, e.g. "-12.00".
    pub amount: Option<String>,
    /// Set when the statement itself carries the year; takes precedence over
    /// the caller-supplied year downstream.
    pub year: Option<i32>,
}
