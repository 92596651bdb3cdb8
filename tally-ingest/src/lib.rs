//! tally-ingest: statement ingestion abstractions (saved HTML exports) and
//! bank-specific parsers.

pub mod parsers;
pub mod source;
pub mod types;

pub use source::{Extractor, SourceError, SourceKind};
pub use types::RawRow;
