//! tally-ledger: monthly aggregation and ledger persistence for extracted
//! statement rows.

pub mod aggregate;
pub mod writer;

pub use aggregate::aggregate;
pub use writer::{LEDGER_HEADER, LedgerError, LedgerWriter};
