//! Known statement sources: lookup by user-supplied identifier and dispatch
//! to the parser that understands each bank's export format.

use std::fmt;
use std::path::Path;

use anyhow::Result;
use thiserror::Error;

use crate::parsers::capital_one::CapitalOneHtml;
use crate::parsers::discover::DiscoverHtml;
use crate::types::RawRow;

#[derive(Debug, PartialEq, Error)]
pub enum SourceError {
    /// The identifier matched no known bank.
    #[error("unknown transaction source \"{0}\"")]
    UnknownSource(String),
    /// The bank is recognized but has no parser yet.
    #[error("{0} statements are not supported yet")]
    NotImplemented(SourceKind),
}

/// A bank whose statement exports this tool understands (or at least names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    CapitalOne,
    Discover,
    Sofi,
    BankOfAmerica,
}

/// One statement parser: reads an export file and yields unvalidated
/// candidate rows. Implementations do format parsing only; sign and
/// missing-field policy belong to the aggregator.
pub trait Extractor {
    /// `year` is for statement formats that omit it from their rows;
    /// parsers that recover the year from the page itself set
    /// `RawRow::year` instead and may ignore the argument.
    fn extract(&self, path: &Path, year: i32) -> Result<Vec<RawRow>>;
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::CapitalOne,
        SourceKind::Discover,
        SourceKind::Sofi,
        SourceKind::BankOfAmerica,
    ];

    pub fn code(self) -> u8 {
        match self {
            SourceKind::CapitalOne => 1,
            SourceKind::Discover => 2,
            SourceKind::Sofi => 3,
            SourceKind::BankOfAmerica => 4,
        }
    }

    /// Short identifier accepted on the command line.
    pub fn alias(self) -> &'static str {
        match self {
            SourceKind::CapitalOne => "c1",
            SourceKind::Discover => "disc",
            SourceKind::Sofi => "sofi",
            SourceKind::BankOfAmerica => "bofa",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SourceKind::CapitalOne => "Capital One",
            SourceKind::Discover => "Discover",
            SourceKind::Sofi => "SoFi",
            SourceKind::BankOfAmerica => "Bank of America",
        }
    }

    /// Look a bank up by numeric code, short alias, or display name,
    /// case-insensitively.
    pub fn resolve(identifier: &str) -> Result<SourceKind, SourceError> {
        let needle = identifier.trim().to_lowercase();
        SourceKind::ALL
            .into_iter()
            .find(|s| {
                needle == s.code().to_string()
                    || needle == s.alias()
                    || needle == s.name().to_lowercase()
            })
            .ok_or_else(|| SourceError::UnknownSource(identifier.trim().to_string()))
    }

    /// The parser for this bank's exports. Adding a bank means adding an
    /// arm here and a module under `parsers/`; nothing downstream changes.
    pub fn extractor(self) -> Result<Box<dyn Extractor>, SourceError> {
        match self {
            SourceKind::CapitalOne => Ok(Box::new(CapitalOneHtml)),
            SourceKind::Discover => Ok(Box::new(DiscoverHtml)),
            SourceKind::Sofi | SourceKind::BankOfAmerica => {
                Err(SourceError::NotImplemented(self))
            }
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_accepts_code_alias_and_name() {
        for id in ["c1", "C1", "Capital One", "capital one", "1"] {
            assert_eq!(SourceKind::resolve(id), Ok(SourceKind::CapitalOne), "{id}");
        }
        assert_eq!(SourceKind::resolve("DISC"), Ok(SourceKind::Discover));
        assert_eq!(SourceKind::resolve("Bank of America"), Ok(SourceKind::BankOfAmerica));
        assert_eq!(SourceKind::resolve(" 3 "), Ok(SourceKind::Sofi));
    }

    #[test]
    fn test_resolve_unknown_is_an_error() {
        assert_eq!(
            SourceKind::resolve("unknown"),
            Err(SourceError::UnknownSource("unknown".to_string()))
        );
        assert_eq!(
            SourceKind::resolve("5"),
            Err(SourceError::UnknownSource("5".to_string()))
        );
    }

    #[test]
    fn test_unsupported_banks_are_distinct_from_unknown() {
        let bofa = SourceKind::resolve("bofa").unwrap();
        match bofa.extractor() {
            Err(SourceError::NotImplemented(kind)) => assert_eq!(kind, SourceKind::BankOfAmerica),
            other => panic!("expected NotImplemented, got {:?}", other.map(|_| ())),
        }
        assert!(SourceKind::CapitalOne.extractor().is_ok());
        assert!(SourceKind::Discover.extractor().is_ok());
    }

    #[test]
    fn test_not_implemented_message_names_the_bank() {
        let err = SourceKind::Sofi.extractor().err().unwrap();
        assert_eq!(err.to_string(), "SoFi statements are not supported yet");
    }
}
