//! End-to-end: saved statement HTML through extraction, aggregation, and a
//! committed ledger file.

use std::fs;

use tally_core::{IncomeFigures, Month, MonthYear};
use tally_ingest::SourceKind;
use tally_ledger::{LedgerWriter, aggregate};

const C1_STATEMENT: &str = r#"<html><body>
<div class="c1-ease-table__body">
  <div>
    <span class="c1-ease-txns-date-and-status__month">Nov</span>
    <span class="c1-ease-txns-date-and-status__day">5</span>
    <div class="c1-ease-txns-description__description">Coffee Shop</div>
    <span class="c1-ease-card-transactions-view-table__rewards-category">Dining</span>
    <c1-ease-cell class="c1-ease-card-transactions-view-table__amount"><span>$4.50</span></c1-ease-cell>
  </div>
  <div>
    <span class="c1-ease-txns-date-and-status__month">Nov</span>
    <span class="c1-ease-txns-date-and-status__day">3</span>
    <div class="c1-ease-txns-description__description">Refund</div>
    <span class="c1-ease-card-transactions-view-table__rewards-category">Dining</span>
    <c1-ease-cell class="c1-ease-card-transactions-view-table__amount"><span>-$12.00</span></c1-ease-cell>
  </div>
  <div>
    <span class="c1-ease-txns-date-and-status__month">Dec</span>
    <span class="c1-ease-txns-date-and-status__day">2</span>
    <div class="c1-ease-txns-description__description">Bookstore</div>
    <span class="c1-ease-card-transactions-view-table__rewards-category">Merchandise</span>
    <c1-ease-cell class="c1-ease-card-transactions-view-table__amount"><span>$15.00</span></c1-ease-cell>
  </div>
</div>
</body></html>"#;

#[test]
fn test_capital_one_statement_lands_in_monthly_ledgers() {
    let dir = tempfile::tempdir().unwrap();
    let statement = dir.path().join("c1_nov_23.html");
    fs::write(&statement, C1_STATEMENT).unwrap();

    let source = SourceKind::resolve("c1").unwrap();
    let rows = source.extractor().unwrap().extract(&statement, 2023).unwrap();
    assert_eq!(rows.len(), 3);

    let buckets = aggregate(&rows, 2023);
    let income = IncomeFigures {
        salary: Some(5000.0),
        capital_gains: None,
        other_income: Some(400.0),
    };

    let writer = LedgerWriter::new(dir.path().join("actual"));
    let touched = writer.commit(&buckets, &income).unwrap();
    assert_eq!(
        touched,
        vec![
            MonthYear::new(Month::Nov, 2023),
            MonthYear::new(Month::Dec, 2023),
        ]
    );

    let nov = fs::read_to_string(writer.ledger_path(touched[0])).unwrap();
    let nov_lines: Vec<&str> = nov.lines().collect();
    assert_eq!(
        nov_lines,
        vec![
            "Date,Description,Category,Amount",
            "5 Nov 2023,Coffee Shop,Dining,4.5",
            ",Salary Income,Salary,5000",
            ",Other Income,Other Income,400",
        ]
    );
    // The refund never reaches the ledger.
    assert!(!nov.contains("Refund"));

    let dec = fs::read_to_string(writer.ledger_path(touched[1])).unwrap();
    assert!(dec.contains("2 Dec 2023,Bookstore,Merchandise,15"));
}

#[test]
fn test_reimporting_appends_without_duplicating_the_header() {
    let dir = tempfile::tempdir().unwrap();
    let statement = dir.path().join("c1_nov_23.html");
    fs::write(&statement, C1_STATEMENT).unwrap();

    let source = SourceKind::resolve("Capital One").unwrap();
    let extractor = source.extractor().unwrap();
    let writer = LedgerWriter::new(dir.path().join("actual"));

    for _ in 0..2 {
        let rows = extractor.extract(&statement, 2023).unwrap();
        let buckets = aggregate(&rows, 2023);
        writer.commit(&buckets, &IncomeFigures::default()).unwrap();
    }

    let nov = fs::read_to_string(writer.ledger_path(MonthYear::new(Month::Nov, 2023))).unwrap();
    let lines: Vec<&str> = nov.lines().collect();
    assert_eq!(lines[0], "Date,Description,Category,Amount");
    // One qualifying November row per run.
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], lines[2]);
}

#[test]
fn test_statement_with_no_qualifying_rows_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let statement = dir.path().join("empty.html");
    fs::write(&statement, "<html><body><p>No activity this period.</p></body></html>").unwrap();

    let rows = SourceKind::CapitalOne
        .extractor()
        .unwrap()
        .extract(&statement, 2023)
        .unwrap();
    let buckets = aggregate(&rows, 2023);
    assert!(buckets.is_empty());

    let writer = LedgerWriter::new(dir.path().join("actual"));
    let touched = writer.commit(&buckets, &IncomeFigures::default()).unwrap();
    assert!(touched.is_empty());
    assert!(!dir.path().join("actual").exists());
}
