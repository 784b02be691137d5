// 🗄️ Expense store - append-only CSV log with full-scan queries
//
// One file path, no cache: every query re-reads the whole store. Append is
// the only mutation; rows are never updated or deleted.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;

use crate::error::StoreError;
use crate::record::Expense;

/// Strict on-disk date format; month scans reject anything else.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Year-month truncation used as the month-scan matching key.
const MONTH_FORMAT: &str = "%Y-%m";

// ============================================================================
// SCAN RESULT
// ============================================================================

/// Matches of one scan in file order, plus their accumulated total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseReport {
    pub matches: Vec<Expense>,
    pub total: f64,
}

// ============================================================================
// STORE
// ============================================================================

/// Append-only expense store backed by a headerless CSV file.
///
/// Rows are never updated or deleted; file order is append order and the
/// only row identity. Each operation opens, uses, and releases its own file
/// handle, so the store is re-entrant against a fixed path.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ExpenseStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one expense as a CSV row.
    ///
    /// Opens the store in append mode (creating the file if missing),
    /// writes the serialized row with standard CSV quoting, and flushes
    /// before the handle is released. `Ok(())` is the confirmation signal.
    ///
    /// # Returns
    /// * `Ok(())` - row is durable
    /// * `Err(StoreError::Unwritable)` - open, write, or flush failed
    pub fn append(&self, expense: &Expense) -> Result<(), StoreError> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|err| self.unwritable(err))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer
            .serialize(expense)
            .map_err(|err| self.unwritable(io::Error::other(err)))?;
        writer.flush().map_err(|err| self.unwritable(err))?;

        debug!("appended expense row to {}", self.path.display());
        Ok(())
    }

    /// All expenses whose date falls in `month` (`YYYY-MM`), with their total.
    ///
    /// Every non-blank row's date field is parsed with the strict
    /// `YYYY-MM-DD` format, matching or not; one malformed date aborts the
    /// scan with no partial results.
    pub fn month_expenses(&self, month: &str) -> Result<ExpenseReport, StoreError> {
        self.scan(|expense, line| {
            let date = NaiveDate::parse_from_str(&expense.date, DATE_FORMAT).map_err(|err| {
                StoreError::MalformedRow {
                    line,
                    reason: format!("date {:?}: {err}", expense.date),
                }
            })?;

            Ok(date.format(MONTH_FORMAT).to_string() == month)
        })
    }

    /// All expenses whose category equals `category`, with their total.
    ///
    /// Exact, case-sensitive match on the category field. Dates are never
    /// parsed on this path; rows a month scan would reject still match here.
    pub fn category_expenses(&self, category: &str) -> Result<ExpenseReport, StoreError> {
        self.scan(|expense, _| Ok(expense.category == category))
    }

    /// Full scan in file order, folding matching rows into a report.
    ///
    /// Blank lines are skipped. Any row that fails CSV deserialization
    /// (wrong field count, non-numeric amount) aborts with `MalformedRow`;
    /// a store that does not exist yet scans as empty.
    fn scan<F>(&self, mut keep: F) -> Result<ExpenseReport, StoreError>
    where
        F: FnMut(&Expense, u64) -> Result<bool, StoreError>,
    {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(ExpenseReport::default());
            }
            Err(err) => {
                return Err(StoreError::Unreadable {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(file);

        let mut report = ExpenseReport::default();
        let mut scanned = 0usize;

        for row in reader.records() {
            let row = row.map_err(malformed)?;
            let line = row.position().map_or(0, |pos| pos.line());
            let expense: Expense = row.deserialize(None).map_err(malformed)?;
            scanned += 1;

            if keep(&expense, line)? {
                report.total += expense.amount;
                report.matches.push(expense);
            }
        }

        debug!(
            "scanned {scanned} rows in {}, matched {}",
            self.path.display(),
            report.matches.len(),
        );
        Ok(report)
    }

    fn unwritable(&self, source: io::Error) -> StoreError {
        StoreError::Unwritable {
            path: self.path.clone(),
            source,
        }
    }
}

/// Map a csv-level read error to the row that raised it.
fn malformed(err: csv::Error) -> StoreError {
    let line = err.position().map_or(0, |pos| pos.line());
    StoreError::MalformedRow {
        line,
        reason: err.to_string(),
    }
}
