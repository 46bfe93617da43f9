use crate::Result;
use chrono::NaiveDate;
use jobtrail_types::Record;

/// Row scope for a targeted update: one company, optionally narrowed to a
/// single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    pub company: String,
    pub date: Option<NaiveDate>,
}

impl RowFilter {
    pub fn company(company: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            date: None,
        }
    }

    pub fn company_on(company: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            company: company.into(),
            date: Some(date),
        }
    }
}

/// Single-field assignment carried by a targeted update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Quantity(i64),
    Status(String),
    Company(String),
}

/// Uniform read/write contract both physical formats satisfy.
///
/// `apply_update` receives the full in-memory record set alongside the
/// filter and assignment: a format with addressable rows mutates only the
/// matching rows, a flat file rewrites itself from `full_set`. Either way
/// the caller's view and the physical store agree when the call returns.
pub trait Backend {
    fn load(&mut self) -> Result<Vec<Record>>;

    /// Persists only the given new rows; existing rows are not touched.
    fn append_rows(&mut self, rows: &[Record]) -> Result<()>;

    fn apply_update(
        &mut self,
        filter: &RowFilter,
        change: &Assignment,
        full_set: &[Record],
    ) -> Result<()>;
}
