use crate::backend::{Assignment, Backend, RowFilter};
use crate::{Error, Result};
use chrono::{Local, NaiveDate};
use jobtrail_types::{Field, Record};

/// Counts returned by `count_summary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Applications dated today
    pub today: i64,
    /// Applications across all dates
    pub total: i64,
    pub todays_rows: Vec<Record>,
}

/// The storage engine: owns the in-memory record set, the pending-new-row
/// buffer, and the running counters for one process run.
///
/// Counters are computed once from the loaded set and maintained
/// incrementally per write; they are never rebuilt by rescanning. Every
/// mutating operation flushes through the backend before returning, so
/// nothing survives only in memory between operations.
pub struct Ledger {
    backend: Box<dyn Backend>,
    records: Vec<Record>,
    pending: Vec<Record>,
    today: NaiveDate,
    today_count: i64,
    prior_total: i64,
}

impl Ledger {
    pub fn open(backend: Box<dyn Backend>) -> Result<Self> {
        Self::open_at(backend, Local::now().date_naive())
    }

    /// Same as `open` with an explicit "today", so day boundaries can be
    /// pinned in tests.
    pub fn open_at(mut backend: Box<dyn Backend>, today: NaiveDate) -> Result<Self> {
        let records = backend.load()?;

        let mut today_count = 0;
        let mut prior_total = 0;
        for record in &records {
            if record.date == today {
                today_count += record.quantity;
            } else {
                prior_total += record.quantity;
            }
        }

        Ok(Self {
            backend,
            records,
            pending: Vec::new(),
            today,
            today_count,
            prior_total,
        })
    }

    /// Records `quantity` applications to `company` today.
    ///
    /// A second entry for the same company on the same day increments the
    /// existing row instead of appending, keeping at most one row per
    /// company per calendar day.
    pub fn append_entry(&mut self, company: &str, quantity: i64) -> Result<()> {
        if quantity < 0 {
            return Err(Error::InvalidQuantity(quantity));
        }

        let latest = self.records.iter().rposition(|r| r.company == company);
        match latest {
            Some(index) if self.records[index].date == self.today => {
                self.records[index].quantity += quantity;
                let new_total = self.records[index].quantity;
                self.backend.apply_update(
                    &RowFilter::company_on(company, self.today),
                    &Assignment::Quantity(new_total),
                    &self.records,
                )?;
            }
            _ => {
                let row = Record::new(company, quantity, self.today);
                self.records.push(row.clone());
                self.pending.push(row);
                self.flush_pending()?;
            }
        }

        self.today_count += quantity;
        Ok(())
    }

    /// Rewrites one field on every row for `company`; returns how many rows
    /// were touched. No matching rows is a successful no-op.
    pub fn update_entry(&mut self, company: &str, new_value: &str, field: Field) -> Result<usize> {
        let mut touched = 0;
        for record in self.records.iter_mut().filter(|r| r.company == company) {
            match field {
                Field::Status => record.status = new_value.to_string(),
                Field::Company => record.company = new_value.to_string(),
            }
            touched += 1;
        }

        if touched == 0 {
            return Ok(0);
        }

        let change = match field {
            Field::Status => Assignment::Status(new_value.to_string()),
            Field::Company => Assignment::Company(new_value.to_string()),
        };
        self.backend
            .apply_update(&RowFilter::company(company), &change, &self.records)?;

        Ok(touched)
    }

    /// All rows for `company`, stored order. Empty is not an error.
    pub fn search(&self, company: &str) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.company == company)
            .cloned()
            .collect()
    }

    pub fn count_summary(&self) -> Summary {
        Summary {
            today: self.today_count,
            total: self.today_count + self.prior_total,
            todays_rows: self
                .records
                .iter()
                .filter(|r| r.date == self.today)
                .cloned()
                .collect(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    fn flush_pending(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.backend.append_rows(&self.pending)?;
        self.pending.clear();
        Ok(())
    }
}
