use chrono::NaiveDate;
use std::fmt;

/// Status assigned to a freshly created entry.
pub const DEFAULT_STATUS: &str = "Applied";

/// One job-application row: how many applications went to a company on a
/// given day, and where they stand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub company: String,
    pub status: String,
    pub quantity: i64,
    pub date: NaiveDate,
}

impl Record {
    pub fn new(company: impl Into<String>, quantity: i64, date: NaiveDate) -> Self {
        Self {
            company: company.into(),
            status: DEFAULT_STATUS.to_string(),
            quantity,
            date,
        }
    }
}

/// The two record fields an update may rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Status,
    Company,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Status => write!(f, "status"),
            Field::Company => write!(f, "company"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults_to_applied() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let record = Record::new("Acme", 2, date);
        assert_eq!(record.status, DEFAULT_STATUS);
        assert_eq!(record.quantity, 2);
    }
}
