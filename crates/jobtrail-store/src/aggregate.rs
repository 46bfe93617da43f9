use crate::backend::Backend;
use crate::tabular::TabularStore;
use crate::Result;
use jobtrail_types::Record;
use std::path::Path;

/// Collapses the record set to one row per `(company, status)`, summing
/// quantities and keeping the latest date per group, sorted by date
/// ascending.
///
/// This deliberately flattens the one-row-per-day history, so it only runs
/// when the operator asks for it (`clean`). Applying it twice changes
/// nothing.
pub fn aggregate(rows: &[Record]) -> Vec<Record> {
    let mut groups: Vec<Record> = Vec::new();

    for row in rows {
        match groups
            .iter_mut()
            .find(|g| g.company == row.company && g.status == row.status)
        {
            Some(group) => {
                group.quantity += row.quantity;
                if row.date > group.date {
                    group.date = row.date;
                }
            }
            None => groups.push(row.clone()),
        }
    }

    groups.sort_by_key(|g| g.date);
    groups
}

/// Aggregates the tabular store in place; returns the compacted row count.
pub fn clean_tabular(path: &Path) -> Result<usize> {
    let mut store = TabularStore::open(path);
    let rows = store.load()?;
    let compacted = aggregate(&rows);
    store.rewrite_all(&compacted)?;
    Ok(compacted.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(company: &str, status: &str, quantity: i64, date: NaiveDate) -> Record {
        Record {
            company: company.to_string(),
            status: status.to_string(),
            quantity,
            date,
        }
    }

    #[test]
    fn test_collapses_per_company_and_status_keeping_latest_date() {
        let rows = vec![
            row("Acme", "Applied", 2, day(2026, 8, 20)),
            row("Globex", "Applied", 1, day(2026, 8, 21)),
            row("Acme", "Applied", 3, day(2026, 8, 23)),
        ];

        let compacted = aggregate(&rows);

        assert_eq!(
            compacted,
            vec![
                row("Globex", "Applied", 1, day(2026, 8, 21)),
                row("Acme", "Applied", 5, day(2026, 8, 23)),
            ]
        );
    }

    #[test]
    fn test_distinct_statuses_stay_separate() {
        let rows = vec![
            row("Acme", "Applied", 2, day(2026, 8, 20)),
            row("Acme", "Offered", 1, day(2026, 8, 21)),
        ];

        assert_eq!(aggregate(&rows).len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let rows = vec![
            row("Acme", "Applied", 2, day(2026, 8, 20)),
            row("Acme", "Applied", 3, day(2026, 8, 23)),
            row("Globex", "Offered", 1, day(2026, 8, 21)),
        ];

        let once = aggregate(&rows);
        let twice = aggregate(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_set_stays_empty() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_clean_rewrites_the_store_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications.csv");
        let mut store = TabularStore::create(&path).unwrap();
        store
            .append_rows(&[
                row("Acme", "Applied", 2, day(2026, 8, 20)),
                row("Acme", "Applied", 3, day(2026, 8, 23)),
            ])
            .unwrap();

        let remaining = clean_tabular(&path).unwrap();

        assert_eq!(remaining, 1);
        assert_eq!(
            store.load().unwrap(),
            vec![row("Acme", "Applied", 5, day(2026, 8, 23))]
        );
    }
}
