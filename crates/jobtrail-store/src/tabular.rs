use crate::backend::{Assignment, Backend, RowFilter};
use crate::{Error, Result};
use jobtrail_types::{Record, date};
use serde::Deserialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

const HEADERS: [&str; 4] = ["Company", "Status", "Quantity", "Date"];

/// Flat CSV store: header row plus one line per record, arrival order.
///
/// The format has no addressable rows, so targeted updates are satisfied by
/// rewriting the whole file from the caller's record set. Appends only ever
/// touch the end of the file.
pub struct TabularStore {
    path: PathBuf,
}

/// Row as it sits on disk; quantity and date stay textual until validated.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "Date")]
    date: String,
}

impl TabularStore {
    /// Creates a new empty store (header row only). Refuses to clobber an
    /// existing file.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            return Err(Error::AlreadyInitialized(path));
        }

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(HEADERS)?;
        writer.flush()?;

        Ok(Self { path })
    }

    /// Wraps an existing store file. Nothing is read until `load`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the whole file with the given record set.
    pub fn rewrite_all(&self, rows: &[Record]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(HEADERS)?;
        for row in rows {
            write_row(&mut writer, row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn corrupt(&self, line: usize, reason: String) -> Error {
        Error::CorruptRecord {
            path: self.path.clone(),
            line,
            reason,
        }
    }
}

impl Backend for TabularStore {
    fn load(&mut self) -> Result<Vec<Record>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();

        for (index, raw) in reader.deserialize::<RawRow>().enumerate() {
            // Header occupies line 1
            let line = index + 2;
            let raw = raw.map_err(|err| self.corrupt(line, err.to_string()))?;

            let quantity = raw
                .quantity
                .trim()
                .parse::<i64>()
                .map_err(|_| self.corrupt(line, format!("invalid quantity '{}'", raw.quantity)))?;
            let parsed_date = date::decode(&raw.date)
                .ok_or_else(|| self.corrupt(line, format!("unparseable date '{}'", raw.date)))?;

            records.push(Record {
                company: raw.company,
                status: raw.status,
                quantity,
                date: parsed_date,
            });
        }

        Ok(records)
    }

    fn append_rows(&mut self, rows: &[Record]) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        for row in rows {
            write_row(&mut writer, row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn apply_update(
        &mut self,
        _filter: &RowFilter,
        _change: &Assignment,
        full_set: &[Record],
    ) -> Result<()> {
        // No addressable rows in a flat file; the caller has already applied
        // the change to `full_set`.
        self.rewrite_all(full_set)
    }
}

fn write_row<W: std::io::Write>(writer: &mut csv::Writer<W>, row: &Record) -> Result<()> {
    let quantity = row.quantity.to_string();
    let encoded = date::encode(row.date);
    writer.write_record([
        row.company.as_str(),
        row.status.as_str(),
        quantity.as_str(),
        encoded.as_str(),
    ])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications.csv");

        let mut store = TabularStore::create(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "Company,Status,Quantity,Date");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_create_refuses_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications.csv");
        TabularStore::create(&path).unwrap();

        match TabularStore::create(&path) {
            Err(Error::AlreadyInitialized(p)) => assert_eq!(p, path),
            other => panic!("expected AlreadyInitialized, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications.csv");
        let mut store = TabularStore::create(&path).unwrap();

        let rows = vec![
            Record::new("Acme", 2, day(2026, 8, 22)),
            Record::new("Globex", 1, day(2026, 8, 23)),
        ];
        store.append_rows(&rows).unwrap();

        assert_eq!(store.load().unwrap(), rows);
    }

    #[test]
    fn test_append_does_not_rewrite_existing_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications.csv");
        let mut store = TabularStore::create(&path).unwrap();

        store
            .append_rows(&[Record::new("Acme", 2, day(2026, 8, 22))])
            .unwrap();
        let after_first = fs::read_to_string(&path).unwrap();

        store
            .append_rows(&[Record::new("Globex", 1, day(2026, 8, 23))])
            .unwrap();
        let after_second = fs::read_to_string(&path).unwrap();

        assert!(after_second.starts_with(&after_first));
    }

    #[test]
    fn test_load_rejects_unparseable_date() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications.csv");
        fs::write(
            &path,
            "Company,Status,Quantity,Date\nAcme,Applied,2,2026-08-22\nGlobex,Applied,1,23/08/2026\n",
        )
        .unwrap();

        let mut store = TabularStore::open(&path);
        match store.load() {
            Err(Error::CorruptRecord { line, reason, .. }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("23/08/2026"));
            }
            other => panic!("expected CorruptRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_non_numeric_quantity() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications.csv");
        fs::write(
            &path,
            "Company,Status,Quantity,Date\nAcme,Applied,lots,2026-08-22\n",
        )
        .unwrap();

        let mut store = TabularStore::open(&path);
        match store.load() {
            Err(Error::CorruptRecord { line, reason, .. }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("lots"));
            }
            other => panic!("expected CorruptRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_update_rewrites_from_full_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications.csv");
        let mut store = TabularStore::create(&path).unwrap();
        store
            .append_rows(&[Record::new("Acme", 2, day(2026, 8, 22))])
            .unwrap();

        let mut updated = Record::new("Acme", 2, day(2026, 8, 22));
        updated.status = "Offered".to_string();
        let full_set = vec![updated.clone()];

        store
            .apply_update(
                &RowFilter::company("Acme"),
                &Assignment::Status("Offered".to_string()),
                &full_set,
            )
            .unwrap();

        assert_eq!(store.load().unwrap(), vec![updated]);
    }
}
