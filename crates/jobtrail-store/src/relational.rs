use crate::backend::{Assignment, Backend, RowFilter};
use crate::{Error, Result};
use jobtrail_types::{Record, date};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};

/// Embedded SQLite store: one `Jobs` table, dates stored as encoded text.
///
/// Rows are addressable, so a targeted update is a single scoped `UPDATE`
/// rather than a table rewrite. All values are bound as parameters.
pub struct RelationalStore {
    conn: Connection,
    path: PathBuf,
}

impl RelationalStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let conn = Connection::open(&path)?;
        let store = Self { conn, path };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn,
            path: PathBuf::from(":memory:"),
        };
        store.init_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS Jobs (
                Company TEXT NOT NULL,
                Status TEXT NOT NULL,
                Quantity INTEGER NOT NULL,
                Date TEXT NOT NULL
            );
            "#,
        )?;

        Ok(())
    }
}

impl Backend for RelationalStore {
    fn load(&mut self) -> Result<Vec<Record>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT Company, Status, Quantity, Date
            FROM Jobs
            ORDER BY rowid
            "#,
        )?;

        let raw_rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut records = Vec::with_capacity(raw_rows.len());
        for (index, (company, status, quantity, stored_date)) in raw_rows.into_iter().enumerate() {
            let parsed_date = date::decode(&stored_date).ok_or_else(|| Error::CorruptRecord {
                path: self.path.clone(),
                line: index + 1,
                reason: format!("unparseable date '{}'", stored_date),
            })?;
            records.push(Record {
                company,
                status,
                quantity,
                date: parsed_date,
            });
        }

        Ok(records)
    }

    fn append_rows(&mut self, rows: &[Record]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for row in rows {
            tx.execute(
                r#"
                INSERT INTO Jobs (Company, Status, Quantity, Date)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![
                    &row.company,
                    &row.status,
                    row.quantity,
                    date::encode(row.date)
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn apply_update(
        &mut self,
        filter: &RowFilter,
        change: &Assignment,
        _full_set: &[Record],
    ) -> Result<()> {
        let company = &filter.company;

        match (change, filter.date) {
            (Assignment::Quantity(quantity), Some(day)) => self.conn.execute(
                "UPDATE Jobs SET Quantity = ?1 WHERE Company = ?2 AND Date = ?3",
                params![quantity, company, date::encode(day)],
            ),
            (Assignment::Quantity(quantity), None) => self.conn.execute(
                "UPDATE Jobs SET Quantity = ?1 WHERE Company = ?2",
                params![quantity, company],
            ),
            (Assignment::Status(status), Some(day)) => self.conn.execute(
                "UPDATE Jobs SET Status = ?1 WHERE Company = ?2 AND Date = ?3",
                params![status, company, date::encode(day)],
            ),
            (Assignment::Status(status), None) => self.conn.execute(
                "UPDATE Jobs SET Status = ?1 WHERE Company = ?2",
                params![status, company],
            ),
            (Assignment::Company(new_name), Some(day)) => self.conn.execute(
                "UPDATE Jobs SET Company = ?1 WHERE Company = ?2 AND Date = ?3",
                params![new_name, company, date::encode(day)],
            ),
            (Assignment::Company(new_name), None) => self.conn.execute(
                "UPDATE Jobs SET Company = ?1 WHERE Company = ?2",
                params![new_name, company],
            ),
        }?;

        Ok(())
    }
}
