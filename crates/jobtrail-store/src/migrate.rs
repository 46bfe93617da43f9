use crate::backend::Backend;
use crate::relational::RelationalStore;
use crate::tabular::TabularStore;
use crate::{Error, Result};
use std::path::Path;

/// Copies every tabular row into a fresh relational store.
///
/// The destination must not exist yet; the source is read in full before
/// the destination is created, so a corrupt source leaves no half-written
/// target behind. Returns the number of rows copied.
pub fn to_relational(csv_path: &Path, db_path: &Path) -> Result<usize> {
    if db_path.exists() {
        return Err(Error::TargetAlreadyExists(db_path.to_path_buf()));
    }

    let mut source = TabularStore::open(csv_path);
    let rows = source.load()?;

    let mut target = RelationalStore::open(db_path)?;
    target.append_rows(&rows)?;

    Ok(rows.len())
}

/// Copies every relational row into a fresh tabular store. Dates are
/// re-rendered through the shared codec, so the result always loads back.
pub fn to_tabular(db_path: &Path, csv_path: &Path) -> Result<usize> {
    if csv_path.exists() {
        return Err(Error::TargetAlreadyExists(csv_path.to_path_buf()));
    }

    let mut source = RelationalStore::open(db_path)?;
    let rows = source.load()?;

    let mut target = TabularStore::create(csv_path)?;
    target.append_rows(&rows)?;

    Ok(rows.len())
}
