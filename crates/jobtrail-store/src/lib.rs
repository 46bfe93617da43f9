// Two physical formats, one logical store.
// The flat CSV file has no addressable rows, so a targeted update becomes a
// full rewrite; SQLite mutates matching rows in place. Both sit behind the
// same Backend trait and the difference never leaves the flush step.

mod aggregate;
mod backend;
mod error;
mod ledger;
mod migrate;
mod relational;
mod tabular;

// Public API
pub use aggregate::{aggregate, clean_tabular};
pub use backend::{Assignment, Backend, RowFilter};
pub use error::{Error, Result};
pub use ledger::{Ledger, Summary};
pub use migrate::{to_relational, to_tabular};
pub use relational::RelationalStore;
pub use tabular::TabularStore;
