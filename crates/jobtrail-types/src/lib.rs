pub mod date;
mod record;

pub use record::{DEFAULT_STATUS, Field, Record};
