use std::fmt;
use std::path::PathBuf;

/// Result type for jobtrail-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the storage layer
#[derive(Debug)]
pub enum Error {
    /// `init` ran against a store that is already present
    AlreadyInitialized(PathBuf),

    /// Migration destination is already present
    TargetAlreadyExists(PathBuf),

    /// A stored row could not be read back (bad date, malformed row)
    CorruptRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A negative entry quantity was rejected
    InvalidQuantity(i64),

    /// SQLite operation failed
    Database(rusqlite::Error),

    /// CSV operation failed
    Csv(csv::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlreadyInitialized(path) => {
                write!(f, "store already initialized at {}", path.display())
            }
            Error::TargetAlreadyExists(path) => {
                write!(f, "migration target already exists: {}", path.display())
            }
            Error::CorruptRecord { path, line, reason } => {
                write!(
                    f,
                    "corrupt record at {} line {}: {}",
                    path.display(),
                    line,
                    reason
                )
            }
            Error::InvalidQuantity(quantity) => {
                write!(f, "quantity must be non-negative, got {}", quantity)
            }
            Error::Database(err) => write!(f, "database error: {}", err),
            Error::Csv(err) => write!(f, "csv error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_record_message_names_the_row() {
        let err = Error::CorruptRecord {
            path: PathBuf::from("applications.csv"),
            line: 3,
            reason: "unparseable date '23/08/2026'".to_string(),
        };
        let msg = err.to_string();

        assert!(msg.contains("applications.csv"));
        assert!(msg.contains("line 3"));
        assert!(msg.contains("23/08/2026"));
    }

    #[test]
    fn test_invalid_quantity_message() {
        let msg = Error::InvalidQuantity(-4).to_string();
        assert!(msg.contains("-4"));
        assert!(msg.contains("non-negative"));
    }
}
