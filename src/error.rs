use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by the board engine and its persistence layer.
#[derive(Debug, Error)]
pub enum LifeError {
    /// A config or data file could not be opened, read or written.
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dimensions or tick delay outside the configured limits.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A record that does not follow the expected textual layout.
    #[error("malformed {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    /// The data record holds a different number of cells than the config declares.
    #[error("config drift: expected {expected} cells, data file holds {found}")]
    ConfigDrift { expected: usize, found: usize },

    #[error("cell ({row}, {col}) outside {rows}x{columns} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },
}

impl LifeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for missing/unreadable/unwritable files, the only kind callers recover from.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_io_is_recoverable() {
        let io = LifeError::io("board.cfg", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(io.is_io());
        assert!(!LifeError::Config("rows".into()).is_io());
        assert!(!LifeError::ConfigDrift { expected: 9, found: 8 }.is_io());
    }

    #[test]
    fn test_messages_name_the_problem() {
        let drift = LifeError::ConfigDrift { expected: 9, found: 8 };
        assert_eq!(
            drift.to_string(),
            "config drift: expected 9 cells, data file holds 8"
        );

        let oob = LifeError::OutOfBounds { row: 5, col: 0, rows: 5, columns: 5 };
        assert!(oob.to_string().contains("5x5"));
    }
}
