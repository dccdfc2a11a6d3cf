//! Text records for a saved board.
//!
//! Config record:
//! ```text
//! rows,cols: (R,C)
//! delay: (D)
//! ```
//! Data record: `R` lines of `C` space-separated `0`/`1` tokens, top row first.

use std::path::Path;

use crate::domain::{BitCells, Grid};
use crate::error::{LifeError, Result};

const SHAPE_PREFIX: &str = "rows,cols: (";
const DELAY_PREFIX: &str = "delay: (";

/// Board shape and pacing as stored in the config record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigRecord {
    pub rows: usize,
    pub columns: usize,
    pub delay_ms: u32,
}

impl ConfigRecord {
    pub fn of(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            columns: grid.columns(),
            delay_ms: grid.tick_delay_ms(),
        }
    }

    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

fn malformed(path: &Path, reason: impl Into<String>) -> LifeError {
    LifeError::Malformed {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Parse the two-line config record; `path` is only used for error reporting.
pub fn parse_config(text: &str, path: &Path) -> Result<ConfigRecord> {
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

    let shape = lines
        .next()
        .and_then(|l| l.strip_prefix(SHAPE_PREFIX))
        .and_then(|l| l.strip_suffix(')'))
        .ok_or_else(|| malformed(path, "first line must read `rows,cols: (R,C)`"))?;
    let (rows, columns) = shape
        .split_once(',')
        .ok_or_else(|| malformed(path, "expected `R,C` inside parentheses"))?;

    let delay = lines
        .next()
        .and_then(|l| l.strip_prefix(DELAY_PREFIX))
        .and_then(|l| l.strip_suffix(')'))
        .ok_or_else(|| malformed(path, "second line must read `delay: (D)`"))?;

    if lines.any(|l| !l.is_empty()) {
        return Err(malformed(path, "unexpected content after delay line"));
    }

    let number = |field: &str, raw: &str| {
        raw.parse::<u64>()
            .map_err(|_| malformed(path, format!("{field} `{raw}` is not a non-negative integer")))
    };

    Ok(ConfigRecord {
        rows: usize::try_from(number("rows", rows)?)
            .map_err(|_| malformed(path, "rows too large"))?,
        columns: usize::try_from(number("columns", columns)?)
            .map_err(|_| malformed(path, "columns too large"))?,
        delay_ms: u32::try_from(number("delay", delay)?)
            .map_err(|_| malformed(path, "delay too large"))?,
    })
}

pub fn format_config(record: &ConfigRecord) -> String {
    format!(
        "{SHAPE_PREFIX}{},{})\n{DELAY_PREFIX}{})\n",
        record.rows, record.columns, record.delay_ms
    )
}

/// Parse the row-major data record into exactly `expected` cells.
///
/// Tokens are counted across the whole file; any count other than
/// `expected` is config drift. Nothing is returned on failure.
pub fn parse_data(text: &str, expected: usize, path: &Path) -> Result<BitCells> {
    let mut cells = BitCells::new(expected);
    let mut found = 0usize;

    for token in text.split_whitespace() {
        let alive = match token {
            "0" => false,
            "1" => true,
            other => {
                return Err(malformed(
                    path,
                    format!("cell {found} is `{other}`, expected 0 or 1"),
                ));
            }
        };
        if found < expected {
            cells.set(found, alive);
        }
        found += 1;
    }

    if found != expected {
        return Err(LifeError::ConfigDrift { expected, found });
    }
    Ok(cells)
}

/// One board row per line, cells separated by single spaces
pub fn format_data(grid: &Grid) -> String {
    let (rows, columns) = grid.dimensions();
    let cells = grid.cells();
    let mut out = String::with_capacity(rows * columns * 2);
    for row in 0..rows {
        for col in 0..columns {
            if col > 0 {
                out.push(' ');
            }
            out.push(if cells.get(row * columns + col) { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("board.cfg")
    }

    #[test]
    fn test_parse_config() {
        let record = parse_config("rows,cols: (20,40)\ndelay: (100)\n", path()).unwrap();
        assert_eq!(record, ConfigRecord { rows: 20, columns: 40, delay_ms: 100 });
        assert_eq!(record.cell_count(), 800);
    }

    #[test]
    fn test_parse_config_without_trailing_newline() {
        let record = parse_config("rows,cols: (3,3)\ndelay: (20)", path()).unwrap();
        assert_eq!(record, ConfigRecord { rows: 3, columns: 3, delay_ms: 20 });
    }

    #[test]
    fn test_parse_config_crlf() {
        let record = parse_config("rows,cols: (3,4)\r\ndelay: (50)\r\n", path()).unwrap();
        assert_eq!(record.columns, 4);
    }

    #[test]
    fn test_config_format_must_match() {
        for text in [
            "",
            "rows,cols: 20,40\ndelay: (100)\n",
            "rows, cols: (20,40)\ndelay: (100)\n",
            "rows,cols: (20 40)\ndelay: (100)\n",
            "rows,cols: (20,40)\n",
            "rows,cols: (20,40)\ndelay: 100\n",
            "rows,cols: (-1,40)\ndelay: (100)\n",
            "rows,cols: (20,40)\ndelay: (fast)\n",
            "rows,cols: (20,40)\ndelay: (100)\nextra\n",
        ] {
            assert!(
                matches!(parse_config(text, path()), Err(LifeError::Malformed { .. })),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn test_format_config() {
        let record = ConfigRecord { rows: 15, columns: 30, delay_ms: 250 };
        let text = format_config(&record);
        assert_eq!(text, "rows,cols: (15,30)\ndelay: (250)\n");
        assert_eq!(parse_config(&text, path()).unwrap(), record);
    }

    #[test]
    fn test_parse_data() {
        let cells = parse_data("0 1 0\n1 1 1\n0 0 1\n", 9, path()).unwrap();
        let alive: Vec<_> = cells.iter_alive().collect();
        assert_eq!(alive, vec![1, 3, 4, 5, 8]);
    }

    #[test]
    fn test_data_rows_need_not_match_lines() {
        // Only the token count matters, as with a stream of integers
        let cells = parse_data("0 1 0 1\n1 1 1 0 0", 9, path()).unwrap();
        assert_eq!(cells.count_alive(), 5);
    }

    #[test]
    fn test_short_data_is_drift() {
        let err = parse_data("0 1 0\n1 1 1\n0 0\n", 9, path()).unwrap_err();
        assert!(matches!(err, LifeError::ConfigDrift { expected: 9, found: 8 }));
    }

    #[test]
    fn test_long_data_is_drift() {
        let err = parse_data("1 1 1 1 1 1 1 1 1 1 1", 9, path()).unwrap_err();
        assert!(matches!(err, LifeError::ConfigDrift { expected: 9, found: 11 }));
    }

    #[test]
    fn test_bad_token() {
        let err = parse_data("0 1 2", 3, path()).unwrap_err();
        assert!(matches!(err, LifeError::Malformed { .. }));
    }
}
