//! Loading and saving a board as a config file plus a data file.

pub mod format;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::{Limits, Settings};
use crate::domain::Grid;
use crate::error::{LifeError, Result};
pub use format::ConfigRecord;

/// Read a record. Only opening and reading count as IO failures; bytes
/// that are not UTF-8 are a malformed record.
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| LifeError::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| LifeError::Malformed {
        path: path.to_path_buf(),
        reason: "not valid UTF-8".into(),
    })
}

/// Read and validate just the config record
pub fn read_config(config_path: &Path, limits: &Limits) -> Result<ConfigRecord> {
    let record = format::parse_config(&read_text(config_path)?, config_path)?;
    limits.validate(record.rows, record.columns, record.delay_ms)?;
    Ok(record)
}

/// Load a board checked against the default limits
pub fn load(config_path: impl AsRef<Path>, data_path: impl AsRef<Path>) -> Result<Grid> {
    load_with_limits(config_path, data_path, Limits::default())
}

/// Load a board.
///
/// The config record is validated before the data file is opened. On any
/// failure no grid is returned and neither file is modified.
pub fn load_with_limits(
    config_path: impl AsRef<Path>,
    data_path: impl AsRef<Path>,
    limits: Limits,
) -> Result<Grid> {
    let (config_path, data_path) = (config_path.as_ref(), data_path.as_ref());

    let record = read_config(config_path, &limits)?;
    let cells = format::parse_data(&read_text(data_path)?, record.cell_count(), data_path)?;
    let grid = Grid::from_cells(record.rows, record.columns, record.delay_ms, limits, cells)?;

    info!(
        rows = record.rows,
        columns = record.columns,
        delay_ms = record.delay_ms,
        population = grid.population(),
        memory_bytes = grid.cells().memory_bytes(),
        "loaded board from {}",
        data_path.display()
    );
    Ok(grid)
}

/// Load a board, falling back to an empty one when a file cannot be read.
///
/// If the config record is readable its shape is kept; otherwise the
/// fallback shape from `settings` is used. Bound violations, malformed
/// records and config drift are still returned as errors.
pub fn load_or_empty(
    config_path: impl AsRef<Path>,
    data_path: impl AsRef<Path>,
    settings: &Settings,
) -> Result<Grid> {
    let (config_path, data_path) = (config_path.as_ref(), data_path.as_ref());
    let limits = settings.limits;

    match load_with_limits(config_path, data_path, limits) {
        Err(err) if err.is_io() => {
            let record = match read_config(config_path, &limits) {
                Ok(record) => record,
                Err(config_err) if config_err.is_io() => ConfigRecord {
                    rows: settings.fallback_rows,
                    columns: settings.fallback_columns,
                    delay_ms: settings.fallback_delay_ms,
                },
                Err(config_err) => return Err(config_err),
            };
            warn!(%err, rows = record.rows, columns = record.columns, "starting with an empty board");
            Grid::with_limits(record.rows, record.columns, record.delay_ms, limits)
        }
        other => other,
    }
}

/// Sibling file a record is staged in before being renamed over `path`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn stage_text(path: &Path, text: &str) -> Result<PathBuf> {
    let staged = staging_path(path);
    let file = File::create(&staged).map_err(|e| LifeError::io(&staged, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| LifeError::io(&staged, e))?;
    Ok(staged)
}

fn commit(staged: &Path, path: &Path) -> Result<()> {
    fs::rename(staged, path).map_err(|e| {
        let _ = fs::remove_file(staged);
        LifeError::io(path, e)
    })
}

/// Write the data record, then the config record.
///
/// Both records are staged in sibling `.tmp` files first. The config is
/// replaced last, so a failed save never pairs a new shape with old data.
pub fn save(config_path: impl AsRef<Path>, data_path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let (config_path, data_path) = (config_path.as_ref(), data_path.as_ref());

    let staged_data = stage_text(data_path, &format::format_data(grid))?;
    let staged_config = match stage_text(config_path, &format::format_config(&ConfigRecord::of(grid))) {
        Ok(staged) => staged,
        Err(err) => {
            let _ = fs::remove_file(&staged_data);
            return Err(err);
        }
    };

    if let Err(err) = commit(&staged_data, data_path) {
        let _ = fs::remove_file(&staged_config);
        return Err(err);
    }
    commit(&staged_config, config_path)?;

    info!(
        rows = grid.rows(),
        columns = grid.columns(),
        population = grid.population(),
        "saved board to {}",
        data_path.display()
    );
    Ok(())
}
