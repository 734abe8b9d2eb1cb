//! Discovery and reading of `.csv` state tables.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RunError;

pub const TABLE_EXTENSION: &str = "csv";

/// A state table as read from disk: its file stem and its non-empty rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

/// Lists every `.csv` file directly inside `dir`, sorted by path.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, RunError> {
    let entries = fs::read_dir(dir).map_err(|e| RunError::io(dir, e))?;
    let mut tables = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| RunError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == TABLE_EXTENSION) {
            tables.push(path);
        }
    }
    tables.sort();
    Ok(tables)
}

/// Reads a table file.
pub fn read(path: &Path) -> Result<Table, RunError> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = fs::File::open(path).map_err(|e| RunError::io(path, e))?;
    let rows = parse(file).map_err(|source| RunError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Table { name, rows })
}

/// Parses comma separated records. Cells are trimmed, then empty cells and
/// empty records are dropped. Records may have any number of cells.
pub fn parse<R: std::io::Read>(reader: R) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let row: Vec<String> = record?
            .iter()
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}
