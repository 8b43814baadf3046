// src/tables/systems/io.rs
use bevy::log::{debug, info};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::tables::{
    editable_table::EditableTable,
    error::{ExportError, ImportError},
    export::ExportFormat,
    recognition::RecognizedTable,
};

/// Reads a recognizer JSON document from disk and builds the table from it.
pub fn load_recognized_table(path: &Path, pad_ragged_rows: bool) -> Result<EditableTable, ImportError> {
    info!("Loading recognizer output from {:?}", path);
    let json = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = RecognizedTable::from_json(&json)?.into_table(pad_ragged_rows)?;
    debug!(
        "Loaded {} rows x {} columns from {:?}",
        table.row_count(),
        table.column_count(),
        path
    );
    Ok(table)
}

/// `<table>_<YYYYmmdd_HHMMSS>.<ext>` inside `dir`.
pub fn timestamped_export_path(dir: &Path, table_name: &str, format: ExportFormat) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{}_{}.{}", table_name, stamp, format.file_extension()))
}

pub fn write_export_file(path: &Path, text: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote export to {:?}", path);
    Ok(())
}
