// src/tables/export.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::editable_table::EditableTable;

/// Flat-text layouts a table can be exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Tsv,
    Csv,
}

impl ExportFormat {
    pub fn render(self, table: &EditableTable) -> String {
        match self {
            ExportFormat::Tsv => table.export_to_tsv(),
            ExportFormat::Csv => table.export_to_csv(),
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Tsv => "tsv",
            ExportFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Tsv => write!(f, "TSV"),
            ExportFormat::Csv => write!(f, "CSV"),
        }
    }
}
