// src/tables/recognition.rs
//! Shapes of the document produced by the table recognizer, and the
//! one-shot conversion into an [`EditableTable`].

use bevy::prelude::warn;
use serde::{Deserialize, Serialize};

use super::cell::{BoundingRegion, Cell};
use super::editable_table::EditableTable;
use super::error::ImportError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognizedTable {
    #[serde(default)]
    pub rows: Vec<RecognizedRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognizedRow {
    #[serde(default)]
    pub cells: Vec<RecognizedCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognizedCell {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingRegion>,
}

impl RecognizedTable {
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(json)?)
    }

    fn widest_row(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Maps every recognized cell 1:1 onto a table cell, keeping its text and region.
    ///
    /// Rows shorter than the widest row are padded with empty cells when
    /// `pad_ragged_rows` is set; otherwise the first short row is rejected.
    pub fn into_table(self, pad_ragged_rows: bool) -> Result<EditableTable, ImportError> {
        let expected = self.widest_row();
        if let Some((row, found)) = self
            .rows
            .iter()
            .enumerate()
            .map(|(idx, r)| (idx, r.cells.len()))
            .find(|&(_, len)| len != expected)
        {
            if !pad_ragged_rows {
                return Err(ImportError::RaggedRows { row, found, expected });
            }
            warn!(
                "Recognized row {} has {} cells, padding ragged rows to {} columns.",
                row, found, expected
            );
        }

        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                row.cells
                    .into_iter()
                    .map(|c| Cell::new(c.text, c.bbox))
                    .collect()
            })
            .collect();
        Ok(EditableTable::from_rows(rows))
    }
}
