// src/tables/editable_table.rs
//! Row-major grid of cells with the structural edits the table editor offers.
//!
//! Every row always holds the same number of cells. Column edits touch all rows
//! or none, and indices outside the grid are ignored rather than reported.

use bevy::prelude::trace;

use super::cell::{Cell, CellId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditableTable {
    rows: Vec<Vec<Cell>>,
}

impl EditableTable {
    /// Grid of `rows` x `columns` empty cells with no source region.
    pub fn new_empty(rows: usize, columns: usize) -> Self {
        let rows = (0..rows)
            .map(|_| (0..columns).map(|_| Cell::empty()).collect())
            .collect();
        Self { rows }
    }

    /// Builds a table from pre-made rows. Short rows are padded with empty
    /// cells up to the widest row so the grid stays rectangular.
    pub fn from_rows(mut rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in rows.iter_mut() {
            if row.len() < width {
                row.resize_with(width, Cell::empty);
            }
        }
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Mutable walk over every cell together with its (row, column) position.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Cell)> {
        self.rows.iter_mut().enumerate().flat_map(|(row_idx, row)| {
            row.iter_mut()
                .enumerate()
                .map(move |(col_idx, cell)| (row_idx, col_idx, cell))
        })
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Current coordinates of the cell with the given id, if it is still in the table.
    pub fn position_of(&self, id: CellId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row_idx, row)| {
            row.iter()
                .position(|cell| cell.id() == id)
                .map(|col_idx| (row_idx, col_idx))
        })
    }

    /// Replaces the text of one cell. Returns the previous text, or `None`
    /// when the coordinates are outside the grid and nothing was touched.
    pub fn update_cell(
        &mut self,
        row: usize,
        column: usize,
        new_content: impl Into<String>,
    ) -> Option<String> {
        let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) else {
            trace!("update_cell({}, {}) ignored: outside grid.", row, column);
            return None;
        };
        Some(std::mem::replace(&mut cell.content, new_content.into()))
    }

    pub fn remove_row(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            trace!("remove_row({}) ignored: {} rows.", index, self.rows.len());
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Removes a set of rows addressed against the current layout.
    /// Indices are deduplicated and removed highest first so earlier removals
    /// never shift a pending index. Returns how many rows were removed.
    pub fn remove_rows(&mut self, indices: &[usize]) -> usize {
        descending_unique(indices)
            .into_iter()
            .filter(|&index| self.remove_row(index))
            .count()
    }

    pub fn remove_column(&mut self, index: usize) -> bool {
        // Checked once up front: rows are equal length, so every row has `index`.
        if index >= self.column_count() {
            trace!("remove_column({}) ignored: {} columns.", index, self.column_count());
            return false;
        }
        for row in self.rows.iter_mut() {
            row.remove(index);
        }
        true
    }

    /// Column counterpart of [`Self::remove_rows`].
    pub fn remove_columns(&mut self, indices: &[usize]) -> usize {
        descending_unique(indices)
            .into_iter()
            .filter(|&index| self.remove_column(index))
            .count()
    }

    /// Takes the row at `from` out and reinserts it at `to`, where `to` is an
    /// index into the table after the removal.
    pub fn move_row(&mut self, from: usize, to: usize) -> bool {
        let count = self.rows.len();
        if from >= count || to >= count {
            trace!("move_row({} -> {}) ignored: {} rows.", from, to, count);
            return false;
        }
        if from == to {
            return false;
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        true
    }

    /// Same remove-then-insert move as [`Self::move_row`], applied to every row.
    pub fn move_column(&mut self, from: usize, to: usize) -> bool {
        let count = self.column_count();
        if from >= count || to >= count {
            trace!("move_column({} -> {}) ignored: {} columns.", from, to, count);
            return false;
        }
        if from == to {
            return false;
        }
        for row in self.rows.iter_mut() {
            let cell = row.remove(from);
            row.insert(to, cell);
        }
        true
    }

    /// Tab-separated rows. Content is written verbatim; embedded tabs or
    /// newlines are not escaped.
    pub fn export_to_tsv(&self) -> String {
        self.join_rows(|cell| cell.content.clone(), "\t")
    }

    /// Comma-separated rows with every field wrapped in double quotes.
    /// Embedded quotes and commas are not escaped.
    pub fn export_to_csv(&self) -> String {
        self.join_rows(|cell| format!("\"{}\"", cell.content), ",")
    }

    fn join_rows(&self, field: impl Fn(&Cell) -> String, separator: &str) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(&field).collect::<Vec<_>>().join(separator))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn descending_unique(indices: &[usize]) -> Vec<usize> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();
    sorted
}
