// src/tables/resources.rs
use bevy::prelude::*;
use std::collections::BTreeMap;

use super::editable_table::EditableTable;
use super::export::ExportFormat;

/// All tables open in the editor, keyed by name.
#[derive(Resource, Default, Debug)]
pub struct TableRegistry {
    tables: BTreeMap<String, EditableTable>,
}

impl TableRegistry {
    /// Adds or replaces a table. Returns the table previously stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, table: EditableTable) -> Option<EditableTable> {
        let name = name.into();
        let previous = self.tables.insert(name.clone(), table);
        if previous.is_some() {
            warn!("Replaced existing table '{}' in registry.", name);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&EditableTable> {
        self.tables.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut EditableTable> {
        self.tables.get_mut(name)
    }

    /// Sorted table names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut EditableTable)> {
        self.tables.iter_mut().map(|(name, table)| (name.as_str(), table))
    }
}

/// Last exported text, waiting to be picked up by whatever delivers it
/// (clipboard, file, stdout).
#[derive(Resource, Default, Debug, Clone)]
pub struct ExportBuffer {
    pub table: Option<String>,
    pub format: ExportFormat,
    pub text: Option<String>,
}

impl ExportBuffer {
    /// Moves the pending text out, leaving the buffer empty.
    pub fn take(&mut self) -> Option<String> {
        self.table = None;
        self.text.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_insert_and_lookup() {
        let mut registry = TableRegistry::default();
        assert!(registry.insert("receipt", EditableTable::new_empty(2, 2)).is_none());
        assert!(registry.insert("invoice", EditableTable::new_empty(1, 1)).is_none());

        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["invoice", "receipt"]);
        assert_eq!(registry.get("receipt").map(EditableTable::row_count), Some(2));

        registry.get_mut("invoice").unwrap().remove_row(0);
        assert!(registry.get("invoice").unwrap().is_empty());
        assert!(registry.get("missing").is_none());

        let replaced = registry.insert("receipt", EditableTable::new_empty(0, 0));
        assert_eq!(replaced.map(|t| t.row_count()), Some(2));
    }

    #[test]
    fn test_export_buffer_take_clears() {
        let mut buffer = ExportBuffer {
            table: Some("t".to_string()),
            format: ExportFormat::Csv,
            text: Some("\"a\"".to_string()),
        };
        assert_eq!(buffer.take().as_deref(), Some("\"a\""));
        assert!(buffer.text.is_none());
        assert!(buffer.table.is_none());
    }
}
