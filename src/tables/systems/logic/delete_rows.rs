// src/tables/systems/logic/delete_rows.rs
use crate::tables::{
    events::{RequestDeleteRows, TableDataModifiedEvent, TableOperationFeedback},
    resources::TableRegistry,
};
use bevy::prelude::*;

/// Handles deleting one or more specified rows from a table.
pub fn handle_delete_rows_request(
    mut events: EventReader<RequestDeleteRows>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut data_modified_writer: EventWriter<TableDataModifiedEvent>,
) {
    for event in events.read() {
        let table_name = &event.table;

        if event.row_indices.is_empty() {
            trace!("Skipping delete rows request for '{}': No indices provided.", table_name);
            continue;
        }

        let Some(table) = registry.get_mut(table_name) else {
            error!("Failed to delete rows: table '{}' not found.", table_name);
            feedback_writer.write(TableOperationFeedback {
                message: format!("Delete failed: table '{}' not found.", table_name),
                is_error: true,
            });
            continue;
        };

        let initial_row_count = table.row_count();
        // Duplicates collapse, so only count distinct indices as requested.
        let mut requested = event.row_indices.clone();
        requested.sort_unstable();
        requested.dedup();

        let deleted_count = table.remove_rows(&requested);
        let skipped = requested.len() - deleted_count;

        if deleted_count == 0 {
            warn!(
                "No rows deleted from '{}': all {} indices out of bounds ({} rows).",
                table_name,
                requested.len(),
                initial_row_count
            );
            feedback_writer.write(TableOperationFeedback {
                message: format!("No rows deleted from '{}': indices out of bounds.", table_name),
                is_error: true,
            });
            continue;
        }

        data_modified_writer.write(TableDataModifiedEvent {
            table: table_name.clone(),
        });

        let mut message = format!("Deleted {} row(s) from '{}'.", deleted_count, table_name);
        if skipped > 0 {
            message.push_str(&format!(
                " Skipped {} index(es) out of bounds ({} rows).",
                skipped, initial_row_count
            ));
        }
        info!("{}", message);
        feedback_writer.write(TableOperationFeedback {
            message,
            is_error: skipped > 0,
        });
    }
}
