// src/tables/systems/logic/delete_columns.rs
use crate::tables::{
    events::{RequestDeleteColumns, TableDataModifiedEvent, TableOperationFeedback},
    resources::TableRegistry,
};
use bevy::prelude::*;

pub fn handle_delete_columns_request(
    mut events: EventReader<RequestDeleteColumns>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut data_modified_writer: EventWriter<TableDataModifiedEvent>,
) {
    for event in events.read() {
        let table_name = &event.table;

        if event.column_indices.is_empty() {
            trace!(
                "Skipping delete columns request for '{}': No indices provided.",
                table_name
            );
            continue;
        }

        let Some(table) = registry.get_mut(table_name) else {
            error!("Failed to delete columns: table '{}' not found.", table_name);
            feedback_writer.write(TableOperationFeedback {
                message: format!("Delete failed: table '{}' not found.", table_name),
                is_error: true,
            });
            continue;
        };

        let initial_col_count = table.column_count();
        let mut requested = event.column_indices.clone();
        requested.sort_unstable();
        requested.dedup();

        let deleted_count = table.remove_columns(&requested);
        let skipped = requested.len() - deleted_count;

        if deleted_count == 0 {
            warn!(
                "No columns deleted from '{}': all {} indices out of bounds ({} columns).",
                table_name,
                requested.len(),
                initial_col_count
            );
            feedback_writer.write(TableOperationFeedback {
                message: format!(
                    "No columns deleted from '{}': indices out of bounds.",
                    table_name
                ),
                is_error: true,
            });
            continue;
        }

        data_modified_writer.write(TableDataModifiedEvent {
            table: table_name.clone(),
        });

        let mut message = format!("Deleted {} column(s) from '{}'.", deleted_count, table_name);
        if skipped > 0 {
            message.push_str(&format!(
                " Skipped {} index(es) out of bounds ({} columns).",
                skipped, initial_col_count
            ));
        }
        info!("{}", message);
        feedback_writer.write(TableOperationFeedback {
            message,
            is_error: skipped > 0,
        });
    }
}
