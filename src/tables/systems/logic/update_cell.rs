// src/tables/systems/logic/update_cell.rs
use crate::tables::{
    events::{TableDataModifiedEvent, TableOperationFeedback, UpdateCellEvent},
    resources::TableRegistry,
};
use bevy::prelude::*;

/// Writes edited text into cells. Unchanged values produce no modification event.
pub fn handle_cell_update(
    mut events: EventReader<UpdateCellEvent>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut data_modified_writer: EventWriter<TableDataModifiedEvent>,
) {
    for event in events.read() {
        let table_name = &event.table;
        let (row_idx, col_idx) = (event.row_index, event.col_index);

        let Some(table) = registry.get_mut(table_name) else {
            error!(
                "Cell update failed for '{}' cell[{},{}]: Table not found.",
                table_name, row_idx, col_idx
            );
            feedback_writer.write(TableOperationFeedback {
                message: format!("Cell update failed: table '{}' not found.", table_name),
                is_error: true,
            });
            continue;
        };

        match table.update_cell(row_idx, col_idx, event.new_value.clone()) {
            Some(old_value) if old_value == event.new_value => {
                trace!(
                    "Cell '{}'[{},{}] unchanged, skipping notification.",
                    table_name, row_idx, col_idx
                );
            }
            Some(_) => {
                debug!("Updated cell '{}'[{},{}].", table_name, row_idx, col_idx);
                data_modified_writer.write(TableDataModifiedEvent {
                    table: table_name.clone(),
                });
            }
            None => {
                let full_msg = format!(
                    "Cell update ignored for '{}' cell[{},{}]: outside {}x{} grid.",
                    table_name,
                    row_idx,
                    col_idx,
                    table.row_count(),
                    table.column_count()
                );
                warn!("{}", full_msg);
                feedback_writer.write(TableOperationFeedback {
                    message: full_msg,
                    is_error: true,
                });
            }
        }
    }
}
