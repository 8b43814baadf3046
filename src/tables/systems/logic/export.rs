// src/tables/systems/logic/export.rs
use crate::tables::{
    events::{RequestExportTable, TableOperationFeedback},
    resources::{ExportBuffer, TableRegistry},
};
use bevy::prelude::*;

/// Renders requested tables into the [`ExportBuffer`]. A later request in the
/// same frame replaces an earlier one, as with a clipboard.
pub fn handle_export_request(
    mut events: EventReader<RequestExportTable>,
    registry: Res<TableRegistry>,
    mut buffer: ResMut<ExportBuffer>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
) {
    for event in events.read() {
        let Some(table) = registry.get(&event.table) else {
            feedback_writer.write(TableOperationFeedback {
                message: format!("Export failed: table '{}' not found.", event.table),
                is_error: true,
            });
            continue;
        };

        buffer.text = Some(event.format.render(table));
        buffer.table = Some(event.table.clone());
        buffer.format = event.format;

        info!(
            "Exported '{}' as {} ({} rows x {} columns).",
            event.table,
            event.format,
            table.row_count(),
            table.column_count()
        );
        feedback_writer.write(TableOperationFeedback {
            message: format!("Copied {} row(s) as {}.", table.row_count(), event.format),
            is_error: false,
        });
    }
}
