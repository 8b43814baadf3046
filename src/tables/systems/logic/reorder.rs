// src/tables/systems/logic/reorder.rs
use crate::tables::{
    editable_table::EditableTable,
    events::{RequestMoveColumn, RequestMoveRow, TableDataModifiedEvent, TableOperationFeedback},
    resources::TableRegistry,
};
use bevy::prelude::*;

#[derive(Debug, Clone, Copy)]
enum MoveAxis {
    Row,
    Column,
}

impl MoveAxis {
    fn label(self) -> &'static str {
        match self {
            MoveAxis::Row => "row",
            MoveAxis::Column => "column",
        }
    }

    fn count(self, table: &EditableTable) -> usize {
        match self {
            MoveAxis::Row => table.row_count(),
            MoveAxis::Column => table.column_count(),
        }
    }

    fn apply(self, table: &mut EditableTable, from: usize, to: usize) -> bool {
        match self {
            MoveAxis::Row => table.move_row(from, to),
            MoveAxis::Column => table.move_column(from, to),
        }
    }
}

pub fn handle_move_row_request(
    mut events: EventReader<RequestMoveRow>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut data_modified_writer: EventWriter<TableDataModifiedEvent>,
) {
    for event in events.read() {
        apply_move(
            MoveAxis::Row,
            &event.table,
            event.from,
            event.to,
            &mut registry,
            &mut feedback_writer,
            &mut data_modified_writer,
        );
    }
}

pub fn handle_move_column_request(
    mut events: EventReader<RequestMoveColumn>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut data_modified_writer: EventWriter<TableDataModifiedEvent>,
) {
    for event in events.read() {
        apply_move(
            MoveAxis::Column,
            &event.table,
            event.from,
            event.to,
            &mut registry,
            &mut feedback_writer,
            &mut data_modified_writer,
        );
    }
}

fn apply_move(
    axis: MoveAxis,
    table_name: &str,
    from: usize,
    to: usize,
    registry: &mut TableRegistry,
    feedback_writer: &mut EventWriter<TableOperationFeedback>,
    data_modified_writer: &mut EventWriter<TableDataModifiedEvent>,
) {
    if from == to {
        trace!(
            "Skipping {} move for '{}': old and new indices are the same ({}).",
            axis.label(),
            table_name,
            from
        );
        return;
    }

    let Some(table) = registry.get_mut(table_name) else {
        error!("Failed to move {}: table '{}' not found.", axis.label(), table_name);
        feedback_writer.write(TableOperationFeedback {
            message: format!("Move failed: table '{}' not found.", table_name),
            is_error: true,
        });
        return;
    };

    let count = axis.count(table);
    if !axis.apply(table, from, to) {
        let message = format!(
            "Invalid indices for {} move in '{}'. From: {}, To: {}. Total: {}.",
            axis.label(),
            table_name,
            from,
            to,
            count
        );
        warn!("{}", message);
        feedback_writer.write(TableOperationFeedback {
            message,
            is_error: true,
        });
        return;
    }

    let message = format!(
        "Moved {} from index {} to {} in '{}'.",
        axis.label(),
        from,
        to,
        table_name
    );
    info!("{}", message);
    data_modified_writer.write(TableDataModifiedEvent {
        table: table_name.to_string(),
    });
    feedback_writer.write(TableOperationFeedback {
        message,
        is_error: false,
    });
}
