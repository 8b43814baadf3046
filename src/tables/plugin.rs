// src/tables/plugin.rs
use bevy::prelude::*;

use super::events::{
    RequestDeleteColumns, RequestDeleteRows, RequestExportTable, RequestMoveColumn,
    RequestMoveRow, TableDataModifiedEvent, TableOperationFeedback, UpdateCellEvent,
};
use super::resources::{ExportBuffer, TableRegistry};
use super::systems;

// Define system sets for ordering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableSystemSet {
    UserInput,    // Presentation systems turning gestures into requests
    ApplyChanges, // Systems mutating tables in the registry
    Export,       // Systems rendering tables to text
}

/// Plugin owning the editable tables and the requests that change them.
pub struct TablesPlugin;

impl Plugin for TablesPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                TableSystemSet::UserInput,
                TableSystemSet::ApplyChanges.after(TableSystemSet::UserInput),
                TableSystemSet::Export.after(TableSystemSet::ApplyChanges),
            ),
        );

        // --- Resource Initialization ---
        app.init_resource::<TableRegistry>()
            .init_resource::<ExportBuffer>();

        // --- Event Registration ---
        app.add_event::<RequestDeleteRows>()
            .add_event::<RequestDeleteColumns>()
            .add_event::<RequestMoveRow>()
            .add_event::<RequestMoveColumn>()
            .add_event::<UpdateCellEvent>()
            .add_event::<RequestExportTable>()
            .add_event::<TableDataModifiedEvent>()
            .add_event::<TableOperationFeedback>();

        // Edits address the grid as it was before this frame's deletions and moves.
        app.add_systems(
            Update,
            (
                systems::logic::handle_cell_update,
                systems::logic::handle_delete_rows_request,
                systems::logic::handle_delete_columns_request,
                systems::logic::handle_move_row_request,
                systems::logic::handle_move_column_request,
            )
                .chain()
                .in_set(TableSystemSet::ApplyChanges),
        );
        app.add_systems(
            Update,
            systems::logic::handle_export_request.in_set(TableSystemSet::Export),
        );

        info!("TablesPlugin initialized.");
    }
}
