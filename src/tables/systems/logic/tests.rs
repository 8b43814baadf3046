// src/tables/systems/logic/tests.rs
//! Handler tests driven through a bare App with the tables plugin.

use bevy::prelude::*;

use crate::tables::{
    cell::Cell,
    events::{
        RequestDeleteColumns, RequestDeleteRows, RequestExportTable, RequestMoveColumn,
        RequestMoveRow, TableDataModifiedEvent, TableOperationFeedback, UpdateCellEvent,
    },
    EditableTable, ExportBuffer, ExportFormat, TableRegistry, TablesPlugin,
};

const TABLE: &str = "receipt";

fn setup_app(grid: &[&[&str]]) -> App {
    let mut app = App::new();
    app.add_plugins(TablesPlugin);
    let table = EditableTable::from_rows(
        grid.iter()
            .map(|row| row.iter().map(|text| Cell::new(*text, None)).collect())
            .collect(),
    );
    app.world_mut().resource_mut::<TableRegistry>().insert(TABLE, table);
    app
}

fn tsv(app: &App) -> String {
    app.world()
        .resource::<TableRegistry>()
        .get(TABLE)
        .map(EditableTable::export_to_tsv)
        .unwrap_or_default()
}

fn feedback(app: &App) -> Vec<TableOperationFeedback> {
    app.world()
        .resource::<Events<TableOperationFeedback>>()
        .iter_current_update_events()
        .cloned()
        .collect()
}

fn modified_count(app: &App) -> usize {
    app.world()
        .resource::<Events<TableDataModifiedEvent>>()
        .iter_current_update_events()
        .count()
}

#[test]
fn test_delete_rows_in_any_order() {
    let mut app = setup_app(&[&["A"], &["B"], &["C"], &["D"]]);
    app.world_mut().send_event(RequestDeleteRows {
        table: TABLE.to_string(),
        row_indices: vec![0, 2],
    });
    app.update();

    assert_eq!(tsv(&app), "B\nD");
    assert_eq!(modified_count(&app), 1);
    let fb = feedback(&app);
    assert_eq!(fb.len(), 1);
    assert!(!fb[0].is_error);
}

#[test]
fn test_delete_rows_partial_out_of_bounds() {
    let mut app = setup_app(&[&["A"], &["B"]]);
    app.world_mut().send_event(RequestDeleteRows {
        table: TABLE.to_string(),
        row_indices: vec![1, 5, 1],
    });
    app.update();

    assert_eq!(tsv(&app), "A");
    let fb = feedback(&app);
    assert_eq!(fb.len(), 1);
    assert!(fb[0].is_error);
    assert!(fb[0].message.contains("Skipped 1"));
}

#[test]
fn test_delete_rows_unknown_table() {
    let mut app = setup_app(&[&["A"]]);
    app.world_mut().send_event(RequestDeleteRows {
        table: "missing".to_string(),
        row_indices: vec![0],
    });
    app.update();

    assert_eq!(tsv(&app), "A");
    assert_eq!(modified_count(&app), 0);
    assert!(feedback(&app)[0].is_error);
}

#[test]
fn test_cell_update_unknown_table() {
    let mut app = setup_app(&[&["A"]]);
    app.world_mut().send_event(UpdateCellEvent {
        table: "missing".to_string(),
        row_index: 0,
        col_index: 0,
        new_value: "B".to_string(),
    });
    app.update();

    assert_eq!(tsv(&app), "A");
    assert_eq!(modified_count(&app), 0);
    let messages = feedback(&app);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_error);
    assert!(messages[0].message.contains("'missing' not found"));
}

#[test]
fn test_delete_columns_keeps_rows_aligned() {
    let mut app = setup_app(&[&["a", "b", "c"], &["d", "e", "f"]]);
    app.world_mut().send_event(RequestDeleteColumns {
        table: TABLE.to_string(),
        column_indices: vec![2, 0],
    });
    app.update();

    assert_eq!(tsv(&app), "b\ne");
    assert_eq!(modified_count(&app), 1);
}

#[test]
fn test_delete_columns_all_out_of_bounds_is_noop() {
    let mut app = setup_app(&[&["a", "b"]]);
    app.world_mut().send_event(RequestDeleteColumns {
        table: TABLE.to_string(),
        column_indices: vec![2, 3],
    });
    app.update();

    assert_eq!(tsv(&app), "a\tb");
    assert_eq!(modified_count(&app), 0);
    assert!(feedback(&app)[0].is_error);
}

#[test]
fn test_move_row_and_column() {
    let mut app = setup_app(&[&["a", "b"], &["c", "d"], &["e", "f"]]);
    app.world_mut().send_event(RequestMoveRow {
        table: TABLE.to_string(),
        from: 0,
        to: 2,
    });
    app.world_mut().send_event(RequestMoveColumn {
        table: TABLE.to_string(),
        from: 1,
        to: 0,
    });
    app.update();

    assert_eq!(tsv(&app), "d\tc\nf\te\nb\ta");
    assert_eq!(modified_count(&app), 2);
}

#[test]
fn test_move_out_of_range_reports_error() {
    let mut app = setup_app(&[&["a"], &["b"]]);
    app.world_mut().send_event(RequestMoveRow {
        table: TABLE.to_string(),
        from: 0,
        to: 2,
    });
    app.update();

    assert_eq!(tsv(&app), "a\nb");
    assert_eq!(modified_count(&app), 0);
    assert!(feedback(&app)[0].is_error);
}

#[test]
fn test_move_to_same_index_is_silent() {
    let mut app = setup_app(&[&["a"], &["b"]]);
    app.world_mut().send_event(RequestMoveRow {
        table: TABLE.to_string(),
        from: 1,
        to: 1,
    });
    app.update();

    assert!(feedback(&app).is_empty());
    assert_eq!(modified_count(&app), 0);
}

#[test]
fn test_cell_update_notifies_only_on_change() {
    let mut app = setup_app(&[&["a", "b"]]);
    app.world_mut().send_event(UpdateCellEvent {
        table: TABLE.to_string(),
        row_index: 0,
        col_index: 1,
        new_value: "B".to_string(),
    });
    app.world_mut().send_event(UpdateCellEvent {
        table: TABLE.to_string(),
        row_index: 0,
        col_index: 0,
        new_value: "a".to_string(),
    });
    app.update();

    assert_eq!(tsv(&app), "a\tB");
    assert_eq!(modified_count(&app), 1);
}

#[test]
fn test_cell_update_out_of_range() {
    let mut app = setup_app(&[&["a"]]);
    app.world_mut().send_event(UpdateCellEvent {
        table: TABLE.to_string(),
        row_index: 3,
        col_index: 0,
        new_value: "x".to_string(),
    });
    app.update();

    assert_eq!(tsv(&app), "a");
    assert!(feedback(&app)[0].is_error);
}

#[test]
fn test_export_sees_changes_from_same_frame() {
    let mut app = setup_app(&[&["a", "b"], &["c", "d"]]);
    app.world_mut().send_event(RequestDeleteRows {
        table: TABLE.to_string(),
        row_indices: vec![0],
    });
    app.world_mut().send_event(RequestExportTable {
        table: TABLE.to_string(),
        format: ExportFormat::Csv,
    });
    app.update();

    let buffer = app.world().resource::<ExportBuffer>();
    assert_eq!(buffer.text.as_deref(), Some("\"c\",\"d\""));
    assert_eq!(buffer.table.as_deref(), Some(TABLE));
    assert_eq!(buffer.format, ExportFormat::Csv);
    assert!(feedback(&app)
        .iter()
        .any(|fb| !fb.is_error && fb.message == "Copied 1 row(s) as CSV."));
}

#[test]
fn test_export_unknown_table() {
    let mut app = setup_app(&[&["a"]]);
    app.world_mut().send_event(RequestExportTable {
        table: "missing".to_string(),
        format: ExportFormat::Tsv,
    });
    app.update();

    assert!(app.world().resource::<ExportBuffer>().text.is_none());
    assert!(feedback(&app)[0].is_error);
}
