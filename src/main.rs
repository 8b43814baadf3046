// src/main.rs

use bevy::{log::LogPlugin, prelude::*};
use clap::Parser;
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::process::ExitCode;
use thiserror::Error;

mod cli;
mod settings;
mod tables;
mod ui;

use cli::{Cli, Commands, OutputArgs};
use settings::{
    io::{get_config_path, load_settings_from_file, save_settings_to_file, SettingsError},
    AppSettings,
};
use tables::{
    error::{ExportError, ImportError},
    events::{RequestExportTable, RequestMoveColumn, RequestMoveRow, UpdateCellEvent},
    systems::io::{load_recognized_table, timestamped_export_path, write_export_file},
    EditableTable, ExportBuffer, TableRegistry, TablesPlugin,
};
use ui::{
    selection::{RequestCommitEdit, RequestDeleteSelection, TableSelection},
    EditorUiPlugin,
};

#[derive(Error, Debug)]
enum RunError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Failed to render settings: {0}")]
    Render(#[from] serde_json::Error),
    #[error("Failed to write to stdout: {0}")]
    Stdout(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(LogPlugin {
        level: if cli.verbose {
            bevy::log::Level::DEBUG
        } else {
            bevy::log::Level::INFO
        },
        filter: "bevy_app=warn,bevy_ecs=warn".to_string(),
        ..default()
    });

    let resetting = matches!(cli.command, Commands::Settings { reset: true });
    let settings = match resolve_settings(load_settings_from_file(), resetting) {
        Ok(settings) => settings,
        Err(e) => return report_failure(e.into()),
    };

    app.add_plugins(TablesPlugin).add_plugins(EditorUiPlugin {
        notification_duration: settings.notification_duration(),
    });
    app.finish();
    app.cleanup();

    match run(&mut app, cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(e),
    }
}

fn report_failure(e: RunError) -> ExitCode {
    error!("{}", e);
    eprintln!("gridmend: {}", e);
    ExitCode::FAILURE
}

/// A malformed settings file is fatal unless it is about to be reset.
/// Without a config directory there is nothing to read, so defaults apply.
fn resolve_settings(
    loaded: Result<AppSettings, SettingsError>,
    resetting: bool,
) -> Result<AppSettings, SettingsError> {
    match loaded {
        Ok(settings) => Ok(settings),
        Err(SettingsError::NoConfigDir) => {
            warn!("No config directory available, using default settings.");
            Ok(AppSettings::default())
        }
        Err(e) if resetting => {
            warn!("Discarding unreadable settings: {}", e);
            Ok(AppSettings::default())
        }
        Err(e) => Err(e),
    }
}

fn run(app: &mut App, command: Commands, settings: &AppSettings) -> Result<(), RunError> {
    match command {
        Commands::Edit {
            input,
            cell_edits,
            delete_rows,
            delete_columns,
            row_moves,
            column_moves,
            strict,
            output,
        } => {
            let table = load_recognized_table(&input, settings.pad_ragged_rows && !strict)?;
            let name = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "table".to_string());
            open_table(app, &name, table);

            // Each edit opens the cell's text field and submits it, one frame per edit.
            for edit in cell_edits {
                let cell_id = app
                    .world()
                    .resource::<TableRegistry>()
                    .get(&name)
                    .and_then(|table| table.cell_at(edit.row, edit.column))
                    .map(|cell| cell.id());
                let world = app.world_mut();
                match cell_id {
                    Some(id) => {
                        world.resource_mut::<TableSelection>().begin_edit(id);
                        world.send_event(RequestCommitEdit { text: edit.text });
                        app.update();
                    }
                    // Out of range: let the update handler report it.
                    None => {
                        world.send_event(UpdateCellEvent {
                            table: name.clone(),
                            row_index: edit.row,
                            col_index: edit.column,
                            new_value: edit.text,
                        });
                    }
                }
            }

            let world = app.world_mut();

            // Deletions go through the selection, the same path as the delete button.
            let rows: BTreeSet<usize> = delete_rows.into_iter().collect();
            let columns: BTreeSet<usize> = delete_columns.into_iter().collect();
            if !rows.is_empty() || !columns.is_empty() {
                {
                    let mut selection = world.resource_mut::<TableSelection>();
                    for &row in &rows {
                        selection.toggle_row(row);
                    }
                    for &column in &columns {
                        selection.toggle_column(column);
                    }
                }
                world.send_event(RequestDeleteSelection);
            }

            for m in row_moves {
                world.send_event(RequestMoveRow {
                    table: name.clone(),
                    from: m.from,
                    to: m.to,
                });
            }
            for m in column_moves {
                world.send_event(RequestMoveColumn {
                    table: name.clone(),
                    from: m.from,
                    to: m.to,
                });
            }

            export_and_deliver(app, &name, &output, settings)
        }
        Commands::Blank {
            rows,
            columns,
            output,
        } => {
            let name = "blank";
            open_table(app, name, EditableTable::new_empty(rows, columns));
            export_and_deliver(app, name, &output, settings)
        }
        Commands::Settings { reset } => {
            let path = get_config_path()?;
            let current = if reset {
                let defaults = AppSettings::default();
                save_settings_to_file(&defaults)?;
                defaults
            } else {
                settings.clone()
            };
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&current)?);
            Ok(())
        }
    }
}

fn open_table(app: &mut App, name: &str, table: EditableTable) {
    let with_region = table
        .rows()
        .flatten()
        .filter(|cell| cell.original_region().is_some())
        .count();
    info!(
        "Opened table '{}' ({} rows x {} columns, {} cells with source regions).",
        name,
        table.row_count(),
        table.column_count(),
        with_region
    );
    let world = app.world_mut();
    world.resource_mut::<TableRegistry>().insert(name, table);
    world.resource_mut::<TableSelection>().set_active_table(name);
    debug!(
        "Open tables: {:?}",
        world.resource::<TableRegistry>().names().collect::<Vec<_>>()
    );
}

/// Runs one frame so every queued request is applied, then delivers the
/// exported text to a file or stdout.
fn export_and_deliver(
    app: &mut App,
    name: &str,
    output: &OutputArgs,
    settings: &AppSettings,
) -> Result<(), RunError> {
    let format = output.format.unwrap_or(settings.default_export_format);
    app.world_mut().send_event(RequestExportTable {
        table: name.to_string(),
        format,
    });
    app.update();

    let text = app
        .world_mut()
        .resource_mut::<ExportBuffer>()
        .take()
        .ok_or_else(|| ExportError::TableNotFound(name.to_string()))?;

    if let Some(path) = &output.output {
        write_export_file(path, &text)?;
    } else if let Some(dir) = &output.output_dir {
        write_export_file(&timestamped_export_path(dir, name, format), &text)?;
    } else {
        write_stdout(&mut io::stdout().lock(), &text)?;
    }
    Ok(())
}

/// Terminates non-empty output with a newline; an empty export prints nothing.
fn write_stdout(out: &mut impl Write, text: &str) -> io::Result<()> {
    if !text.is_empty() {
        writeln!(out, "{}", text)?;
    }
    out.flush()
}
