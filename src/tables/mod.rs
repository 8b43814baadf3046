// src/tables/mod.rs

// --- Public Interface ---
pub mod cell;
pub mod editable_table;
pub mod error;
pub mod events;
pub mod export;
pub mod plugin;
pub mod recognition;
pub mod resources;

// Handlers are wired up by the plugin; io helpers are used by the binary.
pub(crate) mod systems;

pub use cell::CellId;
pub use editable_table::EditableTable;
pub use export::ExportFormat;
pub use plugin::{TableSystemSet, TablesPlugin};
pub use resources::{ExportBuffer, TableRegistry};
