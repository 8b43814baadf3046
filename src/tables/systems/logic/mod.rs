// src/tables/systems/logic/mod.rs

// Declare modules for each handler
pub mod delete_columns;
pub mod delete_rows;
pub mod export;
pub mod reorder;
pub mod update_cell;

// Re-export the handler functions for easier use in plugin.rs
pub use delete_columns::handle_delete_columns_request;
pub use delete_rows::handle_delete_rows_request;
pub use export::handle_export_request;
pub use reorder::{handle_move_column_request, handle_move_row_request};
pub use update_cell::handle_cell_update;

#[cfg(test)]
mod tests;
