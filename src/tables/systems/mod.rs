// src/tables/systems/mod.rs

pub mod io;    // Reading recognizer output and writing export files
pub mod logic; // Event handlers that mutate or export tables
