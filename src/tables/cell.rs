// src/tables/cell.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier assigned to a cell when it is created.
/// Survives row/column moves; a deleted cell's id is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(Uuid);

impl CellId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CellId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized bounding box reported by the recognizer for the source cell.
/// Carried as-is; nothing in the editor reads the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    id: CellId,
    pub content: String,
    original_region: Option<BoundingRegion>,
    /// Highlight flag owned by the presentation layer.
    pub selected: bool,
}

impl Cell {
    pub fn new(content: impl Into<String>, original_region: Option<BoundingRegion>) -> Self {
        Self {
            id: CellId::new(),
            content: content.into(),
            original_region,
            selected: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(String::new(), None)
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn original_region(&self) -> Option<&BoundingRegion> {
        self.original_region.as_ref()
    }
}
