//! RPG Map Painter Library.
//! Teilzellen-Malmodell für Tabletop-Karten: Segmente, Rahmen und Diagonal-Füllung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use crate::app::{
    apply_paint_result, BrushMode, Corner, DiagonalDirection, DiagonalFillTool, DiagonalPath,
    PaintOp, PaintResult, PaintSession, PaintTool, SegmentBrushTool, ToolAction,
};
pub use crate::core::{
    build_index, calculate_borders, Cell, CellBorders, CellCoord, CellGeometry, CellIndex,
    CellStore, SegmentName, SegmentSet,
};
pub use json::{parse_cells_json, write_cells_json};
pub use shared::PainterOptions;
