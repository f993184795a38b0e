//! Core-Domänentypen: Segmente, Zellen, Cell-Store, Index und Rahmenberechnung.

pub mod borders;
pub mod cell;
pub mod cell_index;
pub mod cell_store;
pub mod segment;
/// Statische Topologie der 8-Dreiecks-Unterteilung
pub mod topology;

pub use borders::{
    calculate_borders, calculate_borders_for, CellBorders, CellGeometry, ExternalBorder,
    InternalBorder,
};
pub use cell::{get_filled_segments, has_segments, Cell, CellCoord, CellFill, CellRecord};
pub use cell_index::{build_index, CellIndex};
pub use cell_store::CellStore;
pub use segment::{SegmentName, SegmentSet};
