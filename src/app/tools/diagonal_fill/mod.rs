//! Diagonal-Füll-Tool: Füllt eine Treppe leerer konkaver Ecken mit einer
//! durchgehenden 45°-Diagonale.
//!
//! Der Drag startet an einer gültigen Ecke; jede Zeigerbewegung projiziert das
//! Ziel auf die Diagonale der Ecke und sammelt alle gültigen Ecken gleichen
//! Typs entlang der Linie. Beim Loslassen werden diese mit den 4 Segmenten
//! der Ecke gefüllt.

pub mod corner;
pub mod geometry;
mod lifecycle;
pub mod state;


pub use corner::{corner_at, segments_for_corner, Corner, DiagonalDirection};
pub use geometry::{
    diagonal_direction_between, diagonal_path, fill_source, find_nearest_valid_corner,
    is_valid_concave_corner, project_onto_diagonal, DiagonalPath,
};
pub use state::{DiagonalFillTool, DragPhase, DragSession};
