//! Application-Layer: Mal-Tools, Sitzung mit Undo/Redo und Use-Cases.

pub mod history;
pub mod session;
pub mod tools;
pub mod use_cases;

pub use history::{EditHistory, Snapshot};
pub use session::PaintSession;
pub use tools::diagonal_fill::{Corner, DiagonalDirection, DiagonalFillTool, DiagonalPath};
pub use tools::segment_brush::{BrushMode, SegmentBrushTool};
pub use tools::{PaintOp, PaintPreview, PaintResult, PaintTool, ToolAction};
pub use use_cases::apply_paint_result;
