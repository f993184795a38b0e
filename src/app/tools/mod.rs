//! Trait-basiertes Tool-System für Mal-Werkzeuge.
//!
//! Jedes Tool implementiert den `PaintTool`-Trait. Tools erzeugen reine
//! Daten (`PaintResult`), die Mutation erfolgt zentral in `apply_paint_result`.

/// Diagonal-Füll-Tool: Füllt eine Treppe konkaver Ecken entlang einer 45°-Linie.
pub mod diagonal_fill;
/// PaintTool-Trait: Schnittstelle für alle Mal-Werkzeuge.
mod paint_tool;
/// Segment-Pinsel: Malt oder radiert einzelne Dreiecks-Segmente.
pub mod segment_brush;

pub use paint_tool::PaintTool;

use crate::core::{CellCoord, SegmentName, SegmentSet};

// ── Typen ────────────────────────────────────────────────────────

/// Rückgabe der Zeiger-Handler: Steuert den Tool-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Eingabe ignoriert (kein gültiger Startpunkt / kein Drag aktiv)
    Ignored,
    /// Drag läuft, Vorschau unverändert
    Continue,
    /// Vorschau hat sich geändert: Neu zeichnen
    UpdatePreview,
}

/// Eine einzelne Mal-Operation auf dem Cell-Store.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// Segmente vereinigen und ganze Zelle neu färben
    SetSegments {
        coord: CellCoord,
        segments: SegmentSet,
        color: String,
        opacity: Option<f32>,
    },
    /// Segmente entfernen
    RemoveSegments {
        coord: CellCoord,
        segments: SegmentSet,
    },
}

impl PaintOp {
    /// Zielkoordinate der Operation.
    pub fn coord(&self) -> CellCoord {
        match self {
            PaintOp::SetSegments { coord, .. } | PaintOp::RemoveSegments { coord, .. } => *coord,
        }
    }
}

/// Ergebnis eines Mal-Tools: Reine Daten, keine Mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintResult {
    /// Operationen in Anwendungsreihenfolge
    pub ops: Vec<PaintOp>,
}

impl PaintResult {
    /// Prüft ob das Ergebnis keine Operation enthält.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Betroffene Koordinaten (für gezielte Rahmen-Neuberechnung).
    pub fn touched_coords(&self) -> Vec<CellCoord> {
        let mut coords: Vec<CellCoord> = self.ops.iter().map(PaintOp::coord).collect();
        coords.sort_unstable();
        coords.dedup();
        coords
    }
}

/// Vorschau-Geometrie für das Rendering (halbtransparent im Viewport).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaintPreview {
    /// Vorschau-Dreiecke als (Zelle, Segment)
    pub segments: Vec<(CellCoord, SegmentName)>,
}
