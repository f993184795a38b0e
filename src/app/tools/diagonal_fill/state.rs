//! State-Definitionen und Konstruktor für das Diagonal-Füll-Tool.

use super::corner::Corner;
use super::geometry::DiagonalPath;
use crate::core::CellCoord;
use crate::shared::options::{DEFAULT_FILL_COLOR, DIAGONAL_SEARCH_RADIUS};
use crate::shared::PainterOptions;

/// Phase der Drag-Geste.
///
/// `Idle → Dragging → Committed | Cancelled`; ein neuer Drag startet aus
/// jeder Endphase wieder über `Dragging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPhase {
    /// Kein Drag aktiv
    Idle,
    /// Drag läuft; Vorschau wird bei jeder Zeigerbewegung neu berechnet
    Dragging(DragSession),
    /// Letzter Drag wurde übernommen
    Committed,
    /// Letzter Drag wurde verworfen
    Cancelled,
}

/// Zustand eines laufenden Drags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// Startzelle (gültige konkave Ecke)
    pub start: CellCoord,
    /// Eckentyp, der für den ganzen Drag gilt
    pub corner: Corner,
    /// Aktuelle Vorschau
    pub path: DiagonalPath,
}

/// Diagonal-Füll-Tool
#[derive(Debug, Clone)]
pub struct DiagonalFillTool {
    pub(crate) phase: DragPhase,
    /// Fallback-Farbe, falls keine Nachbarzelle als Farbquelle dient
    pub fill_color: String,
    /// Fallback-Deckkraft
    pub fill_opacity: Option<f32>,
    /// Suchradius (Zellen) für das Einrasten auf die nächste gültige Ecke
    pub search_radius: u32,
    /// Ungültigen Startpunkt auf die nächste gültige Ecke einrasten
    pub snap_to_nearest: bool,
}

impl DiagonalFillTool {
    /// Erstellt ein neues Diagonal-Füll-Tool mit Standardwerten.
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            fill_color: DEFAULT_FILL_COLOR.to_owned(),
            fill_opacity: None,
            search_radius: DIAGONAL_SEARCH_RADIUS,
            snap_to_nearest: true,
        }
    }

    /// Erstellt das Tool mit Werten aus den Painter-Optionen.
    pub fn from_options(options: &PainterOptions) -> Self {
        Self {
            fill_color: options.fill_color.clone(),
            fill_opacity: options.fill_opacity,
            search_radius: options.diagonal_search_radius,
            snap_to_nearest: options.diagonal_snap_to_nearest,
            ..Self::new()
        }
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Prüft ob gerade ein Drag läuft.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Vorschau-Pfad des laufenden Drags.
    pub fn path(&self) -> Option<&DiagonalPath> {
        match &self.phase {
            DragPhase::Dragging(session) => Some(&session.path),
            _ => None,
        }
    }
}

impl Default for DiagonalFillTool {
    fn default() -> Self {
        Self::new()
    }
}
