//! PaintTool-Trait: Schnittstelle für alle Mal-Werkzeuge mit Drag-Geste.

use crate::core::CellIndex;
use glam::Vec2;

use super::{PaintPreview, PaintResult, ToolAction};

/// Schnittstelle für Mal-Werkzeuge (Segment-Pinsel, Diagonal-Füllung, …).
///
/// Tools sind zustandsbehaftet (Drag-Phasen) und arbeiten gegen einen
/// unveränderten Index des Basis-Stands. Sie erzeugen reine Daten
/// (`PaintResult`); die Mutation erfolgt zentral in `apply_paint_result`.
/// Positionen sind Zell-Einheiten (Zelle `(x, y)` deckt `[x, x+1) × [y, y+1)` ab).
pub trait PaintTool {
    /// Anzeigename für Toolbar
    fn name(&self) -> &str;

    /// Statustext für das Properties-Panel
    fn status_text(&self) -> &str;

    /// Zeiger gedrückt: Drag beginnen.
    fn on_press(&mut self, pos: Vec2, index: &CellIndex<'_>) -> ToolAction;

    /// Zeiger bewegt während eines Drags.
    fn on_drag(&mut self, pos: Vec2, index: &CellIndex<'_>) -> ToolAction;

    /// Zeiger losgelassen: Ergebnis als reine Daten erzeugen.
    fn on_release(&mut self, index: &CellIndex<'_>) -> Option<PaintResult>;

    /// Vorschau der aktuellen Geste.
    fn preview(&self) -> PaintPreview;

    /// Laufenden Drag verwerfen (Escape).
    fn cancel(&mut self);

    /// Läuft gerade eine Geste?
    fn has_pending_input(&self) -> bool;
}
