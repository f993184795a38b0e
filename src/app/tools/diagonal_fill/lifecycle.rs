//! Lifecycle-Methoden des DiagonalFillTool (PaintTool-Implementierung).

use super::super::{PaintOp, PaintPreview, PaintResult, PaintTool, ToolAction};
use super::corner::corner_at;
use super::geometry::{diagonal_path, fill_source, find_nearest_valid_corner};
use super::state::{DiagonalFillTool, DragPhase, DragSession};
use crate::core::{CellCoord, CellIndex};
use glam::Vec2;

impl DiagonalFillTool {
    /// Startet einen Drag an der Ecke unter `pos`.
    ///
    /// Ist die Ecke nicht gültig, wird (falls aktiviert) auf die nächste
    /// gültige Ecke gleichen Typs im Suchradius eingerastet.
    pub fn begin(&mut self, pos: Vec2, index: &CellIndex<'_>) -> ToolAction {
        let (coord, corner) = corner_at(pos);
        let radius = if self.snap_to_nearest {
            self.search_radius
        } else {
            0
        };

        let Some(start) = find_nearest_valid_corner(index, coord, corner, radius) else {
            log::debug!(
                "Keine gültige {}-Ecke bei ({}, {}) gefunden",
                corner,
                coord.x,
                coord.y
            );
            return ToolAction::Ignored;
        };

        let path = diagonal_path(index, start, corner, start);
        self.phase = DragPhase::Dragging(DragSession {
            start,
            corner,
            path,
        });
        ToolAction::UpdatePreview
    }

    /// Aktualisiert die Vorschau für die aktuelle Zeigerposition.
    pub fn update(&mut self, pos: Vec2, index: &CellIndex<'_>) -> ToolAction {
        let DragPhase::Dragging(session) = &mut self.phase else {
            return ToolAction::Ignored;
        };

        let floor = pos.floor();
        let target = CellCoord::new(floor.x as i32, floor.y as i32);
        let path = diagonal_path(index, session.start, session.corner, target);
        if path == session.path {
            return ToolAction::Continue;
        }
        session.path = path;
        ToolAction::UpdatePreview
    }

    /// Übernimmt den Drag: jede gültige Ecke des Pfads wird mit ihren 4 Segmenten gefüllt.
    ///
    /// Die Farbe stammt vom ersten gemalten Nachbarn der Ecke.
    pub fn commit(&mut self, index: &CellIndex<'_>) -> Option<PaintResult> {
        if !self.is_dragging() {
            return None;
        }
        let DragPhase::Dragging(session) =
            std::mem::replace(&mut self.phase, DragPhase::Committed)
        else {
            return None;
        };

        if session.path.is_empty() {
            self.phase = DragPhase::Cancelled;
            return None;
        }

        let segments = session.corner.segment_set();
        let ops = session
            .path
            .cells
            .iter()
            .map(|&coord| {
                let (color, opacity) = match fill_source(index, coord, session.corner) {
                    Some(source) => (source.color.clone(), source.opacity),
                    None => (self.fill_color.clone(), self.fill_opacity),
                };
                PaintOp::SetSegments {
                    coord,
                    segments,
                    color,
                    opacity,
                }
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Diagonal-Füllung übernommen: {} Ecke(n) vom Typ {}",
            ops.len(),
            session.corner
        );
        Some(PaintResult { ops })
    }

    /// Verwirft den laufenden Drag ohne Store-Änderung.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.phase = DragPhase::Cancelled;
        }
    }
}

impl PaintTool for DiagonalFillTool {
    fn name(&self) -> &str {
        "◢ Diagonal füllen"
    }

    fn status_text(&self) -> &str {
        match &self.phase {
            DragPhase::Dragging(_) => "Entlang der Diagonale ziehen, loslassen zum Füllen",
            _ => "Konkave Ecke anklicken und ziehen",
        }
    }

    fn on_press(&mut self, pos: Vec2, index: &CellIndex<'_>) -> ToolAction {
        self.begin(pos, index)
    }

    fn on_drag(&mut self, pos: Vec2, index: &CellIndex<'_>) -> ToolAction {
        self.update(pos, index)
    }

    fn on_release(&mut self, index: &CellIndex<'_>) -> Option<PaintResult> {
        self.commit(index)
    }

    fn preview(&self) -> PaintPreview {
        let DragPhase::Dragging(session) = &self.phase else {
            return PaintPreview::default();
        };
        let segments = session
            .path
            .cells
            .iter()
            .flat_map(|&coord| {
                session
                    .corner
                    .segments()
                    .into_iter()
                    .map(move |segment| (coord, segment))
            })
            .collect();
        PaintPreview { segments }
    }

    fn cancel(&mut self) {
        DiagonalFillTool::cancel(self);
    }

    fn has_pending_input(&self) -> bool {
        self.is_dragging()
    }
}
