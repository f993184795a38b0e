//! Segment-Pinsel: malt oder radiert einzelne Dreiecks-Segmente per Drag.

use super::{PaintOp, PaintPreview, PaintResult, PaintTool, ToolAction};
use crate::core::topology::segment_at;
use crate::core::{CellCoord, CellIndex, SegmentName, SegmentSet};
use crate::shared::options::DEFAULT_FILL_COLOR;
use crate::shared::PainterOptions;
use glam::Vec2;
use indexmap::IndexMap;

/// Wirkung des Pinsels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushMode {
    /// Segmente füllen
    #[default]
    Paint,
    /// Segmente entfernen
    Erase,
}

/// Segment-Pinsel
#[derive(Debug, Clone)]
pub struct SegmentBrushTool {
    /// Malen oder Radieren
    pub mode: BrushMode,
    /// Füllfarbe
    pub color: String,
    /// Deckkraft
    pub opacity: Option<f32>,
    /// Berührte Segmente je Zelle in Strich-Reihenfolge
    stroke: IndexMap<CellCoord, SegmentSet>,
    dragging: bool,
}

impl SegmentBrushTool {
    /// Erstellt einen neuen Pinsel mit Standardfarbe.
    pub fn new() -> Self {
        Self {
            mode: BrushMode::Paint,
            color: DEFAULT_FILL_COLOR.to_owned(),
            opacity: None,
            stroke: IndexMap::new(),
            dragging: false,
        }
    }

    /// Erstellt den Pinsel mit Werten aus den Painter-Optionen.
    pub fn from_options(options: &PainterOptions) -> Self {
        Self {
            color: options.fill_color.clone(),
            opacity: options.fill_opacity,
            ..Self::new()
        }
    }

    /// Zelle und Segment unter einer Position in Zell-Einheiten.
    pub fn hit(pos: Vec2) -> (CellCoord, SegmentName) {
        let floor = pos.floor();
        let coord = CellCoord::new(floor.x as i32, floor.y as i32);
        (coord, segment_at(pos - floor))
    }

    /// Nimmt ein Segment in den Strich auf. `true` wenn es neu war.
    fn touch(&mut self, pos: Vec2) -> bool {
        let (coord, segment) = Self::hit(pos);
        let set = self.stroke.entry(coord).or_default();
        if set.contains(segment) {
            return false;
        }
        set.insert(segment);
        true
    }
}

impl Default for SegmentBrushTool {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintTool for SegmentBrushTool {
    fn name(&self) -> &str {
        "◭ Segment-Pinsel"
    }

    fn status_text(&self) -> &str {
        match (self.mode, self.dragging) {
            (BrushMode::Paint, false) => "Segmente anklicken oder überstreichen zum Füllen",
            (BrushMode::Erase, false) => "Segmente anklicken oder überstreichen zum Entfernen",
            (_, true) => "Loslassen zum Übernehmen",
        }
    }

    fn on_press(&mut self, pos: Vec2, _index: &CellIndex<'_>) -> ToolAction {
        self.stroke.clear();
        self.dragging = true;
        self.touch(pos);
        ToolAction::UpdatePreview
    }

    fn on_drag(&mut self, pos: Vec2, _index: &CellIndex<'_>) -> ToolAction {
        if !self.dragging {
            return ToolAction::Ignored;
        }
        if self.touch(pos) {
            ToolAction::UpdatePreview
        } else {
            ToolAction::Continue
        }
    }

    fn on_release(&mut self, index: &CellIndex<'_>) -> Option<PaintResult> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        let stroke = std::mem::take(&mut self.stroke);

        let ops: Vec<PaintOp> = match self.mode {
            BrushMode::Paint => stroke
                .into_iter()
                .map(|(coord, segments)| PaintOp::SetSegments {
                    coord,
                    segments,
                    color: self.color.clone(),
                    opacity: self.opacity,
                })
                .collect(),
            BrushMode::Erase => stroke
                .into_iter()
                .filter(|(coord, _)| index.is_painted(*coord))
                .map(|(coord, segments)| PaintOp::RemoveSegments { coord, segments })
                .collect(),
        };

        if ops.is_empty() {
            return None;
        }
        Some(PaintResult { ops })
    }

    fn preview(&self) -> PaintPreview {
        let segments = self
            .stroke
            .iter()
            .flat_map(|(coord, set)| set.iter().map(move |segment| (*coord, segment)))
            .collect();
        PaintPreview { segments }
    }

    fn cancel(&mut self) {
        self.stroke.clear();
        self.dragging = false;
    }

    fn has_pending_input(&self) -> bool {
        self.dragging
    }
}
