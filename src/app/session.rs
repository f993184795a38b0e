//! Mal-Sitzung: aktueller Karten-Stand plus Undo/Redo.

use super::history::{EditHistory, Snapshot};
use super::tools::PaintResult;
use super::use_cases::apply_paint_result_in_place;
use crate::core::CellStore;
use crate::shared::PainterOptions;

/// Hält den aktuellen Stand einer Karte und wendet Tool-Ergebnisse als
/// atomare, rückgängig machbare Batches an.
#[derive(Debug)]
pub struct PaintSession {
    cells: CellStore,
    history: EditHistory,
}

impl PaintSession {
    /// Erstellt eine Sitzung über einem vorhandenen Stand.
    pub fn new(cells: CellStore, options: &PainterOptions) -> Self {
        Self {
            cells,
            history: EditHistory::new_with_capacity(options.undo_depth),
        }
    }

    /// Aktueller Stand (Basis für Index und Tool-Vorschau).
    pub fn cells(&self) -> &CellStore {
        &self.cells
    }

    /// Wendet ein Tool-Ergebnis an. Leere Ergebnisse erzeugen keinen Undo-Schritt.
    pub fn apply(&mut self, result: &PaintResult) -> bool {
        if result.is_empty() {
            return false;
        }
        self.history.record_snapshot(Snapshot::new(&self.cells));
        apply_paint_result_in_place(&mut self.cells, result);
        true
    }

    /// Stellt den vorherigen Stand wieder her. `false` ohne Undo-Schritt.
    pub fn undo(&mut self) -> bool {
        match self
            .history
            .pop_undo_with_current(Snapshot::new(&self.cells))
        {
            Some(prev) => {
                self.cells = prev.cells;
                true
            }
            None => false,
        }
    }

    /// Wiederholt den zuletzt rückgängig gemachten Schritt.
    pub fn redo(&mut self) -> bool {
        match self
            .history
            .pop_redo_with_current(Snapshot::new(&self.cells))
        {
            Some(next) => {
                self.cells = next.cells;
                true
            }
            None => false,
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
