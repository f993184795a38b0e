//! Copy-on-Write-Sammlung aller bemalten Zellen.

use super::{Cell, CellCoord, CellFill, CellIndex, SegmentSet};
use indexmap::IndexMap;
use std::sync::Arc;

/// Alle bemalten Zellen einer Karte, eindeutig nach Koordinate.
///
/// Die Map liegt hinter einem `Arc`: Klonen ist O(1), die eigentliche Kopie
/// entsteht erst beim ersten Schreibzugriff (`Arc::make_mut`). Die
/// Einfügereihenfolge bleibt für die Persistenz erhalten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStore {
    cells: Arc<IndexMap<CellCoord, Cell>>,
}

impl CellStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut einen Store aus einer Zellfolge. Doppelte Koordinaten: die letzte Zelle gewinnt.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let cells: IndexMap<CellCoord, Cell> =
            cells.into_iter().map(|cell| (cell.coord, cell)).collect();
        Self {
            cells: Arc::new(cells),
        }
    }

    /// Anzahl bemalter Zellen.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Prüft ob keine Zelle bemalt ist.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterator über alle Zellen in Einfügereihenfolge.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Zelle an einer Koordinate.
    pub fn get_cell_at(&self, coord: CellCoord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Baut den Nachbarschafts-Index über den aktuellen Stand.
    pub fn index(&self) -> CellIndex<'_> {
        CellIndex::build(self.cells())
    }

    /// Prüft ob zwei Stores denselben Speicher teilen (noch keine Kopie erfolgt).
    pub fn shares_storage_with(&self, other: &CellStore) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells)
    }

    // ── Reine Operationen (liefern neuen Store) ─────────────────────

    /// Setzt eine volle Zelle (ersetzt eine vorhandene Zelle).
    pub fn set_cell(&self, coord: CellCoord, color: &str, opacity: Option<f32>) -> Self {
        let mut next = self.clone();
        next.apply_cell(coord, color, opacity);
        next
    }

    /// Entfernt die Zelle an einer Koordinate (voll oder segmentiert).
    pub fn remove_cell(&self, coord: CellCoord) -> Self {
        if !self.cells.contains_key(&coord) {
            return self.clone();
        }
        let mut next = self.clone();
        next.apply_remove_cell(coord);
        next
    }

    /// Vereinigt `segments` mit der Zelle an `coord` und färbt die ganze Zelle neu.
    pub fn set_segments(
        &self,
        coord: CellCoord,
        segments: SegmentSet,
        color: &str,
        opacity: Option<f32>,
    ) -> Self {
        let mut next = self.clone();
        next.apply_segments(coord, segments, color, opacity);
        next
    }

    /// Entfernt `segments` aus der Zelle an `coord`.
    pub fn remove_segments(&self, coord: CellCoord, segments: SegmentSet) -> Self {
        if !self.cells.contains_key(&coord) || segments.is_empty() {
            return self.clone();
        }
        let mut next = self.clone();
        next.apply_remove_segments(coord, segments);
        next
    }

    // ── Batch-Operationen (mutieren diesen Store) ────────────────────

    /// In-place-Variante von `set_cell`.
    pub fn apply_cell(&mut self, coord: CellCoord, color: &str, opacity: Option<f32>) {
        Arc::make_mut(&mut self.cells).insert(coord, Cell::full(coord, color, opacity));
    }

    /// In-place-Variante von `remove_cell`.
    pub fn apply_remove_cell(&mut self, coord: CellCoord) {
        if self.cells.contains_key(&coord) {
            Arc::make_mut(&mut self.cells).shift_remove(&coord);
        }
    }

    /// In-place-Variante von `set_segments`.
    pub fn apply_segments(
        &mut self,
        coord: CellCoord,
        segments: SegmentSet,
        color: &str,
        opacity: Option<f32>,
    ) {
        let existing = self
            .cells
            .get(&coord)
            .map(Cell::filled_segments)
            .unwrap_or(SegmentSet::EMPTY);
        let merged = existing.union(segments);

        match Cell::segmented(coord, merged, color, opacity) {
            Some(cell) => {
                if cell.fill() == CellFill::Full && existing != SegmentSet::FULL {
                    log::debug!("Zelle ({}, {}) zu voller Zelle zusammengefasst", coord.x, coord.y);
                }
                Arc::make_mut(&mut self.cells).insert(coord, cell);
            }
            None => self.apply_remove_cell(coord),
        }
    }

    /// In-place-Variante von `remove_segments`.
    pub fn apply_remove_segments(&mut self, coord: CellCoord, segments: SegmentSet) {
        let Some(cell) = self.cells.get(&coord) else {
            return;
        };
        let remaining = cell.filled_segments().difference(segments);
        if remaining == cell.filled_segments() {
            return;
        }

        match Cell::segmented(coord, remaining, cell.color.clone(), cell.opacity) {
            Some(cell) => {
                Arc::make_mut(&mut self.cells).insert(coord, cell);
            }
            None => {
                log::debug!("Leere Segment-Zelle ({}, {}) entfernt", coord.x, coord.y);
                self.apply_remove_cell(coord);
            }
        }
    }
}

impl FromIterator<Cell> for CellStore {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        CellStore::from_cells(iter)
    }
}
