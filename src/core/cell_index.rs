//! Koordinaten-Index für O(1)-Nachbarabfragen.

use super::{Cell, CellCoord, SegmentName};
use std::collections::HashMap;

/// Read-only Lookup Koordinate → Zelle über einem Zell-Snapshot.
///
/// Der Index leiht die Zellen aus; er kann daher nicht über eine Mutation
/// des zugrunde liegenden Stores hinweg gehalten werden.
#[derive(Debug, Clone, Default)]
pub struct CellIndex<'a> {
    cells: HashMap<CellCoord, &'a Cell>,
}

impl<'a> CellIndex<'a> {
    /// Baut den Index in O(n). Bei doppelten Koordinaten gewinnt die letzte Zelle.
    pub fn build(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        let cells = cells.into_iter().map(|cell| (cell.coord, cell)).collect();
        Self { cells }
    }

    /// Anzahl indexierter Zellen.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Prüft ob der Index leer ist.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Zelle an einer Koordinate.
    pub fn get(&self, coord: CellCoord) -> Option<&'a Cell> {
        self.cells.get(&coord).copied()
    }

    /// `true` wenn an der Koordinate irgendetwas gemalt ist (voll oder Segmente).
    pub fn is_painted(&self, coord: CellCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Prüft ob ein bestimmtes Segment an einer Koordinate gefüllt ist.
    pub fn is_segment_filled(&self, coord: CellCoord, segment: SegmentName) -> bool {
        self.get(coord)
            .is_some_and(|cell| cell.is_segment_filled(segment))
    }
}

/// Baut einen Index über eine beliebige Zellfolge.
pub fn build_index<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> CellIndex<'a> {
    CellIndex::build(cells)
}
