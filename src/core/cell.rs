//! Zellen des Karten-Grids: voll gefüllt oder segmentweise gefüllt.

use super::{SegmentName, SegmentSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ganzzahlige Grid-Koordinate einer Zelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    /// Erstellt eine neue Koordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Koordinate um `(dx, dy)` verschoben.
    ///
    /// `None`, wenn das Ergebnis außerhalb des `i32`-Bereichs liegt. Eine
    /// solche Nachbarzelle gilt überall als nicht vorhanden.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

/// Füllzustand einer Zelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFill {
    /// 100 % gefüllt
    Full,
    /// Nur die enthaltenen Segmente sind gefüllt (nie leer, nie alle 8)
    Segments(SegmentSet),
}

/// Eine bemalte Zelle. Farbe und Deckkraft gelten für die ganze Zelle.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Position im Grid
    pub coord: CellCoord,
    /// Füllfarbe (CSS-Farbstring, z.B. `#c4a57b`)
    pub color: String,
    /// Optionale Deckkraft (0..1)
    pub opacity: Option<f32>,
    fill: CellFill,
}

impl Cell {
    /// Erstellt eine voll gefüllte Zelle.
    pub fn full(coord: CellCoord, color: impl Into<String>, opacity: Option<f32>) -> Self {
        Self {
            coord,
            color: color.into(),
            opacity,
            fill: CellFill::Full,
        }
    }

    /// Erstellt eine Segment-Zelle und normalisiert sie.
    ///
    /// Alle 8 Segmente ergeben eine volle Zelle, eine leere Menge ergibt `None`.
    pub fn segmented(
        coord: CellCoord,
        segments: SegmentSet,
        color: impl Into<String>,
        opacity: Option<f32>,
    ) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        let fill = if segments.is_full() {
            CellFill::Full
        } else {
            CellFill::Segments(segments)
        };
        Some(Self {
            coord,
            color: color.into(),
            opacity,
            fill,
        })
    }

    /// Füllzustand (voll oder Segmente).
    pub fn fill(&self) -> CellFill {
        self.fill
    }

    /// `true` nur für Segment-Zellen.
    pub fn has_segments(&self) -> bool {
        matches!(self.fill, CellFill::Segments(_))
    }

    /// Gefüllte Segmente: bei vollen Zellen alle 8.
    pub fn filled_segments(&self) -> SegmentSet {
        match self.fill {
            CellFill::Full => SegmentSet::FULL,
            CellFill::Segments(segments) => segments,
        }
    }

    /// Prüft ob ein einzelnes Segment gefüllt ist.
    pub fn is_segment_filled(&self, segment: SegmentName) -> bool {
        self.filled_segments().contains(segment)
    }

    /// Wandelt einen persistierten Datensatz in eine Zelle.
    ///
    /// Segment-Datensätze ohne gültiges, gefülltes Segment gelten als nicht vorhanden.
    pub fn from_record(record: CellRecord) -> Option<Self> {
        let coord = CellCoord::new(record.x, record.y);
        match record.segments {
            None => Some(Cell::full(coord, record.color, record.opacity)),
            Some(map) => {
                let names = map
                    .iter()
                    .filter(|(_, filled)| **filled)
                    .map(|(name, _)| name.as_str());
                let segments = SegmentSet::from_names(names);
                let cell = Cell::segmented(coord, segments, record.color, record.opacity);
                if cell.is_none() {
                    log::warn!(
                        "Segment-Zelle ({}, {}) ohne gefüllte Segmente wird ignoriert",
                        coord.x,
                        coord.y
                    );
                }
                cell
            }
        }
    }

    /// Erzeugt den persistierten Datensatz dieser Zelle.
    pub fn to_record(&self) -> CellRecord {
        let segments = match self.fill {
            CellFill::Full => None,
            CellFill::Segments(set) => Some(
                set.iter()
                    .map(|segment| (segment.as_str().to_owned(), true))
                    .collect(),
            ),
        };
        CellRecord {
            x: self.coord.x,
            y: self.coord.y,
            segments,
            color: self.color.clone(),
            opacity: self.opacity,
        }
    }
}

/// Alias für `Cell::filled_segments`.
pub fn get_filled_segments(cell: &Cell) -> SegmentSet {
    cell.filled_segments()
}

/// Alias für `Cell::has_segments`.
pub fn has_segments(cell: &Cell) -> bool {
    cell.has_segments()
}

/// Persistierte Form einer Zelle.
///
/// Volle Zelle: `{x, y, color, opacity?}`,
/// Segment-Zelle: `{x, y, segments: {"nw": true, …}, color, opacity?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segments: Option<BTreeMap<String, bool>>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}
