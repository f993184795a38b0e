//! Ecken-Tabellen und Quadranten-Erkennung für das Diagonal-Füll-Tool.

use crate::core::topology::{BOTTOM_LEFT, BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT};
use crate::core::{CellCoord, SegmentName, SegmentSet};
use glam::Vec2;
use std::fmt;

/// Ecke einer Zelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Oben links
    TopLeft,
    /// Oben rechts
    TopRight,
    /// Unten rechts
    BottomRight,
    /// Unten links
    BottomLeft,
}

/// 45°-Linienfamilie, der eine Ecke zugeordnet ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagonalDirection {
    /// Linie `y - x = const` (von oben links nach unten rechts)
    TlBr,
    /// Linie `y + x = const` (von oben rechts nach unten links)
    TrBl,
}

impl DiagonalDirection {
    /// Anzeigename (`"TL-BR"` / `"TR-BL"`).
    pub const fn label(self) -> &'static str {
        match self {
            DiagonalDirection::TlBr => "TL-BR",
            DiagonalDirection::TrBl => "TR-BL",
        }
    }
}

impl fmt::Display for DiagonalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Kurzname der Ecke (`"TL"`, `"TR"`, `"BR"`, `"BL"`).
    pub const fn label(self) -> &'static str {
        match self {
            Corner::TopLeft => "TL",
            Corner::TopRight => "TR",
            Corner::BottomRight => "BR",
            Corner::BottomLeft => "BL",
        }
    }

    /// Parsed `"TL"`, `"TR"`, `"BR"`, `"BL"`. Unbekannte Namen ergeben `None`.
    pub fn parse(label: &str) -> Option<Corner> {
        Corner::ALL.into_iter().find(|corner| corner.label() == label)
    }

    /// Die beiden Nachbar-Offsets, die gemalt sein müssen, damit die Ecke konkav ist.
    ///
    /// Die Reihenfolge bestimmt auch die Farbquelle beim Füllen.
    pub const fn neighbor_offsets(self) -> [(i32, i32); 2] {
        match self {
            Corner::TopLeft => [(0, -1), (-1, 0)],
            Corner::TopRight => [(0, -1), (1, 0)],
            Corner::BottomRight => [(0, 1), (1, 0)],
            Corner::BottomLeft => [(0, 1), (-1, 0)],
        }
    }

    /// Die 4 Segmente, die die diagonale Ecke darstellen.
    ///
    /// Das sind genau die Segmente an den beiden Zellkanten, die sich in der
    /// Ecke treffen (TL: obere + linke Kante).
    pub const fn segments(self) -> [SegmentName; 4] {
        use SegmentName::*;
        match self {
            Corner::TopLeft => [N, Nw, W, Sw],
            Corner::TopRight => [Nw, N, Ne, E],
            Corner::BottomRight => [Ne, E, Se, S],
            Corner::BottomLeft => [Se, S, Sw, W],
        }
    }

    /// Eckpunkt der Ecke als Zell-relativer Vertex.
    pub fn vertex(self) -> Vec2 {
        match self {
            Corner::TopLeft => TOP_LEFT,
            Corner::TopRight => TOP_RIGHT,
            Corner::BottomRight => BOTTOM_RIGHT,
            Corner::BottomLeft => BOTTOM_LEFT,
        }
    }

    /// Segmente als Menge.
    pub fn segment_set(self) -> SegmentSet {
        SegmentSet::from_segments(&self.segments())
    }

    /// Linienfamilie der Ecke.
    ///
    /// Eine Treppe aus `TopLeft`-Ecken verläuft entlang `y + x = const`,
    /// daher gehören `TopLeft`/`BottomRight` zu `TR-BL`.
    pub const fn direction(self) -> DiagonalDirection {
        match self {
            Corner::TopLeft | Corner::BottomRight => DiagonalDirection::TrBl,
            Corner::TopRight | Corner::BottomLeft => DiagonalDirection::TlBr,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Segmente einer Ecke (als Liste in Tabellenreihenfolge).
pub fn segments_for_corner(corner: Corner) -> [SegmentName; 4] {
    corner.segments()
}

/// Bestimmt Zelle und Ecke unter einer Position in Zell-Einheiten.
///
/// Der Quadrant ergibt sich aus dem Vergleich mit der Zellmitte je Achse.
pub fn corner_at(position: Vec2) -> (CellCoord, Corner) {
    let floor = position.floor();
    let coord = CellCoord::new(floor.x as i32, floor.y as i32);
    let local = position - floor;

    let corner = match (local.x < 0.5, local.y < 0.5) {
        (true, true) => Corner::TopLeft,
        (false, true) => Corner::TopRight,
        (false, false) => Corner::BottomRight,
        (true, false) => Corner::BottomLeft,
    };
    (coord, corner)
}
