//! Statische Topologie-Tabellen der 8-Dreiecks-Unterteilung einer Zelle.
//!
//! Alle Vertices sind Verhältnisse (0..1) von Zellbreite/-höhe, damit der
//! Renderer beliebige Zellgrößen anwenden kann. Y wächst nach unten.

use super::SegmentName;
use glam::Vec2;

// ── Stützpunkte ─────────────────────────────────────────────────────

/// Zellmittelpunkt.
pub const CENTER: Vec2 = Vec2::new(0.5, 0.5);
/// Ecke oben links.
pub const TOP_LEFT: Vec2 = Vec2::new(0.0, 0.0);
/// Kantenmitte oben.
pub const TOP_MID: Vec2 = Vec2::new(0.5, 0.0);
/// Ecke oben rechts.
pub const TOP_RIGHT: Vec2 = Vec2::new(1.0, 0.0);
/// Kantenmitte rechts.
pub const RIGHT_MID: Vec2 = Vec2::new(1.0, 0.5);
/// Ecke unten rechts.
pub const BOTTOM_RIGHT: Vec2 = Vec2::new(1.0, 1.0);
/// Kantenmitte unten.
pub const BOTTOM_MID: Vec2 = Vec2::new(0.5, 1.0);
/// Ecke unten links.
pub const BOTTOM_LEFT: Vec2 = Vec2::new(0.0, 1.0);
/// Kantenmitte links.
pub const LEFT_MID: Vec2 = Vec2::new(0.0, 0.5);

// ── Typen ───────────────────────────────────────────────────────────

/// Dreieck eines Segments: Mittelpunkt + zwei Randpunkte (im Uhrzeigersinn).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentTriangle {
    pub segment: SegmentName,
    pub vertices: [Vec2; 3],
}

impl SegmentTriangle {
    /// Die beiden Randpunkte (= Außenkante des Segments).
    pub fn outer_edge(&self) -> (Vec2, Vec2) {
        (self.vertices[1], self.vertices[2])
    }
}

/// Interne Kante Mittelpunkt → Randpunkt, geteilt von zwei Segmenten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InternalEdge {
    /// Randpunkt der Kante (der andere Endpunkt ist immer `CENTER`)
    pub boundary: Vec2,
    /// Die beiden Segmente, die sich diese Kante teilen
    pub segments: (SegmentName, SegmentName),
}

/// Zellübergreifender Nachbar eines Segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossCellNeighbor {
    /// X-Offset der Nachbarzelle
    pub dx: i32,
    /// Y-Offset der Nachbarzelle
    pub dy: i32,
    /// Segment der Nachbarzelle, das an dieses Segment grenzt
    pub segment: SegmentName,
}

// ── Tabellen ────────────────────────────────────────────────────────

/// Dreiecke aller Segmente, indexiert über `SegmentName::index()`.
pub static SEGMENT_TRIANGLES: [SegmentTriangle; 8] = [
    SegmentTriangle {
        segment: SegmentName::Nw,
        vertices: [CENTER, TOP_LEFT, TOP_MID],
    },
    SegmentTriangle {
        segment: SegmentName::N,
        vertices: [CENTER, TOP_MID, TOP_RIGHT],
    },
    SegmentTriangle {
        segment: SegmentName::Ne,
        vertices: [CENTER, TOP_RIGHT, RIGHT_MID],
    },
    SegmentTriangle {
        segment: SegmentName::E,
        vertices: [CENTER, RIGHT_MID, BOTTOM_RIGHT],
    },
    SegmentTriangle {
        segment: SegmentName::Se,
        vertices: [CENTER, BOTTOM_RIGHT, BOTTOM_MID],
    },
    SegmentTriangle {
        segment: SegmentName::S,
        vertices: [CENTER, BOTTOM_MID, BOTTOM_LEFT],
    },
    SegmentTriangle {
        segment: SegmentName::Sw,
        vertices: [CENTER, BOTTOM_LEFT, LEFT_MID],
    },
    SegmentTriangle {
        segment: SegmentName::W,
        vertices: [CENTER, LEFT_MID, TOP_LEFT],
    },
];

/// Die 8 internen Kanten vom Mittelpunkt zu den Randpunkten.
pub static INTERNAL_EDGES: [InternalEdge; 8] = [
    InternalEdge {
        boundary: TOP_LEFT,
        segments: (SegmentName::W, SegmentName::Nw),
    },
    InternalEdge {
        boundary: TOP_MID,
        segments: (SegmentName::Nw, SegmentName::N),
    },
    InternalEdge {
        boundary: TOP_RIGHT,
        segments: (SegmentName::N, SegmentName::Ne),
    },
    InternalEdge {
        boundary: RIGHT_MID,
        segments: (SegmentName::Ne, SegmentName::E),
    },
    InternalEdge {
        boundary: BOTTOM_RIGHT,
        segments: (SegmentName::E, SegmentName::Se),
    },
    InternalEdge {
        boundary: BOTTOM_MID,
        segments: (SegmentName::Se, SegmentName::S),
    },
    InternalEdge {
        boundary: BOTTOM_LEFT,
        segments: (SegmentName::S, SegmentName::Sw),
    },
    InternalEdge {
        boundary: LEFT_MID,
        segments: (SegmentName::Sw, SegmentName::W),
    },
];

/// Zellübergreifende Nachbarn, indexiert über `SegmentName::index()`.
///
/// Jeder Eintrag hat sein Inverses unter dem entgegengesetzten Offset.
pub static CROSS_CELL_NEIGHBORS: [CrossCellNeighbor; 8] = [
    // nw: linke Hälfte der Oberkante
    CrossCellNeighbor {
        dx: 0,
        dy: -1,
        segment: SegmentName::S,
    },
    // n: rechte Hälfte der Oberkante
    CrossCellNeighbor {
        dx: 0,
        dy: -1,
        segment: SegmentName::Se,
    },
    // ne: obere Hälfte der rechten Kante
    CrossCellNeighbor {
        dx: 1,
        dy: 0,
        segment: SegmentName::W,
    },
    // e: untere Hälfte der rechten Kante
    CrossCellNeighbor {
        dx: 1,
        dy: 0,
        segment: SegmentName::Sw,
    },
    // se: rechte Hälfte der Unterkante
    CrossCellNeighbor {
        dx: 0,
        dy: 1,
        segment: SegmentName::N,
    },
    // s: linke Hälfte der Unterkante
    CrossCellNeighbor {
        dx: 0,
        dy: 1,
        segment: SegmentName::Nw,
    },
    // sw: untere Hälfte der linken Kante
    CrossCellNeighbor {
        dx: -1,
        dy: 0,
        segment: SegmentName::E,
    },
    // w: obere Hälfte der linken Kante
    CrossCellNeighbor {
        dx: -1,
        dy: 0,
        segment: SegmentName::Ne,
    },
];

// ── Lookups ─────────────────────────────────────────────────────────

/// Dreieck eines Segments.
pub fn triangle(segment: SegmentName) -> &'static SegmentTriangle {
    &SEGMENT_TRIANGLES[segment.index()]
}

/// Zellübergreifender Nachbar eines Segments.
pub fn cross_cell_neighbor(segment: SegmentName) -> CrossCellNeighbor {
    CROSS_CELL_NEIGHBORS[segment.index()]
}

/// Bestimmt das Segment unter einer Position innerhalb der Zelle.
///
/// `local` ist die Position relativ zur Zelle (0..1 je Achse). Da alle
/// Dreiecke vom Mittelpunkt ausgehen, entspricht jedes Segment einem
/// 45°-Sektor um den Mittelpunkt. Der Mittelpunkt selbst fällt auf `E`.
pub fn segment_at(local: Vec2) -> SegmentName {
    let delta = local - CENTER;
    let angle = delta.y.atan2(delta.x).to_degrees();
    // Sektor 0 beginnt bei -180° (links) und entspricht `W`
    let sector = (((angle + 180.0) / 45.0).floor() as i32).rem_euclid(8) as usize;
    const BY_SECTOR: [SegmentName; 8] = [
        SegmentName::W,
        SegmentName::Nw,
        SegmentName::N,
        SegmentName::Ne,
        SegmentName::E,
        SegmentName::Se,
        SegmentName::S,
        SegmentName::Sw,
    ];
    BY_SECTOR[sector]
}
