//! Ableitung der zu zeichnenden Rahmenlinien einer (Segment-)Zelle.
//!
//! Regel: Eine Linie entsteht überall dort, wo ein gefülltes Segment auf ein
//! leeres trifft. Intern zwischen zwei Segmenten derselben Zelle, extern über
//! die Zellgrenze hinweg zum Nachbarsegment.
//!
//! Jede Seite wertet die Regel unabhängig aus. Dieselbe physische Kante kann
//! daher von beiden Nachbarzellen gemeldet werden; das Zeichnen ist idempotent.

use super::topology::{self, CENTER, INTERNAL_EDGES};
use super::{Cell, CellCoord, CellIndex, SegmentName};
use glam::Vec2;

/// Geometrie-Kontext des Renderers. Wird nur durchgereicht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    /// Kantenlänge einer Zelle in Welteinheiten
    pub cell_size: f32,
}

impl CellGeometry {
    /// Erstellt den Kontext für eine Zellgröße in Welteinheiten.
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Rechnet einen Zell-relativen Vertex in Weltkoordinaten um.
    pub fn to_world(&self, coord: CellCoord, ratio: Vec2) -> Vec2 {
        (Vec2::new(coord.x as f32, coord.y as f32) + ratio) * self.cell_size
    }
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self { cell_size: 1.0 }
    }
}

/// Interne Linie vom Zellmittelpunkt zu einem Randpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InternalBorder {
    pub from: Vec2,
    pub to: Vec2,
    /// Gefülltes Segment auf der einen Seite
    pub filled: SegmentName,
    /// Leeres Segment auf der anderen Seite
    pub empty: SegmentName,
}

/// Äußere Linie entlang der Zellkante eines gefüllten Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalBorder {
    pub from: Vec2,
    pub to: Vec2,
    /// Gefülltes Segment dieser Zelle
    pub segment: SegmentName,
    /// Koordinate der Nachbarzelle (`None` jenseits des Koordinatenbereichs)
    pub neighbor: Option<CellCoord>,
    /// Angrenzendes Segment der Nachbarzelle
    pub neighbor_segment: SegmentName,
}

/// Alle Rahmenlinien einer Zelle.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBorders {
    pub coord: CellCoord,
    pub internal: Vec<InternalBorder>,
    pub external: Vec<ExternalBorder>,
    pub geometry: CellGeometry,
}

impl CellBorders {
    /// Prüft ob die Zelle keine einzige Linie hat.
    pub fn is_empty(&self) -> bool {
        self.internal.is_empty() && self.external.is_empty()
    }
}

/// Interne Linien: für jede Kante genau dann, wenn genau eines der beiden Segmente gefüllt ist.
pub fn internal_borders(cell: &Cell) -> Vec<InternalBorder> {
    let filled = cell.filled_segments();
    INTERNAL_EDGES
        .iter()
        .filter_map(|edge| {
            let (first, second) = edge.segments;
            let pair = match (filled.contains(first), filled.contains(second)) {
                (true, false) => Some((first, second)),
                (false, true) => Some((second, first)),
                _ => None,
            };
            pair.map(|(filled, empty)| InternalBorder {
                from: CENTER,
                to: edge.boundary,
                filled,
                empty,
            })
        })
        .collect()
}

/// Äußere Linien: gefülltes Segment trifft auf fehlende Zelle oder leeres Nachbarsegment.
pub fn external_borders(cell: &Cell, index: &CellIndex<'_>) -> Vec<ExternalBorder> {
    cell.filled_segments()
        .iter()
        .filter_map(|segment| {
            let neighbor = topology::cross_cell_neighbor(segment);
            let neighbor_coord = cell.coord.offset(neighbor.dx, neighbor.dy);
            let covered = neighbor_coord
                .is_some_and(|coord| index.is_segment_filled(coord, neighbor.segment));
            if covered {
                return None;
            }
            let (from, to) = topology::triangle(segment).outer_edge();
            Some(ExternalBorder {
                from,
                to,
                segment,
                neighbor: neighbor_coord,
                neighbor_segment: neighbor.segment,
            })
        })
        .collect()
}

/// Berechnet interne und externe Rahmenlinien einer Zelle.
///
/// Volle Zellen haben keine internen Linien; ihre externen Linien werden aus
/// allen 8 Segmenten abgeleitet.
pub fn calculate_borders(
    cell: &Cell,
    index: &CellIndex<'_>,
    geometry: CellGeometry,
) -> CellBorders {
    CellBorders {
        coord: cell.coord,
        internal: internal_borders(cell),
        external: external_borders(cell, index),
        geometry,
    }
}

/// Berechnet die Rahmenlinien für eine Auswahl betroffener Koordinaten.
///
/// Koordinaten ohne Zelle werden übersprungen.
pub fn calculate_borders_for(
    coords: impl IntoIterator<Item = CellCoord>,
    index: &CellIndex<'_>,
    geometry: CellGeometry,
) -> Vec<CellBorders> {
    coords
        .into_iter()
        .filter_map(|coord| index.get(coord))
        .map(|cell| calculate_borders(cell, index, geometry))
        .collect()
}

/// Koordinaten, deren Rahmen sich ändern können, wenn `coord` bemalt wird.
///
/// Nachbarn jenseits des Koordinatenbereichs entfallen.
pub fn affected_by(coord: CellCoord) -> Vec<CellCoord> {
    [(0, 0), (0, -1), (1, 0), (0, 1), (-1, 0)]
        .into_iter()
        .filter_map(|(dx, dy)| coord.offset(dx, dy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellStore, SegmentSet};
    use approx::assert_relative_eq;

    fn segments(list: &[SegmentName]) -> SegmentSet {
        SegmentSet::from_segments(list)
    }

    #[test]
    fn full_cell_has_no_internal_borders() {
        let cell = Cell::full(CellCoord::new(0, 0), "#000", None);
        assert!(internal_borders(&cell).is_empty());
    }

    #[test]
    fn isolated_full_cell_draws_all_outer_edges() {
        let store = CellStore::new().set_cell(CellCoord::new(0, 0), "#000", None);
        let index = store.index();
        let cell = store.get_cell_at(CellCoord::new(0, 0)).expect("Zelle erwartet");

        let borders = calculate_borders(cell, &index, CellGeometry::default());
        assert_eq!(borders.external.len(), 8);
    }

    #[test]
    fn scenario_filled_meets_full_neighbor() {
        let coord = CellCoord::new(2, 2);
        let store = CellStore::new()
            .set_segments(
                coord,
                segments(&[SegmentName::Nw, SegmentName::N, SegmentName::Ne, SegmentName::E]),
                "#333",
                None,
            )
            .set_cell(CellCoord::new(2, 1), "#333", None);
        let index = store.index();
        let cell = store.get_cell_at(coord).expect("Zelle erwartet");

        let borders = calculate_borders(cell, &index, CellGeometry::new(32.0));

        assert!(!borders.external.iter().any(|b| b.segment == SegmentName::N));
        assert!(!borders.external.iter().any(|b| b.segment == SegmentName::Nw));
        assert!(borders.external.iter().any(|b| b.segment == SegmentName::Ne));

        let e_se = borders
            .internal
            .iter()
            .find(|b| b.filled == SegmentName::E)
            .expect("Linie zwischen e und se erwartet");
        assert_eq!(e_se.empty, SegmentName::Se);
        assert_relative_eq!(e_se.to.x, 1.0);
        assert_relative_eq!(e_se.to.y, 1.0);

        // nw/w-Kante ist die zweite Grenze der gefüllten Gruppe
        assert_eq!(borders.internal.len(), 2);
    }

    #[test]
    fn internal_border_is_xor_of_pair() {
        for mask in 1u8..255 {
            let set: SegmentSet = SegmentName::ALL
                .into_iter()
                .filter(|s| mask & (1 << s.index()) != 0)
                .collect();
            let cell = Cell::segmented(CellCoord::new(0, 0), set, "#000", None)
                .expect("Zelle erwartet");
            let borders = internal_borders(&cell);

            for edge in &INTERNAL_EDGES {
                let (a, b) = edge.segments;
                let expected = set.contains(a) != set.contains(b);
                let emitted = borders.iter().any(|border| border.to == edge.boundary);
                assert_eq!(emitted, expected, "Maske {mask:#010b}");
            }
        }
    }

    #[test]
    fn external_border_respects_neighbor_segment() {
        let left = CellCoord::new(0, 0);
        let right = CellCoord::new(1, 0);
        // links: ne gefüllt (grenzt an w des rechten Nachbarn)
        let store = CellStore::new()
            .set_segments(left, segments(&[SegmentName::Ne]), "#000", None)
            .set_segments(right, segments(&[SegmentName::Sw]), "#000", None);
        let index = store.index();
        let cell = index.get(left).expect("Zelle erwartet");

        let borders = external_borders(cell, &index);
        let ne = borders
            .iter()
            .find(|b| b.segment == SegmentName::Ne)
            .expect("Linie erwartet, da w des Nachbarn leer ist");
        assert_eq!(ne.neighbor, Some(right));
        assert_eq!(ne.neighbor_segment, SegmentName::W);

        let store = store.set_segments(right, segments(&[SegmentName::W]), "#000", None);
        let index = store.index();
        let cell = index.get(left).expect("Zelle erwartet");
        assert!(!external_borders(cell, &index)
            .iter()
            .any(|b| b.segment == SegmentName::Ne));
    }

    #[test]
    fn borders_for_skips_missing_cells() {
        let store = CellStore::new().set_cell(CellCoord::new(3, 3), "#000", None);
        let index = store.index();
        let result = calculate_borders_for(
            affected_by(CellCoord::new(3, 3)),
            &index,
            CellGeometry::default(),
        );
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn cell_at_coordinate_limit_treats_outside_neighbors_as_missing() {
        let edge = CellCoord::new(i32::MAX, i32::MIN);
        let store = CellStore::new().set_cell(edge, "#000", None);
        let index = store.index();
        let cell = store.get_cell_at(edge).expect("Zelle erwartet");

        let borders = calculate_borders(cell, &index, CellGeometry::default());

        assert_eq!(borders.external.len(), 8);
        // rechts und oben liegt nichts mehr im Koordinatenbereich
        let outside = borders
            .external
            .iter()
            .filter(|border| border.neighbor.is_none())
            .count();
        assert_eq!(outside, 4);
        assert_eq!(
            affected_by(edge),
            vec![
                edge,
                CellCoord::new(i32::MAX, i32::MIN + 1),
                CellCoord::new(i32::MAX - 1, i32::MIN),
            ]
        );
    }

    #[test]
    fn geometry_maps_ratios_to_world() {
        let geometry = CellGeometry::new(10.0);
        let world = geometry.to_world(CellCoord::new(2, -1), CENTER);
        assert_relative_eq!(world.x, 25.0);
        assert_relative_eq!(world.y, -5.0);
    }
}
