//! Geometrie des Diagonal-Füll-Tools: Ecken-Validierung, Suche und Pfad-Projektion.

use super::corner::{Corner, DiagonalDirection};
use crate::core::{Cell, CellCoord, CellIndex};

/// Prüft ob an `coord` eine füllbare konkave Ecke vom Typ `corner` liegt.
///
/// Die Zelle selbst muss leer sein, beide Nachbarn der Ecke müssen gemalt sein.
pub fn is_valid_concave_corner(index: &CellIndex<'_>, coord: CellCoord, corner: Corner) -> bool {
    if index.is_painted(coord) {
        return false;
    }
    corner
        .neighbor_offsets()
        .iter()
        .all(|&(dx, dy)| {
            coord
                .offset(dx, dy)
                .is_some_and(|neighbor| index.is_painted(neighbor))
        })
}

/// Sucht die nächstgelegene gültige Ecke gleichen Typs.
///
/// Durchsucht quadratische Ringe mit wachsendem Radius (1..=`max_radius`);
/// der erste Ring mit Treffer gewinnt, innerhalb des Rings die kleinste
/// euklidische Distanz. Ist `target` selbst gültig, wird es direkt geliefert.
pub fn find_nearest_valid_corner(
    index: &CellIndex<'_>,
    target: CellCoord,
    corner: Corner,
    max_radius: u32,
) -> Option<CellCoord> {
    if is_valid_concave_corner(index, target, corner) {
        return Some(target);
    }

    let max_radius = i32::try_from(max_radius).unwrap_or(i32::MAX);
    for radius in 1..=max_radius {
        let mut best: Option<(CellCoord, i64)> = None;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx.abs() != radius && dy.abs() != radius {
                    continue;
                }
                let Some(candidate) = target.offset(dx, dy) else {
                    continue;
                };
                if !is_valid_concave_corner(index, candidate, corner) {
                    continue;
                }
                // Quadrat der Distanz genügt für den Vergleich
                let distance_sq = i64::from(dx).pow(2) + i64::from(dy).pow(2);
                if best.is_none_or(|(_, best_sq)| distance_sq < best_sq) {
                    best = Some((candidate, distance_sq));
                }
            }
        }
        if let Some((coord, _)) = best {
            return Some(coord);
        }
    }
    None
}

/// Rundet wie die Zeiger-Koordinaten des Editors: halbe Werte Richtung +∞.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Projiziert `target` auf die 45°-Linie durch `start` und rastet auf das Grid ein.
pub fn project_onto_diagonal(
    start: CellCoord,
    direction: DiagonalDirection,
    target: CellCoord,
) -> CellCoord {
    let (x0, y0) = (f64::from(start.x), f64::from(start.y));
    let (tx, ty) = (f64::from(target.x), f64::from(target.y));

    let (sx, sy) = match direction {
        DiagonalDirection::TlBr => {
            let t = ((ty - y0) - (tx - x0)) / 2.0;
            (tx + t, ty - t)
        }
        DiagonalDirection::TrBl => {
            let t = ((tx - x0) + (ty - y0)) / 2.0;
            (tx - t, ty - t)
        }
    };
    CellCoord::new(round_half_up(sx), round_half_up(sy))
}

/// Richtung der Strecke `from → to`, falls sie exakt diagonal ist.
pub fn diagonal_direction_between(from: CellCoord, to: CellCoord) -> Option<DiagonalDirection> {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    if dx == 0 || dx.abs() != dy.abs() {
        return None;
    }
    if dx.signum() == dy.signum() {
        Some(DiagonalDirection::TlBr)
    } else {
        Some(DiagonalDirection::TrBl)
    }
}

/// Ergebnis einer Pfad-Berechnung während des Drags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagonalPath {
    /// Startzelle des Drags
    pub start: CellCoord,
    /// Eckentyp des Drags
    pub corner: Corner,
    /// Eingerasteter Zielpunkt auf der Diagonale (= `start` bei Kollaps)
    pub target: CellCoord,
    /// Alle gültigen Ecken entlang der Diagonale, vom Start aus geordnet
    pub cells: Vec<CellCoord>,
}

impl DiagonalPath {
    /// Anzahl zu füllender Ecken.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Prüft ob keine gültige Ecke gefunden wurde.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Am weitesten entfernte gültige Zelle.
    pub fn end(&self) -> Option<CellCoord> {
        self.cells.last().copied()
    }

    /// `true` wenn der Pfad auf die Startzelle zusammengefallen ist.
    pub fn is_collapsed(&self) -> bool {
        self.target == self.start
    }
}

/// Berechnet den Diagonal-Pfad von `start` in Richtung `raw_target`.
///
/// Liegt der eingerastete Punkt auf dem Start oder nicht auf der Linienfamilie
/// der Ecke, fällt der Pfad auf die (einzeln geprüfte) Startzelle zusammen.
pub fn diagonal_path(
    index: &CellIndex<'_>,
    start: CellCoord,
    corner: Corner,
    raw_target: CellCoord,
) -> DiagonalPath {
    let direction = corner.direction();
    let snapped = project_onto_diagonal(start, direction, raw_target);

    if snapped == start || diagonal_direction_between(start, snapped) != Some(direction) {
        let cells = if is_valid_concave_corner(index, start, corner) {
            vec![start]
        } else {
            Vec::new()
        };
        return DiagonalPath {
            start,
            corner,
            target: start,
            cells,
        };
    }

    // Differenzen in i64, da Start und Ziel an entgegengesetzten Enden des
    // i32-Bereichs liegen können
    let dx = i64::from(snapped.x) - i64::from(start.x);
    let dy = i64::from(snapped.y) - i64::from(start.y);
    let (step_x, step_y) = (dx.signum(), dy.signum());

    let cells = (0..=dx.abs())
        .filter_map(|i| {
            let x = i32::try_from(i64::from(start.x) + step_x * i).ok()?;
            let y = i32::try_from(i64::from(start.y) + step_y * i).ok()?;
            Some(CellCoord::new(x, y))
        })
        .filter(|&coord| is_valid_concave_corner(index, coord, corner))
        .collect();

    DiagonalPath {
        start,
        corner,
        target: snapped,
        cells,
    }
}

/// Farbquelle einer Ecke: der erste gemalte Nachbar in Tabellenreihenfolge.
pub fn fill_source<'a>(
    index: &CellIndex<'a>,
    coord: CellCoord,
    corner: Corner,
) -> Option<&'a Cell> {
    corner
        .neighbor_offsets()
        .iter()
        .find_map(|&(dx, dy)| coord.offset(dx, dy).and_then(|neighbor| index.get(neighbor)))
}
