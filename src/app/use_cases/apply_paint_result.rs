//! Use-Case: Ergebnis eines Mal-Tools auf den Cell-Store anwenden.

use crate::app::tools::{PaintOp, PaintResult};
use crate::core::CellStore;

/// Wendet ein `PaintResult` auf einen Stand an und liefert den neuen Stand.
///
/// Alle Operationen laufen als ein Batch: der Eingabe-Store bleibt unverändert,
/// die Zellen werden höchstens einmal kopiert.
pub fn apply_paint_result(store: &CellStore, result: &PaintResult) -> CellStore {
    let mut next = store.clone();
    apply_paint_result_in_place(&mut next, result);
    next
}

/// In-place-Variante für Aufrufer, die den Store bereits exklusiv halten.
pub fn apply_paint_result_in_place(store: &mut CellStore, result: &PaintResult) {
    if result.is_empty() {
        return;
    }

    for op in &result.ops {
        match op {
            PaintOp::SetSegments {
                coord,
                segments,
                color,
                opacity,
            } => store.apply_segments(*coord, *segments, color, *opacity),
            PaintOp::RemoveSegments { coord, segments } => {
                store.apply_remove_segments(*coord, *segments)
            }
        }
    }

    log::debug!(
        "{} Mal-Operation(en) angewendet, {} Zelle(n) im Store",
        result.ops.len(),
        store.len()
    );
}
