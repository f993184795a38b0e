//! Parser für persistierte Zellfolgen.
//!
//! Akzeptiert volle Zellen (`{x, y, color, opacity?}`) und Segment-Zellen
//! (`{x, y, segments: {...}, color, opacity?}`) gemischt in einem Array.

use crate::core::{Cell, CellRecord, CellStore};
use anyhow::{Context, Result};

/// Parsed eine Zellfolge aus einem JSON-String.
///
/// Fehlerhafte Einträge werden mit Warnung übersprungen; nur ein
/// syntaktisch ungültiges Dokument oder ein Nicht-Array ist ein Fehler.
pub fn parse_cells_json(json_content: &str) -> Result<CellStore> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(json_content).context("Zellfolge ist kein gültiges JSON-Array")?;

    let total = entries.len();
    let cells: Vec<Cell> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<CellRecord>(entry) {
            Ok(record) => Cell::from_record(record),
            Err(e) => {
                log::warn!("Zelle #{} übersprungen: {}", i, e);
                None
            }
        })
        .collect();

    let store = CellStore::from_cells(cells);
    if store.len() != total {
        log::warn!(
            "{} von {} Zellen geladen ({} verworfen oder doppelt)",
            store.len(),
            total,
            total - store.len()
        );
    }
    Ok(store)
}
