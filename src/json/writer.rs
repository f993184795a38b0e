//! Writer für persistierte Zellfolgen.

use crate::core::{CellRecord, CellStore};
use anyhow::{Context, Result};

/// Serialisiert alle Zellen in Store-Reihenfolge als JSON-Array.
pub fn write_cells_json(store: &CellStore) -> Result<String> {
    let records: Vec<CellRecord> = store.cells().map(|cell| cell.to_record()).collect();
    serde_json::to_string_pretty(&records).context("Zellfolge konnte nicht serialisiert werden")
}
