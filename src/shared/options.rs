//! Zentrale Konfiguration des Map-Painters.
//!
//! `PainterOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::CellGeometry;
use serde::{Deserialize, Serialize};

// ── Malen ───────────────────────────────────────────────────────────

/// Standard-Füllfarbe neuer Zellen.
pub const DEFAULT_FILL_COLOR: &str = "#c4a57b";
/// Standard-Zellgröße in Welteinheiten (nur für den Renderer durchgereicht).
pub const DEFAULT_CELL_SIZE: f32 = 32.0;

// ── Diagonal-Füllung ────────────────────────────────────────────────

/// Suchradius (Zellen) beim Einrasten auf die nächste gültige Ecke.
pub const DIAGONAL_SEARCH_RADIUS: u32 = 3;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const UNDO_DEPTH: usize = 100;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Painter-Optionen, gespeichert als TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainterOptions {
    /// Füllfarbe für neue Segmente und Zellen
    pub fill_color: String,
    /// Deckkraft neuer Zellen (`None` = deckend)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f32>,
    /// Zellgröße in Welteinheiten
    pub cell_size: f32,
    /// Suchradius der Diagonal-Füllung
    #[serde(default = "default_diagonal_search_radius")]
    pub diagonal_search_radius: u32,
    /// Ungültigen Drag-Start auf die nächste gültige Ecke einrasten
    #[serde(default = "default_true")]
    pub diagonal_snap_to_nearest: bool,
    /// Maximale Undo-Tiefe
    #[serde(default = "default_undo_depth")]
    pub undo_depth: usize,
}

impl Default for PainterOptions {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_FILL_COLOR.to_owned(),
            fill_opacity: None,
            cell_size: DEFAULT_CELL_SIZE,
            diagonal_search_radius: DIAGONAL_SEARCH_RADIUS,
            diagonal_snap_to_nearest: true,
            undo_depth: UNDO_DEPTH,
        }
    }
}

/// Serde-Default für `diagonal_search_radius` (Abwärtskompatibilität).
fn default_diagonal_search_radius() -> u32 {
    DIAGONAL_SEARCH_RADIUS
}

fn default_true() -> bool {
    true
}

/// Serde-Default für `undo_depth` (Abwärtskompatibilität).
fn default_undo_depth() -> usize {
    UNDO_DEPTH
}

impl PainterOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Geometrie-Kontext für die Rahmenberechnung.
    pub fn geometry(&self) -> CellGeometry {
        CellGeometry::new(self.cell_size)
    }
}
