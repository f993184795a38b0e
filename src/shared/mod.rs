//! Geteilte Typen und Konfiguration für `core` und `app`.

pub mod options;

pub use options::PainterOptions;
pub use options::{DEFAULT_FILL_COLOR, DIAGONAL_SEARCH_RADIUS};
