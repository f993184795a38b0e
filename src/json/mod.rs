//! JSON-Persistenz der Zellfolge (Lesen + Schreiben).

pub mod parser;
pub mod writer;

pub use parser::parse_cells_json;
pub use writer::write_cells_json;
