//! Use-Cases der Application-Layer-Orchestrierung.

pub mod apply_paint_result;

pub use apply_paint_result::{apply_paint_result, apply_paint_result_in_place};
