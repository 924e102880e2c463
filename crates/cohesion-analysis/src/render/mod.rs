//! Output rendering: aligned text tables and JSON reports.

pub mod json;
pub mod table;

pub use json::{report_to_json, JsonReport};
pub use table::{ordered_fields, render_table, TableStyle};
