//! Result persistence

mod json_export;

pub use json_export::JsonExporter;
