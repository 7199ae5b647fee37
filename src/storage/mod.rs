//! Storage layer for multitimer.
//!
//! - Snapshot: JSON file with each timer's label and accumulated seconds
//! - Export: CSV file with every completed session

mod export;
mod snapshot;

pub use export::{export_file_name, write_sessions, CsvExporter, CSV_HEADER};
pub use snapshot::{SnapshotStore, TimerRecord};
