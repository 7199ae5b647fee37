//! Configuration management for multitimer.
//!
//! Paths are resolved once and passed explicitly to the persistence layer,
//! so tests can point everything at a temporary directory.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ExportConfig, Settings, SnapshotConfig, TimersConfig};
