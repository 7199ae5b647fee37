//! multitimer - several independent stopwatches in one terminal
//!
//! This crate provides the timer model, JSON snapshot persistence, CSV
//! session export and an interactive ratatui screen driven by the
//! `multitimer` binary.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod storage;
pub mod timer;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use collection::TimerCollection;
pub use error::TimerError;
pub use timer::Timer;
