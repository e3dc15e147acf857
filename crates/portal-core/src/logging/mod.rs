//! Session logging with optional JSONL capture.
//!
//! Console output goes through `tracing_subscriber::fmt`. When enabled,
//! every event is also appended as one JSON object per line to a file
//! named after the day and the session:
//!
//! ```text
//! <data_dir>/logs/
//! ├── 2026-10-16_8f3a2c.jsonl
//! └── 2026-10-17_41b09e.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use portal_core::logging::LoggingBuilder;
//!
//! let jsonl_path = LoggingBuilder::new(data_dir.join("logs"))
//!     .with_filter("cosplayer_portal=debug")
//!     .jsonl(true)
//!     .init()?;
//! ```
//!
//! ```bash
//! # Every theme change this session
//! jq 'select(.msg | startswith("Theme"))' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder, DEFAULT_FILTER};
pub use writer::{read_entries, SessionLogWriter};
