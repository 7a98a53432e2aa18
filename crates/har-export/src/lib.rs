//! Exports the bundled HAR example captures to `.har` files.
//!
//! This crate pairs with [`har_catalog`]: the catalog owns the fixture data,
//! this crate serializes each named capture to a pretty-printed JSON file in
//! an output directory. Exports are independent; a failing fixture is
//! reported on the console and never stops the rest of the batch.
//!
//! # Quick Start
//!
//! Export a single fixture:
//!
//! ```ignore
//! use har_export::Exporter;
//!
//! let exporter = Exporter::new().with_output_dir("out");
//! let path = exporter.export("application-json").await?;
//! ```
//!
//! Export the whole catalog, as the `har-export` binary does:
//!
//! ```ignore
//! use har_export::commands::{DumpFixturesCommand, DumpFixturesOptions};
//!
//! let result = DumpFixturesCommand::new()
//!     .execute(DumpFixturesOptions::new())
//!     .await;
//! println!("{} files written", result.written.len());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod commands;
pub mod error;
pub mod exporter;

pub use error::{ExportError, ExportResult};
pub use exporter::{DEFAULT_OUTPUT_DIR, Exporter, FIXTURE_EXTENSION};
