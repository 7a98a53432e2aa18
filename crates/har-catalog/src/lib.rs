//! Bundled HAR (HTTP Archive 1.2) example captures.
//!
//! This crate embeds a fixed set of example HAR documents at compile time
//! and exposes them as a read-only catalog keyed by fixture name. Each
//! capture demonstrates one request shape: form-encoded bodies, JSON bodies,
//! binary zip bodies, cookies, multipart variants, query-string variants,
//! plain-text and XML bodies, and a `full` composite example.
//!
//! The payloads are kept as opaque [`serde_json::Value`]s; the catalog never
//! interprets them beyond parsing.
//!
//! # Example
//!
//! ```
//! let value = har_catalog::get("application-json").unwrap();
//! assert!(value.get("log").is_some());
//!
//! assert_eq!(har_catalog::names().len(), 20);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;

pub use catalog::{contains, get, iter, names};
