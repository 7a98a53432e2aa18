//! Management commands for the exporter binary.

mod dumpfixtures;

pub use dumpfixtures::{DumpFixturesCommand, DumpFixturesOptions, DumpResult};
