//! Entry point for the `har-export` binary.
//!
//! Writes every bundled HAR capture to the `data/` directory, one line of
//! console output per fixture. There are no flags, arguments, or environment
//! variables; per-file failures are reported as they happen and the exit
//! code is always the success code.

use har_export::commands::{DumpFixturesCommand, DumpFixturesOptions};

#[tokio::main]
async fn main() {
	let command = DumpFixturesCommand::new();
	command.execute(DumpFixturesOptions::new()).await;
}
