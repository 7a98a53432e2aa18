//! dumpfixtures command implementation.
//!
//! This command writes every bundled HAR capture to its own `.har` file.

use std::path::PathBuf;

use futures::future::join_all;

use crate::exporter::{DEFAULT_OUTPUT_DIR, Exporter};

/// Options for the dumpfixtures command.
#[derive(Debug, Clone)]
pub struct DumpFixturesOptions {
	/// Directory the fixture files are written into.
	pub output_dir: PathBuf,

	/// Verbosity level. At 0, per-fixture confirmation lines are suppressed;
	/// error lines are always printed.
	pub verbosity: u8,
}

impl Default for DumpFixturesOptions {
	fn default() -> Self {
		Self {
			output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
			verbosity: 1,
		}
	}
}

impl DumpFixturesOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the output directory.
	pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
		self.output_dir = output_dir.into();
		self
	}

	/// Sets verbosity level.
	pub fn with_verbosity(mut self, level: u8) -> Self {
		self.verbosity = level;
		self
	}
}

/// Summary of a dumpfixtures run.
///
/// The command prints per-fixture lines as it goes; this struct only exists
/// for programmatic callers. Nothing in it is printed.
#[derive(Debug, Default)]
pub struct DumpResult {
	/// Paths written successfully, in catalog order.
	pub written: Vec<PathBuf>,

	/// One message per fixture that failed, in catalog order.
	pub errors: Vec<String>,
}

/// The dumpfixtures command for regenerating the exported fixture files.
///
/// Every name in the catalog is exported independently: a failing fixture is
/// reported on stderr and the remaining fixtures still run. All writes are
/// issued concurrently on the current task and awaited before the command
/// returns, so the process never exits with writes in flight.
///
/// # Example
///
/// ```ignore
/// let command = DumpFixturesCommand::new();
/// let options = DumpFixturesOptions::new().with_output_dir("data");
/// let result = command.execute(options).await;
/// assert_eq!(result.written.len(), har_catalog::names().len());
/// ```
#[derive(Debug, Default)]
pub struct DumpFixturesCommand;

impl DumpFixturesCommand {
	/// Creates a new dumpfixtures command.
	pub fn new() -> Self {
		Self
	}

	/// Returns the command name.
	pub fn name(&self) -> &str {
		"dumpfixtures"
	}

	/// Returns the command description.
	pub fn description(&self) -> &str {
		"Writes each bundled HAR capture to an individual .har file"
	}

	/// Returns the command help text.
	pub fn help(&self) -> &str {
		r#"
Usage: dumpfixtures

Writes each bundled HAR capture to <output-dir>/<name>.har as 2-space-indented
JSON. The fixture list is fixed; there are no arguments. The output directory
defaults to `data` and must already exist. Failures are reported per fixture
and do not abort the run.
"#
	}

	/// Executes the dumpfixtures command.
	///
	/// # Arguments
	///
	/// * `options` - Command options
	///
	/// # Returns
	///
	/// Returns the run summary. Per-fixture failures are recorded there and
	/// reported on stderr; they are never propagated.
	pub async fn execute(&self, options: DumpFixturesOptions) -> DumpResult {
		let exporter = Exporter::new().with_output_dir(options.output_dir);
		let verbosity = options.verbosity;

		let jobs = har_catalog::names().iter().map(|name| {
			let exporter = exporter.clone();
			async move {
				match exporter.export(name).await {
					Ok(path) => {
						if verbosity > 0 {
							println!("Saved {}", path.display());
						}
						Ok(path)
					}
					Err(err) => {
						eprintln!("Failed to export {name}: {err}");
						Err(format!("{name}: {err}"))
					}
				}
			}
		});

		let mut result = DumpResult::default();
		for outcome in join_all(jobs).await {
			match outcome {
				Ok(path) => result.written.push(path),
				Err(message) => result.errors.push(message),
			}
		}
		result
	}
}
