//! Writing catalog fixtures to disk as pretty-printed JSON.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ExportError, ExportResult};

/// Directory fixtures are written into when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// File extension given to every exported fixture.
pub const FIXTURE_EXTENSION: &str = "har";

/// Exports catalog fixtures to an output directory.
///
/// Each fixture is written to `<output-dir>/<name>.har` as 2-space-indented
/// JSON, creating or truncating the file. Exports are independent and
/// idempotent: re-running against an unchanged catalog reproduces the same
/// bytes. The output directory is never created implicitly; writing into a
/// missing directory surfaces as [`ExportError::Io`].
///
/// # Example
///
/// ```ignore
/// let exporter = Exporter::new().with_output_dir("out");
/// let path = exporter.export("application-json").await?;
/// println!("wrote {}", path.display());
/// ```
#[derive(Debug, Clone)]
pub struct Exporter {
	/// Directory the `.har` files are written into.
	output_dir: PathBuf,
}

impl Exporter {
	/// Creates an exporter targeting the default output directory.
	pub fn new() -> Self {
		Self {
			output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
		}
	}

	/// Sets the output directory.
	pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
		self.output_dir = output_dir.into();
		self
	}

	/// Returns the configured output directory.
	pub fn output_dir(&self) -> &Path {
		&self.output_dir
	}

	/// Computes the destination path for a fixture name.
	///
	/// The rule is `<output-dir>/<name>.har`; because catalog names are
	/// unique, it is injective over the catalog.
	pub fn destination(&self, name: &str) -> PathBuf {
		self.output_dir.join(format!("{name}.{FIXTURE_EXTENSION}"))
	}

	/// Exports one named fixture from the catalog.
	///
	/// # Arguments
	///
	/// * `name` - Fixture name, expected to be a key in the catalog
	///
	/// # Returns
	///
	/// Returns the path the fixture was written to.
	///
	/// # Errors
	///
	/// Returns [`ExportError::UnknownFixture`] for names absent from the
	/// catalog (nothing is written), or [`ExportError::Io`] when the file
	/// cannot be created or written.
	pub async fn export(&self, name: &str) -> ExportResult<PathBuf> {
		let value = har_catalog::get(name)
			.ok_or_else(|| ExportError::UnknownFixture(name.to_string()))?;
		self.export_value(name, value).await
	}

	/// Serializes an arbitrary value and writes it under a fixture name.
	///
	/// This is the write path used by [`export`](Self::export); it is public
	/// so callers can place their own payloads next to the bundled ones.
	pub async fn export_value<T: Serialize>(&self, name: &str, value: &T) -> ExportResult<PathBuf> {
		let payload = serde_json::to_string_pretty(value)?;
		let destination = self.destination(name);

		tracing::debug!(
			"writing fixture `{}` to {}",
			name,
			destination.display()
		);
		tokio::fs::write(&destination, payload).await?;

		Ok(destination)
	}
}

impl Default for Exporter {
	fn default() -> Self {
		Self::new()
	}
}
