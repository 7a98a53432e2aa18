//! Error types for fixture export.

use thiserror::Error;

/// Errors that can occur while exporting a fixture.
#[derive(Debug, Error)]
pub enum ExportError {
	/// Requested name is not part of the bundled catalog.
	#[error("Unknown fixture: {0}")]
	UnknownFixture(String),

	/// Fixture value could not be serialized to JSON.
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// Destination file could not be created or written.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
