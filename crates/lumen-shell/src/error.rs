//! Error types for document assembly.

use std::path::PathBuf;

/// Result type for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Errors raised while loading a manifest or assembling a document.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
	/// The manifest file could not be read.
	#[error("failed to read manifest {path}: {source}")]
	Io {
		/// Path that was read.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The manifest is not valid JSON of the expected shape.
	#[error("failed to parse manifest: {0}")]
	Parse(#[from] serde_json::Error),

	/// The requested entry is not in the manifest.
	#[error("manifest has no entry for {0}")]
	MissingEntry(String),

	/// Rendering the body fragment failed.
	#[error(transparent)]
	Render(#[from] lumen_ssr::RenderError),
}
