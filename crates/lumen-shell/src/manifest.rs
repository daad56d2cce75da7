//! Build-asset manifest lookup.
//!
//! Reads the JSON manifest emitted by the client bundler, keyed by source
//! path:
//!
//! ```json
//! {
//!   "src/entry-client.ts": {
//!     "file": "assets/entry-client-4f2a.js",
//!     "name": "entry-client",
//!     "src": "src/entry-client.ts",
//!     "isEntry": true,
//!     "css": ["assets/entry-client-91c0.css"]
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ShellError};

/// One chunk of the build output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
	/// Output file, relative to the build root.
	pub file: String,
	/// Chunk name.
	#[serde(default)]
	pub name: Option<String>,
	/// Source path the chunk was built from.
	#[serde(default)]
	pub src: Option<String>,
	/// Whether this chunk is an entry point.
	#[serde(default)]
	pub is_entry: bool,
	/// Stylesheets emitted for this chunk.
	#[serde(default)]
	pub css: Vec<String>,
}

/// The full manifest, keyed by source path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetManifest {
	entries: HashMap<String, ManifestEntry>,
}

impl AssetManifest {
	/// Parses a manifest from JSON text.
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Reads and parses a manifest file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let json = std::fs::read_to_string(path).map_err(|source| ShellError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let manifest = Self::from_json(&json)?;
		debug!(path = %path.display(), entries = manifest.len(), "loaded asset manifest");
		Ok(manifest)
	}

	/// Looks up the chunk built from `src`.
	pub fn entry(&self, src: &str) -> Result<&ManifestEntry> {
		self.entries
			.get(src)
			.ok_or_else(|| ShellError::MissingEntry(src.to_string()))
	}

	/// Iterates over entry-point chunks.
	pub fn entry_points(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
		self.entries
			.iter()
			.filter(|(_, entry)| entry.is_entry)
			.map(|(src, entry)| (src.as_str(), entry))
	}

	/// Number of chunks.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the manifest has no chunks.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
