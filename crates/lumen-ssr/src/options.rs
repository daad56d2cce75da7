//! Render options.

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// Default limit for chains of factories producing factories.
pub const DEFAULT_MAX_FACTORY_DEPTH: usize = 64;

/// Options for a render pass.
///
/// The defaults reproduce the hydration protocol byte for byte: scalar text is
/// written verbatim and every content interpolation is bracketed by markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Whether to HTML-escape literal text before writing it.
	///
	/// Only scalar leaves are escaped. Markup produced by nested views is
	/// written as is.
	pub escape_text: bool,
	/// Whether to bracket content interpolations with hydration comments.
	///
	/// Part ids are allocated either way so event placeholders keep the same
	/// numbering with or without markers.
	pub hydration_markers: bool,
	/// Maximum nesting of factories and containers while resolving one value,
	/// counted across nested views.
	pub max_factory_depth: usize,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			escape_text: false,
			hydration_markers: true,
			max_factory_depth: DEFAULT_MAX_FACTORY_DEPTH,
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enables escaping of literal text.
	pub fn escape_text(mut self) -> Self {
		self.escape_text = true;
		self
	}

	/// Disables hydration markers.
	pub fn no_hydration(mut self) -> Self {
		self.hydration_markers = false;
		self
	}

	/// Sets the factory chain limit.
	pub fn max_factory_depth(mut self, depth: usize) -> Self {
		self.max_factory_depth = depth;
		self
	}

	/// Parses options from a TOML document.
	///
	/// Missing keys fall back to their defaults.
	///
	/// # Example
	///
	/// ```
	/// use lumen_ssr::RenderOptions;
	///
	/// let options = RenderOptions::from_toml_str("escape_text = true").unwrap();
	/// assert!(options.escape_text);
	/// assert!(options.hydration_markers);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		toml::from_str(source).map_err(|e| RenderError::InvalidOptions(e.to_string()))
	}
}
