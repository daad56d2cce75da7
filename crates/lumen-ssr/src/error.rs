//! Error types for server-side rendering.

/// Result type used throughout the renderer.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised while building or rendering a view tree.
///
/// All variants describe template-authoring mistakes rather than transient
/// conditions. They are returned to the caller unchanged; the renderer never
/// retries or logs them on its own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
	/// The render entry point was handed something other than a View or a Component.
	#[error("invalid render root: expected a view or a component, got {found}")]
	InvalidArgument {
		/// Shape of the value that was received.
		found: &'static str,
	},

	/// A factory value did not produce exactly one renderable value.
	#[error("malformed factory: {reason}")]
	MalformedFactory {
		/// What went wrong while invoking the factory.
		reason: String,
	},

	/// A template was built with a literal/value count mismatch.
	#[error(
		"template has {literals} literal fragments for {values} values (expected exactly one more fragment than values)"
	)]
	TemplateArity {
		/// Number of literal fragments.
		literals: usize,
		/// Number of interpolated values.
		values: usize,
	},

	/// Render options could not be parsed.
	#[error("invalid render options: {0}")]
	InvalidOptions(String),
}

impl RenderError {
	/// Create a malformed factory error
	pub fn malformed_factory(reason: impl Into<String>) -> Self {
		Self::MalformedFactory {
			reason: reason.into(),
		}
	}
}
