//! Views and their realized output.

use std::fmt;
use std::sync::Arc;

use crate::context::RenderContext;
use crate::error::Result;

/// Deferred client-side hydration callback.
///
/// The server never produces one; the type exists so that [`VNode`] has the
/// same shape as its client-side counterpart.
pub type DomSetup = Arc<dyn Fn() + Send + Sync + 'static>;

/// The realized output of a [`View`].
#[derive(Clone, Default)]
pub struct VNode {
	/// Rendered markup.
	pub html: String,
	/// Pending hydration callbacks, in document order.
	pub setups: Vec<DomSetup>,
}

impl VNode {
	/// Creates a node from markup with no setups.
	pub fn new(html: impl Into<String>) -> Self {
		Self {
			html: html.into(),
			setups: Vec::new(),
		}
	}

	/// Appends another node's markup and setups.
	pub fn append(&mut self, other: VNode) {
		self.html.push_str(&other.html);
		self.setups.extend(other.setups);
	}
}

impl fmt::Debug for VNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("VNode")
			.field("html", &self.html)
			.field("setups_count", &self.setups.len())
			.finish()
	}
}

type ViewFn = dyn Fn(&mut RenderContext) -> Result<VNode> + Send + Sync + 'static;

/// A lazily invoked producer of a [`VNode`].
///
/// Cloning a view is cheap. Each [`invoke`](View::invoke) runs the body again;
/// nothing is memoized, so part ids are allocated anew on every invocation.
#[derive(Clone)]
pub struct View(Arc<ViewFn>);

impl View {
	/// Creates a view from a render function.
	pub fn new<F>(render: F) -> Self
	where
		F: Fn(&mut RenderContext) -> Result<VNode> + Send + Sync + 'static,
	{
		Self(Arc::new(render))
	}

	/// Creates a view that always yields a copy of `node`.
	pub fn from_vnode(node: VNode) -> Self {
		Self::new(move |_| Ok(node.clone()))
	}

	/// Runs the view against a render context.
	pub fn invoke(&self, ctx: &mut RenderContext) -> Result<VNode> {
		(self.0)(ctx)
	}
}

impl fmt::Debug for View {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("View(..)")
	}
}

/// Conversion into a [`View`].
///
/// Component setup functions may return either a bare view or the `Result`
/// produced by the template renderer.
pub trait IntoView {
	/// Converts `self` into a view.
	fn into_view(self) -> Result<View>;
}

impl IntoView for View {
	fn into_view(self) -> Result<View> {
		Ok(self)
	}
}

impl IntoView for Result<View> {
	fn into_view(self) -> Result<View> {
		self
	}
}

impl IntoView for VNode {
	fn into_view(self) -> Result<View> {
		Ok(View::from_vnode(self))
	}
}
