//! Components and render entry points.
//!
//! A component wraps a setup function from props to a [`View`]. The entry
//! points run one render pass: the part counter is zeroed, the view is
//! invoked and the counter is put back to what it was before the call, even
//! if rendering fails.
//!
//! ## Usage
//!
//! ```
//! use lumen_ssr::{define_component, html, render_component_to_string};
//!
//! struct TitleProps {
//!     title: String,
//! }
//!
//! let heading = define_component(|props: TitleProps| html!("<h1>{}</h1>", props.title));
//! let out = render_component_to_string(&heading, TitleProps { title: "Hello".into() }).unwrap();
//! assert_eq!(out, "<h1><!--stext-part-0-->Hello<!--etext-part-0--></h1>");
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::context::{RenderContext, SharedRenderer};
use crate::error::{RenderError, Result};
use crate::node::{IntoView, View};
use crate::value::Value;

type SetupFn<P> = dyn Fn(P) -> Result<View> + Send + Sync + 'static;

/// A reusable unit turning props into a view.
pub struct Component<P> {
	setup: Arc<SetupFn<P>>,
	name: &'static str,
}

impl<P> Clone for Component<P> {
	fn clone(&self) -> Self {
		Self {
			setup: Arc::clone(&self.setup),
			name: self.name,
		}
	}
}

impl<P> fmt::Debug for Component<P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Component").field("name", &self.name).finish()
	}
}

impl<P> Component<P> {
	/// Sets the name used in log output.
	pub fn named(mut self, name: &'static str) -> Self {
		self.name = name;
		self
	}

	/// Returns the component's name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Runs the setup function, producing a fresh view.
	pub fn call(&self, props: P) -> Result<View> {
		(self.setup)(props)
	}
}

/// Wraps a setup function into a [`Component`].
///
/// The setup function runs once per render of the component; it may return a
/// [`View`] or the `Result` produced by [`html!`](crate::html).
pub fn define_component<P, F, V>(setup: F) -> Component<P>
where
	F: Fn(P) -> V + Send + Sync + 'static,
	V: IntoView,
{
	Component {
		setup: Arc::new(move |props| setup(props).into_view()),
		name: "anonymous",
	}
}

/// What a render pass starts from.
#[derive(Debug)]
pub enum Root<P = ()> {
	/// A bare view.
	View(View),
	/// A component together with its props.
	Component(Component<P>, P),
}

impl<P> From<View> for Root<P> {
	fn from(view: View) -> Self {
		Root::View(view)
	}
}

impl<P> From<(Component<P>, P)> for Root<P> {
	fn from((component, props): (Component<P>, P)) -> Self {
		Root::Component(component, props)
	}
}

impl<P> TryFrom<Value> for Root<P> {
	type Error = RenderError;

	fn try_from(value: Value) -> Result<Self> {
		match value {
			Value::View(view) => Ok(Root::View(view)),
			other => Err(RenderError::InvalidArgument {
				found: other.shape(),
			}),
		}
	}
}

impl RenderContext {
	/// Renders a root in a fresh pass on this context.
	///
	/// Part ids restart at 0 for the pass; the counter is restored afterwards.
	pub fn render<P>(&mut self, root: impl Into<Root<P>>) -> Result<String> {
		let mut pass = self.pass();
		let (view, name) = match root.into() {
			Root::View(view) => (view, "view"),
			Root::Component(component, props) => {
				let name = component.name();
				(component.call(props)?, name)
			}
		};
		let node = view.invoke(&mut pass)?;
		debug!(
			root = name,
			parts = pass.parts_allocated(),
			bytes = node.html.len(),
			"render pass complete"
		);
		Ok(node.html)
	}
}

impl SharedRenderer {
	/// Renders a root while holding the shared context's lock.
	pub fn render<P>(&self, root: impl Into<Root<P>>) -> Result<String> {
		self.with_context(|ctx| ctx.render(root))
	}
}

/// Renders a view or a component with props to an HTML string.
pub fn render_to_string<P>(root: impl Into<Root<P>>) -> Result<String> {
	RenderContext::new().render(root)
}

/// Renders a component with props to an HTML string.
pub fn render_component_to_string<P>(component: &Component<P>, props: P) -> Result<String> {
	render_to_string(Root::Component(component.clone(), props))
}

/// Renders a view to an HTML string.
pub fn render_view_to_string(view: &View) -> Result<String> {
	render_to_string::<()>(Root::View(view.clone()))
}

/// Renders a dynamically typed root.
///
/// Only [`Value::View`] is accepted; any other shape fails with
/// [`RenderError::InvalidArgument`].
pub fn render_value_to_string(value: Value) -> Result<String> {
	render_to_string(Root::<()>::try_from(value)?)
}
