//! The template renderer.
//!
//! A template is an ordered list of literal fragments with one interpolation
//! point between each consecutive pair. Binding values to it yields a
//! [`View`]; invoking the view interleaves fragments and resolved values:
//!
//! - views and vnodes are spliced in as is, without markers; a view spliced
//!   into an attribute value is rendered with its own markers switched off;
//! - values in an event handler attribute are replaced by `ev-part-{id}` and
//!   never resolved;
//! - values in any other attribute are resolved to text, without markers;
//! - everything else is resolved to text and bracketed by
//!   `<!--stext-part-{id}-->` / `<!--etext-part-{id}-->`.
//!
//! Ids are allocated in pre-order: a content interpolation takes its id
//! before its value is resolved, so a wrapping marker always carries a
//! smaller id than the markers produced inside it.
//!
//! Hydration callbacks (`setups`) of spliced views and vnodes are carried over
//! into the resulting [`VNode`]. Server-rendered nodes never have any, so the
//! output of a server render always has empty setups; nodes built by hand keep
//! theirs.
//!
//! ## Example
//!
//! ```
//! use lumen_ssr::{html, render_view_to_string};
//!
//! let view = html!("<h1>{}</h1>", "Hello").unwrap();
//! assert_eq!(
//!     render_view_to_string(&view).unwrap(),
//!     "<h1><!--stext-part-0-->Hello<!--etext-part-0--></h1>"
//! );
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use tracing::trace;

use crate::context::RenderContext;
use crate::detect::{Position, classify};
use crate::error::{RenderError, Result};
use crate::markers;
use crate::node::{VNode, View};
use crate::resolve::{TextPosition, resolve_scalar_at};
use crate::value::Value;

/// Literal fragments of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
	literals: Arc<[Cow<'static, str>]>,
}

impl Template {
	/// Creates a template from its literal fragments.
	pub fn new<I, S>(literals: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Cow<'static, str>>,
	{
		Self {
			literals: literals.into_iter().map(Into::into).collect(),
		}
	}

	/// Splits a format-like source into fragments at each `{}` hole.
	///
	/// `{{` and `}}` stand for literal braces. Any other brace is kept verbatim.
	pub fn parse(source: &str) -> Self {
		let mut literals: Vec<Cow<'static, str>> = Vec::new();
		let mut current = String::new();
		let mut chars = source.chars().peekable();

		while let Some(c) = chars.next() {
			match (c, chars.peek()) {
				('{', Some('}')) => {
					chars.next();
					literals.push(Cow::Owned(std::mem::take(&mut current)));
				}
				('{', Some('{')) | ('}', Some('}')) => {
					chars.next();
					current.push(c);
				}
				_ => current.push(c),
			}
		}
		literals.push(Cow::Owned(current));

		Self {
			literals: literals.into(),
		}
	}

	/// Number of interpolation points.
	pub fn holes(&self) -> usize {
		self.literals.len().saturating_sub(1)
	}

	/// Literal fragments, in order.
	pub fn literals(&self) -> &[Cow<'static, str>] {
		&self.literals
	}

	/// Binds values to the interpolation points.
	///
	/// Fails with [`RenderError::TemplateArity`] unless there is exactly one
	/// more fragment than values.
	pub fn bind(&self, values: Vec<Value>) -> Result<View> {
		if self.literals.len() != values.len() + 1 {
			return Err(RenderError::TemplateArity {
				literals: self.literals.len(),
				values: values.len(),
			});
		}

		let literals = Arc::clone(&self.literals);
		let values: Arc<[Value]> = values.into();
		Ok(View::new(move |ctx| render(&literals, &values, ctx)))
	}
}

/// Builds a view from literal fragments and interpolated values.
///
/// ```
/// use lumen_ssr::{Value, html, render_view_to_string};
///
/// let view = html(["<img alt=\"", "\" src=\"/x.png\">"], vec![Value::from("Logo")]).unwrap();
/// assert_eq!(render_view_to_string(&view).unwrap(), "<img alt=\"Logo\" src=\"/x.png\">");
/// ```
pub fn html<I, S>(literals: I, values: Vec<Value>) -> Result<View>
where
	I: IntoIterator<Item = S>,
	S: Into<Cow<'static, str>>,
{
	Template::new(literals).bind(values)
}

fn render(literals: &[Cow<'static, str>], values: &[Value], ctx: &mut RenderContext) -> Result<VNode> {
	let mut out = VNode {
		html: String::with_capacity(literals.iter().map(|l| l.len()).sum()),
		setups: Vec::new(),
	};

	for (i, literal) in literals.iter().enumerate() {
		out.html.push_str(literal);

		let Some(value) = values.get(i) else {
			continue;
		};

		match value {
			Value::View(view) => {
				let node = match classify(&out.html) {
					Position::Attribute { .. } => ctx.without_markers(|ctx| view.invoke(ctx))?,
					_ => view.invoke(ctx)?,
				};
				out.append(node);
				continue;
			}
			Value::VNode(node) => {
				out.append(node.clone());
				continue;
			}
			_ => {}
		}

		match classify(&out.html) {
			Position::EventAttribute { name } => {
				let id = ctx.allocate();
				trace!(part = id, attribute = %name, "event placeholder");
				out.html.push_str(&markers::event_placeholder(id));
			}
			Position::Attribute { name } => {
				trace!(attribute = %name, "attribute interpolation");
				let text = resolve_scalar_at(value, ctx, TextPosition::Attribute)?;
				out.html.push_str(&text);
			}
			Position::Content => {
				let id = ctx.allocate();
				trace!(part = id, shape = value.shape(), "text part");
				let text = resolve_scalar_at(value, ctx, TextPosition::Content)?;
				if ctx.options().hydration_markers {
					out.html.push_str(&markers::text_start(id));
					out.html.push_str(&text);
					out.html.push_str(&markers::text_end(id));
				} else {
					out.html.push_str(&text);
				}
			}
		}
	}

	Ok(out)
}

/// Builds a [`View`] from a format-like template.
///
/// Each `{}` in the literal is an interpolation point; the remaining
/// arguments are converted with [`Value::from`]. The fragments are parsed once
/// per call site. Evaluates to `Result<View, RenderError>`.
///
/// ```
/// use lumen_ssr::{html, render_view_to_string};
///
/// let view = html!("<button onclick=\"{}\">Ok</button>", "ignored").unwrap();
/// assert_eq!(
///     render_view_to_string(&view).unwrap(),
///     "<button onclick=\"ev-part-0\">Ok</button>"
/// );
/// ```
#[macro_export]
macro_rules! html {
	($source:literal $(, $value:expr)* $(,)?) => {{
		static TEMPLATE: ::std::sync::LazyLock<$crate::Template> =
			::std::sync::LazyLock::new(|| $crate::Template::parse($source));
		TEMPLATE.bind(::std::vec![$($crate::Value::from($value)),*])
	}};
}
