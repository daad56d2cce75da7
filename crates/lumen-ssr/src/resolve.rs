//! Value resolution.
//!
//! A single recursive dispatch turns any [`Value`] into output. The two public
//! entry points differ only in what they collect: [`resolve_scalar`] keeps the
//! markup text, [`resolve_with_setups`] also keeps the hydration callbacks of
//! every view it passes through.

use crate::context::RenderContext;
use crate::error::Result;
use crate::escape::{escape_attr, escape_text};
use crate::node::VNode;
use crate::value::{Literal, Value};

/// Where resolved text is going to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextPosition {
	/// Between tags.
	Content,
	/// Inside a quoted attribute value.
	Attribute,
}

trait Sink {
	fn text(&mut self, text: &str);
	fn node(&mut self, node: VNode);
}

struct TextSink {
	out: String,
	escape: Option<TextPosition>,
}

impl Sink for TextSink {
	fn text(&mut self, text: &str) {
		match self.escape {
			None => self.out.push_str(text),
			Some(TextPosition::Content) => self.out.push_str(&escape_text(text)),
			Some(TextPosition::Attribute) => self.out.push_str(&escape_attr(text)),
		}
	}

	fn node(&mut self, node: VNode) {
		self.out.push_str(&node.html);
	}
}

struct NodeSink {
	node: VNode,
	escape: bool,
}

impl Sink for NodeSink {
	fn text(&mut self, text: &str) {
		if self.escape {
			self.node.html.push_str(&escape_text(text));
		} else {
			self.node.html.push_str(text);
		}
	}

	fn node(&mut self, node: VNode) {
		self.node.append(node);
	}
}

fn dispatch<S: Sink>(value: &Value, ctx: &mut RenderContext, sink: &mut S) -> Result<()> {
	match value {
		Value::Literal(lit) if lit.is_blank() => Ok(()),
		Value::Literal(Literal::Text(s)) => {
			sink.text(s);
			Ok(())
		}
		Value::Literal(lit) => {
			sink.text(&lit.to_string());
			Ok(())
		}
		Value::Container(container) => {
			ctx.nested(|ctx| dispatch(&container.current(), ctx, sink))
		}
		Value::View(view) => {
			let node = view.invoke(ctx)?;
			sink.node(node);
			Ok(())
		}
		Value::VNode(node) => {
			sink.node(node.clone());
			Ok(())
		}
		Value::Factory(factory) => ctx.nested(|ctx| {
			let produced = factory.produce()?;
			dispatch(&produced, ctx, sink)
		}),
		Value::Sequence(items) => {
			for item in items {
				dispatch(item, ctx, sink)?;
			}
			Ok(())
		}
	}
}

pub(crate) fn resolve_scalar_at(
	value: &Value,
	ctx: &mut RenderContext,
	position: TextPosition,
) -> Result<String> {
	let mut sink = TextSink {
		out: String::new(),
		escape: ctx.options().escape_text.then_some(position),
	};
	match position {
		// Views nested in an attribute value must not leak marker comments into it.
		TextPosition::Attribute => ctx.without_markers(|ctx| dispatch(value, ctx, &mut sink))?,
		TextPosition::Content => dispatch(value, ctx, &mut sink)?,
	}
	Ok(sink.out)
}

/// Resolves a value to markup text.
///
/// `nil` and `false` become empty text, containers are unwrapped, views are
/// invoked, factories are called and sequences are concatenated in order.
pub fn resolve_scalar(value: &Value, ctx: &mut RenderContext) -> Result<String> {
	resolve_scalar_at(value, ctx, TextPosition::Content)
}

/// Resolves a value to markup plus the hydration callbacks collected on the way.
pub fn resolve_with_setups(value: &Value, ctx: &mut RenderContext) -> Result<VNode> {
	let mut sink = NodeSink {
		node: VNode::default(),
		escape: ctx.options().escape_text,
	};
	dispatch(value, ctx, &mut sink)?;
	Ok(sink.node)
}
