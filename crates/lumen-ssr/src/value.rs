//! The closed set of values a template can interpolate.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::{RenderError, Result};
use crate::node::{VNode, View};

/// Anything that can appear between two literal fragments of a template.
#[derive(Clone)]
pub enum Value {
	/// A scalar leaf.
	Literal(Literal),
	/// A reactive container, unwrapped to its current value.
	Container(Container),
	/// A view, invoked during resolution.
	View(View),
	/// Already realized markup.
	VNode(VNode),
	/// A zero-argument producer, invoked during resolution.
	Factory(Factory),
	/// An ordered list, resolved element by element without separators.
	Sequence(Vec<Value>),
}

impl Value {
	/// The `nil` value.
	pub const NIL: Value = Value::Literal(Literal::Nil);

	/// Wraps a reactive container.
	pub fn container(source: impl CurrentValue + 'static) -> Self {
		Self::Container(Container::new(source))
	}

	/// Wraps an infallible factory.
	pub fn factory<F, V>(produce: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: Into<Value>,
	{
		Self::Factory(Factory::new(produce))
	}

	/// Short name of this value's shape.
	pub fn shape(&self) -> &'static str {
		match self {
			Value::Literal(_) => "literal",
			Value::Container(_) => "container",
			Value::View(_) => "view",
			Value::VNode(_) => "vnode",
			Value::Factory(_) => "factory",
			Value::Sequence(_) => "sequence",
		}
	}
}

impl fmt::Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Literal(lit) => f.debug_tuple("Literal").field(lit).finish(),
			Value::Container(_) => f.write_str("Container(..)"),
			Value::View(_) => f.write_str("View(..)"),
			Value::VNode(node) => f.debug_tuple("VNode").field(node).finish(),
			Value::Factory(_) => f.write_str("Factory(..)"),
			Value::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
		}
	}
}

/// Scalar leaf values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	/// Absent value. Renders as empty text.
	Nil,
	/// Boolean. `false` renders as empty text, `true` as `"true"`.
	Bool(bool),
	/// Signed integer.
	Int(i64),
	/// Unsigned integer.
	UInt(u64),
	/// Floating point number.
	Float(f64),
	/// Text.
	Text(Cow<'static, str>),
}

impl Literal {
	/// Whether this literal renders as empty text regardless of formatting.
	pub fn is_blank(&self) -> bool {
		matches!(self, Literal::Nil | Literal::Bool(false))
	}
}

impl fmt::Display for Literal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Literal::Nil | Literal::Bool(false) => Ok(()),
			Literal::Bool(true) => f.write_str("true"),
			Literal::Int(n) => write!(f, "{}", n),
			Literal::UInt(n) => write!(f, "{}", n),
			Literal::Float(x) => write!(f, "{}", x),
			Literal::Text(s) => f.write_str(s),
		}
	}
}

/// A value exposing a "current value" accessor.
pub trait CurrentValue: Send + Sync {
	/// Returns the value held right now.
	fn current(&self) -> Value;
}

/// Shared handle over a [`CurrentValue`].
#[derive(Clone)]
pub struct Container(Arc<dyn CurrentValue>);

impl Container {
	/// Wraps a source.
	pub fn new(source: impl CurrentValue + 'static) -> Self {
		Self(Arc::new(source))
	}

	/// Reads the current value.
	pub fn current(&self) -> Value {
		self.0.current()
	}
}

type FactoryFn = dyn Fn() -> std::result::Result<Value, String> + Send + Sync + 'static;

/// A zero-argument producer of exactly one value.
///
/// Factories are invoked at resolution time, on every resolution.
#[derive(Clone)]
pub struct Factory(Arc<FactoryFn>);

impl Factory {
	/// Creates a factory that always succeeds.
	pub fn new<F, V>(produce: F) -> Self
	where
		F: Fn() -> V + Send + Sync + 'static,
		V: Into<Value>,
	{
		Self(Arc::new(move || Ok(produce().into())))
	}

	/// Creates a factory that may fail to produce a value.
	///
	/// A failure surfaces as [`RenderError::MalformedFactory`].
	pub fn fallible<F, V, E>(produce: F) -> Self
	where
		F: Fn() -> std::result::Result<V, E> + Send + Sync + 'static,
		V: Into<Value>,
		E: fmt::Display,
	{
		Self(Arc::new(move || {
			produce().map(Into::into).map_err(|e| e.to_string())
		}))
	}

	/// Invokes the factory.
	pub fn produce(&self) -> Result<Value> {
		(self.0)().map_err(RenderError::malformed_factory)
	}
}

impl From<Literal> for Value {
	fn from(lit: Literal) -> Self {
		Value::Literal(lit)
	}
}

impl From<()> for Value {
	fn from(_: ()) -> Self {
		Value::NIL
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Literal(Literal::Bool(b))
	}
}

impl From<&'static str> for Value {
	fn from(s: &'static str) -> Self {
		Value::Literal(Literal::Text(Cow::Borrowed(s)))
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::Literal(Literal::Text(Cow::Owned(s)))
	}
}

impl From<&String> for Value {
	fn from(s: &String) -> Self {
		Value::Literal(Literal::Text(Cow::Owned(s.clone())))
	}
}

impl From<Cow<'static, str>> for Value {
	fn from(s: Cow<'static, str>) -> Self {
		Value::Literal(Literal::Text(s))
	}
}

impl From<char> for Value {
	fn from(c: char) -> Self {
		Value::Literal(Literal::Text(Cow::Owned(c.to_string())))
	}
}

macro_rules! impl_from_int {
	($variant:ident => $target:ty: $($t:ty),*) => {
		$(
			impl From<$t> for Value {
				fn from(n: $t) -> Self {
					Value::Literal(Literal::$variant(n as $target))
				}
			}
		)*
	};
}

impl_from_int!(Int => i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt => u64: u8, u16, u32, u64, usize);

impl From<f32> for Value {
	fn from(x: f32) -> Self {
		Value::Literal(Literal::Float(f64::from(x)))
	}
}

impl From<f64> for Value {
	fn from(x: f64) -> Self {
		Value::Literal(Literal::Float(x))
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(opt: Option<T>) -> Self {
		opt.map_or(Value::NIL, Into::into)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::Sequence(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> FromIterator<T> for Value {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Value::Sequence(iter.into_iter().map(Into::into).collect())
	}
}

impl From<View> for Value {
	fn from(view: View) -> Self {
		Value::View(view)
	}
}

impl From<&View> for Value {
	fn from(view: &View) -> Self {
		Value::View(view.clone())
	}
}

impl From<VNode> for Value {
	fn from(node: VNode) -> Self {
		Value::VNode(node)
	}
}

impl From<Factory> for Value {
	fn from(factory: Factory) -> Self {
		Value::Factory(factory)
	}
}

impl From<Container> for Value {
	fn from(container: Container) -> Self {
		Value::Container(container)
	}
}
