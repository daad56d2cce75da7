//! Server-side reactive containers.
//!
//! During server rendering nothing re-renders, so these containers only need
//! to expose their current value. Dependency tracking and effects live on the
//! client.
//!
//! ## Example
//!
//! ```
//! use lumen_ssr::{Memo, Signal, html, render_view_to_string};
//!
//! let count = Signal::new(2);
//! let double = Memo::new({
//!     let count = count.clone();
//!     move || count.get() * 2
//! });
//!
//! let view = html!("<p>{} (x2: {})</p>", &count, &double).unwrap();
//! count.set(3);
//! let out = render_view_to_string(&view).unwrap();
//! assert!(out.contains("-->3<!--") && out.contains("-->6<!--"));
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::value::{CurrentValue, Value};

/// A shared, mutable value.
///
/// All clones of a signal share the same value.
pub struct Signal<T> {
	value: Arc<RwLock<T>>,
}

impl<T> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Arc::clone(&self.value),
		}
	}
}

impl<T> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			value: Arc::new(RwLock::new(value)),
		}
	}

	/// Get the current value of the signal
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.read().clone()
	}

	/// Set the signal to a new value
	pub fn set(&self, value: T) {
		*self.value.write() = value;
	}

	/// Update the value in place
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		f(&mut self.value.write());
	}

	/// Borrow the value for the duration of `f`
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.read())
	}
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.read())
			.finish()
	}
}

impl<T> CurrentValue for Signal<T>
where
	T: Clone + Into<Value> + Send + Sync,
{
	fn current(&self) -> Value {
		self.get().into()
	}
}

/// A value computed from other state each time it is read.
pub struct Memo<T> {
	compute: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T> Clone for Memo<T> {
	fn clone(&self) -> Self {
		Self {
			compute: Arc::clone(&self.compute),
		}
	}
}

impl<T> Memo<T> {
	/// Creates a memo from its computation.
	pub fn new(compute: impl Fn() -> T + Send + Sync + 'static) -> Self {
		Self {
			compute: Arc::new(compute),
		}
	}

	/// Computes the current value.
	pub fn get(&self) -> T {
		(self.compute)()
	}
}

impl<T> fmt::Debug for Memo<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Memo(..)")
	}
}

impl<T: Into<Value>> CurrentValue for Memo<T> {
	fn current(&self) -> Value {
		self.get().into()
	}
}

impl<T> From<Signal<T>> for Value
where
	T: Clone + Into<Value> + Send + Sync + 'static,
{
	fn from(signal: Signal<T>) -> Self {
		Value::container(signal)
	}
}

impl<T> From<&Signal<T>> for Value
where
	T: Clone + Into<Value> + Send + Sync + 'static,
{
	fn from(signal: &Signal<T>) -> Self {
		Value::container(signal.clone())
	}
}

impl<T: Into<Value> + 'static> From<Memo<T>> for Value {
	fn from(memo: Memo<T>) -> Self {
		Value::container(memo)
	}
}

impl<T: Into<Value> + 'static> From<&Memo<T>> for Value {
	fn from(memo: &Memo<T>) -> Self {
		Value::container(memo.clone())
	}
}
