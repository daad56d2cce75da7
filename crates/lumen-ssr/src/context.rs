//! Part-id allocation and the per-pass render context.
//!
//! Every hydration marker and event placeholder carries a part id. Ids are
//! unique within one top-level render pass, start at 0 and grow by one per
//! allocation. The counter lives in a [`RenderContext`] that is passed down
//! explicitly, so concurrent renders on separate contexts never interfere.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{RenderError, Result};
use crate::options::RenderOptions;

/// Monotonic counter handing out part ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartAllocator {
	next: u64,
}

impl PartAllocator {
	/// Creates an allocator starting at 0.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the current id and advances the counter.
	pub fn allocate(&mut self) -> u64 {
		let id = self.next;
		self.next += 1;
		id
	}

	/// Returns the id the next allocation will hand out.
	pub fn peek(&self) -> u64 {
		self.next
	}

	/// Snapshots the counter.
	pub fn save(&self) -> SavedParts {
		SavedParts(self.next)
	}

	/// Zeroes the counter.
	pub fn reset(&mut self) {
		self.next = 0;
	}

	/// Puts back a snapshot taken with [`save`](Self::save).
	pub fn restore(&mut self, saved: SavedParts) {
		self.next = saved.0;
	}
}

/// Counter snapshot returned by [`PartAllocator::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedParts(u64);

/// State threaded through every resolution call of a render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
	parts: PartAllocator,
	options: RenderOptions,
	depth: usize,
}

impl RenderContext {
	/// Creates a context with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a context with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self {
			parts: PartAllocator::new(),
			options,
			depth: 0,
		}
	}

	/// Returns the render options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Allocates the next part id.
	pub fn allocate(&mut self) -> u64 {
		self.parts.allocate()
	}

	/// Returns the number of part ids handed out since the counter was last reset.
	pub fn parts_allocated(&self) -> u64 {
		self.parts.peek()
	}

	/// Runs `f` with hydration markers switched off, restoring the previous
	/// setting afterwards. Part ids are still allocated.
	pub(crate) fn without_markers<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
		let markers = std::mem::replace(&mut self.options.hydration_markers, false);
		let out = f(self);
		self.options.hydration_markers = markers;
		out
	}

	/// Runs `f` one level deeper in the current chain of factories and
	/// containers.
	///
	/// The depth spans nested views, so a value that leads back to itself
	/// fails with [`RenderError::MalformedFactory`] once the chain exceeds
	/// [`RenderOptions::max_factory_depth`].
	pub(crate) fn nested<R>(&mut self, f: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
		let limit = self.options.max_factory_depth;
		if self.depth >= limit {
			return Err(RenderError::malformed_factory(format!(
				"value chain is deeper than {} levels",
				limit
			)));
		}
		self.depth += 1;
		let out = f(self);
		self.depth -= 1;
		out
	}

	/// Starts a render pass.
	///
	/// The counter is saved and zeroed; the returned guard restores the saved
	/// value when dropped, whether the pass finished, failed or panicked.
	pub fn pass(&mut self) -> RenderPass<'_> {
		let saved = self.parts.save();
		let depth = std::mem::take(&mut self.depth);
		let markers = self.options.hydration_markers;
		self.parts.reset();
		RenderPass {
			ctx: self,
			saved,
			depth,
			markers,
		}
	}
}

/// Guard for a render pass started by [`RenderContext::pass`].
#[derive(Debug)]
pub struct RenderPass<'a> {
	ctx: &'a mut RenderContext,
	saved: SavedParts,
	depth: usize,
	markers: bool,
}

impl Deref for RenderPass<'_> {
	type Target = RenderContext;

	fn deref(&self) -> &Self::Target {
		self.ctx
	}
}

impl DerefMut for RenderPass<'_> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.ctx
	}
}

impl Drop for RenderPass<'_> {
	fn drop(&mut self) {
		self.ctx.parts.restore(self.saved);
		self.ctx.depth = self.depth;
		self.ctx.options.hydration_markers = self.markers;
	}
}

/// A render context shared between callers.
///
/// The lock is held for the full duration of each render call. Views receive
/// the locked context as an argument and must not call back into the same
/// `SharedRenderer`; nested renders go through [`RenderContext::render`].
#[derive(Debug, Clone, Default)]
pub struct SharedRenderer {
	inner: Arc<Mutex<RenderContext>>,
}

impl SharedRenderer {
	/// Creates a shared renderer with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self {
			inner: Arc::new(Mutex::new(RenderContext::with_options(options))),
		}
	}

	/// Runs `f` with exclusive access to the shared context.
	pub fn with_context<R>(&self, f: impl FnOnce(&mut RenderContext) -> R) -> R {
		let mut ctx = self.inner.lock();
		f(&mut ctx)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_allocate_is_monotonic() {
		let mut parts = PartAllocator::new();
		assert_eq!(parts.allocate(), 0);
		assert_eq!(parts.allocate(), 1);
		assert_eq!(parts.allocate(), 2);
		assert_eq!(parts.peek(), 3);
	}

	#[rstest]
	fn test_save_reset_restore() {
		let mut parts = PartAllocator::new();
		parts.allocate();
		parts.allocate();
		let saved = parts.save();
		parts.reset();
		assert_eq!(parts.allocate(), 0);
		parts.restore(saved);
		assert_eq!(parts.allocate(), 2);
	}

	#[rstest]
	fn test_pass_restores_counter() {
		let mut ctx = RenderContext::new();
		ctx.allocate();
		ctx.allocate();
		{
			let mut pass = ctx.pass();
			assert_eq!(pass.allocate(), 0);
			assert_eq!(pass.allocate(), 1);
			assert_eq!(pass.allocate(), 2);
		}
		assert_eq!(ctx.allocate(), 2);
	}

	#[rstest]
	fn test_pass_restores_counter_on_panic() {
		let mut ctx = RenderContext::new();
		ctx.allocate();
		let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
			let mut pass = ctx.pass();
			pass.allocate();
			panic!("render blew up");
		}));
		assert!(result.is_err());
		assert_eq!(ctx.parts_allocated(), 1);
	}

	#[rstest]
	fn test_nested_depth_limit() {
		let mut ctx = RenderContext::with_options(RenderOptions::new().max_factory_depth(2));
		let ok = ctx.nested(|ctx| ctx.nested(|_| Ok(())));
		assert!(ok.is_ok());

		let err = ctx
			.nested(|ctx| ctx.nested(|ctx| ctx.nested(|_| Ok(()))))
			.unwrap_err();
		assert!(matches!(err, RenderError::MalformedFactory { .. }));
		assert_eq!(ctx.depth, 0);
	}

	#[rstest]
	fn test_without_markers_restores_setting() {
		let mut ctx = RenderContext::new();
		let inside = ctx.without_markers(|ctx| ctx.options().hydration_markers);
		assert!(!inside);
		assert!(ctx.options().hydration_markers);
	}

	#[rstest]
	fn test_shared_renderer_is_shared_between_clones() {
		let shared = SharedRenderer::default();
		let other = shared.clone();
		shared.with_context(|ctx| ctx.allocate());
		assert_eq!(other.with_context(|ctx| ctx.parts_allocated()), 1);
	}
}
