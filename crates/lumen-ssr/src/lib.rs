//! Lumen SSR - template-literal server-side rendering with hydration markers
//!
//! Renders a tree of component-produced templates into one HTML string and
//! annotates it so a client-side hydration pass can bind reactivity without
//! re-parsing the document.
//!
//! ## Architecture
//!
//! - [`context`]: part-id allocator and the render context threaded through a pass
//! - [`value`]: the closed set of interpolable values
//! - [`resolve`]: value resolution to text, or to markup plus hydration callbacks
//! - [`detect`]: classification of interpolation points
//! - [`template`]: the template renderer and the [`html!`] macro
//! - [`component`]: components and render entry points
//! - [`reactive`]: server-side reactive containers
//! - [`markers`]: the hydration micro-protocol
//!
//! ## Hydration protocol
//!
//! | Position | Output |
//! |----------|--------|
//! | content | `<!--stext-part-{n}-->text<!--etext-part-{n}-->` |
//! | event attribute (`on…`) | `ev-part-{n}` |
//! | other attribute | resolved text, no id |
//! | nested view | its markup, no id |
//!
//! ## Example
//!
//! ```
//! use lumen_ssr::{Signal, define_component, html, render_component_to_string};
//!
//! struct CounterProps {
//!     label: &'static str,
//! }
//!
//! let counter = define_component(|props: CounterProps| {
//!     let count = Signal::new(0);
//!     html!(
//!         "<button onclick=\"{}\">{}: {}</button>",
//!         "increment",
//!         props.label,
//!         &count
//!     )
//! });
//!
//! let out = render_component_to_string(&counter, CounterProps { label: "Clicks" }).unwrap();
//! assert_eq!(
//!     out,
//!     "<button onclick=\"ev-part-0\"><!--stext-part-1-->Clicks<!--etext-part-1-->: \
//!      <!--stext-part-2-->0<!--etext-part-2--></button>"
//! );
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod context;
pub mod detect;
pub mod error;
pub mod escape;
pub mod markers;
pub mod node;
pub mod options;
pub mod reactive;
pub mod resolve;
pub mod template;
pub mod value;

pub use component::{
	Component, Root, define_component, render_component_to_string, render_to_string,
	render_value_to_string, render_view_to_string,
};
pub use context::{PartAllocator, RenderContext, RenderPass, SavedParts, SharedRenderer};
pub use detect::{Position, classify};
pub use error::{RenderError, Result};
pub use markers::PartRef;
pub use node::{DomSetup, IntoView, VNode, View};
pub use options::RenderOptions;
pub use reactive::{Memo, Signal};
pub use resolve::{resolve_scalar, resolve_with_setups};
pub use template::{Template, html};
pub use value::{Container, CurrentValue, Factory, Literal, Value};
