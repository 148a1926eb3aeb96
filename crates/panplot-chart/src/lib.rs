//! panplot chart - interactive pannable 2D chart engine
//!
//! This crate provides:
//! - Data-domain, viewport and pixel-space coordinate transforms
//! - Tap / pan gesture recognition with a leading-edge tap cooldown
//! - A viewport controller owning the pan state, with an imperative handle
//! - A memoised, read-only context broadcast to chart elements
//! - Backend-neutral draw lists with padding and clip scopes
//!
//! # Example
//!
//! ```ignore
//! use panplot_chart::*;
//!
//! let mut chart = ChartBuilder::new()
//!     .data(samples)
//!     .viewport(10.0, 10.0, (0.0, 0.0))
//!     .line(|l| l)
//!     .build();
//!
//! chart.on_layout(320.0, 210.0);
//! chart.handle_pointer(PointerEvent::down(Vec2::new(50.0, 50.0), now));
//!
//! let mut list = DrawList::new();
//! chart.render(&mut list);
//! ```

// Geometry and transforms
mod domain;
mod rect;
mod scale;
mod types;

// Interaction
mod controller;
mod debounce;
mod gesture;
mod handle;

// Composition
mod builder;
mod cache;
mod chart;
mod context;
mod dimensions;
mod draw_list;
mod element;
pub mod elements;
mod props;
mod style;

// Re-exports
pub use domain::*;
pub use rect::*;
pub use scale::*;
pub use types::*;

pub use controller::*;
pub use debounce::*;
pub use gesture::*;
pub use handle::ViewportHandle;

pub use builder::*;
pub use cache::*;
pub use chart::*;
pub use context::*;
pub use dimensions::*;
pub use draw_list::*;
pub use element::*;
pub use props::*;
pub use style::*;

pub use glam::Vec2;

static_assertions::assert_impl_all!(ViewportHandle: Clone, Send, Sync);
static_assertions::assert_impl_all!(ChartContext: Clone, PartialEq, Send, Sync);
static_assertions::assert_impl_all!(Chart: Send);
