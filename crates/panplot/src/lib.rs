//! panplot - interactive pannable 2D charts
//!
//! panplot renders line and area charts inside a host UI. The host measures
//! the container, forwards raw pointer events and replays the draw list; the
//! chart owns the viewport, the pan state and the coordinate transforms.
//!
//! # Quick Start
//!
//! ```ignore
//! use panplot::prelude::*;
//!
//! let mut chart = ChartBuilder::new()
//!     .data(samples)
//!     .viewport(10.0, 10.0, (0.0, 0.0))
//!     .gridlines()
//!     .line(|l| l)
//!     .touch_indicator()
//!     .build();
//!
//! let clock = PointerClock::new();
//! chart.on_layout(width, height);
//! chart.handle_pointer(clock.event(PointerPhase::Down, cursor));
//!
//! let mut list = DrawList::new();
//! chart.render(&mut list);
//! ```

pub mod time;

// Re-export core types
pub use panplot_core as core;
pub use panplot_core::math;

#[cfg(feature = "chart")]
pub use panplot_chart as chart;

pub use time::PointerClock;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::time::PointerClock;

    // Core math types
    pub use panplot_core::geometry::Size;
    pub use panplot_core::math::Vec2;

    #[cfg(feature = "chart")]
    pub use panplot_chart::{
        AxisDomain, Chart, ChartBuilder, ChartContext, ChartElement, ChartProps, Color,
        ConfigError, DataPoint, DrawCommand, DrawList, ElementKind, Padding, PointerEvent,
        PointerPhase, Stroke, TouchEvent, TouchKind, ViewPort, ViewportHandle, ViewportSize,
        elements::{Area, Gridlines, Line, TouchIndicator},
    };
}
