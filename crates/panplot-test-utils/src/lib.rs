//! Test utilities for panplot.
//!
//! - [`PointerScript`] builds timed pointer sequences (taps, drags) to feed a
//!   chart without a host.
//! - [`RecordingElement`] is a chart element that records every context it
//!   was drawn with.
//!
//! # Example
//!
//! ```rust
//! use panplot_chart::{ChartProps, Chart};
//! use panplot_test_utils::{PointerScript, RecordingElement};
//!
//! let recorder = RecordingElement::series();
//! let mut chart = Chart::new(ChartProps::default()).with_element(recorder.clone());
//! chart.on_layout(300.0, 200.0);
//!
//! let touches = PointerScript::new().tap_at(50.0, 50.0).run(&mut chart);
//! assert_eq!(touches.len(), 1);
//! ```

mod pointer_script;
mod recording;

pub use pointer_script::PointerScript;
pub use recording::{DrawCall, RecordingElement};
