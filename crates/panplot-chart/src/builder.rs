//! Fluent chart builder API.
//!
//! # Example
//!
//! ```ignore
//! let chart = ChartBuilder::new()
//!     .data(samples)
//!     .x_range(0.0, 100.0)
//!     .viewport(10.0, 10.0, (0.0, 0.0))
//!     .padding(Padding::symmetric(10.0, 5.0))
//!     .gridlines()
//!     .line(|l| l.with_width(1.5))
//!     .touch_indicator()
//!     .build();
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::chart::Chart;
use crate::element::ChartElement;
use crate::elements::{Area, Gridlines, Line, TouchIndicator};
use crate::props::{ChartProps, ConfigError};
use crate::types::{AxisDomain, DataPoint, Padding, ViewPort, ViewportSize};

/// Builder for creating charts.
pub struct ChartBuilder {
    props: ChartProps,
    elements: Vec<Box<dyn ChartElement>>,
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChartBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartBuilder")
            .field("props", &self.props)
            .field("elements", &self.elements)
            .finish()
    }
}

impl ChartBuilder {
    /// Create a new chart builder.
    pub fn new() -> Self {
        Self {
            props: ChartProps::default(),
            elements: Vec::new(),
        }
    }

    /// Start from existing props.
    pub fn from_props(props: ChartProps) -> Self {
        Self {
            props,
            elements: Vec::new(),
        }
    }

    /// Set the series data (ordered by x).
    pub fn data(mut self, data: impl Into<Arc<[DataPoint]>>) -> Self {
        self.props.data = data.into();
        self
    }

    /// Set the x domain instead of deriving it from the data.
    pub fn x_range(mut self, min: f64, max: f64) -> Self {
        self.props.x_domain = Some(AxisDomain::new(min, max));
        self
    }

    /// Set the y domain instead of deriving it from the data.
    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.props.y_domain = Some(AxisDomain::new(min, max));
        self
    }

    /// Set the visible window size and its initial lower-left origin.
    pub fn viewport(mut self, width: f64, height: f64, origin: impl Into<DataPoint>) -> Self {
        self.props.viewport = Some(ViewPort::new(ViewportSize::new(width, height), origin.into()));
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.props.padding = padding;
        self
    }

    pub fn disable_touch(mut self, disabled: bool) -> Self {
        self.props.disable_touch = disabled;
        self
    }

    pub fn disable_gestures(mut self, disabled: bool) -> Self {
        self.props.disable_gestures = disabled;
        self
    }

    pub fn tap_cooldown(mut self, cooldown: Duration) -> Self {
        self.props.gesture.tap_cooldown = cooldown;
        self
    }

    pub fn pan_activation_distance(mut self, pixels: f32) -> Self {
        self.props.gesture.pan_activation_distance = pixels;
        self
    }

    /// Add any element.
    pub fn element(mut self, element: impl ChartElement + 'static) -> Self {
        self.elements.push(Box::new(element));
        self
    }

    /// Add a line series configured by `f`.
    pub fn line(self, f: impl FnOnce(Line) -> Line) -> Self {
        self.element(f(Line::new()))
    }

    /// Add an area series configured by `f`.
    pub fn area(self, f: impl FnOnce(Area) -> Area) -> Self {
        self.element(f(Area::new()))
    }

    /// Add default gridlines.
    pub fn gridlines(self) -> Self {
        self.element(Gridlines::new())
    }

    /// Add the default touch indicator.
    pub fn touch_indicator(self) -> Self {
        self.element(TouchIndicator::new())
    }

    /// Build the chart, rejecting invalid configuration.
    pub fn try_build(self) -> Result<Chart, ConfigError> {
        self.props.validate()?;
        Ok(self.assemble())
    }

    /// Build the chart. Invalid configuration is logged and the chart falls
    /// back to clamped behaviour.
    pub fn build(self) -> Chart {
        if let Err(e) = self.props.validate() {
            tracing::warn!("Chart configuration problem: {}", e);
        }
        self.assemble()
    }

    fn assemble(self) -> Chart {
        let mut chart = Chart::new(self.props);
        for element in self.elements {
            chart.add_boxed(element);
        }
        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use crate::props::Axis;

    #[test]
    fn test_builder_collects_props_and_elements() {
        let chart = ChartBuilder::new()
            .data(vec![DataPoint::new(0.0, 0.0), DataPoint::new(100.0, 50.0)])
            .viewport(10.0, 5.0, (20.0, 10.0))
            .padding(Padding::uniform(4.0))
            .gridlines()
            .line(|l| l.with_width(1.0))
            .build();

        let resolved = chart.resolved();
        assert_eq!(resolved.viewport.initial_origin, DataPoint::new(20.0, 10.0));
        assert_eq!(resolved.padding, Padding::uniform(4.0));
        let kinds: Vec<_> = chart.elements().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![ElementKind::Decoration, ElementKind::Series]);
    }

    #[test]
    fn test_try_build_surfaces_errors() {
        let result = ChartBuilder::new().x_range(10.0, 0.0).try_build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidDomain { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn test_build_degrades_gracefully() {
        let chart = ChartBuilder::new().viewport(50.0, 50.0, (0.0, 0.0)).build();
        assert_eq!(chart.resolved().viewport.size, ViewportSize::new(50.0, 50.0));
    }
}
