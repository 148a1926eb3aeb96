//! Chart configuration.

use std::fmt;
use std::sync::Arc;

use crate::domain::{default_viewport, default_x_domain, default_y_domain};
use crate::gesture::GestureConfig;
use crate::types::{AxisDomain, DataPoint, Padding, ViewPort, XYDomain};

/// Chart axis, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Problems found by [`ChartProps::validate`].
///
/// None of these stop a chart from working; they flag configurations that
/// fall back to clamped or degenerate behaviour.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min > max` or a non-finite bound.
    InvalidDomain { axis: Axis, min: f64, max: f64 },
    /// Viewport size or origin is NaN or infinite.
    NonFiniteViewport(ViewPort),
    /// The viewport cannot pan on this axis.
    ViewportExceedsDomain { axis: Axis, size: f64, span: f64 },
    NegativeViewportSize { axis: Axis, size: f64 },
    NegativePadding(Padding),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDomain { axis, min, max } => {
                write!(f, "invalid {} domain [{}, {}]", axis, min, max)
            }
            ConfigError::NonFiniteViewport(viewport) => {
                write!(f, "viewport has non-finite values: {:?}", viewport)
            }
            ConfigError::ViewportExceedsDomain { axis, size, span } => write!(
                f,
                "viewport {} size {} is larger than the domain span {}",
                axis, size, span
            ),
            ConfigError::NegativeViewportSize { axis, size } => {
                write!(f, "viewport {} size {} is negative", axis, size)
            }
            ConfigError::NegativePadding(padding) => {
                write!(f, "padding must not be negative: {:?}", padding)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// User-facing chart configuration. Unset fields are derived from the data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartProps {
    pub data: Arc<[DataPoint]>,
    pub x_domain: Option<AxisDomain>,
    pub y_domain: Option<AxisDomain>,
    pub viewport: Option<ViewPort>,
    pub padding: Padding,
    /// Ignore taps.
    pub disable_touch: bool,
    /// Ignore pans.
    pub disable_gestures: bool,
    pub gesture: GestureConfig,
}

/// [`ChartProps`] with every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProps {
    pub data: Arc<[DataPoint]>,
    pub domain: XYDomain,
    pub viewport: ViewPort,
    pub padding: Padding,
}

impl ChartProps {
    pub fn new(data: impl Into<Arc<[DataPoint]>>) -> Self {
        Self {
            data: data.into(),
            ..Default::default()
        }
    }

    /// Fill in data-derived defaults.
    pub fn resolve(&self) -> ResolvedProps {
        let domain = XYDomain::new(
            self.x_domain.unwrap_or_else(|| default_x_domain(&self.data)),
            self.y_domain.unwrap_or_else(|| default_y_domain(&self.data)),
        );
        let viewport = self.viewport.unwrap_or_else(|| default_viewport(&domain));

        ResolvedProps {
            data: Arc::clone(&self.data),
            domain,
            viewport,
            padding: self.padding,
        }
    }

    /// Check the resolved configuration, reporting the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolved = self.resolve();

        for (axis, domain) in [(Axis::X, resolved.domain.x), (Axis::Y, resolved.domain.y)] {
            if !domain.min.is_finite() || !domain.max.is_finite() || domain.min > domain.max {
                return Err(ConfigError::InvalidDomain {
                    axis,
                    min: domain.min,
                    max: domain.max,
                });
            }
        }

        let viewport = resolved.viewport;
        let size = viewport.size;
        if !size.width.is_finite() || !size.height.is_finite() || !viewport.initial_origin.is_finite()
        {
            return Err(ConfigError::NonFiniteViewport(viewport));
        }

        for (axis, size, span) in [
            (Axis::X, size.width, resolved.domain.x.span()),
            (Axis::Y, size.height, resolved.domain.y.span()),
        ] {
            if size < 0.0 {
                return Err(ConfigError::NegativeViewportSize { axis, size });
            }
            if size > span {
                return Err(ConfigError::ViewportExceedsDomain { axis, size, span });
            }
        }

        let p = self.padding;
        if p.left < 0.0 || p.top < 0.0 || p.right < 0.0 || p.bottom < 0.0 {
            return Err(ConfigError::NegativePadding(p));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ViewportSize;

    #[test]
    fn test_empty_defaults() {
        let resolved = ChartProps::default().resolve();
        assert_eq!(resolved.domain.x, AxisDomain::new(0.0, 10.0));
        assert_eq!(resolved.domain.y, AxisDomain::new(0.0, 10.0));
        assert_eq!(resolved.viewport.size, ViewportSize::new(10.0, 10.0));
        assert_eq!(resolved.viewport.initial_origin, DataPoint::new(0.0, 0.0));
        assert!(ChartProps::default().validate().is_ok());
    }

    #[test]
    fn test_explicit_domain_wins() {
        let props = ChartProps {
            x_domain: Some(AxisDomain::new(-5.0, 5.0)),
            ..ChartProps::new(vec![DataPoint::new(1.0, 2.0), DataPoint::new(3.0, 8.0)])
        };
        let resolved = props.resolve();
        assert_eq!(resolved.domain.x, AxisDomain::new(-5.0, 5.0));
        assert_eq!(resolved.domain.y, AxisDomain::new(2.0, 8.0));
    }

    #[test]
    fn test_inverted_domain_rejected() {
        let props = ChartProps {
            y_domain: Some(AxisDomain::new(4.0, 1.0)),
            ..Default::default()
        };
        assert_eq!(
            props.validate(),
            Err(ConfigError::InvalidDomain {
                axis: Axis::Y,
                min: 4.0,
                max: 1.0,
            })
        );
    }

    #[test]
    fn test_oversized_viewport_rejected() {
        let props = ChartProps {
            viewport: Some(ViewPort::new(ViewportSize::new(20.0, 5.0), DataPoint::default())),
            ..Default::default()
        };
        let err = props.validate().unwrap_err();
        assert!(matches!(err, ConfigError::ViewportExceedsDomain { axis: Axis::X, .. }));
        assert_eq!(err.to_string(), "viewport x size 20 is larger than the domain span 10");
    }

    #[test]
    fn test_negative_padding_rejected() {
        let props = ChartProps {
            padding: Padding::new(-1.0, 0.0, 0.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(props.validate(), Err(ConfigError::NegativePadding(_))));
    }
}
