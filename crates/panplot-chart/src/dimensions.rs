//! Container size tracking.

use panplot_core::geometry::Size;

/// Records the measured pixel size of the chart's container.
///
/// "Not measured yet" (`None`) is a distinct state from "measured as 0x0";
/// the chart renders nothing until the first layout pass arrives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DimensionObserver {
    dimensions: Option<Size<f32>>,
    layout_count: u64,
}

impl DimensionObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout callback. Returns `true` when the recorded size changed.
    pub fn on_layout(&mut self, width: f32, height: f32) -> bool {
        self.layout_count += 1;
        let next = Some(Size::new(width.max(0.0), height.max(0.0)));
        if self.dimensions == next {
            return false;
        }

        tracing::debug!(
            width,
            height,
            first = self.dimensions.is_none(),
            "container measured"
        );
        self.dimensions = next;
        true
    }

    /// Measured size, `None` before the first layout.
    pub fn dimensions(&self) -> Option<Size<f32>> {
        self.dimensions
    }

    pub fn is_measured(&self) -> bool {
        self.dimensions.is_some()
    }

    /// Number of layout callbacks received, changed or not.
    pub fn layout_count(&self) -> u64 {
        self.layout_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmeasured_by_default() {
        let observer = DimensionObserver::new();
        assert!(!observer.is_measured());
        assert_eq!(observer.dimensions(), None);
    }

    #[test]
    fn test_zero_size_is_measured() {
        let mut observer = DimensionObserver::new();
        assert!(observer.on_layout(0.0, 0.0));
        assert!(observer.is_measured());
        assert_eq!(observer.dimensions(), Some(Size::ZERO));
    }

    #[test]
    fn test_resize_reports_change() {
        let mut observer = DimensionObserver::new();
        assert!(observer.on_layout(320.0, 210.0));
        assert!(!observer.on_layout(320.0, 210.0));
        assert!(observer.on_layout(640.0, 210.0));
        assert_eq!(observer.layout_count(), 3);
        assert_eq!(observer.dimensions(), Some(Size::new(640.0, 210.0)));
    }
}
