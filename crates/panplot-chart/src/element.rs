//! The chart child interface.

use crate::context::ChartContext;
use crate::draw_list::DrawList;

/// Where an element is composed.
///
/// Declared once by the element itself, never inferred from names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Plots data. Drawn inside the clip rect of the drawable area.
    Series,
    /// Axes, grids, overlays. Drawn unclipped, before the series.
    Decoration,
}

/// A child drawn from the shared chart context.
///
/// Elements draw in drawable-area pixel space: the chart has already applied
/// the padding offset (and, for series, the clip) when `draw` is called.
pub trait ChartElement: Send {
    fn kind(&self) -> ElementKind;

    fn draw(&self, ctx: &ChartContext, out: &mut DrawList);

    /// Name used in logs.
    fn debug_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl std::fmt::Debug for dyn ChartElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartElement")
            .field("name", &self.debug_name())
            .field("kind", &self.kind())
            .finish()
    }
}
