//! A chart element that records what it was asked to draw.

use std::sync::Arc;

use parking_lot::Mutex;
use panplot_chart::{ChartContext, ChartElement, DrawList, ElementKind};

/// One recorded `draw` call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub context: ChartContext,
    /// Commands already in the list when the element was drawn.
    pub commands_before: usize,
}

/// Records every context it is drawn with.
///
/// Clones share the same log, so a test can keep one clone and hand the
/// other to the chart.
#[derive(Debug, Clone)]
pub struct RecordingElement {
    kind: ElementKind,
    name: &'static str,
    calls: Arc<Mutex<Vec<DrawCall>>>,
}

impl RecordingElement {
    pub fn new(kind: ElementKind, name: &'static str) -> Self {
        Self {
            kind,
            name,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn series() -> Self {
        Self::new(ElementKind::Series, "RecordingSeries")
    }

    pub fn decoration() -> Self {
        Self::new(ElementKind::Decoration, "RecordingDecoration")
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Context of the most recent draw.
    pub fn last_context(&self) -> Option<ChartContext> {
        self.calls.lock().last().map(|call| call.context.clone())
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl ChartElement for RecordingElement {
    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn draw(&self, ctx: &ChartContext, out: &mut DrawList) {
        self.calls.lock().push(DrawCall {
            context: ctx.clone(),
            commands_before: out.len(),
        });
    }

    fn debug_name(&self) -> &str {
        self.name
    }
}
