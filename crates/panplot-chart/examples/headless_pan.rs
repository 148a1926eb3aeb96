//! Drives a chart with scripted input and logs what it would draw.
//!
//! Run with `RUST_LOG=debug` to see the controller's commits.

use std::time::Duration;

use panplot_chart::elements::{Area, Gridlines, Line, TouchIndicator};
use panplot_chart::*;
use panplot_core::logging;

fn main() {
    logging::init();

    let data: Vec<DataPoint> = (0..=200)
        .map(|i| {
            let x = i as f64 * 0.5;
            DataPoint::new(x, (x * 0.3).sin() * 10.0 + 20.0)
        })
        .collect();

    let mut chart = ChartBuilder::new()
        .data(data)
        .viewport(20.0, 12.0, (0.0, 14.0))
        .padding(Padding::new(40.0, 10.0, 10.0, 30.0))
        .element(Gridlines::new())
        .element(Area::new())
        .element(Line::new())
        .element(TouchIndicator::new())
        .build();

    chart.on_layout(450.0, 240.0);
    let handle = chart.handle();

    let ms = Duration::from_millis;
    let script = [
        PointerEvent::down(Vec2::new(200.0, 120.0), ms(0)),
        PointerEvent::up(Vec2::new(200.0, 120.0), ms(40)),
        PointerEvent::down(Vec2::new(300.0, 120.0), ms(500)),
        PointerEvent::moved(Vec2::new(250.0, 120.0), ms(516)),
        PointerEvent::moved(Vec2::new(150.0, 110.0), ms(532)),
        PointerEvent::up(Vec2::new(100.0, 110.0), ms(548)),
    ];

    let mut list = DrawList::new();
    for event in script {
        if let Some(touch) = chart.handle_pointer(event) {
            let ctx = chart.context();
            tracing::info!(
                kind = ?touch.kind,
                window = ?ctx.viewport_domain,
                touched = ?ctx.touched_point(),
                "interaction"
            );
        }
    }

    handle.set_viewport_origin(DataPoint::new(60.0, 14.0));

    list.clear();
    chart.render(&mut list);
    tracing::info!(
        window = ?chart.context().viewport_domain,
        commands = list.len(),
        balanced = list.is_balanced(),
        "rendered after handle jump"
    );
    for command in list.commands() {
        match command {
            DrawCommand::Polyline { points, .. } => tracing::debug!(points = points.len(), "polyline"),
            DrawCommand::FillPolygon { points, .. } => tracing::debug!(points = points.len(), "fill"),
            other => tracing::debug!(?other, "command"),
        }
    }
}
