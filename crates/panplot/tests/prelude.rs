use std::time::{Duration, Instant};

use panplot::prelude::*;
use panplot_test_utils::RecordingElement;

#[test]
fn test_prelude_drives_a_chart() {
    let recorder = RecordingElement::series();
    let mut chart = ChartBuilder::new()
        .data(vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 4.0)])
        .element(recorder.clone())
        .build();
    chart.on_layout(200.0, 100.0);

    let start = Instant::now();
    let clock = PointerClock::new();
    chart.handle_pointer(clock.event_at(PointerPhase::Down, Vec2::new(100.0, 50.0), start));
    let touch = chart.handle_pointer(clock.event_at(
        PointerPhase::Up,
        Vec2::new(100.0, 50.0),
        start + Duration::from_millis(30),
    ));
    assert_eq!(touch.map(|t| t.kind), Some(TouchKind::Tap));

    let mut list = DrawList::new();
    assert!(chart.render(&mut list));
    let ctx = recorder.last_context().unwrap();
    assert_eq!(ctx.touch_data_point(), Some(DataPoint::new(5.0, 2.0)));
}
