//! Generic geometry type tests.

use panplot_core::geometry::Size;
use panplot_core::math::Vec2;

#[test]
fn test_size_scaling() {
    let size = Size::new(300.0_f32, 200.0);
    assert_eq!(size * 2.0, Size::new(600.0, 400.0));
}

#[test]
fn test_size_cast() {
    let size = Size::new(3_u16, 4_u16);
    let wide: Size<u32> = size.cast();
    assert_eq!(wide, Size::new(3_u32, 4_u32));
}

#[test]
fn test_empty_size() {
    assert!(Size::<f32>::ZERO.is_empty());
    assert!(Size::new(10.0_f32, 0.0).is_empty());
    assert!(!Size::new(10.0_f32, 1.0).is_empty());
}

#[test]
fn test_size_to_vec2() {
    assert_eq!(Size::new(300.0_f32, 200.0).to_vec2(), Vec2::new(300.0, 200.0));
}
