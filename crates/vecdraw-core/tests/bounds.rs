//! Bounds overlay behavior on a live canvas.

use kurbo::Point;
use proptest::prelude::*;
use vecdraw_core::bounds::DiagonalPairing;
use vecdraw_core::shapes::{Line, Rectangle};
use vecdraw_core::{Bounds, BoundsConfig, Canvas, Shape};

fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
    Shape::Rectangle(Rectangle::new(Point::new(x0, y0), Point::new(x1, y1)))
}

#[test]
fn test_show_twice_hide_once_restores_overlay() {
    let mut canvas = Canvas::new();
    let other = canvas.add_shape(rectangle(200.0, 200.0, 220.0, 220.0));
    canvas.show_bounds(other);
    let id = canvas.add_shape(Shape::Line(Line::new(
        Point::new(0.0, 0.0),
        Point::new(50.0, 20.0),
    )));
    let before = canvas.overlay().segments().to_vec();

    assert!(canvas.show_bounds(id));
    assert!(!canvas.show_bounds(id));
    let added = canvas.bounds(id).unwrap().segments().len();
    assert_eq!(canvas.overlay().len(), before.len() + added);

    assert!(canvas.hide_bounds(id));
    assert!(!canvas.hide_bounds(id));
    assert_eq!(canvas.overlay().segments(), before.as_slice());
}

#[test]
fn test_line_bounds_orientation_tie_break() {
    let config = BoundsConfig::default();
    let half = config.handle_size / 2.0 + config.line_offset;

    let rising = Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, -10.0)));
    let falling = Shape::Line(Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
    let rising = Bounds::create(&rising, &config).unwrap();
    let falling = Bounds::create(&falling, &config).unwrap();
    let rising = rising.as_line().unwrap();
    let falling = falling.as_line().unwrap();

    assert_eq!(rising.pairing(), DiagonalPairing::StraightThrough);
    assert_eq!(falling.pairing(), DiagonalPairing::Inverted);

    assert_eq!(
        rising.body().vertices(),
        &[
            Point::new(-half, -half),
            Point::new(10.0 - half, -10.0 - half),
            Point::new(10.0 + half, -10.0 + half),
            Point::new(half, half),
        ]
    );
    assert_eq!(
        falling.body().vertices(),
        &[
            Point::new(-half, half),
            Point::new(10.0 - half, 10.0 + half),
            Point::new(10.0 + half, 10.0 - half),
            Point::new(half, -half),
        ]
    );

    // Same corner, opposite y pairing.
    for (r, f) in rising.body().vertices().iter().zip(falling.body().vertices()) {
        assert_eq!(r.x, f.x);
        assert_eq!(r.y, -f.y);
    }
    assert!(rising.body().contains(Point::new(5.0, -5.0)));
    assert!(falling.body().contains(Point::new(5.0, 5.0)));
    assert!(!falling.body().contains(Point::new(5.0, -5.0)));
}

#[test]
fn test_line_handles_are_hit() {
    let mut canvas = Canvas::new();
    let id = canvas.add_shape(Shape::Line(Line::new(
        Point::new(0.0, 100.0),
        Point::new(100.0, 0.0),
    )));
    assert_eq!(canvas.hit_test(Point::new(-3.0, 103.0)), Some(id));
    assert_eq!(canvas.hit_test(Point::new(103.0, -3.0)), Some(id));
    assert_eq!(canvas.hit_test(Point::new(50.0, 50.0)), Some(id));
    assert_eq!(canvas.hit_test(Point::new(10.0, 10.0)), None);
}

proptest! {
    #[test]
    fn prop_box_contains_matches_inflated_rect(
        x0 in -500.0f64..500.0,
        y0 in -500.0f64..500.0,
        w in 1.0f64..400.0,
        h in 1.0f64..400.0,
        offset in 0.0f64..20.0,
        u in 0.01f64..0.99,
        v in 0.01f64..0.99,
        gap in 0.01f64..100.0,
    ) {
        let config = BoundsConfig { box_offset: offset, ..BoundsConfig::default() };
        let shape = rectangle(x0 + w, y0, x0, y0 + h);
        let bounds = Bounds::create(&shape, &config).unwrap();

        let (left, top) = (x0 - offset, y0 - offset);
        let (width, height) = (w + 2.0 * offset, h + 2.0 * offset);

        let inside = Point::new(left + u * width, top + v * height);
        prop_assert!(bounds.contains(inside));

        let outside = [
            Point::new(left - gap, top + v * height),
            Point::new(left + width + gap, top + v * height),
            Point::new(left + u * width, top - gap),
            Point::new(left + u * width, top + height + gap),
        ];
        for point in outside {
            prop_assert!(!bounds.contains(point), "{:?} should be outside", point);
        }
    }
}
