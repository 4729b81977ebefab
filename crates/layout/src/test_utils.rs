use banner_types::{Element, ElementSize, Point, Size, Zone};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

pub fn assert_point(actual: Option<Point>, x: f64, y: f64) {
    let p = actual.expect("position should be set");
    assert_close(p.x, x);
    assert_close(p.y, y);
}

pub fn assert_pair(actual: Option<ElementSize>, w: f64, h: f64) {
    match actual {
        Some(ElementSize::Pair(s)) => {
            assert_close(s.width, w);
            assert_close(s.height, h);
        }
        other => panic!("expected pair size {}x{}, got {:?}", w, h, other),
    }
}

pub fn assert_scalar(actual: Option<ElementSize>, expected: f64) {
    match actual {
        Some(ElementSize::Scalar(v)) => assert_close(v, expected),
        other => panic!("expected scalar size {}, got {:?}", expected, other),
    }
}

pub fn pair(w: f64, h: f64) -> ElementSize {
    ElementSize::Pair(Size::new(w, h))
}

/// One element per zone plus a zoneless decoration, authored at 1080x1080.
pub fn sample_elements() -> Vec<Element> {
    vec![
        Element::image("bg", "bg.jpg")
            .with_zone(Zone::Background)
            .with_size(pair(1080.0, 1080.0))
            .with_position(0.0, 0.0),
        Element::image("hero", "shoe.png")
            .with_zone(Zone::Product)
            .with_size(pair(400.0, 400.0))
            .with_position(340.0, 340.0),
        Element::text("price", "-50%")
            .with_zone(Zone::Offer)
            .with_size(ElementSize::Scalar(96.0)),
        Element::logo("logo", "logo.svg").with_zone(Zone::Brand),
        Element::text("buy", "Shop now")
            .with_zone(Zone::CallToAction)
            .with_size(ElementSize::Scalar(48.0)),
        Element::image("sparkle", "sparkle.png")
            .with_size(pair(50.0, 50.0))
            .with_position(100.0, 200.0),
    ]
}
