use crate::scene::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_TEXT, DEFAULT_TEXT_POSITION, TEXT_BOX_WIDTH,
};
use crate::test_utils::*;
use crate::{adapt_to, realize, LayoutError, SceneObject};
use banner_types::{Color, Element, ElementId, ElementSize, Format, Zone};

fn format(s: &str) -> Format {
    Format::parse(s).unwrap()
}

#[test]
fn test_backgrounds_are_painted_first() {
    init_logger();
    let elements = vec![
        Element::text("title", "Hello"),
        Element::image("bg1", "a.jpg").with_zone(Zone::Background),
        Element::logo("logo", "logo.svg").with_zone(Zone::Brand),
        Element::image("bg2", "b.jpg").with_zone("fondo"),
    ];

    let scene = realize(format("1080x1080"), &elements).unwrap();
    let order: Vec<&str> = scene.objects.iter().map(|o| o.element().id.as_str()).collect();

    assert_eq!(order, vec!["bg1", "bg2", "title", "logo"]);
}

#[test]
fn test_image_box_from_adapted_element() {
    let f = format("1920x1080");
    let adapted = adapt_to(f, &[Element::image("hero", "shoe.png").with_zone(Zone::Product)]);
    let scene = realize(f, &adapted).unwrap();

    let SceneObject::Image(img) = &scene.objects[0] else {
        panic!("expected image box");
    };
    assert_eq!(img.source.as_str(), "shoe.png");
    assert_close(img.left, 1920.0 * 0.5 - 1920.0 * 0.4 / 2.0);
    assert_close(img.top, 1080.0 * 0.5 - 1080.0 * 0.4 / 2.0);
    assert_close(img.width, 1920.0 * 0.4);
    assert_close(img.height, 1080.0 * 0.4);
}

#[test]
fn test_image_defaults() {
    let elements = vec![Element::image("free", "x.png").with_size(ElementSize::Scalar(12.0))];
    let scene = realize(format("500x500"), &elements).unwrap();

    let SceneObject::Image(img) = &scene.objects[0] else {
        panic!("expected image box");
    };
    assert_eq!((img.left, img.top), (0.0, 0.0));
    assert_eq!((img.width, img.height), (200.0, 200.0));
}

#[test]
fn test_image_without_source_fails() {
    let mut logo = Element::logo("logo", "logo.svg");
    logo.source = None;

    let err = realize(format("1080x1080"), &[logo]).unwrap_err();
    assert_eq!(err, LayoutError::MissingSource(ElementId::new("logo")));
}

#[test]
fn test_text_defaults() {
    let el = Element::text("t", "");

    let scene = realize(format("1080x1080"), &[el]).unwrap();
    let SceneObject::Text(text) = &scene.objects[0] else {
        panic!("expected text box");
    };

    assert_eq!(text.content, DEFAULT_TEXT);
    assert_eq!((text.x, text.y), (DEFAULT_TEXT_POSITION.x, DEFAULT_TEXT_POSITION.y));
    assert_eq!(text.font_size, DEFAULT_FONT_SIZE);
    assert_eq!(text.font_family, DEFAULT_FONT_FAMILY);
    assert_eq!(text.fill, Color::WHITE);
    assert_eq!(text.width, TEXT_BOX_WIDTH);
}

#[test]
fn test_text_uses_element_fields() {
    let f = format("270x270");
    let adapted = adapt_to(
        f,
        &[Element::text("price", "-50%")
            .with_zone(Zone::Offer)
            .with_size(ElementSize::Scalar(96.0))
            .with_font("Oswald")
            .with_color(Color::rgb(255, 0, 0))],
    );

    let scene = realize(f, &adapted).unwrap();
    let SceneObject::Text(text) = &scene.objects[0] else {
        panic!("expected text box");
    };

    assert_eq!(text.content, "-50%");
    assert_close(text.x, 135.0);
    assert_close(text.y, 54.0);
    assert_close(text.font_size, 24.0);
    assert_eq!(text.font_family, "Oswald");
    assert_eq!(text.fill, Color::rgb(255, 0, 0));
}

#[test]
fn test_text_with_pair_size_falls_back_to_default_font_size() {
    let el = Element::text("t", "Hi").with_size(pair(300.0, 40.0));
    let scene = realize(format("1080x1080"), &[el]).unwrap();
    let SceneObject::Text(text) = &scene.objects[0] else {
        panic!("expected text box");
    };
    assert_eq!(text.font_size, DEFAULT_FONT_SIZE);
}

#[test]
fn test_scene_dimensions() {
    let scene = realize(format("728x90"), &sample_elements()).unwrap();
    assert_eq!(scene.width(), 728);
    assert_eq!(scene.height(), 90);
    assert_eq!(scene.len(), 6);
    assert!(!scene.is_empty());
}
