//! End-to-end runs of the logo pipeline into a temporary directory.

use pitchkit::Error;
use pitchkit::logo::{
    Canvas, Crop, LABEL_FONT_FAMILIES, RasterOptions, ShapeKind, laliax_logo, render_png,
    save_png,
};
use resvg::usvg::fontdb;

fn low_res() -> RasterOptions {
    RasterOptions::default().with_dpi(60)
}

/// The fixed scene without its label, so no system font is needed.
fn unlabeled_logo() -> Canvas {
    let logo = laliax_logo();
    let mut canvas = Canvas::new(logo.width(), logo.height());
    for shape in logo.shapes() {
        canvas.add_shape(shape.clone());
    }
    canvas
}

#[test]
fn writes_one_png_with_two_to_one_aspect() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");

    save_png(&unlabeled_logo(), &path, &low_res()).unwrap();

    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());

    let image = image::load_from_memory(&bytes).unwrap();
    assert_eq!((image.width(), image.height()), (480, 240));
}

#[test]
fn full_figure_keeps_margins() {
    let options = low_res().with_crop(Crop::None);
    let png = render_png(&unlabeled_logo(), &options).unwrap();
    let image = image::load_from_memory(&png).unwrap();
    assert_eq!((image.width(), image.height()), (540, 300));
}

#[test]
fn rendering_is_deterministic() {
    let a = render_png(&unlabeled_logo(), &low_res()).unwrap();
    let b = render_png(&unlabeled_logo(), &low_res()).unwrap();
    assert_eq!(a, b);
}

/// Whether the host has a face the label can be set in.
fn host_has_label_font() -> bool {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let families = LABEL_FONT_FAMILIES
        .iter()
        .map(|name| match *name {
            "sans-serif" => fontdb::Family::SansSerif,
            other => fontdb::Family::Name(other),
        })
        .collect::<Vec<_>>();
    db.query(&fontdb::Query {
        families: &families,
        weight: fontdb::Weight(700),
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    })
    .is_some()
}

#[test]
fn labeled_logo_is_exactly_canvas_sized() {
    if !host_has_label_font() {
        eprintln!("skipping: no sans-serif face installed");
        return;
    }
    let png = render_png(&laliax_logo(), &low_res()).unwrap();
    let image = image::load_from_memory(&png).unwrap();
    assert_eq!((image.width(), image.height()), (60 * 8, 60 * 4));
}

#[test]
fn missing_font_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    let options = low_res().with_system_fonts(false);

    let err = save_png(&laliax_logo(), &path, &options).unwrap_err();
    assert!(matches!(err, Error::FontNotFound { weight: 700, .. }));
    assert!(!path.exists());
}

#[test]
fn scene_composition() {
    let logo = laliax_logo();
    assert_eq!(logo.count_of(ShapeKind::Triangle), 2);
    assert_eq!(logo.count_of(ShapeKind::Rectangle), 1);
    assert_eq!(logo.count_of(ShapeKind::Line), 1);
    assert!(logo.label().is_some());
}
