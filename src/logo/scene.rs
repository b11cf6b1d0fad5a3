//! The laliAx logo scene.

use super::canvas::Canvas;
use super::shape::{Color, FontWeight, Label, LineSegment, LineStyle, Point, Rectangle, Triangle};

/// Default output path of the logo binary.
pub const LOGO_OUTPUT_PATH: &str = "laliAx_best_logo.png";

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 400.0;

/// Brown of the Lalibela church.
pub const CHURCH_COLOR: Color = Color::rgb(0x8B, 0x45, 0x13);
/// Gold of the Axum obelisk.
pub const OBELISK_COLOR: Color = Color::rgb(0xFF, 0xD7, 0x00);
/// Blue accent of the connecting line.
pub const TECH_COLOR: Color = Color::rgb(0x1E, 0x90, 0xFF);

pub const LABEL_TEXT: &str = "laliAx et solution IGHC";

/// Build the logo: church on the left, obelisk on the right, a dashed line
/// joining them and the label above it.
pub fn laliax_logo() -> Canvas {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    // church roof and base
    canvas.add_shape(Triangle::new(
        [
            Point::new(100.0, 200.0),
            Point::new(140.0, 300.0),
            Point::new(180.0, 200.0),
        ],
        CHURCH_COLOR,
    ));
    canvas.add_shape(Rectangle::new(
        Point::new(130.0, 100.0),
        20.0,
        100.0,
        CHURCH_COLOR,
    ));

    canvas.add_shape(Triangle::new(
        [
            Point::new(600.0, 100.0),
            Point::new(610.0, 300.0),
            Point::new(620.0, 100.0),
        ],
        OBELISK_COLOR,
    ));

    canvas.add_shape(LineSegment::new(
        Point::new(200.0, 220.0),
        Point::new(580.0, 220.0),
        TECH_COLOR,
        3.0,
        LineStyle::Dashed,
    ));

    canvas.set_label(
        Label::new(Point::new(200.0, 250.0), LABEL_TEXT, 24.0)
            .with_weight(FontWeight::Bold)
            .with_color(Color::BLACK),
    );

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::shape::{Shape, ShapeKind};

    #[test]
    fn test_scene_composition() {
        let canvas = laliax_logo();
        assert_eq!(canvas.shape_count(), 4);
        assert_eq!(canvas.count_of(ShapeKind::Triangle), 2);
        assert_eq!(canvas.count_of(ShapeKind::Rectangle), 1);
        assert_eq!(canvas.count_of(ShapeKind::Line), 1);
        assert!(canvas.validate().is_ok());
    }

    #[test]
    fn test_scene_order() {
        let canvas = laliax_logo();
        let kinds = canvas.shapes().iter().map(Shape::kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                ShapeKind::Triangle,
                ShapeKind::Rectangle,
                ShapeKind::Triangle,
                ShapeKind::Line
            ]
        );
    }

    #[test]
    fn test_label() {
        let canvas = laliax_logo();
        let label = canvas.label().unwrap();
        assert_eq!(label.text, "laliAx et solution IGHC");
        assert_eq!(label.font_size_pt, 24.0);
        assert_eq!(label.weight, FontWeight::Bold);
        assert_eq!(label.color, Color::BLACK);
    }

    #[test]
    fn test_scene_is_deterministic() {
        let figure = Default::default();
        assert_eq!(
            laliax_logo().to_svg(&figure).unwrap(),
            laliax_logo().to_svg(&figure).unwrap()
        );
    }
}
