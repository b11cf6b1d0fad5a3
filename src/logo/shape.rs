//! Drawing primitives for the logo canvas.
//!
//! Coordinates are canvas units with the origin at the bottom-left corner and
//! y pointing up. Stroke widths and font sizes are in points.

use crate::common::error::{Error, Result};

/// Edge width given to filled patches, in points.
pub const DEFAULT_EDGE_WIDTH_PT: f64 = 1.0;

/// A position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form used in SVG attributes, e.g. `#8B4513`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Stroke dash style of a line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    /// `--`
    Dashed,
}

impl LineStyle {
    /// Dash/gap lengths as multiples of the stroke width.
    ///
    /// Values are the classic plotting defaults, so a 3 pt dashed line gets
    /// 11.1 pt dashes separated by 4.8 pt gaps.
    pub fn dash_pattern(&self) -> Option<&'static [f64]> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some(&[3.7, 1.6]),
        }
    }
}

/// Font weight of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    pub fn value(&self) -> u16 {
        match self {
            Self::Normal => 400,
            Self::Bold => 700,
        }
    }
}

/// A filled triangle, drawn as a closed polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
    pub color: Color,
    pub edge_width_pt: f64,
}

impl Triangle {
    pub fn new(vertices: [Point; 3], color: Color) -> Self {
        Self {
            vertices,
            color,
            edge_width_pt: DEFAULT_EDGE_WIDTH_PT,
        }
    }
}

/// A filled axis-aligned rectangle anchored at its lower-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub edge_width_pt: f64,
}

impl Rectangle {
    pub fn new(origin: Point, width: f64, height: f64, color: Color) -> Self {
        Self {
            origin,
            width,
            height,
            color,
            edge_width_pt: DEFAULT_EDGE_WIDTH_PT,
        }
    }
}

/// A stroked line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
    pub color: Color,
    pub width_pt: f64,
    pub style: LineStyle,
}

impl LineSegment {
    pub fn new(start: Point, end: Point, color: Color, width_pt: f64, style: LineStyle) -> Self {
        Self {
            start,
            end,
            color,
            width_pt,
            style,
        }
    }
}

/// Discriminant of [`Shape`], handy for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Line,
}

/// Any drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Triangle(Triangle),
    Rectangle(Rectangle),
    Line(LineSegment),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Triangle(_) => ShapeKind::Triangle,
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Line(_) => ShapeKind::Line,
        }
    }

    /// Reject geometry that cannot be drawn.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Triangle(t) => {
                if !t.vertices.iter().all(Point::is_finite) {
                    return Err(Error::InvalidGeometry(
                        "triangle vertex is not finite".to_string(),
                    ));
                }
                check_stroke_width(t.edge_width_pt)
            },
            Self::Rectangle(r) => {
                if !r.origin.is_finite() {
                    return Err(Error::InvalidGeometry(
                        "rectangle origin is not finite".to_string(),
                    ));
                }
                if !(r.width.is_finite() && r.height.is_finite())
                    || r.width <= 0.0
                    || r.height <= 0.0
                {
                    return Err(Error::InvalidGeometry(format!(
                        "rectangle size must be positive, got {} x {}",
                        r.width, r.height
                    )));
                }
                check_stroke_width(r.edge_width_pt)
            },
            Self::Line(l) => {
                if !(l.start.is_finite() && l.end.is_finite()) {
                    return Err(Error::InvalidGeometry(
                        "line endpoint is not finite".to_string(),
                    ));
                }
                check_stroke_width(l.width_pt)
            },
        }
    }
}

fn check_stroke_width(width_pt: f64) -> Result<()> {
    if width_pt.is_finite() && width_pt >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidGeometry(format!(
            "stroke width must be a non-negative number, got {width_pt}"
        )))
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Self::Triangle(t)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Self::Rectangle(r)
    }
}

impl From<LineSegment> for Shape {
    fn from(l: LineSegment) -> Self {
        Self::Line(l)
    }
}

/// Text drawn on top of every shape, anchored at its baseline-left point.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: Point,
    pub text: String,
    pub font_size_pt: f64,
    pub weight: FontWeight,
    pub color: Color,
}

impl Label {
    pub fn new(position: Point, text: &str, font_size_pt: f64) -> Self {
        Self {
            position,
            text: text.to_string(),
            font_size_pt,
            weight: FontWeight::Normal,
            color: Color::BLACK,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.position.is_finite() {
            return Err(Error::InvalidGeometry(
                "label position is not finite".to_string(),
            ));
        }
        if !self.font_size_pt.is_finite() || self.font_size_pt <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "font size must be positive, got {}",
                self.font_size_pt
            )));
        }
        Ok(())
    }
}
