//! The logo canvas: bounded drawing surface plus its fixed render order.

use super::shape::{Label, Rectangle, Shape, ShapeKind, Triangle};
use super::svg::{PathCommand, SvgBuilder, SvgPath, SvgRect, SvgText};
use crate::common::error::{Error, Result};
use crate::common::unit::pt_to_inch;
use log::debug;

/// Font families tried for labels, most preferred first.
pub const LABEL_FONT_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Bitstream Vera Sans",
    "Verdana",
    "Arial",
    "Helvetica",
    "sans-serif",
];

/// Physical size of the figure the canvas is drawn into.
///
/// The canvas fills the figure's inner area; `margin_in` of empty space is
/// kept on every side so that content overflowing the canvas still lands on
/// the figure and can be picked up by a tight crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    /// Width of the canvas area in inches
    pub width_in: f64,
    /// Height of the canvas area in inches
    pub height_in: f64,
    /// Blank border around the canvas area in inches
    pub margin_in: f64,
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            width_in: 8.0,
            height_in: 4.0,
            margin_in: 0.5,
        }
    }
}

impl Figure {
    /// Canvas units per inch along both axes.
    ///
    /// Fails when the figure does not have the canvas' aspect ratio, since
    /// strokes and text would otherwise be distorted.
    pub fn units_per_inch(&self, canvas: &Canvas) -> Result<f64> {
        if !(self.width_in > 0.0 && self.height_in > 0.0 && self.margin_in >= 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "figure must have a positive size, got {} x {} in",
                self.width_in, self.height_in
            )));
        }

        let sx = canvas.width() / self.width_in;
        let sy = canvas.height() / self.height_in;
        if (sx - sy).abs() > sx * 1e-9 {
            return Err(Error::InvalidGeometry(format!(
                "figure {} x {} in does not match canvas aspect ratio {} x {}",
                self.width_in,
                self.height_in,
                canvas.width(),
                canvas.height()
            )));
        }
        Ok(sx)
    }
}

/// A bounded 2D drawing surface.
///
/// Shapes are painted in the order they were added and the label, if any, is
/// painted last.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f64,
    height: f64,
    shapes: Vec<Shape>,
    label: Option<Label>,
}

impl Canvas {
    /// Create a blank canvas with the given bounds in canvas units.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
            label: None,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Append a shape on top of the ones already added.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        debug!("canvas: adding {:?} #{}", shape.kind(), self.shapes.len() + 1);
        self.shapes.push(shape);
    }

    /// Set the label. A canvas carries at most one; setting it again replaces it.
    pub fn set_label(&mut self, label: Label) {
        debug!("canvas: label {:?}", label.text);
        self.label = Some(label);
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Number of shapes of one kind.
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind() == kind).count()
    }

    /// Check every shape and the label for drawable geometry.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::InvalidGeometry(format!(
                "canvas must have a positive size, got {} x {}",
                self.width, self.height
            )));
        }
        for shape in &self.shapes {
            shape.validate()?;
        }
        if let Some(ref label) = self.label {
            label.validate()?;
        }
        Ok(())
    }

    /// Serialize the scene to an SVG document.
    ///
    /// The document is laid out in canvas units with y flipped to screen
    /// orientation. Its viewBox covers the whole figure, so the canvas itself
    /// spans `0..width` x `0..height` and the margin lies at negative
    /// coordinates and beyond the canvas size.
    pub fn to_svg(&self, figure: &Figure) -> Result<String> {
        self.validate()?;
        let upi = figure.units_per_inch(self)?;
        let pt = |points: f64| pt_to_inch(points) * upi;
        let margin = figure.margin_in * upi;

        let full_w = self.width + 2.0 * margin;
        let full_h = self.height + 2.0 * margin;
        let mut builder =
            SvgBuilder::new(full_w, full_h).with_viewbox(-margin, -margin, full_w, full_h);

        for shape in &self.shapes {
            match shape {
                Shape::Triangle(Triangle {
                    vertices,
                    color,
                    edge_width_pt,
                }) => {
                    let points = vertices
                        .iter()
                        .map(|p| (p.x, self.flip_y(p.y)))
                        .collect::<Vec<_>>();
                    let mut path = SvgPath::polygon(&points).with_fill(color.to_hex());
                    if *edge_width_pt > 0.0 {
                        path = path
                            .with_stroke(color.to_hex())
                            .with_stroke_width(pt(*edge_width_pt))
                            .with_stroke_linejoin("miter");
                    }
                    builder.add_path(path);
                },
                Shape::Rectangle(Rectangle {
                    origin,
                    width,
                    height,
                    color,
                    edge_width_pt,
                }) => {
                    let stroke = (*edge_width_pt > 0.0).then(|| color.to_hex());
                    builder.add_rect(SvgRect {
                        x: origin.x,
                        y: self.flip_y(origin.y + height),
                        width: *width,
                        height: *height,
                        fill: Some(color.to_hex()),
                        stroke,
                        stroke_width: pt(*edge_width_pt),
                    });
                },
                Shape::Line(line) => {
                    let stroke_width = pt(line.width_pt);
                    let mut path = SvgPath::new(vec![
                        PathCommand::MoveTo {
                            x: line.start.x,
                            y: self.flip_y(line.start.y),
                        },
                        PathCommand::LineTo {
                            x: line.end.x,
                            y: self.flip_y(line.end.y),
                        },
                    ])
                    .with_stroke(line.color.to_hex())
                    .with_stroke_width(stroke_width)
                    .with_stroke_linecap("butt");

                    if let Some(pattern) = line.style.dash_pattern() {
                        path = path.with_stroke_dasharray(
                            pattern.iter().map(|m| m * stroke_width).collect(),
                        );
                    }
                    builder.add_path(path);
                },
            }
        }

        if let Some(ref label) = self.label {
            builder.add_text(
                SvgText::new(
                    label.position.x,
                    self.flip_y(label.position.y),
                    label.text.clone(),
                    pt(label.font_size_pt),
                )
                .with_font_families(LABEL_FONT_FAMILIES.iter().copied())
                .with_font_weight(label.weight.value())
                .with_fill(label.color.to_hex()),
            );
        }

        Ok(builder.build())
    }

    #[inline]
    fn flip_y(&self, y: f64) -> f64 {
        self.height - y
    }
}
