// SVG generation for the logo canvas
//
// Small document model that the canvas serializes into before rasterization.
// Only the element kinds the canvas emits are modelled.

use crate::common::xml::escape_xml;

/// SVG path commands
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    /// Move to absolute position
    MoveTo { x: f64, y: f64 },
    /// Line to absolute position
    LineTo { x: f64, y: f64 },
    /// Close path
    ClosePath,
}

impl PathCommand {
    /// Convert to SVG path string
    pub fn to_svg(&self) -> String {
        match self {
            Self::MoveTo { x, y } => format!("M {} {}", num(*x), num(*y)),
            Self::LineTo { x, y } => format!("L {} {}", num(*x), num(*y)),
            Self::ClosePath => "Z".to_string(),
        }
    }
}

/// SVG path element
#[derive(Debug, Clone)]
pub struct SvgPath {
    /// Path commands
    pub commands: Vec<PathCommand>,
    /// Stroke color (RGB hex)
    pub stroke: Option<String>,
    /// Stroke width
    pub stroke_width: f64,
    /// Fill color (RGB hex)
    pub fill: Option<String>,
    /// Stroke dasharray pattern
    pub stroke_dasharray: Option<Vec<f64>>,
    /// Stroke linecap style
    pub stroke_linecap: Option<&'static str>,
    /// Stroke linejoin style
    pub stroke_linejoin: Option<&'static str>,
}

impl Default for SvgPath {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            stroke: None,
            stroke_width: 1.0,
            fill: None,
            stroke_dasharray: None,
            stroke_linecap: None,
            stroke_linejoin: None,
        }
    }
}

impl SvgPath {
    /// Create new path with commands
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self {
            commands,
            ..Default::default()
        }
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        let mut commands = Vec::with_capacity(points.len() + 1);
        for (i, &(x, y)) in points.iter().enumerate() {
            if i == 0 {
                commands.push(PathCommand::MoveTo { x, y });
            } else {
                commands.push(PathCommand::LineTo { x, y });
            }
        }
        commands.push(PathCommand::ClosePath);
        Self::new(commands)
    }

    /// Set stroke color
    pub fn with_stroke(mut self, color: String) -> Self {
        self.stroke = Some(color);
        self
    }

    /// Set stroke width
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set fill color
    pub fn with_fill(mut self, color: String) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set stroke dasharray pattern
    pub fn with_stroke_dasharray(mut self, dasharray: Vec<f64>) -> Self {
        self.stroke_dasharray = Some(dasharray);
        self
    }

    /// Set stroke linecap style
    pub fn with_stroke_linecap(mut self, linecap: &'static str) -> Self {
        self.stroke_linecap = Some(linecap);
        self
    }

    /// Set stroke linejoin style
    pub fn with_stroke_linejoin(mut self, linejoin: &'static str) -> Self {
        self.stroke_linejoin = Some(linejoin);
        self
    }

    /// Generate SVG path string
    pub fn to_svg(&self) -> String {
        let path_data = self
            .commands
            .iter()
            .map(PathCommand::to_svg)
            .collect::<Vec<_>>()
            .join(" ");

        let mut attrs = format!(r#"d="{}""#, path_data);

        match self.fill {
            Some(ref fill) => attrs.push_str(&format!(r#" fill="{}""#, fill)),
            None => attrs.push_str(r#" fill="none""#),
        }

        match self.stroke {
            Some(ref stroke) => {
                attrs.push_str(&format!(
                    r#" stroke="{}" stroke-width="{}""#,
                    stroke,
                    num(self.stroke_width)
                ));
            },
            None => attrs.push_str(r#" stroke="none""#),
        }

        if let Some(ref dasharray) = self.stroke_dasharray {
            let pattern = dasharray.iter().map(|d| num(*d)).collect::<Vec<_>>();
            attrs.push_str(&format!(r#" stroke-dasharray="{}""#, pattern.join(" ")));
        }

        if let Some(linecap) = self.stroke_linecap {
            attrs.push_str(&format!(r#" stroke-linecap="{}""#, linecap));
        }

        if let Some(linejoin) = self.stroke_linejoin {
            attrs.push_str(&format!(r#" stroke-linejoin="{}""#, linejoin));
        }

        format!(r#"<path {} />"#, attrs)
    }
}

/// SVG rectangle element
#[derive(Debug, Clone)]
pub struct SvgRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

impl SvgRect {
    /// Generate SVG rect string
    pub fn to_svg(&self) -> String {
        let mut attrs = format!(
            r#"x="{}" y="{}" width="{}" height="{}""#,
            num(self.x),
            num(self.y),
            num(self.width),
            num(self.height)
        );

        match self.fill {
            Some(ref fill) => attrs.push_str(&format!(r#" fill="{}""#, fill)),
            None => attrs.push_str(r#" fill="none""#),
        }

        if let Some(ref stroke) = self.stroke {
            attrs.push_str(&format!(
                r#" stroke="{}" stroke-width="{}" stroke-linejoin="miter""#,
                stroke,
                num(self.stroke_width)
            ));
        }

        format!(r#"<rect {} />"#, attrs)
    }
}

/// SVG text element
#[derive(Debug, Clone)]
pub struct SvgText {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    /// CSS font-family list, most preferred first
    pub font_families: Vec<String>,
    pub fill: Option<String>,
    /// Font weight (400 = normal, 700 = bold)
    pub font_weight: Option<u16>,
}

impl SvgText {
    /// Create new text element
    pub fn new(x: f64, y: f64, text: String, font_size: f64) -> Self {
        Self {
            x,
            y,
            text,
            font_size,
            font_families: Vec::new(),
            fill: Some("#000000".to_string()),
            font_weight: None,
        }
    }

    /// Set font family list
    pub fn with_font_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.font_families = families.into_iter().map(Into::into).collect();
        self
    }

    /// Set fill color
    pub fn with_fill(mut self, fill: String) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set font weight
    pub fn with_font_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Generate SVG text string
    pub fn to_svg(&self) -> String {
        let mut style_parts = Vec::new();

        if !self.font_families.is_empty() {
            let families = self
                .font_families
                .iter()
                .map(|f| css_family(f))
                .collect::<Vec<_>>();
            style_parts.push(format!("font-family:{}", families.join(", ")));
        }

        style_parts.push(format!("font-size:{}px", num(self.font_size)));

        if let Some(weight) = self.font_weight {
            style_parts.push(format!("font-weight:{}", weight));
        }

        if let Some(ref fill) = self.fill {
            style_parts.push(format!("fill:{}", fill));
        }

        format!(
            r#"<text x="{}" y="{}" style="{}" xml:space="preserve">{}</text>"#,
            num(self.x),
            num(self.y),
            escape_xml(&style_parts.join("; ")),
            escape_xml(&self.text)
        )
    }
}

/// SVG element types
#[derive(Debug, Clone)]
pub enum SvgElement {
    Path(SvgPath),
    Rect(SvgRect),
    Text(SvgText),
}

impl SvgElement {
    /// Convert to SVG string
    pub fn to_svg(&self) -> String {
        match self {
            Self::Path(p) => p.to_svg(),
            Self::Rect(r) => r.to_svg(),
            Self::Text(t) => t.to_svg(),
        }
    }
}

/// SVG document builder
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    /// Document width
    pub width: f64,
    /// Document height
    pub height: f64,
    /// ViewBox (x, y, width, height)
    pub viewbox: Option<(f64, f64, f64, f64)>,
    /// SVG elements, in paint order
    pub elements: Vec<SvgElement>,
}

impl SvgBuilder {
    /// Create new SVG builder
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            viewbox: None,
            elements: Vec::new(),
        }
    }

    /// Set viewBox
    pub fn with_viewbox(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.viewbox = Some((x, y, width, height));
        self
    }

    /// Add a path
    pub fn add_path(&mut self, path: SvgPath) {
        self.elements.push(SvgElement::Path(path));
    }

    /// Add a rectangle
    pub fn add_rect(&mut self, rect: SvgRect) {
        self.elements.push(SvgElement::Rect(rect));
    }

    /// Add text
    pub fn add_text(&mut self, text: SvgText) {
        self.elements.push(SvgElement::Text(text));
    }

    /// Generate complete SVG document
    pub fn build(&self) -> String {
        let mut svg = String::with_capacity(256 + self.elements.len() * 128);

        svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        svg.push('\n');

        svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" "#);
        svg.push_str(&format!(
            r#"width="{}" height="{}""#,
            num(self.width),
            num(self.height)
        ));

        if let Some((x, y, w, h)) = self.viewbox {
            svg.push_str(&format!(
                r#" viewBox="{} {} {} {}""#,
                num(x),
                num(y),
                num(w),
                num(h)
            ));
        }

        svg.push_str(">\n");

        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(&element.to_svg());
            svg.push('\n');
        }

        svg.push_str("</svg>\n");

        svg
    }
}

/// Format a coordinate without float noise (`150`, `4.1667`).
fn num(v: f64) -> String {
    let rounded = (v * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Quote a family name unless it is a CSS generic family.
fn css_family(name: &str) -> String {
    match name {
        "serif" | "sans-serif" | "monospace" | "cursive" | "fantasy" => name.to_string(),
        _ => format!("'{}'", name.replace('\'', "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_path() {
        let path = SvgPath::polygon(&[(0.0, 0.0), (10.0, 20.0), (20.0, 0.0)])
            .with_fill("#8B4513".to_string());

        let svg = path.to_svg();
        assert!(svg.contains(r#"d="M 0 0 L 10 20 L 20 0 Z""#));
        assert!(svg.contains(r##"fill="#8B4513""##));
        assert!(svg.contains(r#"stroke="none""#));
    }

    #[test]
    fn test_dashed_path() {
        let path = SvgPath::new(vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo { x: 100.0, y: 0.0 },
        ])
        .with_stroke("#1E90FF".to_string())
        .with_stroke_width(2.5)
        .with_stroke_dasharray(vec![9.25, 4.0])
        .with_stroke_linecap("butt");

        let svg = path.to_svg();
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r#"stroke-width="2.5""#));
        assert!(svg.contains(r#"stroke-dasharray="9.25 4""#));
        assert!(svg.contains(r#"stroke-linecap="butt""#));
    }

    #[test]
    fn test_text_escaping_and_style() {
        let text = SvgText::new(1.0, 2.0, "a < b & c".to_string(), 12.0)
            .with_font_families(["DejaVu Sans", "sans-serif"])
            .with_font_weight(700);

        let svg = text.to_svg();
        assert!(svg.contains("a &lt; b &amp; c"));
        assert!(svg.contains("font-weight:700"));
        assert!(svg.contains("font-family:&apos;DejaVu Sans&apos;, sans-serif"));
    }

    #[test]
    fn test_svg_builder() {
        let mut builder = SvgBuilder::new(100.0, 50.0).with_viewbox(-5.0, -5.0, 110.0, 60.0);
        builder.add_rect(SvgRect {
            x: 10.0,
            y: 10.0,
            width: 80.0,
            height: 30.0,
            fill: Some("#FF0000".to_string()),
            stroke: None,
            stroke_width: 0.0,
        });

        let svg = builder.build();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"viewBox="-5 -5 110 60""#));
        assert!(svg.contains("<rect"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(150.0), "150");
        assert_eq!(num(25.0 / 6.0), "4.1667");
        assert_eq!(num(-0.00001), "0");
    }
}
