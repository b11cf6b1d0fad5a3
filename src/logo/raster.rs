//! PNG export of a [`Canvas`].
//!
//! The canvas is serialized to SVG, rasterized with resvg onto an opaque
//! background, optionally cropped to its visible content and finally encoded
//! as PNG with the print resolution recorded in a `pHYs` chunk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage, imageops};
use log::{debug, info};
use resvg::tiny_skia::{self, Pixmap, Transform};
use resvg::usvg::{self, fontdb};

use super::canvas::{Canvas, Figure, LABEL_FONT_FAMILIES};
use super::shape::Color;
use crate::common::error::{Error, Result};
use crate::common::unit::dpi_to_pixels_per_meter;

/// How much of the figure ends up in the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crop {
    /// Keep the canvas plus any content drawn outside of it, grown by `pad_inches`.
    ///
    /// The default pad is 0 rather than the usual plotting default of 0.1 in,
    /// so the fixed logo comes out at exactly the canvas' 2:1 size.
    Tight { pad_inches: f64 },
    /// Keep the whole figure including its margin.
    None,
}

impl Default for Crop {
    fn default() -> Self {
        Crop::Tight { pad_inches: 0.0 }
    }
}

/// Options controlling PNG export.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Output resolution in dots per inch
    pub dpi: u32,
    /// Physical figure the canvas is laid out in
    pub figure: Figure,
    pub crop: Crop,
    /// Opaque color painted under the scene
    pub background: Color,
    /// Font files loaded in addition to the system fonts
    pub font_files: Vec<PathBuf>,
    /// Whether installed system fonts are searched for the label
    pub system_fonts: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            dpi: 300,
            figure: Figure::default(),
            crop: Crop::default(),
            background: Color::WHITE,
            font_files: Vec::new(),
            system_fonts: true,
        }
    }
}

impl RasterOptions {
    /// Builder method to set the output resolution
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Builder method to set the crop mode
    pub fn with_crop(mut self, crop: Crop) -> Self {
        self.crop = crop;
        self
    }

    /// Builder method to add an extra font file
    pub fn with_font_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_files.push(path.into());
        self
    }

    /// Builder method to enable or disable system font lookup
    pub fn with_system_fonts(mut self, enabled: bool) -> Self {
        self.system_fonts = enabled;
        self
    }
}

/// Render the canvas to an RGBA image, cropped per `options.crop`.
pub fn render_rgba(canvas: &Canvas, options: &RasterOptions) -> Result<RgbaImage> {
    if options.dpi == 0 {
        return Err(Error::Raster("dpi must be positive".to_string()));
    }

    let figure = &options.figure;
    let svg = canvas.to_svg(figure)?;
    let upi = figure.units_per_inch(canvas)?;
    let scale = options.dpi as f64 / upi;

    let fonts = load_fonts(&options.font_files, options.system_fonts)?;
    if let Some(label) = canvas.label() {
        ensure_font(&fonts, label.weight.value())?;
    }

    let tree_options = usvg::Options {
        fontdb: Arc::new(fonts),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(&svg, &tree_options)?;

    let dpi = options.dpi as f64;
    let full_w = ((figure.width_in + 2.0 * figure.margin_in) * dpi).round() as u32;
    let full_h = ((figure.height_in + 2.0 * figure.margin_in) * dpi).round() as u32;
    let mut pixmap = Pixmap::new(full_w, full_h).ok_or_else(|| {
        Error::Raster(format!("cannot allocate a {full_w}x{full_h} pixmap"))
    })?;

    let bg = options.background;
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    resvg::render(
        &tree,
        Transform::from_scale(scale as f32, scale as f32),
        &mut pixmap.as_mut(),
    );
    debug!("raster: rendered {full_w}x{full_h} at {} dpi", options.dpi);

    // Opaque background, so premultiplied and straight alpha coincide.
    let image = RgbaImage::from_raw(full_w, full_h, pixmap.take())
        .ok_or_else(|| Error::Raster("pixmap size mismatch".to_string()))?;

    match options.crop {
        Crop::None => Ok(image),
        Crop::Tight { pad_inches } => {
            let margin_px = (figure.margin_in * dpi).round() as u32;
            let canvas_rect = PixelRect {
                left: margin_px,
                top: margin_px,
                right: margin_px + (figure.width_in * dpi).round() as u32,
                bottom: margin_px + (figure.height_in * dpi).round() as u32,
            };
            let pad_px = (pad_inches.max(0.0) * dpi).round() as u32;
            let rect = tight_bounds(&image, bg, canvas_rect, pad_px);
            debug!(
                "raster: tight crop to {}x{} at ({}, {})",
                rect.width(),
                rect.height(),
                rect.left,
                rect.top
            );
            Ok(
                imageops::crop_imm(&image, rect.left, rect.top, rect.width(), rect.height())
                    .to_image(),
            )
        },
    }
}

/// Render the canvas and encode it as PNG.
pub fn render_png(canvas: &Canvas, options: &RasterOptions) -> Result<Vec<u8>> {
    let image = render_rgba(canvas, options)?;
    encode_png(&image, options.dpi)
}

/// Render the canvas and write the PNG to `path` in a single write.
pub fn save_png(canvas: &Canvas, path: impl AsRef<Path>, options: &RasterOptions) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_png(canvas, options)?;
    std::fs::write(path, &bytes)?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Encode RGBA pixels as PNG and stamp the resolution.
pub fn encode_png(image: &RgbaImage, dpi: u32) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    insert_phys_chunk(&mut png, dpi)?;
    Ok(png)
}

/// Signature (8) plus the IHDR chunk (4 length + 4 type + 13 data + 4 crc).
const IHDR_END: usize = 33;

/// Insert a `pHYs` chunk right after IHDR.
fn insert_phys_chunk(png: &mut Vec<u8>, dpi: u32) -> Result<()> {
    if png.len() < IHDR_END || &png[12..16] != b"IHDR" {
        return Err(Error::Raster("encoded PNG has no leading IHDR".to_string()));
    }

    let ppm = dpi_to_pixels_per_meter(dpi);
    let mut body = Vec::with_capacity(13);
    body.extend_from_slice(b"pHYs");
    body.extend_from_slice(&ppm.to_be_bytes());
    body.extend_from_slice(&ppm.to_be_bytes());
    body.push(1); // unit: meter

    let mut chunk = Vec::with_capacity(21);
    chunk.extend_from_slice(&9u32.to_be_bytes());
    chunk.extend_from_slice(&body);
    let crc = crc_fast::checksum(crc_fast::CrcAlgorithm::Crc32IsoHdlc, &body) as u32;
    chunk.extend_from_slice(&crc.to_be_bytes());

    let tail = png.split_off(IHDR_END);
    png.extend_from_slice(&chunk);
    png.extend_from_slice(&tail);
    Ok(())
}

fn load_fonts(extra: &[PathBuf], system: bool) -> Result<fontdb::Database> {
    let mut db = fontdb::Database::new();
    if system {
        db.load_system_fonts();
    }
    for path in extra {
        db.load_font_file(path)?;
        debug!("raster: loaded font file {}", path.display());
    }
    debug!("raster: {} font faces available", db.len());
    Ok(db)
}

/// Fail unless some face from the label family list exists at `weight`.
fn ensure_font(db: &fontdb::Database, weight: u16) -> Result<()> {
    let families = LABEL_FONT_FAMILIES
        .iter()
        .map(|name| match *name {
            "sans-serif" => fontdb::Family::SansSerif,
            other => fontdb::Family::Name(other),
        })
        .collect::<Vec<_>>();
    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight(weight),
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };

    match db.query(&query) {
        Some(_) => Ok(()),
        None => Err(Error::FontNotFound {
            family: LABEL_FONT_FAMILIES.join(", "),
            weight,
        }),
    }
}

/// Half-open pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelRect {
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl PixelRect {
    fn width(&self) -> u32 {
        self.right - self.left
    }

    fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Union of `base` and all pixels differing from `background`, grown by
/// `pad` and clamped to the image.
fn tight_bounds(image: &RgbaImage, background: Color, base: PixelRect, pad: u32) -> PixelRect {
    let mut rect = base;
    for (x, y, px) in image.enumerate_pixels() {
        let [r, g, b, _] = px.0;
        if (r, g, b) != (background.r, background.g, background.b) {
            rect.left = rect.left.min(x);
            rect.top = rect.top.min(y);
            rect.right = rect.right.max(x + 1);
            rect.bottom = rect.bottom.max(y + 1);
        }
    }

    PixelRect {
        left: rect.left.saturating_sub(pad),
        top: rect.top.saturating_sub(pad),
        right: rect.right.saturating_add(pad).min(image.width()),
        bottom: rect.bottom.saturating_add(pad).min(image.height()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::shape::{Point, Rectangle};
    use image::Rgba;

    fn shapes_only() -> Canvas {
        let mut canvas = Canvas::new(800.0, 400.0);
        canvas.add_shape(Rectangle::new(
            Point::new(130.0, 100.0),
            20.0,
            100.0,
            Color::rgb(0x8B, 0x45, 0x13),
        ));
        canvas
    }

    fn small_options() -> RasterOptions {
        RasterOptions::default().with_dpi(30)
    }

    #[test]
    fn test_tight_crop_is_canvas_sized() {
        let image = render_rgba(&shapes_only(), &small_options()).unwrap();
        assert_eq!((image.width(), image.height()), (240, 120));
    }

    #[test]
    fn test_no_crop_keeps_margin() {
        let options = small_options().with_crop(Crop::None);
        let image = render_rgba(&shapes_only(), &options).unwrap();
        assert_eq!((image.width(), image.height()), (270, 150));
    }

    #[test]
    fn test_shape_pixels_are_painted() {
        let image = render_rgba(&shapes_only(), &small_options()).unwrap();
        // rectangle center (140, 150) in canvas units, y flipped, 0.3 px per unit
        let px = image.get_pixel(42, 75);
        assert_eq!(px, &Rgba([0x8B, 0x45, 0x13, 255]));
        assert_eq!(image.get_pixel(5, 5), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_tight_crop_includes_overflow() {
        let mut canvas = shapes_only();
        // pokes 10 units past the right edge
        canvas.add_shape(Rectangle::new(
            Point::new(780.0, 100.0),
            30.0,
            50.0,
            Color::BLACK,
        ));
        let image = render_rgba(&canvas, &small_options()).unwrap();
        assert!(image.width() > 240);
        assert_eq!(image.height(), 120);
    }

    #[test]
    fn test_tight_bounds_pad_is_clamped() {
        let image = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        let base = PixelRect {
            left: 2,
            top: 2,
            right: 8,
            bottom: 8,
        };
        let rect = tight_bounds(&image, Color::WHITE, base, 5);
        assert_eq!(
            rect,
            PixelRect {
                left: 0,
                top: 0,
                right: 10,
                bottom: 10
            }
        );
    }

    #[test]
    fn test_phys_chunk() {
        let image = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        let png = encode_png(&image, 300).unwrap();
        assert_eq!(&png[37..41], b"pHYs");
        assert_eq!(&png[41..45], &11_811u32.to_be_bytes());
        assert_eq!(png[49], 1);

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 1));
    }

    #[test]
    fn test_zero_dpi_rejected() {
        let options = RasterOptions::default().with_dpi(0);
        assert!(matches!(
            render_rgba(&shapes_only(), &options),
            Err(Error::Raster(_))
        ));
    }

    #[test]
    fn test_label_without_any_font_fails_before_rendering() {
        let options = small_options().with_system_fonts(false);
        let err = render_png(&crate::logo::laliax_logo(), &options).unwrap_err();
        assert!(matches!(err, Error::FontNotFound { weight: 700, .. }));
    }

    #[test]
    fn test_font_check_skipped_without_label() {
        let options = small_options().with_system_fonts(false);
        let image = render_rgba(&shapes_only(), &options).unwrap();
        assert_eq!((image.width(), image.height()), (240, 120));
    }

    #[test]
    fn test_missing_font_file_is_io_error() {
        let options = small_options().with_font_file("/nonexistent/font.ttf");
        assert!(matches!(
            render_rgba(&shapes_only(), &options),
            Err(Error::Io(_))
        ));
    }
}
