//! Unit conversion utilities.
//!
//! Lengths travel between three systems: points (stroke widths, font sizes),
//! inches (figure size, print resolution) and EMUs (PresentationML geometry).

pub const EMUS_PER_INCH: i64 = 914_400;
pub const POINTS_PER_INCH: f64 = 72.0;
pub const METERS_PER_INCH: f64 = 0.0254;

#[inline]
pub fn inch_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn pt_to_inch(pt: f64) -> f64 {
    pt / POINTS_PER_INCH
}

/// Font size in hundredths of a point, the unit of DrawingML `sz` attributes.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// Pixels per meter for a dots-per-inch resolution, as stored in PNG `pHYs`.
#[inline]
pub fn dpi_to_pixels_per_meter(dpi: u32) -> u32 {
    (dpi as f64 / METERS_PER_INCH).round() as u32
}
