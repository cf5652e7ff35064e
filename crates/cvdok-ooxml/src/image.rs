//! Embedded image support
//!
//! Images in OOXML are placed through `<w:drawing>` elements whose
//! dimensions are given in EMUs (English Metric Units):
//! - 914400 EMUs = 1 inch
//! - 9525 EMUs = 1 pixel (at 96 DPI)
//!
//! The logo is sized to the sidebar width; its height is derived from the
//! PNG's pixel dimensions so the aspect ratio is preserved.

/// EMUs per inch (914400)
pub const EMU_PER_INCH: i64 = 914400;

/// EMUs per pixel at 96 DPI (9525)
pub const EMU_PER_PIXEL: i64 = 9525;

/// Convert inches to EMUs
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH as f64).round() as i64
}

/// Convert pixels to EMUs at 96 DPI
pub fn pixels_to_emu(pixels: i64) -> i64 {
    pixels * EMU_PER_PIXEL
}

/// Read the pixel dimensions from a PNG header
///
/// Returns `None` for anything that is not a well-formed PNG. The IHDR
/// chunk is required to be first, so width and height sit at fixed offsets.
pub fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    if bytes.len() < 24 || bytes[..8] != SIGNATURE || &bytes[12..16] != b"IHDR" {
        return None;
    }

    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);

    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

/// Compute the display extent for an image scaled to a target width
///
/// If the bytes are not a readable PNG, falls back to a square extent at
/// the target width.
pub fn scaled_extent(bytes: &[u8], target_width_emu: i64) -> (i64, i64) {
    match png_dimensions(bytes) {
        Some((w, h)) => {
            let height = (target_width_emu as f64 * h as f64 / w as f64).round() as i64;
            (target_width_emu, height)
        }
        None => (target_width_emu, target_width_emu),
    }
}
