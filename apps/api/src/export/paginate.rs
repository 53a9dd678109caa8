//! Page geometry for the PDF export.
//!
//! Fixed physical format: A4 portrait (210×297 mm), 10 mm margins, 300 DPI
//! print resolution. The capture scale maps the natively rendered width onto
//! the printable content width so the raster matches the target resolution
//! regardless of the source render size.
//!
//! Pagination slices the single tall capture into per-page sub-images by
//! pixel-row ranges. Content exactly one usable page tall produces exactly
//! one page — the loop advances on strict remaining height, so no trailing
//! blank page is ever emitted.

use std::ops::Range;

pub const DPI: f32 = 300.0;
pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 10.0;

/// Printable width between the margins, in millimetres.
pub const CONTENT_WIDTH_MM: f32 = A4_WIDTH_MM - 2.0 * MARGIN_MM;
/// Usable height of one page between the margins, in millimetres.
pub const CONTENT_HEIGHT_MM: f32 = A4_HEIGHT_MM - 2.0 * MARGIN_MM;

const MM_PER_INCH: f32 = 25.4;

fn mm_to_px(mm: f32) -> u32 {
    (mm * DPI / MM_PER_INCH).floor() as u32
}

/// Target raster width in device pixels: full page width minus both margins,
/// each rounded down to whole pixels independently before subtracting.
pub fn content_width_px() -> u32 {
    mm_to_px(A4_WIDTH_MM) - 2 * mm_to_px(MARGIN_MM)
}

/// Scale factor applied to the capture so its width hits `content_width_px`,
/// adjusted by the display's device pixel ratio.
pub fn capture_scale(current_width_px: u32, device_pixel_ratio: f32) -> f32 {
    (content_width_px() as f32 / current_width_px as f32) * device_pixel_ratio
}

/// Pixel density of a raster that spans the printable width.
pub fn px_per_mm(raster_width: u32) -> f32 {
    raster_width as f32 / CONTENT_WIDTH_MM
}

/// Number of raster rows that fit in one page's usable height.
pub fn usable_rows(raster_width: u32) -> u32 {
    (CONTENT_HEIGHT_MM * px_per_mm(raster_width)) as u32
}

/// Physical height of a slice of `rows` raster rows, in millimetres.
pub fn rows_to_mm(rows: u32, raster_width: u32) -> f32 {
    rows as f32 / px_per_mm(raster_width)
}

/// Splits the capture into per-page row ranges.
///
/// The first page always exists (zero-height content yields one empty page
/// and nothing more). Further pages are only started while unplaced rows
/// remain, so a capture of exactly `k` usable heights yields exactly `k`
/// pages and `k` heights + ε yields `k + 1`.
pub fn page_row_ranges(raster_width: u32, raster_height: u32) -> Vec<Range<u32>> {
    let per_page = usable_rows(raster_width).max(1);
    let mut ranges = Vec::new();
    let mut start = 0u32;
    loop {
        let end = start.saturating_add(per_page).min(raster_height);
        ranges.push(start..end);
        start = end;
        if start >= raster_height {
            break;
        }
    }
    ranges
}
