//! Document exporter — captures the rendered template as a raster and
//! assembles a paginated A4 PDF from it.
//!
//! Flow: render tree → rasterize once (one tall bitmap) → slice into
//! per-page sub-images by pixel-row ranges → JPEG-encode each slice → embed
//! one image per page at the fixed margins. Rasterization and encoding are
//! CPU-bound; the handler runs the whole export inside `spawn_blocking`.

pub mod paginate;
pub mod raster;

use image::RgbImage;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::render::{render, TemplateVariant};
use raster::Rasterizer;

/// Constant name the exported document is saved under.
pub const OUTPUT_FILENAME: &str = "github-resume.pdf";

/// The service renders headlessly; there is no display scaling to undo.
const DEVICE_PIXEL_RATIO: f32 = 1.0;

const JPEG_QUALITY: u8 = 90;

pub struct ExportedDocument {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

/// Renders, captures and paginates the record into a downloadable PDF.
pub fn export_document(
    record: &ResumeRecord,
    variant: TemplateVariant,
    rasterizer: &Rasterizer,
) -> Result<ExportedDocument, AppError> {
    let tree = render(record, variant);
    let scale = paginate::capture_scale(raster::NATIVE_RENDER_WIDTH_PX, DEVICE_PIXEL_RATIO);
    let capture = rasterizer.rasterize(&tree, scale);
    let bytes = assemble_pdf(&capture)?;
    Ok(ExportedDocument {
        filename: OUTPUT_FILENAME,
        bytes,
    })
}

/// Slices the capture into pages and assembles the PDF.
///
/// Each page embeds only its own slice, placed at the top margin. The slice
/// raster is at print resolution already, so the default 300 DPI placement
/// reproduces the physical content width.
pub fn assemble_pdf(capture: &RgbImage) -> Result<Vec<u8>, AppError> {
    let (width, height) = capture.dimensions();
    let ranges = paginate::page_row_ranges(width, height);

    let doc = PdfDocument::empty("GitHub Resume");

    for (i, range) in ranges.iter().enumerate() {
        let (page, layer) = doc.add_page(
            Mm(paginate::A4_WIDTH_MM.into()),
            Mm(paginate::A4_HEIGHT_MM.into()),
            format!("Page {}", i + 1),
        );
        let rows = range.end - range.start;
        if rows == 0 {
            // Zero-height capture: a single blank page, nothing to embed.
            continue;
        }

        let slice = image::imageops::crop_imm(capture, 0, range.start, width, rows).to_image();
        let jpeg = encode_jpeg(&slice)?;
        let decoder = image::codecs::jpeg::JpegDecoder::new(std::io::Cursor::new(&jpeg))
            .map_err(|e| AppError::Export(format!("JPEG decode for embedding failed: {e}")))?;
        let pdf_image = Image::try_from(decoder)
            .map_err(|e| AppError::Export(format!("image embedding failed: {e}")))?;

        let slice_height_mm = paginate::rows_to_mm(rows, width);
        pdf_image.add_to_layer(
            doc.get_page(page).get_layer(layer),
            ImageTransform {
                translate_x: Some(Mm(paginate::MARGIN_MM.into())),
                // PDF origin is bottom-left; anchor the slice at the top margin.
                translate_y: Some(Mm(
                    (paginate::A4_HEIGHT_MM - paginate::MARGIN_MM - slice_height_mm).into(),
                )),
                ..Default::default()
            },
        );
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::Export(format!("PDF serialization failed: {e}")))
}

/// Compresses one page slice.
fn encode_jpeg(slice: &RgbImage) -> Result<Vec<u8>, AppError> {
    let mut jpeg = Vec::new();
    let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    encoder
        .encode_image(slice)
        .map_err(|e| AppError::Export(format!("JPEG encoding failed: {e}")))?;
    Ok(jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    // 190 px wide → 1 px per mm → 277 usable rows per page.
    const W: u32 = 190;
    const USABLE: u32 = 277;

    fn capture(height: u32) -> RgbImage {
        RgbImage::from_pixel(W, height, Rgb([200, 220, 240]))
    }

    // One "/Page" name per page object; "/Pages", "/PageLayout" and
    // "/PageMode" continue with an alphanumeric and are skipped.
    fn page_count(pdf: &[u8]) -> usize {
        let needle = b"/Page";
        let mut count = 0;
        let mut i = 0;
        while i + needle.len() <= pdf.len() {
            if &pdf[i..i + needle.len()] == needle {
                let next = pdf.get(i + needle.len()).copied();
                if !next.is_some_and(|b| b.is_ascii_alphanumeric()) {
                    count += 1;
                }
                i += needle.len();
            } else {
                i += 1;
            }
        }
        count
    }

    #[test]
    fn test_single_page_capture_yields_one_page_pdf() {
        let pdf = assemble_pdf(&capture(USABLE)).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert_eq!(page_count(&pdf), 1, "exactly one page, no trailing blank");
    }

    #[test]
    fn test_epsilon_overflow_adds_exactly_one_page() {
        let pdf = assemble_pdf(&capture(USABLE + 1)).unwrap();
        assert_eq!(page_count(&pdf), 2);
    }

    #[test]
    fn test_exact_multiple_yields_exactly_k_pages() {
        let pdf = assemble_pdf(&capture(3 * USABLE)).unwrap();
        assert_eq!(page_count(&pdf), 3);
    }

    #[test]
    fn test_zero_height_capture_yields_single_blank_page() {
        let pdf = assemble_pdf(&capture(0)).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert_eq!(page_count(&pdf), 1);
    }

    #[test]
    fn test_jpeg_encoding_round_trips_dimensions() {
        let jpeg = encode_jpeg(&capture(10)).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.width(), W);
        assert_eq!(decoded.height(), 10);
    }
}
