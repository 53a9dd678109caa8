//! Document capture — turns a `DocumentTree` into one tall RGB bitmap.
//!
//! The tree is laid out at a native width (A4 at 96 DPI, the width the UI
//! renders at) multiplied by the capture scale, so the resulting raster
//! lands exactly on the printable content width at print resolution. White
//! background, black text, greedy word-wrap.

use ab_glyph::{point, Font as _, FontVec, PxScale, ScaleFont as _};
use anyhow::{anyhow, Context, Result};
use image::{Rgb, RgbImage};

use crate::render::{Block, DocumentTree};

/// Width the document tree is natively laid out at before the capture scale
/// is applied (A4 width at 96 DPI).
pub const NATIVE_RENDER_WIDTH_PX: u32 = 794;

// Type sizes and spacing at scale 1.0, in pixels.
const PADDING: f32 = 32.0;
const H1_SIZE: f32 = 28.0;
const H2_SIZE: f32 = 20.0;
const H3_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 14.0;
const LINE_SPACING: f32 = 1.45;
const SECTION_GAP: f32 = 14.0;
const BLOCK_GAP: f32 = 6.0;
const RULE_GAP: f32 = 10.0;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

pub struct Rasterizer {
    font: FontVec,
}

struct Line {
    text: String,
    size: f32,
    baseline: f32,
}

struct Layout {
    lines: Vec<Line>,
    rules: Vec<f32>,
    height: f32,
}

impl Rasterizer {
    pub fn from_path(path: &str) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read font file '{path}'"))?;
        Self::from_font_bytes(bytes)
    }

    pub fn from_font_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(bytes).map_err(|_| anyhow!("Invalid font data"))?;
        Ok(Self { font })
    }

    /// Rasterizes the whole tree into a single bitmap at the given capture
    /// scale. The image height follows the content; pagination happens later.
    pub fn rasterize(&self, tree: &DocumentTree, scale: f32) -> RgbImage {
        let scale = scale.max(0.01);
        let width = (NATIVE_RENDER_WIDTH_PX as f32 * scale).round().max(1.0) as u32;
        let layout = self.layout(tree, scale, width);

        let height = (layout.height.ceil() as u32).max(1);
        let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

        for line in &layout.lines {
            self.draw_line(&mut img, line, PADDING * scale);
        }
        for &y in &layout.rules {
            let row = y as u32;
            if row < height {
                for x in (PADDING * scale) as u32..width.saturating_sub((PADDING * scale) as u32) {
                    img.put_pixel(x, row, Rgb([120, 120, 120]));
                }
            }
        }
        img
    }

    fn layout(&self, tree: &DocumentTree, scale: f32, width: u32) -> Layout {
        let pad = PADDING * scale;
        let wrap_width = (width as f32 - 2.0 * pad).max(1.0);
        let mut lines = Vec::new();
        let mut rules = Vec::new();
        let mut cursor = pad;

        for block in &tree.blocks {
            match block {
                Block::Heading { level, text } => {
                    let size = match level {
                        1 => H1_SIZE,
                        2 => H2_SIZE,
                        _ => H3_SIZE,
                    } * scale;
                    if *level <= 2 {
                        cursor += SECTION_GAP * scale;
                    }
                    self.push_wrapped(text, size, wrap_width, &mut cursor, &mut lines);
                }
                Block::Paragraph { text } => {
                    self.push_wrapped(text, BODY_SIZE * scale, wrap_width, &mut cursor, &mut lines);
                }
                Block::BulletList { items } => {
                    for item in items {
                        self.push_wrapped(
                            &format!("• {item}"),
                            BODY_SIZE * scale,
                            wrap_width,
                            &mut cursor,
                            &mut lines,
                        );
                    }
                }
                Block::TagRow { tags } => {
                    self.push_wrapped(
                        &tags.join("  ·  "),
                        BODY_SIZE * scale,
                        wrap_width,
                        &mut cursor,
                        &mut lines,
                    );
                }
                Block::ContactRow { entries } => {
                    self.push_wrapped(
                        &entries.join("  |  "),
                        BODY_SIZE * scale,
                        wrap_width,
                        &mut cursor,
                        &mut lines,
                    );
                }
                Block::Divider => {
                    cursor += RULE_GAP * scale;
                    rules.push(cursor);
                    cursor += RULE_GAP * scale;
                }
            }
            cursor += BLOCK_GAP * scale;
        }

        Layout {
            lines,
            rules,
            height: cursor + pad,
        }
    }

    fn push_wrapped(
        &self,
        text: &str,
        size: f32,
        wrap_width: f32,
        cursor: &mut f32,
        lines: &mut Vec<Line>,
    ) {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let ascent = scaled.ascent();
        let line_height = size * LINE_SPACING;
        for wrapped in wrap_text(text, wrap_width, |s| self.measure(s, size)) {
            lines.push(Line {
                text: wrapped,
                size,
                baseline: *cursor + ascent,
            });
            *cursor += line_height;
        }
    }

    /// Rendered width of a string in pixels at the given size.
    fn measure(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut prev = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }

    fn draw_line(&self, img: &mut RgbImage, line: &Line, left: f32) {
        let scaled = self.font.as_scaled(PxScale::from(line.size));
        let mut caret = left;
        let mut prev = None;
        for c in line.text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(PxScale::from(line.size), point(caret, line.baseline));
            caret += scaled.h_advance(id);
            prev = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    let x = bounds.min.x as i64 + gx as i64;
                    let y = bounds.min.y as i64 + gy as i64;
                    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
                        return;
                    }
                    let pixel = img.get_pixel_mut(x as u32, y as u32);
                    let shade = (255.0 * (1.0 - coverage.clamp(0.0, 1.0))) as u8;
                    // Text over white: keep the darker sample.
                    for channel in pixel.0.iter_mut() {
                        *channel = (*channel).min(shade);
                    }
                });
            }
        }
    }
}

/// Greedy word-wrap: fill each line while the next word still fits. A single
/// word wider than the wrap width gets its own (overflowing) line rather
/// than being split.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in words {
        if current.is_empty() {
            current = word.to_string();
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    lines.push(current);
    lines
}
