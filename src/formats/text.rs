use ab_glyph::{Font, FontRef, GlyphId, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage};

use super::Result;
use super::draw::blend;

/// Horizontal placement of a label relative to its anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Center,
    Right,
}

/// Antialiased label rendering with the font egui ships.
pub(crate) struct TextPainter {
    font: FontRef<'static>,
}

impl TextPainter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            font: FontRef::try_from_slice(epaint_default_fonts::UBUNTU_LIGHT)?,
        })
    }

    /// Advance width of `text` in pixels.
    pub fn width(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(previous) = previous {
                width += scaled.kern(previous, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }

    /// Draws `text` with its top edge at `y`.
    pub fn draw(
        &self,
        image: &mut RgbImage,
        (x, y): (i64, i64),
        align: Align,
        text: &str,
        size: f32,
        color: Rgb<u8>,
    ) {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let left = match align {
            Align::Left => x as f32,
            Align::Center => x as f32 - self.width(text, size) / 2.0,
            Align::Right => x as f32 - self.width(text, size),
        };
        let baseline = y as f32 + scaled.ascent();

        let mut caret = left;
        let mut previous: Option<GlyphId> = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(previous) = previous {
                caret += scaled.kern(previous, id);
            }
            let glyph = id.with_scale_and_position(size, point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (origin_x, origin_y) = (bounds.min.x as i64, bounds.min.y as i64);
                outlined.draw(|gx, gy, coverage| {
                    blend(
                        image,
                        origin_x + i64::from(gx),
                        origin_y + i64::from(gy),
                        color,
                        coverage,
                    );
                });
            }
        }
    }
}
