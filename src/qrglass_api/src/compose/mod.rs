//! Compositor: draws the styled card around a fetched QR bitmap and encodes
//! the result as a PNG.
//!
//! Drawing order: cleared surface, rounded background card, border stroke,
//! the QR bitmap itself, a gloss highlight over its top edge, and finally the
//! optional center badge.

pub mod font;
pub mod geometry;

use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use tracing::debug;

use crate::client::error::GenerateError;
use crate::constants::{
    BADGE_DIAMETER_FRACTION, BADGE_FONT_FRACTION, BADGE_SHADOW_BLUR, BORDER_INSET, BORDER_WIDTH,
    CARD_CORNER_RADIUS, GLOSS_CORNER_RADIUS, GLOSS_HEIGHT_FRACTION, GLOSS_INSET, GLOSS_TOP_ALPHA,
    QR_VERTICAL_LIFT,
};
use crate::request::{GenerationRequest, Theme};
use crate::types::BadgeText;

use geometry::Rect;

/// Final encoded artifact of one generation.
pub struct ComposedImage {
    size: u32,
    png: Vec<u8>,
}

impl ComposedImage {
    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }
    pub fn into_bytes(self) -> Vec<u8> {
        self.png
    }
}

/// Both themes use a light card so the QR stays scannable.
fn background_color(theme: Theme) -> Rgba<u8> {
    match theme {
        Theme::Light => Rgba([255, 255, 255, 255]),
        Theme::Dark => Rgba([251, 253, 255, 255]), // #fbfdff
    }
}

/// Per-theme glass border token, a translucent gray either way.
fn border_color(theme: Theme) -> Rgba<u8> {
    match theme {
        Theme::Light => Rgba([15, 23, 42, 20]),
        Theme::Dark => Rgba([148, 163, 184, 36]),
    }
}

/// Scratch drawing surface. One is allocated per composition and starts fully
/// transparent, so nothing can bleed through from a previous call.
struct Surface {
    image: RgbaImage,
}

impl Surface {
    fn new(size: u32) -> Self {
        Self {
            image: RgbaImage::new(size, size),
        }
    }

    fn encode_png(&self) -> Result<Vec<u8>, GenerateError> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(
                self.image.as_raw(),
                self.image.width(),
                self.image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(GenerateError::ImageEncode)?;
        Ok(png)
    }
}

/// Compose the styled card for one generation. The bitmap is the decoded QR
/// image from the remote service; the badge text was derived upstream and is
/// empty when no badge should be drawn.
pub fn compose(
    bitmap: &RgbaImage,
    badge: &BadgeText,
    request: &GenerationRequest,
) -> Result<ComposedImage, GenerateError> {
    let size = request.output_size();
    let qr_size = request.qr_size();

    let mut surface = Surface::new(size);
    let canvas = &mut surface.image;
    let full = Rect::new(0.0, 0.0, size as f32, size as f32);

    // background card
    geometry::fill_rounded_rect(
        canvas,
        full,
        CARD_CORNER_RADIUS,
        background_color(request.theme()),
    );

    // subtle border
    geometry::stroke_rounded_rect(
        canvas,
        full.inset(BORDER_INSET),
        CARD_CORNER_RADIUS,
        BORDER_WIDTH,
        border_color(request.theme()),
    );

    // base QR bitmap, centered and lifted above the vertical center
    let resized = imageops::resize(bitmap, qr_size, qr_size, FilterType::Triangle);
    let qr_x = ((size - qr_size) / 2) as i64;
    let qr_y = ((size - qr_size) / 2) as i64 - QR_VERTICAL_LIFT;
    imageops::overlay(canvas, &resized, qr_x, qr_y);

    // gloss highlight over the top of the QR
    let gloss_h = (qr_size as f32 * GLOSS_HEIGHT_FRACTION).round();
    let gloss_w = qr_size as i64 - 2 * GLOSS_INSET;
    if gloss_w > 0 && gloss_h >= 1.0 {
        geometry::fill_vertical_gradient_rounded(
            canvas,
            Rect::new(
                (qr_x + GLOSS_INSET) as f32,
                (qr_y + GLOSS_INSET) as f32,
                gloss_w as f32,
                gloss_h,
            ),
            GLOSS_CORNER_RADIUS,
            Rgba([255, 255, 255, GLOSS_TOP_ALPHA]),
            Rgba([255, 255, 255, 0]),
        );
    }

    // center badge
    if !badge.is_empty() {
        let diameter = (qr_size as f32 * BADGE_DIAMETER_FRACTION).round();
        let radius = diameter / 2.0;
        let cx = size as f32 / 2.0;
        let cy = size as f32 / 2.0 - QR_VERTICAL_LIFT as f32;

        geometry::fill_circle_shadow(canvas, cx, cy, radius, BADGE_SHADOW_BLUR, Rgba([2, 6, 23, 46]));
        geometry::fill_circle(canvas, cx, cy, radius, Rgba([255, 255, 255, 255]));

        // glyph height is half the badge diameter
        let scale = ((diameter * BADGE_FONT_FRACTION / font::GLYPH_SIZE as f32).floor() as u32).max(1);
        let text_w = font::text_width(badge.as_str(), scale) as f32;
        let text_h = (font::GLYPH_SIZE * scale) as f32;
        font::draw_text(
            canvas,
            badge.as_str(),
            (cx - text_w / 2.0).round() as i64,
            (cy - text_h / 2.0).round() as i64 + 1,
            scale,
            Rgba([17, 24, 39, 255]), // #111827
        );
    }

    debug!(size, qr_size, badge = badge.as_str(), "composed styled card");
    let png = surface.encode_png()?;
    Ok(ComposedImage { size, png })
}
