//! Raster drawing primitives for the card composition: rounded rectangles,
//! vertical gradients, circles with a soft shadow, and src-over blending.

use image::{Rgba, RgbaImage};

#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn inset(&self, d: f32) -> Rect {
        Rect::new(
            self.x + d,
            self.y + d,
            (self.w - 2.0 * d).max(0.0),
            (self.h - 2.0 * d).max(0.0),
        )
    }

    fn clamp_radius(&self, radius: f32) -> f32 {
        radius.min(self.w / 2.0).min(self.h / 2.0).max(0.0)
    }

    /// Whether the point lies inside this rectangle with rounded corners of
    /// the given radius. The radius is clamped to half the short edge.
    pub fn contains_rounded(&self, px: f32, py: f32, radius: f32) -> bool {
        if px < self.x || py < self.y || px >= self.x + self.w || py >= self.y + self.h {
            return false;
        }
        let r = self.clamp_radius(radius);
        if r <= 0.0 {
            return true;
        }
        let cx = if px < self.x + r {
            self.x + r
        } else if px > self.x + self.w - r {
            self.x + self.w - r
        } else {
            return true;
        };
        let cy = if py < self.y + r {
            self.y + r
        } else if py > self.y + self.h - r {
            self.y + self.h - r
        } else {
            return true;
        };
        let (dx, dy) = (px - cx, py - cy);
        dx * dx + dy * dy <= r * r
    }
}

/// Source-over blend. Destinations under translucent paint are always opaque
/// card pixels here, so the simplified non-premultiplied form is enough.
fn over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    if src.0[3] == 255 {
        return src;
    }
    if src.0[3] == 0 {
        return dst;
    }
    let sa = src.0[3] as u32;
    let da = dst.0[3] as u32;
    let inv = 255 - sa;
    Rgba([
        ((src.0[0] as u32 * sa + dst.0[0] as u32 * inv) / 255) as u8,
        ((src.0[1] as u32 * sa + dst.0[1] as u32 * inv) / 255) as u8,
        ((src.0[2] as u32 * sa + dst.0[2] as u32 * inv) / 255) as u8,
        (sa + da * inv / 255).min(255) as u8,
    ])
}

pub fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let dst = img.get_pixel_mut(x as u32, y as u32);
    *dst = over(color, *dst);
}

/// Pixel bounds of `rect` clipped to the image, as half-open ranges.
fn pixel_bounds(img: &RgbaImage, rect: &Rect) -> (i64, i64, i64, i64) {
    let x0 = (rect.x.floor() as i64).max(0);
    let y0 = (rect.y.floor() as i64).max(0);
    let x1 = ((rect.x + rect.w).ceil() as i64).min(img.width() as i64);
    let y1 = ((rect.y + rect.h).ceil() as i64).min(img.height() as i64);
    (x0, y0, x1, y1)
}

pub fn fill_rounded_rect(img: &mut RgbaImage, rect: Rect, radius: f32, color: Rgba<u8>) {
    let (x0, y0, x1, y1) = pixel_bounds(img, &rect);
    for y in y0..y1 {
        for x in x0..x1 {
            if rect.contains_rounded(x as f32 + 0.5, y as f32 + 0.5, radius) {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

/// Stroke a rounded rectangle: pixels inside the outer rounded rect but
/// outside the same rect inset by `width`.
pub fn stroke_rounded_rect(
    img: &mut RgbaImage,
    rect: Rect,
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let inner = rect.inset(width);
    let inner_radius = (radius - width).max(0.0);
    let (x0, y0, x1, y1) = pixel_bounds(img, &rect);
    for y in y0..y1 {
        for x in x0..x1 {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            if rect.contains_rounded(px, py, radius)
                && !inner.contains_rounded(px, py, inner_radius)
            {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

/// Fill a rounded rectangle with a vertical gradient from `top` to `bottom`.
pub fn fill_vertical_gradient_rounded(
    img: &mut RgbaImage,
    rect: Rect,
    radius: f32,
    top: Rgba<u8>,
    bottom: Rgba<u8>,
) {
    if rect.h <= 0.0 || rect.w <= 0.0 {
        return;
    }
    let (x0, y0, x1, y1) = pixel_bounds(img, &rect);
    for y in y0..y1 {
        let t = ((y as f32 + 0.5 - rect.y) / rect.h).clamp(0.0, 1.0);
        let color = Rgba([
            lerp(top.0[0], bottom.0[0], t),
            lerp(top.0[1], bottom.0[1], t),
            lerp(top.0[2], bottom.0[2], t),
            lerp(top.0[3], bottom.0[3], t),
        ]);
        for x in x0..x1 {
            if rect.contains_rounded(x as f32 + 0.5, y as f32 + 0.5, radius) {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    ((1.0 - t) * a as f32 + t * b as f32) as u8
}

/// Fill a circle with a one-pixel feathered edge.
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    let rect = Rect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
    let (x0, y0, x1, y1) = pixel_bounds(img, &rect);
    for y in y0..y1 {
        for x in x0..x1 {
            let (dx, dy) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                let alpha = (color.0[3] as f32 * coverage) as u8;
                blend_pixel(img, x, y, Rgba([color.0[0], color.0[1], color.0[2], alpha]));
            }
        }
    }
}

/// Soft drop shadow for a circle: full shadow color inside the radius, fading
/// linearly to nothing over `blur` pixels. The circle itself is drawn on top.
pub fn fill_circle_shadow(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    blur: f32,
    color: Rgba<u8>,
) {
    let reach = radius + blur;
    let rect = Rect::new(cx - reach, cy - reach, reach * 2.0, reach * 2.0);
    let (x0, y0, x1, y1) = pixel_bounds(img, &rect);
    for y in y0..y1 {
        for x in x0..x1 {
            let (dx, dy) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
            let dist = (dx * dx + dy * dy).sqrt();
            let coverage = if dist <= radius {
                1.0
            } else if blur > 0.0 {
                (1.0 - (dist - radius) / blur).clamp(0.0, 1.0)
            } else {
                0.0
            };
            if coverage > 0.0 {
                let alpha = (color.0[3] as f32 * coverage) as u8;
                blend_pixel(img, x, y, Rgba([color.0[0], color.0[1], color.0[2], alpha]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn rounded_rect_excludes_the_literal_corners() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!rect.contains_rounded(0.5, 0.5, 20.0));
        assert!(!rect.contains_rounded(99.5, 99.5, 20.0));
        assert!(rect.contains_rounded(50.0, 50.0, 20.0));
        // the corner-circle centers are inside
        assert!(rect.contains_rounded(20.0, 20.0, 20.0));
    }

    #[test]
    fn radius_is_clamped_to_half_the_short_edge() {
        let rect = Rect::new(0.0, 0.0, 10.0, 100.0);
        // an oversized radius must not hollow out the middle
        assert!(rect.contains_rounded(5.0, 50.0, 500.0));
    }

    #[test]
    fn fill_covers_center_and_leaves_corners_clear() {
        let mut img = RgbaImage::new(100, 100);
        fill_rounded_rect(&mut img, Rect::new(0.0, 0.0, 100.0, 100.0), 20.0, WHITE);
        assert_eq!(img.get_pixel(50, 50).0[3], 255);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn stroke_covers_edges_but_not_the_interior() {
        let mut img = RgbaImage::new(100, 100);
        stroke_rounded_rect(
            &mut img,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            10.0,
            6.0,
            WHITE,
        );
        assert_eq!(img.get_pixel(50, 2).0[3], 255);
        assert_eq!(img.get_pixel(50, 50).0[3], 0);
    }

    #[test]
    fn gradient_fades_from_top_to_bottom() {
        let mut img = RgbaImage::new(100, 100);
        // opaque dark base so the white gradient is visible
        for p in img.pixels_mut() {
            *p = Rgba([0, 0, 0, 255]);
        }
        fill_vertical_gradient_rounded(
            &mut img,
            Rect::new(0.0, 0.0, 100.0, 50.0),
            0.0,
            Rgba([255, 255, 255, 255]),
            Rgba([255, 255, 255, 0]),
        );
        let top = img.get_pixel(50, 1).0[0];
        let bottom = img.get_pixel(50, 48).0[0];
        assert!(top > bottom);
    }

    #[test]
    fn circle_covers_its_center() {
        let mut img = RgbaImage::new(100, 100);
        fill_circle(&mut img, 50.0, 50.0, 20.0, WHITE);
        assert_eq!(img.get_pixel(50, 50).0, WHITE.0);
        assert_eq!(img.get_pixel(5, 5).0[3], 0);
    }
}
