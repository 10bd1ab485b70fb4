use image::{Rgb, RgbImage};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    pub fn inset(&self, left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self::new(
            self.x + left,
            self.y + top,
            (self.width - left - right).max(1),
            (self.height - top - bottom).max(1),
        )
    }
}

/// Writes a pixel, ignoring coordinates outside the image.
pub(crate) fn put(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x < 0 || y < 0 || x >= i64::from(image.width()) || y >= i64::from(image.height()) {
        return;
    }
    image.put_pixel(x as u32, y as u32, color);
}

/// Mixes `color` over the existing pixel by `coverage` in `0..=1`.
pub(crate) fn blend(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= i64::from(image.width()) || y >= i64::from(image.height()) {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    let pixel = image.get_pixel_mut(x as u32, y as u32);
    for (channel, target) in pixel.0.iter_mut().zip(color.0) {
        let mixed = f32::from(*channel) * (1.0 - coverage) + f32::from(target) * coverage;
        *channel = mixed.round() as u8;
    }
}

pub(crate) fn fill_rect(image: &mut RgbImage, rect: Rect, color: Rgb<u8>) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            put(image, x, y, color);
        }
    }
}

pub(crate) fn stroke_rect(image: &mut RgbImage, rect: Rect, color: Rgb<u8>) {
    for x in rect.x..=rect.right() {
        put(image, x, rect.y, color);
        put(image, x, rect.bottom(), color);
    }
    for y in rect.y..=rect.bottom() {
        put(image, rect.x, y, color);
        put(image, rect.right(), y, color);
    }
}

pub(crate) fn fill_disc(image: &mut RgbImage, cx: i64, cy: i64, radius: i64, color: Rgb<u8>) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(image, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Bresenham line stamped with a disc of `radius` for thickness.
pub(crate) fn draw_line(
    image: &mut RgbImage,
    from: (i64, i64),
    to: (i64, i64),
    radius: i64,
    color: Rgb<u8>,
) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let step_x = if x < x1 { 1 } else { -1 };
    let step_y = if y < y1 { 1 } else { -1 };
    let mut error = dx + dy;

    loop {
        fill_disc(image, x, y, radius, color);
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}
