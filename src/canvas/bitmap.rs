use palette::Srgb;

use crate::canvas::{Canvas, Stroke};
use crate::font_book::FontBook;
use crate::geometry::{Point, Rect};

/// Parses `"#RRGGBB"`, `"#RGB"` or a CSS color name.
///
/// Anything else paints black and logs a warning.
pub fn parse_color(color: &str) -> Srgb<u8> {
    let trimmed = color.trim();
    let parsed = match trimmed.strip_prefix('#') {
        Some(hex) => hex.parse::<Srgb<u8>>().ok(),
        None => palette::named::from_str(&trimmed.to_ascii_lowercase()),
    };

    parsed.unwrap_or_else(|| {
        log::warn!("Unsupported color {:?}, painting black", color);
        Srgb::new(0, 0, 0)
    })
}

/// Software RGBA8 canvas.
///
/// Pixels are arranged in row-major order with the origin at the top-left.
/// Text is rasterized with the fonts of the borrowed [`FontBook`]; drawing
/// outside the bitmap is clipped.
pub struct BitmapCanvas<'a> {
    fonts: &'a FontBook,
    width: usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
}

impl<'a> BitmapCanvas<'a> {
    /// Creates a fully transparent canvas.
    pub fn new(fonts: &'a FontBook, width: usize, height: usize) -> Self {
        Self {
            fonts,
            width,
            height,
            pixels: vec![[0; 4]; width.saturating_mul(height)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    pub fn into_pixels(self) -> Vec<[u8; 4]> {
        self.pixels
    }

    /// Composites `color` over the pixel at `(x, y)` with the given coverage.
    fn blend(&mut self, x: isize, y: isize, color: Srgb<u8>, coverage: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let alpha = coverage.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }

        let pixel = &mut self.pixels[y as usize * self.width + x as usize];
        let mix = |dst: u8, src: u8| (dst as f32 + (src as f32 - dst as f32) * alpha).round() as u8;
        pixel[0] = mix(pixel[0], color.red);
        pixel[1] = mix(pixel[1], color.green);
        pixel[2] = mix(pixel[2], color.blue);
        pixel[3] = mix(pixel[3], 255);
    }

    /// Paints a square pen of side `pen` centered on `center`.
    fn stamp(&mut self, center: Point, pen: f32, color: Srgb<u8>) {
        let half = (pen / 2.0).max(0.5);
        let x0 = (center.x - half).floor() as isize;
        let x1 = (center.x + half).ceil() as isize;
        let y0 = (center.y - half).floor() as isize;
        let y1 = (center.y + half).ceil() as isize;
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color, 1.0);
            }
        }
    }
}

/// Whether a point `distance` along the path falls on an "on" dash segment.
fn dash_is_on(dash: &[f32], distance: f32) -> bool {
    let period: f32 = dash.iter().sum();
    if dash.is_empty() || period <= 0.0 {
        return true;
    }

    let mut remaining = distance % period;
    for (index, length) in dash.iter().enumerate() {
        if remaining < *length {
            return index % 2 == 0;
        }
        remaining -= length;
    }
    true
}

impl Canvas for BitmapCanvas<'_> {
    fn fill_text(&mut self, text: &str, origin: Point, font: &str, color: &str) {
        let Some(resolved) = self.fonts.resolve(font) else {
            return;
        };
        let color = parse_color(color);
        let px = resolved.size;

        let mut pen_x = origin.x;
        let mut previous: Option<char> = None;
        for ch in text.chars() {
            if let Some(left) = previous {
                pen_x += resolved.font.horizontal_kern(left, ch, px).unwrap_or(0.0);
            }
            let (metrics, coverage) = resolved.font.rasterize(ch, px);
            previous = Some(ch);

            if metrics.width > 0 && metrics.height > 0 {
                // bitmap rows start at the glyph's top edge, the origin is on the baseline
                let left = (pen_x + metrics.xmin as f32).floor() as isize;
                let top = (origin.y - (metrics.ymin as f32 + metrics.height as f32)).floor() as isize;
                for row in 0..metrics.height {
                    for col in 0..metrics.width {
                        let alpha = coverage[row * metrics.width + col];
                        if alpha == 0 {
                            continue;
                        }
                        self.blend(
                            left + col as isize,
                            top + row as isize,
                            color,
                            alpha as f32 / 255.0,
                        );
                    }
                }
            }

            pen_x += metrics.advance_width;
        }
    }

    fn stroke_path(&mut self, points: &[Point], stroke: &Stroke<'_>) {
        let color = parse_color(stroke.color);
        let mut travelled = 0.0;

        for segment in points.windows(2) {
            let (from, to) = (segment[0], segment[1]);
            let length = (to - from).length();
            // two samples per pixel keeps diagonal strokes gap-free
            let steps = (length * 2.0).ceil().max(1.0) as usize;
            for step in 0..=steps {
                let t = step as f32 / steps as f32;
                if dash_is_on(stroke.dash, travelled + length * t) {
                    self.stamp(from.lerp(to, t), stroke.width, color);
                }
            }
            travelled += length;
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: &str, alpha: f32) {
        let color = parse_color(color);
        let x0 = rect.min_x().floor() as isize;
        let x1 = rect.max_x().ceil() as isize;
        let y0 = rect.min_y().floor() as isize;
        let y1 = rect.max_y().ceil() as isize;
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color, alpha);
            }
        }
    }
}
