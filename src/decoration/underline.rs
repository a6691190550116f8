use crate::canvas::{Canvas, Stroke};
use crate::decoration::TextDecorationStyle;
use crate::geometry::Point;
use crate::options::{Direction, DrawOptions};

const DASHED: [f32; 2] = [3.0, 1.0];
const DOTTED: [f32; 2] = [1.0, 1.0];
/// Gap between the two strokes of a double underline, before scaling.
const DOUBLE_SPACING: f32 = 3.0;

pub struct Underline {
    scale: f32,
    direction: Direction,
    color: String,
}

impl Underline {
    pub fn new(options: &DrawOptions) -> Self {
        Self {
            scale: options.scale,
            direction: options.direction,
            color: options.underline_color.clone(),
        }
    }

    /// Underlines `width` pixels starting at `x`, below the baseline `y`.
    ///
    /// `color` overrides the configured underline color.
    pub fn render(
        &self,
        canvas: &mut dyn Canvas,
        x: f32,
        y: f32,
        width: f32,
        color: Option<&str>,
        style: TextDecorationStyle,
    ) {
        let x = if self.direction.is_rtl() { x - width } else { x };
        // snapped to the pixel center so a 1px line stays 1px
        let y = (y + 2.0 * self.scale).floor() + 0.5;
        let color = color.unwrap_or(self.color.as_str());

        match style {
            TextDecorationStyle::Solid => self.draw_line(canvas, x, y, width, color, &[]),
            TextDecorationStyle::Dashed => self.draw_line(canvas, x, y, width, color, &DASHED),
            TextDecorationStyle::Dotted => self.draw_line(canvas, x, y, width, color, &DOTTED),
            TextDecorationStyle::Double => self.draw_double(canvas, x, y, width, color),
            TextDecorationStyle::Wavy => self.draw_wave(canvas, x, y, width, color),
        }
    }

    fn draw_line(&self, canvas: &mut dyn Canvas, x: f32, y: f32, width: f32, color: &str, dash: &[f32]) {
        let points = [Point::new(x, y), Point::new(x + width, y)];
        canvas.stroke_path(&points, &Stroke::dashed(color, self.scale, dash));
    }

    fn draw_double(&self, canvas: &mut dyn Canvas, x: f32, y: f32, width: f32, color: &str) {
        let second_y = y + DOUBLE_SPACING * self.scale;
        self.draw_line(canvas, x, y, width, color, &[]);
        self.draw_line(canvas, x, second_y, width, color, &[]);
    }

    /// One sample per pixel of `amplitude * sin(frequency * dx)`.
    fn draw_wave(&self, canvas: &mut dyn Canvas, x: f32, y: f32, width: f32, color: &str) {
        let amplitude = 1.2 * self.scale;
        let frequency = 1.0 / self.scale;
        let baseline = y + 2.0 * amplitude;

        let samples = width.max(0.0).ceil() as usize;
        let points: Vec<Point> = (0..samples)
            .map(|dx| {
                let dx = dx as f32;
                Point::new(x + dx, baseline + amplitude * (frequency * dx).sin())
            })
            .collect();
        canvas.stroke_path(&points, &Stroke::solid(color, self.scale));
    }
}
