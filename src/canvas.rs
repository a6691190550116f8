//! Paint primitives the run engine and the decoration painters draw through.

mod bitmap;

pub use bitmap::{BitmapCanvas, parse_color};

use crate::geometry::{Point, Rect};

/// Line settings for [`Canvas::stroke_path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke<'a> {
    pub color: &'a str,
    pub width: f32,
    /// Alternating on/off lengths. Empty means a solid line.
    pub dash: &'a [f32],
}

impl<'a> Stroke<'a> {
    pub fn solid(color: &'a str, width: f32) -> Self {
        Self {
            color,
            width,
            dash: &[],
        }
    }

    pub fn dashed(color: &'a str, width: f32, dash: &'a [f32]) -> Self {
        Self { color, width, dash }
    }
}

/// Drawing surface.
///
/// Colors are CSS-style strings (`"#RRGGBB"`, `"#RGB"` or a named color) and
/// fonts are descriptor strings like `"italic 16px serif"`. Text origins sit
/// on the alphabetic baseline.
pub trait Canvas {
    fn fill_text(&mut self, text: &str, origin: Point, font: &str, color: &str);

    /// Strokes the open polyline through `points`.
    fn stroke_path(&mut self, points: &[Point], stroke: &Stroke<'_>);

    /// Fills `rect` with `color` at opacity `alpha`.
    fn fill_rect(&mut self, rect: Rect, color: &str, alpha: f32);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum DrawCommand {
        Text {
            text: String,
            origin: Point,
            font: String,
            color: String,
        },
        Path {
            points: Vec<Point>,
            color: String,
            width: f32,
            dash: Vec<f32>,
        },
        Rect {
            rect: Rect,
            color: String,
            alpha: f32,
        },
    }

    /// Canvas that only remembers what it was asked to draw.
    #[derive(Default)]
    pub(crate) struct RecordingCanvas {
        pub commands: Vec<DrawCommand>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_text(&mut self, text: &str, origin: Point, font: &str, color: &str) {
            self.commands.push(DrawCommand::Text {
                text: text.to_string(),
                origin,
                font: font.to_string(),
                color: color.to_string(),
            });
        }

        fn stroke_path(&mut self, points: &[Point], stroke: &Stroke<'_>) {
            self.commands.push(DrawCommand::Path {
                points: points.to_vec(),
                color: stroke.color.to_string(),
                width: stroke.width,
                dash: stroke.dash.to_vec(),
            });
        }

        fn fill_rect(&mut self, rect: Rect, color: &str, alpha: f32) {
            self.commands.push(DrawCommand::Rect {
                rect,
                color: color.to_string(),
                alpha,
            });
        }
    }
}
