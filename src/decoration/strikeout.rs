use crate::canvas::{Canvas, Stroke};
use crate::geometry::Point;
use crate::options::{Direction, DrawOptions};

pub struct Strikeout {
    direction: Direction,
    color: String,
}

impl Strikeout {
    pub fn new(options: &DrawOptions) -> Self {
        Self {
            direction: options.direction,
            color: options.strikeout_color.clone(),
        }
    }

    /// Strikes through `width` pixels at height `y`, usually the middle of the glyph box.
    pub fn render(&self, canvas: &mut dyn Canvas, x: f32, y: f32, width: f32) {
        let x = if self.direction.is_rtl() { x - width } else { x };
        let y = y + 0.5;
        let points = [Point::new(x, y), Point::new(x + width, y)];
        canvas.stroke_path(&points, &Stroke::solid(&self.color, 1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_strikeout_line() {
        let mut canvas = RecordingCanvas::default();
        Strikeout::new(&DrawOptions::default()).render(&mut canvas, 4.0, 10.0, 20.0);

        assert_eq!(
            canvas.commands,
            vec![DrawCommand::Path {
                points: vec![Point::new(4.0, 10.5), Point::new(24.0, 10.5)],
                color: "#FF0000".to_string(),
                width: 1.0,
                dash: vec![],
            }]
        );
    }

    #[test]
    fn test_rtl_mirrors_x() {
        let mut canvas = RecordingCanvas::default();
        Strikeout::new(&DrawOptions::rtl()).render(&mut canvas, 50.0, 10.0, 20.0);

        let DrawCommand::Path { points, .. } = &canvas.commands[0] else {
            panic!("expected a path");
        };
        assert_eq!(points[0].x, 30.0);
        assert_eq!(points[1].x, 50.0);
    }
}
