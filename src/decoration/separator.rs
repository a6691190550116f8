use crate::canvas::{Canvas, Stroke};
use crate::geometry::Point;
use crate::options::{Direction, DrawOptions};

/// Horizontal divider drawn for separator elements.
pub struct Separator {
    scale: f32,
    direction: Direction,
    color: String,
}

impl Separator {
    pub fn new(options: &DrawOptions) -> Self {
        Self {
            scale: options.scale,
            direction: options.direction,
            color: options.default_color.clone(),
        }
    }

    /// Draws a `width` long divider at `y`, dashed when `dash` is not empty.
    pub fn render(
        &self,
        canvas: &mut dyn Canvas,
        x: f32,
        y: f32,
        width: f32,
        color: Option<&str>,
        dash: &[f32],
    ) {
        let x = if self.direction.is_rtl() { x - width } else { x };
        let y = y + 0.5;
        let color = color.unwrap_or(self.color.as_str());
        let points = [Point::new(x, y), Point::new(x + width * self.scale, y)];
        canvas.stroke_path(&points, &Stroke::dashed(color, self.scale, dash));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_dashed_separator_scales_length() {
        let options = DrawOptions {
            scale: 2.0,
            ..Default::default()
        };
        let mut canvas = RecordingCanvas::default();

        Separator::new(&options).render(&mut canvas, 10.0, 30.0, 100.0, Some("#CCCCCC"), &[4.0, 2.0]);

        assert_eq!(
            canvas.commands,
            vec![DrawCommand::Path {
                points: vec![Point::new(10.0, 30.5), Point::new(210.0, 30.5)],
                color: "#CCCCCC".to_string(),
                width: 2.0,
                dash: vec![4.0, 2.0],
            }]
        );
    }

    #[test]
    fn test_rtl_separator_starts_left_of_x() {
        let mut canvas = RecordingCanvas::default();

        Separator::new(&DrawOptions::rtl()).render(&mut canvas, 300.0, 0.0, 100.0, None, &[]);

        let DrawCommand::Path { points, color, .. } = &canvas.commands[0] else {
            panic!("expected a path");
        };
        assert_eq!(points[0].x, 200.0);
        assert_eq!(points[1].x, 300.0);
        assert_eq!(color, "#000000");
    }
}
