use crate::canvas::Canvas;
use crate::geometry::{Point, Rect, Size};
use crate::options::{Direction, DrawOptions};

/// Pending rectangle, grown while neighbouring segments share a color.
#[derive(Clone, Debug, PartialEq)]
struct FillInfo {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: String,
}

/// Background fill behind highlighted text.
///
/// Segments are collected with [`Self::record_fill_info`] and painted as one
/// rectangle per color by [`Self::render`].
pub struct Highlight {
    alpha: f32,
    direction: Direction,
    inner_width: f32,
    fill: Option<FillInfo>,
}

impl Highlight {
    pub fn new(options: &DrawOptions) -> Self {
        Self {
            alpha: options.highlight_alpha,
            direction: options.direction,
            inner_width: options.inner_width,
            fill: None,
        }
    }

    /// Extends the pending rectangle by one segment.
    ///
    /// A segment in a different color first paints what is pending, then
    /// starts a new rectangle.
    pub fn record_fill_info(
        &mut self,
        canvas: &mut dyn Canvas,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &str,
    ) {
        if let Some(fill) = &mut self.fill
            && fill.color == color
        {
            fill.width += width;
            fill.height = fill.height.max(height);
            return;
        }

        self.render(canvas);
        self.fill = Some(FillInfo {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    /// Paints and clears the pending rectangle, if it has any width.
    pub fn render(&mut self, canvas: &mut dyn Canvas) {
        let Some(fill) = self.fill.take() else {
            return;
        };
        if fill.width == 0.0 {
            return;
        }

        let x = if self.direction.is_rtl() {
            fill.x - self.inner_width
        } else {
            fill.x
        };
        let rect = Rect::new(Point::new(x, fill.y), Size::new(fill.width, fill.height));
        canvas.fill_rect(rect, &fill.color, self.alpha);
    }

    pub fn has_pending(&self) -> bool {
        self.fill.is_some()
    }
}
