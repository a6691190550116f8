/// Coordinate space of the drawing surface. **Y-axis goes down.**
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CanvasSpace;

pub type Point = euclid::Point2D<f32, CanvasSpace>;
pub type Rect = euclid::Rect<f32, CanvasSpace>;
pub type Size = euclid::Size2D<f32, CanvasSpace>;

/// Four corner points of a glyph box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub left_top: Point,
    pub left_bottom: Point,
    pub right_top: Point,
    pub right_bottom: Point,
}

impl Quad {
    /// Builds the axis-aligned quad covering `[x, x + width] x [y, y + height]`.
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left_top: Point::new(x, y),
            left_bottom: Point::new(x, y + height),
            right_top: Point::new(x + width, y),
            right_bottom: Point::new(x + width, y + height),
        }
    }

    /// Returns a copy whose left edge sits at `left` and right edge at `right`.
    ///
    /// The vertical coordinates of all four corners are kept.
    pub fn with_horizontal_span(&self, left: f32, right: f32) -> Self {
        Self {
            left_top: Point::new(left, self.left_top.y),
            left_bottom: Point::new(left, self.left_bottom.y),
            right_top: Point::new(right, self.right_top.y),
            right_bottom: Point::new(right, self.right_bottom.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.right_top.x - self.left_top.x
    }

    pub fn height(&self) -> f32 {
        self.left_bottom.y - self.left_top.y
    }
}

/// Where an element sits on the canvas.
///
/// `coordinate` is the logical (left-to-right) placement produced by row
/// composition. `visual_coordinate` is only filled in when the run holding
/// the element has been reordered for right-to-left display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementPosition {
    pub coordinate: Quad,
    pub visual_coordinate: Option<Quad>,
}

impl ElementPosition {
    pub fn new(coordinate: Quad) -> Self {
        Self {
            coordinate,
            visual_coordinate: None,
        }
    }

    /// The quad decorations should paint against.
    pub fn paint_coordinate(&self) -> &Quad {
        self.visual_coordinate.as_ref().unwrap_or(&self.coordinate)
    }
}

impl From<Quad> for ElementPosition {
    fn from(coordinate: Quad) -> Self {
        Self::new(coordinate)
    }
}
