/// Measured extent of a string in a given font.
///
/// Mirrors what a 2D canvas reports: an advance `width`, the tight bounding
/// box of the inked glyphs around the alignment point, and the ascent and
/// descent of the font itself.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub actual_bounding_box_ascent: f32,
    pub actual_bounding_box_descent: f32,
    pub actual_bounding_box_left: f32,
    pub actual_bounding_box_right: f32,
    pub font_bounding_box_ascent: f32,
    pub font_bounding_box_descent: f32,
}

impl TextMetrics {
    /// Same metrics with the advance replaced by `width`.
    pub fn with_width(self, width: f32) -> Self {
        Self { width, ..self }
    }
}

/// Font engine primitive used to measure strings.
///
/// `font` is a descriptor string such as `"bold 16px Noto Sans"`.
/// Implementations are expected to be total: text in a font that cannot be
/// resolved measures as empty instead of failing.
pub trait TextMeasurer {
    fn measure_text(&self, text: &str, font: &str) -> TextMetrics;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure_text(&self, text: &str, font: &str) -> TextMetrics {
        (**self).measure_text(text, font)
    }
}
