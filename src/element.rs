/// Kind of glyph-bearing element handed over by row composition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    #[default]
    Text,
    Superscript,
    Subscript,
    Hyperlink,
    Date,
    Control,
    Checkbox,
    Radio,
    Tab,
    Image,
    Latex,
    Separator,
}

impl ElementKind {
    /// Sub- and superscripts are always read left-to-right and painted off the baseline.
    pub fn is_script(self) -> bool {
        matches!(self, ElementKind::Superscript | ElementKind::Subscript)
    }

    /// Vertical shift applied to a run opened by an element of this kind.
    ///
    /// Superscripts sit half a line above the baseline, subscripts half a
    /// line below. Everything else stays on the baseline.
    pub fn baseline_offset(self, line_height: f32) -> f32 {
        match self {
            ElementKind::Superscript => -line_height / 2.0,
            ElementKind::Subscript => line_height / 2.0,
            _ => 0.0,
        }
    }
}

/// Measured extent of an element as resolved by row composition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementMetrics {
    pub width: f32,
    pub height: f32,
}

/// Atomic glyph-bearing unit.
///
/// Elements are owned by the caller. The run builder clones what it needs
/// into its runs and never mutates the source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// One or more characters rendered together.
    pub value: String,
    /// Font descriptor, e.g. `"bold 16px Noto Sans"`.
    pub style: String,
    pub color: Option<String>,
    pub kind: ElementKind,
    /// Explicit width, used for custom-width glyphs such as inline icons.
    pub width_override: Option<f32>,
    pub metrics: ElementMetrics,
}

impl Element {
    /// Creates a plain text element with the given measured width and line height.
    pub fn text(value: impl Into<String>, style: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            value: value.into(),
            style: style.into(),
            metrics: ElementMetrics { width, height },
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: ElementKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Pins the width, which also becomes the measured width.
    pub fn with_width_override(mut self, width: f32) -> Self {
        self.width_override = Some(width);
        self.metrics.width = width;
        self
    }

    /// Horizontal advance: the override when present, the measured width otherwise.
    pub fn advance(&self) -> f32 {
        self.width_override.unwrap_or(self.metrics.width)
    }
}
