/// Paragraph direction of the document being painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

/// Document-level settings read by the run engine and the decoration painters.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOptions {
    pub direction: Direction,
    /// Device scale; line widths of decorations follow it.
    pub scale: f32,
    /// Used for runs that carry no color of their own.
    pub default_color: String,
    pub underline_color: String,
    pub strikeout_color: String,
    pub highlight_alpha: f32,
    /// Width of the writable area, needed to mirror highlights under RTL.
    pub inner_width: f32,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            scale: 1.0,
            default_color: "#000000".to_string(),
            underline_color: "#000000".to_string(),
            strikeout_color: "#FF0000".to_string(),
            highlight_alpha: 0.6,
            inner_width: 0.0,
        }
    }
}

impl DrawOptions {
    pub fn rtl() -> Self {
        Self {
            direction: Direction::Rtl,
            ..Default::default()
        }
    }
}
