//! Painters for underline, strikeout, highlight and separator lines.
//!
//! They receive already resolved geometry, typically taken from
//! [`crate::particle::TextRun::paint_span`], and never lay anything out
//! themselves. Under right-to-left direction each one mirrors its x.

mod highlight;
mod separator;
mod strikeout;
mod underline;

pub use highlight::Highlight;
pub use separator::Separator;
pub use strikeout::Strikeout;
pub use underline::Underline;

/// Stroke pattern of an underline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDecorationStyle {
    #[default]
    Solid,
    Double,
    Dashed,
    Dotted,
    Wavy,
}
