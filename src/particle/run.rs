use crate::element::{Element, ElementKind};
use crate::geometry::ElementPosition;

/// Contiguous batch of elements painted with one `fill_text` call.
///
/// `elements`, `widths` and `positions` are index-aligned and `value` is the
/// concatenation of the element values. Style, color and kind are shared by
/// every element. `x`/`y` is the paint origin of the whole run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub value: String,
    pub elements: Vec<Element>,
    pub widths: Vec<f32>,
    pub positions: Vec<ElementPosition>,
    pub style: String,
    pub color: Option<String>,
    pub kind: ElementKind,
    pub x: f32,
    pub y: f32,
}

impl TextRun {
    /// Starts a run seeded with `element`.
    ///
    /// Sub- and superscripts move the run's baseline by half the element's
    /// line height. The shift is fixed for the lifetime of the run.
    pub fn open(element: &Element, x: f32, y: f32, position: ElementPosition) -> Self {
        Self {
            value: element.value.clone(),
            elements: vec![element.clone()],
            widths: vec![element.advance()],
            positions: vec![position],
            style: element.style.clone(),
            color: element.color.clone(),
            kind: element.kind,
            x,
            y: y + element.kind.baseline_offset(element.metrics.height),
        }
    }

    pub(crate) fn push(&mut self, element: &Element, position: ElementPosition) {
        self.value.push_str(&element.value);
        self.widths.push(element.advance());
        self.elements.push(element.clone());
        self.positions.push(position);
    }

    /// Removes the last element together with its width and position.
    pub(crate) fn pop(&mut self) -> Option<(Element, f32, ElementPosition)> {
        let element = self.elements.pop()?;
        let width = self.widths.pop()?;
        let position = self.positions.pop()?;
        let keep = self.value.len().saturating_sub(element.value.len());
        self.value.truncate(keep);
        Some((element, width, position))
    }

    /// Sum of the element widths.
    pub fn width(&self) -> f32 {
        self.widths.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn first_char(&self) -> Option<char> {
        self.value.chars().next()
    }

    pub fn last_char(&self) -> Option<char> {
        self.value.chars().next_back()
    }

    pub fn first_kind(&self) -> Option<ElementKind> {
        self.elements.first().map(|element| element.kind)
    }

    /// Horizontal extent `(left, width)` decorations should cover.
    ///
    /// Reads the visual coordinates when the run was reordered, the logical
    /// ones otherwise.
    pub fn paint_span(&self) -> Option<(f32, f32)> {
        let left = self.positions.first()?.paint_coordinate().left_top.x;
        let right = self.positions.last()?.paint_coordinate().right_top.x;
        Some((left, right - left))
    }
}
