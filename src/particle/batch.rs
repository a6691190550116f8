use crate::element::{Element, ElementKind};
use crate::geometry::ElementPosition;
use crate::options::Direction;
use crate::particle::{TextRun, fixup};

/// Attributes of the previously recorded element that decide whether the
/// next one may join the open run.
#[derive(Clone, Debug, PartialEq)]
struct RunSignature {
    kind: ElementKind,
    style: String,
    color: Option<String>,
    width_override: bool,
}

impl RunSignature {
    fn of(element: &Element) -> Self {
        Self {
            kind: element.kind,
            style: element.style.clone(),
            color: element.color.clone(),
            width_override: element.width_override.is_some(),
        }
    }
}

/// Batching state carried from one [`batch_step`] to the next.
///
/// The default state has seen nothing, so the first element always opens a
/// run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchState {
    previous: Option<RunSignature>,
}

impl BatchState {
    /// Whether `element` extends the run opened by the previous element.
    ///
    /// Kind, style and color must match, and neither side may carry a width
    /// override: custom-width glyphs always sit in a run of their own.
    pub fn joins(&self, element: &Element) -> bool {
        let Some(previous) = &self.previous else {
            return false;
        };

        !previous.width_override
            && element.width_override.is_none()
            && previous.kind == element.kind
            && previous.style == element.style
            && previous.color == element.color
    }
}

/// An element together with where row composition placed it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedElement {
    pub element: Element,
    pub x: f32,
    pub y: f32,
    pub position: ElementPosition,
}

/// Feeds one element into the run queue.
///
/// Joining appends to the last run in `queue`. Otherwise a new run is opened
/// after, under right-to-left direction, a trailing symbol of the run being
/// closed has been split off into its own run.
pub fn batch_step(
    state: BatchState,
    mut queue: Vec<TextRun>,
    element: &Element,
    x: f32,
    y: f32,
    position: ElementPosition,
    direction: Direction,
) -> (BatchState, Vec<TextRun>) {
    if state.joins(element)
        && let Some(open) = queue.last_mut()
    {
        open.push(element, position);
    } else {
        if direction.is_rtl()
            && let Some(closing) = queue.pop()
        {
            let (shortened, detached) = fixup::split_trailing_symbol(closing);
            queue.push(shortened);
            queue.extend(detached);
        }
        queue.push(TextRun::open(element, x, y, position));
    }

    let state = BatchState {
        previous: Some(RunSignature::of(element)),
    };
    (state, queue)
}

/// Batches a whole line of elements, given in logical order.
pub fn batch(
    elements: impl IntoIterator<Item = PlacedElement>,
    direction: Direction,
) -> Vec<TextRun> {
    let (_, queue) = elements.into_iter().fold(
        (BatchState::default(), Vec::new()),
        |(state, queue), placed| {
            batch_step(
                state,
                queue,
                &placed.element,
                placed.x,
                placed.y,
                placed.position,
                direction,
            )
        },
    );
    queue
}
