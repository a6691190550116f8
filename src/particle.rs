/// Incremental grouping of elements into runs.
pub mod batch;
/// Trailing punctuation reattachment for right-to-left lines.
pub mod fixup;
/// Visual reordering of runs for right-to-left lines.
pub mod reorder;
mod run;

pub use batch::{BatchState, PlacedElement, batch, batch_step};
pub use fixup::split_trailing_symbol;
pub use reorder::reorder_runs;
pub use run::TextRun;

use crate::canvas::Canvas;
use crate::element::Element;
use crate::geometry::{ElementPosition, Point};
use crate::options::{Direction, DrawOptions};
use crate::text::{MeasureCache, TextMeasurer, TextMetrics, WordMeasure};

/// Batches the glyph elements of one paint pass into text runs and paints them.
///
/// A pass is a sequence of [`Self::record`] calls in logical order, followed
/// by [`Self::complete`]. Decoration painters that need run geometry read
/// [`Self::text_render_queue`] in between, after calling [`Self::re_queue`]
/// when the document is right-to-left.
///
/// The measurement cache outlives passes. Clear it through
/// [`Self::cache_mut`] when the available fonts change.
pub struct TextParticle {
    options: DrawOptions,
    state: BatchState,
    queue: Vec<TextRun>,
    /// The queue is already in visual order.
    reordered: bool,
    cache: MeasureCache,
}

impl TextParticle {
    pub fn new(options: DrawOptions) -> Self {
        Self {
            options,
            state: BatchState::default(),
            queue: Vec::new(),
            reordered: false,
            cache: MeasureCache::new(),
        }
    }

    pub fn options(&self) -> &DrawOptions {
        &self.options
    }

    /// Options may change between passes, e.g. when another document is shown.
    pub fn options_mut(&mut self) -> &mut DrawOptions {
        &mut self.options
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.options.direction = direction;
    }

    pub fn cache(&self) -> &MeasureCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut MeasureCache {
        &mut self.cache
    }
}

/// measurement
impl TextParticle {
    /// See [`MeasureCache::measure_text`].
    pub fn measure_text<M: TextMeasurer + ?Sized>(
        &mut self,
        measurer: &M,
        font: &str,
        element: &Element,
    ) -> TextMetrics {
        self.cache.measure_text(measurer, font, element)
    }

    /// See [`MeasureCache::measure_word`].
    pub fn measure_word<M: TextMeasurer + ?Sized>(
        &mut self,
        measurer: &M,
        font: &str,
        elements: &[Element],
        start: usize,
        is_letter: impl Fn(&str) -> bool,
    ) -> WordMeasure {
        self.cache.measure_word(measurer, font, elements, start, is_letter)
    }

    /// See [`MeasureCache::measure_punctuation_width`].
    pub fn measure_punctuation_width<M: TextMeasurer + ?Sized>(
        &mut self,
        measurer: &M,
        font: &str,
        element: Option<&Element>,
    ) -> f32 {
        self.cache.measure_punctuation_width(measurer, font, element)
    }
}

/// run queue
impl TextParticle {
    /// Adds the next element of the line, in left-to-right logical order.
    ///
    /// `x`/`y` is the paint anchor of the element and `position` its glyph box.
    pub fn record(&mut self, element: &Element, x: f32, y: f32, position: impl Into<ElementPosition>) {
        if self.reordered {
            log::warn!("Element {:?} recorded after the queue was reordered", element.value);
        }

        let state = std::mem::take(&mut self.state);
        let queue = std::mem::take(&mut self.queue);
        let (state, queue) = batch_step(
            state,
            queue,
            element,
            x,
            y,
            position.into(),
            self.options.direction,
        );
        self.state = state;
        self.queue = queue;
    }

    /// Puts the queue into visual order when the document is right-to-left.
    ///
    /// Left-to-right documents are left untouched. Reordering happens at most
    /// once per pass, so calling this before [`Self::complete`] is safe.
    pub fn re_queue(&mut self) {
        if !self.options.direction.is_rtl() || self.reordered {
            return;
        }

        let queue = std::mem::take(&mut self.queue);
        self.queue = reorder_runs(queue);
        self.reordered = true;
        log::debug!("reordered {} runs for rtl", self.queue.len());
    }

    /// Current runs, in visual order once [`Self::re_queue`] ran.
    pub fn text_render_queue(&self) -> &[TextRun] {
        &self.queue
    }

    /// Finishes the pass: reorders under right-to-left direction, paints
    /// every run and empties the queue.
    pub fn complete(&mut self, canvas: &mut dyn Canvas) {
        self.re_queue();

        for run in &self.queue {
            let color = run.color.as_deref().unwrap_or(self.options.default_color.as_str());
            canvas.fill_text(&run.value, Point::new(run.x, run.y), &run.style, color);
        }

        log::debug!("painted {} runs", self.queue.len());
        self.reset();
    }

    /// Drops the queue and the batching state without painting.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.state = BatchState::default();
        self.reordered = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{DrawCommand, RecordingCanvas};
    use crate::classify::is_latin_letter;
    use crate::element::ElementKind;
    use crate::geometry::Quad;
    use crate::text::cache::tests::CountingMeasurer;

    const FONT: &str = "16px Noto Sans";

    /// Records `elements` side by side on a baseline at y = 20.
    fn record_line(particle: &mut TextParticle, elements: &[Element]) {
        let mut x = 0.0;
        for element in elements {
            let width = element.advance();
            particle.record(element, x, 20.0, Quad::from_origin_size(x, 4.0, width, 20.0));
            x += width;
        }
    }

    fn text(value: &str) -> Element {
        Element::text(value, FONT, 10.0, 20.0)
    }

    fn painted(canvas: &RecordingCanvas) -> Vec<(String, f32, f32, String)> {
        canvas
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text {
                    text, origin, color, ..
                } => Some((text.clone(), origin.x, origin.y, color.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_complete_paints_and_clears() {
        let mut particle = TextParticle::new(DrawOptions::default());
        record_line(
            &mut particle,
            &[text("a"), text("b"), text("c").with_color("#FF0000")],
        );
        assert_eq!(particle.text_render_queue().len(), 2);

        let mut canvas = RecordingCanvas::default();
        particle.complete(&mut canvas);

        assert_eq!(
            painted(&canvas),
            vec![
                ("ab".to_string(), 0.0, 20.0, "#000000".to_string()),
                ("c".to_string(), 20.0, 20.0, "#FF0000".to_string()),
            ]
        );
        assert!(particle.text_render_queue().is_empty());
    }

    #[test]
    fn test_ltr_requeue_is_noop() {
        let mut particle = TextParticle::new(DrawOptions::default());
        record_line(&mut particle, &[text("A"), text("ب").with_color("#00FF00"), text("B")]);
        let before = particle.text_render_queue().to_vec();

        particle.re_queue();

        assert_eq!(particle.text_render_queue(), before.as_slice());
        assert!(
            particle
                .text_render_queue()
                .iter()
                .flat_map(|run| &run.positions)
                .all(|position| position.visual_coordinate.is_none())
        );
    }

    #[test]
    fn test_rtl_pass_reorders_once() {
        let mut particle = TextParticle::new(DrawOptions::rtl());
        record_line(
            &mut particle,
            &[text("A"), text("ب").with_color("#00FF00"), text("B")],
        );

        particle.re_queue();
        particle.re_queue();
        let xs: Vec<f32> = particle.text_render_queue().iter().map(|run| run.x).collect();
        assert_eq!(xs, vec![0.0, -10.0, -20.0]);

        let mut canvas = RecordingCanvas::default();
        particle.complete(&mut canvas);
        let painted = painted(&canvas);
        assert_eq!(painted.len(), 3);
        assert_eq!((painted[1].0.as_str(), painted[1].1), ("ب", -10.0));
        assert_eq!((painted[2].0.as_str(), painted[2].1), ("B", -20.0));
    }

    #[test]
    fn test_rtl_fixup_precedes_new_run() {
        let mut particle = TextParticle::new(DrawOptions::rtl());
        record_line(
            &mut particle,
            &[text("你"), text("好"), text("，"), text("ب").with_color("#00FF00")],
        );

        let values: Vec<&str> = particle
            .text_render_queue()
            .iter()
            .map(|run| run.value.as_str())
            .collect();
        assert_eq!(values, vec!["你好", "，", "ب"]);
    }

    #[test]
    fn test_superscript_offset() {
        let mut particle = TextParticle::new(DrawOptions::default());
        record_line(
            &mut particle,
            &[
                text("x"),
                text("2").with_kind(ElementKind::Superscript),
                text("y"),
                text("i").with_kind(ElementKind::Subscript),
            ],
        );

        let ys: Vec<f32> = particle.text_render_queue().iter().map(|run| run.y).collect();
        assert_eq!(ys, vec![20.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_state_does_not_leak_between_passes() {
        let mut particle = TextParticle::new(DrawOptions::default());
        let mut canvas = RecordingCanvas::default();
        record_line(&mut particle, &[text("a")]);
        particle.complete(&mut canvas);

        record_line(&mut particle, &[text("b")]);

        assert_eq!(particle.text_render_queue().len(), 1);
        assert_eq!(particle.text_render_queue()[0].value, "b");
    }

    #[test]
    fn test_measurement_goes_through_cache() {
        let measurer = CountingMeasurer::new(8.0);
        let mut particle = TextParticle::new(DrawOptions::default());
        let elements = vec![text("h"), text("i"), text("!")];

        let word = particle.measure_word(&measurer, FONT, &elements, 0, is_latin_letter);
        assert_eq!(word.width, 16.0);
        assert_eq!(word.end_index, Some(2));

        let again = particle.measure_text(&measurer, FONT, &elements[0]);
        assert_eq!(again.width, 8.0);
        assert_eq!(measurer.calls.get(), 2);

        let bang = particle.measure_punctuation_width(&measurer, FONT, elements.get(2));
        assert_eq!(bang, 8.0);
        assert_eq!(particle.cache().len(), 3);

        particle.cache_mut().clear();
        assert!(particle.cache().is_empty());
    }
}
