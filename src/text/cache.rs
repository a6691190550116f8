use std::collections::HashMap;

use crate::classify;
use crate::element::{Element, ElementKind};
use crate::text::{TextMeasurer, TextMetrics};

type FxHashMap<K, V> = HashMap<K, V, fxhash::FxBuildHasher>;

/// Result of [`MeasureCache::measure_word`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordMeasure {
    /// Summed width of the letters that were scanned.
    pub width: f32,
    /// Index of the first element that is not part of the word, `None` when
    /// the word runs to the end of the input.
    pub end_index: Option<usize>,
}

/// Memoizes text metrics per `(font descriptor, value)`.
///
/// Entries are never evicted. Whoever owns the cache clears it when the set
/// of available fonts changes, since a descriptor may then resolve to a
/// different face.
#[derive(Default)]
pub struct MeasureCache {
    // font descriptor -> value -> metrics, so lookups borrow `&str` keys
    entries: FxHashMap<String, FxHashMap<String, TextMetrics>>,
}

impl MeasureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures `element` in `font`.
    ///
    /// A width override wins over the measured advance. In that case the
    /// bounding-box fields still come from the font engine, and the result
    /// is not cached because the override belongs to this element alone.
    pub fn measure_text<M: TextMeasurer + ?Sized>(
        &mut self,
        measurer: &M,
        font: &str,
        element: &Element,
    ) -> TextMetrics {
        if let Some(width) = element.width_override {
            return measurer.measure_text(&element.value, font).with_width(width);
        }

        if let Some(metrics) = self
            .entries
            .get(font)
            .and_then(|values| values.get(element.value.as_str()))
        {
            return *metrics;
        }

        let metrics = measurer.measure_text(&element.value, font);
        self.entries
            .entry(font.to_string())
            .or_default()
            .insert(element.value.clone(), metrics);
        metrics
    }

    /// Sums the widths of consecutive letters starting at `start`.
    ///
    /// The scan stops at the first element that is not plain text or whose
    /// value fails `is_letter`.
    pub fn measure_word<M: TextMeasurer + ?Sized>(
        &mut self,
        measurer: &M,
        font: &str,
        elements: &[Element],
        start: usize,
        is_letter: impl Fn(&str) -> bool,
    ) -> WordMeasure {
        let mut width = 0.0;
        for (index, element) in elements.iter().enumerate().skip(start) {
            if element.kind != ElementKind::Text || !is_letter(&element.value) {
                return WordMeasure {
                    width,
                    end_index: Some(index),
                };
            }
            width += self.measure_text(measurer, font, element).width;
        }

        WordMeasure {
            width,
            end_index: None,
        }
    }

    /// Width of `element` when it is one of [`classify::PUNCTUATION_LIST`], otherwise 0.
    pub fn measure_punctuation_width<M: TextMeasurer + ?Sized>(
        &mut self,
        measurer: &M,
        font: &str,
        element: Option<&Element>,
    ) -> f32 {
        match element {
            Some(element) if classify::is_punctuation(&element.value) => {
                self.measure_text(measurer, font, element).width
            }
            _ => 0.0,
        }
    }

    /// Number of cached `(font, value)` entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(|values| values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry, e.g. after the font list was reloaded.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
