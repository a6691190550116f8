use std::collections::VecDeque;

use crate::classify::is_rtl_character;
use crate::particle::TextRun;

/// Puts a finished run queue into visual order for right-to-left display.
///
/// This is a local, pairwise heuristic rather than the Unicode
/// bidirectional algorithm. The first run anchors the output; every later
/// run is compared with its predecessor in the *input* order:
///
/// 1. runs opened by a sub- or superscript go to the front, they always read
///    left-to-right;
/// 2. if either run starts with a right-to-left character the run goes to
///    the back;
/// 3. anything else goes to the front.
///
/// Afterwards runs are laid out leftwards from the first run's `x`: each run
/// gets `x = start_x - offset`, where `offset` is the summed width of the
/// runs placed before it, and every position receives a visual quad spanning
/// the whole run.
pub fn reorder_runs(runs: Vec<TextRun>) -> Vec<TextRun> {
    if runs.len() < 2 {
        return runs;
    }

    let start_x = runs[0].x;
    let leads_rtl: Vec<bool> = runs
        .iter()
        .map(|run| run.first_char().is_some_and(is_rtl_character))
        .collect();

    let mut ordered = VecDeque::with_capacity(runs.len());
    for (index, run) in runs.into_iter().enumerate() {
        if index == 0 {
            ordered.push_back(run);
        } else if run.first_kind().is_some_and(|kind| kind.is_script()) {
            ordered.push_front(run);
        } else if leads_rtl[index] || leads_rtl[index - 1] {
            ordered.push_back(run);
        } else {
            ordered.push_front(run);
        }
    }

    let mut offset = 0.0;
    ordered
        .into_iter()
        .map(|mut run| {
            let x = start_x - offset;
            let width = run.width();
            run.x = x;
            for position in &mut run.positions {
                position.visual_coordinate =
                    Some(position.coordinate.with_horizontal_span(x, x + width));
            }
            offset += width;
            run
        })
        .collect()
}
