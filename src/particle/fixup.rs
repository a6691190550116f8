use crate::classify;
use crate::particle::TextRun;

/// Detaches a misattached trailing symbol from a run that is about to close.
///
/// Scanning in logical order glues punctuation typed after a word onto that
/// word's run, while right-to-left display needs it next to the run that
/// follows. When the last character of `run` is punctuation or a special
/// unit symbol, the last element moves into a new singleton run sharing the
/// style, color and anchor of `run`. The caller inserts it right after the
/// shortened run.
///
/// Singleton runs are returned unchanged so no run ever becomes empty.
pub fn split_trailing_symbol(mut run: TextRun) -> (TextRun, Option<TextRun>) {
    if run.len() < 2 || !run.last_char().is_some_and(classify::is_trailing_symbol) {
        return (run, None);
    }

    let Some((element, width, position)) = run.pop() else {
        return (run, None);
    };

    log::trace!("detaching {:?} from run {:?}", element.value, run.value);

    let detached = TextRun {
        value: element.value.clone(),
        elements: vec![element],
        widths: vec![width],
        positions: vec![position],
        style: run.style.clone(),
        color: run.color.clone(),
        kind: run.kind,
        x: run.x,
        y: run.y,
    };

    (run, Some(detached))
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::geometry::{ElementPosition, Quad};

    const FONT: &str = "16px Noto Sans";

    fn run_of(values: &[&str]) -> TextRun {
        let mut placed = values.iter().enumerate().map(|(index, value)| {
            let x = index as f32 * 10.0;
            let element = Element::text(*value, FONT, 10.0, 20.0).with_color("#333333");
            (element, ElementPosition::new(Quad::from_origin_size(x, 0.0, 10.0, 20.0)))
        });

        let (element, position) = placed.next().unwrap();
        let mut run = TextRun::open(&element, 5.0, 16.0, position);
        for (element, position) in placed {
            run.push(&element, position);
        }
        run
    }

    #[test]
    fn test_detaches_cjk_comma() {
        let (shortened, detached) = split_trailing_symbol(run_of(&["你", "好", "，"]));
        let detached = detached.unwrap();

        assert_eq!(shortened.value, "你好");
        assert_eq!(shortened.len(), 2);
        assert_eq!(shortened.widths, vec![10.0, 10.0]);
        assert_eq!(shortened.positions.len(), 2);

        assert_eq!(detached.value, "，");
        assert_eq!(detached.widths, vec![10.0]);
        assert_eq!(detached.positions[0].coordinate.left_top.x, 20.0);
        assert_eq!(detached.style, shortened.style);
        assert_eq!(detached.color.as_deref(), Some("#333333"));
        assert_eq!((detached.x, detached.y), (5.0, 16.0));
    }

    #[test]
    fn test_detaches_ascii_punctuation_and_special_symbol() {
        let (shortened, detached) = split_trailing_symbol(run_of(&["a", "b", "!"]));
        assert_eq!(shortened.value, "ab");
        assert_eq!(detached.unwrap().value, "!");

        let (shortened, detached) = split_trailing_symbol(run_of(&["3", "0", "℃"]));
        assert_eq!(shortened.value, "30");
        assert_eq!(detached.unwrap().value, "℃");
    }

    #[test]
    fn test_keeps_letters() {
        let run = run_of(&["a", "b"]);
        let (unchanged, detached) = split_trailing_symbol(run.clone());

        assert_eq!(unchanged, run);
        assert!(detached.is_none());
    }

    #[test]
    fn test_keeps_singleton_run() {
        let run = run_of(&["，"]);
        let (unchanged, detached) = split_trailing_symbol(run.clone());

        assert_eq!(unchanged, run);
        assert!(detached.is_none());
    }
}
