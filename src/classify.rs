//! Character classification used by run batching, punctuation fixup and
//! right-to-left reordering.
//!
//! Fixup and reordering must agree on what counts as punctuation, so both go
//! through the predicates here and never test code points on their own.

/// Values whose width counts as trailing punctuation during line breaking.
pub const PUNCTUATION_LIST: &[&str] = &[
    "·", "、", ":", "：", ",", "，", ".", "。", ";", "；", "?", "？", "!", "！",
];

/// Unit symbols that get detached from the end of a run like punctuation.
pub const SPECIAL_CHARACTERS: &[char] = &['℃'];

/// Hebrew, Arabic, Syriac, Thaana, N'Ko, Samaritan and Mandaic blocks.
fn is_rtl_script(c: char) -> bool {
    let cp = c as u32;
    // Hebrew (0590-05FF), Arabic (0600-06FF)
    (0x0590..=0x06FF).contains(&cp)
    // Syriac (0700-074F), Arabic Supplement (0750-077F), Thaana (0780-07BF)
    || (0x0700..=0x07BF).contains(&cp)
    // NKo (07C0-07FF)
    || (0x07C0..=0x07FF).contains(&cp)
    // Samaritan (0800-083F), Mandaic (0840-085F), Syriac Supplement (0860-086F)
    || (0x0800..=0x086F).contains(&cp)
    // Arabic Extended-A (08A0-08FF)
    || (0x08A0..=0x08FF).contains(&cp)
}

/// CJK symbols and punctuation, plus the full-width forms of ASCII punctuation.
pub fn is_cjk_punctuation(c: char) -> bool {
    let cp = c as u32;
    (0x3001..=0x303F).contains(&cp)
        || (0xFF01..=0xFF0F).contains(&cp)
        || (0xFF1A..=0xFF20).contains(&cp)
}

/// `!` through `/` and `:` through `@`.
pub fn is_ascii_punctuation(c: char) -> bool {
    let cp = c as u32;
    (0x21..=0x2F).contains(&cp) || (0x3A..=0x40).contains(&cp)
}

pub fn is_special_character(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

/// Whether `c` pushes its run towards the right-to-left side during reordering.
///
/// Punctuation is deliberately treated as right-to-left so that it follows
/// the run it was typed after.
pub fn is_rtl_character(c: char) -> bool {
    is_rtl_script(c) || is_cjk_punctuation(c) || is_ascii_punctuation(c)
}

/// Whether a run ending in `c` should hand `c` over to the following run.
pub fn is_trailing_symbol(c: char) -> bool {
    is_special_character(c) || is_cjk_punctuation(c) || is_ascii_punctuation(c)
}

pub fn is_punctuation(value: &str) -> bool {
    PUNCTUATION_LIST.contains(&value)
}

/// Default letter predicate for word measurement: the value holds a Latin letter.
pub fn is_latin_letter(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rtl_scripts() {
        assert!(is_rtl_character('א')); // Hebrew alef
        assert!(is_rtl_character('ب')); // Arabic beh
        assert!(is_rtl_character('\u{0710}')); // Syriac alaph
        assert!(is_rtl_character('\u{0780}')); // Thaana haa
        assert!(is_rtl_character('\u{07CA}')); // NKo a
        assert!(is_rtl_character('\u{0800}')); // Samaritan alaf
        assert!(is_rtl_character('\u{0840}')); // Mandaic halqa
        assert!(is_rtl_character('\u{08A0}'));
    }

    #[test]
    fn test_ltr_characters() {
        for c in ['A', 'z', '0', '9', ' ', '中', 'é', '\u{0870}', '\u{0900}'] {
            assert!(!is_rtl_character(c), "{c:?} must not be rtl");
        }
    }

    #[test]
    fn test_punctuation_counts_as_rtl() {
        for c in ['!', '/', ',', '.', ':', '@', '?', '、', '。', '〿', '，', '！', '？'] {
            assert!(is_rtl_character(c), "{c:?} must be rtl");
            assert!(is_trailing_symbol(c), "{c:?} must be a trailing symbol");
        }
    }

    #[test]
    fn test_special_character_set_is_literal() {
        assert!(is_special_character('℃'));
        assert!(!is_special_character('℉'));
        assert!(!is_special_character('°'));
        assert!(is_trailing_symbol('℃'));
        assert!(!is_rtl_character('℃'));
    }

    #[test]
    fn test_trailing_symbol_excludes_letters() {
        for c in ['a', 'ب', '中', ' ', '['] {
            assert!(!is_trailing_symbol(c), "{c:?}");
        }
    }

    #[test]
    fn test_punctuation_list() {
        assert!(is_punctuation("，"));
        assert!(is_punctuation("."));
        assert!(!is_punctuation("a"));
        assert!(!is_punctuation(".."));
    }

    #[test]
    fn test_latin_letter() {
        assert!(is_latin_letter("a"));
        assert!(is_latin_letter("Z"));
        assert!(!is_latin_letter("1"));
        assert!(!is_latin_letter("中"));
        assert!(!is_latin_letter(""));
    }
}
