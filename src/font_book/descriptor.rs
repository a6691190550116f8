/// Parsed form of a canvas font string such as `"italic bold 16px Noto Sans, serif"`.
///
/// Only the parts that select a face are kept: style, weight, pixel size
/// and the family list. Variants and stretch keywords are skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    pub families: Vec<String>,
    pub size: f32,
    pub weight: fontdb::Weight,
    pub style: fontdb::Style,
}

impl FontDescriptor {
    /// Returns `None` when the string carries no `<number>px` size.
    pub fn parse(descriptor: &str) -> Option<Self> {
        let mut weight = fontdb::Weight::NORMAL;
        let mut style = fontdb::Style::Normal;

        let mut tokens = descriptor.split_whitespace();
        let size = loop {
            let token = tokens.next()?;
            if let Some(size) = parse_pixel_size(token) {
                break size;
            }
            match token.to_ascii_lowercase().as_str() {
                "italic" => style = fontdb::Style::Italic,
                "oblique" => style = fontdb::Style::Oblique,
                "bold" | "bolder" => weight = fontdb::Weight::BOLD,
                "lighter" => weight = fontdb::Weight::LIGHT,
                other => {
                    if let Ok(value) = other.parse::<u16>()
                        && (1..=1000).contains(&value)
                    {
                        weight = fontdb::Weight(value);
                    }
                }
            }
        };

        let rest = tokens.collect::<Vec<_>>().join(" ");
        let mut families: Vec<String> = rest
            .split(',')
            .map(|family| family.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|family| !family.is_empty())
            .collect();
        if families.is_empty() {
            families.push("sans-serif".to_string());
        }

        Some(Self {
            families,
            size,
            weight,
            style,
        })
    }

    /// Family list in the form fontdb queries expect, generic names mapped.
    pub fn query_families(&self) -> Vec<fontdb::Family<'_>> {
        self.families
            .iter()
            .map(|family| match family.to_ascii_lowercase().as_str() {
                "serif" => fontdb::Family::Serif,
                "sans-serif" => fontdb::Family::SansSerif,
                "monospace" => fontdb::Family::Monospace,
                "cursive" => fontdb::Family::Cursive,
                "fantasy" => fontdb::Family::Fantasy,
                _ => fontdb::Family::Name(family.as_str()),
            })
            .collect()
    }
}

/// `"16px"` and `"16px/1.5"` both yield 16.
fn parse_pixel_size(token: &str) -> Option<f32> {
    let size = token.split('/').next()?.strip_suffix("px")?;
    let size = size.parse::<f32>().ok()?;
    (size > 0.0).then_some(size)
}
