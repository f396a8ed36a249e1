//! Block glyphs for the big clock

/// Rows per glyph
pub const HEIGHT: usize = 5;

type Glyph = [&'static str; HEIGHT];

const ZERO: Glyph = ["████████", "███  ███", "███  ███", "███  ███", "████████"];
const ONE: Glyph = ["   ███  ", "   ███  ", "   ███  ", "   ███  ", "   ███  "];
const TWO: Glyph = ["████████", "     ███", "████████", "███     ", "████████"];
const THREE: Glyph = ["████████", "     ███", "████████", "     ███", "████████"];
const FOUR: Glyph = ["███  ███", "███  ███", "████████", "     ███", "     ███"];
const FIVE: Glyph = ["████████", "███     ", "████████", "     ███", "████████"];
const SIX: Glyph = ["████████", "███     ", "████████", "███  ███", "████████"];
const SEVEN: Glyph = ["████████", "     ███", "     ███", "     ███", "     ███"];
const EIGHT: Glyph = ["████████", "███  ███", "████████", "███  ███", "████████"];
const NINE: Glyph = ["████████", "███  ███", "████████", "     ███", "████████"];
const COLON: Glyph = ["     ", " ███ ", "     ", " ███ ", "     "];

fn glyph(c: char) -> Option<&'static Glyph> {
    match c {
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        ':' => Some(&COLON),
        _ => None,
    }
}

/// Render `text` as rows of block glyphs. Unknown characters are skipped.
pub fn render(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); HEIGHT];
    for glyph in text.chars().filter_map(glyph) {
        for (row, part) in rows.iter_mut().zip(glyph.iter()) {
            row.push_str(part);
            row.push(' ');
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_clock_shape() {
        let rows = render("25:00");
        assert_eq!(rows.len(), HEIGHT);
        // Four 8-wide digits and a 5-wide colon, each followed by a space
        let width = 4 * 9 + 6;
        assert!(rows.iter().all(|r| r.chars().count() == width));
    }

    #[test]
    fn test_render_skips_unknown() {
        assert_eq!(render("1x"), render("1"));
        assert!(render("").iter().all(String::is_empty));
    }

    #[test]
    fn test_every_digit_has_a_glyph() {
        for c in "0123456789:".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {c}");
        }
    }
}
