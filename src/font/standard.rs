//! The PDF standard fonts.
//!
//! Every conforming reader ships these faces, so nothing is embedded: the
//! document only names the font and its encoding. Layout still needs advance
//! widths, which come from the Adobe font metric (AFM) tables below, in
//! thousandths of an em, for the WinAnsi encoding.

use crate::font::GlyphMetrics;
use crate::units::Pt;

/// A base-14 font that is referenced by name rather than embedded
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
}

/// Helvetica advances for 0x20..=0x7E
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A-M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N-Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a-m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n-z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

/// Helvetica-Bold advances for 0x20..=0x7E
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    333, 333, 584, 584, 584, 611, 975,
    // A-M
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    // N-Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    333, 278, 333, 584, 556, 333,
    // a-m
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    // n-z
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // {    |    }    ~
    389, 280, 389, 584,
];

/// WinAnsi code points 0x80..=0x9F that differ from Latin-1:
/// (unicode, code, helvetica advance, helvetica-bold advance)
#[rustfmt::skip]
const WINANSI_EXTRAS: [(char, u8, u16, u16); 27] = [
    ('€', 0x80, 556, 556), ('‚', 0x82, 222, 278), ('ƒ', 0x83, 556, 556),
    ('„', 0x84, 333, 500), ('…', 0x85, 1000, 1000), ('†', 0x86, 556, 556),
    ('‡', 0x87, 556, 556), ('ˆ', 0x88, 333, 333), ('‰', 0x89, 1000, 1000),
    ('Š', 0x8A, 667, 667), ('‹', 0x8B, 333, 333), ('Œ', 0x8C, 1000, 1000),
    ('Ž', 0x8E, 611, 611), ('‘', 0x91, 222, 278), ('’', 0x92, 222, 278),
    ('“', 0x93, 333, 500), ('”', 0x94, 333, 500), ('•', 0x95, 350, 350),
    ('–', 0x96, 556, 556), ('—', 0x97, 1000, 1000), ('˜', 0x98, 333, 333),
    ('™', 0x99, 1000, 1000), ('š', 0x9A, 500, 556), ('›', 0x9B, 333, 333),
    ('œ', 0x9C, 944, 944), ('ž', 0x9E, 500, 500), ('Ÿ', 0x9F, 667, 667),
];

impl StandardFont {
    /// The PostScript name readers use to look the font up
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    fn is_bold(&self) -> bool {
        matches!(self, StandardFont::HelveticaBold | StandardFont::CourierBold)
    }

    /// Ascender in thousandths of an em
    fn ascender(&self) -> i16 {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaBold => 718,
            StandardFont::Courier | StandardFont::CourierBold => 629,
        }
    }

    /// Descender in thousandths of an em (negative)
    fn descender(&self) -> i16 {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaBold => -207,
            StandardFont::Courier | StandardFont::CourierBold => -157,
        }
    }

    /// Advance of the glyph at a WinAnsi code, in thousandths of an em
    fn advance_of_code(&self, code: u8) -> u16 {
        let table = match self {
            StandardFont::Courier | StandardFont::CourierBold => return 600,
            StandardFont::Helvetica => &HELVETICA,
            StandardFont::HelveticaBold => &HELVETICA_BOLD,
        };

        match code {
            0x20..=0x7E => table[(code - 0x20) as usize],
            0x80..=0x9F => WINANSI_EXTRAS
                .iter()
                .find(|extra| extra.1 == code)
                .map(|&(_, _, regular, bold)| if self.is_bold() { bold } else { regular })
                .unwrap_or(table[(b'?' - 0x20) as usize]),
            // no-break space
            0xA0 => table[0],
            // accented latin-1; close enough to the base letters for wrapping purposes
            _ => 556,
        }
    }

    /// Advance of a character as it will be drawn (unencodable characters
    /// are drawn as `?`), in thousandths of an em
    pub fn advance(&self, ch: char) -> u16 {
        self.advance_of_code(winansi_code(ch).unwrap_or(b'?'))
    }

    /// Distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (self.ascender() as f32 / 1000.0)
    }

    /// Distance from the baseline to the bottom of the font at the given
    /// size; negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * (self.descender() as f32 / 1000.0)
    }
}

impl GlyphMetrics for StandardFont {
    fn text_width(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| self.advance(ch) as u32).sum();
        size * (units as f32 / 1000.0)
    }
}

/// Map a character to its WinAnsi code, if it has one
pub(crate) fn winansi_code(ch: char) -> Option<u8> {
    match ch as u32 {
        cp @ 0x20..=0x7E => Some(cp as u8),
        cp @ 0xA0..=0xFF => Some(cp as u8),
        _ => WINANSI_EXTRAS
            .iter()
            .find(|extra| extra.0 == ch)
            .map(|extra| extra.1),
    }
}

/// Encode text for a standard font's content stream, substituting `?` for
/// anything WinAnsi cannot express
pub(crate) fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| winansi_code(ch).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helvetica_widths() {
        let font = StandardFont::Helvetica;
        // H(722) e(556) l(222) l(222) o(556)
        assert!((*font.text_width("Hello", Pt(10.0)) - 22.78).abs() < 1e-4);
        assert_eq!(font.text_width(" ", Pt(11.0)), Pt(11.0 * 0.278));
    }

    #[test]
    fn bold_is_wider() {
        let text = "Widget Factory";
        assert!(
            StandardFont::HelveticaBold.text_width(text, Pt(11.0))
                > StandardFont::Helvetica.text_width(text, Pt(11.0))
        );
    }

    #[test]
    fn courier_is_monospaced() {
        assert_eq!(
            StandardFont::Courier.text_width("iiii", Pt(10.0)),
            StandardFont::Courier.text_width("MMMM", Pt(10.0))
        );
    }

    #[test]
    fn encodes_winansi() {
        assert_eq!(encode_winansi("a–b"), vec![b'a', 0x96, b'b']);
        assert_eq!(encode_winansi("é"), vec![0xE9]);
        assert_eq!(encode_winansi("日本"), b"??".to_vec());
    }

    #[test]
    fn unencodable_measures_as_question_mark() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.advance('日'), font.advance('?'));
        assert_eq!(font.advance('•'), 350);
    }
}
