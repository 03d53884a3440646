use crate::font::GlyphMetrics;
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::units::Pt;

/// Everything about a page that decides where lines land: size, margins,
/// the optional first-page title and the vertical rhythm.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub page_size: PageSize,
    pub margins: Margins,
    /// Heading drawn once, at the top of the first page
    pub title: Option<String>,
    pub title_size: Pt,
    /// How far the cursor drops after the title
    pub title_advance: Pt,
    pub body_size: Pt,
    /// Distance between consecutive body baselines, and the height of a blank line
    pub line_height: Pt,
}

impl Default for PageGeometry {
    /// A4, 50pt side and bottom margins, 60pt top margin, a 16pt "Projects"
    /// heading and 11pt body text on a 16pt grid
    fn default() -> Self {
        PageGeometry {
            page_size: pagesize::A4,
            margins: Margins::trbl(Pt(60.0), Pt(50.0), Pt(50.0), Pt(50.0)),
            title: Some("Projects".to_string()),
            title_size: Pt(16.0),
            title_advance: Pt(28.0),
            body_size: Pt(11.0),
            line_height: Pt(16.0),
        }
    }
}

impl PageGeometry {
    /// Horizontal budget for a line of text
    pub fn usable_width(&self) -> Pt {
        self.page_size.0 - self.margins.horizontal()
    }

    /// Baseline of the first line on a fresh page
    pub fn top(&self) -> Pt {
        self.page_size.1 - self.margins.top
    }

    /// Lowest baseline a line may be drawn at
    pub fn bottom(&self) -> Pt {
        self.margins.bottom
    }
}

/// What a placed line is
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineRole {
    Title,
    Body,
    /// A blank input line; takes up a line of space but draws nothing
    Spacer,
}

/// A line of text and the baseline position it was drawn at
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: Pt,
    pub y: Pt,
    pub role: LineRole,
}

/// The lines drawn on a single page, top to bottom
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

impl PageLayout {
    /// Whether nothing at all is drawn on the page
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.role == LineRole::Spacer)
    }
}

/// The result of laying text out over as many pages as it needs
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub pages: Vec<PageLayout>,
}

impl TextLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every placed line with the index of its page, in drawing order
    pub fn lines(&self) -> impl Iterator<Item = (usize, &PlacedLine)> + '_ {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| page.lines.iter().map(move |line| (index, line)))
    }

    /// Body lines only, in drawing order
    pub fn body_lines(&self) -> impl Iterator<Item = &PlacedLine> + '_ {
        self.lines()
            .map(|(_, line)| line)
            .filter(|line| line.role == LineRole::Body)
    }

    /// Every word drawn in the body, in order
    pub fn words(&self) -> Vec<&str> {
        self.body_lines()
            .flat_map(|line| line.text.split(' '))
            .collect()
    }

    /// Lines joined with newlines, spacers as empty lines, pages separated
    /// by a form feed
    pub fn to_plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| {
                page.lines
                    .iter()
                    .map(|line| line.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\u{000C}\n")
    }
}

/// Owns the vertical cursor while a layout is in progress
struct Cursor<'g> {
    geometry: &'g PageGeometry,
    pages: Vec<PageLayout>,
    y: Pt,
}

impl<'g> Cursor<'g> {
    fn new(geometry: &'g PageGeometry) -> Cursor<'g> {
        Cursor {
            geometry,
            pages: vec![PageLayout::default()],
            y: geometry.top(),
        }
    }

    fn advance(&mut self, distance: Pt) {
        self.y -= distance;
    }

    /// Start a new page once the cursor has dropped below the bottom margin
    fn break_if_exhausted(&mut self) {
        if self.y < self.geometry.bottom() {
            self.pages.push(PageLayout::default());
            self.y = self.geometry.top();
            log::debug!("page break, starting page {}", self.pages.len());
        }
    }

    fn place(&mut self, text: String, role: LineRole) {
        let line = PlacedLine {
            text,
            x: self.geometry.margins.left,
            y: self.y,
            role,
        };
        log::trace!("page {} y={}: {:?}", self.pages.len(), *line.y, line.text);
        // there is always at least one page
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
    }

    /// Leave a blank line. One that falls below the bottom margin is
    /// absorbed by the page break and not recorded.
    fn skip_line(&mut self) {
        if self.y >= self.geometry.bottom() {
            self.place(String::new(), LineRole::Spacer);
        }
        self.advance(self.geometry.line_height);
        self.break_if_exhausted();
    }

    /// Draw an accumulated line and move down to the next one
    fn flush(&mut self, line: &mut String) {
        self.break_if_exhausted();
        self.place(std::mem::take(line), LineRole::Body);
        self.advance(self.geometry.line_height);
    }

    fn finish(mut self) -> TextLayout {
        // trailing blank lines may have opened pages nothing is drawn on
        while self.pages.len() > 1 && self.pages.last().is_some_and(PageLayout::is_blank) {
            self.pages.pop();
        }
        if let Some(page) = self.pages.last_mut() {
            while page.lines.last().is_some_and(|l| l.role == LineRole::Spacer) {
                page.lines.pop();
            }
        }
        TextLayout { pages: self.pages }
    }
}

/// Lays text out over fixed-size pages, greedily wrapping words to the usable width.
///
/// Each `\n`-separated line of the input is handled in turn:
///
/// * a blank line drops the cursor by one line height and draws nothing,
///   though it is kept as a [`LineRole::Spacer`];
/// * while a title is set, a first non-blank line that repeats it is taken
///   as the heading and not drawn a second time;
/// * otherwise its words are packed onto rendered lines, measuring each
///   candidate (`line + " " + word`) with `metrics` at the body size. A word
///   that would push the line past the usable width starts the next line.
///
/// Before any line is drawn, a cursor that has fallen below the bottom margin
/// moves to the top of a fresh page. A word that is wider than the page on its
/// own is drawn alone and overflows the right margin; words are never split.
///
/// Whitespace runs collapse to a single space. This never fails: empty text
/// yields a single page holding only the title, if there is one.
///
/// ```
/// use cv_pdf::StandardFont;
/// use cv_pdf::layout::{layout_text_paginated, PageGeometry};
///
/// let geometry = PageGeometry::default();
/// let layout = layout_text_paginated("A\n\nB", &geometry, &StandardFont::Helvetica);
/// let ys: Vec<f32> = layout.body_lines().map(|line| *line.y).collect();
/// assert_eq!(ys[0] - ys[1], 32.0);
/// ```
pub fn layout_text_paginated<M: GlyphMetrics + ?Sized>(
    text: &str,
    geometry: &PageGeometry,
    metrics: &M,
) -> TextLayout {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let usable_width = geometry.usable_width();
    let mut cursor = Cursor::new(geometry);

    let mut heading = geometry.title.as_deref().map(str::trim);
    if let Some(title) = &geometry.title {
        cursor.place(title.clone(), LineRole::Title);
        cursor.advance(geometry.title_advance);
    }

    for logical_line in text.split('\n') {
        let logical_line = logical_line.trim();
        if logical_line.is_empty() {
            cursor.skip_line();
            continue;
        }
        if heading.take() == Some(logical_line) {
            log::trace!("{logical_line:?} repeats the title, not drawing it again");
            continue;
        }

        let mut current = String::new();
        for word in logical_line.split_whitespace() {
            if !current.is_empty() {
                let candidate = format!("{current} {word}");
                if metrics.text_width(&candidate, geometry.body_size) <= usable_width {
                    current = candidate;
                    continue;
                }
                cursor.flush(&mut current);
            }

            // the word starts a line, and stays on it even if it doesn't fit
            if metrics.text_width(word, geometry.body_size) > usable_width {
                log::warn!("{word:?} is wider than the page and will overflow the margin");
            }
            current.push_str(word);
        }

        if !current.is_empty() {
            cursor.flush(&mut current);
        }
    }

    let layout = cursor.finish();
    log::debug!(
        "laid out {} line(s) over {} page(s)",
        layout.body_lines().count(),
        layout.page_count()
    );
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StandardFont;

    /// Every character is 10pt wide, whatever the size
    struct Fixed;

    impl GlyphMetrics for Fixed {
        fn text_width(&self, text: &str, _size: Pt) -> Pt {
            Pt(text.chars().count() as f32 * 10.0)
        }
    }

    /// 100pt of usable width, so ten characters per line
    fn narrow() -> PageGeometry {
        PageGeometry {
            page_size: (Pt(120.0), Pt(200.0)),
            margins: Margins::trbl(Pt(20.0), Pt(10.0), Pt(20.0), Pt(10.0)),
            title: None,
            title_size: Pt(16.0),
            title_advance: Pt(28.0),
            body_size: Pt(10.0),
            line_height: Pt(20.0),
        }
    }

    fn texts(layout: &TextLayout) -> Vec<&str> {
        layout.body_lines().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn wraps_greedily() {
        let layout = layout_text_paginated("aaa bbb ccc dddd e", &narrow(), &Fixed);
        assert_eq!(texts(&layout), vec!["aaa bbb", "ccc dddd e"]);
    }

    #[test]
    fn candidate_exactly_at_width_fits() {
        let layout = layout_text_paginated("aaaa bbbbb c", &narrow(), &Fixed);
        assert_eq!(texts(&layout), vec!["aaaa bbbbb", "c"]);
    }

    #[test]
    fn overlong_word_is_drawn_alone() {
        let layout = layout_text_paginated("ab abcdefghijklmnop cd", &narrow(), &Fixed);
        assert_eq!(texts(&layout), vec!["ab", "abcdefghijklmnop", "cd"]);
    }

    #[test]
    fn whitespace_collapses_and_space_only_lines_are_blank() {
        let layout = layout_text_paginated("  a \t  b  \n    \nc", &narrow(), &Fixed);
        assert_eq!(texts(&layout), vec!["a b", "c"]);
        let ys: Vec<Pt> = layout.body_lines().map(|line| line.y).collect();
        assert_eq!(ys, vec![Pt(180.0), Pt(140.0)]);
    }

    #[test]
    fn carriage_returns_split_lines() {
        let layout = layout_text_paginated("a\r\nb\rc", &narrow(), &Fixed);
        assert_eq!(texts(&layout), vec!["a", "b", "c"]);
    }

    #[test]
    fn breaks_pages_below_the_bottom_margin() {
        // baselines at 180, 160, .. 20 fit; 0 does not
        let text = vec!["x"; 10].join("\n");
        let layout = layout_text_paginated(&text, &narrow(), &Fixed);
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.pages[0].lines.len(), 9);
        assert_eq!(layout.pages[0].lines.last().map(|l| l.y), Some(Pt(20.0)));
        assert_eq!(layout.pages[1].lines[0].y, Pt(180.0));
    }

    #[test]
    fn trailing_blank_lines_do_not_add_pages() {
        let text = format!("{}\n\n\n\n", vec!["x"; 9].join("\n"));
        let layout = layout_text_paginated(&text, &narrow(), &Fixed);
        assert_eq!(layout.page_count(), 1);
    }

    #[test]
    fn blank_line_at_the_bottom_moves_to_the_next_page() {
        // nine lines fill the page; the blank overflows and the next line starts page 2
        let text = format!("{}\n\ny", vec!["x"; 9].join("\n"));
        let layout = layout_text_paginated(&text, &narrow(), &Fixed);
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.pages[1].lines[0].text, "y");
        assert_eq!(layout.pages[1].lines[0].y, Pt(180.0));
    }

    #[test]
    fn empty_text_is_just_the_title() {
        let geometry = PageGeometry::default();
        let layout = layout_text_paginated("", &geometry, &StandardFont::Helvetica);
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.pages[0].lines.len(), 1);
        assert_eq!(layout.pages[0].lines[0].role, LineRole::Title);
        assert_eq!(layout.pages[0].lines[0].text, "Projects");
        assert_eq!(layout.pages[0].lines[0].y, geometry.top());
    }

    #[test]
    fn repeated_title_is_not_drawn_twice() {
        let geometry = PageGeometry {
            title: Some("Projects".into()),
            ..narrow()
        };
        let layout = layout_text_paginated(" Projects \n\nabc\nProjects", &geometry, &Fixed);
        assert_eq!(layout.pages[0].lines[0].role, LineRole::Title);
        // only the first non-blank line counts as the heading
        assert_eq!(texts(&layout), vec!["abc", "Projects"]);
        let ys: Vec<Pt> = layout.body_lines().map(|line| line.y).collect();
        assert_eq!(ys, vec![Pt(152.0 - 20.0), Pt(152.0 - 40.0)]);
    }

    #[test]
    fn untitled_layouts_keep_every_line() {
        let layout = layout_text_paginated("Projects\nabc", &narrow(), &Fixed);
        assert_eq!(texts(&layout), vec!["Projects", "abc"]);
    }

    #[test]
    fn blank_lines_are_kept_as_spacers() {
        let layout = layout_text_paginated("a\n\n\nb\n\n", &narrow(), &Fixed);
        let roles: Vec<LineRole> = layout.lines().map(|(_, line)| line.role).collect();
        assert_eq!(
            roles,
            vec![LineRole::Body, LineRole::Spacer, LineRole::Spacer, LineRole::Body]
        );
        assert_eq!(layout.to_plain_text(), "a\n\n\nb");
    }

    #[test]
    fn spacers_below_the_margin_are_dropped() {
        let text = format!("{}\n\n\n\ny", vec!["x"; 9].join("\n"));
        let layout = layout_text_paginated(&text, &narrow(), &Fixed);
        assert_eq!(layout.page_count(), 2);
        assert!(layout.pages[0].lines.iter().all(|l| l.role == LineRole::Body));
        let page_two: Vec<(LineRole, Pt)> =
            layout.pages[1].lines.iter().map(|l| (l.role, l.y)).collect();
        assert_eq!(
            page_two,
            vec![
                (LineRole::Spacer, Pt(180.0)),
                (LineRole::Spacer, Pt(160.0)),
                (LineRole::Body, Pt(140.0)),
            ]
        );
    }

    #[test]
    fn plain_text_separates_pages() {
        let text = vec!["x"; 10].join("\n");
        let layout = layout_text_paginated(&text, &narrow(), &Fixed);
        let plain = layout.to_plain_text();
        assert_eq!(plain.matches('\u{000C}').count(), 1);
        assert_eq!(plain.lines().filter(|l| *l == "x").count(), 10);
    }
}
