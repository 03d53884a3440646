use cv_pdf::layout::{layout_text_paginated, LineRole, PageGeometry, TextLayout};
use cv_pdf::{GlyphMetrics, Pt, RenderConfig, StandardFont};
use proptest::prelude::*;

fn body_texts(layout: &TextLayout) -> Vec<&str> {
    layout.body_lines().map(|line| line.text.as_str()).collect()
}

const SCENARIO: &str =
    "Projects\n\n- Widget Factory\n  - Builds widgets at scale\n  - Tech stack: Rust, Kubernetes\n";

#[test]
fn projects_scenario_with_heading() {
    let config = RenderConfig::default();
    let geometry = &config.geometry;
    let layout = config.layout(SCENARIO);

    assert_eq!(layout.page_count(), 1);
    let title = &layout.pages[0].lines[0];
    assert_eq!(title.role, LineRole::Title);
    assert_eq!(title.text, "Projects");
    assert_eq!(title.y, geometry.top());
    assert_eq!(title.x, Pt(50.0));

    // the heading line in the text is the title, drawn once
    assert_eq!(
        body_texts(&layout),
        vec!["- Widget Factory", "- Builds widgets at scale", "- Tech stack: Rust, Kubernetes"]
    );

    // one spacer below the title, then three lines 16pt apart
    let y0 = geometry.top() - geometry.title_advance;
    let placed: Vec<(LineRole, Pt)> = layout.lines().map(|(_, l)| (l.role, l.y)).collect();
    assert_eq!(
        placed,
        vec![
            (LineRole::Title, geometry.top()),
            (LineRole::Spacer, y0),
            (LineRole::Body, y0 - Pt(16.0)),
            (LineRole::Body, y0 - Pt(32.0)),
            (LineRole::Body, y0 - Pt(48.0)),
        ]
    );
}

#[test]
fn projects_scenario_heading_from_text() {
    let mut config = RenderConfig::default();
    config.without_title();
    let top = config.geometry.top();
    let layout = config.layout(SCENARIO);

    let ys: Vec<Pt> = layout.body_lines().map(|line| line.y).collect();
    assert_eq!(ys, vec![top, top - Pt(32.0), top - Pt(48.0), top - Pt(64.0)]);
}

#[test]
fn blank_line_is_its_own_advance() {
    let config = RenderConfig::default();
    let layout = config.layout("A\n\nB");
    let ys: Vec<Pt> = layout.body_lines().map(|line| line.y).collect();
    assert_eq!(ys.len(), 2);
    assert_eq!(ys[0] - ys[1], Pt(32.0));
}

#[test]
fn first_page_capacity_and_reset() {
    let config = RenderConfig::default();
    let g = &config.geometry;
    let room = g.top() - g.title_advance - g.bottom();
    let capacity = (room / g.line_height).floor() as usize + 1;
    assert_eq!(capacity, 44);

    let fits = vec!["line"; capacity].join("\n");
    assert_eq!(config.layout(&fits).page_count(), 1);

    let overflows = vec!["line"; capacity + 1].join("\n");
    let layout = config.layout(&overflows);
    assert_eq!(layout.page_count(), 2);
    assert_eq!(layout.pages[0].lines.len(), capacity + 1);
    assert_eq!(layout.pages[1].lines.len(), 1);
    assert_eq!(layout.pages[1].lines[0].y, g.top());
    assert_eq!(layout.pages[1].lines[0].role, LineRole::Body);
}

#[test]
fn later_pages_have_no_title() {
    let config = RenderConfig::default();
    let text = vec!["line"; 200].join("\n");
    let layout = config.layout(&text);
    assert!(layout.page_count() >= 4);
    let titles: Vec<usize> = layout
        .lines()
        .filter(|(_, line)| line.role == LineRole::Title)
        .map(|(page, _)| page)
        .collect();
    assert_eq!(titles, vec![0]);
}

#[test]
fn long_paragraph_wraps_within_the_margins() {
    let config = RenderConfig::default();
    let text = lipsum::lipsum(400);
    let layout = config.layout(&text);
    let usable = config.geometry.usable_width();
    let body_size = config.geometry.body_size;

    assert!(layout.body_lines().count() > 20);
    for line in layout.body_lines() {
        assert!(StandardFont::Helvetica.text_width(&line.text, body_size) <= usable);
    }
    assert_eq!(layout.words(), text.split_whitespace().collect::<Vec<_>>());
}

#[test]
fn custom_metrics_drive_wrapping() {
    /// Pretends every character is a full em wide
    struct EmWide;

    impl GlyphMetrics for EmWide {
        fn text_width(&self, text: &str, size: Pt) -> Pt {
            size * text.chars().count() as f32
        }
    }

    let geometry = PageGeometry {
        title: None,
        ..PageGeometry::default()
    };
    // 495.28pt at 11pt per character leaves room for 45 characters, so nine words
    let text = vec!["abcd"; 20].join(" ");
    let layout = layout_text_paginated(&text, &geometry, &EmWide);
    let lines = body_texts(&layout);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].len(), 44);
    assert_eq!(lines[2], "abcd abcd");
}

fn text_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        8 => "[A-Za-z0-9,.:()-]{1,12}",
        3 => Just(" ".to_string()),
        2 => Just("\n".to_string()),
        1 => Just("  \t \n".to_string()),
        1 => "[a-z]{80,120}",
    ];
    prop::collection::vec(piece, 0..400).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn layout_is_deterministic(text in text_strategy()) {
        let config = RenderConfig::default();
        prop_assert_eq!(config.layout(&text), config.layout(&text));
    }

    #[test]
    fn no_words_are_lost(text in text_strategy()) {
        let config = RenderConfig::default();
        let first = text.split('\n').map(str::trim).find(|line| !line.is_empty());
        prop_assume!(first != Some("Projects"));
        let layout = config.layout(&text);
        prop_assert_eq!(layout.words(), text.split_whitespace().collect::<Vec<_>>());
    }

    #[test]
    fn multi_word_lines_fit(text in text_strategy()) {
        let config = RenderConfig::default();
        let usable = config.geometry.usable_width();
        let layout = config.layout(&text);
        for line in layout.body_lines().filter(|line| line.text.contains(' ')) {
            let width = StandardFont::Helvetica.text_width(&line.text, config.geometry.body_size);
            prop_assert!(width <= usable, "{:?} is {} wide", line.text, width);
        }
    }

    #[test]
    fn lines_stay_between_the_margins(text in text_strategy()) {
        let config = RenderConfig::default();
        let g = &config.geometry;
        let layout = config.layout(&text);
        for (_, line) in layout.lines() {
            prop_assert!(line.y >= g.bottom() && line.y <= g.top());
            prop_assert_eq!(line.x, g.margins.left);
        }
        let last_drawn = layout.pages.last().is_some_and(|page| !page.is_blank());
        prop_assert!(layout.pages.len() == 1 || last_drawn);
    }
}
