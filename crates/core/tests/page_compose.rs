//! Integration test: build the full page, drive every tracker with
//! synthetic scroll positions, and verify active-state handoffs and the
//! composed command stream end to end.

use folio_core::model::SectionId;
use folio_core::page::{Interaction, Page};
use folio_core::svg::render_svg;
use folio_core::tracker::{
    DOCUMENT_REFERENCE_OFFSET, WINDOW_ENTER_FRACTION, WINDOW_EXIT_FRACTION,
};
use folio_core::views;
use folio_protocol::{RenderCommand, Viewport};

fn viewport() -> Viewport {
    Viewport::sized(1280.0, 800.0)
}

#[test]
fn full_page_scroll_walks_every_section() {
    let vp = viewport();
    let mut page = Page::new(&vp).expect("musing content should parse");
    let layout = page.layout(&vp);

    // Scroll the reference line through each section in turn; the nav
    // tracker must report exactly that section.
    for section in SectionId::ALL {
        let target = layout.scroll_target(section) + 10.0;
        page.on_scroll(target, &vp);
        assert_eq!(
            page.active_section(),
            Some(section.anchor()),
            "at scroll {target} the active section should be {section}"
        );
    }
    println!(
        "walked {} sections over {}px of page",
        layout.slots.len(),
        layout.total_height
    );
}

#[test]
fn gap_between_sections_keeps_previous_active() {
    let vp = viewport();
    let mut page = Page::new(&vp).expect("musing content should parse");
    page.on_scroll(0.0, &vp);
    assert_eq!(page.active_section(), Some("hero"));

    // Scroll far past the page end: every section top is above the
    // reference line's containment test except the last... and past the
    // very end nothing contains it, so the last value is retained.
    let layout = page.layout(&vp);
    page.on_scroll(layout.total_height + 500.0, &vp);
    let retained = page.active_section();
    assert!(retained.is_some(), "sticky active must never clear");
}

#[test]
fn project_list_scroll_hands_off_active_row() {
    let vp = viewport();
    let mut page = Page::new(&vp).expect("musing content should parse");

    page.on_work_scroll(0.0);
    let first = page.active_project(&Interaction::default());
    assert_eq!(first, 0, "list at rest should activate the first row");

    // Scroll the list far enough that the first row has left through the
    // exit threshold and a later row has entered.
    let enter_line = views::work::LIST_HEIGHT * WINDOW_ENTER_FRACTION;
    let exit_line = views::work::LIST_HEIGHT * WINDOW_EXIT_FRACTION;
    println!("container window: enter at {enter_line}px, exit at {exit_line}px");

    page.on_work_scroll(3.0 * views::work::ROW_HEIGHT);
    let later = page.active_project(&Interaction::default());
    assert!(later > 0, "scrolled list should move the active row on");

    // Hover overrides whatever the tracker says.
    let hovered = page.active_project(&Interaction {
        hovered_project: Some(5),
        ..Interaction::default()
    });
    assert_eq!(hovered, 5);
}

#[test]
fn hobby_carousel_tracks_centered_card() {
    let vp = viewport();
    let mut page = Page::new(&vp).expect("musing content should parse");

    page.on_hobby_scroll(0.0);
    assert_eq!(page.active_hobby(), Some(0));

    // Push the carousel to its far end. Cards 2 and 3 both sit in the
    // activation window; scan order picks the earlier one.
    let max_scroll = views::hobbies::carousel_content_width() - vp.width;
    page.on_hobby_scroll(max_scroll);
    assert_eq!(page.active_hobby(), Some(2));
}

#[test]
fn career_timeline_follows_document_scroll() {
    let vp = viewport();
    let mut page = Page::new(&vp).expect("musing content should parse");
    let layout = page.layout(&vp);
    let career_y = layout.scroll_target(SectionId::Experience);

    // Bring entry 0 into the window.
    page.on_scroll(career_y - 100.0, &vp);
    assert_eq!(page.active_experience(), Some(0));

    // Two strides further down, a later entry owns the window.
    page.on_scroll(career_y + 2.0 * views::career::ITEM_STRIDE, &vp);
    let later = page.active_experience();
    assert!(later > Some(0), "timeline should advance, got {later:?}");
}

#[test]
fn reference_line_constant_matches_document_policy() {
    // The nav tracker activates a section only once its box straddles
    // the 100px line; a section whose top sits just below it must not be
    // active yet.
    let vp = viewport();
    let mut page = Page::new(&vp).expect("musing content should parse");
    let layout = page.layout(&vp);
    let about_y = layout.scroll_target(SectionId::About);

    page.on_scroll(about_y - DOCUMENT_REFERENCE_OFFSET - 1.0, &vp);
    assert_eq!(
        page.active_section(),
        Some("hero"),
        "about's top is 1px below the reference line"
    );
    page.on_scroll(about_y - DOCUMENT_REFERENCE_OFFSET + 1.0, &vp);
    assert_eq!(page.active_section(), Some("about"));
}

#[test]
fn composed_stream_renders_to_svg() {
    let vp = viewport();
    let mut page = Page::new(&vp).expect("musing content should parse");
    page.on_scroll(0.0, &vp);
    let out = page.render(&vp, 0.0, &Interaction::default());

    assert!(!out.page.is_empty());
    assert!(!out.overlay.is_empty());

    // Balanced motion groups across the whole stream.
    let all: Vec<&RenderCommand> = out.page.iter().chain(out.overlay.iter()).collect();
    let begins = all
        .iter()
        .filter(|c| matches!(c, RenderCommand::BeginMotion { .. }))
        .count();
    let ends = all
        .iter()
        .filter(|c| matches!(c, RenderCommand::EndMotion))
        .count();
    assert_eq!(begins, ends, "unbalanced motion groups");

    let svg = render_svg(&out.page, vp.width, out.layout.total_height, true);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Aryan Sarswat"));
    assert!(svg.contains("Get In Touch."));
    println!("svg export: {} bytes", svg.len());
}
