//! JS-host bridge: render sections to JSON command lists, evaluate
//! scroll positions against the page's trackers, and export SVG.

use std::sync::Mutex;

use folio_core::model::SectionId;
use folio_core::page::{Interaction, Page};
use folio_core::parsers::parse_frontmatter;
use folio_core::svg::render_svg;
use folio_protocol::Viewport;
use wasm_bindgen::prelude::*;

static PAGE: Mutex<Option<Page>> = Mutex::new(None);

fn with_page<T>(f: impl FnOnce(&mut Page, &Viewport) -> T, width: f64, height: f64) -> Result<T, JsError> {
    let viewport = Viewport::sized(width, height);
    let mut guard = PAGE.lock().map_err(|_| JsError::new("page lock poisoned"))?;
    if guard.is_none() {
        let page = Page::new(&viewport).map_err(|e| JsError::new(&e.to_string()))?;
        *guard = Some(page);
    }
    let page = guard.as_mut().ok_or_else(|| JsError::new("page missing"))?;
    page.resize(&viewport);
    Ok(f(page, &viewport))
}

/// Feed a document scroll position; returns the active section anchor.
#[wasm_bindgen]
pub fn evaluate_scroll(scroll_y: f64, width: f64, height: f64) -> Result<Option<String>, JsError> {
    with_page(
        |page, viewport| {
            page.on_scroll(scroll_y, viewport);
            page.active_section().map(str::to_string)
        },
        width,
        height,
    )
}

/// Render the whole page as a JSON `RenderCommand` list.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn render_page(
    scroll_y: f64,
    width: f64,
    height: f64,
    work_scroll: f64,
    hobby_scroll: f64,
    globe_yaw: f64,
    pulse_phase: f64,
    active_day: usize,
) -> Result<String, JsError> {
    with_page(
        |page, viewport| {
            page.on_scroll(scroll_y, viewport);
            page.on_work_scroll(work_scroll);
            page.on_hobby_scroll(hobby_scroll);
            let interaction = Interaction {
                work_scroll,
                hobby_scroll,
                globe_yaw,
                pulse_phase,
                active_day,
                ..Interaction::default()
            };
            let rendered = page.render(viewport, scroll_y, &interaction);
            serde_json::to_string(&rendered.page).map_err(|e| JsError::new(&e.to_string()))
        },
        width,
        height,
    )?
}

/// Section anchors in document order, with their layout offsets, as JSON
/// `[{"anchor": "...", "y": 0.0, "height": 0.0}, ...]`.
#[wasm_bindgen]
pub fn section_layout(width: f64, height: f64) -> Result<String, JsError> {
    with_page(
        |page, viewport| {
            let layout = page.layout(viewport);
            let rows: Vec<serde_json::Value> = layout
                .slots
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "anchor": s.id.anchor(),
                        "y": s.y,
                        "height": s.height,
                    })
                })
                .collect();
            serde_json::to_string(&rows).map_err(|e| JsError::new(&e.to_string()))
        },
        width,
        height,
    )?
}

/// Parse a raw musing document into its metadata + body, as JSON.
#[wasm_bindgen]
pub fn parse_musing(raw: &str) -> Result<String, JsError> {
    let (meta, body) = parse_frontmatter(raw);
    let value = serde_json::json!({
        "title": meta.title,
        "date": meta.date,
        "tags": meta.tags,
        "description": meta.description,
        "body": body,
    });
    serde_json::to_string(&value).map_err(|e| JsError::new(&e.to_string()))
}

/// Static SVG export of the full page.
#[wasm_bindgen]
pub fn export_svg(width: f64, height: f64, dark: bool) -> Result<String, JsError> {
    with_page(
        |page, viewport| {
            page.on_scroll(0.0, viewport);
            let rendered = page.render(viewport, 0.0, &Interaction::default());
            render_svg(
                &rendered.page,
                viewport.width,
                rendered.layout.total_height,
                dark,
            )
        },
        width,
        height,
    )
}

/// Number of page sections, for host-side navigation UIs.
#[wasm_bindgen]
pub fn section_count() -> usize {
    SectionId::ALL.len()
}
