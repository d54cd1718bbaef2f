use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::model::SectionId;
use folio_core::page::{Interaction, Page};
use folio_protocol::{RenderCommand, ThemeToken, Viewport};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
};

/// Logical pixels per terminal column/row.
const CELL_W: f64 = 8.0;
const CELL_H: f64 = 20.0;
/// Rows scrolled per arrow key, in logical pixels.
const SCROLL_STEP: f64 = 60.0;

fn theme_to_color(token: ThemeToken) -> Color {
    use ThemeToken::*;
    match token {
        Background | NavBackground => Color::Black,
        Surface | NavBackgroundScrolled | TooltipBackground | CardBackground => {
            Color::Rgb(21, 21, 31)
        }
        Border | CardBorder | TagBorder | TagBackground => Color::DarkGray,
        TextPrimary | NavTextActive | TooltipText => Color::White,
        TextSecondary => Color::Gray,
        TextMuted | NavText | TagText | TextFaint => Color::DarkGray,
        Accent | NavUnderline | TimelineDotActive | ProgressFill | DiagramPulse
        | CardBorderActive | Highlight => Color::Magenta,
        AccentSoft | AccentGlow => Color::Rgb(43, 27, 68),
        TimelineAxis | GlobeWireframe | DiagramLine | ProgressTrack | TimelineDot => {
            Color::DarkGray
        }
        GlobeMarker | GlobeMarkerLabel => Color::White,
        GlobeMarkerBack => Color::DarkGray,
    }
}

struct Camera {
    tx: f64,
    ty: f64,
}

/// Interactive terminal rendering of the page: arrows scroll, number
/// keys jump to a section, `q` quits.
pub fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let mut scroll_y: f64 = 0.0;
    let viewport = Viewport::sized(1280.0, 800.0);
    let mut page = Page::new(&viewport)?;

    loop {
        let term_size = terminal.size()?;
        let page_width = f64::from(term_size.width) * CELL_W;
        let viewport = Viewport::sized(page_width, f64::from(term_size.height) * CELL_H);

        page.on_scroll(scroll_y, &viewport);
        page.on_work_scroll(0.0);
        page.on_hobby_scroll(0.0);

        let layout = page.layout(&viewport);
        let max_scroll = (layout.total_height - viewport.height).max(0.0);
        scroll_y = scroll_y.clamp(0.0, max_scroll);

        let rendered = page.render(&viewport, scroll_y, &Interaction::default());
        let active = page.active_section().unwrap_or("hero").to_string();

        terminal.draw(|frame| {
            let area = frame.area();

            // Header: section list with the active one highlighted.
            let header_area = Rect::new(0, 0, area.width, 1);
            let names: Vec<String> = SectionId::ALL
                .iter()
                .map(|s| {
                    if s.anchor() == active {
                        format!("[{}]", s.anchor())
                    } else {
                        s.anchor().to_string()
                    }
                })
                .collect();
            let header = Block::default()
                .title(format!(
                    " folio — {} | ↑↓ scroll | 1-8 jump | q quit ",
                    names.join(" ")
                ))
                .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(header, header_area);

            let content = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
            let buf = frame.buffer_mut();

            let mut cameras: Vec<Camera> = vec![Camera { tx: 0.0, ty: 0.0 }];
            for cmd in &rendered.page {
                let cam = cameras.last().map_or((0.0, 0.0), |c| (c.tx, c.ty));
                match cmd {
                    RenderCommand::PushTransform { translate, .. } => {
                        cameras.push(Camera {
                            tx: cam.0 + translate.x,
                            ty: cam.1 + translate.y,
                        });
                    }
                    RenderCommand::PopTransform => {
                        if cameras.len() > 1 {
                            cameras.pop();
                        }
                    }
                    RenderCommand::DrawText {
                        position,
                        text,
                        color,
                        ..
                    } => {
                        let col = ((cam.0 + position.x) / CELL_W) as i64;
                        let row = ((cam.1 + position.y - scroll_y) / CELL_H) as i64;
                        put_text(buf, content, col, row, text, theme_to_color(*color));
                    }
                    RenderCommand::DrawRect {
                        rect,
                        label: Some(label),
                        color,
                        ..
                    } => {
                        let col = ((cam.0 + rect.x) / CELL_W) as i64;
                        let row = ((cam.1 + rect.y - scroll_y) / CELL_H) as i64;
                        put_text(buf, content, col, row, label, theme_to_color(*color));
                    }
                    _ => {}
                }
            }
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up => scroll_y = (scroll_y - SCROLL_STEP).max(0.0),
                    KeyCode::Down => scroll_y += SCROLL_STEP,
                    KeyCode::PageUp => scroll_y = (scroll_y - viewport.height).max(0.0),
                    KeyCode::PageDown => scroll_y += viewport.height,
                    KeyCode::Char(c @ '1'..='8') => {
                        let index = c as usize - '1' as usize;
                        if let Some(section) = SectionId::ALL.get(index) {
                            scroll_y = layout.scroll_target(*section);
                        }
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => scroll_y += SCROLL_STEP,
                    MouseEventKind::ScrollUp => scroll_y = (scroll_y - SCROLL_STEP).max(0.0),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn put_text(
    buf: &mut ratatui::buffer::Buffer,
    area: Rect,
    col: i64,
    row: i64,
    text: &str,
    color: Color,
) {
    if row < 0 || row >= i64::from(area.height) {
        return;
    }
    let y = area.y + row as u16;
    for (i, ch) in text.chars().enumerate() {
        let x = col + i as i64;
        if x < 0 || x >= i64::from(area.width) {
            continue;
        }
        buf[(area.x + x as u16, y)]
            .set_char(ch)
            .set_fg(color)
            .set_bg(Color::Black);
    }
}
