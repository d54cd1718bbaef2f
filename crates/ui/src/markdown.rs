//! Minimal markdown-to-egui mapping for musing bodies: headings,
//! paragraphs, lists, emphasis, inline code and fenced code blocks.

use egui::text::LayoutJob;
use egui::{Color32, FontId, TextFormat};
use folio_protocol::ThemeToken;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::theme::{self, ThemeMode};

/// A renderable block: a laid-out text run plus the space below it.
pub struct Block {
    pub job: LayoutJob,
    pub space_after: f32,
    pub is_code: bool,
}

struct StyleState {
    heading: Option<HeadingLevel>,
    strong: bool,
    emphasis: bool,
    code: bool,
    list_depth: usize,
}

impl StyleState {
    fn font(&self) -> FontId {
        match self.heading {
            Some(HeadingLevel::H1) => FontId::proportional(26.0),
            Some(HeadingLevel::H2) => FontId::proportional(21.0),
            Some(HeadingLevel::H3) => FontId::proportional(17.0),
            Some(_) => FontId::proportional(15.0),
            None if self.code => FontId::monospace(13.0),
            None => FontId::proportional(14.5),
        }
    }

    fn color(&self, mode: ThemeMode) -> Color32 {
        let token = if self.heading.is_some() || self.strong {
            ThemeToken::TextPrimary
        } else if self.code {
            ThemeToken::Highlight
        } else {
            ThemeToken::TextSecondary
        };
        theme::resolve(token, mode)
    }

    fn format(&self, mode: ThemeMode) -> TextFormat {
        let mut format = TextFormat {
            font_id: self.font(),
            color: self.color(mode),
            ..Default::default()
        };
        format.italics = self.emphasis;
        format
    }
}

/// Parse a markdown body into renderable blocks.
pub fn to_blocks(markdown: &str, mode: ThemeMode) -> Vec<Block> {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut blocks = Vec::new();
    let mut job = LayoutJob::default();
    let mut state = StyleState {
        heading: None,
        strong: false,
        emphasis: false,
        code: false,
        list_depth: 0,
    };
    let mut in_code_block = false;

    let mut flush = |job: &mut LayoutJob, space: f32, is_code: bool| {
        if !job.text.is_empty() {
            blocks.push(Block {
                job: std::mem::take(job),
                space_after: space,
                is_code,
            });
        }
    };

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                flush(&mut job, 10.0, false);
                state.heading = Some(level);
            }
            Event::End(TagEnd::Heading(_)) => {
                flush(&mut job, 10.0, false);
                state.heading = None;
            }
            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => flush(&mut job, 12.0, false),
            Event::Start(Tag::List(_)) => state.list_depth += 1,
            Event::End(TagEnd::List(_)) => {
                state.list_depth = state.list_depth.saturating_sub(1);
                if state.list_depth == 0 {
                    flush(&mut job, 12.0, false);
                }
            }
            Event::Start(Tag::Item) => {
                let indent = "    ".repeat(state.list_depth.saturating_sub(1));
                job.append(&format!("{indent}•  "), 0.0, state.format(mode));
            }
            Event::End(TagEnd::Item) => {
                job.append("\n", 0.0, state.format(mode));
            }
            Event::Start(Tag::Strong) => state.strong = true,
            Event::End(TagEnd::Strong) => state.strong = false,
            Event::Start(Tag::Emphasis) => state.emphasis = true,
            Event::End(TagEnd::Emphasis) => state.emphasis = false,
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut job, 8.0, false);
                in_code_block = true;
                state.code = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                flush(&mut job, 12.0, true);
                in_code_block = false;
                state.code = false;
            }
            Event::Start(Tag::Link { .. }) | Event::End(TagEnd::Link) => {}
            Event::Text(text) => {
                job.append(&text, 0.0, state.format(mode));
            }
            Event::Code(code) => {
                let mut inline = state.format(mode);
                inline.font_id = FontId::monospace(13.0);
                inline.color = theme::resolve(ThemeToken::Highlight, mode);
                job.append(&code, 0.0, inline);
            }
            Event::SoftBreak => {
                job.append(if in_code_block { "\n" } else { " " }, 0.0, state.format(mode));
            }
            Event::HardBreak => {
                job.append("\n", 0.0, state.format(mode));
            }
            Event::Rule => {
                flush(&mut job, 16.0, false);
            }
            _ => {}
        }
    }
    flush(&mut job, 0.0, false);
    blocks
}

/// Lay the parsed blocks into a ui column.
pub fn show(ui: &mut egui::Ui, markdown: &str, mode: ThemeMode) {
    for block in to_blocks(markdown, mode) {
        if block.is_code {
            egui::Frame::group(ui.style())
                .fill(theme::resolve(ThemeToken::Surface, mode))
                .show(ui, |ui| {
                    ui.label(block.job);
                });
        } else {
            ui.label(block.job);
        }
        ui.add_space(block.space_after);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_headings_and_paragraphs() {
        let blocks = to_blocks("# Title\n\nOne.\n\nTwo.", ThemeMode::Dark);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].job.text, "Title");
        assert_eq!(blocks[1].job.text, "One.");
    }

    #[test]
    fn list_items_get_bullets() {
        let blocks = to_blocks("- a\n- b\n", ThemeMode::Dark);
        assert_eq!(blocks.len(), 1);
        let text = &blocks[0].job.text;
        assert_eq!(text.matches('•').count(), 2);
    }

    #[test]
    fn code_blocks_are_marked() {
        let blocks = to_blocks("```\nlet x = 1;\n```\n", ThemeMode::Dark);
        assert!(blocks.iter().any(|b| b.is_code));
    }

    #[test]
    fn heading_font_outranks_body() {
        let blocks = to_blocks("## Head\n\nBody text.", ThemeMode::Dark);
        let head_size = blocks[0].job.sections[0].format.font_id.size;
        let body_size = blocks[1].job.sections[0].format.font_id.size;
        assert!(head_size > body_size);
    }
}
