//! Markdown to styled terminal lines, for blog posts.
//!
//! Handles the block elements the posts use (headings, paragraphs, bullet
//! lists) and inline emphasis, code and links.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const HEADING_COLOR: Color = Color::Cyan;
const CODE_COLOR: Color = Color::Rgb(200, 160, 100);
const LINK_COLOR: Color = Color::Rgb(100, 180, 220);

pub fn render(source: &str) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH);

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut style = Style::default();
    let mut style_stack: Vec<Style> = Vec::new();
    let mut list_depth = 0usize;

    // Blank line between blocks, never two in a row and never at the top
    let separate = |lines: &mut Vec<Line<'static>>| {
        if lines.last().is_some_and(|l| !l.spans.is_empty()) {
            lines.push(Line::default());
        }
    };

    for event in parser {
        match event {
            Event::Start(tag) => {
                style_stack.push(style);
                match tag {
                    Tag::Heading { level, .. } => {
                        separate(&mut lines);
                        style = Style::new().fg(HEADING_COLOR).add_modifier(Modifier::BOLD);
                        if level == HeadingLevel::H1 {
                            style = style.add_modifier(Modifier::UNDERLINED);
                        }
                    }
                    Tag::Paragraph if list_depth == 0 => separate(&mut lines),
                    Tag::List(_) => {
                        if list_depth == 0 {
                            separate(&mut lines);
                        }
                        list_depth += 1;
                    }
                    Tag::Item => {
                        let indent = "  ".repeat(list_depth.saturating_sub(1));
                        current.push(Span::raw(format!("{indent}• ")));
                    }
                    Tag::Strong => style = style.add_modifier(Modifier::BOLD),
                    Tag::Emphasis => style = style.add_modifier(Modifier::ITALIC),
                    Tag::Strikethrough => style = style.add_modifier(Modifier::CROSSED_OUT),
                    Tag::Link { .. } => {
                        style = style.fg(LINK_COLOR).add_modifier(Modifier::UNDERLINED);
                    }
                    _ => {}
                }
            }
            Event::End(tag_end) => {
                if let Some(prev) = style_stack.pop() {
                    style = prev;
                }
                match tag_end {
                    TagEnd::Heading(_) | TagEnd::Paragraph | TagEnd::Item => {
                        if !current.is_empty() {
                            lines.push(Line::from(std::mem::take(&mut current)));
                        }
                    }
                    TagEnd::List(_) => list_depth = list_depth.saturating_sub(1),
                    _ => {}
                }
            }
            Event::Text(text) => current.push(Span::styled(text.into_string(), style)),
            Event::Code(code) => {
                current.push(Span::styled(code.into_string(), Style::new().fg(CODE_COLOR)));
            }
            Event::SoftBreak => current.push(Span::raw(" ")),
            Event::HardBreak => lines.push(Line::from(std::mem::take(&mut current))),
            _ => {}
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}
