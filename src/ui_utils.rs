use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

/// Creates a block with conditional focus styling (yellow border when focused)
pub fn focused_block(title: &str, is_focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if is_focused {
        block.border_style(Style::new().yellow())
    } else {
        block
    }
}

/// A `width` x `height` rect centred in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// Section heading followed by a blank line
pub fn heading(title: &str) -> Vec<Line<'static>> {
    vec![Line::from(title.to_owned()).bold().cyan(), Line::default()]
}

/// `[tag] [tag] ...` rendered as one line
pub fn tag_line(tags: &[String]) -> Line<'static> {
    let spans: Vec<Span> = tags
        .iter()
        .flat_map(|t| [Span::raw(format!("[{t}]")).blue(), Span::raw(" ")])
        .collect();
    Line::from(spans)
}

/// Renders a scrollable, wrapped text page inside a titled border
pub fn render_text_page(frame: &mut Frame, area: Rect, title: &str, text: Text<'static>, scroll: u16) {
    frame.render_widget(
        Paragraph::new(text)
            .block(Block::bordered().title(title.to_owned()))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 40, 10);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.x, 30);
        assert_eq!(rect.y, 15);
    }

    #[test]
    fn test_centered_rect_shrinks() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(area, 40, 10);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_tag_line() {
        let line = tag_line(&["ROS2".to_string(), "Gazebo".to_string()]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[ROS2] [Gazebo] ");
    }
}
