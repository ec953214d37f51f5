use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::data::{BlogPost, Portfolio};
use crate::markdown;
use crate::state::BlogState;
use crate::ui_utils::{centered_rect, tag_line};

#[derive(Debug, Default)]
pub struct BlogPage;

impl BlogPage {
    pub fn new() -> Self {
        Self
    }

    fn preview(post: &BlogPost) -> ListItem<'static> {
        ListItem::new(Text::from(vec![
            Line::from(vec![
                Span::raw(post.title.clone()).bold(),
                Span::raw(format!("  ({})", post.read_time)).dark_gray(),
            ]),
            Line::from(format!("  {}", post.excerpt)),
            Line::from(
                [Span::raw("  ")]
                    .into_iter()
                    .chain(tag_line(&post.tags).spans)
                    .chain([Span::raw(post.date.clone()).dark_gray()])
                    .collect::<Vec<_>>(),
            ),
            Line::default(),
        ]))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, portfolio: &Portfolio, state: &BlogState) {
        let items: Vec<ListItem> = portfolio.posts.iter().map(Self::preview).collect();
        let mut list_state = ListState::default()
            .with_selected(Some(state.selected.min(items.len().saturating_sub(1))));
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title("My Tech Insights | ↵ Read"))
                .highlight_style(Style::new().reversed())
                .highlight_symbol(">> "),
            area,
            &mut list_state,
        );
    }

    /// Lines of the reader body for `post`, used for scrolling bounds too.
    pub fn reader_text(post: &BlogPost) -> Text<'static> {
        let mut lines = vec![
            Line::from(vec![
                Span::raw(post.date.clone()).dark_gray(),
                Span::raw("  ·  "),
                Span::raw(post.read_time.clone()).dark_gray(),
            ]),
            tag_line(&post.tags),
            Line::default(),
        ];
        lines.extend(markdown::render(&post.body));
        Text::from(lines)
    }

    /// Popup the reader takes up inside the page `area`.
    pub fn reader_area(area: Rect) -> Rect {
        centered_rect(area, area.width.saturating_sub(8), area.height.saturating_sub(4))
    }

    fn reader_block(post: &BlogPost) -> Block<'static> {
        Block::bordered()
            .title(post.title.clone())
            .title_bottom(Line::from(" Esc: Close  ↑↓: Scroll ").right_aligned())
            .border_style(Style::new().cyan())
    }

    /// Rows the reader body is drawn into.
    pub fn reader_viewport(area: Rect) -> Rect {
        Block::bordered().inner(Self::reader_area(area))
    }

    /// Draws the post reader over `area`.
    pub fn render_reader(&self, frame: &mut Frame, area: Rect, post: &BlogPost, scroll: u16) {
        let popup = Self::reader_area(area);
        frame.render_widget(Clear, popup);

        let block = Self::reader_block(post);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        frame.render_widget(
            Paragraph::new(Self::reader_text(post))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0)),
            inner,
        );
    }
}
