//! Pager View Component
//!
//! Page links, status message and keyboard help along the bottom.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::{Palette, status_level_to_color};
use crate::presentation::view_models::{ProductPageViewModel, StatusBarViewModel};

/// Every products-screen binding, in the order shown
const KEY_HELP: [(&str, &str); 9] = [
    ("[/]", "search"),
    ("[←/→]", "page"),
    ("[1-9]", "go to page"),
    ("[↑/↓]", "select"),
    ("[e]", "edit"),
    ("[n]", "new"),
    ("[v]", "layout"),
    ("[t]", "theme"),
    ("[q]", "quit"),
];

pub struct PagerView<'a> {
    page: &'a ProductPageViewModel,
    status: &'a StatusBarViewModel,
    palette: Palette,
}

impl<'a> PagerView<'a> {
    pub fn new(page: &'a ProductPageViewModel, status: &'a StatusBarViewModel, palette: Palette) -> Self {
        Self {
            page,
            status,
            palette,
        }
    }

    fn page_links(&self) -> Line<'a> {
        let enabled = |on: bool| {
            if on {
                self.palette.base()
            } else {
                self.palette.muted()
            }
        };

        let mut spans = vec![Span::styled("◀ Prev ", enabled(self.page.has_prev()))];
        for page in 1..=self.page.total_pages {
            let style = if page == self.page.page {
                self.palette.selected()
            } else {
                self.palette.base()
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", page), style));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Next ▶", enabled(self.page.has_next())));
        Line::from(spans)
    }
}

impl<'a> Widget for PagerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.palette.border());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);
        Paragraph::new(self.page_links()).render(rows[0], buf);

        let color = status_level_to_color(self.status.level);
        Paragraph::new(Span::styled(
            self.status.message.as_str(),
            Style::default().fg(color),
        ))
        .render(rows[1], buf);

        let mut help = Vec::with_capacity(KEY_HELP.len() * 2);
        for (idx, (keys, action)) in KEY_HELP.iter().enumerate() {
            if idx > 0 {
                help.push(Span::raw("  "));
            }
            help.push(Span::styled(*keys, self.palette.accent()));
            help.push(Span::styled(format!(" {}", action), self.palette.muted()));
        }
        Paragraph::new(Line::from(help)).render(rows[2], buf);
    }
}
