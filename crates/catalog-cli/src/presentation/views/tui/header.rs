//! Header View Component
//!
//! Title, search box, layout toggle and theme indicator.

use catalog_types::{Theme, ViewMode};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::view_models::SearchBoxViewModel;

pub struct HeaderView<'a> {
    search: &'a SearchBoxViewModel,
    view: ViewMode,
    theme: Theme,
    palette: Palette,
}

impl<'a> HeaderView<'a> {
    pub fn new(search: &'a SearchBoxViewModel, view: ViewMode, theme: Theme, palette: Palette) -> Self {
        Self {
            search,
            view,
            theme,
            palette,
        }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Min(20), Constraint::Length(44)]).split(area);

        let title = vec![
            Line::from(Span::styled("C A T A L O G", self.palette.muted())),
            Line::from(Span::styled("Products", self.palette.accent())),
            Line::from(vec![
                Span::styled("[n]", self.palette.accent()),
                Span::styled(" new product  ", self.palette.base()),
                Span::styled("[t]", self.palette.accent()),
                Span::styled(format!(" theme: {}", self.theme), self.palette.base()),
            ]),
        ];
        Paragraph::new(title).render(chunks[0], buf);

        let right = Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).split(chunks[1]);

        let border_style = if self.search.focused {
            self.palette.accent()
        } else {
            self.palette.border()
        };
        let title = if self.search.pending {
            "Search products …"
        } else {
            "Search products"
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let content = if self.search.input.is_empty() && !self.search.focused {
            Span::styled("/ to search", self.palette.muted())
        } else if self.search.focused {
            Span::styled(format!("{}▏", self.search.input), self.palette.base())
        } else {
            Span::styled(self.search.input.as_str(), self.palette.base())
        };
        Paragraph::new(content).block(block).render(right[0], buf);

        let (list_style, grid_style) = match self.view {
            ViewMode::List => (self.palette.selected(), self.palette.muted()),
            ViewMode::Grid => (self.palette.muted(), self.palette.selected()),
        };
        Paragraph::new(Line::from(vec![
            Span::styled("[v] ", self.palette.accent()),
            Span::styled(" List ", list_style),
            Span::raw(" "),
            Span::styled(" Cards ", grid_style),
        ]))
        .render(right[1], buf);
    }
}
