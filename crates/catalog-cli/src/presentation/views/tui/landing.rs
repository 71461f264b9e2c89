//! Landing Screen View
//!
//! Brand header, tagline and the single way forward: the product screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use super::Palette;

pub struct LandingView {
    palette: Palette,
    year: i32,
}

impl LandingView {
    pub fn new(palette: Palette, year: i32) -> Self {
        Self { palette, year }
    }
}

impl Widget for LandingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default().style(self.palette.base()).render(area, buf);

        let inner = area.inner(ratatui::layout::Margin::new(4, 1));
        let chunks = Layout::vertical([
            Constraint::Length(1), // brand bar
            Constraint::Min(8),    // hero
            Constraint::Length(1), // footer
        ])
        .split(inner);

        let brand = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);
        Paragraph::new(Span::styled("G A M Y A M", self.palette.muted())).render(brand[0], buf);
        Paragraph::new(Span::styled("EDITION 09", self.palette.muted()))
            .alignment(ratatui::layout::Alignment::Right)
            .render(brand[1], buf);

        let hero = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Fill(1),
        ])
        .split(chunks[1]);

        let lines = vec![
            Line::from(Span::styled("CURATED COMMERCE", self.palette.muted())),
            Line::from(""),
            Line::from(Span::styled(
                "Slow luxury, delivered on your terms. Minimal drops, deliberate service, calm technology.",
                self.palette.base(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", self.palette.accent()),
                Span::styled(" VIEW PRODUCTS", self.palette.base()),
            ]),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(hero[1], buf);

        Paragraph::new(Line::from(vec![
            Span::styled(format!("© {} Noire Studio", self.year), self.palette.muted()),
            Span::styled("   [t] theme  [q] quit", self.palette.muted()),
        ]))
        .render(chunks[2], buf);
    }
}
