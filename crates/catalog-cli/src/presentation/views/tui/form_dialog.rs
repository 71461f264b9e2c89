//! Form Dialog View Component
//!
//! Modal create/edit form drawn over the product screen. Each field shows
//! its label, the raw input (or a placeholder) and the inline error from the
//! last submit, if any.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::Palette;
use crate::presentation::view_models::{FormFieldViewModel, FormViewModel};

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 21;

pub struct FormDialogView<'a> {
    model: &'a FormViewModel,
    palette: Palette,
}

impl<'a> FormDialogView<'a> {
    pub fn new(model: &'a FormViewModel, palette: Palette) -> Self {
        Self { model, palette }
    }

    fn field_lines(&self, field: &'a FormFieldViewModel) -> Vec<Line<'a>> {
        let label_style = if field.focused {
            self.palette.accent()
        } else {
            self.palette.base()
        };
        let marker = if field.focused { "▶ " } else { "  " };

        let input = if field.value.is_empty() && !field.focused {
            Span::styled(field.placeholder, self.palette.muted())
        } else if field.focused {
            Span::styled(format!("{}▏", field.value), self.palette.base())
        } else {
            Span::styled(field.value.as_str(), self.palette.base())
        };

        let error = match field.error {
            Some(message) => Span::styled(message, Style::default().fg(Color::Red)),
            None => Span::raw(""),
        };

        vec![
            Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(field.label, label_style),
            ]),
            Line::from(vec![Span::raw("  "), input]),
            Line::from(vec![Span::raw("  "), error]),
        ]
    }
}

/// Fixed-size rect centered in `area`, shrunk to fit if needed
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl<'a> Widget for FormDialogView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.model.title), self.palette.accent()))
            .borders(Borders::ALL)
            .border_style(self.palette.accent())
            .style(self.palette.base());
        let inner = block.inner(popup);
        block.render(popup, buf);

        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

        Paragraph::new(Span::styled(self.model.subtitle, self.palette.muted())).render(chunks[0], buf);

        let lines: Vec<Line> = self
            .model
            .fields
            .iter()
            .flat_map(|field| self.field_lines(field))
            .collect();
        Paragraph::new(lines).render(chunks[1], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("[Enter] ", self.palette.accent()),
            Span::styled(self.model.submit_label, self.palette.base()),
            Span::raw("   "),
            Span::styled("[Tab] ", self.palette.accent()),
            Span::styled("next field", self.palette.base()),
            Span::raw("   "),
            Span::styled("[Esc] ", self.palette.accent()),
            Span::styled("Close", self.palette.base()),
        ]))
        .render(chunks[2], buf);
    }
}
