//! Product Grid View Component
//!
//! Card layout: two columns, one card per product.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::Palette;
use super::product_table::EMPTY_MESSAGE;
use crate::presentation::view_models::{ProductPageViewModel, ProductRowViewModel};

const COLUMNS: usize = 2;

pub struct ProductGridView<'a> {
    model: &'a ProductPageViewModel,
    selected: Option<usize>,
    palette: Palette,
}

impl<'a> ProductGridView<'a> {
    pub fn new(model: &'a ProductPageViewModel, selected: Option<usize>, palette: Palette) -> Self {
        Self {
            model,
            selected,
            palette,
        }
    }

    fn render_card(&self, product: &ProductRowViewModel, is_selected: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if is_selected {
            self.palette.accent()
        } else {
            self.palette.border()
        };
        let mut title = vec![Span::styled(format!(" {} ", product.name), self.palette.accent())];
        if is_selected {
            title.push(Span::styled("[e] Edit ", self.palette.selected()));
        }

        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_style(border_style);

        let mut lines = vec![
            Line::from(Span::styled(product.category.as_str(), self.palette.muted())),
            Line::from(Span::styled(product.price_label.as_str(), self.palette.accent())),
            Line::from(Span::styled(
                format!("Stock • {} units", product.stock),
                self.palette.muted(),
            )),
        ];
        if !product.description.is_empty() {
            lines.push(Line::from(Span::styled(
                product.description.as_str(),
                self.palette.base(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

impl<'a> Widget for ProductGridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.model.products.is_empty() {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.palette.border());
            Paragraph::new(Span::styled(EMPTY_MESSAGE, self.palette.muted()))
                .alignment(ratatui::layout::Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let row_count = self.model.page_size.div_ceil(COLUMNS).max(1);
        let rows = Layout::vertical(vec![Constraint::Ratio(1, row_count as u32); row_count]).split(area);

        for (idx, product) in self.model.products.iter().enumerate() {
            let Some(row_area) = rows.get(idx / COLUMNS) else {
                break;
            };
            let cols = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(*row_area);
            self.render_card(product, self.selected == Some(idx), cols[idx % COLUMNS], buf);
        }
    }
}
