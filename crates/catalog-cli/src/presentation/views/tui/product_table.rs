//! Product Table View Component
//!
//! List layout: one row per product, the selected row highlighted as the
//! edit target.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use super::Palette;
use crate::presentation::view_models::ProductPageViewModel;

pub const EMPTY_MESSAGE: &str = "No products match this search.";

pub struct ProductTableView<'a> {
    model: &'a ProductPageViewModel,
    selected: Option<usize>,
    palette: Palette,
}

impl<'a> ProductTableView<'a> {
    pub fn new(model: &'a ProductPageViewModel, selected: Option<usize>, palette: Palette) -> Self {
        Self {
            model,
            selected,
            palette,
        }
    }
}

impl<'a> Widget for ProductTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border());

        if self.model.products.is_empty() {
            Paragraph::new(Span::styled(EMPTY_MESSAGE, self.palette.muted()))
                .alignment(ratatui::layout::Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(["Product", "Category", "Price", "Stock", ""])
            .style(self.palette.muted())
            .bottom_margin(1);

        let rows: Vec<Row> = self
            .model
            .products
            .iter()
            .enumerate()
            .map(|(idx, product)| {
                let is_selected = self.selected == Some(idx);
                let name = Cell::from(vec![
                    Line::from(Span::styled(product.name.as_str(), self.palette.base())),
                    Line::from(Span::styled(
                        format!("Added {}", product.added),
                        self.palette.muted(),
                    )),
                ]);
                let action = if is_selected { "[e] Edit" } else { "" };
                let row = Row::new(vec![
                    name,
                    Cell::from(product.category.as_str()),
                    Cell::from(product.price_label.as_str()),
                    Cell::from(product.stock.to_string()),
                    Cell::from(action),
                ])
                .height(2);

                if is_selected {
                    row.style(self.palette.selected())
                } else {
                    row.style(self.palette.base())
                }
            })
            .collect();

        let widths = [
            Constraint::Percentage(38),
            Constraint::Percentage(18),
            Constraint::Percentage(16),
            Constraint::Percentage(10),
            Constraint::Percentage(18),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ProductRowViewModel;
    use crate::presentation::views::tui::test_support::buffer_text;
    use catalog_types::{Theme, ViewMode};

    fn page(names: &[&str]) -> ProductPageViewModel {
        ProductPageViewModel {
            query: String::new(),
            view: ViewMode::List,
            page: 1,
            total_pages: 1,
            page_size: 6,
            total_matches: names.len(),
            products: names
                .iter()
                .enumerate()
                .map(|(i, name)| ProductRowViewModel {
                    id: i as i64 + 1,
                    name: name.to_string(),
                    category: "Lighting".to_string(),
                    price: 20.0,
                    price_label: "₹20".to_string(),
                    stock: 3,
                    description: String::new(),
                    added: "2024-09-02".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_rows_and_edit_hint_on_selection() {
        let model = page(&["Linen Table Lamp", "Brass Floor Lamp"]);
        let area = Rect::new(0, 0, 100, 10);
        let mut buf = Buffer::empty(area);
        ProductTableView::new(&model, Some(1), Palette::for_theme(Theme::Dark))
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Linen Table Lamp"));
        assert!(text.contains("Added 2024-09-02"));
        assert!(text.contains("₹20"));
        assert_eq!(text.matches("[e] Edit").count(), 1);
    }

    #[test]
    fn test_empty_state() {
        let model = page(&[]);
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        ProductTableView::new(&model, None, Palette::for_theme(Theme::Dark)).render(area, &mut buf);

        assert!(buffer_text(&buf).contains(EMPTY_MESSAGE));
    }
}
