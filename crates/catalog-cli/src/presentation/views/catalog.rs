use std::fmt;

use catalog_types::ViewMode;

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::ProductPageViewModel;

// --------------------------------------------------------
// Product Page View (console)
// --------------------------------------------------------

pub struct ProductPageView<'a> {
    data: &'a ProductPageViewModel,
}

impl<'a> ProductPageView<'a> {
    pub fn new(data: &'a ProductPageViewModel) -> Self {
        Self { data }
    }

    fn write_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<30} {:<13} {:<12} {:>5}  ADDED",
            "NAME", "CATEGORY", "PRICE", "STOCK"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;

        for product in &self.data.products {
            writeln!(
                f,
                "{:<30} {:<13} {:<12} {:>5}  {}",
                truncate(&product.name, 30),
                truncate(&product.category, 13),
                product.price_label,
                product.stock,
                product.added
            )?;
        }

        Ok(())
    }

    fn write_cards(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, product) in self.data.products.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            writeln!(f, "#{} {}", product.id, product.name)?;
            writeln!(f, "   {}", product.category)?;
            writeln!(f, "   {} · Stock {} units", product.price_label, product.stock)?;
            if !product.description.is_empty() {
                writeln!(f, "   {}", truncate(&product.description, 66))?;
            }
        }

        Ok(())
    }
}

impl<'a> fmt::Display for ProductPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.query.is_empty() {
            writeln!(f, "Search: \"{}\"", self.data.query)?;
            writeln!(f)?;
        }

        if self.data.products.is_empty() {
            writeln!(f, "No products match this search.")?;
        } else {
            match self.data.view {
                ViewMode::List => self.write_table(f)?,
                ViewMode::Grid => self.write_cards(f)?,
            }
        }

        writeln!(f)?;
        let noun = if self.data.total_matches == 1 {
            "product"
        } else {
            "products"
        };
        writeln!(
            f,
            "Page {} of {} ({} {})",
            self.data.page, self.data.total_pages, self.data.total_matches, noun
        )
    }
}
