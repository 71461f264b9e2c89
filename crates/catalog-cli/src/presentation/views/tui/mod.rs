//! TUI View Components
//!
//! Ratatui `Widget` implementations for the catalog screens. Each component
//! wraps a reference to a view model and only maps it to widgets; colors
//! come from the [`Palette`] for the active theme.

pub mod form_dialog;
pub mod header;
pub mod landing;
pub mod pager;
pub mod product_grid;
pub mod product_table;

pub use form_dialog::FormDialogView;
pub use header::HeaderView;
pub use landing::LandingView;
pub use pager::PagerView;
pub use product_grid::ProductGridView;
pub use product_table::ProductTableView;

use crate::presentation::view_models::StatusLevel;
use catalog_types::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::Gray,
            },
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::DarkGray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Highlight for the selected row/card and the focused input
    pub fn selected(&self) -> Style {
        Style::default().fg(self.bg).bg(self.accent)
    }
}

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
