//! TUI Renderer for the catalog browser
//!
//! Owns the terminal session and the UI-only state (route, theme, search
//! focus, selected row, status line). All catalog state lives in the engine's
//! `Catalog`; every frame is drawn from view models built by the presenters.
//!
//! The event loop polls with a timeout no longer than the time left on the
//! pending search so the debounced query is applied on schedule.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use catalog_engine::{Catalog, SubmitOutcome};
use catalog_types::{ProductId, Route, Theme, ViewMode};
use chrono::{Datelike, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::Block,
};

use crate::presentation::presenters::{ScreenInputs, present_screen};
use crate::presentation::view_models::{StatusBarViewModel, StatusLevel};
use crate::presentation::views::tui::{
    FormDialogView, HeaderView, LandingView, PagerView, Palette, ProductGridView,
    ProductTableView,
};

const IDLE_POLL: Duration = Duration::from_millis(100);

pub struct TuiRenderer {
    catalog: Catalog,
    currency: String,

    /// UI State: current screen
    route: Route,

    /// UI State: active palette
    theme: Theme,

    /// UI State: keystrokes go to the search box
    search_focused: bool,

    /// UI State: highlighted row/card on the current page
    selected: usize,

    /// UI State: last action feedback
    status: StatusBarViewModel,

    /// UI State: Should quit flag
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(catalog: Catalog, start: Route, theme: Theme, currency: String) -> Self {
        Self {
            catalog,
            currency,
            route: start,
            theme,
            search_focused: false,
            selected: 0,
            status: StatusBarViewModel {
                message: String::new(),
                level: StatusLevel::Info,
            },
            should_quit: false,
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal
    /// whether setup, the loop, or neither failed.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;

        run_restoring(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

                ctrlc::set_handler(|| {
                    let _ = restore_terminal();
                    std::process::exit(0);
                })?;

                let result = self.event_loop(&mut terminal);
                terminal.show_cursor()?;
                result
            },
            restore_terminal,
        )
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            let timeout = self
                .catalog
                .search_remaining(Instant::now())
                .map_or(IDLE_POLL, |remaining| remaining.min(IDLE_POLL));

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key, Instant::now());
            }

            self.tick(Instant::now());
        }

        tracing::info!("tui closed");
        Ok(())
    }

    /// Let the debouncer fire; a new query starts at the top of page 1
    fn tick(&mut self, now: Instant) {
        if self.catalog.tick(now) {
            self.selected = 0;
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.route {
            Route::Landing => self.handle_landing_key(key),
            Route::Products if self.catalog.dialog().is_open() => self.handle_dialog_key(key),
            Route::Products if self.search_focused => self.handle_search_key(key, now),
            Route::Products => self.handle_products_key(key),
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.route = Route::Products,
            KeyCode::Char('t') => self.theme = self.theme.toggled(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(c) => self.catalog.push_search_char(c, now),
            KeyCode::Backspace => self.catalog.pop_search_char(now),
            KeyCode::Enter => {
                if self.catalog.apply_search_now() {
                    self.selected = 0;
                }
                self.search_focused = false;
            }
            KeyCode::Esc => self.search_focused = false,
            _ => {}
        }
    }

    fn handle_products_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.search_focused = true,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
                if self.catalog.prev_page() {
                    self.selected = 0;
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
                if self.catalog.next_page() {
                    self.selected = 0;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let page = c as usize - '0' as usize;
                if self.catalog.go_to_page(page) {
                    self.selected = 0;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.catalog.page_items().len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    self.catalog.open_edit(id);
                }
            }
            KeyCode::Char('n') => self.catalog.open_create(),
            KeyCode::Char('v') => self.catalog.toggle_view_mode(),
            KeyCode::Char('t') => self.theme = self.theme.toggled(),
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.catalog.close_dialog(),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = self.catalog.form_mut() {
                    form.focus_next();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = self.catalog.form_mut() {
                    form.focus_previous();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.catalog.form_mut() {
                    form.pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = self.catalog.form_mut() {
                    form.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn selected_id(&self) -> Option<ProductId> {
        self.catalog.page_items().get(self.selected).map(|p| p.id)
    }

    fn product_name(&self, id: ProductId) -> String {
        self.catalog
            .store()
            .get(id)
            .map(|p| p.name.clone())
            .unwrap_or_default()
    }

    fn submit(&mut self) {
        let (message, level) = match self.catalog.submit(Utc::now()) {
            SubmitOutcome::Created(id) => (
                format!("Added \"{}\"", self.product_name(id)),
                StatusLevel::Success,
            ),
            SubmitOutcome::Updated(id) => (
                format!("Updated \"{}\"", self.product_name(id)),
                StatusLevel::Success,
            ),
            SubmitOutcome::Rejected(violations) => (
                format!("Fix {} field(s) before saving", violations.len()),
                StatusLevel::Warning,
            ),
            SubmitOutcome::Ignored => (
                "Nothing saved; the record could not be written".to_string(),
                StatusLevel::Error,
            ),
            SubmitOutcome::NotOpen => return,
        };

        let last = self.catalog.page_items().len().saturating_sub(1);
        self.selected = self.selected.min(last);
        self.status = StatusBarViewModel { message, level };
    }

    /// Render the screen using Views
    fn render(&self, f: &mut Frame) {
        let area = f.area();
        let palette = Palette::for_theme(self.theme);
        f.render_widget(Block::default().style(palette.base()), area);

        match self.route {
            Route::Landing => {
                f.render_widget(LandingView::new(palette, Utc::now().year()), area);
            }
            Route::Products => self.render_products(f, palette),
        }
    }

    fn render_products(&self, f: &mut Frame, palette: Palette) {
        let area = f.area();
        let screen = present_screen(
            &self.catalog,
            &self.currency,
            ScreenInputs {
                theme: self.theme,
                search_focused: self.search_focused,
                selected: self.selected,
                status: self.status.clone(),
            },
        );

        // Main layout: [Header | Products | Pager]
        let chunks = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(4),
            Constraint::Length(4),
        ])
        .split(area);

        f.render_widget(
            HeaderView::new(&screen.search, screen.page.view, screen.theme, palette),
            chunks[0],
        );

        match screen.page.view {
            ViewMode::List => f.render_widget(
                ProductTableView::new(&screen.page, screen.selected, palette),
                chunks[1],
            ),
            ViewMode::Grid => f.render_widget(
                ProductGridView::new(&screen.page, screen.selected, palette),
                chunks[1],
            ),
        }

        f.render_widget(PagerView::new(&screen.page, &screen.status, palette), chunks[2]);

        if let Some(form) = &screen.form {
            f.render_widget(FormDialogView::new(form, palette), area);
        }
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run `body`, then `restore` no matter how `body` ended. The body's error
/// wins over a restore error.
fn run_restoring<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}
