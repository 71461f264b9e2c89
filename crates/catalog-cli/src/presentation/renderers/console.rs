use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::presentation::view_models::ProductPageViewModel;
use crate::presentation::views::ProductPageView;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn render_page(&self, page: &ProductPageViewModel) -> Result<()> {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(page)?);
            return Ok(());
        }

        let text = ProductPageView::new(page).to_string();
        if !self.color {
            print!("{}", text);
            return Ok(());
        }

        // Footer is always the last line
        let mut lines: Vec<&str> = text.lines().collect();
        let footer = lines.pop().unwrap_or_default();
        for line in lines {
            println!("{}", line);
        }
        println!("{}", footer.dimmed());
        Ok(())
    }
}
