//! Menu column widget
//!
//! A birth screen shows up to four of these side by side: the active
//! menu plus the already-decided ones to its left, each earlier column
//! reduced to its chosen row.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Widget};

use mb_core::birth::MenuModel;

use crate::theme::Theme;

/// One column of labeled choices
pub struct MenuColumn<'a> {
    title: &'a str,
    model: &'a MenuModel,
    theme: &'a Theme,
    /// The column currently taking input; others render dimmed
    active: bool,
    /// Row to mark as already chosen when the column is inactive
    chosen: Option<usize>,
}

impl<'a> MenuColumn<'a> {
    pub fn new(title: &'a str, model: &'a MenuModel, theme: &'a Theme) -> Self {
        Self {
            title,
            model,
            theme,
            active: true,
            chosen: None,
        }
    }

    pub fn inactive(mut self, chosen: Option<usize>) -> Self {
        self.active = false;
        self.chosen = chosen;
        self
    }
}

impl Widget for MenuColumn<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.active {
            Style::default().fg(self.theme.border_accent)
        } else {
            Style::default().fg(self.theme.border)
        };
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .model
            .items()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let key = (b'a' + i as u8) as char;
                let style = if self.active && i == self.model.cursor() {
                    Style::default()
                        .fg(self.theme.cursor_fg)
                        .bg(self.theme.cursor_bg)
                } else if self.chosen == Some(i) {
                    Style::default().fg(self.theme.chosen)
                } else if self.active {
                    Style::default().fg(self.theme.text)
                } else {
                    Style::default().fg(self.theme.text_dim)
                };
                let prefix = if self.active && i == self.model.cursor() {
                    "> "
                } else {
                    "  "
                };
                ListItem::new(Line::from(Span::styled(
                    format!("{prefix}{key}) {label}"),
                    style,
                )))
            })
            .collect();

        Widget::render(List::new(items), inner, buf);
    }
}
