//! Inventory entry list widget
//!
//! Renders one entry per visible catalog item: icon glyph, name, status
//! label, description, and an equipped indicator. Everything is re-derived
//! from the catalog on every render; there is no cached view model to fall
//! out of sync.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::items::{Catalog, ItemStatus};

/// Rows each entry occupies (title line + description line)
const ENTRY_HEIGHT: u16 = 2;

pub struct InventoryWidget<'a> {
    catalog: &'a Catalog,
    cursor: usize,
}

impl<'a> InventoryWidget<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog, cursor: 0 }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    fn status_style(status: ItemStatus) -> Style {
        match status {
            ItemStatus::Locked => Style::default().fg(Color::DarkGray),
            ItemStatus::Equipped => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            ItemStatus::Available => Style::default().fg(Color::Gray),
        }
    }
}

impl Widget for InventoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("STORAGE MANIFEST")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(47, 130, 170)));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        for (row, item) in self.catalog.visible_items().enumerate() {
            if y + ENTRY_HEIGHT > inner.y + inner.height {
                break;
            }

            let status = item.status();
            let mut style = Self::status_style(status);
            if row == self.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let indicator = if status.is_active() { '●' } else { '○' };
            let title = format!(
                "{} {:<24} [{:<9}] {}",
                item.icon().glyph(),
                item.name,
                status.label(),
                indicator
            );
            buf.set_string(inner.x, y, &title, style);

            let desc_style = Style::default().fg(Color::Rgb(110, 110, 120));
            buf.set_string(inner.x + 2, y + 1, &item.description, desc_style);

            y += ENTRY_HEIGHT;
        }
    }
}
