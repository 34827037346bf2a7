//! Banner and choice box drawing

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::catalog::ChoiceList;

/// Characters the button decoration adds around a label: "[ " and " ▸ ]"
pub const BUTTON_PADDING: u16 = 6;

const UPPER_HALF_BLOCK: &str = "\u{2580}";
const LOWER_HALF_BLOCK: &str = "\u{2584}";

/// Terminal columns `label` occupies; wide glyphs count double
pub fn label_width(label: &str) -> usize {
    Line::from(label).width()
}

/// Installer-style button text, label padded to `width` columns
pub fn button_line(label: &str, width: usize) -> String {
    let padding = width.saturating_sub(label_width(label));
    format!("[ {}{} \u{25b8} ]", label, " ".repeat(padding))
}

/// Rows below the banner
pub fn body_area(area: Rect, banner_height: u16) -> Rect {
    let banner = banner_height.min(area.height);
    Rect::new(area.x, area.y + banner, area.width, area.height - banner)
}

/// Bordered box for `count` buttons whose labels are at most `longest`
/// columns wide, centered in `body`. Clipped to fit; the list scrolls then.
pub fn menu_area(body: Rect, longest: usize, count: usize) -> Rect {
    let longest = u16::try_from(longest).unwrap_or(u16::MAX);
    let count = u16::try_from(count).unwrap_or(u16::MAX);

    let width = longest
        .saturating_add(BUTTON_PADDING)
        .saturating_add(2)
        .min(body.width);
    let height = count.saturating_add(2).min(body.height);

    let x = body.x + (body.width - width) / 2;
    let y = body.y + (body.height - height) / 2;
    Rect::new(x, y, width, height)
}

pub fn render_banner(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let height = theme.banner_height.min(area.height);
    if height == 0 {
        return;
    }
    let row = |offset: u16| Rect::new(area.x, area.y + offset, area.width, 1);
    let width = usize::from(area.width);

    if height < 3 {
        let banner = Rect::new(area.x, area.y, area.width, height);
        let paragraph = Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(theme.banner_title);
        frame.render_widget(paragraph, banner);
        return;
    }

    frame.render_widget(
        Paragraph::new(UPPER_HALF_BLOCK.repeat(width)).style(theme.banner_band),
        row(0),
    );

    let title_rows = Rect::new(area.x, area.y + 1, area.width, height - 2);
    frame.render_widget(Paragraph::new("").style(theme.banner_title), title_rows);
    frame.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(theme.banner_title),
        row(1 + (height - 3) / 2),
    );

    frame.render_widget(
        Paragraph::new(LOWER_HALF_BLOCK.repeat(width)).style(theme.banner_band),
        row(height - 1),
    );
}

/// Draw the choice box and return the number of visible entries
pub fn render_choices(
    frame: &mut Frame,
    body: Rect,
    choices: &ChoiceList,
    theme: &Theme,
    list_state: &mut ListState,
) -> usize {
    let longest = choices
        .iter()
        .map(|record| label_width(&record.label))
        .max()
        .unwrap_or(0);
    let area = menu_area(body, longest, choices.len());

    let items: Vec<ListItem> = choices
        .iter()
        .map(|record| ListItem::new(Line::from(button_line(&record.label, longest))))
        .collect();

    let list = List::new(items)
        .style(theme.item)
        .highlight_style(theme.selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border),
        );

    frame.render_stateful_widget(list, area, list_state);
    usize::from(area.height.saturating_sub(2))
}
