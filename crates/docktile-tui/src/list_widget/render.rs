use docktile_core::{Column, Resource};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::layout::{column_widths, fit, COLUMN_GAP, GUTTER, GUTTER_WIDTH, HEADER_ROWS};
use crate::theme::Theme;

pub(super) struct RenderInput<'a, R> {
    pub title: &'a str,
    pub total: usize,
    pub visible: usize,
    pub filter: Option<&'a str>,
    pub columns: &'static [Column],
    pub sort_column: Option<usize>,
    pub ascending: bool,
    pub rows: &'a [&'a R],
    /// Index into `rows`.
    pub selected: Option<usize>,
    pub theme: &'a Theme,
}

const TITLE_ROW: u16 = 0;
const HEADER_ROW: u16 = 2;

/// Writes title, column header and body rows into `buf`, whose area starts at the origin.
pub(super) fn draw<R: Resource>(buf: &mut Buffer, input: &RenderInput<'_, R>) {
    let width = buf.area.width;
    let height = buf.area.height;
    if width == 0 || height == 0 {
        return;
    }

    let title = match input.filter {
        Some(pattern) => format!("{}: {}/{}  Filter: {pattern}", input.title, input.visible, input.total),
        None => format!("{}: {}", input.title, input.total),
    };
    buf.set_stringn(0, TITLE_ROW, &title, width as usize, input.theme.title);

    if height <= HEADER_ROW {
        return;
    }
    let widths = column_widths(input.columns, width.saturating_sub(GUTTER_WIDTH));
    let headers: Vec<String> = input
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| match input.sort_column {
            Some(c) if c == i => format!("{} {}", col.title, if input.ascending { "▲" } else { "▼" }),
            _ => col.title.to_string(),
        })
        .collect();
    write_row(buf, HEADER_ROW, "  ", &headers, &widths, input.theme.header);

    for (n, record) in input.rows.iter().enumerate() {
        let y = HEADER_ROWS + n as u16;
        if y >= height {
            break;
        }
        let is_selected = input.selected == Some(n);
        let mut style = input.theme.tone(record.tone());
        if is_selected {
            style = style.patch(input.theme.selection);
        }
        let gutter = if is_selected { GUTTER } else { "  " };
        write_row(buf, y, gutter, &record.row(), &widths, style);
    }
}

fn write_row(buf: &mut Buffer, y: u16, gutter: &str, cells: &[String], widths: &[u16], style: Style) {
    let width = buf.area.width;
    let mut line = String::from(gutter);
    for (i, &w) in widths.iter().enumerate() {
        if i > 0 {
            line.push_str(&" ".repeat(COLUMN_GAP as usize));
        }
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push_str(&fit(cell, w as usize));
    }
    buf.set_style(Rect::new(0, y, width, 1), style);
    buf.set_stringn(0, y, &line, width as usize, style);
}
