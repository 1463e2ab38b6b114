use docktile_core::{Column, ColumnWidth};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const GUTTER: &str = "▶ ";
pub const GUTTER_WIDTH: u16 = 2;
pub const COLUMN_GAP: u16 = 1;

/// Rows above the list body: title, spacer, column header.
pub const HEADER_ROWS: u16 = 3;
/// Rows below the list body, left to the status bar.
pub const FOOTER_ROWS: u16 = 1;

/// Number of list rows that fit on a screen `height` lines tall.
pub fn body_height(height: u16) -> usize {
    height.saturating_sub(HEADER_ROWS + FOOTER_ROWS) as usize
}

/// Splits `width` between columns separated by [`COLUMN_GAP`].
///
/// Fixed columns are served first, left to right, and shrink when space runs out. Fill columns
/// share the rest by weight; the last fill column absorbs rounding leftovers.
pub fn column_widths(columns: &[Column], width: u16) -> Vec<u16> {
    let gaps = COLUMN_GAP.saturating_mul(columns.len().saturating_sub(1) as u16);
    let mut remaining = width.saturating_sub(gaps);
    let mut widths = vec![0u16; columns.len()];

    for (i, col) in columns.iter().enumerate() {
        if let ColumnWidth::Fixed(w) = col.width {
            widths[i] = w.min(remaining);
            remaining -= widths[i];
        }
    }

    let fills: Vec<(usize, u32)> = columns
        .iter()
        .enumerate()
        .filter_map(|(i, c)| match c.width {
            ColumnWidth::Fill(weight) => Some((i, u32::from(weight.max(1)))),
            ColumnWidth::Fixed(_) => None,
        })
        .collect();
    let total_weight: u32 = fills.iter().map(|(_, w)| w).sum();
    let pool = u32::from(remaining);
    let mut handed_out = 0u32;
    for (n, (i, weight)) in fills.iter().enumerate() {
        let share = if n + 1 == fills.len() { pool - handed_out } else { pool * weight / total_weight };
        widths[*i] = share as u16;
        handed_out += share;
    }

    widths
}

/// Pads or truncates `s` to exactly `width` display columns. Truncation ends in `…`.
pub fn fit(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let text_width = s.width();
    if text_width <= width {
        let mut out = String::with_capacity(s.len() + width - text_width);
        out.push_str(s);
        out.push_str(&" ".repeat(width - text_width));
        return out;
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width - used));
    out
}
