//! Plain-text rendering of a [`ViewOutput`].

use unicode_width::UnicodeWidthStr;

use crate::view::{Body, NavButton, ViewOutput};

const SEPARATOR: &str = " | ";

/// Render a view as fixed-width text.
///
/// Layout, top to bottom: title, search box and column menu, header row,
/// body, navigation (when pagination is on) and the caption.
pub fn render_text(view: &ViewOutput) -> String {
    let mut out = String::new();
    out.push_str(&view.title);
    out.push('\n');

    let search = if view.search.value.is_empty() {
        format!("[{}: ]", view.search.placeholder)
    } else {
        format!("[{}: {}]", view.search.placeholder, view.search.value)
    };
    let hidden: Vec<&str> = view
        .column_menu
        .toggles
        .iter()
        .filter(|t| !t.visible)
        .map(|t| t.label.as_str())
        .collect();
    let menu = if hidden.is_empty() {
        format!("[{}]", view.column_menu.label)
    } else {
        format!("[{}] hidden: {}", view.column_menu.label, hidden.join(", "))
    };
    out.push_str(&format!("{}  {}\n", search, menu));

    let headers: Vec<String> = view
        .headers
        .iter()
        .map(|h| match h.sort {
            Some(direction) => format!("{} {}", h.label, direction.arrow()),
            None => h.label.clone(),
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in view.rows() {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.text().width());
        }
    }

    out.push_str(&join_padded(headers.iter().map(String::as_str), &widths));
    out.push('\n');
    let rule_width = widths.iter().sum::<usize>() + SEPARATOR.len() * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    match &view.body {
        Body::Loading { label } | Body::Empty { label, .. } => {
            out.push_str(label);
            out.push('\n');
        }
        Body::Rows(rows) => {
            for row in rows {
                out.push_str(&join_padded(row.cells.iter().map(|c| c.text()), &widths));
                if row.selected {
                    out.push_str(" *");
                }
                out.push('\n');
            }
        }
    }

    if view.navigation.visible {
        out.push_str(&format!(
            "{} {}\n",
            button(&view.navigation.previous),
            button(&view.navigation.next)
        ));
    }
    out.push_str(&view.caption);
    out.push('\n');
    out
}

fn button(nav: &NavButton) -> String {
    if nav.enabled {
        format!("[{}]", nav.label)
    } else {
        format!("({})", nav.label)
    }
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(text, &width)| pad(text, width))
        .collect();
    padded.join(SEPARATOR).trim_end().to_string()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
