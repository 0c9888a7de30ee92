//! Colors command: the palette as the shift picker shows it.

use std::fmt::Write;

use sc_core::ColorTable;

use super::util::display_label;

pub fn format_colors(colors: &ColorTable, all: bool) -> String {
    let mut out = String::new();
    for color in colors.sorted_for_picker() {
        if !all && !color.is_active {
            continue;
        }
        let marker = if color.is_active { "" } else { "  (inactive)" };
        let _ = writeln!(
            out,
            "{:<2}  {}  {}{marker}",
            color.id,
            color.value,
            display_label(&color.label)
        );
    }
    out
}

pub fn run(colors: &ColorTable, all: bool) {
    print!("{}", format_colors(colors, all));
}
