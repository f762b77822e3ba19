//! Column measurement and line layout.

use crate::{Table, ansi::visible_width};

/// Computes the visible width of every column of `table`.
///
/// The width of a column is the widest of its header cell and every row cell
/// in that column. Rows shorter than the header contribute nothing to the
/// columns they do not reach.
#[must_use]
pub fn compute_column_widths(table: &Table) -> Vec<usize> {
    let mut widths = table.header().iter().map(|cell| visible_width(cell)).collect::<Vec<_>>();

    for row in table.rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(visible_width(cell));
        }
    }

    widths
}

/// Pads `cell` on the right with `padding` until it is `width` columns wide.
///
/// `padding` is repeated as a whole, once per missing column, so a padding
/// string wider than one column overshoots `width`. Cells already at least
/// `width` columns wide are returned unchanged; nothing is ever truncated.
///
/// # Examples
///
/// ```rust
/// assert_eq!(tabby::pad_right("Bulba", 12, "."), "Bulba.......");
/// assert_eq!(tabby::pad_right("Bulba", 3, "."), "Bulba");
/// ```
#[must_use]
pub fn pad_right(cell: &str, width: usize, padding: &str) -> String {
    let missing = width.saturating_sub(visible_width(cell));
    let mut padded = String::with_capacity(cell.len() + padding.len() * missing);
    padded.push_str(cell);
    padded.push_str(&padding.repeat(missing));
    padded
}

/// Lays out one line of a table.
///
/// Every present cell is padded to the width of its column and `spacing` is
/// placed between cells, never after the last one. Missing trailing cells are
/// not synthesized.
#[must_use]
pub fn format_line<S>(cells: &[S], widths: &[usize], padding: &str, spacing: &str) -> String
where
    S: AsRef<str>,
{
    cells
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            pad_right(cell.as_ref(), widths.get(index).copied().unwrap_or_default(), padding)
        })
        .collect::<Vec<_>>()
        .join(spacing)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORED_NAME: &str = "\x1b[0;31mŁukasz Ł\x1b[0mobocki";

    #[test]
    fn test_pad_right_ascii() {
        assert_eq!(pad_right("Bulba", 12, "."), "Bulba.......");
    }

    #[test]
    fn test_pad_right_counts_visible_width() {
        assert_eq!(pad_right(COLORED_NAME, 20, "."), format!("{COLORED_NAME}......"));
    }

    #[test]
    fn test_pad_right_exact_width_is_unchanged() {
        assert_eq!(pad_right(COLORED_NAME, 14, "."), COLORED_NAME);
    }

    #[test]
    fn test_pad_right_never_truncates() {
        assert_eq!(pad_right(COLORED_NAME, 1, "."), COLORED_NAME);
        assert_eq!(pad_right("abc", 0, " "), "abc");
    }

    #[test]
    fn test_pad_right_repeats_wide_padding_as_a_unit() {
        assert_eq!(pad_right("ab", 5, "-="), "ab-=-=-=");
        assert_eq!(visible_width(&pad_right("ab", 5, "-=")), 8);
    }

    #[test]
    fn test_pad_right_with_empty_padding() {
        assert_eq!(pad_right("ab", 5, ""), "ab");
    }

    #[test]
    fn test_compute_column_widths_header_only() {
        let table = Table::with_header(["a"]).unwrap();
        assert_eq!(compute_column_widths(&table), vec![1]);

        let table = Table::with_header(["a", COLORED_NAME]).unwrap();
        assert_eq!(compute_column_widths(&table), vec![1, 14]);
    }

    #[test]
    fn test_compute_column_widths_with_rows() {
        let mut table = Table::with_header(["a", COLORED_NAME]).unwrap();
        table.append_row([format!("{COLORED_NAME}12345"), "b".to_string()]).unwrap();
        table.append_row(["c", "d"]).unwrap();

        assert_eq!(compute_column_widths(&table), vec![19, 14]);
    }

    #[test]
    fn test_compute_column_widths_with_short_rows() {
        let mut table = Table::with_header(["A", "B"]).unwrap();
        table.append_row(["1"]).unwrap();
        table.append_row(["22"]).unwrap();
        table.append_row(Vec::<String>::new()).unwrap();

        assert_eq!(compute_column_widths(&table), vec![2, 1]);
    }

    #[test]
    fn test_compute_column_widths_of_empty_table() {
        assert!(compute_column_widths(&Table::new()).is_empty());
    }

    #[test]
    fn test_format_line_joins_with_spacing() {
        assert_eq!(format_line(&["A", "B"], &[2, 1], " ", "  "), "A   B");
        assert_eq!(format_line(&["x", "y", "z"], &[1, 1, 1], " ", " | "), "x | y | z");
    }

    #[test]
    fn test_format_line_does_not_synthesize_missing_cells() {
        assert_eq!(format_line(&["1"], &[2, 1], " ", "  "), "1 ");
        assert_eq!(format_line::<&str>(&[], &[2, 1], " ", "  "), "");
    }

    #[test]
    fn test_format_line_keeps_escape_sequences() {
        let line = format_line(
            &["\x1b[4mFIRST\x1b[0m", "\x1b[4mSECOND\x1b[0m"],
            &[5, 6],
            " ",
            "  ",
        );
        assert_eq!(line, "\x1b[4mFIRST\x1b[0m  \x1b[4mSECOND\x1b[0m");
    }

    #[test]
    fn test_format_line_pads_with_custom_padding() {
        assert_eq!(format_line(&["uno", "dos"], &[5, 6], ".", "|"), "uno..|dos...");
    }
}
