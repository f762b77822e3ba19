//! ANSI escape sequences used by the demonstration tables.

pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const MAGENTA: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[0;36m";
pub const WHITE: &str = "\x1b[0;37m";

pub const BOLD: &str = "\x1b[1m";
pub const BOLD_RED: &str = "\x1b[1;31m";
pub const BOLD_GREEN: &str = "\x1b[1;32m";
pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const BOLD_BLUE: &str = "\x1b[1;34m";
pub const BOLD_MAGENTA: &str = "\x1b[1;35m";
pub const BOLD_CYAN: &str = "\x1b[1;36m";
pub const BOLD_WHITE: &str = "\x1b[1;37m";

pub const UNDERLINE: &str = "\x1b[4m";
pub const UNDERLINE_RED: &str = "\x1b[4;31m";
pub const UNDERLINE_GREEN: &str = "\x1b[4;32m";
pub const UNDERLINE_YELLOW: &str = "\x1b[4;33m";
pub const UNDERLINE_BLUE: &str = "\x1b[4;34m";
pub const UNDERLINE_MAGENTA: &str = "\x1b[4;35m";
pub const UNDERLINE_CYAN: &str = "\x1b[4;36m";
pub const UNDERLINE_WHITE: &str = "\x1b[4;37m";

/// Every named sequence, in display order.
pub const PALETTE: [(&str, &str); 24] = [
    ("RESET", RESET),
    ("RED", RED),
    ("GREEN", GREEN),
    ("YELLOW", YELLOW),
    ("BLUE", BLUE),
    ("MAGENTA", MAGENTA),
    ("CYAN", CYAN),
    ("WHITE", WHITE),
    ("BOLD", BOLD),
    ("BOLD_RED", BOLD_RED),
    ("BOLD_GREEN", BOLD_GREEN),
    ("BOLD_YELLOW", BOLD_YELLOW),
    ("BOLD_BLUE", BOLD_BLUE),
    ("BOLD_MAGENTA", BOLD_MAGENTA),
    ("BOLD_CYAN", BOLD_CYAN),
    ("BOLD_WHITE", BOLD_WHITE),
    ("UNDERLINE", UNDERLINE),
    ("UNDERLINE_RED", UNDERLINE_RED),
    ("UNDERLINE_GREEN", UNDERLINE_GREEN),
    ("UNDERLINE_YELLOW", UNDERLINE_YELLOW),
    ("UNDERLINE_BLUE", UNDERLINE_BLUE),
    ("UNDERLINE_MAGENTA", UNDERLINE_MAGENTA),
    ("UNDERLINE_CYAN", UNDERLINE_CYAN),
    ("UNDERLINE_WHITE", UNDERLINE_WHITE),
];
