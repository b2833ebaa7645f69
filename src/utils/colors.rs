/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const CYAN: &str = "\x1b[36m";

/// Grey for placeholders (`""`, `"-"`), unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Green for completed states, cyan for the action still on offer.
pub fn colorize_status(label: &str, is_action: bool) -> String {
    if is_action {
        format!("{CYAN}[{label}]{RESET}")
    } else {
        format!("{GREEN}{label}{RESET}")
    }
}

/// Green for check-in timestamps, red for check-out ones.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}
