//! Terminal output helpers: every user-facing line goes through here so the
//! icons and colors stay consistent across commands.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", styled(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", styled(FG_GREEN, ICON_OK, msg));
}

/// Warnings go to stderr so they never pollute tables piped elsewhere.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", styled(FG_RED, ICON_ERR, msg));
}

/// Section header used above each Op card.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{FG_BLUE}{BOLD}== {msg}{RESET}");
}
