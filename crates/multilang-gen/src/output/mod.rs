//! Styled terminal output for `multilang-gen`.
//!
//! `anstream` strips the ANSI styles when stdout/stderr is not a terminal, so
//! piped output stays plain text.

mod styles;

use std::io::Write;

pub(crate) use styles::clap_styles;

use styles::{ERROR, HEADER, HINT, SUCCESS, WARNING};

/// Print a success message (green checkmark prefix).
pub(crate) fn success(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{SUCCESS}✓{SUCCESS:#} {SUCCESS}{msg}{SUCCESS:#}").ok();
}

/// Print an error message to stderr (red X prefix).
pub(crate) fn error(msg: impl std::fmt::Display) {
    let mut out = anstream::stderr().lock();
    writeln!(out, "{ERROR}✗ {msg}{ERROR:#}").ok();
}

/// Print a warning message (yellow exclamation prefix).
pub(crate) fn warning(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{WARNING}! {msg}{WARNING:#}").ok();
}

/// Print a section header (bold).
pub(crate) fn header(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HEADER}{msg}{HEADER:#}").ok();
}

/// Print a hint (dimmed).
pub(crate) fn hint(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "{HINT}{msg}{HINT:#}").ok();
}

/// Print a list item with a bullet prefix.
pub(crate) fn item(msg: impl std::fmt::Display) {
    let mut out = anstream::stdout().lock();
    writeln!(out, "  • {msg}").ok();
}
