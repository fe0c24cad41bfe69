//! Style constants and clap help styling configuration.

use anstyle::{AnsiColor, Effects, Style};

/// Green — success messages.
pub(crate) const SUCCESS: Style =
    Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)));

/// Red — errors.
pub(crate) const ERROR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));

/// Yellow — warnings, caution messages.
pub(crate) const WARNING: Style =
    Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Yellow)));

/// Bold — section headers.
pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);

/// Dimmed — hints and guidance text.
pub(crate) const HINT: Style = Style::new().effects(Effects::DIMMED);

/// Custom clap styles for help output, matching our CLI palette.
pub(crate) fn clap_styles() -> clap::builder::Styles {
    let heading = Style::new()
        .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)))
        .effects(Effects::BOLD);
    let literal = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Cyan)));

    clap::builder::Styles::styled()
        .header(heading)
        .usage(heading)
        .literal(literal)
        .placeholder(literal)
        .error(
            Style::new()
                .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)))
                .effects(Effects::BOLD),
        )
        .valid(Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green))))
        .invalid(WARNING)
}
