use std::io::IsTerminal;

use anstyle::{AnsiColor, Reset, RgbColor, Style};

const PRIMARY_COLOR: Style = Style::new().fg_color(Some(anstyle::Color::Rgb(RgbColor(207, 106, 76))));
const ERROR_COLOR: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)));

fn render_arrow(color: bool) -> String {
    if color {
        format!("{PRIMARY_COLOR}❱{Reset}")
    } else {
        "❱".to_string()
    }
}

fn render_error(color: bool) -> String {
    if color {
        format!("{ERROR_COLOR}✘{Reset}")
    } else {
        "✘".to_string()
    }
}

/// Whether status lines should carry ANSI colors
#[must_use]
pub fn stderr_color() -> bool {
    std::io::stderr().is_terminal()
}

#[must_use]
pub fn format_failure_message(action: &str, exit_code: i32, color: bool) -> String {
    format!(
        "{} Action '{action}' failed {} (exit code {exit_code})",
        render_arrow(color),
        render_error(color)
    )
}

#[must_use]
pub fn format_spawn_error(action: &str, shell: &str, error: &std::io::Error, color: bool) -> String {
    format!(
        "{} Unable to launch '{action}' with {shell} {}: {error}",
        render_arrow(color),
        render_error(color)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_plain() {
        assert_eq!(
            format_failure_message("build", 7, false),
            "❱ Action 'build' failed ✘ (exit code 7)"
        );
    }

    #[test]
    fn test_failure_message_colored() {
        let message = format_failure_message("build", 1, true);
        assert!(message.contains("\x1b["));
        assert!(message.contains("exit code 1"));
    }

    #[test]
    fn test_spawn_error_plain() {
        let error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert_eq!(
            format_spawn_error("build", "nosh", &error, false),
            "❱ Unable to launch 'build' with nosh ✘: no such file"
        );
    }
}
