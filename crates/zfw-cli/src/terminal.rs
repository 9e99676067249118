//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for the verdict line and
//! section headings.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold text for section headings.
    pub const BOLD: &str = "\x1b[1m";
    /// Bold green for a within-limits verdict.
    pub const GREEN_BOLD: &str = "\x1b[1;32m";
    /// Bold red for an over-limit verdict.
    pub const RED_BOLD: &str = "\x1b[1;31m";
    /// Cyan for the input prompt.
    pub const CYAN: &str = "\x1b[36m";
    /// Gray for captions and the footer note.
    pub const GRAY: &str = "\x1b[90m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub bold: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub cyan: &'static str,
    pub gray: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            bold: colors::BOLD,
            green: colors::GREEN_BOLD,
            red: colors::RED_BOLD,
            cyan: colors::CYAN,
            gray: colors::GRAY,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            bold: "",
            green: "",
            red: "",
            cyan: "",
            gray: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Palette honouring an explicit `--no-color` flag before terminal detection.
    #[must_use]
    pub fn resolve(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::detect()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects the `NO_COLOR` environment variable (https://no-color.org/)
/// and the `TERM=dumb` convention.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
