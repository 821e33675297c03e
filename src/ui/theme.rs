//! Visual theme and styling.

use console::Style;

/// Styles used when printing flag reports.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Flags whose value came from the environment (green).
    pub success: Style,
    /// Flags set explicitly (magenta).
    pub info: Style,
    /// Rejected environment values (red bold).
    pub error: Style,
    /// Secondary text such as candidate names (dim).
    pub dim: Style,
    /// Flag names (bold).
    pub key: Style,
    /// Headers (bold magenta).
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            info: Style::new().magenta(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            key: Style::new().bold(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            info: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            key: Style::new(),
            header: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
