use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Terminal styles for the report list and status lines
#[derive(Debug, Clone)]
pub struct Theme {
    pub heading: Style,
    pub success: Style,
    pub warn: Style,
    pub label: Style,
}

impl Theme {
    /// Colors only when stdout is a terminal, so piped output stays plain
    pub fn detect() -> Self {
        if console::Term::stdout().is_term() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn colored() -> Self {
        Self {
            heading: Style::new().red().bold(),
            success: Style::new().green().bold(),
            warn: Style::new().yellow().bold(),
            label: Style::new().bright_black(),
        }
    }

    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            success: Style::new(),
            warn: Style::new(),
            label: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
