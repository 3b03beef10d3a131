use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Terminal styles for CLI output. Calorie figures are colored by sign:
/// intake vs. burned (negative entries, e.g. exercise).
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub label: Style,
    pub intake: Style,
    pub burned: Style,
}

impl Theme {
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            label: Style::new().white().dimmed(),
            intake: Style::new().yellow().bold(),
            burned: Style::new().blue().bold(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            error: Style::new(),
            label: Style::new(),
            intake: Style::new(),
            burned: Style::new(),
        }
    }

    pub fn calories(&self, calories: i64) -> Style {
        if calories < 0 {
            self.burned.clone()
        } else {
            self.intake.clone()
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
