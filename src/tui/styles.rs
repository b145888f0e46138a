//! TUI theme and styling

use ratatui::style::Color;

use crate::task::Priority;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Banners
    pub success: Color,
    pub error: Color,

    // Priority tiers
    pub high: Color,
    pub medium: Color,
    pub low: Color,

    // UI elements
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::garden()
    }
}

impl Theme {
    pub const NAMES: [&'static str; 2] = ["garden", "phosphor"];

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "garden" => Some(Self::garden()),
            "phosphor" => Some(Self::phosphor()),
            _ => None,
        }
    }

    pub fn garden() -> Self {
        Self {
            background: Color::Rgb(24, 28, 24),
            border: Color::Rgb(86, 110, 80),
            selection: Color::Rgb(44, 58, 42),

            title: Color::Rgb(170, 220, 120),
            text: Color::Rgb(225, 232, 215),
            dimmed: Color::Rgb(120, 135, 115),
            hint: Color::Rgb(150, 190, 140),

            success: Color::Rgb(120, 210, 120),
            error: Color::Rgb(235, 110, 90),

            high: Color::Rgb(240, 120, 100),
            medium: Color::Rgb(235, 190, 90),
            low: Color::Rgb(130, 190, 150),

            accent: Color::Rgb(190, 230, 110),
        }
    }

    pub fn phosphor() -> Self {
        Self {
            background: Color::Rgb(16, 20, 18),
            border: Color::Rgb(45, 70, 55),
            selection: Color::Rgb(30, 50, 40),

            title: Color::Rgb(57, 255, 20),
            text: Color::Rgb(180, 255, 180),
            dimmed: Color::Rgb(80, 120, 90),
            hint: Color::Rgb(100, 160, 120),

            success: Color::Rgb(0, 255, 180),
            error: Color::Rgb(255, 100, 80),

            high: Color::Rgb(255, 100, 80),
            medium: Color::Rgb(255, 180, 60),
            low: Color::Rgb(60, 160, 90),

            accent: Color::Rgb(57, 255, 20),
        }
    }

    pub fn priority(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}
