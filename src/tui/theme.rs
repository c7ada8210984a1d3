//! Dashboard Theme - colors and styles

use ratatui::style::{Color, Modifier, Style};

use crate::model::Severity;

use super::gauge::HealthBand;

/// Color palette
pub struct Theme {
    pub accent_blue: Color,
    pub amber_gold: Color,
    pub cyan_teal: Color,
    pub star_white: Color,
    pub muted_gray: Color,

    // Status colors
    pub success_green: Color,
    pub warning_orange: Color,
    pub error_red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_blue: Color::Rgb(88, 166, 255),   // #58A6FF
            amber_gold: Color::Rgb(255, 191, 0),     // #FFBF00
            cyan_teal: Color::Rgb(0, 255, 255),      // #00FFFF
            star_white: Color::Rgb(230, 237, 243),   // #E6EDF3
            muted_gray: Color::Rgb(128, 128, 128),   // #808080
            success_green: Color::Rgb(63, 185, 80),  // #3FB950
            warning_orange: Color::Rgb(210, 153, 34), // #D29922
            error_red: Color::Rgb(248, 81, 73),      // #F85149
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Health + severity colors
    // ─────────────────────────────────────────────────────────────────────

    pub fn band_color(&self, band: HealthBand) -> Color {
        match band {
            HealthBand::Critical => self.error_red,
            HealthBand::Warning => self.warning_orange,
            HealthBand::Good => self.accent_blue,
            HealthBand::Excellent => self.success_green,
            HealthBand::Neutral => Color::Reset,
        }
    }

    pub fn severity_style(&self, severity: Severity) -> Style {
        match severity {
            Severity::Error => self.error(),
            Severity::Warn => self.warning(),
            Severity::Info => Style::default().fg(self.accent_blue),
            Severity::Hint => self.dimmed(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Styles
    // ─────────────────────────────────────────────────────────────────────

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.star_white)
    }

    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.muted_gray)
    }

    /// Bold header style
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.accent_blue)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.amber_gold)
    }

    /// Focused panel border and selected tab
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.cyan_teal)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected list row
    pub fn selected_row(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.cyan_teal)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row of a list that does not have focus
    pub fn selected_row_inactive(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning_orange)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.error_red)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.highlight()
        } else {
            self.dimmed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors() {
        let theme = Theme::new();
        assert_eq!(theme.band_color(HealthBand::Critical), theme.error_red);
        assert_eq!(theme.band_color(HealthBand::Warning), theme.warning_orange);
        assert_eq!(theme.band_color(HealthBand::Good), theme.accent_blue);
        assert_eq!(theme.band_color(HealthBand::Excellent), theme.success_green);
    }

    #[test]
    fn test_border_focus() {
        let theme = Theme::new();
        assert_eq!(theme.border(true), theme.highlight());
        assert_eq!(theme.border(false), theme.dimmed());
    }
}
