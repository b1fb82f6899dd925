//! status-light theme - centralized color and style management

use ratatui::style::{Color, Modifier, Style, palette::tailwind};
use status_core::{Category, Light};

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Traffic light lamps (lit)
    pub lamp_green: Color,
    pub lamp_amber: Color,
    pub lamp_red: Color,
    /// Color of an unlit lamp
    pub lamp_off: Color,

    // Category colors used by the history chart
    pub category_informational: Color,
    pub category_success: Color,
    pub category_redirection: Color,
    pub category_client_error: Color,
    pub category_server_error: Color,
    pub category_invalid: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c500,

            accent_primary: tailwind::CYAN.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            lamp_green: tailwind::GREEN.c500,
            lamp_amber: tailwind::AMBER.c500,
            lamp_red: tailwind::RED.c500,
            lamp_off: tailwind::SLATE.c700,

            category_informational: tailwind::SKY.c400,
            category_success: tailwind::GREEN.c400,
            category_redirection: tailwind::TEAL.c400,
            category_client_error: tailwind::ORANGE.c400,
            category_server_error: tailwind::RED.c500,
            category_invalid: tailwind::AMBER.c400,
        }
    }

    /// Color of a lamp position, lit only when it matches the current light
    pub fn lamp(&self, lamp: Light, current: Light) -> Color {
        if lamp != current {
            return self.lamp_off;
        }
        match lamp {
            Light::Green => self.lamp_green,
            Light::Amber => self.lamp_amber,
            Light::Red => self.lamp_red,
            Light::Off => self.lamp_off,
        }
    }

    /// Chart color for a status family
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Informational => self.category_informational,
            Category::Success => self.category_success,
            Category::Redirection => self.category_redirection,
            Category::ClientError => self.category_client_error,
            Category::ServerError => self.category_server_error,
            Category::Invalid => self.category_invalid,
        }
    }

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Enter" in "Enter check")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented text (cursor, focus markers)
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    pub fn log_error(&self) -> Style {
        Style::default().fg(self.status_error)
    }

    pub fn log_warning(&self) -> Style {
        Style::default().fg(self.status_warning)
    }

    pub fn log_info(&self) -> Style {
        Style::default().fg(self.status_info)
    }

    pub fn log_debug(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}
