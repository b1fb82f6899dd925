//! Checker View Model
//!
//! Pre-computes everything the checker screen draws: the input line, the
//! three lamps, the info panel text and one chart bar per history entry.

use crate::state::AppState;
use chrono::{DateTime, Local};
use ratatui::style::Color;
use status_core::{Category, Light, Lookup, ResolutionSource, StatusEntry};

/// Bars taller than this are clamped; the label still shows the real code
pub const BAR_CHART_MAX: u64 = 600;

/// Lamps from top to bottom
const LAMP_ORDER: [Light; 3] = [Light::Red, Light::Amber, Light::Green];

/// Screen layout, chosen from the terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Light and info side by side, chart below
    Wide,
    /// Everything stacked, smaller chart labels
    Compact,
}

impl LayoutMode {
    pub fn from_width(width: u16, compact_width: u16) -> Self {
        if width < compact_width {
            Self::Compact
        } else {
            Self::Wide
        }
    }
}

/// One lamp of the traffic light
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LampViewModel {
    pub lit: bool,
    pub color: Color,
}

/// One bar in the history chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryBarViewModel {
    pub label: String,
    /// Bar height, clamped to [`BAR_CHART_MAX`]
    pub value: u64,
    /// Text drawn on the bar (the real code)
    pub text: String,
    pub color: Color,
}

/// View model for the checker screen
#[derive(Debug, Clone)]
pub struct CheckerViewModel {
    pub layout: LayoutMode,
    pub input: String,
    /// Show the placeholder instead of the (empty) input
    pub show_placeholder: bool,
    /// Lamps from top to bottom: red, amber, green
    pub lamps: [LampViewModel; 3],
    pub code_text: String,
    pub category_text: String,
    pub detail_text: String,
    pub busy_text: Option<String>,
    /// Whether Ctrl+O has a URL to open
    pub can_open_browser: bool,
    pub bars: Vec<HistoryBarViewModel>,
}

impl CheckerViewModel {
    pub fn from_state(state: &AppState, width: u16) -> Self {
        let theme = &state.theme;
        let checker = &state.checker;
        let session = &checker.session;
        let layout = LayoutMode::from_width(width, state.app_config.compact_width);
        let current_light = session.light();

        let lamps = LAMP_ORDER.map(|light| LampViewModel {
            lit: light == current_light,
            color: theme.lamp(light, current_light),
        });

        let (code_text, category_text, detail_text) = match session.current() {
            Some(lookup) => describe(lookup),
            None => (
                "---".to_string(),
                String::new(),
                "Enter a status code, reason phrase or URL".to_string(),
            ),
        };

        let busy_text = checker
            .pending_input
            .as_ref()
            .filter(|_| checker.is_busy())
            .map(|input| match checker.in_flight {
                1 => format!("Checking {}", input),
                n => format!("Checking {} (+{} more)", input, n - 1),
            });

        let bars = session
            .history()
            .iter()
            .map(|entry| HistoryBarViewModel {
                label: bar_label(entry, layout),
                value: entry.code().min(BAR_CHART_MAX),
                text: entry.code().to_string(),
                color: theme.category_color(entry.category()),
            })
            .collect();

        Self {
            layout,
            input: checker.input.clone(),
            show_placeholder: checker.input.is_empty(),
            lamps,
            code_text,
            category_text,
            detail_text,
            busy_text,
            can_open_browser: session.browser_url().is_some(),
            bars,
        }
    }
}

fn describe(lookup: &Lookup) -> (String, String, String) {
    let category = lookup.classification.category;
    let code_text = lookup
        .code
        .map(|code| code.to_string())
        .unwrap_or_else(|| "?".to_string());

    let category_text = match category {
        Category::Invalid => category.description().to_string(),
        _ => format!("{} {}", category.label(), category.description()),
    };

    let detail_text = match lookup.source {
        ResolutionSource::Numeric => format!("Parsed {:?} as a number", lookup.input),
        ResolutionSource::Url => format!("HEAD {} answered {}", lookup.input, code_text),
        ResolutionSource::Phrase => format!("Matched reason phrase {:?}", lookup.input),
        ResolutionSource::Unresolved => format!("Could not resolve {:?}", lookup.input),
    };

    (code_text, category_text, detail_text)
}

fn bar_label(entry: &StatusEntry, layout: LayoutMode) -> String {
    match layout {
        LayoutMode::Compact => entry.category().label().to_string(),
        LayoutMode::Wide => DateTime::from_timestamp_millis(entry.timestamp())
            .map(|utc| utc.with_timezone(&Local).format("%H:%M:%S").to_string())
            .unwrap_or_else(|| entry.category().label().to_string()),
    }
}
