//! Debug Console View Model

use crate::state::DebugConsoleState;
use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};
use status_light_theme::Theme;

/// View model for debug console - handles presentation logic
pub struct DebugConsoleViewModel<'a> {
    state: &'a DebugConsoleState,
}

impl<'a> DebugConsoleViewModel<'a> {
    pub fn new(state: &'a DebugConsoleState) -> Self {
        Self { state }
    }

    /// Get the visible lines based on scroll offset and available height
    ///
    /// scroll_offset = 0 means we're at the bottom (showing newest logs)
    /// scroll_offset > 0 means we've scrolled up (showing older logs)
    pub fn visible_lines(&self, available_height: usize) -> &'a [String] {
        let state: &'a DebugConsoleState = self.state;
        let lines = &state.lines;
        let total = lines.len();

        if total == 0 || available_height == 0 {
            return &[];
        }

        let max_scroll = total.saturating_sub(available_height);
        let effective_scroll = state.scroll_offset.min(max_scroll);

        // end is the index AFTER the last visible line
        let end = total.saturating_sub(effective_scroll);
        let start = end.saturating_sub(available_height);

        &lines[start..end]
    }

    /// Get the title for the debug console with scroll indicator
    pub fn title(&self) -> String {
        if self.state.scroll_offset > 0 {
            format!(
                " Debug Console (c to clear, Ctrl+L to close) - ↓{} ",
                self.state.scroll_offset
            )
        } else {
            " Debug Console (c to clear, Ctrl+L to close) ".to_string()
        }
    }

    /// Color a log line by the level in its first `[...]` segment
    pub fn format_log_line(line: &str, theme: &Theme) -> Line<'static> {
        let Some((prefix, level, rest)) = split_level(line) else {
            return Line::from(Span::styled(line.to_string(), theme.text()));
        };

        let style: Style = match level {
            "ERROR" => theme.log_error(),
            "WARN" => theme.log_warning(),
            "INFO" => theme.log_info(),
            "DEBUG" | "TRACE" => theme.log_debug(),
            _ => theme.text(),
        };

        Line::from(vec![
            Span::styled(prefix.to_string(), theme.muted()),
            Span::styled(format!("[{}]", level), style.bold()),
            Span::styled(rest.to_string(), theme.text()),
        ])
    }
}

/// Split `"<time> [LEVEL] message"` into its three parts
fn split_level(line: &str) -> Option<(&str, &str, &str)> {
    let open = line.find('[')?;
    let close = open + line[open..].find(']')?;
    let level = line[open + 1..close].trim();
    Some((&line[..open], level, &line[close + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(count: usize, scroll_offset: usize) -> DebugConsoleState {
        DebugConsoleState {
            lines: (0..count).map(|i| format!("line {}", i)).collect(),
            scroll_offset,
            visible_height: 0,
        }
    }

    #[test]
    fn test_visible_lines_at_bottom() {
        let state = state(10, 0);
        let vm = DebugConsoleViewModel::new(&state);
        assert_eq!(vm.visible_lines(3), &["line 7", "line 8", "line 9"]);
    }

    #[test]
    fn test_visible_lines_scrolled_and_clamped() {
        let state = state(10, 2);
        let vm = DebugConsoleViewModel::new(&state);
        assert_eq!(vm.visible_lines(3), &["line 5", "line 6", "line 7"]);

        let state = DebugConsoleState {
            scroll_offset: 100,
            ..state
        };
        let vm = DebugConsoleViewModel::new(&state);
        assert_eq!(vm.visible_lines(3), &["line 0", "line 1", "line 2"]);
    }

    #[test]
    fn test_split_level_handles_padding() {
        assert_eq!(
            split_level("12:00:00 [ WARN] probe failed"),
            Some(("12:00:00 ", "WARN", " probe failed"))
        );
        assert_eq!(split_level("no level here"), None);
    }
}
