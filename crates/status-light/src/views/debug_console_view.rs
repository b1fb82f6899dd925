use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::DebugConsoleViewModel;
use crate::views::{View, ViewId};
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Debug console view - shows logs overlaid on the checker
#[derive(Debug, Clone)]
pub struct DebugConsoleView;

impl DebugConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DebugConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for DebugConsoleView {
    fn view_id(&self) -> ViewId {
        ViewId::DebugConsole
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::SCROLL_VERTICAL
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

/// Console height for a screen of `area_height` rows (70%, Quake-style)
pub fn console_height(area_height: u16) -> u16 {
    (u32::from(area_height) * 7 / 10) as u16
}

/// Number of log lines that fit inside the console borders
pub fn visible_height(area_height: u16) -> usize {
    console_height(area_height).saturating_sub(2) as usize
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let console_area = Rect {
        height: console_height(area.height),
        ..area
    };

    f.render_widget(Clear, console_area);

    let view_model = DebugConsoleViewModel::new(&state.debug_console);

    let block = Block::default()
        .title(view_model.title())
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    let lines: Vec<_> = view_model
        .visible_lines(visible_height(area.height))
        .iter()
        .map(|line| DebugConsoleViewModel::format_log_line(line, theme))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.panel_background());

    f.render_widget(paragraph, console_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_height_excludes_borders() {
        assert_eq!(console_height(40), 28);
        assert_eq!(visible_height(40), 26);
        assert_eq!(visible_height(2), 0);
    }
}
