use crate::actions::{Action, CheckerAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::{CheckerViewModel, LayoutMode, StatusBarViewModel};
use crate::views::status_bar::StatusBarWidget;
use crate::views::traffic_light::TrafficLightWidget;
use crate::views::{View, ViewId};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
};
use status_light_theme::Theme;

/// The main screen: input, traffic light, info panel and history chart
#[derive(Debug, Clone)]
pub struct CheckerView;

impl CheckerView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CheckerView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for CheckerView {
    fn view_id(&self) -> ViewId {
        ViewId::Checker
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => CheckerAction::Char(c),
            TextInputAction::Backspace => CheckerAction::Backspace,
            TextInputAction::ClearLine | TextInputAction::Escape => CheckerAction::ClearInput,
            TextInputAction::Confirm => CheckerAction::Submit,
        };
        Some(Action::Checker(action))
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = CheckerViewModel::from_state(state, area.width);

    f.render_widget(Block::default().style(theme.panel_background()), area);

    let [input_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_input(&vm, theme, input_area, f);

    match vm.layout {
        LayoutMode::Wide => {
            let [top, chart] =
                Layout::vertical([Constraint::Length(11), Constraint::Min(6)]).areas(body_area);
            let [light, info] =
                Layout::horizontal([Constraint::Length(12), Constraint::Min(20)]).areas(top);
            render_light(&vm, theme, light, f, false);
            render_info(&vm, theme, info, f);
            render_chart(&vm, theme, chart, f, 8);
        }
        LayoutMode::Compact => {
            let [light, info, chart] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4),
                    Constraint::Length(6),
                    Constraint::Min(5),
                ])
                .areas(body_area);
            render_light(&vm, theme, light, f, true);
            render_info(&vm, theme, info, f);
            render_chart(&vm, theme, chart, f, 7);
        }
    }

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), status_area);
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
}

fn render_input(vm: &CheckerViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let line = if vm.show_placeholder {
        Line::from(vec![
            Span::styled("▏", theme.accent()),
            Span::styled("404, not found or https://example.com", theme.muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled(vm.input.as_str(), theme.text()),
            Span::styled("▏", theme.accent()),
        ])
    };

    f.render_widget(
        Paragraph::new(line).block(panel(" Status code, phrase or URL ", theme)),
        area,
    );
}

fn render_light(vm: &CheckerViewModel, theme: &Theme, area: Rect, f: &mut Frame, horizontal: bool) {
    let block = panel(" Light ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        TrafficLightWidget {
            lamps: &vm.lamps,
            horizontal,
        },
        inner,
    );
}

fn render_info(vm: &CheckerViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                vm.code_text.as_str(),
                theme.text().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(vm.category_text.as_str(), theme.text_secondary()),
        ]),
        Line::from(Span::styled(vm.detail_text.as_str(), theme.muted())),
    ];

    if let Some(busy) = &vm.busy_text {
        lines.push(Line::from(Span::styled(format!("⏳ {}", busy), theme.accent())));
    }

    lines.push(Line::default());
    let mut hints = vec![
        Span::styled("Enter", theme.key_hint()),
        Span::styled(" check  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" clear  ", theme.muted()),
    ];
    if vm.can_open_browser {
        hints.push(Span::styled("Ctrl+O", theme.key_hint()));
        hints.push(Span::styled(" open  ", theme.muted()));
    }
    hints.push(Span::styled("Ctrl+L", theme.key_hint()));
    hints.push(Span::styled(" logs  ", theme.muted()));
    hints.push(Span::styled("Ctrl+C", theme.key_hint()));
    hints.push(Span::styled(" quit", theme.muted()));
    lines.push(Line::from(hints));

    f.render_widget(
        Paragraph::new(lines)
            .block(panel(" Status ", theme))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_chart(vm: &CheckerViewModel, theme: &Theme, area: Rect, f: &mut Frame, bar_width: u16) {
    let block = panel(" History ", theme);

    if vm.bars.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No lookups yet", theme.muted())).block(block),
            area,
        );
        return;
    }

    let bars: Vec<Bar> = vm
        .bars
        .iter()
        .map(|bar| {
            Bar::default()
                .value(bar.value)
                .text_value(bar.text.clone())
                .label(Line::from(bar.label.clone()))
                .style(Style::default().fg(bar.color))
                .value_style(Style::default().fg(theme.bg_primary).bg(bar.color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .max(crate::view_models::checker_view_model::BAR_CHART_MAX);

    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_text_input_translation() {
        let view = CheckerView::new();
        assert!(matches!(
            view.translate_text_input(TextInputAction::Confirm),
            Some(Action::Checker(CheckerAction::Submit))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::Escape),
            Some(Action::Checker(CheckerAction::ClearInput))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::Char('x')),
            Some(Action::Checker(CheckerAction::Char('x')))
        ));
    }

    #[test]
    fn test_renders_in_both_layouts() {
        for (width, mode) in [(120, LayoutMode::Wide), (50, LayoutMode::Compact)] {
            let state = AppState::default();
            let vm = CheckerViewModel::from_state(&state, width);
            assert_eq!(vm.layout, mode);

            let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
            terminal
                .draw(|f| CheckerView::new().render(&state, f.area(), f))
                .unwrap();
        }
    }
}
