//! Traffic Light Widget
//!
//! Three lamps, drawn vertically in the wide layout and side by side in the
//! compact one.

use crate::view_models::LampViewModel;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

const LAMP_ON: &str = "██████";
const LAMP_OFF: &str = "▒▒▒▒▒▒";

pub struct TrafficLightWidget<'a> {
    pub lamps: &'a [LampViewModel; 3],
    pub horizontal: bool,
}

impl Widget for TrafficLightWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lamp_width = LAMP_ON.chars().count() as u16;

        for (i, lamp) in self.lamps.iter().enumerate() {
            let i = i as u16;
            let style = Style::default().fg(lamp.color);
            let glyph = if lamp.lit { LAMP_ON } else { LAMP_OFF };
            // Each lamp is two rows of block glyphs
            let (x, y) = if self.horizontal {
                (area.x + i * (lamp_width + 2), area.y)
            } else {
                (area.x + area.width.saturating_sub(lamp_width) / 2, area.y + i * 3)
            };

            for row in 0..2 {
                if x + lamp_width <= area.right() && y + row < area.bottom() {
                    buf.set_string(x, y + row, glyph, style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn lamps() -> [LampViewModel; 3] {
        [Color::Red, Color::DarkGray, Color::DarkGray].map(|color| LampViewModel {
            lit: color != Color::DarkGray,
            color,
        })
    }

    #[test]
    fn test_vertical_lamps_are_stacked() {
        let lamps = lamps();
        let area = Rect::new(0, 0, 10, 8);
        let mut buf = Buffer::empty(area);
        TrafficLightWidget {
            lamps: &lamps,
            horizontal: false,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(2, 0)].fg, Color::Red);
        assert_eq!(buf[(2, 3)].fg, Color::DarkGray);
        assert_eq!(buf[(2, 6)].fg, Color::DarkGray);
        assert_eq!(buf[(2, 0)].symbol(), "█");
        assert_eq!(buf[(2, 3)].symbol(), "▒");
        assert_eq!(buf[(2, 2)].symbol(), " ");
    }

    #[test]
    fn test_horizontal_lamps_clip_to_area() {
        let lamps = lamps();
        let area = Rect::new(0, 0, 14, 2);
        let mut buf = Buffer::empty(area);
        TrafficLightWidget {
            lamps: &lamps,
            horizontal: true,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(0, 1)].fg, Color::Red);
        assert_eq!(buf[(8, 0)].fg, Color::DarkGray);
    }
}
