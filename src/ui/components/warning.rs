// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 너무 작을 때 표시. 백그라운드 요청은 계속 처리됨

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// 경고 화면 컴포넌트
pub struct WarningScreen {
    current_size: (u16, u16),
    warning_color: Color,
    bg_color: Color,
    fg_color: Color,
    error_color: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            warning_color: Color::Yellow,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            error_color: Color::Red,
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.error_color = theme.error.to_color();
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let bold_warning = Style::default()
            .fg(self.warning_color)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().fg(self.fg_color);
        let (width, height) = self.current_size;

        vec![
            Line::from(Span::styled("Terminal too small", bold_warning)),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{}x{}", width, height),
                    Style::default().fg(self.error_color),
                ),
                Span::styled(" < ", text),
                Span::styled(format!("{}x{}", MIN_WIDTH, MIN_HEIGHT), text),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Resize, or press Ctrl+C to quit",
                text.add_modifier(Modifier::DIM),
            )),
        ]
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));

        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
