// Header component - 상단 헤더
//
// 앱 이름, 서버 주소, 호스트 필터, 로드 상태 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 헤더에 표시할 로드 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Idle,
    Loading,
    Failed,
}

/// 헤더 컴포넌트
pub struct Header<'a> {
    server: &'a str,
    host_filter: &'a str,
    state: HeaderState,
    bg_color: Color,
    fg_color: Color,
    accent_color: Color,
    warning_color: Color,
    error_color: Color,
}

impl<'a> Header<'a> {
    pub fn new(server: &'a str, host_filter: &'a str) -> Self {
        Self {
            server,
            host_filter,
            state: HeaderState::Idle,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::White,
            accent_color: Color::Rgb(86, 156, 214),
            warning_color: Color::Rgb(255, 165, 0),
            error_color: Color::Rgb(244, 71, 71),
        }
    }

    pub fn state(mut self, state: HeaderState) -> Self {
        self.state = state;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.header_bg.to_color();
        self.fg_color = theme.header_fg.to_color();
        self.accent_color = theme.accent.to_color();
        self.warning_color = theme.warning.to_color();
        self.error_color = theme.error.to_color();
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let label = Style::default().fg(self.fg_color);
        let value = Style::default()
            .fg(self.accent_color)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled(" Storage Groups ", value),
            Span::styled("│ server ", label),
            Span::styled(self.server, value),
            Span::styled(" │ host ", label),
            Span::styled(self.host_filter, value),
        ];
        match self.state {
            HeaderState::Idle => {}
            HeaderState::Loading => {
                spans.push(Span::styled(" │ ", label));
                spans.push(Span::styled("Loading…", Style::default().fg(self.warning_color)));
            }
            HeaderState::Failed => {
                spans.push(Span::styled(" │ ", label));
                spans.push(Span::styled(
                    "Load failed",
                    Style::default()
                        .fg(self.error_color)
                        .add_modifier(Modifier::BOLD),
                ));
            }
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_header_shows_server_and_filter() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Header::new("http://localhost:6544/", "ALL").render(area, &mut buf);

        let line = text(&buf, 80);
        assert!(line.contains("http://localhost:6544/"));
        assert!(line.contains("host ALL"));
        assert!(!line.contains("Loading"));
    }

    #[test]
    fn test_header_loading_state() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Header::new("srv", "host1")
            .state(HeaderState::Loading)
            .render(area, &mut buf);

        assert!(text(&buf, 80).contains("Loading…"));
    }
}
