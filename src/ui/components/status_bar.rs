// Status bar component - 상태바 컴포넌트
//
// 왼쪽: 알림 메시지 (정보/성공/오류), 오른쪽: 그룹/디렉토리 개수와 마지막 로드 시각

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 알림 수준
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 알림 메시지
    notice: Option<(&'a str, NoticeLevel)>,
    group_count: usize,
    dir_count: usize,
    /// 마지막 로드 시각 (포맷된 문자열)
    loaded_at: Option<&'a str>,
    bg_color: Color,
    fg_color: Color,
    success_color: Color,
    error_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            notice: None,
            group_count: 0,
            dir_count: 0,
            loaded_at: None,
            bg_color: Color::Rgb(0, 122, 204),
            fg_color: Color::White,
            success_color: Color::Rgb(78, 201, 176),
            error_color: Color::Rgb(244, 71, 71),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notice(mut self, notice: Option<(&'a str, NoticeLevel)>) -> Self {
        self.notice = notice;
        self
    }

    pub fn group_count(mut self, count: usize) -> Self {
        self.group_count = count;
        self
    }

    pub fn dir_count(mut self, count: usize) -> Self {
        self.dir_count = count;
        self
    }

    pub fn loaded_at(mut self, loaded_at: Option<&'a str>) -> Self {
        self.loaded_at = loaded_at;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.success_color = theme.success.to_color();
        self.error_color = theme.error.to_color();
        self
    }

    fn summary(&self) -> String {
        let groups = if self.group_count == 1 { "group" } else { "groups" };
        let dirs = if self.dir_count == 1 { "dir" } else { "dirs" };
        match self.loaded_at {
            Some(time) => format!(
                "{} {}, {} {} | loaded {} ",
                self.group_count, groups, self.dir_count, dirs, time
            ),
            None => format!("{} {}, {} {} ", self.group_count, groups, self.dir_count, dirs),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let right = self.summary();
        let right_width = right.width();
        let left_budget = (area.width as usize).saturating_sub(right_width + 1);

        let mut spans = vec![Span::raw(" ")];
        let mut left_width = 1;
        if let Some((text, level)) = self.notice {
            let style = match level {
                NoticeLevel::Info => Style::default().fg(self.fg_color),
                NoticeLevel::Success => Style::default()
                    .fg(self.success_color)
                    .add_modifier(Modifier::BOLD),
                NoticeLevel::Error => Style::default()
                    .fg(self.error_color)
                    .add_modifier(Modifier::BOLD),
            };
            let shown = super::dir_table::truncate_middle(text, left_budget.saturating_sub(1));
            left_width += shown.width();
            spans.push(Span::styled(shown, style));
        }

        let padding = (area.width as usize).saturating_sub(left_width + right_width);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(right, Style::default().fg(self.fg_color)));

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
    fn test_summary_pluralization() {
        let bar = StatusBar::new().group_count(1).dir_count(3);
        assert_eq!(bar.summary(), "1 group, 3 dirs ");

        let bar = StatusBar::new()
            .group_count(2)
            .dir_count(1)
            .loaded_at(Some("12:30:01"));
        assert_eq!(bar.summary(), "2 groups, 1 dir | loaded 12:30:01 ");
    }

    #[test]
    fn test_notice_on_left_summary_on_right() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new()
            .notice(Some((
                "Storage Group Directory save Succeeded.",
                NoticeLevel::Success,
            )))
            .group_count(2)
            .dir_count(2)
            .render(area, &mut buf);

        let line = text(&buf, 80);
        assert!(line.starts_with(" Storage Group Directory save Succeeded."));
        assert!(line.ends_with("2 groups, 2 dirs "));
    }
}
