// Tab bar component - 스토리지 그룹 탭 바
//
// " 1:Default  2:Videos* " 형식. 활성 탭이 항상 보이도록 왼쪽을 잘라냄

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 탭 하나의 표시 정보
#[derive(Debug, Clone)]
pub struct TabLabel<'a> {
    pub title: &'a str,
    /// 추가 폼이 열려 있음
    pub editing: bool,
}

/// 탭 바 컴포넌트
pub struct TabBar<'a> {
    tabs: Vec<TabLabel<'a>>,
    active: usize,
    placeholder: &'a str,
    bg_color: Color,
    active_bg: Color,
    active_fg: Color,
    inactive_fg: Color,
}

impl<'a> TabBar<'a> {
    pub fn new(tabs: Vec<TabLabel<'a>>) -> Self {
        Self {
            tabs,
            active: 0,
            placeholder: "",
            bg_color: Color::Rgb(45, 45, 48),
            active_bg: Color::Rgb(0, 120, 212),
            active_fg: Color::White,
            inactive_fg: Color::Gray,
        }
    }

    pub fn active(mut self, index: usize) -> Self {
        self.active = index;
        self
    }

    /// 탭이 없을 때 표시할 문구
    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = text;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.header_bg.to_color();
        self.active_bg = theme.tab_active_bg.to_color();
        self.active_fg = theme.tab_active_fg.to_color();
        self.inactive_fg = theme.tab_inactive_fg.to_color();
        self
    }

    fn label_text(index: usize, tab: &TabLabel<'_>) -> String {
        let marker = if tab.editing { "*" } else { "" };
        if index < 9 {
            format!(" {}:{}{} ", index + 1, tab.title, marker)
        } else {
            format!(" {}{} ", tab.title, marker)
        }
    }

    /// 활성 탭이 보이도록 건너뛸 탭 수 계산
    fn first_visible(labels: &[String], active: usize, width: usize) -> usize {
        let mut first = 0;
        loop {
            let used: usize = labels[first..=active].iter().map(|l| l.width() + 1).sum();
            // 잘린 탭이 있으면 '‹' 한 칸
            let budget = if first > 0 { width.saturating_sub(1) } else { width };
            if used <= budget || first == active {
                return first;
            }
            first += 1;
        }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        if self.tabs.is_empty() {
            let style = Style::default()
                .fg(self.inactive_fg)
                .add_modifier(Modifier::ITALIC);
            buf.set_stringn(
                area.x + 1,
                area.y,
                self.placeholder,
                area.width.saturating_sub(1) as usize,
                style,
            );
            return;
        }

        let labels: Vec<String> = self
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| Self::label_text(i, tab))
            .collect();
        let active = self.active.min(labels.len() - 1);
        let first = Self::first_visible(&labels, active, area.width as usize);

        let mut x = area.x;
        let right = area.x + area.width;
        if first > 0 {
            buf.set_string(x, area.y, "‹", Style::default().fg(self.inactive_fg));
            x += 1;
        }
        for (i, label) in labels.iter().enumerate().skip(first) {
            if x >= right {
                break;
            }
            let style = if i == active {
                Style::default()
                    .fg(self.active_fg)
                    .bg(self.active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.inactive_fg).bg(self.bg_color)
            };
            let remaining = (right - x) as usize;
            let (next_x, _) = buf.set_stringn(x, area.y, label, remaining, style);
            x = next_x + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_labels_are_numbered_and_marked() {
        let tabs = vec![
            TabLabel {
                title: "Default",
                editing: false,
            },
            TabLabel {
                title: "Videos",
                editing: true,
            },
        ];
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        TabBar::new(tabs).active(1).render(area, &mut buf);

        let text = row_text(&buf, 40);
        assert!(text.starts_with(" 1:Default   2:Videos* "));
    }

    #[test]
    fn test_placeholder_when_empty() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        TabBar::new(Vec::new())
            .placeholder("No storage groups")
            .render(area, &mut buf);

        assert!(row_text(&buf, 30).contains("No storage groups"));
    }

    #[test]
    fn test_first_visible_keeps_active_tab_on_screen() {
        let labels: Vec<String> = (0..6).map(|i| format!(" {}:Group{} ", i + 1, i)).collect();
        // 각 라벨 10칸 + 간격 1
        assert_eq!(TabBar::first_visible(&labels, 1, 30), 0);
        assert_eq!(TabBar::first_visible(&labels, 5, 30), 4);
    }
}
