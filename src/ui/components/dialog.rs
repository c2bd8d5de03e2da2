//! 다이얼로그 시스템
//!
//! 삭제 확인, 호스트 필터 선택, 단축키 도움말. 오류/안내는 다이얼로그가 아니라
//! 상태바로만 표시합니다.

use crate::core::actions::generate_help_entries;
use crate::models::RowKey;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;
/// 도움말 키 컬럼 폭
const HELP_KEY_WIDTH: u16 = 29;

/// 확인 다이얼로그가 승인되었을 때 수행할 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPurpose {
    RemoveDirectory { tab_id: usize, key: RowKey },
}

/// 다이얼로그 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    /// 확인 다이얼로그 (OK/Cancel)
    Confirm {
        title: String,
        message: String,
        selected_button: usize, // 0: OK, 1: Cancel
        purpose: ConfirmPurpose,
    },
    /// 호스트 필터 선택 ("ALL" + 알려진 호스트)
    HostFilter {
        items: Vec<String>,
        selected_index: usize,
    },
    /// 단축키 도움말
    Help { scroll_offset: usize },
}

impl DialogKind {
    /// 새 확인 다이얼로그 생성 (Cancel 기본 선택)
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        purpose: ConfirmPurpose,
    ) -> Self {
        DialogKind::Confirm {
            title: title.into(),
            message: message.into(),
            selected_button: 1,
            purpose,
        }
    }

    /// 호스트 필터 선택 다이얼로그 (현재 필터 항목에 커서)
    pub fn host_filter(items: Vec<String>, current: &str) -> Self {
        let selected_index = items.iter().position(|item| item == current).unwrap_or(0);
        DialogKind::HostFilter {
            items,
            selected_index,
        }
    }

    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }
}

/// 도움말 전체 행 수 (카테고리 헤더 + 항목 + 빈 줄)
pub fn help_line_count() -> usize {
    generate_help_entries()
        .iter()
        .map(|(_, items)| items.len() + 2)
        .sum()
}

/// 다이얼로그 위젯
pub struct Dialog<'a> {
    kind: &'a DialogKind,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    key_color: Color,
    hint_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            key_color: Color::Rgb(86, 156, 214),
            hint_color: Color::Rgb(128, 128, 128),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.header_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.accent.to_color();
        self.title_color = theme.accent.to_color();
        self.key_color = theme.success.to_color();
        self.hint_color = theme.row_pending.to_color();
        self.button_bg = theme.input_bg.to_color();
        self.button_fg = theme.fg_primary.to_color();
        self.button_selected_bg = theme.row_selected_bg.to_color();
        self.button_selected_fg = theme.row_selected.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 반응형)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::Confirm { message, .. } => {
                let w = 56u16.min(sw.saturating_sub(4)).max(30);
                let text_width = w.saturating_sub(DIALOG_H_PADDING * 2).max(1) as usize;
                let lines = message.width().div_ceil(text_width).max(1) as u16;
                (w, 5 + lines)
            }
            DialogKind::HostFilter { items, .. } => {
                let longest = items.iter().map(|i| i.width()).max().unwrap_or(0) as u16;
                let w = (longest + 10).clamp(30, 50);
                let h = (items.len() as u16 + 4).min(sh.saturating_sub(4)).max(6);
                (w, h)
            }
            DialogKind::Help { .. } => {
                let w = 72u16.min(sw.saturating_sub(4)).max(40);
                let h = sh.saturating_sub(4).max(10);
                (w, h)
            }
        };

        let width = width.min(sw.saturating_sub(2));
        let height = height.min(sh.saturating_sub(2));

        Rect {
            x: screen.x + (sw.saturating_sub(width)) / 2,
            y: screen.y + (sh.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn frame(&self, title: &str, area: Rect, buf: &mut Buffer) -> Rect {
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        block.render(area, buf);

        Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING * 2),
        }
    }

    /// 버튼 렌더링 헬퍼
    fn render_button(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        label: &str,
        selected: bool,
    ) -> u16 {
        let (bg, fg) = if selected {
            (self.button_selected_bg, self.button_selected_fg)
        } else {
            (self.button_bg, self.button_fg)
        };
        let padded = format!(" {} ", label);
        buf.set_string(x, y, &padded, Style::default().fg(fg).bg(bg));
        padded.width() as u16
    }

    fn render_confirm(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        message: &str,
        selected_button: usize,
    ) {
        let inner = self.frame(title, area, buf);

        let msg_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(msg_area, buf);

        // 버튼 (하단 중앙): " OK " + 2 + " Cancel "
        let button_y = area.y + area.height.saturating_sub(2);
        let buttons_width = 4 + 2 + 8;
        let button_x = area.x + (area.width.saturating_sub(buttons_width)) / 2;
        let ok_width = self.render_button(buf, button_x, button_y, "OK", selected_button == 0);
        self.render_button(
            buf,
            button_x + ok_width + 2,
            button_y,
            "Cancel",
            selected_button == 1,
        );
    }

    fn render_host_filter(
        &self,
        buf: &mut Buffer,
        area: Rect,
        items: &[String],
        selected_index: usize,
    ) {
        let inner = self.frame("Show Host", area, buf);
        let visible = inner.height.saturating_sub(1) as usize;
        let offset = if visible == 0 {
            0
        } else {
            selected_index.saturating_sub(visible - 1)
        };

        for (i, item) in items.iter().enumerate().skip(offset).take(visible) {
            let y = inner.y + (i - offset) as u16;
            let style = if i == selected_index {
                Style::default()
                    .fg(self.button_selected_fg)
                    .bg(self.button_selected_bg)
            } else {
                Style::default().fg(self.fg_color)
            };
            let width = inner.width.saturating_sub(1) as usize;
            let text = format!(" {:<width$}", item, width = width);
            buf.set_stringn(inner.x, y, text, inner.width as usize, style);
        }

        let hint = "Enter:Select  Esc:Close";
        let hint_x = area.x + (area.width.saturating_sub(hint.len() as u16)) / 2;
        buf.set_string(
            hint_x,
            area.y + area.height.saturating_sub(2),
            hint,
            Style::default().fg(self.hint_color),
        );
    }

    fn render_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        let inner = self.frame("Keyboard Shortcuts", area, buf);
        let inner = Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        };

        let header_style = Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(self.key_color);
        let desc_style = Style::default().fg(self.fg_color);

        // (is_header, col1, col2)
        let entries = generate_help_entries();
        let mut rows: Vec<(bool, &str, &str)> = Vec::new();
        for (category, items) in &entries {
            rows.push((true, category, ""));
            for (key, desc) in items {
                rows.push((false, key, desc));
            }
            rows.push((false, "", ""));
        }

        let visible = inner.height as usize;
        let max_scroll = rows.len().saturating_sub(visible);
        let scroll = scroll_offset.min(max_scroll);

        for (i, (is_header, col1, col2)) in
            rows.iter().skip(scroll).take(visible).enumerate()
        {
            let y = inner.y + i as u16;
            if *is_header {
                buf.set_string(inner.x, y, col1, header_style);
            } else if !col1.is_empty() {
                buf.set_string(inner.x + 2, y, col1, key_style);
                buf.set_stringn(
                    inner.x + HELP_KEY_WIDTH,
                    y,
                    col2,
                    inner.width.saturating_sub(HELP_KEY_WIDTH) as usize,
                    desc_style,
                );
            }
        }

        let hint = if max_scroll > 0 {
            "Esc/?:Close  j/k:Scroll"
        } else {
            "Esc/?:Close"
        };
        let hint_x = area.x + (area.width.saturating_sub(hint.len() as u16)) / 2;
        buf.set_string(
            hint_x,
            area.y + area.height.saturating_sub(2),
            hint,
            Style::default().fg(self.hint_color),
        );
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::Confirm {
                title,
                message,
                selected_button,
                ..
            } => self.render_confirm(buf, dialog_area, title, message, *selected_button),
            DialogKind::HostFilter {
                items,
                selected_index,
            } => self.render_host_filter(buf, dialog_area, items, *selected_index),
            DialogKind::Help { scroll_offset } => {
                self.render_help(buf, dialog_area, *scroll_offset)
            }
        }
    }
}
