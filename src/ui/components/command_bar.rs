// Command bar component - 하단 커맨드 바 컴포넌트
//
// 일반 모드는 액션 레지스트리에서, 폼 편집 중에는 폼 전용 단축키 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드 항목
#[derive(Debug, Clone)]
pub struct CommandItem {
    /// 단축키
    pub key: String,
    /// 레이블
    pub label: String,
    /// 활성화 여부
    pub enabled: bool,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    commands: Vec<CommandItem>,
    bg_color: Color,
    key_fg_color: Color,
    label_fg_color: Color,
    disabled_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            bg_color: Color::Rgb(30, 30, 30),
            key_fg_color: Color::Rgb(0, 120, 212),
            label_fg_color: Color::Rgb(212, 212, 212),
            disabled_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 추가 폼 편집 중 표시할 항목 (저장 중이면 비활성)
    pub fn form_commands(submitting: bool) -> Vec<CommandItem> {
        vec![
            CommandItem::new("Enter", "Save").enabled(!submitting),
            CommandItem::new("Esc", "Cancel").enabled(!submitting),
            CommandItem::new("Tab", "Field").enabled(!submitting),
            CommandItem::new("^B", "Browse").enabled(!submitting),
            CommandItem::new("^D", "Remove"),
            CommandItem::new("A-←/→", "Group"),
            CommandItem::new("F1", "Help"),
        ]
    }

    pub fn commands(mut self, commands: Vec<CommandItem>) -> Self {
        self.commands = commands;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_bar_bg.to_color();
        self.key_fg_color = theme.accent.to_color();
        self.label_fg_color = theme.command_bar_fg.to_color();
        self.disabled_color = theme.row_pending.to_color();
        self
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = vec![Span::raw(" ")];
        for (i, cmd) in self.commands.iter().enumerate() {
            let (key_style, label_style) = if cmd.enabled {
                (
                    Style::default()
                        .fg(self.key_fg_color)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(self.label_fg_color),
                )
            } else {
                (
                    Style::default().fg(self.disabled_color),
                    Style::default().fg(self.disabled_color),
                )
            };

            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(cmd.key.as_str(), key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(cmd.label.as_str(), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_item_creation() {
        let item = CommandItem::new("a", "Add");
        assert_eq!(item.key, "a");
        assert_eq!(item.label, "Add");
        assert!(item.enabled);
    }

    #[test]
    fn test_form_commands_disabled_while_submitting() {
        let items = CommandBar::form_commands(true);
        let save = items.iter().find(|i| i.label == "Save").unwrap();
        assert!(!save.enabled);
        let help = items.iter().find(|i| i.label == "Help").unwrap();
        assert!(help.enabled);
        let remove = items.iter().find(|i| i.label == "Remove").unwrap();
        assert!(remove.enabled);
    }

    #[test]
    fn test_render_joins_items() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        CommandBar::new()
            .commands(vec![CommandItem::new("a", "Add"), CommandItem::new("q", "Quit")])
            .render(area, &mut buf);

        let line: String = (0..40)
            .map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect();
        assert!(line.starts_with(" a:Add  q:Quit"));
    }
}
