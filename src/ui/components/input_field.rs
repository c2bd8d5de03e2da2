// Input field component - 한 줄 입력 필드
//
// 커서가 항상 보이도록 가로 스크롤하며, 폭 계산은 unicode-width 기준

use crate::models::TextInput;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

/// 입력 필드 위젯
pub struct InputField<'a> {
    input: &'a TextInput,
    focused: bool,
    bg_color: Color,
    fg_color: Color,
}

impl<'a> InputField<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            focused: false,
            bg_color: Color::Rgb(60, 60, 60),
            fg_color: Color::White,
        }
    }

    /// 포커스 여부 (커서 표시)
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.input_bg.to_color();
        self.fg_color = theme.input_fg.to_color();
        self
    }
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// 표시 시작 바이트 오프셋과 커서의 화면 열 계산
///
/// 커서 열이 `max_width` 안에 들어오도록 앞부분을 잘라냅니다.
pub fn visible_window(value: &str, cursor: usize, max_width: usize) -> (usize, usize) {
    let cursor_col: usize = value[..cursor].chars().map(char_width).sum();
    if max_width == 0 || cursor_col < max_width {
        return (0, cursor_col);
    }

    let target = cursor_col + 1 - max_width;
    let mut skipped = 0;
    for (i, c) in value.char_indices() {
        if skipped >= target {
            return (i, cursor_col - skipped);
        }
        skipped += char_width(c);
    }
    (value.len(), cursor_col - skipped)
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(self.fg_color).bg(self.bg_color);
        buf.set_style(Rect { height: 1, ..area }, style);

        let value = self.input.value();
        let cursor = self.input.cursor();
        // 마지막 칸은 끝 커서용
        let max_width = area.width.saturating_sub(1) as usize;
        let (start, cursor_col) = visible_window(value, cursor, max_width);

        buf.set_stringn(area.x, area.y, &value[start..], max_width, style);

        if !self.focused {
            return;
        }
        let cursor_x = area.x + cursor_col as u16;
        if cursor_x >= area.x + area.width {
            return;
        }
        if let Some(cell) = buf.cell_mut((cursor_x, area.y)) {
            if cursor < value.len() {
                cell.set_style(Style::default().fg(self.bg_color).bg(self.fg_color));
            } else {
                cell.set_char('▏');
                cell.set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_window_fits() {
        assert_eq!(visible_window("/var/media", 4, 20), (0, 4));
        assert_eq!(visible_window("/var/media", 10, 20), (0, 10));
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        // 10자, 폭 5, 커서 끝 → 끝 4자 + 커서 칸
        let (start, col) = visible_window("0123456789", 10, 5);
        assert_eq!(start, 6);
        assert_eq!(col, 4);
    }

    #[test]
    fn test_visible_window_wide_chars() {
        // 한글은 2칸
        let value = "가나다라";
        let (start, col) = visible_window(value, value.len(), 5);
        assert_eq!(&value[start..], "다라");
        assert_eq!(col, 4);
    }

    #[test]
    fn test_render_shows_tail_when_scrolled() {
        let input = TextInput::with_value("/srv/storage/recordings");
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        InputField::new(&input).focused(true).render(area, &mut buf);

        let line: String = (0..8)
            .map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect();
        assert_eq!(line, "cordings");
        assert_eq!(buf.cell((8, 0)).map(|c| c.symbol()), Some("▏"));
    }
}
