// Directory table component - 스토리지 그룹 디렉토리 테이블
//
// Host / Directory / Id 컬럼, 커서 행 강조, 삭제 진행 중 행 표시

use crate::models::DirRow;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 6;
const MIN_HOST_WIDTH: usize = 8;
const MAX_HOST_WIDTH: usize = 24;

/// 컬럼 폭 계산 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnLayout {
    host_width: usize,
    dir_width: usize,
    show_id: bool,
}

impl ColumnLayout {
    /// 행 앞 마커 1칸 + 컬럼 사이 공백
    fn compute(inner_width: usize, rows: &[DirRow], compact: bool) -> Self {
        let show_id = !compact;
        let longest_host = rows
            .iter()
            .map(|row| row.entry.host_name.width())
            .max()
            .unwrap_or(0)
            .max("Host".len());
        let host_width = longest_host.clamp(MIN_HOST_WIDTH, MAX_HOST_WIDTH);
        let fixed = 1 + host_width + 1 + if show_id { ID_WIDTH + 1 } else { 0 };
        let dir_width = inner_width.saturating_sub(fixed).max(4);
        Self {
            host_width,
            dir_width,
            show_id,
        }
    }
}

/// 디렉토리 테이블 컴포넌트
pub struct DirTable<'a> {
    title: &'a str,
    rows: &'a [DirRow],
    selected_index: usize,
    scroll_offset: usize,
    /// 테이블에 키 포커스가 있는지 (폼 편집 중이면 false)
    focused: bool,
    compact: bool,
    empty_message: &'a str,
    border_color: Color,
    focused_border_color: Color,
    bg_color: Color,
    row_color: Color,
    selected_color: Color,
    selected_bg_color: Color,
    pending_color: Color,
    header_color: Color,
}

impl<'a> DirTable<'a> {
    pub fn new(rows: &'a [DirRow]) -> Self {
        Self {
            title: "",
            rows,
            selected_index: 0,
            scroll_offset: 0,
            focused: true,
            compact: false,
            empty_message: "No directories",
            border_color: Color::Rgb(60, 60, 60),
            focused_border_color: Color::Rgb(0, 120, 212),
            bg_color: Color::Rgb(30, 30, 30),
            row_color: Color::Rgb(212, 212, 212),
            selected_color: Color::White,
            selected_bg_color: Color::Rgb(0, 120, 212),
            pending_color: Color::Rgb(128, 128, 128),
            header_color: Color::Rgb(150, 150, 150),
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 좁은 화면에서는 Id 컬럼 숨김
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_color = theme.border.to_color();
        self.focused_border_color = theme.accent.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.row_color = theme.row_normal.to_color();
        self.selected_color = theme.row_selected.to_color();
        self.selected_bg_color = theme.row_selected_bg.to_color();
        self.pending_color = theme.row_pending.to_color();
        self.header_color = theme.tab_inactive_fg.to_color();
        self
    }

    fn render_header(&self, layout: &ColumnLayout, inner: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.header_color)
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(pad("Host", layout.host_width), style),
            Span::raw(" "),
            Span::styled(pad("Directory", layout.dir_width), style),
        ];
        if layout.show_id {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{:>width$}", "Id", width = ID_WIDTH),
                style,
            ));
        }
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }

    fn render_row(
        &self,
        row: &DirRow,
        is_cursor: bool,
        layout: &ColumnLayout,
        y: u16,
        inner: Rect,
        buf: &mut Buffer,
    ) {
        let base = if row.removing {
            Style::default()
                .fg(self.pending_color)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(self.row_color)
        };
        let style = if is_cursor && self.focused {
            base.fg(self.selected_color).bg(self.selected_bg_color)
        } else if is_cursor {
            base.add_modifier(Modifier::UNDERLINED)
        } else {
            base
        };

        let marker = if row.removing { "-" } else { " " };
        let dir = if row.removing {
            format!("{} (removing…)", row.entry.dir_name)
        } else {
            row.entry.dir_name.clone()
        };
        let mut spans = vec![
            Span::styled(marker, style),
            Span::styled(fit(&row.entry.host_name, layout.host_width), style),
            Span::styled(" ", style),
            Span::styled(fit(&dir, layout.dir_width), style),
        ];
        if layout.show_id {
            let id = if row.entry.is_placeholder() {
                "new".to_string()
            } else {
                row.entry.id.to_string()
            };
            spans.push(Span::styled(" ", style));
            spans.push(Span::styled(
                format!("{:>width$}", id, width = ID_WIDTH),
                style,
            ));
        }
        buf.set_line(inner.x, y, &Line::from(spans), inner.width);
    }
}

impl Widget for DirTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.focused_border_color
        } else {
            self.border_color
        };
        let block = Block::default()
            .title(format!(" {} ({}) ", self.title, self.rows.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let layout = ColumnLayout::compute(inner.width as usize, self.rows, self.compact);
        self.render_header(&layout, inner, buf);

        if self.rows.is_empty() {
            if inner.height > 2 {
                let style = Style::default()
                    .fg(self.pending_color)
                    .add_modifier(Modifier::ITALIC);
                buf.set_stringn(
                    inner.x + 1,
                    inner.y + 2,
                    self.empty_message,
                    inner.width.saturating_sub(1) as usize,
                    style,
                );
            }
            return;
        }

        let visible = inner.height.saturating_sub(1) as usize;
        for (i, row) in self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible)
        {
            let y = inner.y + 1 + (i - self.scroll_offset) as u16;
            self.render_row(row, i == self.selected_index, &layout, y, inner, buf);
        }
    }
}

/// 표시 폭 기준 오른쪽 공백 채움
fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - used))
}

fn fit(text: &str, width: usize) -> String {
    pad(&truncate_middle(text, width), width)
}

/// 표시 폭 기준 중간 생략 ("/srv/…/media")
pub(crate) fn truncate_middle(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width < 5 {
        return take_width(text.chars(), max_width);
    }

    let tail_width = (max_width - 1) / 2;
    let head_width = max_width - 1 - tail_width;
    let head = take_width(text.chars(), head_width);
    let tail: String = take_width(text.chars().rev(), tail_width).chars().rev().collect();
    format!("{}…{}", head, tail)
}

fn take_width(chars: impl Iterator<Item = char>, max_width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in chars {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StorageGroupDir;

    fn rows() -> Vec<DirRow> {
        vec![
            DirRow {
                key: 0,
                entry: StorageGroupDir::new(7, "Default", "host1", "/var/media"),
                removing: false,
            },
            DirRow {
                key: 1,
                entry: StorageGroupDir::new(0, "Default", "host2", "/mnt/new"),
                removing: true,
            },
        ]
    }

    fn line(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("short", 10), "short");
        assert_eq!(truncate_middle("/srv/storage/media", 9), "/srv…edia");
        assert_eq!(truncate_middle("abcdef", 3), "abc");
    }

    #[test]
    fn test_column_layout_hides_id_when_compact() {
        let rows = rows();
        let wide = ColumnLayout::compute(60, &rows, false);
        let compact = ColumnLayout::compute(60, &rows, true);
        assert!(wide.show_id);
        assert!(!compact.show_id);
        assert_eq!(wide.host_width, MIN_HOST_WIDTH);
        assert!(compact.dir_width > wide.dir_width);
    }

    #[test]
    fn test_render_rows_and_placeholder_id() {
        let rows = rows();
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        DirTable::new(&rows).title("Default").render(area, &mut buf);

        assert!(line(&buf, 0, 60).contains(" Default (2) "));
        assert!(line(&buf, 1, 60).contains("Host"));
        let first = line(&buf, 2, 60);
        assert!(first.contains("host1"));
        assert!(first.contains("/var/media"));
        assert!(first.trim_end_matches('│').trim_end().ends_with('7'));
        let second = line(&buf, 3, 60);
        assert!(second.contains("(removing…)"));
        assert!(second.trim_end_matches('│').trim_end().ends_with("new"));
    }

    #[test]
    fn test_render_empty_message() {
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        DirTable::new(&[])
            .title("Default")
            .empty_message("Nothing here")
            .render(area, &mut buf);

        assert!(line(&buf, 3, 40).contains("Nothing here"));
    }
}
