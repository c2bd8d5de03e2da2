// Add form component - 디렉토리 추가 폼
//
// Host / Directory 입력 + Save / Cancel 버튼. 저장 중에는 "Saving…" 표시

use crate::models::{EditForm, FormField};
use crate::ui::components::input_field::InputField;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: u16 = 11;

/// 추가 폼 위젯
pub struct AddForm<'a> {
    form: &'a EditForm,
    group_name: &'a str,
    theme: Option<&'a Theme>,
    border_color: Color,
    label_color: Color,
    hint_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
    busy_color: Color,
}

impl<'a> AddForm<'a> {
    pub fn new(form: &'a EditForm, group_name: &'a str) -> Self {
        Self {
            form,
            group_name,
            theme: None,
            border_color: Color::Rgb(0, 120, 212),
            label_color: Color::Rgb(212, 212, 212),
            hint_color: Color::Rgb(128, 128, 128),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
            busy_color: Color::Rgb(255, 165, 0),
        }
    }

    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self.border_color = theme.accent.to_color();
        self.label_color = theme.fg_primary.to_color();
        self.hint_color = theme.row_pending.to_color();
        self.button_bg = theme.input_bg.to_color();
        self.button_fg = theme.fg_primary.to_color();
        self.button_selected_bg = theme.row_selected_bg.to_color();
        self.button_selected_fg = theme.row_selected.to_color();
        self.busy_color = theme.warning.to_color();
        self
    }

    fn render_field(
        &self,
        buf: &mut Buffer,
        inner: Rect,
        y: u16,
        label: &str,
        field: FormField,
    ) {
        let focused = self.form.focus == field && !self.form.submitting;
        let mut label_style = Style::default().fg(self.label_color);
        if focused {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        buf.set_string(inner.x, y, label, label_style);

        let input = match field {
            FormField::Host => &self.form.host,
            _ => &self.form.dir,
        };
        let area = Rect {
            x: inner.x + LABEL_WIDTH,
            y,
            width: inner.width.saturating_sub(LABEL_WIDTH),
            height: 1,
        };
        let mut widget = InputField::new(input).focused(focused);
        if let Some(theme) = self.theme {
            widget = widget.theme(theme);
        }
        widget.render(area, buf);
    }

    /// 버튼 렌더링 후 폭 반환
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
}

impl Widget for AddForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Add Directory to {} ", self.group_name))
            .title_style(
                Style::default()
                    .fg(self.border_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 4 || inner.width <= LABEL_WIDTH {
            return;
        }
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        self.render_field(buf, inner, inner.y, "Host:", FormField::Host);
        self.render_field(buf, inner, inner.y + 1, "Directory:", FormField::Directory);

        let show_host_hint =
            self.form.focus == FormField::Host && !self.form.host_candidates().is_empty();
        let hint = if show_host_hint {
            "Up/Down: known hosts  Tab: next field  ^B: browse"
        } else {
            "Absolute path, e.g. /var/lib/media  Tab: next field  ^B: browse"
        };
        buf.set_stringn(
            inner.x,
            inner.y + 2,
            hint,
            inner.width as usize,
            Style::default().fg(self.hint_color),
        );

        let button_y = inner.y + 3;
        if self.form.submitting {
            let style = Style::default()
                .fg(self.busy_color)
                .add_modifier(Modifier::BOLD);
            buf.set_string(inner.x, button_y, "Saving…", style);
            return;
        }
        let save_width = self.render_button(
            buf,
            inner.x,
            button_y,
            "Save",
            self.form.focus == FormField::Save,
        );
        self.render_button(
            buf,
            inner.x + save_width + 2,
            button_y,
            "Cancel",
            self.form.focus == FormField::Cancel,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_render_fields_and_buttons() {
        let mut form = EditForm::new(Some("host1"), vec!["host1".to_string()]);
        form.dir.set_value("/var/media");
        let area = Rect::new(0, 0, 70, 6);
        let mut buf = Buffer::empty(area);
        AddForm::new(&form, "Default").render(area, &mut buf);

        assert!(line(&buf, 0, 70).contains("Add Directory to Default"));
        assert!(line(&buf, 1, 70).contains("host1"));
        assert!(line(&buf, 2, 70).contains("/var/media"));
        assert!(line(&buf, 4, 70).contains(" Save "));
        assert!(line(&buf, 4, 70).contains(" Cancel "));
    }

    #[test]
    fn test_render_saving_replaces_buttons() {
        let mut form = EditForm::new(Some("host1"), Vec::new());
        form.submitting = true;
        let area = Rect::new(0, 0, 70, 6);
        let mut buf = Buffer::empty(area);
        AddForm::new(&form, "Default").render(area, &mut buf);

        let buttons = line(&buf, 4, 70);
        assert!(buttons.contains("Saving…"));
        assert!(!buttons.contains("Cancel"));
    }
}
