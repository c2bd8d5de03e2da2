use super::*;
use crate::models::{EditForm, FormField, TextInput};
use crossterm::event::{KeyCode, KeyModifiers};

impl App {
    /// 활성 탭에 추가 폼 열기
    pub fn open_add_form(&mut self) {
        if self.panel.is_loading() {
            self.set_info("Directory list is still loading.");
            return;
        }
        let default_host = self.panel.filter().host().map(str::to_string);
        let candidates = self.panel.known_hosts();
        let Some(tab) = self.panel.active_tab_mut() else {
            self.set_info("No storage group to add a directory to.");
            return;
        };
        tab.begin_edit(EditForm::new(default_host.as_deref(), candidates));
        self.sync_scroll();
    }

    /// 추가 폼 닫기 (저장 중에는 무시)
    pub fn cancel_add_form(&mut self) {
        let Some(tab) = self.panel.active_tab_mut() else {
            return;
        };
        if tab.is_submitting() {
            return;
        }
        tab.end_edit();
        self.sync_scroll();
    }

    fn active_form_mut(&mut self) -> Option<&mut EditForm> {
        self.panel
            .active_tab_mut()
            .and_then(|tab| tab.form_mut())
            .filter(|form| !form.submitting)
    }

    pub fn form_focus_next(&mut self) {
        if let Some(form) = self.active_form_mut() {
            form.focus_next();
        }
    }

    pub fn form_focus_prev(&mut self) {
        if let Some(form) = self.active_form_mut() {
            form.focus_prev();
        }
    }

    /// 호스트 후보 순환
    pub fn form_cycle_host(&mut self, forward: bool) {
        if let Some(form) = self.active_form_mut() {
            form.cycle_host(forward);
        }
    }

    /// 포커스된 텍스트 입력 편집
    fn edit_focused_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        if let Some(input) = self
            .active_form_mut()
            .and_then(|form| form.focused_input_mut())
        {
            edit(input);
        }
    }

    fn form_focus(&self) -> Option<FormField> {
        self.panel
            .active_tab()
            .and_then(|tab| tab.form())
            .map(|form| form.focus)
    }

    /// 편집 중인 탭의 키 입력 처리
    pub fn handle_form_key(&mut self, modifiers: KeyModifiers, code: KeyCode) {
        let submitting = self
            .panel
            .active_tab()
            .is_some_and(|tab| tab.is_submitting());

        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::F(10)) => self.quit(),
            (_, KeyCode::F(1)) => self.show_help(),
            // 탭 이동과 행 선택/삭제는 저장 중에도 허용
            (KeyModifiers::ALT, KeyCode::Left) => self.navigate(Action::PrevTab),
            (KeyModifiers::ALT, KeyCode::Right) => self.navigate(Action::NextTab),
            (KeyModifiers::ALT, KeyCode::Up) => self.navigate(Action::MoveUp),
            (KeyModifiers::ALT, KeyCode::Down) => self.navigate(Action::MoveDown),
            (KeyModifiers::CONTROL, KeyCode::Char('d')) => self.remove_selected(),
            _ if submitting => {}
            (_, KeyCode::Esc) => self.cancel_add_form(),
            (_, KeyCode::Tab) => self.form_focus_next(),
            (_, KeyCode::BackTab) => self.form_focus_prev(),
            (_, KeyCode::Enter) => match self.form_focus() {
                Some(FormField::Cancel) => self.cancel_add_form(),
                Some(_) => self.submit_add(),
                None => {}
            },
            (_, KeyCode::Up) if self.form_focus() == Some(FormField::Host) => {
                self.form_cycle_host(false)
            }
            (_, KeyCode::Down) if self.form_focus() == Some(FormField::Host) => {
                self.form_cycle_host(true)
            }
            (KeyModifiers::CONTROL, KeyCode::Char('b')) => self.browse_for_new_dir(),
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                self.edit_focused_input(TextInput::delete_prev_word)
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.edit_focused_input(|input| input.insert_char(c))
            }
            (_, KeyCode::Backspace) => self.edit_focused_input(TextInput::backspace),
            (_, KeyCode::Delete) => self.edit_focused_input(TextInput::delete),
            (_, KeyCode::Left) => self.edit_focused_input(TextInput::left),
            (_, KeyCode::Right) => self.edit_focused_input(TextInput::right),
            (_, KeyCode::Home) => self.edit_focused_input(TextInput::home),
            (_, KeyCode::End) => self.edit_focused_input(TextInput::end),
            _ => {}
        }
    }
}
