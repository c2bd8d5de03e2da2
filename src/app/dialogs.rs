use super::*;
use crate::models::{HostFilter, ALL_HOSTS};
use crate::ui::components::dialog::help_line_count;
use crate::ui::ConfirmPurpose;

impl App {
    // === 도움말 ===

    pub fn show_help(&mut self) {
        self.dialog = Some(DialogKind::help());
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn help_scroll_up(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
    }

    pub fn help_scroll_down(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            if *scroll_offset + 1 < help_line_count() {
                *scroll_offset += 1;
            }
        }
    }

    // === 호스트 필터 ===

    /// 호스트 필터 선택 다이얼로그 열기
    pub fn open_host_filter(&mut self) {
        if self.panel.has_pending_mutations() {
            self.set_error("Wait for pending changes to finish before reloading.");
            return;
        }
        let mut items = vec![ALL_HOSTS.to_string()];
        items.extend(self.panel.known_hosts());
        let current = self.panel.filter().label().to_string();
        self.dialog = Some(DialogKind::host_filter(items, &current));
    }

    pub fn host_filter_move(&mut self, up: bool) {
        if let Some(DialogKind::HostFilter {
            items,
            selected_index,
        }) = &mut self.dialog
        {
            if up {
                *selected_index = selected_index.saturating_sub(1);
            } else if *selected_index + 1 < items.len() {
                *selected_index += 1;
            }
        }
    }

    /// 선택한 호스트로 패널 다시 초기화
    pub fn confirm_host_filter(&mut self) {
        let Some(DialogKind::HostFilter {
            items,
            selected_index,
        }) = self.dialog.take()
        else {
            return;
        };
        if let Some(item) = items.get(selected_index) {
            self.initialize(HostFilter::parse(item));
        }
    }

    // === 확인 다이얼로그 ===

    /// OK/Cancel 전환
    pub fn confirm_toggle_button(&mut self) {
        if let Some(DialogKind::Confirm {
            selected_button, ..
        }) = &mut self.dialog
        {
            *selected_button = 1 - *selected_button;
        }
    }

    /// Enter: 선택된 버튼 실행
    pub fn confirm_dialog_accept(&mut self) {
        let Some(DialogKind::Confirm {
            selected_button,
            purpose,
            ..
        }) = self.dialog.take()
        else {
            return;
        };
        if selected_button != 0 {
            return;
        }
        match purpose {
            ConfirmPurpose::RemoveDirectory { tab_id, key } => self.remove_directory(tab_id, key),
        }
    }
}
