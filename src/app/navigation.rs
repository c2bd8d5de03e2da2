use super::*;

impl App {
    /// 행/탭 이동 액션 처리
    pub(super) fn navigate(&mut self, action: Action) {
        match action {
            Action::NextTab => self.panel.next_tab(),
            Action::PrevTab => self.panel.prev_tab(),
            _ => {
                let Some(tab) = self.panel.active_tab_mut() else {
                    return;
                };
                match action {
                    Action::MoveUp => tab.move_up(),
                    Action::MoveDown => tab.move_down(),
                    Action::GoToTop => tab.move_to_top(),
                    Action::GoToBottom => tab.move_to_bottom(),
                    _ => {}
                }
            }
        }
        self.sync_scroll();
    }

    /// 숫자 키로 탭 전환 (0-based)
    pub fn switch_tab(&mut self, index: usize) {
        if self.panel.switch_to(index) {
            self.sync_scroll();
        } else {
            self.set_info(format!("No storage group {}", index + 1));
        }
    }

    /// 활성 탭의 커서가 화면에 보이도록 스크롤 조정
    pub fn sync_scroll(&mut self) {
        let editing = self.is_editing();
        let height = self.layout.table_rows(editing);
        if let Some(tab) = self.panel.active_tab_mut() {
            tab.ensure_visible(height);
        }
    }
}
