use crate::models::edit_form::EditForm;
use crate::models::storage_group::StorageGroupDir;

/// 한 번의 패널 로드 안에서 유일한 행 식별자
pub type RowKey = u64;

/// 디렉토리 테이블의 한 행
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirRow {
    pub key: RowKey,
    /// 삭제 요청에 그대로 쓰이는 원본 항목
    pub entry: StorageGroupDir,
    /// 삭제 요청 진행 중
    pub removing: bool,
}

/// 탭 화면 상태
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TabView {
    /// "Add Directory" + 테이블
    #[default]
    Idle,
    /// 추가 폼 + 테이블
    Editing(EditForm),
}

/// 스토리지 그룹 하나에 대응하는 탭
#[derive(Debug, Clone)]
pub struct GroupTab {
    pub tab_id: usize,
    pub group_name: String,
    pub rows: Vec<DirRow>,
    pub view: TabView,
    pub selected_index: usize,
    pub scroll_offset: usize,
}

impl GroupTab {
    pub fn new(tab_id: usize, group_name: impl Into<String>) -> Self {
        Self {
            tab_id,
            group_name: group_name.into(),
            rows: Vec::new(),
            view: TabView::Idle,
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.view, TabView::Editing(_))
    }

    pub fn form(&self) -> Option<&EditForm> {
        match &self.view {
            TabView::Editing(form) => Some(form),
            TabView::Idle => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut EditForm> {
        match &mut self.view {
            TabView::Editing(form) => Some(form),
            TabView::Idle => None,
        }
    }

    /// Idle → Editing. 이미 편집 중이면 false
    pub fn begin_edit(&mut self, form: EditForm) -> bool {
        if self.is_editing() {
            return false;
        }
        self.view = TabView::Editing(form);
        true
    }

    /// Editing → Idle
    pub fn end_edit(&mut self) {
        self.view = TabView::Idle;
    }

    /// 저장 요청 진행 중인지
    pub fn is_submitting(&self) -> bool {
        self.form().is_some_and(|form| form.submitting)
    }

    pub fn push_row(&mut self, key: RowKey, entry: StorageGroupDir) {
        self.rows.push(DirRow {
            key,
            entry,
            removing: false,
        });
    }

    pub fn row_index(&self, key: RowKey) -> Option<usize> {
        self.rows.iter().position(|row| row.key == key)
    }

    pub fn row(&self, key: RowKey) -> Option<&DirRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn row_mut(&mut self, key: RowKey) -> Option<&mut DirRow> {
        self.rows.iter_mut().find(|row| row.key == key)
    }

    /// 행 하나 제거 후 커서 보정
    pub fn remove_row(&mut self, key: RowKey) -> Option<DirRow> {
        let index = self.row_index(key)?;
        let row = self.rows.remove(index);
        if self.selected_index >= self.rows.len() {
            self.selected_index = self.rows.len().saturating_sub(1);
        }
        Some(row)
    }

    pub fn selected_row(&self) -> Option<&DirRow> {
        self.rows.get(self.selected_index)
    }

    pub fn has_pending_removal(&self) -> bool {
        self.rows.iter().any(|row| row.removing)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.rows.len() {
            self.selected_index += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.rows.len().saturating_sub(1);
    }

    /// 커서가 보이도록 스크롤 조정
    pub fn ensure_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected_index + 1 - visible_height;
        }
    }
}
