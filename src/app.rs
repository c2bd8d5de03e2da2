use crate::api::StorageGroupApi;
use crate::config::Config;
use crate::core::actions::Action;
use crate::models::{DirRequest, RowKey, StorageGroupDir, StorageGroupPanel};
use crate::ui::{DialogKind, LayoutManager, NoticeLevel, ThemeManager};
use crate::utils::error::SgAdminError;
use chrono::{DateTime, Local};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

mod dialogs;
mod editing;
mod navigation;
mod requests;

/// 백그라운드 요청 완료 이벤트 (메인 루프에서 처리)
#[derive(Debug)]
pub enum ApiEvent {
    ListLoaded {
        generation: u64,
        result: Result<Vec<StorageGroupDir>, SgAdminError>,
    },
    AddFinished {
        tab_id: usize,
        generation: u64,
        request: DirRequest,
        result: Result<bool, SgAdminError>,
    },
    RemoveFinished {
        tab_id: usize,
        key: RowKey,
        generation: u64,
        result: Result<bool, SgAdminError>,
    },
}

/// 상태바 알림
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    created: Instant,
}

impl Notice {
    fn ttl(&self) -> Duration {
        match self.level {
            NoticeLevel::Error => Duration::from_secs(8),
            NoticeLevel::Info | NoticeLevel::Success => Duration::from_secs(4),
        }
    }

    fn is_expired(&self) -> bool {
        self.created.elapsed() >= self.ttl()
    }
}

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 스토리지 그룹 탭/행 상태
    pub panel: StorageGroupPanel,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 상태바 알림 (일정 시간 후 자동 소멸)
    pub notice: Option<Notice>,
    /// 마지막 목록 로드 성공 시각
    pub last_loaded: Option<DateTime<Local>>,
    /// 헤더에 표시할 서버 주소
    server_label: String,
    /// 삭제 전 확인 다이얼로그 사용 여부
    confirm_remove: bool,
    api: Arc<dyn StorageGroupApi>,
    runtime: Handle,
    event_tx: Sender<ApiEvent>,
    event_rx: Receiver<ApiEvent>,
    /// 응답을 기다리는 요청 수
    in_flight: usize,
}

impl App {
    pub fn new(
        config: &Config,
        api: Arc<dyn StorageGroupApi>,
        runtime: Handle,
        server_label: impl Into<String>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager: ThemeManager::from_name(&config.theme),
            panel: StorageGroupPanel::new(config.hosts.clone()),
            dialog: None,
            notice: None,
            last_loaded: None,
            server_label: server_label.into(),
            confirm_remove: config.confirm_remove,
            api,
            runtime,
            event_tx,
            event_rx,
            in_flight: 0,
        }
    }

    /// 종료
    pub fn quit(&mut self) {
        if self.in_flight > 0 {
            tracing::warn!(pending = self.in_flight, "quitting with requests in flight");
        }
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn server_label(&self) -> &str {
        &self.server_label
    }

    /// 알림 표시
    pub fn set_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        let text = text.into();
        match level {
            NoticeLevel::Error => tracing::warn!(notice = %text),
            NoticeLevel::Info | NoticeLevel::Success => tracing::info!(notice = %text),
        }
        self.notice = Some(Notice {
            text,
            level,
            created: Instant::now(),
        });
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.set_notice(NoticeLevel::Info, text);
    }

    pub fn set_success(&mut self, text: impl Into<String>) {
        self.set_notice(NoticeLevel::Success, text);
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.set_notice(NoticeLevel::Error, text);
    }

    /// 만료된 알림 제거
    pub fn clear_expired_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }

    /// 상태바용 (텍스트, 수준)
    pub fn notice_view(&self) -> Option<(&str, NoticeLevel)> {
        self.notice
            .as_ref()
            .map(|notice| (notice.text.as_str(), notice.level))
    }

    /// 활성 탭이 추가 폼을 편집 중인지
    pub fn is_editing(&self) -> bool {
        self.panel.active_tab().is_some_and(|tab| tab.is_editing())
    }

    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    /// 마지막 로드 시각 (HH:MM:SS)
    pub fn last_loaded_label(&self) -> Option<String> {
        self.last_loaded.map(|time| time.format("%H:%M:%S").to_string())
    }

    /// 레지스트리 액션 실행
    pub fn execute_action(&mut self, action: Action) {
        tracing::debug!(action = action.id(), "execute action");
        match action {
            Action::Quit => self.quit(),
            Action::MoveUp
            | Action::MoveDown
            | Action::GoToTop
            | Action::GoToBottom
            | Action::NextTab
            | Action::PrevTab => self.navigate(action),
            Action::AddDirectory => self.open_add_form(),
            Action::RemoveDirectory => self.remove_selected(),
            Action::DeleteStorageGroup => self.delete_storage_group(),
            Action::BrowseForDir => self.browse_for_new_dir(),
            Action::SelectHostFilter => self.open_host_filter(),
            Action::Reload => self.reload(),
            Action::ShowHelp => self.show_help(),
            Action::FormNextField => self.form_focus_next(),
            Action::FormCycleHost => self.form_cycle_host(true),
            Action::FormSave => self.submit_add(),
            Action::FormCancel => self.cancel_add_form(),
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(api: Arc<dyn StorageGroupApi>, runtime: Handle) -> Self {
        let mut app = Self::new(&Config::default(), api, runtime, "http://test/");
        app.layout.update(ratatui::layout::Rect::new(0, 0, 100, 30));
        app
    }

    #[cfg(test)]
    pub(crate) fn set_confirm_remove(&mut self, confirm: bool) {
        self.confirm_remove = confirm;
    }
}
