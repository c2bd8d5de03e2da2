//! 백엔드 요청 디스패처
//!
//! 모든 요청은 tokio 태스크로 실행되고, 결과는 `ApiEvent`로 채널에 실려
//! 메인 루프의 `process_api_events`에서 반영됩니다.

use super::*;
use crate::models::HostFilter;
use crate::ui::ConfirmPurpose;
use crate::utils::validate::validate_new_dir;

pub(super) const SAVE_SUCCEEDED: &str = "Storage Group Directory save Succeeded.";
pub(super) const SAVE_FAILED: &str = "Storage Group Directory save Failed!";
pub(super) const REMOVE_SUCCEEDED: &str = "Remove Storage Group Directory Succeeded.";
pub(super) const REMOVE_FAILED: &str = "Remove Storage Group Directory Failed!";

impl App {
    /// 패널 초기화: 모든 탭을 버리고 목록을 다시 요청
    ///
    /// 추가/삭제 요청이 진행 중이면 거부합니다.
    pub fn initialize(&mut self, filter: HostFilter) {
        if self.panel.has_pending_mutations() {
            self.set_error("Wait for pending changes to finish before reloading.");
            return;
        }

        let generation = self.panel.begin_reload(filter);
        tracing::info!(generation, filter = %self.panel.filter(), "loading storage group directories");

        let api = Arc::clone(&self.api);
        self.spawn_request(async move {
            let result = api.list_dirs().await;
            ApiEvent::ListLoaded { generation, result }
        });
    }

    /// 현재 필터로 다시 로드
    pub fn reload(&mut self) {
        let filter = self.panel.filter().clone();
        self.initialize(filter);
    }

    /// 활성 탭의 폼 입력을 검증하고 추가 요청
    pub fn submit_add(&mut self) {
        if self.panel.is_loading() {
            self.set_error("Directory list is still loading.");
            return;
        }
        let generation = self.panel.generation();
        let Some(tab) = self.panel.active_tab_mut() else {
            return;
        };
        let tab_id = tab.tab_id;
        let group_name = tab.group_name.clone();
        let Some(form) = tab.form_mut() else {
            return;
        };
        if form.submitting {
            // 같은 탭의 두 번째 저장은 무시
            return;
        }

        let request = match validate_new_dir(&group_name, form.host.value(), form.dir.value()) {
            Ok(request) => request,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };
        form.submitting = true;

        tracing::info!(
            tab_id,
            group = %request.group_name,
            host = %request.host_name,
            dir = %request.dir_name,
            "adding storage group directory"
        );
        let api = Arc::clone(&self.api);
        self.spawn_request(async move {
            let result = api.add_dir(&request).await;
            ApiEvent::AddFinished {
                tab_id,
                generation,
                request,
                result,
            }
        });
    }

    /// 선택된 행 삭제 (설정에 따라 확인 다이얼로그 먼저)
    pub fn remove_selected(&mut self) {
        if self.panel.is_loading() {
            self.set_info("Directory list is still loading.");
            return;
        }
        let Some(tab) = self.panel.active_tab() else {
            return;
        };
        let Some(row) = tab.selected_row() else {
            self.set_info("No directory selected.");
            return;
        };
        if row.removing {
            self.set_info("Removal already in progress.");
            return;
        }

        let tab_id = tab.tab_id;
        let key = row.key;
        if self.confirm_remove {
            let message = format!(
                "Remove '{}' on host '{}' from storage group '{}'?",
                row.entry.dir_name, row.entry.host_name, tab.group_name
            );
            self.dialog = Some(DialogKind::confirm(
                "Remove Directory",
                message,
                ConfirmPurpose::RemoveDirectory { tab_id, key },
            ));
        } else {
            self.remove_directory(tab_id, key);
        }
    }

    /// 행 하나 삭제 요청
    ///
    /// 그룹은 탭의 그룹, 호스트/디렉토리는 행에 저장된 원본 항목을 사용합니다.
    pub fn remove_directory(&mut self, tab_id: usize, key: RowKey) {
        if self.panel.is_loading() {
            self.set_error("Directory list is still loading.");
            return;
        }
        let generation = self.panel.generation();
        let Some(tab) = self.panel.tab(tab_id) else {
            return;
        };
        let Some(row) = tab.row(key) else {
            return;
        };
        if row.removing {
            return;
        }
        let request = DirRequest::new(
            tab.group_name.clone(),
            row.entry.host_name.clone(),
            row.entry.dir_name.clone(),
        );
        self.panel.set_removing(tab_id, key, true);

        tracing::info!(
            tab_id,
            key,
            group = %request.group_name,
            host = %request.host_name,
            dir = %request.dir_name,
            "removing storage group directory"
        );
        let api = Arc::clone(&self.api);
        self.spawn_request(async move {
            let result = api.remove_dir(&request).await;
            ApiEvent::RemoveFinished {
                tab_id,
                key,
                generation,
                result,
            }
        });
    }

    /// 그룹 전체 삭제 (미지원 안내만)
    pub fn delete_storage_group(&mut self) {
        let message = match self.panel.active_tab() {
            Some(tab) => format!(
                "Deleting storage group '{}' is not available. Remove its directories individually.",
                tab.group_name
            ),
            None => "Deleting a storage group is not available.".to_string(),
        };
        self.set_info(message);
    }

    /// 디렉토리 찾아보기 (미지원 안내만)
    pub fn browse_for_new_dir(&mut self) {
        let message = match self.panel.active_tab() {
            Some(tab) => format!(
                "Browsing is not available. Type the directory path for '{}'.",
                tab.group_name
            ),
            None => "Browsing is not available. Type the directory path.".to_string(),
        };
        self.set_info(message);
    }

    /// 응답을 기다리는 요청이 있는지
    pub fn has_pending_requests(&self) -> bool {
        self.in_flight > 0
    }

    /// 완료된 요청 결과 반영 (메인 루프에서 매 틱 호출)
    ///
    /// 반영한 이벤트가 하나라도 있으면 true.
    pub fn process_api_events(&mut self) -> bool {
        let mut handled = false;
        while let Ok(event) = self.event_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            handled = true;
            match event {
                ApiEvent::ListLoaded { generation, result } => {
                    self.apply_list_result(generation, result);
                }
                ApiEvent::AddFinished {
                    tab_id,
                    generation,
                    request,
                    result,
                } => self.apply_add_result(tab_id, generation, request, result),
                ApiEvent::RemoveFinished {
                    tab_id,
                    key,
                    generation,
                    result,
                } => self.apply_remove_result(tab_id, key, generation, result),
            }
        }
        handled
    }

    fn spawn_request<F>(&mut self, request: F)
    where
        F: std::future::Future<Output = ApiEvent> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            // 수신 측이 사라졌으면 앱이 종료 중
            let _ = tx.send(request.await);
        });
    }

    fn apply_list_result(
        &mut self,
        generation: u64,
        result: std::result::Result<Vec<StorageGroupDir>, SgAdminError>,
    ) {
        match result {
            Ok(entries) => {
                let count = entries.len();
                if !self.panel.apply_entries(generation, entries) {
                    tracing::debug!(generation, "dropping stale directory list");
                    return;
                }
                self.last_loaded = Some(Local::now());
                tracing::info!(
                    generation,
                    entries = count,
                    tabs = self.panel.tab_count(),
                    "storage group directories loaded"
                );
                self.sync_scroll();
            }
            Err(e) => {
                let reason = e.to_string();
                if !self.panel.apply_load_failure(generation, reason.clone()) {
                    tracing::debug!(generation, error = %reason, "dropping stale list failure");
                    return;
                }
                tracing::error!(generation, error = %reason, "failed to load storage group directories");
                self.set_error(format!("Failed to load storage group directories: {}", reason));
            }
        }
    }

    fn apply_add_result(
        &mut self,
        tab_id: usize,
        generation: u64,
        request: DirRequest,
        result: std::result::Result<bool, SgAdminError>,
    ) {
        if generation != self.panel.generation() {
            tracing::debug!(tab_id, generation, "dropping add result for an old panel");
            return;
        }

        match result {
            Ok(true) => {
                let Some(tab) = self.panel.tab_mut(tab_id) else {
                    return;
                };
                tab.end_edit();
                self.panel
                    .append_row(tab_id, request.into_placeholder_entry());
                self.set_success(SAVE_SUCCEEDED);
                self.sync_scroll();
            }
            Ok(false) => {
                self.unlock_form(tab_id);
                self.set_error(SAVE_FAILED);
            }
            Err(e) => {
                tracing::error!(tab_id, transport = e.is_transport(), error = %e, "add request failed");
                self.unlock_form(tab_id);
                self.set_error(format!("{} ({})", SAVE_FAILED, e));
            }
        }
    }

    fn unlock_form(&mut self, tab_id: usize) {
        if let Some(form) = self.panel.tab_mut(tab_id).and_then(|tab| tab.form_mut()) {
            form.submitting = false;
        }
    }

    fn apply_remove_result(
        &mut self,
        tab_id: usize,
        key: RowKey,
        generation: u64,
        result: std::result::Result<bool, SgAdminError>,
    ) {
        if generation != self.panel.generation() {
            tracing::debug!(tab_id, key, generation, "dropping remove result for an old panel");
            return;
        }

        match result {
            Ok(true) => {
                self.panel.remove_row(tab_id, key);
                self.set_success(REMOVE_SUCCEEDED);
                self.sync_scroll();
            }
            Ok(false) => {
                self.panel.set_removing(tab_id, key, false);
                self.set_error(REMOVE_FAILED);
            }
            Err(e) => {
                tracing::error!(tab_id, key, transport = e.is_transport(), error = %e, "remove request failed");
                self.panel.set_removing(tab_id, key, false);
                self.set_error(format!("{} ({})", REMOVE_FAILED, e));
            }
        }
    }
}
