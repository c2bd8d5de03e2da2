//! 스토리지 그룹 패널 상태
//!
//! 가져온 디렉토리 목록을 그룹별 탭으로 묶고, 추가/삭제 결과를 행 단위로
//! 반영합니다. 탭 목록은 매 초기화마다 통째로 다시 만들어집니다.

use crate::models::group_tab::{DirRow, GroupTab, RowKey};
use crate::models::storage_group::{HostFilter, StorageGroupDir};
use std::collections::BTreeSet;

/// 목록 로드 상태
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// 아직 한 번도 요청하지 않음
    #[default]
    NotLoaded,
    /// 목록 요청 진행 중
    Loading,
    /// 최근 요청 성공
    Ready,
    /// 최근 요청 실패 (원인 메시지)
    Failed(String),
}

/// 스토리지 그룹 패널
#[derive(Debug, Clone, Default)]
pub struct StorageGroupPanel {
    /// 처음 등장한 순서대로의 탭 (tab_id == 인덱스)
    tabs: Vec<GroupTab>,
    /// 활성 탭 인덱스
    active_tab: usize,
    /// 현재 호스트 필터
    filter: HostFilter,
    /// 로드 세대 (초기화마다 증가)
    generation: u64,
    load_state: LoadState,
    next_row_key: RowKey,
    /// 최근 목록에서 본 호스트 (필터와 무관)
    seen_hosts: BTreeSet<String>,
    /// 설정 파일에 지정된 호스트
    configured_hosts: Vec<String>,
}

impl StorageGroupPanel {
    pub fn new(configured_hosts: Vec<String>) -> Self {
        Self {
            configured_hosts,
            ..Self::default()
        }
    }

    /// 초기화 시작: 모든 탭/편집 폼을 버리고 새 세대 번호 반환
    pub fn begin_reload(&mut self, filter: HostFilter) -> u64 {
        self.clear();
        self.filter = filter;
        self.generation += 1;
        self.load_state = LoadState::Loading;
        self.generation
    }

    /// 목록 응답 반영. 오래된 세대의 응답이면 false
    pub fn apply_entries(&mut self, generation: u64, entries: Vec<StorageGroupDir>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.rebuild(entries);
        self.load_state = LoadState::Ready;
        true
    }

    /// 목록 실패 반영. 패널은 빈 상태로 남음
    pub fn apply_load_failure(&mut self, generation: u64, reason: impl Into<String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.clear();
        self.load_state = LoadState::Failed(reason.into());
        true
    }

    /// 항목 목록으로 탭/행 재구성 (필터 적용, 첫 등장 순서 유지)
    ///
    /// 목록은 항상 필터 없이 받으므로 호스트 목록도 매번 새로 만듭니다.
    pub fn rebuild(&mut self, entries: Vec<StorageGroupDir>) {
        self.clear();
        self.seen_hosts.clear();
        for entry in entries {
            if !entry.host_name.is_empty() {
                self.seen_hosts.insert(entry.host_name.clone());
            }
            if !self.filter.matches(&entry.host_name) {
                continue;
            }
            let tab_id = self.ensure_tab(&entry.group_name);
            self.append_row(tab_id, entry);
        }
    }

    fn clear(&mut self) {
        self.tabs.clear();
        self.active_tab = 0;
        self.next_row_key = 0;
    }

    /// 그룹 이름의 탭을 찾거나 새로 생성 (대소문자 구분)
    pub fn ensure_tab(&mut self, group_name: &str) -> usize {
        if let Some(tab_id) = self.tab_id_for_group(group_name) {
            return tab_id;
        }
        let tab_id = self.tabs.len();
        self.tabs.push(GroupTab::new(tab_id, group_name));
        tab_id
    }

    pub fn tab_id_for_group(&self, group_name: &str) -> Option<usize> {
        self.tabs
            .iter()
            .position(|tab| tab.group_name == group_name)
    }

    /// 탭 끝에 행 추가
    pub fn append_row(&mut self, tab_id: usize, entry: StorageGroupDir) -> Option<RowKey> {
        let key = self.next_row_key;
        let tab = self.tabs.get_mut(tab_id)?;
        tab.push_row(key, entry);
        self.next_row_key += 1;
        Some(key)
    }

    /// 정확히 한 행만 제거
    pub fn remove_row(&mut self, tab_id: usize, key: RowKey) -> Option<DirRow> {
        self.tabs.get_mut(tab_id)?.remove_row(key)
    }

    /// 삭제 진행 중 표시 설정. 행이 없으면 false
    pub fn set_removing(&mut self, tab_id: usize, key: RowKey, removing: bool) -> bool {
        match self.tabs.get_mut(tab_id).and_then(|tab| tab.row_mut(key)) {
            Some(row) => {
                row.removing = removing;
                true
            }
            None => false,
        }
    }

    pub fn tabs(&self) -> &[GroupTab] {
        &self.tabs
    }

    pub fn tab(&self, tab_id: usize) -> Option<&GroupTab> {
        self.tabs.get(tab_id)
    }

    pub fn tab_mut(&mut self, tab_id: usize) -> Option<&mut GroupTab> {
        self.tabs.get_mut(tab_id)
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn total_rows(&self) -> usize {
        self.tabs.iter().map(|tab| tab.rows.len()).sum()
    }

    pub fn active_index(&self) -> usize {
        self.active_tab
    }

    pub fn active_tab(&self) -> Option<&GroupTab> {
        self.tabs.get(self.active_tab)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut GroupTab> {
        self.tabs.get_mut(self.active_tab)
    }

    /// 다음 탭 (순환)
    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.active_tab = (self.active_tab + 1) % self.tabs.len();
        }
    }

    /// 이전 탭 (순환)
    pub fn prev_tab(&mut self) {
        if self.tabs.is_empty() {
            return;
        }
        self.active_tab = if self.active_tab == 0 {
            self.tabs.len() - 1
        } else {
            self.active_tab - 1
        };
    }

    /// 특정 탭(0-based)으로 전환
    pub fn switch_to(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            return false;
        }
        self.active_tab = index;
        true
    }

    pub fn filter(&self) -> &HostFilter {
        &self.filter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// 선택 가능한 호스트 목록 (정렬, 중복 제거)
    pub fn known_hosts(&self) -> Vec<String> {
        let mut hosts = self.seen_hosts.clone();
        hosts.extend(
            self.configured_hosts
                .iter()
                .map(|h| h.trim())
                .filter(|h| !h.is_empty())
                .map(str::to_string),
        );
        if let HostFilter::Host(host) = &self.filter {
            hosts.insert(host.clone());
        }
        hosts.into_iter().collect()
    }

    /// 진행 중인 추가/삭제 요청이 있는지
    pub fn has_pending_mutations(&self) -> bool {
        self.tabs
            .iter()
            .any(|tab| tab.is_submitting() || tab.has_pending_removal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(panel: &StorageGroupPanel) -> Vec<&str> {
        panel.tabs().iter().map(|tab| tab.group_name.as_str()).collect()
    }

    fn sample_entries() -> Vec<StorageGroupDir> {
        vec![
            StorageGroupDir::new(1, "Default", "host1", "/a"),
            StorageGroupDir::new(2, "Videos", "host2", "/b"),
        ]
    }

    fn loaded(filter: HostFilter, entries: Vec<StorageGroupDir>) -> StorageGroupPanel {
        let mut panel = StorageGroupPanel::new(Vec::new());
        let generation = panel.begin_reload(filter);
        assert!(panel.apply_entries(generation, entries));
        panel
    }

    #[test]
    fn test_all_filter_creates_one_tab_per_group() {
        let panel = loaded(HostFilter::All, sample_entries());
        assert_eq!(names(&panel), vec!["Default", "Videos"]);
        assert_eq!(panel.tabs()[0].rows.len(), 1);
        assert_eq!(panel.tabs()[1].rows.len(), 1);
        assert_eq!(panel.tabs()[1].tab_id, 1);
    }

    #[test]
    fn test_host_filter_drops_other_hosts_and_their_tabs() {
        let panel = loaded(HostFilter::parse("host1"), sample_entries());
        assert_eq!(names(&panel), vec!["Default"]);
        assert_eq!(panel.total_rows(), 1);
        assert!(panel.tab_id_for_group("Videos").is_none());
    }

    #[test]
    fn test_tabs_follow_first_seen_order_without_sorting() {
        let entries = vec![
            StorageGroupDir::new(1, "Videos", "h", "/v1"),
            StorageGroupDir::new(2, "Default", "h", "/d1"),
            StorageGroupDir::new(3, "Videos", "h", "/v2"),
            StorageGroupDir::new(4, "default", "h", "/d2"),
        ];
        let panel = loaded(HostFilter::All, entries);
        // 그룹 이름은 대소문자 구분
        assert_eq!(names(&panel), vec!["Videos", "Default", "default"]);
        let dirs: Vec<&str> = panel.tabs()[0]
            .rows
            .iter()
            .map(|r| r.entry.dir_name.as_str())
            .collect();
        assert_eq!(dirs, vec!["/v1", "/v2"]);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut panel = loaded(HostFilter::All, sample_entries());
        let first: Vec<String> = names(&panel).iter().map(|s| s.to_string()).collect();

        let generation = panel.begin_reload(HostFilter::All);
        panel.apply_entries(generation, sample_entries());
        assert_eq!(names(&panel), first);
        assert_eq!(panel.total_rows(), 2);
    }

    #[test]
    fn test_reload_discards_edit_forms_and_rows() {
        let mut panel = loaded(HostFilter::All, sample_entries());
        panel
            .tab_mut(0)
            .unwrap()
            .begin_edit(crate::models::EditForm::new(Some("host1"), Vec::new()));
        panel.switch_to(1);

        panel.begin_reload(HostFilter::All);
        assert_eq!(panel.tab_count(), 0);
        assert_eq!(panel.active_index(), 0);
        assert!(panel.is_loading());
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut panel = StorageGroupPanel::new(Vec::new());
        let old = panel.begin_reload(HostFilter::All);
        let new = panel.begin_reload(HostFilter::parse("host2"));

        assert!(!panel.apply_entries(old, sample_entries()));
        assert_eq!(panel.tab_count(), 0);
        assert!(panel.apply_entries(new, sample_entries()));
        assert_eq!(names(&panel), vec!["Videos"]);
    }

    #[test]
    fn test_load_failure_leaves_panel_empty() {
        let mut panel = loaded(HostFilter::All, sample_entries());
        let generation = panel.begin_reload(HostFilter::All);
        assert!(panel.apply_load_failure(generation, "connection refused"));
        assert_eq!(panel.tab_count(), 0);
        assert_eq!(
            panel.load_state(),
            &LoadState::Failed("connection refused".to_string())
        );
    }

    #[test]
    fn test_remove_row_removes_exactly_one_even_with_duplicate_text() {
        let mut panel = loaded(HostFilter::All, sample_entries());
        // 같은 호스트/경로를 가진 임시 행 두 개
        let first = panel
            .append_row(0, StorageGroupDir::new(0, "Default", "host1", "/x"))
            .unwrap();
        let second = panel
            .append_row(0, StorageGroupDir::new(0, "Default", "host1", "/x"))
            .unwrap();
        assert_ne!(first, second);

        let removed = panel.remove_row(0, second).unwrap();
        assert_eq!(removed.key, second);
        assert_eq!(panel.tab(0).unwrap().rows.len(), 2);
        assert!(panel.tab(0).unwrap().row(first).is_some());
    }

    #[test]
    fn test_known_hosts_merges_seen_configured_and_filter() {
        let mut panel = StorageGroupPanel::new(vec!["zeta".to_string(), " ".to_string()]);
        let generation = panel.begin_reload(HostFilter::All);
        panel.apply_entries(generation, sample_entries());
        assert_eq!(panel.known_hosts(), vec!["host1", "host2", "zeta"]);

        // 필터 로드는 이전에 본 호스트를 유지
        let generation = panel.begin_reload(HostFilter::parse("host1"));
        panel.apply_entries(generation, sample_entries());
        assert_eq!(panel.known_hosts(), vec!["host1", "host2", "zeta"]);
    }

    #[test]
    fn test_filtered_reload_forgets_hosts_gone_from_server() {
        let mut panel = loaded(HostFilter::parse("host1"), sample_entries());
        assert_eq!(panel.known_hosts(), vec!["host1", "host2"]);

        // host2 항목이 서버에서 사라진 뒤 같은 필터로 다시 로드
        let generation = panel.begin_reload(HostFilter::parse("host1"));
        panel.apply_entries(
            generation,
            vec![StorageGroupDir::new(1, "Default", "host1", "/a")],
        );
        assert_eq!(panel.known_hosts(), vec!["host1"]);
    }

    #[test]
    fn test_tab_navigation_wraps() {
        let mut panel = loaded(HostFilter::All, sample_entries());
        panel.next_tab();
        assert_eq!(panel.active_index(), 1);
        panel.next_tab();
        assert_eq!(panel.active_index(), 0);
        panel.prev_tab();
        assert_eq!(panel.active_index(), 1);
        assert!(!panel.switch_to(2));
        assert!(panel.switch_to(0));
    }

    #[test]
    fn test_pending_mutations_tracks_removal_flags() {
        let mut panel = loaded(HostFilter::All, sample_entries());
        assert!(!panel.has_pending_mutations());
        let key = panel.tab(1).unwrap().rows[0].key;
        assert!(panel.set_removing(1, key, true));
        assert!(panel.has_pending_mutations());
        assert!(!panel.set_removing(1, 999, true));
    }
}
