//! 액션 레지스트리
//!
//! 키 바인딩, 커맨드바 항목, 도움말 내용이 모두 이 모듈의 레지스트리를
//! 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    NextTab,
    PrevTab,
    // Storage group directories
    AddDirectory,
    RemoveDirectory,
    DeleteStorageGroup,
    SelectHostFilter,
    Reload,
    // Add form (폼이 열려 있을 때만 동작)
    FormNextField,
    FormCycleHost,
    FormSave,
    FormCancel,
    BrowseForDir,
    // System
    ShowHelp,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Directory,
    Form,
    System,
}

impl ActionCategory {
    pub fn title(self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::Directory => "Storage Group Directories",
            ActionCategory::Form => "Add Directory Form",
            ActionCategory::System => "System",
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Previous directory row",
        category: ActionCategory::Navigation,
        shortcut_display: Some("k / Up / A-Up"),
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Rows",
            priority: 50,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Next directory row",
        category: ActionCategory::Navigation,
        shortcut_display: Some("j / Down / A-Down"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        label: "First row",
        category: ActionCategory::Navigation,
        shortcut_display: Some("g / Home"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        label: "Last row",
        category: ActionCategory::Navigation,
        shortcut_display: Some("G / End"),
        command_bar: None,
    },
    ActionDef {
        action: Action::NextTab,
        id: "tab_next",
        label: "Next storage group",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Tab / l / Right / A-Right"),
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Group",
            priority: 40,
        }),
    },
    ActionDef {
        action: Action::PrevTab,
        id: "tab_prev",
        label: "Previous storage group",
        category: ActionCategory::Navigation,
        shortcut_display: Some("S-Tab / h / Left / A-Left"),
        command_bar: None,
    },
    // Directories
    ActionDef {
        action: Action::AddDirectory,
        id: "dir_add",
        label: "Add Directory",
        category: ActionCategory::Directory,
        shortcut_display: Some("a / Ins"),
        command_bar: Some(CommandBarEntry {
            key: "a",
            label: "Add",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::RemoveDirectory,
        id: "dir_remove",
        label: "Remove selected directory",
        category: ActionCategory::Directory,
        shortcut_display: Some("d / Del / ^D (form)"),
        command_bar: Some(CommandBarEntry {
            key: "d",
            label: "Remove",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::DeleteStorageGroup,
        id: "group_delete",
        label: "Delete Storage Group",
        category: ActionCategory::Directory,
        shortcut_display: Some("D"),
        command_bar: None,
    },
    ActionDef {
        action: Action::SelectHostFilter,
        id: "host_filter",
        label: "Show host",
        category: ActionCategory::Directory,
        shortcut_display: Some("f"),
        command_bar: Some(CommandBarEntry {
            key: "f",
            label: "Host",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::Reload,
        id: "reload",
        label: "Reload from server",
        category: ActionCategory::Directory,
        shortcut_display: Some("r / F5"),
        command_bar: Some(CommandBarEntry {
            key: "r",
            label: "Reload",
            priority: 21,
        }),
    },
    // Form
    ActionDef {
        action: Action::FormNextField,
        id: "form_next_field",
        label: "Next / previous field",
        category: ActionCategory::Form,
        shortcut_display: Some("Tab / S-Tab"),
        command_bar: None,
    },
    ActionDef {
        action: Action::FormCycleHost,
        id: "form_cycle_host",
        label: "Cycle known hosts (Host field)",
        category: ActionCategory::Form,
        shortcut_display: Some("Up / Down"),
        command_bar: None,
    },
    ActionDef {
        action: Action::FormSave,
        id: "form_save",
        label: "Save",
        category: ActionCategory::Form,
        shortcut_display: Some("Enter"),
        command_bar: None,
    },
    ActionDef {
        action: Action::FormCancel,
        id: "form_cancel",
        label: "Cancel",
        category: ActionCategory::Form,
        shortcut_display: Some("Esc"),
        command_bar: None,
    },
    ActionDef {
        action: Action::BrowseForDir,
        id: "form_browse",
        label: "Browse for directory",
        category: ActionCategory::Form,
        shortcut_display: Some("^B"),
        command_bar: None,
    },
    // System
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        label: "Help",
        category: ActionCategory::System,
        shortcut_display: Some("? / F1"),
        command_bar: Some(CommandBarEntry {
            key: "?",
            label: "Help",
            priority: 90,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("q / F10 / ^C"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 99,
        }),
    },
];

fn bind(code: KeyCode, modifiers: Option<KeyModifiers>, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
    }
}

/// 일반 모드 키 바인딩 (폼 입력 중에는 main의 폼 키 처리가 우선)
fn build_key_bindings() -> Vec<KeyBinding> {
    let none = Some(KeyModifiers::NONE);
    vec![
        // 종료
        bind(KeyCode::Char('q'), none, Action::Quit),
        bind(
            KeyCode::Char('c'),
            Some(KeyModifiers::CONTROL),
            Action::Quit,
        ),
        bind(KeyCode::F(10), None, Action::Quit),
        // 행 이동
        bind(KeyCode::Char('k'), none, Action::MoveUp),
        bind(KeyCode::Up, None, Action::MoveUp),
        bind(KeyCode::Char('j'), none, Action::MoveDown),
        bind(KeyCode::Down, None, Action::MoveDown),
        bind(KeyCode::Char('g'), none, Action::GoToTop),
        bind(KeyCode::Home, None, Action::GoToTop),
        // 대문자는 Shift 여부와 무관하게 매칭
        bind(KeyCode::Char('G'), None, Action::GoToBottom),
        bind(KeyCode::End, None, Action::GoToBottom),
        // 탭 이동
        bind(KeyCode::Tab, none, Action::NextTab),
        bind(KeyCode::Char('l'), none, Action::NextTab),
        bind(KeyCode::Right, None, Action::NextTab),
        bind(KeyCode::BackTab, None, Action::PrevTab),
        bind(KeyCode::Char('h'), none, Action::PrevTab),
        bind(KeyCode::Left, None, Action::PrevTab),
        // 디렉토리 작업
        bind(KeyCode::Char('a'), none, Action::AddDirectory),
        bind(KeyCode::Insert, None, Action::AddDirectory),
        bind(KeyCode::Char('d'), none, Action::RemoveDirectory),
        bind(KeyCode::Delete, None, Action::RemoveDirectory),
        bind(KeyCode::Char('D'), None, Action::DeleteStorageGroup),
        bind(KeyCode::Char('f'), none, Action::SelectHostFilter),
        bind(KeyCode::Char('r'), none, Action::Reload),
        bind(KeyCode::F(5), None, Action::Reload),
        // 시스템
        bind(KeyCode::Char('?'), None, Action::ShowHelp),
        bind(KeyCode::F(1), None, Action::ShowHelp),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    None => true,
                    Some(required) => modifiers == required,
                }
        })
        .map(|binding| binding.action)
}

impl Action {
    /// 레지스트리 ID (로그용)
    pub fn id(self) -> &'static str {
        ACTION_DEFS
            .iter()
            .find(|d| d.action == self)
            .map_or("unknown", |d| d.id)
    }
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, cb.label))
        .collect()
}

/// 도움말 다이얼로그용 엔트리 생성
///
/// 반환: (카테고리명, Vec<(단축키, 설명)>) 목록
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    let categories = [
        ActionCategory::Navigation,
        ActionCategory::Directory,
        ActionCategory::Form,
        ActionCategory::System,
    ];

    categories
        .iter()
        .map(|cat| {
            let items: Vec<(&'static str, &'static str)> = ACTION_DEFS
                .iter()
                .filter(|d| d.category == *cat)
                .filter_map(|d| d.shortcut_display.map(|shortcut| (shortcut, d.label)))
                .collect();
            (cat.title(), items)
        })
        .filter(|(_, items)| !items.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_id() {
        assert_eq!(Action::AddDirectory.id(), "dir_add");
        assert_eq!(Action::DeleteStorageGroup.id(), "group_delete");
        assert_eq!(Action::Quit.id(), "quit");
    }

    #[test]
    fn test_find_action_plain_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('a')),
            Some(Action::AddDirectory)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('d')),
            Some(Action::RemoveDirectory)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('f')),
            Some(Action::SelectHostFilter)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Tab),
            Some(Action::NextTab)
        );
    }

    #[test]
    fn test_find_action_shifted_and_any_modifier() {
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Char('D')),
            Some(Action::DeleteStorageGroup)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::BackTab),
            Some(Action::PrevTab)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Down),
            Some(Action::MoveDown)
        );
        // Ctrl+a 는 바인딩 없음
        assert_eq!(find_action(KeyModifiers::CONTROL, KeyCode::Char('a')), None);
    }

    #[test]
    fn test_find_action_ctrl_c_quits() {
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_command_bar_sorted_by_priority() {
        let items = generate_command_bar_items();
        assert_eq!(items.first().map(|i| i.key.as_str()), Some("a"));
        assert_eq!(items.last().map(|i| i.key.as_str()), Some("q"));
        assert_eq!(items.len(), 8);
    }

    #[test]
    fn test_help_entries_cover_all_categories() {
        let entries = generate_help_entries();
        let titles: Vec<&str> = entries.iter().map(|(title, _)| *title).collect();
        assert_eq!(
            titles,
            vec![
                "Navigation",
                "Storage Group Directories",
                "Add Directory Form",
                "System"
            ]
        );
        let form_items = &entries[2].1;
        assert!(form_items.iter().any(|(key, _)| *key == "^B"));
    }
}
