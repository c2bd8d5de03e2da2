mod api;
mod app;
mod cli;
mod config;
mod core;
mod logging;
mod models;
mod ui;
mod utils;

use api::HttpStorageGroupApi;
use app::App;
use clap::Parser;
use cli::Cli;
use config::Config;
use core::actions::{find_action, generate_command_bar_items};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use models::{HostFilter, LoadState};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget},
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use ui::{
    AddForm, CommandBar, Dialog, DialogKind, DirTable, Header, HeaderState, LayoutManager,
    StatusBar, TabBar, TabLabel, WarningScreen,
};
use utils::error::Result;

/// 편집 중이 아닐 때 탭 상단 안내
const IDLE_HINT: &str = " a: Add Directory  d: Remove  D: Delete Storage Group";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = Config::resolve_path(cli.config.as_deref());
    let mut config = Config::load(config_path.as_deref())?;
    cli.apply(&mut config);

    let _log_guard = logging::init(&config.logging);
    tracing::info!(
        server = %config.server,
        config = ?config_path,
        "sgadmin starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let api = HttpStorageGroupApi::new(&config.server, config.request_timeout())?;
    let server_label = api.base_url().to_string();

    let mut app = App::new(&config, Arc::new(api), runtime.handle().clone(), server_label);
    app.initialize(HostFilter::parse(&config.default_host));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    drop(app);
    // 응답을 기다리는 요청은 버림
    runtime.shutdown_background();
    tracing::info!("sgadmin stopped");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.process_api_events();
        app.clear_expired_notice();

        terminal.draw(|f| {
            let size = f.area();
            app.layout.update(size);
            app.sync_scroll();

            if app.layout.is_too_small() {
                let (width, height) = app.layout.terminal_size();
                let warning = WarningScreen::new()
                    .current_size(width, height)
                    .theme(app.theme_manager.current());
                f.render_widget(warning, app.layout.areas().warning);
            } else {
                render_main_ui(f, app);
            }
        })?;

        // 응답 대기 중에는 짧은 타임아웃으로 결과를 빨리 반영
        let poll_timeout = if app.has_pending_requests() {
            Duration::from_millis(30)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if app.is_dialog_active() {
                        handle_dialog_keys(app, key.modifiers, key.code);
                    } else if app.is_editing() {
                        app.handle_form_key(key.modifiers, key.code);
                    } else {
                        handle_normal_keys(app, key.modifiers, key.code);
                    }
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    // 1-9: 탭 직접 전환
    if modifiers == KeyModifiers::NONE {
        if let KeyCode::Char(c @ '1'..='9') = code {
            let index = c as usize - '1' as usize;
            app.switch_tab(index);
            return;
        }
    }

    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 다이얼로그 모드 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match &app.dialog {
        Some(DialogKind::Confirm { .. }) => handle_confirm_dialog_keys(app, code),
        Some(DialogKind::HostFilter { .. }) => handle_host_filter_dialog_keys(app, code),
        Some(DialogKind::Help { .. }) => handle_help_dialog_keys(app, code),
        None => {}
    }
}

fn handle_confirm_dialog_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            app.confirm_toggle_button();
        }
        KeyCode::Enter => app.confirm_dialog_accept(),
        KeyCode::Esc | KeyCode::Char('n') => app.close_dialog(),
        _ => {}
    }
}

fn handle_host_filter_dialog_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.host_filter_move(true),
        KeyCode::Down | KeyCode::Char('j') => app.host_filter_move(false),
        KeyCode::Enter => app.confirm_host_filter(),
        KeyCode::Esc | KeyCode::Char('q') => app.close_dialog(),
        _ => {}
    }
}

fn handle_help_dialog_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
            app.close_dialog();
        }
        KeyCode::Char('j') | KeyCode::Down => app.help_scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.help_scroll_up(),
        _ => {}
    }
}

fn render_header(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: Rect) {
    let state = match app.panel.load_state() {
        LoadState::Loading => HeaderState::Loading,
        LoadState::Failed(_) => HeaderState::Failed,
        LoadState::NotLoaded | LoadState::Ready => HeaderState::Idle,
    };
    let header = Header::new(app.server_label(), app.panel.filter().label())
        .state(state)
        .theme(theme);
    f.render_widget(header, area);
}

fn render_tab_bar(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: Rect) {
    let placeholder = match app.panel.load_state() {
        LoadState::NotLoaded | LoadState::Loading => "Loading storage groups…".to_string(),
        LoadState::Failed(reason) => format!("Could not load storage groups: {}", reason),
        LoadState::Ready => "No storage groups".to_string(),
    };
    let labels = app
        .panel
        .tabs()
        .iter()
        .map(|tab| TabLabel {
            title: &tab.group_name,
            editing: tab.is_editing(),
        })
        .collect();
    let tab_bar = TabBar::new(labels)
        .active(app.panel.active_index())
        .placeholder(&placeholder)
        .theme(theme);
    f.render_widget(tab_bar, area);
}

fn render_body(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: Rect) {
    let Some(tab) = app.panel.active_tab() else {
        let message = match app.panel.load_state() {
            LoadState::NotLoaded | LoadState::Loading => "Loading…",
            LoadState::Failed(_) => "Storage group directories are unavailable",
            LoadState::Ready => "No storage group directories for this host",
        };
        let table = DirTable::new(&[])
            .title("Directories")
            .compact(app.layout.is_compact())
            .empty_message(message)
            .theme(theme);
        f.render_widget(table, area);
        return;
    };

    let editing = tab.is_editing();
    let body = LayoutManager::split_body(area, editing);
    match tab.form() {
        Some(form) => {
            f.render_widget(AddForm::new(form, &tab.group_name).theme(theme), body.top);
        }
        None => {
            Paragraph::new(IDLE_HINT)
                .style(
                    Style::default()
                        .fg(theme.row_pending.to_color())
                        .bg(theme.bg_primary.to_color()),
                )
                .render(body.top, f.buffer_mut());
        }
    }

    let table = DirTable::new(&tab.rows)
        .title(&tab.group_name)
        .selected_index(tab.selected_index)
        .scroll_offset(tab.scroll_offset)
        .focused(!editing && !app.is_dialog_active())
        .compact(app.layout.is_compact())
        .empty_message("No directories in this storage group")
        .theme(theme);
    f.render_widget(table, body.table);
}

fn render_status_bar(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme, area: Rect) {
    let loaded_at = app.last_loaded_label();
    let status_bar = StatusBar::new()
        .notice(app.notice_view())
        .group_count(app.panel.tab_count())
        .dir_count(app.panel.total_rows())
        .loaded_at(loaded_at.as_deref())
        .theme(theme);
    f.render_widget(status_bar, area);
}

fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();

    render_header(f, app, theme, areas.header);
    render_tab_bar(f, app, theme, areas.tab_bar);
    render_body(f, app, theme, areas.body);
    render_status_bar(f, app, theme, areas.status_bar);

    let commands = match app.panel.active_tab() {
        Some(tab) if tab.is_editing() => CommandBar::form_commands(tab.is_submitting()),
        _ => generate_command_bar_items(),
    };
    let command_bar = CommandBar::new().commands(commands).theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}
