// Layout system - 반응형 레이아웃 시스템
//
// 터미널 크기에 따른 레이아웃 모드:
// - 80+ cols: 일반 모드 (Host / Directory / Id 컬럼 모두 표시)
// - 40-79 cols: 간략 모드 (Id 컬럼 숨김)
// - <40 cols: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;
pub const WIDE_MIN_WIDTH: u16 = 80;

/// 편집 폼 높이 (테두리 포함)
pub const FORM_HEIGHT: u16 = 6;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 일반 모드 (80+ cols)
    Wide,
    /// 간략 모드 (40-79 cols)
    Compact,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 헤더 (서버 / 호스트 필터 / 알림)
    pub header: Rect,
    /// 스토리지 그룹 탭 바
    pub tab_bar: Rect,
    /// 탭 본문 (폼 + 디렉토리 테이블)
    pub body: Rect,
    /// 상태바 영역
    pub status_bar: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 탭 본문 분할 결과
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyAreas {
    /// 안내 문구 또는 편집 폼
    pub top: Rect,
    /// 디렉토리 테이블
    pub table: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Wide,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else if width < WIDE_MIN_WIDTH {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Wide | LayoutMode::Compact => Self::calculate_areas(area),
        };
    }

    fn calculate_areas(area: Rect) -> LayoutAreas {
        // 헤더 | 탭바 | 본문 | 상태바 | 커맨드바
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        LayoutAreas {
            header: chunks[0],
            tab_bar: chunks[1],
            body: chunks[2],
            status_bar: chunks[3],
            command_bar: chunks[4],
            warning: Rect::default(),
        }
    }

    /// 본문을 상단(안내/폼)과 테이블로 분할
    pub fn split_body(body: Rect, editing: bool) -> BodyAreas {
        let top_height = if editing { FORM_HEIGHT } else { 1 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(top_height), Constraint::Min(3)])
            .split(body);
        BodyAreas {
            top: chunks[0],
            table: chunks[1],
        }
    }

    /// 테이블 본문에 표시 가능한 행 수 (테두리 2 + 헤더 1 제외)
    pub fn table_rows(&self, editing: bool) -> usize {
        let body = Self::split_body(self.areas.body, editing);
        body.table.height.saturating_sub(3) as usize
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// 간략 모드인지 확인
    pub fn is_compact(&self) -> bool {
        matches!(self.mode, LayoutMode::Compact)
    }

    /// 터미널이 너무 작은지 확인
    pub fn is_too_small(&self) -> bool {
        matches!(self.mode, LayoutMode::TooSmall)
    }
}
