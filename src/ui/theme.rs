use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 색상 테마 시스템
///
/// 기본 제공 테마(dark, light, high_contrast) 또는
/// `<config_dir>/sgadmin/themes/<name>.toml` 파일에서 로드한 테마를 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 헤더 / 탭 바
    pub header_bg: ColorDef,
    pub header_fg: ColorDef,
    pub tab_active_bg: ColorDef,
    pub tab_active_fg: ColorDef,
    pub tab_inactive_fg: ColorDef,

    // 디렉토리 테이블
    pub border: ColorDef,
    pub row_normal: ColorDef,
    pub row_selected: ColorDef,
    pub row_selected_bg: ColorDef,
    pub row_pending: ColorDef,

    // 입력 필드
    pub input_bg: ColorDef,
    pub input_fg: ColorDef,

    // UI 컴포넌트
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            header_bg: "#2d2d30".into(),
            header_fg: "#ffffff".into(),
            tab_active_bg: "#0078d4".into(),
            tab_active_fg: "#ffffff".into(),
            tab_inactive_fg: "#9d9d9d".into(),

            border: "#3c3c3c".into(),
            row_normal: "#d4d4d4".into(),
            row_selected: "#ffffff".into(),
            row_selected_bg: "#0078d4".into(),
            row_pending: "#808080".into(),

            input_bg: "#3c3c3c".into(),
            input_fg: "#ffffff".into(),

            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),

            accent: "#569cd6".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            header_bg: "#0078d4".into(),
            header_fg: "#ffffff".into(),
            tab_active_bg: "#add6ff".into(),
            tab_active_fg: "#000000".into(),
            tab_inactive_fg: "#6e6e6e".into(),

            border: "#cccccc".into(),
            row_normal: "#1e1e1e".into(),
            row_selected: "#000000".into(),
            row_selected_bg: "#add6ff".into(),
            row_pending: "#a0a0a0".into(),

            input_bg: "#f3f3f3".into(),
            input_fg: "#000000".into(),

            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),

            accent: "#0066cc".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
        }
    }

    /// High Contrast 테마
    pub fn high_contrast() -> Self {
        Theme {
            bg_primary: "#000000".into(),
            fg_primary: "#ffffff".into(),

            header_bg: "#000000".into(),
            header_fg: "#00ff00".into(),
            tab_active_bg: "#00ff00".into(),
            tab_active_fg: "#000000".into(),
            tab_inactive_fg: "#ffffff".into(),

            border: "#808080".into(),
            row_normal: "#ffffff".into(),
            row_selected: "#000000".into(),
            row_selected_bg: "#00ff00".into(),
            row_pending: "#808080".into(),

            input_bg: "#000000".into(),
            input_fg: "#ffff00".into(),

            status_bar_bg: "#000000".into(),
            status_bar_fg: "#00ff00".into(),
            command_bar_bg: "#000000".into(),
            command_bar_fg: "#ffffff".into(),

            accent: "#00ffff".into(),
            warning: "#ffff00".into(),
            error: "#ff0000".into(),
            success: "#00ff00".into(),
        }
    }

    /// 기본 제공 테마 조회
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high_contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }
}

/// 사용자 테마 디렉토리
pub fn themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sgadmin").join("themes"))
}

/// 테마 관리자
pub struct ThemeManager {
    name: String,
    current_theme: Theme,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            name: "dark".to_string(),
            current_theme: Theme::dark(),
        }
    }

    /// 이름으로 테마 선택
    ///
    /// 기본 제공 테마가 아니면 사용자 테마 디렉토리에서 `<name>.toml`을 찾고,
    /// 실패하면 dark 테마로 대체합니다.
    pub fn from_name(name: &str) -> Self {
        Self::from_name_in(name, themes_dir().as_deref())
    }

    fn from_name_in(name: &str, themes_dir: Option<&Path>) -> Self {
        if let Some(theme) = Theme::builtin(name) {
            return Self {
                name: name.to_string(),
                current_theme: theme,
            };
        }

        let loaded = themes_dir
            .map(|dir| dir.join(format!("{}.toml", name)))
            .ok_or_else(|| anyhow::anyhow!("no config directory"))
            .and_then(|path| Theme::from_file(&path));

        match loaded {
            Ok(theme) => Self {
                name: name.to_string(),
                current_theme: theme,
            },
            Err(e) => {
                tracing::warn!(theme = name, error = %e, "theme not found, using dark");
                Self::new()
            }
        }
    }

    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
