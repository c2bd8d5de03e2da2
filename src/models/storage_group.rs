use std::fmt;

/// 모든 호스트를 뜻하는 필터 문자열
pub const ALL_HOSTS: &str = "ALL";

/// 새로 추가했지만 아직 다시 불러오지 않은 항목의 임시 ID
pub const PLACEHOLDER_ID: i64 = 0;

/// 스토리지 그룹 디렉토리 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageGroupDir {
    /// 서버가 부여한 ID (로컬 추가분은 0)
    pub id: i64,
    pub group_name: String,
    pub host_name: String,
    pub dir_name: String,
}

impl StorageGroupDir {
    pub fn new(
        id: i64,
        group_name: impl Into<String>,
        host_name: impl Into<String>,
        dir_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            group_name: group_name.into(),
            host_name: host_name.into(),
            dir_name: dir_name.into(),
        }
    }

    /// 서버가 아직 ID를 부여하지 않은 항목인지
    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

/// 추가/삭제 API에 보내는 (그룹, 호스트, 디렉토리) 묶음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirRequest {
    pub group_name: String,
    pub host_name: String,
    pub dir_name: String,
}

impl DirRequest {
    pub fn new(
        group_name: impl Into<String>,
        host_name: impl Into<String>,
        dir_name: impl Into<String>,
    ) -> Self {
        Self {
            group_name: group_name.into(),
            host_name: host_name.into(),
            dir_name: dir_name.into(),
        }
    }

    /// 성공한 추가 요청을 임시 ID 항목으로 변환
    pub fn into_placeholder_entry(self) -> StorageGroupDir {
        StorageGroupDir {
            id: PLACEHOLDER_ID,
            group_name: self.group_name,
            host_name: self.host_name,
            dir_name: self.dir_name,
        }
    }
}

/// 호스트 필터
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HostFilter {
    #[default]
    All,
    Host(String),
}

impl HostFilter {
    /// 필터 문자열 파싱. "ALL"(정확히 일치)이거나 비어 있으면 전체
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == ALL_HOSTS {
            HostFilter::All
        } else {
            HostFilter::Host(trimmed.to_string())
        }
    }

    /// 항목의 호스트가 필터와 일치하는지 (대소문자 구분)
    pub fn matches(&self, host_name: &str) -> bool {
        match self {
            HostFilter::All => true,
            HostFilter::Host(host) => host == host_name,
        }
    }

    pub fn host(&self) -> Option<&str> {
        match self {
            HostFilter::All => None,
            HostFilter::Host(host) => Some(host),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            HostFilter::All => ALL_HOSTS,
            HostFilter::Host(host) => host,
        }
    }
}

impl fmt::Display for HostFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_filter_parse() {
        assert_eq!(HostFilter::parse("ALL"), HostFilter::All);
        assert_eq!(HostFilter::parse("  "), HostFilter::All);
        assert_eq!(
            HostFilter::parse(" host1 "),
            HostFilter::Host("host1".to_string())
        );
        // 센티널은 대소문자까지 일치해야 함
        assert_eq!(HostFilter::parse("all"), HostFilter::Host("all".to_string()));
    }

    #[test]
    fn test_host_filter_matches_exact_host_only() {
        let filter = HostFilter::Host("host1".to_string());
        assert!(filter.matches("host1"));
        assert!(!filter.matches("Host1"));
        assert!(!filter.matches("host10"));
        assert!(HostFilter::All.matches("anything"));
    }

    #[test]
    fn test_request_into_placeholder_entry() {
        let request = DirRequest::new("Default", "host1", "/var/media");
        let added = request.into_placeholder_entry();
        assert!(added.is_placeholder());
        assert_eq!(added.group_name, "Default");
        assert_eq!(added.dir_name, "/var/media");
    }
}
