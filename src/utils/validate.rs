//! 디렉토리 추가 입력 검증

use crate::models::DirRequest;
use crate::utils::error::{Result, SgAdminError};

/// 추가 요청 검증 + 호스트/디렉토리 앞뒤 공백 정리
///
/// 호스트는 비어 있으면 안 되고, 디렉토리는 절대 경로처럼 보여야 합니다.
/// 그룹 이름은 탭의 키이므로 그대로 전달합니다.
pub fn validate_new_dir(group_name: &str, host_name: &str, dir_name: &str) -> Result<DirRequest> {
    let host_name = host_name.trim();
    let dir_name = dir_name.trim();

    if host_name.is_empty() {
        return Err(SgAdminError::Validation("Host name is required.".to_string()));
    }
    if host_name.chars().any(char::is_whitespace) {
        return Err(SgAdminError::Validation(format!(
            "Host name '{}' must not contain spaces.",
            host_name
        )));
    }
    if dir_name.is_empty() {
        return Err(SgAdminError::Validation(
            "Directory path is required.".to_string(),
        ));
    }
    if !looks_absolute(dir_name) {
        return Err(SgAdminError::Validation(format!(
            "Directory '{}' must be an absolute path.",
            dir_name
        )));
    }

    Ok(DirRequest::new(group_name, host_name, dir_name))
}

/// 원격 호스트 기준 경로이므로 로컬 OS가 아닌 문자열 형태로만 판단
fn looks_absolute(path: &str) -> bool {
    if path.starts_with('/') {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'\\' || bytes[2] == b'/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_is_trimmed() {
        let request = validate_new_dir("Default", " host1 ", " /var/media ").unwrap();
        assert_eq!(request, DirRequest::new("Default", "host1", "/var/media"));
    }

    #[test]
    fn test_group_name_passed_unchanged() {
        let request = validate_new_dir(" Media ", "host1", "/a").unwrap();
        assert_eq!(request.group_name, " Media ");

        let request = validate_new_dir("", "host1", "/a").unwrap();
        assert_eq!(request.group_name, "");
    }

    #[test]
    fn test_empty_host_rejected() {
        let err = validate_new_dir("Default", "   ", "/var/media").unwrap_err();
        assert!(matches!(err, SgAdminError::Validation(_)));
        assert_eq!(err.to_string(), "Host name is required.");
    }

    #[test]
    fn test_host_with_space_rejected() {
        assert!(validate_new_dir("Default", "my host", "/var/media").is_err());
    }

    #[test]
    fn test_relative_or_empty_dir_rejected() {
        assert!(validate_new_dir("Default", "host1", "").is_err());
        assert!(validate_new_dir("Default", "host1", "media/videos").is_err());
        assert!(validate_new_dir("Default", "host1", "~/videos").is_err());
    }

    #[test]
    fn test_windows_drive_path_accepted() {
        assert!(validate_new_dir("Default", "host1", "C:\\Media").is_ok());
        assert!(validate_new_dir("Default", "host1", "d:/recordings").is_ok());
    }
}
