//! 백엔드 JSON 응답/요청 형식

use crate::models::{DirRequest, StorageGroupDir};
use serde::{Deserialize, Serialize};

/// `GET /Myth/GetStorageGroupDirs` 응답
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageGroupDirListResponse {
    #[serde(default)]
    pub storage_group_dir_list: StorageGroupDirList,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StorageGroupDirList {
    #[serde(default)]
    pub storage_group_dirs: Vec<WireStorageGroupDir>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireStorageGroupDir {
    #[serde(default)]
    pub id: WireId,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub host_name: String,
    #[serde(default)]
    pub dir_name: String,
}

/// 서버 버전에 따라 숫자 또는 숫자 문자열로 오는 ID
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl Default for WireId {
    fn default() -> Self {
        WireId::Number(0)
    }
}

impl WireId {
    /// 해석할 수 없는 문자열은 0
    pub fn value(&self) -> i64 {
        match self {
            WireId::Number(n) => *n,
            WireId::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

impl From<WireStorageGroupDir> for StorageGroupDir {
    fn from(wire: WireStorageGroupDir) -> Self {
        StorageGroupDir {
            id: wire.id.value(),
            group_name: wire.group_name,
            host_name: wire.host_name,
            dir_name: wire.dir_name,
        }
    }
}

impl StorageGroupDirListResponse {
    pub fn into_entries(self) -> Vec<StorageGroupDir> {
        self.storage_group_dir_list
            .storage_group_dirs
            .into_iter()
            .map(StorageGroupDir::from)
            .collect()
    }
}

/// 추가/삭제 응답 `{ "bool": ... }`
#[derive(Debug, Deserialize)]
pub struct BoolResponse {
    #[serde(rename = "bool")]
    pub value: WireBool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum WireBool {
    Flag(bool),
    Text(String),
}

impl WireBool {
    /// 문자열 "true" 또는 JSON true만 성공
    pub fn is_true(&self) -> bool {
        match self {
            WireBool::Flag(flag) => *flag,
            WireBool::Text(text) => text == "true",
        }
    }
}

/// 추가/삭제 요청 폼 필드
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirForm<'a> {
    pub group_name: &'a str,
    pub dir_name: &'a str,
    pub host_name: &'a str,
}

impl<'a> From<&'a DirRequest> for DirForm<'a> {
    fn from(request: &'a DirRequest) -> Self {
        DirForm {
            group_name: &request.group_name,
            dir_name: &request.dir_name,
            host_name: &request.host_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_accepts_numeric_and_string_ids() {
        let json = r#"{
            "StorageGroupDirList": {
                "StorageGroupDirs": [
                    {"Id": 1, "GroupName": "Default", "HostName": "host1", "DirName": "/a"},
                    {"Id": "2", "GroupName": "Videos", "HostName": "host2", "DirName": "/b"}
                ]
            }
        }"#;
        let response: StorageGroupDirListResponse = serde_json::from_str(json).unwrap();
        let entries = response.into_entries();
        assert_eq!(
            entries,
            vec![
                StorageGroupDir::new(1, "Default", "host1", "/a"),
                StorageGroupDir::new(2, "Videos", "host2", "/b"),
            ]
        );
    }

    #[test]
    fn test_list_response_without_dirs_is_empty() {
        let response: StorageGroupDirListResponse =
            serde_json::from_str(r#"{"StorageGroupDirList": {}}"#).unwrap();
        assert!(response.into_entries().is_empty());

        let response: StorageGroupDirListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_entries().is_empty());
    }

    #[test]
    fn test_bad_id_text_becomes_zero() {
        assert_eq!(WireId::Text("abc".to_string()).value(), 0);
        assert_eq!(WireId::Text(" 17 ".to_string()).value(), 17);
    }

    #[test]
    fn test_bool_response_only_true_values_succeed() {
        let ok: BoolResponse = serde_json::from_str(r#"{"bool": "true"}"#).unwrap();
        assert!(ok.value.is_true());
        let ok: BoolResponse = serde_json::from_str(r#"{"bool": true}"#).unwrap();
        assert!(ok.value.is_true());

        for body in [r#"{"bool": "false"}"#, r#"{"bool": "TRUE"}"#, r#"{"bool": false}"#] {
            let resp: BoolResponse = serde_json::from_str(body).unwrap();
            assert!(!resp.value.is_true(), "{} should not succeed", body);
        }
    }

    #[test]
    fn test_dir_form_field_names() {
        let request = DirRequest::new("Default", "host1", "/var/media");
        let value = serde_json::to_value(DirForm::from(&request)).unwrap();
        assert_eq!(value["GroupName"], "Default");
        assert_eq!(value["DirName"], "/var/media");
        assert_eq!(value["HostName"], "host1");
    }
}
