//! reqwest 기반 HTTP 백엔드

use crate::api::types::{BoolResponse, DirForm, StorageGroupDirListResponse};
use crate::api::StorageGroupApi;
use crate::models::{DirRequest, StorageGroupDir};
use crate::utils::error::{Result, SgAdminError};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Duration;
use url::Url;

const LIST_ENDPOINT: &str = "Myth/GetStorageGroupDirs";
const ADD_ENDPOINT: &str = "Myth/AddStorageGroupDir";
const REMOVE_ENDPOINT: &str = "Myth/RemoveStorageGroupDir";

/// 서버는 Accept 헤더가 없으면 XML로 응답
const JSON_MEDIA_TYPE: &str = "application/json";

pub struct HttpStorageGroupApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpStorageGroupApi {
    pub fn new(server: &str, timeout: Duration) -> Result<Self> {
        let base_url = Self::normalize_base_url(server)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 스킴이 없으면 http://, 경로는 '/'로 끝나도록 정리
    pub fn normalize_base_url(server: &str) -> Result<Url> {
        let server = server.trim();
        if server.is_empty() {
            return Err(SgAdminError::Config("server URL is empty".to_string()));
        }
        let with_scheme = if server.starts_with("http://") || server.starts_with("https://") {
            server.to_string()
        } else {
            format!("http://{server}")
        };

        let mut url = Url::parse(&with_scheme)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    async fn post_dir(&self, endpoint: &'static str, request: &DirRequest) -> Result<bool> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(%url, group = %request.group_name, host = %request.host_name, dir = %request.dir_name, "POST");

        let response = self
            .client
            .post(url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .form(&DirForm::from(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SgAdminError::HttpStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body: BoolResponse = response.json().await?;
        Ok(body.value.is_true())
    }
}

#[async_trait]
impl StorageGroupApi for HttpStorageGroupApi {
    async fn list_dirs(&self) -> Result<Vec<StorageGroupDir>> {
        let url = self.endpoint_url(LIST_ENDPOINT)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SgAdminError::HttpStatus {
                endpoint: LIST_ENDPOINT,
                status: status.as_u16(),
            });
        }

        let body: StorageGroupDirListResponse = response.json().await?;
        Ok(body.into_entries())
    }

    async fn add_dir(&self, request: &DirRequest) -> Result<bool> {
        self.post_dir(ADD_ENDPOINT, request).await
    }

    async fn remove_dir(&self, request: &DirRequest) -> Result<bool> {
        self.post_dir(REMOVE_ENDPOINT, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Form;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn wants_json(headers: &HeaderMap) -> bool {
        headers
            .get(ACCEPT)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains(JSON_MEDIA_TYPE))
    }

    fn recording_route(received: &Received, name: &'static str, reply: Value) -> axum::routing::MethodRouter {
        let received = Arc::clone(received);
        post(
            move |headers: HeaderMap, Form(fields): Form<HashMap<String, String>>| {
                let received = Arc::clone(&received);
                let reply = reply.clone();
                async move {
                    if !wants_json(&headers) {
                        return Err(StatusCode::NOT_ACCEPTABLE);
                    }
                    received
                        .lock()
                        .unwrap()
                        .push((name.to_string(), fields));
                    Ok(Json(reply))
                }
            },
        )
    }

    fn api(base: &str) -> HttpStorageGroupApi {
        HttpStorageGroupApi::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_normalize_base_url() {
        let url = HttpStorageGroupApi::normalize_base_url("backend:6544").unwrap();
        assert_eq!(url.as_str(), "http://backend:6544/");

        let url = HttpStorageGroupApi::normalize_base_url("https://example.org/mythtv").unwrap();
        assert_eq!(url.as_str(), "https://example.org/mythtv/");
        assert_eq!(
            url.join(LIST_ENDPOINT).unwrap().as_str(),
            "https://example.org/mythtv/Myth/GetStorageGroupDirs"
        );

        assert!(HttpStorageGroupApi::normalize_base_url("  ").is_err());
    }

    #[tokio::test]
    async fn test_list_dirs_sends_accept_header_and_decodes() {
        let router = Router::new().route(
            "/Myth/GetStorageGroupDirs",
            get(|headers: HeaderMap| async move {
                if !wants_json(&headers) {
                    return Err(StatusCode::NOT_ACCEPTABLE);
                }
                Ok(Json(json!({
                    "StorageGroupDirList": {
                        "StorageGroupDirs": [
                            {"Id": "1", "GroupName": "Default", "HostName": "host1", "DirName": "/a"},
                            {"Id": 2, "GroupName": "Videos", "HostName": "host2", "DirName": "/b"}
                        ]
                    }
                })))
            }),
        );
        let base = spawn_server(router).await;

        let entries = api(&base).list_dirs().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], StorageGroupDir::new(1, "Default", "host1", "/a"));
        assert_eq!(entries[1].id, 2);
    }

    #[tokio::test]
    async fn test_add_and_remove_post_form_fields() {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route(
                "/Myth/AddStorageGroupDir",
                recording_route(&received, "add", json!({"bool": "true"})),
            )
            .route(
                "/Myth/RemoveStorageGroupDir",
                recording_route(&received, "remove", json!({"bool": "false"})),
            );
        let base = spawn_server(router).await;
        let api = api(&base);
        let request = DirRequest::new("Default", "host1", "/var/media");

        assert!(api.add_dir(&request).await.unwrap());
        assert!(!api.remove_dir(&request).await.unwrap());

        let calls = received.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "add");
        assert_eq!(calls[1].0, "remove");
        for (_, fields) in &calls {
            assert_eq!(fields.get("GroupName").map(String::as_str), Some("Default"));
            assert_eq!(fields.get("HostName").map(String::as_str), Some("host1"));
            assert_eq!(fields.get("DirName").map(String::as_str), Some("/var/media"));
        }
    }

    #[tokio::test]
    async fn test_http_error_status_is_transport_failure() {
        let router = Router::new().route(
            "/Myth/AddStorageGroupDir",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = spawn_server(router).await;

        let err = api(&base)
            .add_dir(&DirRequest::new("Default", "host1", "/x"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert!(matches!(
            err,
            SgAdminError::HttpStatus {
                endpoint: ADD_ENDPOINT,
                status: 500
            }
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        // 바인드 후 즉시 닫아 사용되지 않는 포트를 얻음
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = api(&format!("http://{addr}")).list_dirs().await.unwrap_err();
        assert!(matches!(err, SgAdminError::Http(_)));
    }
}
