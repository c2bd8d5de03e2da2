// Backend API Layer
pub mod client;
pub mod types;

pub use client::HttpStorageGroupApi;

use crate::models::{DirRequest, StorageGroupDir};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 스토리지 그룹 디렉토리 백엔드
///
/// `add_dir`/`remove_dir`의 `Ok(false)`는 서버가 요청을 거부한 경우이고,
/// `Err`는 서버 응답을 받지 못했거나 해석하지 못한 경우입니다.
#[async_trait]
pub trait StorageGroupApi: Send + Sync {
    /// 전체 디렉토리 목록
    async fn list_dirs(&self) -> Result<Vec<StorageGroupDir>>;

    /// 디렉토리 추가
    async fn add_dir(&self, request: &DirRequest) -> Result<bool>;

    /// 디렉토리 삭제
    async fn remove_dir(&self, request: &DirRequest) -> Result<bool>;
}
