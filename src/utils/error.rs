use thiserror::Error;

#[derive(Error, Debug)]
pub enum SgAdminError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}")]
    HttpStatus { endpoint: &'static str, status: u16 },

    #[error("{0}")]
    Validation(String),
}

impl SgAdminError {
    /// 서버까지 도달하지 못했거나 응답을 해석하지 못한 경우
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SgAdminError::Http(_) | SgAdminError::HttpStatus { .. } | SgAdminError::InvalidUrl(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SgAdminError>;
