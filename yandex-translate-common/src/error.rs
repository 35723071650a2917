use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("request api failed: {status}, body: {body}")]
    RequestAPIFailed {
        status: StatusCode,
        body: serde_json::Value,
    },
    /// 连接不上服务端
    #[error("API unavailable")]
    Unavailable(#[source] reqwest::Error),
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("reqwest error: {0}")]
    Reqwest(reqwest::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Reqwest(e.without_url())
    }
}
