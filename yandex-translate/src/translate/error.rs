use reqwest::StatusCode;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    Source,
    Target,
}

impl fmt::Display for LanguageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageRole::Source => f.write_str("source"),
            LanguageRole::Target => f.write_str("target"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// 非2xx响应，`body`为解析后的错误信息，如`{"code":401,"message":"API key is invalid"}`
    #[error("request api failed: {status}, body: {body}")]
    RequestAPIFailed {
        status: StatusCode,
        body: serde_json::Value,
    },
    #[error("API unavailable")]
    Unavailable(#[source] reqwest::Error),
    #[error("{role} language '{code}' not supported")]
    LanguageNotSupported { role: LanguageRole, code: String },
    #[error("failed to decode `{endpoint}` response: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },
    #[error("reqwest error: {0}")]
    Reqwest(reqwest::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Reqwest(e.without_url())
    }
}

impl Error {
    pub(crate) fn from_common(e: yandex_translate_common::Error, endpoint: &'static str) -> Self {
        use yandex_translate_common::Error as E;
        match e {
            E::RequestAPIFailed { status, body } => Error::RequestAPIFailed { status, body },
            E::Unavailable(e) => Error::Unavailable(e),
            E::Decode(e) => Error::Decode {
                endpoint,
                message: e.to_string(),
            },
            E::Reqwest(e) => Error::Reqwest(e),
        }
    }

    /// 远端返回的错误，包括连接失败
    pub fn is_remote_api_error(&self) -> bool {
        matches!(
            self,
            Error::RequestAPIFailed { .. } | Error::Unavailable(_)
        )
    }

    pub fn api_error_body(&self) -> Option<&serde_json::Value> {
        match self {
            Error::RequestAPIFailed { body, .. } => Some(body),
            _ => None,
        }
    }
}
