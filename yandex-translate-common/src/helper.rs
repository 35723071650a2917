use crate::Error;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::warn;

/// 发送请求失败时的错误转换，连接层面的失败统一为`Error::Unavailable`
///
/// url的query里有api key和待翻译的文本，记录日志和包装之前先去掉url
pub fn map_send_error(e: reqwest::Error) -> Error {
    let e = e.without_url();
    if e.is_connect() {
        warn!(error = %e, "connection to api failed");
        Error::Unavailable(e)
    } else {
        Error::Reqwest(e)
    }
}

/// 非200响应转换为错误，body不是JSON的时候保存为字符串
pub async fn into_request_failed_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    match resp.text().await {
        Ok(text) => {
            warn!(%status, "api returned non-success status");
            let body = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
            Error::RequestAPIFailed { status, body }
        }
        Err(e) => e.into(),
    }
}

pub async fn parse_json_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    let status = resp.status();

    // 202、204等也视为失败
    if status != StatusCode::OK {
        return Err(into_request_failed_error(resp).await);
    }

    let text = resp.text().await?;
    let data = serde_json::from_str(&text)?;
    Ok(data)
}
