//! Yandex 文本翻译
//!
//! 三个接口：`getLangs`、`translate`、`detect`，都是GET请求，api key放在query里面。
//! 支持的语言列表每个`Client`只会成功请求一次，之后一直使用缓存。

use bon::bon;
use serde::Deserialize;
use std::fmt;
use tokio::sync::OnceCell;

mod error;
pub use error::{Error, LanguageRole};

mod languages;
pub use languages::SupportedLanguages;

mod trans;
mod types_rs;
pub use types_rs::*;

mod utils;

pub const BASE_URL: &str = "https://translate.yandex.net/api/v1.5/tr.json/";

pub struct Client {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
    ui: String,
    supported_languages: OnceCell<SupportedLanguages>,
}

#[bon]
impl Client {
    /// api key 在 <https://translate.yandex.com/developers> 申请
    ///
    /// - `base_url`: 默认为[`BASE_URL`]，末尾没有`/`会自动补上
    /// - `ui`: `getLangs`返回的语言名称所使用的语言，默认`en`
    /// - `http_client`: 需要超时等设置的时候自行传入
    #[builder(on(String, into))]
    pub fn new(
        api_key: String,
        #[builder(default = BASE_URL.to_owned())] base_url: String,
        #[builder(default = "en".to_owned())] ui: String,
        #[builder(default)] http_client: reqwest::Client,
    ) -> Self {
        Self {
            api_key,
            http_client,
            base_url: utils::normalize_base_url(base_url),
            ui,
            supported_languages: OnceCell::new(),
        }
    }
}

impl Client {
    pub fn from_config(conf: &Config) -> Self {
        Self::builder()
            .api_key(conf.api_key.clone())
            .maybe_base_url(conf.base_url.clone())
            .maybe_ui(conf.ui.clone())
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("ui", &self.ui)
            .field("supported_languages", &self.supported_languages.get())
            .finish()
    }
}

/// 可以从应用自己的配置文件反序列化得到
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub ui: Option<String>,
}
