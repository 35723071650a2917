use super::Client;
use super::Error;
use super::languages::SupportedLanguages;
use super::types_rs::*;
use super::utils::translate_direction;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use yandex_translate_common::helper::{map_send_error, parse_json_response};

impl Client {
    /// 当前支持的语言，语言均为ISO 639-1 code
    ///
    /// 第一次成功请求后缓存在`Client`里，之后不再请求；请求失败不会缓存，下次调用会重新请求。
    pub async fn supported_languages(&self) -> Result<&SupportedLanguages, Error> {
        self.supported_languages
            .get_or_try_init(|| async move {
                let query = GetLangsQuery {
                    ui: &self.ui,
                    key: &self.api_key,
                };
                let langs: SupportedLanguages = self.get_api_response("getLangs", &query).await?;
                debug!(
                    langs = langs.len(),
                    dirs = langs.directions().len(),
                    "cached supported languages"
                );
                Ok::<_, Error>(langs)
            })
            .await
    }

    /// 翻译文本，默认翻译为英文
    ///
    /// 不指定source的时候由api检测源语言，结果可能不够准确。
    /// 发送之前会检查source和target是否在[`Client::supported_languages`]里。
    pub fn translate(&self) -> TranslateBuilder<'_> {
        Translate::builder(self)
    }

    /// 检测文本的语言
    pub fn detect_language(&self) -> DetectLanguageBuilder<'_> {
        DetectLanguage::builder(self)
    }

    pub(crate) async fn get_api_response<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query: &impl Serialize,
    ) -> Result<T, Error> {
        let resp = self
            .http_client
            .get(format!("{}{}", self.base_url, endpoint))
            .query(query)
            .send()
            .await
            .map_err(|e| Error::from_common(map_send_error(e), endpoint))?;
        debug!(endpoint, status = %resp.status(), "api responded");

        parse_json_response(resp)
            .await
            .map_err(|e| Error::from_common(e, endpoint))
    }
}

impl Translate<'_> {
    pub async fn send(&self) -> Result<TranslateResponse, Error> {
        let client = self.client;
        let langs = client.supported_languages().await?;
        let lang = translate_direction(langs, self.source, self.target)?;

        let query = TranslateQuery {
            text: self.text,
            format: self.format,
            lang: &lang,
            key: &client.api_key,
        };
        client.get_api_response("translate", &query).await
    }
}

impl DetectLanguage<'_> {
    pub async fn send(&self) -> Result<DetectResponse, Error> {
        let client = self.client;
        let hint = (!self.hints.is_empty()).then(|| self.hints.join(","));

        let query = DetectQuery {
            text: self.text,
            format: TextFormat::Plain,
            hint,
            key: &client.api_key,
        };
        client.get_api_response("detect", &query).await
    }
}
