use crate::translate::Client;
use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Plain,
    Html,
}

// region    --- get langs
#[derive(Serialize)]
pub(crate) struct GetLangsQuery<'a> {
    pub(crate) ui: &'a str,
    pub(crate) key: &'a str,
}
// endregion --- get langs

// region    --- translate
#[derive(Builder)]
pub struct Translate<'a> {
    #[builder(start_fn)]
    pub(crate) client: &'a Client,
    pub(crate) text: &'a str,
    /// ISO 639-1，默认`en`
    #[builder(default = "en")]
    pub(crate) target: &'a str,
    /// 不设置的时候由api自动检测源语言
    pub(crate) source: Option<&'a str>,
    #[builder(default)]
    pub(crate) format: TextFormat,
}

#[derive(Serialize)]
pub(crate) struct TranslateQuery<'a> {
    pub(crate) text: &'a str,
    pub(crate) format: TextFormat,
    pub(crate) lang: &'a str,
    pub(crate) key: &'a str,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TranslateResponse {
    pub code: i32,
    /// 实际使用的翻译方向，如`en-es`
    pub lang: String,
    pub text: Vec<String>,
}
// endregion --- translate

// region    --- detect language
#[derive(Builder)]
pub struct DetectLanguage<'a> {
    #[builder(start_fn)]
    pub(crate) client: &'a Client,
    /// 可能的语言，提高检测的准确度
    // #[builder(field)]需要放在start_fn之后
    #[builder(field)]
    pub(crate) hints: Vec<&'a str>,
    pub(crate) text: &'a str,
}

impl<'a, S: detect_language_builder::State> DetectLanguageBuilder<'a, S> {
    pub fn hint(mut self, code: &'a str) -> Self {
        self.hints.push(code);
        self
    }

    pub fn hints(mut self, codes: impl IntoIterator<Item = &'a str>) -> Self {
        self.hints.extend(codes);
        self
    }
}

#[derive(Serialize)]
pub(crate) struct DetectQuery<'a> {
    pub(crate) text: &'a str,
    pub(crate) format: TextFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hint: Option<String>,
    pub(crate) key: &'a str,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DetectResponse {
    pub code: i32,
    /// 检测不出来的时候为空字符串
    pub lang: String,
}
// endregion --- detect language
