use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// `getLangs`的返回结果
///
/// `langs`在请求带有`ui`参数时是`{code: name}`对象，否则是code列表，两种都可以解析
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SupportedLanguages {
    #[serde(default)]
    dirs: Vec<String>,
    #[serde(deserialize_with = "deserialize_langs")]
    langs: BTreeMap<String, Option<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LangsRepr {
    Named(BTreeMap<String, String>),
    Codes(Vec<String>),
}

fn deserialize_langs<'de, D>(deserializer: D) -> Result<BTreeMap<String, Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let langs = match LangsRepr::deserialize(deserializer)? {
        LangsRepr::Named(m) => m.into_iter().map(|(k, v)| (k, Some(v))).collect(),
        LangsRepr::Codes(v) => v.into_iter().map(|k| (k, None)).collect(),
    };
    Ok(langs)
}

impl SupportedLanguages {
    pub fn contains(&self, code: &str) -> bool {
        self.langs.contains_key(code)
    }

    /// 按code排序
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.langs.keys().map(String::as_str)
    }

    /// 语言名称，语言为请求时的`ui`
    pub fn name(&self, code: &str) -> Option<&str> {
        self.langs.get(code)?.as_deref()
    }

    /// 支持的翻译方向，如`en-ru`
    pub fn directions(&self) -> &[String] {
        &self.dirs
    }

    pub fn supports_direction(&self, dir: &str) -> bool {
        self.dirs.iter().any(|d| d == dir)
    }

    pub fn len(&self) -> usize {
        self.langs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.langs.is_empty()
    }
}
