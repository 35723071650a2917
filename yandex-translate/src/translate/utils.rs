use super::error::{Error, LanguageRole};
use super::languages::SupportedLanguages;

pub(crate) fn normalize_base_url(mut base_url: String) -> String {
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}

/// 先检查target，再检查source；source为空时方向就是target本身，否则为`source-target`
pub(crate) fn translate_direction(
    langs: &SupportedLanguages,
    source: Option<&str>,
    target: &str,
) -> Result<String, Error> {
    if !langs.contains(target) {
        return Err(Error::LanguageNotSupported {
            role: LanguageRole::Target,
            code: target.to_owned(),
        });
    }
    let Some(source) = source else {
        return Ok(target.to_owned());
    };
    if !langs.contains(source) {
        return Err(Error::LanguageNotSupported {
            role: LanguageRole::Source,
            code: source.to_owned(),
        });
    }
    Ok(format!("{source}-{target}"))
}
