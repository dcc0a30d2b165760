use super::Error;
use super::types_rs::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

pub(crate) const DEFAULT_SCHEME: &str = "https";
pub(crate) const DEFAULT_DOMAIN: &str = "translate.api.cloud.yandex.net";
pub(crate) const DEFAULT_BASE_PATH: &str = "translate/v2";

const DETECT_TEXT_MAX_CHARS: usize = 1000;
const HINTS_MAX_COUNT: usize = 10;
const TEXTS_MAX_TOTAL_CHARS: usize = 10000;
const MODEL_MAX_CHARS: usize = 50;
const GLOSSARY_MAX_PAIRS: usize = 50;
const GLOSSARY_MAX_TOTAL_CHARS: usize = 10000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Detect,
    Languages,
    Translate,
}

impl Method {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Method::Detect => "detect",
            Method::Languages => "languages",
            Method::Translate => "translate",
        }
    }
}

/// `{scheme}://{domain}/{base_path}/{method}`，未设置的部分使用默认值
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Endpoint {
    scheme: String,
    domain: String,
    base_path: String,
}

impl Endpoint {
    pub(crate) fn new(
        scheme: Option<String>,
        domain: Option<String>,
        base_path: Option<String>,
    ) -> Self {
        Self {
            scheme: or_default(scheme, DEFAULT_SCHEME),
            domain: or_default(domain, DEFAULT_DOMAIN),
            base_path: or_default(base_path, DEFAULT_BASE_PATH)
                .trim_matches('/')
                .to_owned(),
        }
    }

    pub(crate) fn url(&self, method: Method) -> Result<Url, Error> {
        let s = if self.base_path.is_empty() {
            format!("{}://{}/{}", self.scheme, self.domain, method.as_str())
        } else {
            format!(
                "{}://{}/{}/{}",
                self.scheme,
                self.domain,
                self.base_path,
                method.as_str()
            )
        };
        Ok(Url::parse(&s)?)
    }
}

fn or_default(s: Option<String>, default: &str) -> String {
    s.filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// 每个请求都需要带上folderId
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WithFolder<'a, T: Serialize> {
    pub(crate) folder_id: &'a str,
    #[serde(flatten)]
    pub(crate) params: &'a T,
}

/// 每个接口的请求类型：对应的method、响应类型和发送前的检查
pub(crate) trait Operation: Serialize {
    const METHOD: Method;
    type Response: DeserializeOwned;

    fn check(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl Operation for DetectLanguageRequest {
    const METHOD: Method = Method::Detect;
    type Response = DetectLanguageResponse;

    fn check(&self) -> Result<(), Error> {
        check_detect_request(self)
    }
}

impl Operation for ListLanguagesRequest {
    const METHOD: Method = Method::Languages;
    type Response = ListLanguagesResponse;
}

impl Operation for TranslateRequest {
    const METHOD: Method = Method::Translate;
    type Response = TranslateResponse;

    fn check(&self) -> Result<(), Error> {
        check_translate_request(self)
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn check_detect_request(req: &DetectLanguageRequest) -> Result<(), Error> {
    if char_len(&req.text) > DETECT_TEXT_MAX_CHARS {
        return Err(Error::InvalidRequest(format!(
            "text is longer than {DETECT_TEXT_MAX_CHARS} characters"
        )));
    }
    if req.language_code_hints.len() > HINTS_MAX_COUNT {
        return Err(Error::InvalidRequest(format!(
            "at most {HINTS_MAX_COUNT} language code hints are allowed"
        )));
    }
    Ok(())
}

pub(crate) fn check_translate_request(req: &TranslateRequest) -> Result<(), Error> {
    if req.target_language_code.is_empty() {
        return Err(Error::InvalidRequest(
            "target language code is required".to_owned(),
        ));
    }

    if req.texts.is_empty() {
        return Err(Error::InvalidRequest(
            "at least one text is required".to_owned(),
        ));
    }
    let total: usize = req.texts.iter().map(|t| char_len(t)).sum();
    if total > TEXTS_MAX_TOTAL_CHARS {
        return Err(Error::InvalidRequest(format!(
            "texts are {total} characters in total, the limit is {TEXTS_MAX_TOTAL_CHARS}"
        )));
    }

    if let Some(model) = &req.model {
        if char_len(model) > MODEL_MAX_CHARS {
            return Err(Error::InvalidRequest(format!(
                "model is longer than {MODEL_MAX_CHARS} characters"
            )));
        }
    }

    if let Some(glossary) = &req.glossary_config {
        check_glossary(glossary)?;
        if req.source_language_code.as_deref().unwrap_or_default().is_empty() {
            return Err(Error::InvalidRequest(
                "source language code is required when a glossary is used".to_owned(),
            ));
        }
    }
    Ok(())
}

fn check_glossary(glossary: &GlossaryConfig) -> Result<(), Error> {
    let pairs = glossary.pairs();
    if pairs.is_empty() || pairs.len() > GLOSSARY_MAX_PAIRS {
        return Err(Error::InvalidRequest(format!(
            "glossary must contain 1-{GLOSSARY_MAX_PAIRS} pairs, got {}",
            pairs.len()
        )));
    }
    let source: usize = pairs.iter().map(|p| char_len(&p.source_text)).sum();
    let translated: usize = pairs.iter().map(|p| char_len(&p.translated_text)).sum();
    if source > GLOSSARY_MAX_TOTAL_CHARS || translated > GLOSSARY_MAX_TOTAL_CHARS {
        return Err(Error::InvalidRequest(format!(
            "glossary texts are limited to {GLOSSARY_MAX_TOTAL_CHARS} characters per side"
        )));
    }
    Ok(())
}
