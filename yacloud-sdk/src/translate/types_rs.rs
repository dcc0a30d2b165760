use bon::Builder;
use serde::{Deserialize, Serialize};

// region    --- detect language
/// 检测文本语言
#[derive(Builder, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetectLanguageRequest {
    /// 优先考虑的语言，ISO 639-1格式（如`ru`），最多10个，每个最长3个字符
    // #[builder(field)]需要放在其它字段前面
    #[builder(field)]
    #[serde(default)]
    pub language_code_hints: Vec<String>,
    /// 最长1000个字符
    #[builder(into)]
    pub text: String,
}

impl<S: detect_language_request_builder::State> DetectLanguageRequestBuilder<S> {
    pub fn hint(mut self, code: impl Into<String>) -> Self {
        self.language_code_hints.push(code.into());
        self
    }

    pub fn hints<I, T>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.language_code_hints
            .extend(codes.into_iter().map(Into::into));
        self
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetectLanguageResponse {
    /// ISO 639-1格式，如`ru`
    #[serde(default)]
    pub language_code: String,
}
// endregion --- detect language

// region    --- list languages
/// 没有参数，folderId由client添加
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListLanguagesRequest {}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1格式，如`en`
    #[serde(default)]
    pub code: String,
    /// 如`English`
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListLanguagesResponse {
    #[serde(default)]
    pub languages: Vec<Language>,
}
// endregion --- list languages

// region    --- translate
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Format {
    /// 纯文本，服务端默认值
    #[default]
    PlainText,
    Html,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryPair {
    pub source_text: String,
    pub translated_text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exact: bool,
}

impl GlossaryPair {
    pub fn new(source_text: impl Into<String>, translated_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            translated_text: translated_text.into(),
            exact: false,
        }
    }

    /// 精确匹配，不做词形变化
    pub fn exact(mut self) -> Self {
        self.exact = true;
        self
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryData {
    /// 1-50个，源文本总长和译文总长各不超过10000个字符
    pub glossary_pairs: Vec<GlossaryPair>,
}

/// 目前只支持在请求里直接传术语表数据
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryConfig {
    pub glossary_data: GlossaryData,
}

impl GlossaryConfig {
    pub fn from_pairs(pairs: impl IntoIterator<Item = GlossaryPair>) -> Self {
        Self {
            glossary_data: GlossaryData {
                glossary_pairs: pairs.into_iter().collect(),
            },
        }
    }

    pub fn pairs(&self) -> &[GlossaryPair] {
        &self.glossary_data.glossary_pairs
    }
}

/// 翻译文本
///
/// 注意事项:
/// 1. `texts`至少一条，总长度不超过10000个字符
/// 2. 使用术语表时必须指定`source_language_code`
#[serde_with::skip_serializing_none]
#[derive(Builder, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[builder(field)]
    pub texts: Vec<String>,
    /// 不传则由服务端检测，最长3个字符
    #[builder(into)]
    pub source_language_code: Option<String>,
    /// 最长3个字符
    #[builder(into)]
    pub target_language_code: String,
    pub format: Option<Format>,
    /// 自定义模型，最长50个字符
    #[builder(into)]
    pub model: Option<String>,
    pub glossary_config: Option<GlossaryConfig>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub speller: bool,
}

impl<S: translate_request_builder::State> TranslateRequestBuilder<S> {
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.texts.push(text.into());
        self
    }

    pub fn texts<I, T>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.texts.extend(texts.into_iter().map(Into::into));
        self
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedText {
    #[serde(default)]
    pub text: String,
    /// 源文本的语言，指定了`source_language_code`时服务端可能不返回
    #[serde(default)]
    pub detected_language_code: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translations: Vec<TranslatedText>,
}
// endregion --- translate

#[test]
fn serialize_translate_request() {
    let req = TranslateRequest::builder()
        .target_language_code("en")
        .text("привет")
        .build();
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(
        v,
        serde_json::json!({"targetLanguageCode": "en", "texts": ["привет"]})
    );

    let req = TranslateRequest::builder()
        .texts(["a", "b"])
        .source_language_code("ru")
        .target_language_code("en")
        .format(Format::Html)
        .speller(true)
        .glossary_config(GlossaryConfig::from_pairs([
            GlossaryPair::new("кот", "cat").exact(),
            GlossaryPair::new("пёс", "dog"),
        ]))
        .build();
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "texts": ["a", "b"],
            "sourceLanguageCode": "ru",
            "targetLanguageCode": "en",
            "format": "HTML",
            "glossaryConfig": {"glossaryData": {"glossaryPairs": [
                {"sourceText": "кот", "translatedText": "cat", "exact": true},
                {"sourceText": "пёс", "translatedText": "dog"}
            ]}},
            "speller": true
        })
    );
}

#[test]
fn serialize_detect_request_always_sends_hints() {
    let req = DetectLanguageRequest::builder().text("hello").build();
    let v = serde_json::to_value(&req).unwrap();
    assert_eq!(
        v,
        serde_json::json!({"text": "hello", "languageCodeHints": []})
    );

    let req = DetectLanguageRequest::builder()
        .hint("en")
        .hints(vec!["ru".to_owned(), "kk".to_owned()])
        .text("hello")
        .build();
    assert_eq!(req.language_code_hints, ["en", "ru", "kk"]);
}

#[test]
fn deserialize_sparse_responses() {
    let resp: TranslateResponse =
        serde_json::from_str(r#"{"translations":[{"text":"Hello"}]}"#).unwrap();
    assert_eq!(resp.translations[0].text, "Hello");
    assert_eq!(resp.translations[0].detected_language_code, "");

    let resp: ListLanguagesResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.languages.is_empty());

    assert_eq!(
        serde_json::to_string(&Format::PlainText).unwrap(),
        r#""PLAIN_TEXT""#
    );
}
