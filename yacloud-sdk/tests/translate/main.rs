#![cfg(feature = "translate")]



use mock_server::{MockServer, dropping_host};
use serde::Deserialize;
use yacloud_sdk::translate::*;

const FOLDER_ID: &str = "b1gtestfolder";

pub(crate) fn no_proxy_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

fn mock_client(server: &MockServer) -> Client {
    Client::builder()
        .folder_id(FOLDER_ID)
        .api_key("test-key")
        .scheme("http")
        .domain(server.host())
        .http_client(no_proxy_client())
        .build()
}

#[tokio::test]
async fn translate_keeps_every_translation() {
    let server = MockServer::start(
        200,
        r#"{"translations":[
            {"text":"Hello","detectedLanguageCode":"ru"},
            {"text":"World","detectedLanguageCode":"ru"},
            {"text":"<b>cat</b>","detectedLanguageCode":"uk"}
        ]}"#,
    );
    let client = mock_client(&server);
    let req = TranslateRequest::builder()
        .texts(["Привет", "Мир", "<b>кіт</b>"])
        .target_language_code("en")
        .format(Format::Html)
        .build();

    let resp = client.translate(&req).await.unwrap();
    assert_eq!(
        resp.translations,
        vec![
            TranslatedText {
                text: "Hello".into(),
                detected_language_code: "ru".into()
            },
            TranslatedText {
                text: "World".into(),
                detected_language_code: "ru".into()
            },
            TranslatedText {
                text: "<b>cat</b>".into(),
                detected_language_code: "uk".into()
            },
        ]
    );

    let captured = server.captured();
    assert_eq!(captured.method, "POST");
    assert_eq!(captured.path, "/translate/v2/translate");
    assert_eq!(captured.header("content-type"), Some("application/json"));
    assert_eq!(
        captured.json(),
        serde_json::json!({
            "folderId": FOLDER_ID,
            "texts": ["Привет", "Мир", "<b>кіт</b>"],
            "targetLanguageCode": "en",
            "format": "HTML"
        })
    );
}

#[tokio::test]
async fn non_200_returns_api_error() {
    let server = MockServer::start(400, r#"{"code":7,"message":"bad folder"}"#);
    let client = mock_client(&server);
    let req = TranslateRequest::builder()
        .target_language_code("en")
        .text("hi")
        .build();

    let err = client.translate(&req).await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains('7'), "{msg}");
    assert!(msg.contains("bad folder"), "{msg}");
    assert!(matches!(err, Error::RequestAPIFailed { code: 7, .. }));
}

#[tokio::test]
async fn non_envelope_error_keeps_body() {
    let server = MockServer::start(503, "upstream unavailable");
    let client = mock_client(&server);

    let err = client
        .list_languages(&ListLanguagesRequest::default())
        .await
        .unwrap_err();
    match err {
        Error::UnexpectedStatus { status, body } => {
            assert!(status.contains("503"));
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_json_error() {
    let server = MockServer::start(200, r#"{"languageCode": 42"#);
    let client = mock_client(&server);
    let req = DetectLanguageRequest::builder().text("hi").build();

    let err = client.detect_language(&req).await.unwrap_err();
    assert!(matches!(err, Error::Json(_)), "{err:?}");
}

#[tokio::test]
async fn api_key_wins_over_iam_token() {
    let server = MockServer::start(200, r#"{"languages":[]}"#);
    let client = Client::builder()
        .folder_id(FOLDER_ID)
        .api_key("the-key")
        .iam_token("the-token")
        .scheme("http")
        .domain(server.host())
        .http_client(no_proxy_client())
        .build();

    client
        .list_languages(&ListLanguagesRequest::default())
        .await
        .unwrap();
    let captured = server.captured();
    assert_eq!(captured.header("authorization"), Some("Api-Key the-key"));
}

#[tokio::test]
async fn iam_token_is_sent_as_bearer() {
    let server = MockServer::start(200, r#"{"languages":[]}"#);
    let client = Client::builder()
        .folder_id(FOLDER_ID)
        .iam_token("t1.token")
        .scheme("http")
        .domain(server.host())
        .http_client(no_proxy_client())
        .build();

    client
        .list_languages(&ListLanguagesRequest::default())
        .await
        .unwrap();
    assert_eq!(
        server.captured().header("authorization"),
        Some("Bearer t1.token")
    );
}

#[tokio::test]
async fn no_credentials_no_authorization_header() {
    let server = MockServer::start(200, r#"{"languages":[]}"#);
    let client = Client::builder()
        .folder_id(FOLDER_ID)
        .scheme("http")
        .domain(server.host())
        .http_client(no_proxy_client())
        .build();

    client
        .list_languages(&ListLanguagesRequest::default())
        .await
        .unwrap();
    assert_eq!(server.captured().header("authorization"), None);
}

#[tokio::test]
async fn list_languages_sends_folder_id() {
    let server = MockServer::start(
        200,
        r#"{"languages":[{"code":"en","name":"English"},{"code":"ru","name":"Russian"},{"code":"kk"}]}"#,
    );
    let client = mock_client(&server);

    let resp = client
        .list_languages(&ListLanguagesRequest::default())
        .await
        .unwrap();
    let codes: Vec<_> = resp.languages.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, ["en", "ru", "kk"]);
    assert_eq!(resp.languages[0].name, "English");
    assert_eq!(resp.languages[2].name, "");

    let captured = server.captured();
    assert_eq!(captured.path, "/translate/v2/languages");
    assert_eq!(captured.json(), serde_json::json!({"folderId": FOLDER_ID}));
}

#[tokio::test]
async fn detect_language_sends_hints() {
    let server = MockServer::start(200, r#"{"languageCode":"ru"}"#);
    let client = mock_client(&server);
    let req = DetectLanguageRequest::builder()
        .hints(["ru", "uk"])
        .text("Привет")
        .build();

    let resp = client.detect_language(&req).await.unwrap();
    assert_eq!(resp.language_code, "ru");

    let captured = server.captured();
    assert_eq!(captured.path, "/translate/v2/detect");
    assert_eq!(
        captured.json(),
        serde_json::json!({
            "folderId": FOLDER_ID,
            "text": "Привет",
            "languageCodeHints": ["ru", "uk"]
        })
    );
}

#[tokio::test]
async fn long_language_codes_reach_the_server() {
    let server = MockServer::start(
        200,
        r#"{"translations":[{"text":"olá","detectedLanguageCode":"en"}]}"#,
    );
    let client = mock_client(&server);
    let req = TranslateRequest::builder()
        .target_language_code("pt-BR")
        .text("hello")
        .build();

    let resp = client.translate(&req).await.unwrap();
    assert_eq!(resp.translations[0].text, "olá");
    assert_eq!(server.captured().json()["targetLanguageCode"], "pt-BR");

    let server = MockServer::start(200, r#"{"languageCode":"kazlat"}"#);
    let client = mock_client(&server);
    let req = DetectLanguageRequest::builder()
        .hint("kazlat")
        .text("Salem")
        .build();
    let resp = client.detect_language(&req).await.unwrap();
    assert_eq!(resp.language_code, "kazlat");
    assert_eq!(
        server.captured().json()["languageCodeHints"],
        serde_json::json!(["kazlat"])
    );
}

#[tokio::test]
async fn api_error_without_message() {
    let server = MockServer::start(400, r#"{"code":3}"#);
    let client = mock_client(&server);

    let err = client
        .list_languages(&ListLanguagesRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RequestAPIFailed { code: 3, .. }), "{err:?}");
}

#[tokio::test]
async fn base_path_override_changes_url() {
    let server = MockServer::start(200, r#"{"languageCode":"en"}"#);
    let client = Client::builder()
        .folder_id(FOLDER_ID)
        .scheme("http")
        .domain(server.host())
        .base_path("/proxy/translate/v9/")
        .http_client(no_proxy_client())
        .build();

    client
        .detect_language(&DetectLanguageRequest::builder().text("hi").build())
        .await
        .unwrap();
    assert_eq!(server.captured().path, "/proxy/translate/v9/detect");
}

#[tokio::test]
async fn glossary_survives_the_wire() {
    let server = MockServer::start_with(|req| {
        // 把收到的术语表原样作为译文返回
        let echoed: TranslateRequest = serde_json::from_str(&req.body).unwrap();
        let pair = &echoed.glossary_config.unwrap().glossary_data.glossary_pairs[0];
        let body = serde_json::json!({"translations": [
            {"text": format!("{}|{}|{}", pair.source_text, pair.translated_text, pair.exact),
             "detectedLanguageCode": "ru"}
        ]});
        (200, body.to_string())
    });
    let client = mock_client(&server);
    let glossary = GlossaryConfig::from_pairs([GlossaryPair::new("ёж", "hedgehog").exact()]);
    let req = TranslateRequest::builder()
        .source_language_code("ru")
        .target_language_code("en")
        .text("ёж")
        .glossary_config(glossary.clone())
        .speller(true)
        .build();

    let resp = client.translate(&req).await.unwrap();
    assert_eq!(resp.translations[0].text, "ёж|hedgehog|true");

    let captured = server.captured();
    let echoed: TranslateRequest = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(echoed.glossary_config, Some(glossary));
    assert!(echoed.speller);
    assert_eq!(echoed, req);
    assert_eq!(captured.json()["folderId"], FOLDER_ID);
}

#[tokio::test]
async fn invalid_request_is_rejected_locally() {
    // 没有启动server，校验失败时不应该发出请求
    let client = Client::builder()
        .folder_id(FOLDER_ID)
        .scheme("http")
        .domain(dropping_host())
        .http_client(no_proxy_client())
        .build();

    let no_texts = TranslateRequest::builder().target_language_code("en").build();
    let err = client.translate(&no_texts).await.unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)), "{err:?}");

    let long = DetectLanguageRequest::builder().text("a".repeat(1001)).build();
    let err = client.detect_language(&long).await.unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)), "{err:?}");
}

#[tokio::test]
async fn transport_failure_is_surfaced() {
    let client = Client::builder()
        .folder_id(FOLDER_ID)
        .scheme("http")
        .domain(dropping_host())
        .http_client(no_proxy_client())
        .build();

    let err = client
        .list_languages(&ListLanguagesRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Reqwest(_)), "{err:?}");
}

#[tokio::test]
async fn client_from_toml_config() {
    let server = MockServer::start(200, r#"{"languageCode":"en"}"#);
    let conf: ClientConfig = toml::from_str(&format!(
        r#"
        folder_id = "{FOLDER_ID}"
        iam_token = "t1.from-config"
        scheme = "http"
        domain = "{}"
        "#,
        server.host()
    ))
    .unwrap();
    let client = Client::from_config(&conf);
    assert_eq!(client.folder_id(), FOLDER_ID);

    // 测试需要关闭代理，所以用builder按同样的配置再建一个
    let client = Client::builder()
        .folder_id(conf.folder_id.clone())
        .maybe_iam_token(conf.iam_token.clone())
        .maybe_scheme(conf.scheme.clone())
        .maybe_domain(conf.domain.clone())
        .http_client(no_proxy_client())
        .build();
    client
        .detect_language(&DetectLanguageRequest::builder().text("hello").build())
        .await
        .unwrap();
    let captured = server.captured();
    assert_eq!(captured.header("authorization"), Some("Bearer t1.from-config"));
    assert_eq!(captured.json()["folderId"], FOLDER_ID);
}

#[test]
fn client_is_shareable_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
}

// region    --- live api
#[derive(Deserialize, Debug)]
pub struct YcConfig {
    pub folder_id: String,
    pub api_key: String,
}

impl YcConfig {
    pub fn get_conf() -> Self {
        let file_str = std::fs::read_to_string("tests/translate/config.toml").unwrap();
        toml::from_str(&file_str).unwrap()
    }
}

fn get_trans_client() -> Client {
    let conf = YcConfig::get_conf();
    Client::builder()
        .folder_id(conf.folder_id)
        .api_key(conf.api_key)
        .build()
}

#[tokio::test]
#[ignore]
async fn translate_test() {
    let client = get_trans_client();
    let req = TranslateRequest::builder()
        .texts(["test first line.", "test second line."])
        .target_language_code("ru")
        .build();
    match client.translate(&req).await {
        Ok(s) => println!("[success] res:\n{:#?}", s),
        Err(e) => println!("[error] {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn list_languages_test() {
    let client = get_trans_client();
    match client.list_languages(&ListLanguagesRequest::default()).await {
        Ok(s) => println!("[success] res:\n{:#?}", s),
        Err(e) => println!("[error] {:#?}", e),
    }
}

#[tokio::test]
#[ignore]
async fn detect_language_test() {
    let client = get_trans_client();
    let req = DetectLanguageRequest::builder().text("中文").build();
    match client.detect_language(&req).await {
        Ok(s) => println!("[success] res: {}", s.language_code),
        Err(e) => println!("[error] {:#?}", e),
    }
}
// endregion --- live api
