//! 机器翻译
//!
//! <a href="https://yandex.cloud/en/docs/translate/api-ref/" target="_blank">api文档地址</a>

use bon::bon;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

mod error;
pub use error::Error;

mod config;
pub use config::*;

mod types_rs;
pub use types_rs::*;

mod rest;
mod utils;

#[cfg(feature = "blocking")]
pub mod blocking;

use rest::RestApi;
use utils::{Method, Operation};

/// async client
///
/// 不做重试；超时、代理等通过传入自己构建的`reqwest::Client`设置
pub struct Client {
    api: RestApi,
    http_client: reqwest::Client,
}

#[bon]
impl Client {
    #[builder]
    pub fn new(
        #[builder(into)] folder_id: String,
        // 和iam_token同时设置时使用api_key
        #[builder(into)] api_key: Option<String>,
        #[builder(into)] iam_token: Option<String>,
        #[builder(into)] domain: Option<String>,
        #[builder(into)] base_path: Option<String>,
        // 本地调试用，默认https
        #[builder(into)] scheme: Option<String>,
        http_client: Option<reqwest::Client>,
    ) -> Self {
        Self {
            api: RestApi::new(folder_id, api_key, iam_token, domain, base_path, scheme),
            http_client: http_client.unwrap_or_default(),
        }
    }

    pub fn from_config(conf: &ClientConfig) -> Self {
        Self {
            api: RestApi::from_config(conf),
            http_client: reqwest::Client::new(),
        }
    }

    /// 读取`YACLOUD_TRANSLATE_*`环境变量
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::from_config(&ClientConfig::from_env()?))
    }

    pub fn folder_id(&self) -> &str {
        &self.api.folder_id
    }

    /// 检测文本的语言
    pub async fn detect_language(
        &self,
        req: &DetectLanguageRequest,
    ) -> Result<DetectLanguageResponse, Error> {
        self.send(req).await
    }

    /// 支持的语言列表
    pub async fn list_languages(
        &self,
        req: &ListLanguagesRequest,
    ) -> Result<ListLanguagesResponse, Error> {
        self.send(req).await
    }

    /// 翻译，每条`texts`对应一条`translations`
    pub async fn translate(&self, req: &TranslateRequest) -> Result<TranslateResponse, Error> {
        self.send(req).await
    }

    async fn send<O: Operation>(&self, req: &O) -> Result<O::Response, Error> {
        self.api.check(req)?;
        let body = self.call_rest_api(O::METHOD, req).await?;
        self.api.decode::<O>(&body)
    }

    async fn call_rest_api<T: Serialize>(&self, method: Method, params: &T) -> Result<String, Error> {
        let prepared = self.api.prepare(method, params)?;

        let mut req = self
            .http_client
            .post(prepared.url)
            .header(CONTENT_TYPE, "application/json")
            .body(prepared.body);
        if let Some(auth) = prepared.authorization {
            req = req.header(AUTHORIZATION, auth);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        self.api.finish(status, body)
    }
}
