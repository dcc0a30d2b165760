//! 同步版本的client，接口和[`super::Client`]一致
//!
//! 内部使用`reqwest::blocking`，不能在async运行时中调用

use super::rest::RestApi;
use super::utils::{Method, Operation};
use super::{
    ClientConfig, DetectLanguageRequest, DetectLanguageResponse, Error, ListLanguagesRequest,
    ListLanguagesResponse, TranslateRequest, TranslateResponse,
};
use bon::bon;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

pub struct Client {
    api: RestApi,
    http_client: reqwest::blocking::Client,
}

#[bon]
impl Client {
    #[builder]
    pub fn new(
        #[builder(into)] folder_id: String,
        #[builder(into)] api_key: Option<String>,
        #[builder(into)] iam_token: Option<String>,
        #[builder(into)] domain: Option<String>,
        #[builder(into)] base_path: Option<String>,
        #[builder(into)] scheme: Option<String>,
        http_client: Option<reqwest::blocking::Client>,
    ) -> Self {
        Self {
            api: RestApi::new(folder_id, api_key, iam_token, domain, base_path, scheme),
            http_client: http_client.unwrap_or_default(),
        }
    }

    pub fn from_config(conf: &ClientConfig) -> Self {
        Self {
            api: RestApi::from_config(conf),
            http_client: reqwest::blocking::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::from_config(&ClientConfig::from_env()?))
    }

    pub fn folder_id(&self) -> &str {
        &self.api.folder_id
    }

    pub fn detect_language(
        &self,
        req: &DetectLanguageRequest,
    ) -> Result<DetectLanguageResponse, Error> {
        self.send(req)
    }

    pub fn list_languages(&self, req: &ListLanguagesRequest) -> Result<ListLanguagesResponse, Error> {
        self.send(req)
    }

    pub fn translate(&self, req: &TranslateRequest) -> Result<TranslateResponse, Error> {
        self.send(req)
    }

    fn send<O: Operation>(&self, req: &O) -> Result<O::Response, Error> {
        self.api.check(req)?;
        let body = self.call_rest_api(O::METHOD, req)?;
        self.api.decode::<O>(&body)
    }

    fn call_rest_api<T: Serialize>(&self, method: Method, params: &T) -> Result<String, Error> {
        let prepared = self.api.prepare(method, params)?;

        let mut req = self
            .http_client
            .post(prepared.url)
            .header(CONTENT_TYPE, "application/json")
            .body(prepared.body);
        if let Some(auth) = prepared.authorization {
            req = req.header(AUTHORIZATION, auth);
        }

        let resp = req.send()?;
        let status = resp.status();
        let body = resp.text()?;
        self.api.finish(status, body)
    }
}
