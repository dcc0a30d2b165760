use super::utils::{Endpoint, Method, Operation, WithFolder};
use super::{ClientConfig, Error};
use crate::credentials::Credentials;
use reqwest::StatusCode;
use reqwest::header::HeaderValue;
use serde::Serialize;
use tracing::debug;
use url::Url;
use yacloud_sdk_common::helper::{into_api_result, parse_json};

const LOG_TARGET: &str = "yacloud_sdk::translate";

/// 一次请求需要的全部内容，http的发送由async/blocking client各自完成
pub(crate) struct PreparedRequest {
    pub(crate) url: Url,
    pub(crate) body: String,
    pub(crate) authorization: Option<HeaderValue>,
}

/// async和blocking client共用的部分：拼url、添加folderId、认证头、解析错误
#[derive(Clone, Debug)]
pub(crate) struct RestApi {
    pub(crate) folder_id: String,
    pub(crate) credentials: Credentials,
    pub(crate) endpoint: Endpoint,
}

impl RestApi {
    pub(crate) fn new(
        folder_id: String,
        api_key: Option<String>,
        iam_token: Option<String>,
        domain: Option<String>,
        base_path: Option<String>,
        scheme: Option<String>,
    ) -> Self {
        Self {
            folder_id,
            credentials: Credentials::new(api_key, iam_token),
            endpoint: Endpoint::new(scheme, domain, base_path),
        }
    }

    pub(crate) fn from_config(conf: &ClientConfig) -> Self {
        let conf = conf.clone();
        Self::new(
            conf.folder_id,
            conf.api_key,
            conf.iam_token,
            conf.domain,
            conf.base_path,
            conf.scheme,
        )
    }

    pub(crate) fn prepare<T: Serialize>(
        &self,
        method: Method,
        params: &T,
    ) -> Result<PreparedRequest, Error> {
        let url = self.endpoint.url(method)?;
        debug!(target: LOG_TARGET, %url, "yacloud translate request");

        let body = serde_json::to_string(&WithFolder {
            folder_id: &self.folder_id,
            params,
        })?;
        debug!(target: LOG_TARGET, %body, "yacloud translate request body");

        let authorization = match self.credentials.authorization() {
            Some(s) => {
                let mut val = HeaderValue::from_str(&s)
                    .map_err(|e| Error::Config(format!("invalid credentials: {e}")))?;
                val.set_sensitive(true);
                Some(val)
            }
            None => None,
        };

        Ok(PreparedRequest {
            url,
            body,
            authorization,
        })
    }

    /// 发送前的检查，不通过时不发请求
    pub(crate) fn check<O: Operation>(&self, req: &O) -> Result<(), Error> {
        req.check()
    }

    pub(crate) fn decode<O: Operation>(&self, body: &str) -> Result<O::Response, Error> {
        Ok(parse_json(body)?)
    }

    pub(crate) fn finish(&self, status: StatusCode, body: String) -> Result<String, Error> {
        debug!(target: LOG_TARGET, %status, %body, "yacloud translate response");
        Ok(into_api_result(status, body)?)
    }
}
