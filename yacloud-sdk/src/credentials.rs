//! Credentials definitions.
//!
//! Yandex Cloud的REST接口支持两种认证方式：
//! - API key: `Authorization: Api-Key <key>`
//! - IAM token: `Authorization: Bearer <token>`
//!
//! 两者都设置的时候使用API key。

use std::fmt;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub iam_token: Option<String>,
}

impl Credentials {
    pub fn new(api_key: Option<String>, iam_token: Option<String>) -> Self {
        Self { api_key, iam_token }
    }

    pub fn api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            iam_token: None,
        }
    }

    pub fn iam_token(token: impl Into<String>) -> Self {
        Self {
            api_key: None,
            iam_token: Some(token.into()),
        }
    }

    /// `authorization`请求头的值，空字符串视为未设置
    pub fn authorization(&self) -> Option<String> {
        if let Some(key) = non_empty(&self.api_key) {
            Some(format!("Api-Key {key}"))
        } else {
            non_empty(&self.iam_token).map(|token| format!("Bearer {token}"))
        }
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |s: &Option<String>| s.as_ref().map(|_| "***");
        f.debug_struct("Credentials")
            .field("api_key", &mask(&self.api_key))
            .field("iam_token", &mask(&self.iam_token))
            .finish()
    }
}
