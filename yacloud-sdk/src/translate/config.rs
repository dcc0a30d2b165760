use super::Error;
use serde::Deserialize;

pub const ENV_FOLDER_ID: &str = "YACLOUD_TRANSLATE_FOLDER_ID";
pub const ENV_API_KEY: &str = "YACLOUD_TRANSLATE_API_KEY";
pub const ENV_IAM_TOKEN: &str = "YACLOUD_TRANSLATE_IAM_TOKEN";
pub const ENV_DOMAIN: &str = "YACLOUD_TRANSLATE_DOMAIN";
pub const ENV_BASE_PATH: &str = "YACLOUD_TRANSLATE_BASE_PATH";

/// 可以从toml等配置文件反序列化，或者从环境变量读取
///
/// ```toml
/// folder_id = "b1g..."
/// api_key = "AQVN..."
/// ```
#[derive(Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub folder_id: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub iam_token: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub base_path: Option<String>,
    #[serde(default)]
    pub scheme: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let folder_id = get(ENV_FOLDER_ID)
            .ok_or_else(|| Error::Config(format!("environment variable {ENV_FOLDER_ID} is not set")))?;

        Ok(Self {
            folder_id,
            api_key: get(ENV_API_KEY),
            iam_token: get(ENV_IAM_TOKEN),
            domain: get(ENV_DOMAIN),
            base_path: get(ENV_BASE_PATH),
            scheme: None,
        })
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("folder_id", &self.folder_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("iam_token", &self.iam_token.as_ref().map(|_| "***"))
            .field("domain", &self.domain)
            .field("base_path", &self.base_path)
            .field("scheme", &self.scheme)
            .finish()
    }
}
