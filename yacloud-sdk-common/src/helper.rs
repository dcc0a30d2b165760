use crate::Error;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Yandex Cloud 的REST接口出错时统一返回的结构
///
/// ```json
/// {"code": 3, "message": "Text is too long", "details": [...]}
/// ```
#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// 只有200才算成功，其余状态码都按错误结构解析
///
/// 如果body不是错误结构，返回`Error::UnexpectedStatus`，保留原始body
pub fn into_api_result(status: StatusCode, body: String) -> Result<String, Error> {
    if status == StatusCode::OK {
        return Ok(body);
    }

    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(e) => Err(Error::RequestAPIFailed {
            code: e.code,
            message: e.message,
        }),
        Err(_) => Err(Error::UnexpectedStatus {
            status: status.to_string(),
            body,
        }),
    }
}

pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let data = serde_json::from_str(body)?;
    Ok(data)
}
