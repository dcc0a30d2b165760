#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("api error {code}: {message}")]
    RequestAPIFailed { code: i32, message: String },
    #[error("request failed with status {status}, body: {body}")]
    UnexpectedStatus { status: String, body: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
