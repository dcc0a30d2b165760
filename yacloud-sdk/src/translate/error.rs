#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("api error {code}: {message}")]
    RequestAPIFailed { code: i32, message: String },
    #[error("request failed with status {status}, body: {body}")]
    UnexpectedStatus { status: String, body: String },
    #[error("config error: {0}")]
    Config(String),
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl From<yacloud_sdk_common::Error> for Error {
    fn from(e: yacloud_sdk_common::Error) -> Self {
        use yacloud_sdk_common::Error as E;
        match e {
            E::RequestAPIFailed { code, message } => Error::RequestAPIFailed { code, message },
            E::UnexpectedStatus { status, body } => Error::UnexpectedStatus { status, body },
            E::Json(e) => Error::Json(e),
            E::Reqwest(e) => Error::Reqwest(e),
        }
    }
}
