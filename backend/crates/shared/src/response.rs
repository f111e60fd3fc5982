//! Response Envelope
//!
//! Every response body, success or failure, has the shape
//! `{ "statusCode": u16, "data": T, "message": string | string[] }`.

use serde::Serialize;

use crate::i18n::MessageKey;

/// `message` of the envelope: a single text, or a list of field messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseMessage {
    Text(String),
    List(Vec<String>),
}

impl From<MessageKey> for ResponseMessage {
    fn from(key: MessageKey) -> Self {
        ResponseMessage::Text(key.text().to_string())
    }
}

/// レスポンスエンベロープ
///
/// ## Examples
/// ```rust
/// use kernel::i18n::MessageKey;
/// use kernel::response::ApiResponse;
///
/// let res = ApiResponse::ok(vec![1, 2, 3], MessageKey::ListRetrieved);
/// assert_eq!(res.status_code, 200);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: ResponseMessage,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK
    pub fn ok(data: T, key: MessageKey) -> Self {
        Self {
            status_code: 200,
            data,
            message: key.into(),
        }
    }

    /// 201 Created
    pub fn created(data: T, key: MessageKey) -> Self {
        Self {
            status_code: 201,
            data,
            message: key.into(),
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Error envelope with an empty `data` object
    pub fn error(status_code: u16, message: ResponseMessage) -> Self {
        Self {
            status_code,
            data: serde_json::Value::Object(serde_json::Map::new()),
            message,
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
