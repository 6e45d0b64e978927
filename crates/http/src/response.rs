//! `{status, message, data}` envelope shared by every resource route.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Outcome marker carried in the `status` field
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

/// Wire shape of every envelope response
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Successful envelope response paired with its status code
#[derive(Debug)]
pub struct ApiResponse<T = ()> {
    code: StatusCode,
    body: Envelope<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 response carrying `data`
    pub fn ok(data: T) -> Self {
        Self {
            code: StatusCode::OK,
            body: Envelope {
                status: Status::Success,
                message: None,
                data: Some(data),
            },
        }
    }

    /// 201 response carrying `data`
    pub fn created(data: T) -> Self {
        Self {
            code: StatusCode::CREATED,
            ..Self::ok(data)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.body.message = Some(message.into());
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.code
    }
}

impl ApiResponse<()> {
    /// 200 response with a message and no data
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::OK,
            body: Envelope {
                status: Status::Success,
                message: Some(message.into()),
                data: None,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self.body)).into_response()
    }
}
