//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform wrapper for every API response, success or failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    fn empty(success: bool) -> Self {
        Envelope {
            success,
            data: None,
            count: None,
            message: None,
            error: None,
        }
    }

    pub fn ok(data: T) -> Self {
        Envelope {
            data: Some(data),
            ..Self::empty(true)
        }
    }

    pub fn ok_with_count(data: T, count: i64) -> Self {
        Envelope {
            count: Some(count),
            ..Self::ok(data)
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Envelope {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    pub fn failure(error: impl Into<String>, message: Option<String>) -> Self {
        Envelope {
            error: Some(error.into()),
            message,
            ..Self::empty(false)
        }
    }
}

impl Envelope<()> {
    /// Success carrying only a message (bulk delete).
    pub fn message(message: impl Into<String>) -> Self {
        Envelope {
            message: Some(message.into()),
            ..Self::empty(true)
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBody {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub products_count: i64,
}

/// `data` payload of `GET /api/next-id`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextId {
    pub next_id: i64,
}

pub fn success_ok<T: Serialize>(body: Envelope<T>) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(body))
}

pub fn success_created<T: Serialize>(body: Envelope<T>) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, Json(body))
}
