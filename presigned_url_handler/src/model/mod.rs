use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod key;

/// The body of an upload url request.
/// Only `filename` and `content_type` are required, the rest is informational and only logged,
/// so it is kept as whatever json the client sent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub full_name: Option<Value>,
    pub email: Option<Value>,
    pub notes: Option<Value>,
}

impl UploadRequest {
    /// Parses a raw request body, which must be a json object
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }

    /// Returns the (filename, content_type) pair if both are present and non-empty
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let filename = self.filename.as_deref().filter(|s| !s.is_empty())?;
        let content_type = self.content_type.as_deref().filter(|s| !s.is_empty())?;
        Some((filename, content_type))
    }
}

/// A single use credential to upload one object
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadCredential {
    pub upload_url: String,
    pub key: String,
}

/// Body returned for any non 200 response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
