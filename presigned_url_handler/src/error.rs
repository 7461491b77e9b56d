use lambda_http::http::StatusCode;
use thiserror::Error;

use crate::model::ErrorBody;

/// Every way issuing an upload url can fail
#[derive(Debug, Error)]
pub enum UploadUrlErr {
    #[error("Missing filename or contentType")]
    MissingField,
    #[error("Error generating URL")]
    Internal(#[source] anyhow::Error),
}

impl UploadUrlErr {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UploadUrlErr::MissingField => StatusCode::BAD_REQUEST,
            UploadUrlErr::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            UploadUrlErr::MissingField => ErrorBody {
                message: self.to_string(),
                error: None,
            },
            UploadUrlErr::Internal(e) => ErrorBody {
                message: self.to_string(),
                error: Some(format!("{e:#}")),
            },
        }
    }
}

impl From<anyhow::Error> for UploadUrlErr {
    fn from(e: anyhow::Error) -> Self {
        UploadUrlErr::Internal(e)
    }
}
