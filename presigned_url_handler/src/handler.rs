use anyhow::Context;
use lambda_http::{
    Body, Error, Request, Response,
    http::{Method, StatusCode},
    tracing::{self},
};
use serde::Serialize;

use crate::{
    error::UploadUrlErr,
    model::{UploadCredential, UploadRequest, key::generate_object_key},
    service::s3::S3,
};

/// Attached to every response so browsers can call the lambda cross origin
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "*"),
    ("Access-Control-Allow-Methods", "OPTIONS,POST,GET"),
];

/// Handles an upload url request coming from api gateway
#[tracing::instrument(skip(s3_client, event), fields(method = %event.method()))]
pub async fn handler(s3_client: &S3, event: Request) -> Result<Response<Body>, Error> {
    if *event.method() == Method::OPTIONS {
        tracing::trace!("responding to cors preflight");
        return json_response(StatusCode::OK, &"CORS preflight success");
    }

    match issue_upload_url(s3_client, event.body().as_ref()).await {
        Ok(credential) => {
            tracing::info!(key=%credential.key, "issued upload url");
            json_response(StatusCode::OK, &credential)
        }
        Err(err) => {
            match &err {
                UploadUrlErr::MissingField => {
                    tracing::warn!("request is missing filename or contentType");
                }
                UploadUrlErr::Internal(e) => {
                    tracing::error!(error=?e, "unable to issue upload url");
                }
            }
            json_response(err.status_code(), &err.body())
        }
    }
}

/// Validates the request body and presigns an upload for a freshly generated key
#[tracing::instrument(skip_all)]
async fn issue_upload_url(s3_client: &S3, body: &[u8]) -> Result<UploadCredential, UploadUrlErr> {
    let request = UploadRequest::from_body(body).context("could not parse request body")?;

    tracing::info!(
        full_name=?request.full_name,
        email=?request.email,
        notes=?request.notes,
        "received upload request"
    );

    let (filename, content_type) = request
        .required_fields()
        .ok_or(UploadUrlErr::MissingField)?;

    let key = generate_object_key(filename);

    let upload_url = s3_client.put_presigned_url(&key, content_type).await?;

    Ok(UploadCredential { upload_url, key })
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(body)?;

    let builder = CORS_HEADERS
        .iter()
        .fold(Response::builder().status(status), |builder, (name, value)| {
            builder.header(*name, *value)
        });

    Ok(builder.body(Body::from(body))?)
}
