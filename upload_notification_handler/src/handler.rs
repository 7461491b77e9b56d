use aws_lambda_events::s3::S3Event;
use chrono::{DateTime, Utc};
use lambda_runtime::{Error, LambdaEvent, tracing};

use crate::{
    model::{NotificationResponse, UploadNotification, decode_object_key, is_valid_file_type},
    service::sns::SNS,
};

/// Processes the s3 object created event.
/// Each record is checked and notified on independently. The reported response is the first
/// rejection, if any record was rejected, otherwise the response for the first record.
#[tracing::instrument(skip(sns_client, event))]
pub async fn handler(
    sns_client: &SNS,
    expected_bucket: &str,
    event: LambdaEvent<S3Event>,
) -> Result<NotificationResponse, Error> {
    tracing::trace!(
        record_count = event.payload.records.len(),
        "processing s3 records"
    );

    let mut responses = Vec::with_capacity(event.payload.records.len());

    for record in event.payload.records {
        let bucket = record.s3.bucket.name.unwrap_or_default();
        let key = decode_object_key(record.s3.object.key.as_deref().unwrap_or_default());

        let response = process_upload(sns_client, expected_bucket, &bucket, &key, Utc::now()).await;
        responses.push(response);
    }

    let response = match responses.iter().position(|r| !r.is_success()) {
        Some(rejected) => responses.swap_remove(rejected),
        None if !responses.is_empty() => responses.swap_remove(0),
        None => {
            tracing::warn!("event contained no records");
            NotificationResponse::no_records()
        }
    };

    Ok(response)
}

/// Validates a single uploaded object and publishes a notification for it.
/// A failed publish is logged and does not change the response.
#[tracing::instrument(skip(sns_client, expected_bucket, uploaded_at))]
async fn process_upload(
    sns_client: &SNS,
    expected_bucket: &str,
    bucket: &str,
    key: &str,
    uploaded_at: DateTime<Utc>,
) -> NotificationResponse {
    tracing::info!("new file uploaded to: s3://{bucket}/{key}");

    if bucket != expected_bucket {
        tracing::warn!(bucket, expected_bucket, "upload to unexpected bucket");
        return NotificationResponse::unauthorized_bucket(bucket);
    }

    if !is_valid_file_type(key) {
        tracing::warn!(key, "invalid file type");
        return NotificationResponse::unsupported_file_type(key);
    }

    let notification = UploadNotification::new(key, bucket, uploaded_at);
    tracing::info!(key, timestamp=%uploaded_at, "valid upload received");

    match sns_client
        .publish(notification.subject, &notification.message)
        .await
    {
        Ok(message_id) => {
            tracing::info!(message_id=?message_id, "sns notification sent successfully");
        }
        Err(e) => {
            tracing::error!(error=?e, "failed to send sns notification");
        }
    }

    NotificationResponse::processed(key)
}
