use anyhow::Context;
use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use std::time::Duration;

/// Generate a URL for a presigned PUT request.
#[tracing::instrument(skip(client))]
pub(crate) async fn put_presigned_url(
    client: &Client,
    bucket: &str,
    key: &str,
    content_type: &str,
    expires_in: Duration,
) -> anyhow::Result<String> {
    let presigning_config =
        PresigningConfig::expires_in(expires_in).context("invalid presigned url expiry")?;

    let presigned_request = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .presigned(presigning_config)
        .await
        .context(format!("could not presign put of {key} into bucket {bucket}"))?;

    Ok(presigned_request.uri().to_string())
}
