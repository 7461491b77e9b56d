use std::time::Duration;

mod presign;

/// Thin wrapper around the AWS S3 client
#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Creates a presigned url which allows a single PUT of `key` into `bucket`.
    /// The uploader must send the same `content_type` that was signed here.
    #[tracing::instrument(skip(self))]
    pub async fn put_presigned_url(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> anyhow::Result<String> {
        presign::put_presigned_url(&self.inner, bucket, key, content_type, expires_in).await
    }
}
