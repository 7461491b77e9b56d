use anyhow::Result;
use lambda_http::tracing;
#[allow(unused_imports)]
use mockall::automock;
use std::time::Duration;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

/// How long an issued upload url stays valid
pub const UPLOAD_URL_EXPIRY_SECONDS: u64 = 300;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Shared S3 client
    inner: s3_client::S3,
    /// Bucket uploads are presigned for
    bucket: String,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3_client::S3, bucket: &str) -> Self {
        Self {
            inner,
            bucket: bucket.to_string(),
        }
    }

    /// Presigns a single PUT of `key` with the given content type
    #[tracing::instrument(skip(self))]
    pub async fn put_presigned_url(&self, key: &str, content_type: &str) -> Result<String> {
        self.inner
            .put_presigned_url(
                &self.bucket,
                key,
                content_type,
                Duration::from_secs(UPLOAD_URL_EXPIRY_SECONDS),
            )
            .await
    }
}
