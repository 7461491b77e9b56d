use anyhow::Context;

/// The configuration parameters for the lambda, read once at cold start.
#[derive(Debug, Clone)]
pub struct Config {
    /// The bucket uploads are presigned for
    pub upload_bucket_name: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let upload_bucket_name = std::env::var("UPLOAD_BUCKET_NAME")
            .or_else(|_| std::env::var("BUCKET_NAME"))
            .context("UPLOAD_BUCKET_NAME must be provided")?;

        Ok(Config { upload_bucket_name })
    }
}
