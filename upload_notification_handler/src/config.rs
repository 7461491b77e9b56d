use anyhow::Context;

/// The configuration parameters for the lambda, read once at cold start.
#[derive(Debug, Clone)]
pub struct Config {
    /// The only bucket uploads are accepted from
    pub upload_bucket: String,
    /// The topic upload notifications are published to
    pub sns_topic_arn: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let upload_bucket =
            std::env::var("UPLOAD_BUCKET").context("UPLOAD_BUCKET must be provided")?;
        let sns_topic_arn =
            std::env::var("SNS_TOPIC_ARN").context("SNS_TOPIC_ARN must be provided")?;

        Ok(Config {
            upload_bucket,
            sns_topic_arn,
        })
    }
}
