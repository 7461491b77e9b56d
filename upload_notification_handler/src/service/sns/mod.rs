use anyhow::Result;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockSNSClient as SNS;
#[cfg(not(test))]
pub use SNSClient as SNS;

#[derive(Clone, Debug)]
pub struct SNSClient {
    /// Shared SNS client
    inner: sns_client::SNS,
    /// Topic upload notifications go to
    topic_arn: String,
}

#[cfg_attr(test, automock)]
impl SNSClient {
    pub fn new(inner: sns_client::SNS, topic_arn: &str) -> Self {
        Self {
            inner,
            topic_arn: topic_arn.to_string(),
        }
    }

    /// Publishes the message to the upload notification topic
    #[tracing::instrument(skip(self, message))]
    pub async fn publish(&self, subject: &str, message: &str) -> Result<Option<String>> {
        self.inner.publish(&self.topic_arn, subject, message).await
    }
}
