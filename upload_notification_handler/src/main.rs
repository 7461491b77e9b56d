use anyhow::Context;
use aws_lambda_events::s3::S3Event;
use lambda_runtime::{
    Error, LambdaEvent, run, service_fn,
    tracing::{self},
};
use upload_entrypoint::UploadEntrypoint;

mod config;
mod handler;
mod model;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    UploadEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = config::Config::from_env().context("failed to load config")?;
    tracing::trace!(
        bucket=%config.upload_bucket,
        topic_arn=%config.sns_topic_arn,
        "initialized config"
    );

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let sns_client = service::sns::SNS::new(
        sns_client::SNS::new(aws_sdk_sns::Client::new(&aws_config)),
        &config.sns_topic_arn,
    );
    tracing::trace!("initialized sns client");

    let shared_sns_client = &sns_client;
    let expected_bucket = config.upload_bucket.as_str();

    let func = service_fn(move |event: LambdaEvent<S3Event>| async move {
        handler::handler(shared_sns_client, expected_bucket, event).await
    });

    run(func).await
}
