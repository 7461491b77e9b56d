use anyhow::Context;
use lambda_http::{Error, Request, run, service_fn, tracing};
use upload_entrypoint::UploadEntrypoint;

mod config;
mod error;
mod handler;
mod model;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    UploadEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = config::Config::from_env().context("failed to load config")?;
    tracing::trace!(bucket=%config.upload_bucket_name, "initialized config");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let s3_client = service::s3::S3::new(
        s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config)),
        &config.upload_bucket_name,
    );
    tracing::trace!("initialized s3 client");

    let shared_s3_client = &s3_client;

    let func = service_fn(move |event: Request| async move {
        handler::handler(shared_s3_client, event).await
    });

    run(func).await
}
