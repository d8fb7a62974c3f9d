pub mod client;
pub mod config;
pub mod error;
mod splitter;
pub mod types;

use std::{future::Future, sync::Arc};

pub use client::{Client, KinesisClient};
pub use config::{Args, Config, CredentialsSource};
pub use error::{Error, Result};
pub use splitter::{ShardSplitter, SplitReport};

pub const ENV_KINESIS_ENDPOINT_URL: &str = "KINESIS_ENDPOINT_URL";

/// Builds a Kinesis client from `config` and splits the configured stream.
pub async fn run<F>(config: &Config, interrupt: F) -> Result<SplitReport>
where
    F: Future<Output = ()>,
{
    let client = KinesisClient::builder()
        .credentials(config.credentials())
        .region(config.region())
        .endpoint_url(config.endpoint_url())
        .build()
        .await;

    ShardSplitter::new(Arc::new(client), config.wait())
        .split(config.stream_name(), config.target_shard_id(), interrupt)
        .await
}
