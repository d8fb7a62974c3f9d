mod kinesis;
#[cfg(test)]
mod mock;

use crate::types::{Shard, SplitRequest};

use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct DescribeStreamOutput {
    pub shards: Vec<Shard>,
}

#[async_trait]
pub trait Client: Send + Sync {
    async fn describe_stream(&self, stream_name: &str) -> Result<DescribeStreamOutput>;
    async fn split_shard(&self, request: SplitRequest) -> Result<()>;
}

pub use kinesis::{KinesisClient, KinesisClientBuilder};
#[cfg(test)]
pub use mock::MockClient;
