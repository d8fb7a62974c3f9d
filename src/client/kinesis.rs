use super::{Client, DescribeStreamOutput, Shard, SplitRequest};
use crate::config::CredentialsSource;

use anyhow::Result;
use async_trait::async_trait;
use aws_config::ConfigLoader;
use aws_sdk_kinesis::{
    config::{Credentials, Region},
    Client as SdkClient,
};

const STATIC_PROVIDER_NAME: &str = "kinesis-splitter";

#[derive(Debug, Clone)]
pub struct KinesisClient {
    client: SdkClient,
}

#[async_trait]
impl Client for KinesisClient {
    // Only the first page of shards is read.
    async fn describe_stream(&self, stream_name: &str) -> Result<DescribeStreamOutput> {
        self.client
            .describe_stream()
            .stream_name(stream_name)
            .send()
            .await?
            .stream_description
            .ok_or(anyhow::anyhow!(
                "`stream_description` is None in `DescribeStreamOutput`"
            ))
            .map(|description| {
                let shards = description.shards.into_iter().map(Shard::from).collect();
                DescribeStreamOutput { shards }
            })
    }

    async fn split_shard(&self, request: SplitRequest) -> Result<()> {
        let SplitRequest {
            stream_name,
            shard_to_split,
            new_starting_hash_key,
        } = request;

        self.client
            .split_shard()
            .stream_name(stream_name)
            .shard_to_split(shard_to_split)
            .new_starting_hash_key(new_starting_hash_key)
            .send()
            .await
            .map(|_| ())
            .map_err(anyhow::Error::from)
    }
}

impl KinesisClient {
    pub fn builder() -> KinesisClientBuilder {
        KinesisClientBuilder::new()
    }
}

pub struct KinesisClientBuilder {
    loader: ConfigLoader,
}

impl KinesisClientBuilder {
    pub fn new() -> Self {
        Self {
            loader: aws_config::from_env(),
        }
    }

    pub fn credentials(self, source: &CredentialsSource) -> Self {
        match source {
            CredentialsSource::Static {
                access_key,
                secret_key,
            } => {
                let credentials = Credentials::new(
                    access_key,
                    secret_key,
                    None,
                    None,
                    STATIC_PROVIDER_NAME,
                );
                Self {
                    loader: self.loader.credentials_provider(credentials),
                }
            }
            CredentialsSource::DefaultChain => self,
        }
    }

    pub fn region(self, region: Option<String>) -> Self {
        match region {
            Some(region) => Self {
                loader: self.loader.region(Region::new(region)),
            },
            None => self,
        }
    }

    pub fn endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => Self {
                loader: self.loader.endpoint_url(url),
            },
            None => self,
        }
    }

    pub async fn build(self) -> KinesisClient {
        let config = self.loader.load().await;

        KinesisClient {
            client: SdkClient::new(&config),
        }
    }
}

impl Default for KinesisClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
