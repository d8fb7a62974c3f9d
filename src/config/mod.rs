use crate::error::{Error, Result};
use crate::ENV_KINESIS_ENDPOINT_URL;

use std::{env, time::Duration};

mod args;
mod credentials;

pub use args::Args;
pub use credentials::CredentialsSource;

#[derive(Debug, Clone)]
pub struct Config {
    stream_name: String,
    credentials: CredentialsSource,
    target_shard_id: Option<String>,
    wait: Duration,
    region: Option<String>,
    endpoint_url: Option<String>,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        let Args {
            stream_name,
            access_key,
            secret_key,
            shard_id,
            wait,
            shard,
            region,
            endpoint_url,
        } = args;

        if stream_name.is_empty() {
            return Err(Error::usage("Invalid stream name provided."));
        }

        if access_key.is_some() && secret_key.is_none() {
            return Err(Error::usage(
                "Both an access key and a secret key must be provided.",
            ));
        }

        let target_shard_id = shard_id.or(shard);
        if target_shard_id.as_deref() == Some("") {
            return Err(Error::usage("Invalid shard id provided."));
        }

        let credentials = CredentialsSource::new(access_key.as_deref(), secret_key.as_deref());
        let endpoint_url = endpoint_url.or_else(|| env::var(ENV_KINESIS_ENDPOINT_URL).ok());

        Ok(Self {
            stream_name,
            credentials,
            target_shard_id,
            wait: Duration::from_secs(wait),
            region,
            endpoint_url,
        })
    }

    pub fn stream_name(&self) -> &str {
        self.stream_name.as_str()
    }

    pub fn credentials(&self) -> &CredentialsSource {
        &self.credentials
    }

    pub fn target_shard_id(&self) -> Option<&str> {
        self.target_shard_id.as_deref()
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn region(&self) -> Option<String> {
        self.region.clone()
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }
}
