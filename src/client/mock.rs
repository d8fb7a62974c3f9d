use super::{Client, DescribeStreamOutput, Shard, SplitRequest};

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Serves a fixed shard list and records every split request it receives.
/// When `fail_on` is set, the split of that shard id fails.
#[derive(Debug, Clone)]
pub struct MockClient {
    stream_name: String,
    shards: Vec<Shard>,
    fail_on: Option<String>,
    requests: Arc<Mutex<Vec<SplitRequest>>>,
}

impl MockClient {
    pub fn new<I>(stream_name: &str, shards: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str, &'static str)>,
    {
        Self {
            stream_name: stream_name.into(),
            shards: shards
                .into_iter()
                .map(|(id, start, end)| Shard::new(id, start, end))
                .collect(),
            fail_on: None,
            requests: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn fail_on(self, shard_id: &str) -> Self {
        Self {
            fail_on: Some(shard_id.into()),
            ..self
        }
    }

    pub fn requests(&self) -> Vec<SplitRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn split_shard_ids(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| request.shard_to_split)
            .collect()
    }
}

#[async_trait]
impl Client for MockClient {
    async fn describe_stream(&self, stream_name: &str) -> Result<DescribeStreamOutput> {
        if stream_name != self.stream_name {
            anyhow::bail!("Stream {stream_name} not found");
        }

        Ok(DescribeStreamOutput {
            shards: self.shards.clone(),
        })
    }

    async fn split_shard(&self, request: SplitRequest) -> Result<()> {
        if self.fail_on.as_deref() == Some(request.shard_to_split.as_str()) {
            anyhow::bail!("LimitExceededException: shard {}", request.shard_to_split);
        }

        self.requests.lock().unwrap().push(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_records_split_requests() {
        let client = MockClient::new("orders", [("shard_0", "0", "100")]);

        let output = client.describe_stream("orders").await.unwrap();
        assert_eq!(output.shards.len(), 1);

        let request = SplitRequest::halve("orders", &output.shards[0]).unwrap();
        client.split_shard(request.clone()).await.unwrap();
        assert_eq!(client.requests(), vec![request]);
    }

    #[tokio::test]
    async fn it_fails_on_the_given_shard() {
        let client =
            MockClient::new("orders", [("shard_0", "0", "100")]).fail_on("shard_0");

        let output = client.describe_stream("orders").await.unwrap();
        let request = SplitRequest::halve("orders", &output.shards[0]).unwrap();
        assert!(client.split_shard(request).await.is_err());
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn it_fails_to_describe_unknown_stream() {
        let client = MockClient::new("orders", [("shard_0", "0", "100")]);
        assert!(client.describe_stream("payments").await.is_err());
    }
}
