use crate::client::{Client, DescribeStreamOutput};
use crate::error::{Error, Result};
use crate::types::SplitRequest;

use std::{future::Future, sync::Arc, time::Duration};
use tokio::time;
use tracing::{info, warn};

/// Shards handled by one run, in the order they were processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub split: Vec<SplitRequest>,
    pub skipped: Vec<String>,
}

/// Splits the shards of a stream one at a time, pausing after each split so the
/// stream can finish resharding before the next call.
#[derive(Clone)]
pub struct ShardSplitter {
    client: Arc<dyn Client>,
    wait: Duration,
}

impl ShardSplitter {
    pub fn new(client: Arc<dyn Client>, wait: Duration) -> Self {
        Self { client, wait }
    }

    /// Halves every shard of `stream_name`, or only the one matching `target_shard_id`.
    ///
    /// The first failure ends the run; shards split before it stay split. `interrupt`
    /// is raced against each pause and aborts the run when it completes first.
    pub async fn split<F>(
        &self,
        stream_name: &str,
        target_shard_id: Option<&str>,
        interrupt: F,
    ) -> Result<SplitReport>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(interrupt);

        let DescribeStreamOutput { shards } = self.client.describe_stream(stream_name).await?;
        info!(
            "Splitting the stream [{stream_name}], there are [{}] shards to split.",
            shards.len()
        );

        let mut report = SplitReport::default();

        for shard in shards {
            if let Some(target) = target_shard_id {
                if !shard.is(target) {
                    info!("Ignoring the shard [{}]", shard.id());
                    report.skipped.push(shard.id().into());
                    continue;
                }
            }

            let request = SplitRequest::halve(stream_name, &shard)?;
            info!(
                "Processing the shard [{}], StartKey [{}] EndKey [{}] - NewStartKey [{}]",
                shard.id(),
                shard.starting_hash_key(),
                shard.ending_hash_key(),
                request.new_starting_hash_key
            );

            self.client.split_shard(request.clone()).await?;
            info!("Split succeeded for the shard [{}]", shard.id());
            report.split.push(request);

            tokio::select! {
                _ = time::sleep(self.wait) => {}
                _ = &mut interrupt => {
                    return Err(Error::Interrupted(shard.id().into()));
                }
            }
        }

        if let Some(target) = target_shard_id {
            if report.split.is_empty() {
                warn!("The shard [{target}] was not found in the stream [{stream_name}]");
            }
        }

        info!("Done!");
        Ok(report)
    }
}
