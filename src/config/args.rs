use clap::Parser;

pub const DEFAULT_WAIT_SECS: u64 = 30;

/// Split every shard of a Kinesis stream in half, or only the named one.
#[derive(Debug, Clone, Parser)]
#[command(name = "kinesis-splitter", version, about)]
pub struct Args {
    /// Name of the stream to split
    pub stream_name: String,

    /// AWS access key id; the default credential chain is used when omitted
    pub access_key: Option<String>,

    /// AWS secret access key
    pub secret_key: Option<String>,

    /// Only split the shard with this id (compared case-insensitively)
    pub shard_id: Option<String>,

    /// Seconds to wait after each split
    #[arg(long, default_value_t = DEFAULT_WAIT_SECS)]
    pub wait: u64,

    /// Only split this shard, using the default credential chain
    #[arg(long, conflicts_with = "shard_id")]
    pub shard: Option<String>,

    /// AWS region, overriding the one resolved from the environment
    #[arg(long)]
    pub region: Option<String>,

    /// Alternate Kinesis endpoint, e.g. a local emulator
    #[arg(long)]
    pub endpoint_url: Option<String>,
}
