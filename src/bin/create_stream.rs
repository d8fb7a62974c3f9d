use aws_sdk_kinesis::{config::Builder as ConfigBuilder, Client};
use kinesis_splitter::ENV_KINESIS_ENDPOINT_URL;
use std::env;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

const STREAM: &str = "People";
const SHARD_COUNT: i32 = 2;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let url = env::var(ENV_KINESIS_ENDPOINT_URL).expect("env KINESIS_ENDPOINT_URL is required");
    let stream_name = env::args().nth(1).unwrap_or_else(|| STREAM.into());
    let shard_count = env::args()
        .nth(2)
        .and_then(|n| n.parse::<i32>().ok())
        .unwrap_or(SHARD_COUNT);

    let config = ConfigBuilder::from(&aws_config::load_from_env().await)
        .endpoint_url(url)
        .build();
    let client = Client::from_conf(config);

    if let Err(err) = client
        .create_stream()
        .stream_name(&stream_name)
        .shard_count(shard_count)
        .send()
        .await
    {
        error!("{:#?}", err);
        return;
    }

    match client.describe_stream().stream_name(&stream_name).send().await {
        Ok(output) => {
            if let Some(description) = output.stream_description {
                for shard in description.shards {
                    info!(
                        "Shard: {} {:?}",
                        shard.shard_id, shard.hash_key_range
                    );
                }
            }
        }
        Err(err) => {
            error!("{:#?}", err);
        }
    }
}
