use super::Shard;
use crate::error::Result;

/// Arguments of a single `SplitShard` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRequest {
    pub stream_name: String,
    pub shard_to_split: String,
    pub new_starting_hash_key: String,
}

impl SplitRequest {
    /// Builds a request splitting `shard` at the midpoint of its hash key range.
    pub fn halve(stream_name: &str, shard: &Shard) -> Result<Self> {
        let range = shard.hash_key_range()?;

        Ok(Self {
            stream_name: stream_name.into(),
            shard_to_split: shard.id().into(),
            new_starting_hash_key: range.midpoint().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn it_halves_a_shard() {
        let shard = Shard::new("shardId-000000000000", "0", "100");
        let request = SplitRequest::halve("orders", &shard).unwrap();

        assert_eq!(
            request,
            SplitRequest {
                stream_name: "orders".into(),
                shard_to_split: "shardId-000000000000".into(),
                new_starting_hash_key: "50".into(),
            }
        );
    }

    #[test]
    fn it_returns_err_if_shard_has_invalid_range() {
        let shard = Shard::new("shardId-000000000000", "", "");
        let result = SplitRequest::halve("orders", &shard);
        assert!(matches!(result, Err(Error::InvalidHashKey(_))));
    }
}
