use crate::error::{Error, Result};

use aws_sdk_kinesis::types;

/// A shard as reported by `DescribeStream`. Hash keys are kept as the decimal
/// strings the API returns until the range is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    id: String,
    starting_hash_key: String,
    ending_hash_key: String,
}

impl Shard {
    pub fn new<S, T, U>(id: S, starting_hash_key: T, ending_hash_key: U) -> Self
    where
        S: Into<String>,
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            id: id.into(),
            starting_hash_key: starting_hash_key.into(),
            ending_hash_key: ending_hash_key.into(),
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn starting_hash_key(&self) -> &str {
        self.starting_hash_key.as_str()
    }

    pub fn ending_hash_key(&self) -> &str {
        self.ending_hash_key.as_str()
    }

    pub fn is(&self, shard_id: &str) -> bool {
        self.id.eq_ignore_ascii_case(shard_id)
    }

    pub fn hash_key_range(&self) -> Result<HashKeyRange> {
        HashKeyRange::parse(&self.starting_hash_key, &self.ending_hash_key)
    }
}

impl From<types::Shard> for Shard {
    fn from(shard: types::Shard) -> Self {
        let (starting_hash_key, ending_hash_key) = shard
            .hash_key_range
            .map(|range| (range.starting_hash_key, range.ending_hash_key))
            .unwrap_or_default();

        Self {
            id: shard.shard_id,
            starting_hash_key,
            ending_hash_key,
        }
    }
}

/// Inclusive range of the 128-bit hash key space owned by a shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashKeyRange {
    start: u128,
    end: u128,
}

impl HashKeyRange {
    pub fn new(start: u128, end: u128) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidHashKeyRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_hash_key(start)?, parse_hash_key(end)?)
    }

    pub fn start(&self) -> u128 {
        self.start
    }

    pub fn end(&self) -> u128 {
        self.end
    }

    /// `floor((start + end) / 2)` without overflowing when both ends are near `u128::MAX`.
    pub fn midpoint(&self) -> u128 {
        self.start + (self.end - self.start) / 2
    }
}

fn parse_hash_key(key: &str) -> Result<u128> {
    key.trim()
        .parse::<u128>()
        .map_err(|_| Error::InvalidHashKey(key.into()))
}
