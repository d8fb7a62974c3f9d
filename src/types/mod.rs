mod shard;
mod split;

pub use shard::{HashKeyRange, Shard};
pub use split::SplitRequest;
